//! Configuration for the chat-completion provider
//!
//! The API key is never stored in the config file itself, only the
//! name of the environment variable that holds it.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::tools::ModelClass;

/// Environment variable read for the key when none is configured
pub const DEFAULT_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig
{   /// Which provider's defaults to start from
    #[serde(default)]
    pub provider: crate::Provider
  , /// API base URL (if custom)
    #[serde(default)]
    pub api_base: Option<String>
  , /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String
  , /// Model for the writing and translation tools
    #[serde(default)]
    pub chat_model: Option<String>
  , /// Model for the code tools
    #[serde(default)]
    pub coder_model: Option<String>
  , /// Request timeout in seconds; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>
}

fn default_api_key_env() -> String
{   DEFAULT_API_KEY_ENV.to_string()
}

impl Default for ProviderConfig
{   fn default() -> Self
    {   ProviderConfig
        {   provider: crate::Provider::default()
          , api_base: None
          , api_key_env: default_api_key_env()
          , chat_model: None
          , coder_model: None
          , timeout_secs: None
        }
    }
}

impl ProviderConfig
{   pub fn effective_api_base(&self) -> &str
    {   self.api_base
          .as_deref()
          .filter(|u| !u.is_empty())
          .unwrap_or(self.provider.default_api_base())
    }

    pub fn effective_model(&self, class: ModelClass) -> &str
    {   let configured = match class
        {   ModelClass::Chat => self.chat_model.as_deref()
          , ModelClass::Coder => self.coder_model.as_deref()
        };
        configured
          .filter(|m| !m.is_empty())
          .unwrap_or(self.provider.default_model(class))
    }

    /// Read the key from the configured environment variable
    pub fn require_api_key(&self) -> Result<String, crate::error::Error>
    {   match std::env::var(&self.api_key_env)
        {   Ok(key) if !key.trim().is_empty() => {
              debug!("API key loaded from {}", self.api_key_env);
              Ok(key)
            }
          , _ => Err(crate::error::Error::MissingApiKey(
              self.api_key_env.clone()
            ))
        }
    }

    /// Like `require_api_key`, but a missing key only logs a warning
    pub fn api_key_from_env(&self) -> Option<String>
    {   self.require_api_key()
          .map_err(|e| warn!("{}", e))
          .ok()
    }
}

/// promptkit configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptKitConfig
{   /// Chat-completion provider
    #[serde(default)]
    pub provider: ProviderConfig
}

impl PromptKitConfig
{   /// Load a JSON config file
    pub fn load(path: &Path)
      -> Result<PromptKitConfig, crate::error::Error>
    {   debug!("Loading config from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("{}: {}", path.display(), e)
          )
        })?;
        serde_json::from_str(&content).map_err(|e| {
          crate::error::Error::InvalidConfiguration(
            format!("{}: {}", path.display(), e)
          )
        })
    }
}
