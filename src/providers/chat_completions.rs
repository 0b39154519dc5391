use std::time::Duration;

use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

use crate::config::ProviderConfig;

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   pub fn system(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.into()
        }
    }

    pub fn user(content: impl Into<String>) -> Self
    {   ChatMessage
        {   role: "user".to_string()
          , content: content.into()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub temperature: f32
}

/// Response body; every level is optional since a body without
/// generated text is a valid answer, not a parse failure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   #[serde(default)]
    pub message: Option<ResponseMessage>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage
{   #[serde(default)]
    pub content: Option<String>
}

/// Generated text of one call, if the endpoint produced any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCompletionResult
{   pub content: Option<String>
}

impl From<ChatCompletionResponse> for ChatCompletionResult
{   fn from(response: ChatCompletionResponse) -> Self
    {   let content = response.choices
          .into_iter()
          .next()
          .and_then(|c| c.message)
          .and_then(|m| m.content)
          .filter(|c| !c.is_empty());
        ChatCompletionResult { content }
    }
}

// ===== Client =====

/// HTTP client for an OpenAI-compatible chat-completion endpoint
#[derive(Debug, Clone)]
pub struct ChatCompletionClient
{   http_client: reqwest::Client
  , api_base: String
  , api_key: Option<String>
}

impl ChatCompletionClient
{   pub fn new(
      config: &ProviderConfig
    , api_key: Option<String>
    ) -> Result<Self, crate::error::Error>
    {   debug!(
          "Creating ChatCompletionClient for {:?}",
          config.provider
        );
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs
        {   builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build().map_err(|e| {
          error!("Failed to build HTTP client: {}", e);
          crate::error::Error::InvalidConfiguration(e.to_string())
        })?;

        Ok(ChatCompletionClient
        {   http_client
          , api_base: config.effective_api_base().to_string()
          , api_key
        })
    }

    pub fn set_api_key(&mut self, key: String)
    {   debug!("Setting API key");
        self.api_key = Some(key);
    }

    fn get_api_key(&self) -> Result<&str, crate::error::Error>
    {   self.api_key.as_deref().ok_or_else(|| {
          error!("No API key for {}", self.api_base);
          crate::error::Error::NetworkOrAuthFailure(
            format!("missing API key for {}", self.api_base)
          )
        })
    }

    /// Perform one call. Any transport, status or body failure maps to
    /// `NetworkOrAuthFailure`; a readable body without text is `Ok`.
    pub async fn complete(
      &self
    , request: &ChatCompletionRequest
    ) -> Result<ChatCompletionResult, crate::error::Error>
    {   debug!("Sending chat completion for: {}", request.model);

        let api_key = self.get_api_key()?;
        trace!("Chat completion request: {:?}", request);

        let response = self.http_client
          .post(format!(
            "{}/chat/completions",
            self.api_base.trim_end_matches('/')
          ))
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::NetworkOrAuthFailure(e.to_string())
          })?;

        let status = response.status();
        trace!("Chat completion response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("API error ({}): {}", status, error_text);
            return Err(crate::error::Error::NetworkOrAuthFailure(
              format!("{}: {}", status, error_text)
            ));
        }

        let chat_response: ChatCompletionResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::NetworkOrAuthFailure(e.to_string())
          })?;

        Ok(chat_response.into())
    }
}
