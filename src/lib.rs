pub mod error;
pub mod config;
pub mod languages;
pub mod templates;
pub mod tools;
pub mod providers;
pub mod request;
pub mod orchestrator;
pub mod render;
pub mod client;

pub use client::PromptKitBackend;
pub use config::{PromptKitConfig, ProviderConfig};
pub use error::Error;
pub use languages::UiLanguage;
pub use orchestrator::{RequestOrchestrator, SessionState};
pub use request::{SelectorResult, Submission, SubmitFailure, SubmitRequest};
pub use tools::{ModelClass, Tool, ToolProfile};

use serde::{Deserialize, Serialize};

/*

promptkit: the AI writing and coding tools (outline generator, code
review, code generator, unit-test generator, translator) behind one
trusted backend. Every tool is the same validate -> template -> call ->
display loop, so there is one orchestrator and one profile per tool.

promptkit/
├── Cargo.toml
├── src/
│   ├── lib.rs            # Re-exports and backend channel types
│   ├── error.rs          # Error taxonomy and user-facing messages
│   ├── config.rs         # Provider configuration
│   ├── languages.rs      # UI, target and code language catalogs
│   ├── templates.rs      # Prompt templates
│   ├── tools.rs          # Tool enum and per-tool profiles
│   ├── request.rs        # Submission request/result types
│   ├── providers/        # Chat-completion HTTP client
│   ├── orchestrator.rs   # validate -> template -> call loop
│   ├── render.rs         # Plain text / escaped HTML output
│   ├── client.rs         # Backend task owning the orchestrators
│   └── bin/promptkit.rs  # Command line front end
└── tests/

*/

/// PROMPTKIT API INTERFACE:

// ===== Submit =====

pub type SubmitReply = Result<Submission, SubmitFailure>;
pub type SubmitReplySender
  = tokio::sync::mpsc::UnboundedSender<SubmitReply>;

pub struct SubmitArgs
{   pub request: SubmitRequest
  , pub reply: SubmitReplySender
}

// ===== SetApiKey =====

pub type SetApiKeyReply = Result<(), crate::error::Error>;
pub type SetApiKeyReplySender
  = tokio::sync::mpsc::UnboundedSender<SetApiKeyReply>;

pub struct SetApiKeyArgs
{   pub key: String
  , pub reply: SetApiKeyReplySender
}

// ===== ListTools =====

pub type ListToolsReply
  = Result<Vec<ToolInfo>, crate::error::Error>;
pub type ListToolsReplySender
  = tokio::sync::mpsc::UnboundedSender<ListToolsReply>;

pub struct ListToolsArgs
{   pub reply: ListToolsReplySender
}

// ===== KillProcess =====

pub type KillProcessReply = Result<(), crate::error::Error>;
pub type KillProcessReplySender
  = tokio::sync::mpsc::UnboundedSender<KillProcessReply>;

pub struct KillProcessArgs
{   pub reply: KillProcessReplySender
}

// ===== PromptKitHand (sender side) =====

pub struct PromptKitHand
{   pub submit_tx
      : tokio::sync::mpsc::UnboundedSender<SubmitArgs>
  , pub set_api_key_tx
      : tokio::sync::mpsc::UnboundedSender<SetApiKeyArgs>
  , pub list_tools_tx
      : tokio::sync::mpsc::UnboundedSender<ListToolsArgs>
  , pub kill_process_tx
      : tokio::sync::mpsc::UnboundedSender<KillProcessArgs>
}

// ===== PromptKitFoot (receiver side) =====

pub struct PromptKitFoot
{   pub submit_rx
      : tokio::sync::mpsc::UnboundedReceiver<SubmitArgs>
  , pub set_api_key_rx
      : tokio::sync::mpsc::UnboundedReceiver<SetApiKeyArgs>
  , pub list_tools_rx
      : tokio::sync::mpsc::UnboundedReceiver<ListToolsArgs>
  , pub kill_process_rx
      : tokio::sync::mpsc::UnboundedReceiver<KillProcessArgs>
}

/// PROMPTKIT STRUCTURES:

/// Chat-completion providers with an OpenAI-compatible endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Hash, Default)]
pub enum Provider
{   /// DeepSeek (deepseek-chat, deepseek-coder)
    #[default]
    DeepSeek
  , /// OpenAI (GPT models)
    OpenAI
  , /// Mistral AI (Mistral, Codestral)
    MistralAi
}

impl Provider
{   pub fn default_api_base(self) -> &'static str
    {   match self
        {   Provider::DeepSeek => "https://api.deepseek.com/v1"
          , Provider::OpenAI => "https://api.openai.com/v1"
          , Provider::MistralAi => "https://api.mistral.ai/v1"
        }
    }

    pub fn default_model(self, class: ModelClass) -> &'static str
    {   match (self, class)
        {   (Provider::DeepSeek, ModelClass::Chat) => "deepseek-chat"
          , (Provider::DeepSeek, ModelClass::Coder) => "deepseek-coder"
          , (Provider::OpenAI, _) => "gpt-4o-mini"
          , (Provider::MistralAi, ModelClass::Chat) =>
              "mistral-small-latest"
          , (Provider::MistralAi, ModelClass::Coder) =>
              "codestral-latest"
        }
    }
}

/// What the backend reports for each tool it serves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolInfo
{   pub tool: Tool
  , /// Model the tool's calls go to
    pub model: String
  , pub temperature: f32
  , pub multi_target: bool
  , /// Selectors offered by the tool
    pub selectors: Vec<String>
}
