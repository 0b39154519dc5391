use std::collections::HashMap;
use tokio::sync::mpsc;
use log::{debug, error, info, warn};
use crate::PromptKitFoot;

/// Backend state: one orchestrator per tool, built on first use,
/// all sharing the provider client
pub struct PromptKitBackendState
{   pub config: crate::PromptKitConfig
  , client: crate::providers::ChatCompletionClient
  , orchestrators
      : HashMap<crate::Tool, crate::RequestOrchestrator>
}

impl PromptKitBackendState
{   pub fn new(
      config: crate::PromptKitConfig
    , api_key: Option<String>
    ) -> Result<Self, crate::error::Error>
    {   debug!("Initializing PromptKitBackendState");
        let client
          = crate::providers::ChatCompletionClient::new(
              &config.provider,
              api_key
            )?;

        Ok(PromptKitBackendState
        {   config
          , client
          , orchestrators: HashMap::new()
        })
    }

    /// The tool's orchestrator, created with the current client if
    /// this is the tool's first submission
    fn orchestrator(
      &mut self
    , tool: crate::Tool
    ) -> &mut crate::RequestOrchestrator
    {   let config = &self.config;
        let client = &self.client;
        self.orchestrators.entry(tool).or_insert_with(|| {
          debug!("Creating orchestrator for {}", tool);
          let profile = tool.profile();
          let model = config.provider
            .effective_model(profile.model)
            .to_string();
          crate::RequestOrchestrator::new(
            profile,
            client.clone(),
            model
          )
        })
    }

    fn set_api_key(&mut self, key: String)
    {   for orchestrator in self.orchestrators.values_mut()
        {   orchestrator.set_api_key(key.clone());
        }
        self.client.set_api_key(key);
    }

    fn tool_infos(&self) -> Vec<crate::ToolInfo>
    {   crate::Tool::ALL
          .iter()
          .map(|tool| {
            let profile = tool.profile();
            crate::ToolInfo
            {   tool: *tool
              , model: self.config.provider
                  .effective_model(profile.model)
                  .to_string()
              , temperature: profile.temperature
              , multi_target: profile.multi_target
              , selectors: tool.selectors()
                  .into_iter()
                  .map(String::from)
                  .collect()
            }
          })
          .collect()
    }
}

/// Public API for the promptkit backend - owns the task
pub struct PromptKitBackend
{   hand: crate::PromptKitHand
  , _task_handle: tokio::task::JoinHandle<()>
}

impl PromptKitBackend
{   /// Create and spawn a new backend.
    /// Returns immediately - spawns background task
    pub fn new(
      config: crate::PromptKitConfig
    , api_key: Option<String>
    ) -> Result<Self, crate::error::Error>
    {   debug!("Creating PromptKitBackend with task ownership");

        // Build state up front so configuration errors surface here
        let state = PromptKitBackendState::new(config, api_key)?;

        let (submit_tx, submit_rx)
          = mpsc::unbounded_channel();
        let (set_api_key_tx, set_api_key_rx)
          = mpsc::unbounded_channel();
        let (list_tools_tx, list_tools_rx)
          = mpsc::unbounded_channel();
        let (kill_process_tx, kill_process_rx)
          = mpsc::unbounded_channel();

        let hand = crate::PromptKitHand
        {   submit_tx
          , set_api_key_tx
          , list_tools_tx
          , kill_process_tx
        };

        let foot = crate::PromptKitFoot
        {   submit_rx
          , set_api_key_rx
          , list_tools_rx
          , kill_process_rx
        };

        let _task_handle = tokio::spawn(async move {
          run_backend_loop(foot, state).await
        });

        Ok(PromptKitBackend
        {   hand
          , _task_handle
        })
    }

    /// Build from config, taking the key from the configured
    /// environment variable
    pub fn from_env(
      config: crate::PromptKitConfig
    ) -> Result<Self, crate::error::Error>
    {   let api_key = config.provider.api_key_from_env();
        PromptKitBackend::new(config, api_key)
    }

    /// Queue a submission - returns almost immediately
    pub async fn submit(
      &self
    , request: crate::SubmitRequest
    ) -> Result<
        mpsc::UnboundedReceiver<crate::SubmitReply>,
        crate::error::Error
      >
    {   debug!("submit queuing command for tool: {}", request.tool);
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::SubmitArgs
        {   request
          , reply: reply_tx
        };

        self.hand.submit_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Queue a submission and wait for its reply
    pub async fn submit_and_wait(
      &self
    , request: crate::SubmitRequest
    ) -> crate::SubmitReply
    {   let tool = request.tool;
        let mut rx = self.submit(request)
          .await
          .map_err(|e| crate::SubmitFailure::new(tool, e))?;
        rx.recv().await.unwrap_or_else(|| {
          error!("Backend dropped submit reply");
          Err(crate::SubmitFailure::new(
            tool,
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          ))
        })
    }

    /// Replace the API key for all tools - returns almost immediately
    pub async fn set_api_key(
      &self
    , key: String
    ) -> Result<
        mpsc::UnboundedReceiver<crate::SetApiKeyReply>,
        crate::error::Error
      >
    {   debug!("set_api_key queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::SetApiKeyArgs
        {   key
          , reply: reply_tx
        };

        self.hand.set_api_key_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// List tools - returns almost immediately
    pub async fn list_tools(
      &self
    ) -> Result<
        mpsc::UnboundedReceiver<crate::ListToolsReply>,
        crate::error::Error
      >
    {   debug!("list_tools queuing command");
        let (reply_tx, reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::ListToolsArgs
        {   reply: reply_tx
        };

        self.hand.list_tools_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel closed");
            crate::error::Error::Other(
              "Backend disconnected".to_string()
            )
          })?;

        Ok(reply_rx)
    }

    /// Gracefully shutdown the backend
    pub async fn shutdown(self)
      -> Result<(), crate::error::Error>
    {   debug!("Shutting down PromptKitBackend");
        let (reply_tx, mut reply_rx)
          = mpsc::unbounded_channel();

        let cmd = crate::KillProcessArgs
        {   reply: reply_tx
        };

        self.hand.kill_process_tx
          .send(cmd)
          .map_err(|_| {
            error!("Backend channel already closed");
            crate::error::Error::Other(
              "Backend already shutdown".to_string()
            )
          })?;

        // Wait for shutdown confirmation
        if let Some(result) = reply_rx.recv().await
        {   debug!("Backend shutdown confirmed");
            result
        } else
        {   error!("Backend shutdown reply dropped");
            Err(crate::error::Error::Other(
              "Backend shutdown reply dropped".to_string()
            ))
        }
    }
}

/// Main backend event loop
///
/// Submissions are awaited inside their select arm, so the backend
/// runs at most one submission at a time across all tools.
async fn run_backend_loop(
  foot: crate::PromptKitFoot
, mut state: PromptKitBackendState
)
{   debug!("Starting PromptKitBackend event loop");
    let PromptKitFoot
    {   mut submit_rx
      , mut set_api_key_rx
      , mut list_tools_rx
      , mut kill_process_rx
    } = foot;

    loop
    { tokio::select!
      { Some(cmd) = submit_rx.recv() => {
          let crate::SubmitArgs { request, reply } = cmd;
          debug!("Received Submit for tool: {}", request.tool);

          let orchestrator = state.orchestrator(request.tool);
          let result = orchestrator
            .submit(&request.input, &request.selectors)
            .await
            .map_err(|error| crate::SubmitFailure
            {   tool: request.tool
              , error
              , partial: orchestrator.state().outputs().to_vec()
            });
          if reply.send(result).is_err()
          {   warn!("Submit reply receiver dropped");
          }
        }
      , Some(cmd) = set_api_key_rx.recv() => {
          debug!("Received SetApiKey");
          let result = if cmd.key.trim().is_empty()
          {   Err(crate::error::Error::InvalidConfiguration(
                "API key is empty".to_string()
              ))
          } else
          {   state.set_api_key(cmd.key);
              Ok(())
          };
          let _ = cmd.reply.send(result);
        }
      , Some(cmd) = list_tools_rx.recv() => {
          debug!("Received ListTools");
          let _ = cmd.reply.send(Ok(state.tool_infos()));
        }
      , Some(cmd) = kill_process_rx.recv() => {
          debug!("Received KillProcess");
          let _ = cmd.reply.send(Ok(()));
          info!("PromptKitBackend shutting down");
          break;
        }
      , else => {
          debug!("All command channels closed");
          break;
        }
      }
    }
}
