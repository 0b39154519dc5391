//! Request orchestration: validate, render prompts, call the endpoint
//! once per selector, and keep the per-tool session state.

use log::{debug, info, warn, error};

use crate::error::Error;
use crate::providers::chat_completions::{
  ChatCompletionClient, ChatCompletionRequest, ChatMessage
};
use crate::request::{SelectorResult, Submission};
use crate::tools::ToolProfile;

/// What a tool's page would show between submissions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState
{   outputs: Vec<SelectorResult>
  , error: Option<Error>
}

impl SessionState
{   pub fn outputs(&self) -> &[SelectorResult]
    {   &self.outputs
    }

    pub fn output(&self, selector: &str) -> Option<&Result<String, Error>>
    {   self.outputs
          .iter()
          .find(|r| r.selector == selector)
          .map(|r| &r.result)
    }

    pub fn error(&self) -> Option<&Error>
    {   self.error.as_ref()
    }

    fn reset(&mut self)
    {   self.outputs.clear();
        self.error = None;
    }
}

/// Generic orchestrator; the profile decides which tool it is
pub struct RequestOrchestrator
{   profile: &'static ToolProfile
  , client: ChatCompletionClient
  , model: String
  , state: SessionState
}

impl RequestOrchestrator
{   pub fn new(
      profile: &'static ToolProfile
    , client: ChatCompletionClient
    , model: impl Into<String>
    ) -> Self
    {   let model = model.into();
        debug!(
          "Creating orchestrator for {} using {}",
          profile.tool, model
        );
        RequestOrchestrator
        {   profile
          , client
          , model
          , state: SessionState::default()
        }
    }

    pub fn profile(&self) -> &'static ToolProfile
    {   self.profile
    }

    pub fn state(&self) -> &SessionState
    {   &self.state
    }

    pub fn set_api_key(&mut self, key: String)
    {   self.client.set_api_key(key);
    }

    /// One prompt per selector to call, in call order
    pub fn build_prompts(
      &self
    , input: &str
    , selectors: &[String]
    ) -> Vec<(String, String)>
    {   let chosen: Vec<&str> = if self.profile.multi_target
        {   selectors.iter().map(String::as_str).collect()
        } else
        {   if selectors.len() > 1
            {   warn!(
                  "{} takes one selector, ignoring {} extra",
                  self.profile.tool,
                  selectors.len() - 1
                );
            }
            vec![
              selectors
                .first()
                .map(String::as_str)
                .unwrap_or(self.profile.default_selector)
            ]
        };

        chosen
          .into_iter()
          .map(|sel| {
            (sel.to_string(), (self.profile.template)(sel, input))
          })
          .collect()
    }

    fn build_request(&self, prompt: String) -> ChatCompletionRequest
    {   ChatCompletionRequest
        {   model: self.model.clone()
          , messages: vec![
              ChatMessage::system(self.profile.system_role)
            , ChatMessage::user(prompt)
            ]
          , temperature: self.profile.temperature
        }
    }

    fn validate(
      &self
    , input: &str
    , selectors: &[String]
    ) -> Result<(), Error>
    {   if input.trim().is_empty()
        {   return Err(Error::EmptyInput);
        }
        if self.profile.multi_target && selectors.is_empty()
        {   return Err(Error::NoTargetSelected);
        }
        Ok(())
    }

    /// Run one submission.
    ///
    /// Calls are made strictly one after another. A selector whose
    /// response has no text records `EmptyResponse` and the rest still
    /// run; a transport or auth failure stops the loop. Outputs stored
    /// before the failure stay in the session state.
    pub async fn submit(
      &mut self
    , input: &str
    , selectors: &[String]
    ) -> Result<Submission, Error>
    {   self.state.reset();

        if let Err(e) = self.validate(input, selectors)
        {   debug!("{} rejected submission: {}", self.profile.tool, e);
            self.state.error = Some(e.clone());
            return Err(e);
        }

        let prompts = self.build_prompts(input, selectors);
        info!(
          "{} submitting {} prompt(s)",
          self.profile.tool,
          prompts.len()
        );

        for (selector, prompt) in prompts
        {   let request = self.build_request(prompt);
            match self.client.complete(&request).await
            {   Ok(completion) => {
                  let result = completion.content
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .ok_or(Error::EmptyResponse);
                  if result.is_err()
                  {   warn!("No generated text for {}", selector);
                  }
                  self.state.outputs.push(SelectorResult
                  {   selector
                    , result
                  });
                }
              , Err(e) => {
                  error!(
                    "{} aborted at {}: {}",
                    self.profile.tool, selector, e
                  );
                  self.state.error = Some(e.clone());
                  return Err(e);
                }
            }
        }

        let submission = Submission
        {   tool: self.profile.tool
          , results: self.state.outputs.clone()
        };

        if !self.profile.multi_target
        {   if let Some(Err(e)) = submission.results
              .first()
              .map(|r| &r.result)
            {   self.state.outputs.clear();
                self.state.error = Some(e.clone());
                return Err(e.clone());
            }
        }

        Ok(submission)
    }
}
