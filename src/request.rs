//! Submission request and result types

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::tools::Tool;

/// One submission from a tool's form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest
{   /// Tool the text is for
    pub tool: Tool
  , /// The free text the user typed
    pub input: String
  , /// Target languages, code language, or article language
    #[serde(default)]
    pub selectors: Vec<String>
}

impl SubmitRequest
{   pub fn new(
      tool: Tool
    , input: impl Into<String>
    , selectors: Vec<String>
    ) -> Self
    {   SubmitRequest
        {   tool
          , input: input.into()
          , selectors
        }
    }
}

/// Outcome of the call made for one selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorResult
{   pub selector: String
  , /// Trimmed generated text, or `EmptyResponse`
    pub result: Result<String, Error>
}

/// Result of a submission, in selection order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission
{   pub tool: Tool
  , pub results: Vec<SelectorResult>
}

impl Submission
{   /// Text of the first selector that produced any
    pub fn text(&self) -> Option<&str>
    {   self.results
          .iter()
          .find_map(|r| r.result.as_deref().ok())
    }

    pub fn get(&self, selector: &str) -> Option<&Result<String, Error>>
    {   self.results
          .iter()
          .find(|r| r.selector == selector)
          .map(|r| &r.result)
    }
}

/// A submission the backend could not finish. Selectors answered
/// before the failure are kept in `partial`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFailure
{   pub tool: Tool
  , pub error: Error
  , pub partial: Vec<SelectorResult>
}

impl SubmitFailure
{   pub fn new(tool: Tool, error: Error) -> Self
    {   SubmitFailure
        {   tool
          , error
          , partial: vec![]
        }
    }

    /// What was answered before the failure, if anything
    pub fn partial_submission(&self) -> Option<Submission>
    {   if self.partial.is_empty()
        {   return None;
        }
        Some(Submission
        {   tool: self.tool
          , results: self.partial.clone()
        })
    }
}
