//! Tool catalog. Each tool is the generic orchestrator plus one
//! `ToolProfile`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::languages::{UiLanguage, CODE_LANGUAGES};
use crate::templates::{self, PromptTemplate};

/// Which model family a tool talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ModelClass
{   Chat
  , Coder
}

/// All tools served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Tool
{   OutlineGenerator
  , CodeReview
  , CodeGenerator
  , UnitTestGenerator
  , Translator
}

/// Everything that distinguishes one tool from another
#[derive(Clone, Copy)]
pub struct ToolProfile
{   pub tool: Tool
  , pub template: PromptTemplate
  , /// Text of the system role message
    pub system_role: &'static str
  , pub temperature: f32
  , pub model: ModelClass
  , /// One call per selector instead of exactly one call
    pub multi_target: bool
  , /// Selector used by single-target tools when none is given
    pub default_selector: &'static str
}

static OUTLINE_GENERATOR: ToolProfile = ToolProfile
{   tool: Tool::OutlineGenerator
  , template: templates::outline_prompt
  , system_role: "你是一个多语言内容创作者，擅长撰写内容营销文章。"
  , temperature: 0.7
  , model: ModelClass::Chat
  , multi_target: false
  , default_selector: "en"
};

static CODE_REVIEW: ToolProfile = ToolProfile
{   tool: Tool::CodeReview
  , template: templates::code_review_prompt
  , system_role:
      "You are a helpful assistant that reviews and refactors code."
  , temperature: 0.3
  , model: ModelClass::Coder
  , multi_target: false
  , default_selector: "Python"
};

static CODE_GENERATOR: ToolProfile = ToolProfile
{   tool: Tool::CodeGenerator
  , template: templates::code_generation_prompt
  , system_role: "You are a helpful AI code assistant."
  , temperature: 0.3
  , model: ModelClass::Coder
  , multi_target: false
  , default_selector: "Python"
};

static UNIT_TEST_GENERATOR: ToolProfile = ToolProfile
{   tool: Tool::UnitTestGenerator
  , template: templates::unit_test_prompt
  , system_role:
      "You are a helpful AI that writes unit tests for any code."
  , temperature: 0.2
  , model: ModelClass::Coder
  , multi_target: false
  , default_selector: "Python"
};

static TRANSLATOR: ToolProfile = ToolProfile
{   tool: Tool::Translator
  , template: templates::translation_prompt
  , system_role: "你是一个专业翻译助手，擅长多语言翻译。"
  , temperature: 0.5
  , model: ModelClass::Chat
  , multi_target: true
  , default_selector: "en"
};

impl Tool
{   pub const ALL: [Tool; 5] = [
      Tool::OutlineGenerator
    , Tool::CodeReview
    , Tool::CodeGenerator
    , Tool::UnitTestGenerator
    , Tool::Translator
    ];

    pub fn profile(self) -> &'static ToolProfile
    {   match self
        {   Tool::OutlineGenerator => &OUTLINE_GENERATOR
          , Tool::CodeReview => &CODE_REVIEW
          , Tool::CodeGenerator => &CODE_GENERATOR
          , Tool::UnitTestGenerator => &UNIT_TEST_GENERATOR
          , Tool::Translator => &TRANSLATOR
        }
    }

    /// Kebab-case name used on the command line
    pub fn name(self) -> &'static str
    {   match self
        {   Tool::OutlineGenerator => "outline"
          , Tool::CodeReview => "code-review"
          , Tool::CodeGenerator => "code-generator"
          , Tool::UnitTestGenerator => "unit-test"
          , Tool::Translator => "translator"
        }
    }

    /// Selectors the tool offers. Free-form selectors are still
    /// accepted by the templates.
    pub fn selectors(self) -> Vec<&'static str>
    {   match self
        {   Tool::OutlineGenerator | Tool::Translator => {
              UiLanguage::ALL.iter().map(|l| l.code()).collect()
            }
          , Tool::CodeReview
          | Tool::CodeGenerator
          | Tool::UnitTestGenerator => CODE_LANGUAGES.to_vec()
        }
    }
}

impl fmt::Debug for ToolProfile
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("ToolProfile")
          .field("tool", &self.tool)
          .field("temperature", &self.temperature)
          .field("model", &self.model)
          .field("multi_target", &self.multi_target)
          .field("default_selector", &self.default_selector)
          .finish_non_exhaustive()
    }
}

impl fmt::Display for Tool
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.name())
    }
}

impl FromStr for Tool
{   type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   let wanted = s.trim().to_ascii_lowercase();
        Tool::ALL
          .iter()
          .copied()
          .find(|t| t.name() == wanted)
          .ok_or_else(|| crate::error::Error::UnknownTool(s.to_string()))
    }
}
