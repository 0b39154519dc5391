//! Language catalogs: UI languages, translation targets and the
//! programming languages offered to the code tools.

use serde::{Deserialize, Serialize};

/// Language the tool's messages are shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum UiLanguage
{   ZhCn
  , ZhTw
  , En
  , Fr
  , Es
}

impl UiLanguage
{   pub const ALL: [UiLanguage; 5] = [
      UiLanguage::ZhCn
    , UiLanguage::ZhTw
    , UiLanguage::En
    , UiLanguage::Fr
    , UiLanguage::Es
    ];

    pub fn code(self) -> &'static str
    {   match self
        {   UiLanguage::ZhCn => "zh-CN"
          , UiLanguage::ZhTw => "zh-TW"
          , UiLanguage::En => "en"
          , UiLanguage::Fr => "fr"
          , UiLanguage::Es => "es"
        }
    }

    /// Native label, also used inside translation prompts
    pub fn label(self) -> &'static str
    {   match self
        {   UiLanguage::ZhCn => "简体中文"
          , UiLanguage::ZhTw => "繁體中文"
          , UiLanguage::En => "English"
          , UiLanguage::Fr => "Français"
          , UiLanguage::Es => "Español"
        }
    }

    pub fn from_code(code: &str) -> Option<UiLanguage>
    {   UiLanguage::ALL
          .iter()
          .copied()
          .find(|l| l.code() == code)
    }
}

impl Default for UiLanguage
{   fn default() -> Self
    {   UiLanguage::En
    }
}

/// Label for a translation target, if the code is in the catalog
pub fn target_label(code: &str) -> Option<&'static str>
{   UiLanguage::from_code(code).map(UiLanguage::label)
}

/// Programming languages offered by the code tools
pub const CODE_LANGUAGES: [&str; 9] = [
  "Python"
, "JavaScript"
, "TypeScript"
, "Java"
, "C++"
, "Go"
, "Rust"
, "PHP"
, "Ruby"
];
