use std::fmt;

use crate::languages::UiLanguage;
use crate::tools::Tool;

/// Custom error type for promptkit operations
/// Implements Clone for sending through channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Free text was empty after trimming
    EmptyInput
  , /// Multi-target tool submitted with no selector chosen
    NoTargetSelected
  , /// Endpoint answered but carried no generated text
    EmptyResponse
  , /// Transport error, non-2xx status or unreadable body
    NetworkOrAuthFailure(String)
  , /// Configured key variable is unset; a configuration-time check,
    /// submissions report a missing key as `NetworkOrAuthFailure`
    MissingApiKey(String)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Tool name did not match any known tool
    UnknownTool(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// Localized message the given tool shows for this error.
    ///
    /// Configuration failures share the "check your key or network"
    /// wording since the user can't tell them apart from auth errors.
    pub fn user_message(&self, tool: Tool, lang: UiLanguage)
      -> &'static str
    {   match self
        {   Error::EmptyInput => empty_input_message(tool, lang)
          , Error::NoTargetSelected => no_target_message(lang)
          , Error::EmptyResponse => empty_response_message(tool, lang)
          , Error::NetworkOrAuthFailure(_)
          | Error::MissingApiKey(_)
          | Error::InvalidConfiguration(_)
          | Error::UnknownTool(_)
          | Error::Other(_) => call_failed_message(lang)
        }
    }
}

fn empty_input_message(tool: Tool, lang: UiLanguage) -> &'static str
{   match (tool, lang)
    {   (Tool::OutlineGenerator, UiLanguage::ZhCn) => "请输入标题"
      , (Tool::OutlineGenerator, UiLanguage::ZhTw) => "請輸入標題"
      , (Tool::OutlineGenerator, UiLanguage::En) => "Please enter a title"
      , (Tool::OutlineGenerator, UiLanguage::Fr) =>
          "Veuillez entrer un titre"
      , (Tool::OutlineGenerator, UiLanguage::Es) =>
          "Por favor ingresa un título"
      , (Tool::CodeGenerator, UiLanguage::ZhCn) => "请输入功能描述"
      , (Tool::CodeGenerator, UiLanguage::ZhTw) => "請輸入功能描述"
      , (Tool::CodeGenerator, UiLanguage::En) =>
          "Please enter a description"
      , (Tool::CodeGenerator, UiLanguage::Fr) =>
          "Veuillez entrer une description"
      , (Tool::CodeGenerator, UiLanguage::Es) =>
          "Por favor ingresa una descripción"
      , (Tool::CodeReview | Tool::UnitTestGenerator, UiLanguage::ZhCn) =>
          "请输入代码"
      , (Tool::CodeReview | Tool::UnitTestGenerator, UiLanguage::ZhTw) =>
          "請輸入程式碼"
      , (Tool::CodeReview | Tool::UnitTestGenerator, UiLanguage::En) =>
          "Please enter some code"
      , (Tool::CodeReview | Tool::UnitTestGenerator, UiLanguage::Fr) =>
          "Veuillez entrer du code"
      , (Tool::CodeReview | Tool::UnitTestGenerator, UiLanguage::Es) =>
          "Por favor ingresa código"
      , (Tool::Translator, UiLanguage::ZhCn) => "请输入内容"
      , (Tool::Translator, UiLanguage::ZhTw) => "請輸入內容"
      , (Tool::Translator, UiLanguage::En) => "Please enter content"
      , (Tool::Translator, UiLanguage::Fr) => "Veuillez entrer du contenu"
      , (Tool::Translator, UiLanguage::Es) =>
          "Por favor ingresa contenido"
    }
}

// Only the translator has targets to select
fn no_target_message(lang: UiLanguage) -> &'static str
{   match lang
    {   UiLanguage::ZhCn => "请至少选择一个目标语言"
      , UiLanguage::ZhTw => "請至少選擇一個目標語言"
      , UiLanguage::En => "Please select at least one target language"
      , UiLanguage::Fr =>
          "Veuillez sélectionner au moins une langue cible"
      , UiLanguage::Es => "Selecciona al menos un idioma de destino"
    }
}

fn empty_response_message(tool: Tool, lang: UiLanguage) -> &'static str
{   match (tool, lang)
    {   (Tool::Translator, UiLanguage::ZhCn) => "翻译失败，请稍后再试"
      , (Tool::Translator, UiLanguage::ZhTw) => "翻譯失敗，請稍後再試"
      , (Tool::Translator, UiLanguage::En) =>
          "Translation failed, please try again later"
      , (Tool::Translator, UiLanguage::Fr) =>
          "La traduction a échoué. Réessayez plus tard"
      , (Tool::Translator, UiLanguage::Es) =>
          "La traducción falló. Inténtalo más tarde"
      , (_, UiLanguage::ZhCn) => "生成失败，请稍后再试"
      , (_, UiLanguage::ZhTw) => "生成失敗，請稍後再試"
      , (_, UiLanguage::En) => "Generation failed, please try again later"
      , (_, UiLanguage::Fr) => "Échec de la génération. Réessayez plus tard"
      , (_, UiLanguage::Es) => "La generación falló. Inténtalo más tarde"
    }
}

fn call_failed_message(lang: UiLanguage) -> &'static str
{   match lang
    {   UiLanguage::ZhCn => "调用失败，请检查 API Key 或网络"
      , UiLanguage::ZhTw => "呼叫失敗，請檢查 API Key 或網路"
      , UiLanguage::En =>
          "API call failed. Check your API Key and network"
      , UiLanguage::Fr =>
          "Échec de l'appel API. Vérifiez votre clé API"
      , UiLanguage::Es => "Error de API. Verifica tu clave y conexión"
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::EmptyInput => {
              write!(f, "Input is empty")
            }
          , Error::NoTargetSelected => {
              write!(f, "No target selected")
            }
          , Error::EmptyResponse => {
              write!(f, "API response contained no generated text")
            }
          , Error::NetworkOrAuthFailure(msg) => {
              write!(f, "Network or auth failure: {}", msg)
            }
          , Error::MissingApiKey(var) => {
              write!(f, "API key variable not set: {}", var)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::UnknownTool(name) => {
              write!(f, "Unknown tool: {}", name)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}
