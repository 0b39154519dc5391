//! Prompt templates, one per tool.
//!
//! Every template is `(selector, text) -> String` and does nothing but
//! string interpolation, so the same inputs always give the same bytes.

use crate::languages;

/// Signature shared by all prompt templates
pub type PromptTemplate = fn(&str, &str) -> String;

/// Fallback label when a translation target isn't in the catalog
pub const UNKNOWN_TARGET_LABEL: &str = "目标语言";

/// Article from a title; the selector picks the article language.
/// Unrecognized languages get the Simplified Chinese prompt.
pub fn outline_prompt(lang: &str, title: &str) -> String
{   match lang
    {   "en" => format!(
          "You are a professional content marketer and writer. \
Based on the given title, write a complete, engaging, SEO-optimized \
article with a clear introduction, structured body sections with \
subheadings, and a conclusion. Use a friendly and informative tone.\
\n\nTitle: {}",
          title
        )
      , "fr" => format!(
          "Vous êtes un expert en marketing de contenu. Rédigez un \
article complet, structuré, engageant et optimisé pour le SEO basé \
sur ce titre :\n\nTitre : {}",
          title
        )
      , "es" => format!(
          "Eres un redactor experto en marketing de contenidos. \
Escribe un artículo completo, estructurado y optimizado para SEO con \
el siguiente título:\n\nTítulo: {}",
          title
        )
      , "zh-TW" => format!(
          "你是一位內容營運與行銷專家。請根據下方標題，撰寫一篇完整、有條理、\
具吸引力的文章，包含開頭、段落標題與結尾，風格親切、口語化，並優化 SEO。\
\n\n標題：{}",
          title
        )
      , _ => format!(
          "你是一位内容运营专家。请根据下面的标题，撰写一篇完整、结构清晰、\
引人入胜、适合发布在公众号或知乎的文章。文章应包含引言、正文小标题段落、\
结尾总结，语言风格亲切，适合SEO优化。\n\n标题：{}",
          title
        )
    }
}

pub fn code_review_prompt(lang: &str, code: &str) -> String
{   format!(
      "You are a senior {} developer and code reviewer. \nPlease review \
the following code and provide:\n- Suggestions for refactoring\n- Code \
smell detection\n- Potential bugs or performance issues\n- Style \
improvements\n\nCode:\n\n{}\n\n\nRespond only with the code review and \
improvement suggestions in markdown format.",
      lang, code
    )
}

pub fn code_generation_prompt(lang: &str, description: &str) -> String
{   format!(
      "You are a senior {} developer. Write code that does the \
following:\n\n\"{}\"\n\nOnly return code. No explanation.",
      lang, description
    )
}

pub fn unit_test_prompt(lang: &str, code: &str) -> String
{   format!(
      "You are a senior {} developer. Given the following code, \
generate comprehensive unit tests using best practices.\n\nCode:\n{}\
\n\nOnly output test code. No explanation.",
      lang, code
    )
}

/// Translation into the language named by `target` (a language code)
pub fn translation_prompt(target: &str, text: &str) -> String
{   let label = languages::target_label(target)
      .unwrap_or(UNKNOWN_TARGET_LABEL);
    format!("请将以下内容翻译成 {}：\n\n{}", label, text)
}
