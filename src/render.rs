//! Turning submissions into something a front end can display.
//!
//! Model output is untrusted. It is shown as plain text, and the HTML
//! form escapes it before adding line breaks.

use crate::error::Error;
use crate::languages::{self, UiLanguage};
use crate::request::Submission;
use crate::tools::Tool;

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String
{   let mut out = String::with_capacity(text.len());
    for ch in text.chars()
    {   match ch
        {   '&' => out.push_str("&amp;")
          , '<' => out.push_str("&lt;")
          , '>' => out.push_str("&gt;")
          , '"' => out.push_str("&quot;")
          , '\'' => out.push_str("&#39;")
          , c => out.push(c)
        }
    }
    out
}

/// Escaped text with newlines as `<br />`
pub fn to_html(text: &str) -> String
{   escape_html(text).replace('\n', "<br />")
}

fn heading(tool: Tool, selector: &str) -> String
{   match tool
    {   Tool::Translator => languages::target_label(selector)
          .unwrap_or(selector)
          .to_string()
      , _ => selector.to_string()
    }
}

fn result_text(
  tool: Tool
, result: &Result<String, Error>
, lang: UiLanguage
) -> String
{   match result
    {   Ok(text) => text.clone()
      , Err(e) => e.user_message(tool, lang).to_string()
    }
}

/// Plain-text rendering. Single-target tools print the text alone;
/// the translator prints one labelled block per target.
pub fn render_text(submission: &Submission, lang: UiLanguage) -> String
{   if !submission.tool.profile().multi_target
    {   return submission.results
          .first()
          .map(|r| result_text(submission.tool, &r.result, lang))
          .unwrap_or_default();
    }

    submission.results
      .iter()
      .map(|r| {
        format!(
          "{}：\n{}",
          heading(submission.tool, &r.selector),
          result_text(submission.tool, &r.result, lang)
        )
      })
      .collect::<Vec<_>>()
      .join("\n\n")
}

/// Same layout as `render_text`, safe to inject as markup
pub fn render_html(submission: &Submission, lang: UiLanguage) -> String
{   to_html(&render_text(submission, lang))
}
