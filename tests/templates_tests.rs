use std::fs;

use promptkit::render;
use promptkit::templates;
use promptkit::{
  Error, ModelClass, PromptKitConfig, Provider, ProviderConfig,
  SelectorResult, Submission, Tool, UiLanguage
};

#[test]
fn test_templates_are_deterministic()
{   for tool in Tool::ALL
    {   let template = tool.profile().template;
        for selector in tool.selectors()
        {   let a = template(selector, "fn add(a, b) { a + b }");
            let b = template(selector, "fn add(a, b) { a + b }");
            assert_eq!(a.as_bytes(), b.as_bytes());
        }
    }
}

#[test]
fn test_translation_prompt_uses_native_label()
{   assert_eq!(
      templates::translation_prompt("fr", "你好"),
      "请将以下内容翻译成 Français：\n\n你好"
    );
    assert_eq!(
      templates::translation_prompt("xx", "你好"),
      format!(
        "请将以下内容翻译成 {}：\n\n你好",
        templates::UNKNOWN_TARGET_LABEL
      )
    );
}

#[test]
fn test_outline_prompt_by_language()
{   let en = templates::outline_prompt("en", "Async Rust");
    assert!(en.starts_with("You are a professional content marketer"));
    assert!(en.ends_with("informative tone.\n\nTitle: Async Rust"));

    let fr = templates::outline_prompt("fr", "Async Rust");
    assert!(fr.ends_with("\n\nTitre : Async Rust"));

    // Anything unrecognized falls back to Simplified Chinese
    let fallback = templates::outline_prompt("de", "Async Rust");
    assert!(fallback.starts_with("你是一位内容运营专家"));
    assert!(fallback.ends_with("\n\n标题：Async Rust"));
}

#[test]
fn test_code_prompts_embed_language_and_input()
{   let review = templates::code_review_prompt("Rust", "fn main() {}");
    assert!(review.starts_with(
      "You are a senior Rust developer and code reviewer. \nPlease review"
    ));
    assert!(review.contains("Code:\n\nfn main() {}\n\n\nRespond only"));

    let generated =
      templates::code_generation_prompt("Go", "reverse a string");
    assert_eq!(
      generated,
      "You are a senior Go developer. Write code that does the \
following:\n\n\"reverse a string\"\n\nOnly return code. No explanation."
    );

    let tests = templates::unit_test_prompt("Python", "def f(): pass");
    assert!(tests.contains("Code:\ndef f(): pass\n\nOnly output test code."));
}

#[test]
fn test_profiles()
{   let translator = Tool::Translator.profile();
    assert!(translator.multi_target);
    assert_eq!(translator.temperature, 0.5);
    assert_eq!(translator.model, ModelClass::Chat);

    let unit = Tool::UnitTestGenerator.profile();
    assert!(!unit.multi_target);
    assert_eq!(unit.temperature, 0.2);
    assert_eq!(unit.model, ModelClass::Coder);
    assert_eq!(unit.default_selector, "Python");

    assert_eq!(Tool::OutlineGenerator.profile().temperature, 0.7);
    assert_eq!(Tool::CodeReview.profile().temperature, 0.3);
}

#[test]
fn test_tool_names_round_trip()
{   for tool in Tool::ALL
    {   assert_eq!(tool.name().parse::<Tool>(), Ok(tool));
    }
    assert_eq!(" Translator ".parse::<Tool>(), Ok(Tool::Translator));
    assert_eq!(
      "poetry".parse::<Tool>(),
      Err(Error::UnknownTool("poetry".to_string()))
    );
}

#[test]
fn test_user_messages_are_localized()
{   assert_eq!(
      Error::NoTargetSelected.user_message(Tool::Translator, UiLanguage::ZhCn),
      "请至少选择一个目标语言"
    );
    assert_eq!(
      Error::NetworkOrAuthFailure("401".to_string())
        .user_message(Tool::CodeReview, UiLanguage::Es),
      "Error de API. Verifica tu clave y conexión"
    );
    assert_eq!(
      Error::MissingApiKey("DEEPSEEK_API_KEY".to_string())
        .user_message(Tool::Translator, UiLanguage::En),
      Error::NetworkOrAuthFailure(String::new())
        .user_message(Tool::Translator, UiLanguage::En)
    );
}

#[test]
fn test_empty_input_message_names_what_each_tool_needs()
{   let expected = [
      (Tool::OutlineGenerator, "Please enter a title")
    , (Tool::CodeReview, "Please enter some code")
    , (Tool::CodeGenerator, "Please enter a description")
    , (Tool::UnitTestGenerator, "Please enter some code")
    , (Tool::Translator, "Please enter content")
    ];
    for (tool, message) in expected
    {   assert_eq!(Error::EmptyInput.user_message(tool, UiLanguage::En), message);
    }
    assert_eq!(
      Error::EmptyInput.user_message(Tool::OutlineGenerator, UiLanguage::ZhCn),
      "请输入标题"
    );
}

#[test]
fn test_empty_response_message_depends_on_tool()
{   assert_eq!(
      Error::EmptyResponse.user_message(Tool::Translator, UiLanguage::En),
      "Translation failed, please try again later"
    );
    assert_eq!(
      Error::EmptyResponse.user_message(Tool::Translator, UiLanguage::ZhCn),
      "翻译失败，请稍后再试"
    );
    for tool in Tool::ALL
    {   if tool == Tool::Translator
        {   continue;
        }
        assert_eq!(
          Error::EmptyResponse.user_message(tool, UiLanguage::En),
          "Generation failed, please try again later"
        );
    }
}

#[test]
fn test_missing_key_is_a_configuration_error()
{   let config = ProviderConfig
    {   api_key_env: "PROMPTKIT_TEST_UNSET_KEY".to_string()
      , ..Default::default()
    };
    assert_eq!(
      config.require_api_key(),
      Err(Error::MissingApiKey("PROMPTKIT_TEST_UNSET_KEY".to_string()))
    );
    assert_eq!(config.api_key_from_env(), None);
}

#[test]
fn test_error_display()
{   let err = Error::NetworkOrAuthFailure("401 Unauthorized".to_string());
    assert!(err.to_string().contains("401 Unauthorized"));
    assert!(Error::UnknownTool("poetry".to_string())
      .to_string()
      .contains("poetry"));
}

#[test]
fn test_ui_language_codes()
{   for lang in UiLanguage::ALL
    {   assert_eq!(UiLanguage::from_code(lang.code()), Some(lang));
    }
    assert_eq!(UiLanguage::from_code("de"), None);
    assert_eq!(UiLanguage::default(), UiLanguage::En);
}

// ===== Rendering =====

#[test]
fn test_html_output_is_escaped()
{   let html = render::to_html("<script>alert('x')</script>\nA & B");
    assert_eq!(
      html,
      "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;<br />A &amp; B"
    );
}

#[test]
fn test_render_translations()
{   let submission = Submission
    {   tool: Tool::Translator
      , results: vec![
          SelectorResult
          {   selector: "fr".to_string()
            , result: Ok("Bonjour".to_string())
          }
        , SelectorResult
          {   selector: "es".to_string()
            , result: Err(Error::EmptyResponse)
          }
        ]
    };

    let text = render::render_text(&submission, UiLanguage::En);
    assert_eq!(
      text,
      "Français：\nBonjour\n\nEspañol：\nTranslation failed, please try again later"
    );
}

#[test]
fn test_render_single_target_html()
{   let submission = Submission
    {   tool: Tool::CodeReview
      , results: vec![
          SelectorResult
          {   selector: "Rust".to_string()
            , result: Ok("Use `Vec<u8>`\n- fewer clones".to_string())
          }
        ]
    };

    assert_eq!(
      render::render_html(&submission, UiLanguage::En),
      "Use `Vec&lt;u8&gt;`<br />- fewer clones"
    );
}

// ===== Configuration =====

#[test]
fn test_provider_defaults()
{   let config = ProviderConfig::default();
    assert_eq!(config.provider, Provider::DeepSeek);
    assert_eq!(config.effective_api_base(), "https://api.deepseek.com/v1");
    assert_eq!(config.effective_model(ModelClass::Chat), "deepseek-chat");
    assert_eq!(config.effective_model(ModelClass::Coder), "deepseek-coder");
    assert_eq!(config.api_key_env, "DEEPSEEK_API_KEY");
    assert!(config.timeout_secs.is_none());
}

#[test]
fn test_config_overrides()
{   let config = ProviderConfig
    {   provider: Provider::MistralAi
      , api_base: Some(String::new())
      , coder_model: Some("codestral-2501".to_string())
      , ..Default::default()
    };
    assert_eq!(config.effective_api_base(), "https://api.mistral.ai/v1");
    assert_eq!(
      config.effective_model(ModelClass::Chat),
      "mistral-small-latest"
    );
    assert_eq!(config.effective_model(ModelClass::Coder), "codestral-2501");
}

#[test]
fn test_config_load_from_json()
{   let path = std::env::temp_dir()
      .join(format!("promptkit-config-{}.json", std::process::id()));
    fs::write(
      &path,
      r#"{ "provider": { "provider": "OpenAI", "api_key_env": "OPENAI_API_KEY", "timeout_secs": 30 } }"#
    ).unwrap();

    let config = PromptKitConfig::load(&path).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.provider.provider, Provider::OpenAI);
    assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");
    assert_eq!(config.provider.timeout_secs, Some(30));
    assert_eq!(
      config.provider.effective_api_base(),
      "https://api.openai.com/v1"
    );
}

#[test]
fn test_config_load_errors()
{   let missing = std::env::temp_dir().join("promptkit-does-not-exist.json");
    assert!(matches!(
      PromptKitConfig::load(&missing),
      Err(Error::InvalidConfiguration(_))
    ));
}
