// promptkit - run one of the AI writing/coding tools from the terminal

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, warn};

use promptkit::render;
use promptkit::{
  PromptKitBackend
, PromptKitConfig
, Submission
, SubmitRequest
, Tool
, UiLanguage
};

#[derive(Parser, Debug)]
#[command(
  author
, version
, about = "AI outline, code review, code generation, unit test and translation tools"
, long_about = None
)]
struct Args
{   /// Tool to run: outline, code-review, code-generator, unit-test, translator
    tool: Option<Tool>
  , /// Input text; read from stdin when omitted
    text: Option<String>
  , /// Selector: code language, article language, or a translation
    /// target (repeat for several targets)
    #[arg(short, long = "select")]
    select: Vec<String>
  , /// Language for error messages (zh-CN, zh-TW, en, fr, es)
    #[arg(short, long, default_value = "en")]
    ui_language: String
  , /// JSON config file for the provider
    #[arg(short, long)]
    config: Option<PathBuf>
  , /// Print escaped HTML instead of plain text
    #[arg(long)]
    html: bool
  , /// List tools and their selectors, then exit
    #[arg(long)]
    list: bool
  , /// Verbose logging
    #[arg(short, long)]
    verbose: bool
}

fn read_input(text: Option<String>) -> std::io::Result<String>
{   match text
    {   Some(text) => Ok(text)
      , None => {
          let mut buf = String::new();
          std::io::stdin().read_to_string(&mut buf)?;
          Ok(buf)
        }
    }
}

fn print_submission(
  submission: &Submission
, ui_language: UiLanguage
, html: bool
)
{   let out = if html
    {   render::render_html(submission, ui_language)
    } else
    {   render::render_text(submission, ui_language)
    };
    println!("{}", out);
}

#[tokio::main]
async fn main() -> ExitCode
{   let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(default_filter)
    ).init();

    if let Ok(path) = dotenvy::dotenv()
    {   debug!("Loaded .env from {}", path.display());
    }

    let ui_language = UiLanguage::from_code(&args.ui_language)
      .unwrap_or_else(|| {
        warn!("Unknown UI language {}, using en", args.ui_language);
        UiLanguage::En
      });

    let config = match &args.config
    {   Some(path) => match PromptKitConfig::load(path)
        {   Ok(config) => config
          , Err(e) => {
              error!("{}", e);
              eprintln!("{}", e);
              return ExitCode::FAILURE;
            }
        }
      , None => PromptKitConfig::default()
    };

    let backend = match PromptKitBackend::from_env(config)
    {   Ok(backend) => backend
      , Err(e) => {
          error!("{}", e);
          eprintln!("{}", e);
          return ExitCode::FAILURE;
        }
    };

    if args.list
    {   let code = print_tools(&backend).await;
        let _ = backend.shutdown().await;
        return code;
    }

    let Some(tool) = args.tool else
    {   eprintln!("A tool is required unless --list is given");
        let _ = backend.shutdown().await;
        return ExitCode::FAILURE;
    };

    let input = match read_input(args.text)
    {   Ok(input) => input
      , Err(e) => {
          eprintln!("Failed to read stdin: {}", e);
          return ExitCode::FAILURE;
        }
    };

    let request = SubmitRequest::new(tool, input, args.select);
    let code = match backend.submit_and_wait(request).await
    {   Ok(submission) => {
          print_submission(&submission, ui_language, args.html);
          ExitCode::SUCCESS
        }
      , Err(failure) => {
          debug!("Submission failed: {}", failure.error);
          if let Some(partial) = failure.partial_submission()
          {   print_submission(&partial, ui_language, args.html);
          }
          eprintln!(
            "{}",
            failure.error.user_message(failure.tool, ui_language)
          );
          ExitCode::FAILURE
        }
    };

    let _ = backend.shutdown().await;
    code
}

async fn print_tools(backend: &PromptKitBackend) -> ExitCode
{   let mut rx = match backend.list_tools().await
    {   Ok(rx) => rx
      , Err(e) => {
          eprintln!("{}", e);
          return ExitCode::FAILURE;
        }
    };
    match rx.recv().await
    {   Some(Ok(tools)) => {
          for info in tools
          {   println!(
                "{:<16} {:<16} t={:.1}{}  [{}]",
                info.tool.name(),
                info.model,
                info.temperature,
                if info.multi_target { " multi" } else { "" },
                info.selectors.join(", ")
              );
          }
          ExitCode::SUCCESS
        }
      , Some(Err(e)) => {
          eprintln!("{}", e);
          ExitCode::FAILURE
        }
      , None => ExitCode::FAILURE
    }
}
