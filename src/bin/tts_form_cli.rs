//! tts-form CLI — 在终端中驱动转换表单
//!
//! Usage:
//!   tts-form-cli voices                               List the backend's voices
//!   tts-form-cli convert <text> [OPTIONS]             Submit one conversion
//!   tts-form-cli version                              Show version information

use anyhow::{bail, Context};
use std::path::PathBuf;
use std::sync::Arc;
use tts_form::{FormConfig, FormController, FormView, HttpBackend, InMemoryView, SubmitOutcome};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "voices" => cmd_voices(&args[2..]).await,
        "convert" => cmd_convert(&args[2..]).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"tts-form-cli — text-to-speech conversion form in the terminal

USAGE:
    tts-form-cli <COMMAND> [OPTIONS]

COMMANDS:
    voices                      List available voices
    convert <text>              Convert text to speech
    version                     Show version information
    help                        Show this help message

CONVERT OPTIONS:
    --voice <index>             Voice index (default: first listed voice)
    --save                      Ask the backend to save the audio file
    --filename <name>           Filename when saving; needs --save (default: output.mp3)
    --download <dir>            Fetch the resulting audio into <dir>

GLOBAL OPTIONS:
    --config <file>             YAML config (base_url, timeout_secs, default_filename)

ENVIRONMENT:
    TTS_FORM_BASE_URL           Backend base URL (default: http://127.0.0.1:5000)
    TTS_FORM_TIMEOUT_SECS       Request timeout in seconds (default: none)
    TTS_FORM_DEFAULT_FILENAME   Fallback filename (default: output.mp3)
    RUST_LOG                    Log filter, e.g. tts_form=debug"#
    );
}

fn cmd_version() {
    println!("tts-form-cli {}", env!("CARGO_PKG_VERSION"));
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn load_config(args: &[String]) -> anyhow::Result<FormConfig> {
    let config = match flag_value(args, "--config") {
        Some(path) => FormConfig::from_yaml_file(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => FormConfig::from_env()?,
    };
    Ok(config)
}

async fn build_controller(
    args: &[String],
) -> anyhow::Result<FormController<HttpBackend, InMemoryView>> {
    let config = load_config(args)?;
    let backend = Arc::new(HttpBackend::from_config(&config)?);
    let view = Arc::new(InMemoryView::with_filename(config.default_filename.clone()));
    let controller = FormController::new(backend, view)
        .with_default_filename(config.default_filename.clone());
    controller.initialize().await;
    Ok(controller)
}

async fn cmd_voices(args: &[String]) -> anyhow::Result<()> {
    let controller = build_controller(args).await?;
    let view = controller.view();
    let options = view.voice_options();
    if options.is_empty() {
        let status = view.status();
        if !status.is_empty() {
            bail!("{status}");
        }
        println!("No voices available.");
        return Ok(());
    }
    for option in options {
        println!("{:>4}  {}", option.value, option.label);
    }
    Ok(())
}

async fn cmd_convert(args: &[String]) -> anyhow::Result<()> {
    let Some(text) = args.first().filter(|a| !a.starts_with("--")) else {
        bail!("convert needs the text to speak as its first argument");
    };

    let controller = build_controller(args).await?;
    let view = controller.view();
    if !view.status().is_empty() {
        // Voice loading failed; the backend still picks a default voice.
        eprintln!("{}", view.status());
    }

    view.set_text(text.clone());
    if let Some(voice) = flag_value(args, "--voice") {
        if !view.select_voice(voice) {
            bail!("no voice with index {voice}; run `tts-form-cli voices`");
        }
    }
    if args.iter().any(|a| a == "--save") {
        view.set_save_to_file(true);
        controller.on_save_to_file_changed();
        if let Some(name) = flag_value(args, "--filename") {
            view.set_filename(name);
        }
    } else if flag_value(args, "--filename").is_some() {
        eprintln!("warning: --filename is ignored without --save");
    }

    let outcome = controller.submit().await;
    println!("{}", view.status());

    match outcome {
        SubmitOutcome::Converted {
            audio_url: Some(url),
            filename,
        } => {
            if let Some(link) = view.download() {
                println!("{}: {}", link.label, link.href);
            }
            if let Some(dir) = flag_value(args, "--download") {
                let path = controller
                    .save_audio(&url, &filename, PathBuf::from(dir))
                    .await
                    .context("downloading audio")?;
                println!("Saved {}", path.display());
            }
            Ok(())
        }
        SubmitOutcome::Converted { audio_url: None, .. } => Ok(()),
        SubmitOutcome::EmptyText | SubmitOutcome::Rejected { .. } | SubmitOutcome::Failed => {
            std::process::exit(1)
        }
    }
}
