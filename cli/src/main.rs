//! CLI entrypoint for Samvaad
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use samvaad_application::{ChatSession, NoVoiceIo, QueryGateway, VoiceIo};
use samvaad_domain::{TypoCorrector, differs_ignoring_case, language};
use samvaad_infrastructure::{
    CommandVoiceIo, ConfigLoader, HttpQueryGateway, JsonlTranscriptLogger,
};
use samvaad_presentation::{ChatRepl, Cli, ConsoleFormatter, ThinkingSpinner};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Samvaad");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    let mut params = config.chat_params();
    if let Some(tag) = &cli.language {
        if !language::is_supported(tag) {
            bail!(
                "Unsupported language tag '{}'. See `samvaad` + /lang for the supported set.",
                tag
            );
        }
        params.language = tag.clone();
    }
    if !language::is_supported(&params.language) {
        bail!("Configured language '{}' is not supported.", params.language);
    }

    let base_url = cli
        .service_url
        .clone()
        .unwrap_or_else(|| config.service.base_url.clone());
    let gateway = Arc::new(HttpQueryGateway::new(
        base_url,
        Duration::from_secs(config.service.timeout_secs),
    )?);

    // One-shot mode: correct, dispatch once, print, exit
    if let Some(question) = &cli.question {
        return run_single_query(gateway, question, &params.language, cli.quiet).await;
    }

    // === Dependency Injection ===
    let voice: Arc<dyn VoiceIo> = if config.voice.enabled && !cli.no_voice {
        Arc::new(CommandVoiceIo::new(config.voice.commands.clone()))
    } else {
        Arc::new(NoVoiceIo)
    };

    let mut controller = ChatSession::new(gateway, voice.clone(), params);
    if !config.logging.transcript_file.is_empty()
        && let Some(logger) = JsonlTranscriptLogger::open(&config.logging.transcript_file)
    {
        info!("Transcript log: {}", logger.path().display());
        controller = controller.with_transcript_logger(Arc::new(logger));
    }

    let mut repl = ChatRepl::new(controller, voice).with_spinner(!cli.quiet);
    repl.run().await?;
    Ok(())
}

/// Answer a single question over the freeform endpoint and exit.
async fn run_single_query(
    gateway: Arc<HttpQueryGateway>,
    question: &str,
    language: &str,
    quiet: bool,
) -> Result<()> {
    let question = question.trim();
    if question.is_empty() {
        bail!("Question is empty.");
    }

    let corrected = TypoCorrector::default().correct(question);
    if !quiet && differs_ignoring_case(question, &corrected) {
        eprintln!("Did you mean: \"{corrected}\"?");
    }

    let spinner = (!quiet).then(ThinkingSpinner::start);
    let result = gateway.freeform_query(&corrected, language).await;
    if let Some(spinner) = spinner {
        spinner.stop();
    }

    let answer = result?;
    println!("{}", answer.answer);
    if let Some(sources) = ConsoleFormatter::format_sources(&answer.sources) {
        println!("{}", sources);
    }
    Ok(())
}
