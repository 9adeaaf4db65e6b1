//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for samvaad
#[derive(Parser, Debug)]
#[command(name = "samvaad")]
#[command(author, version, about = "Samvaad - college information assistant")]
#[command(long_about = r#"
Samvaad answers questions about the college: scripted answers for common
visitor questions, and free-text questions dispatched to the retrieval
service for students and everything the script doesn't cover. Typos in
free-text questions are corrected against the college vocabulary before
dispatch.

Without a question, an interactive chat session starts. With one, the
question is sent once and the answer printed.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./samvaad.toml      Project-level config
3. ~/.config/samvaad/config.toml   Global config

Example:
  samvaad
  samvaad "when does the admission window open?"
  samvaad --language hi-IN --service-url http://answers.ldrp.ac.in
"#)]
pub struct Cli {
    /// One-shot question (omit for interactive chat)
    pub question: Option<String>,

    /// Base URL of the query service
    #[arg(short, long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Interface language (BCP-47 tag, e.g. en-IN, hi-IN)
    #[arg(short, long, value_name = "TAG")]
    pub language: Option<String>,

    /// Disable speech synthesis
    #[arg(long)]
    pub no_voice: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and thinking indicator
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
