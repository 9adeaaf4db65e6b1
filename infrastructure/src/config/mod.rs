//! Configuration file loading for samvaad
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./samvaad.toml` or `./.samvaad.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/samvaad/config.toml`
//! 4. Fallback: `~/.config/samvaad/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileChatConfig, FileConfig, FileLoggingConfig, FileServiceConfig, FileVoiceConfig,
};
pub use loader::ConfigLoader;
