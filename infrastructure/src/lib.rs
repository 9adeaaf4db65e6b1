//! Infrastructure layer for samvaad
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod query;
pub mod voice;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileChatConfig, FileConfig, FileLoggingConfig, FileServiceConfig,
    FileVoiceConfig,
};
pub use logging::JsonlTranscriptLogger;
pub use query::HttpQueryGateway;
pub use voice::CommandVoiceIo;
