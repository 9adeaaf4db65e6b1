//! Application layer for samvaad
//!
//! This crate contains the dialogue controller use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatParams;
pub use ports::{
    query_gateway::{QueryAnswer, QueryGateway, QueryGatewayError},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
    voice::{ListenError, NoVoiceIo, SpeakError, VoiceInfo, VoiceIo},
};
pub use use_cases::chat_session::{ChatSession, DeferredAction, DeferredKind, TurnOutcome};
