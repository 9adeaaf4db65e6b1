//! Voice I/O port
//!
//! The speech engines are platform singletons in the environments this
//! assistant ships in (browser speech recognition/synthesis); the dialogue
//! logic depends only on this interface so it can run against a fake in
//! tests and a null adapter where no engine exists.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::oneshot;

/// Errors from speech synthesis
#[derive(Error, Debug)]
pub enum SpeakError {
    /// No installed voice matches the requested language. The controller
    /// surfaces this as a transient notice rather than an error.
    #[error("No voice installed for language {language}")]
    VoiceUnavailable { language: String },

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),
}

/// Errors from speech recognition
#[derive(Error, Debug)]
pub enum ListenError {
    #[error("Speech recognition is not available")]
    RecognitionUnavailable,

    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),
}

/// An installed synthesis voice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Language tag the voice speaks.
    pub language: String,
}

/// Speech recognition and synthesis capability
///
/// Recognition is fire-and-forget: `start_listening` hands back a receiver
/// that resolves once with the final transcript; the caller treats the
/// delivered text exactly like typed input. Synthesis is requested
/// per-message, never automatically.
#[async_trait]
pub trait VoiceIo: Send + Sync {
    /// Speak `text` in the voice matching `language`, if one is installed.
    async fn speak(&self, text: &str, language: &str) -> Result<(), SpeakError>;

    /// Installed synthesis voices.
    fn voices(&self) -> Vec<VoiceInfo>;

    /// Begin recognizing speech in `language`; the receiver resolves with
    /// the final transcript. Dropped if recognition is stopped first.
    fn start_listening(&self, language: &str) -> Result<oneshot::Receiver<String>, ListenError>;

    /// Abort an in-progress recognition, if any.
    fn stop_listening(&self);
}

/// Null implementation for environments without speech engines.
pub struct NoVoiceIo;

#[async_trait]
impl VoiceIo for NoVoiceIo {
    async fn speak(&self, _text: &str, language: &str) -> Result<(), SpeakError> {
        Err(SpeakError::VoiceUnavailable {
            language: language.to_string(),
        })
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }

    fn start_listening(&self, _language: &str) -> Result<oneshot::Receiver<String>, ListenError> {
        Err(ListenError::RecognitionUnavailable)
    }

    fn stop_listening(&self) {}
}
