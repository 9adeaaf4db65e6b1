//! Synthesis via an external command per language.
//!
//! The browser deployments of this assistant use the platform speech
//! engines; on a plain terminal the nearest equivalent is a
//! user-configured synthesis command (espeak-ng, say, festival) that reads
//! the utterance from stdin. A language with no configured command is
//! reported as voice-unavailable, which the dialogue controller turns into
//! its transient notice. Recognition has no terminal counterpart and is
//! reported unsupported.

use async_trait::async_trait;
use samvaad_application::{ListenError, SpeakError, VoiceIo, VoiceInfo};
use std::collections::HashMap;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::debug;

/// Speech synthesis through per-language external commands.
pub struct CommandVoiceIo {
    /// language tag → command line (split on whitespace).
    commands: HashMap<String, String>,
}

impl CommandVoiceIo {
    pub fn new(commands: HashMap<String, String>) -> Self {
        Self { commands }
    }
}

#[async_trait]
impl VoiceIo for CommandVoiceIo {
    async fn speak(&self, text: &str, language: &str) -> Result<(), SpeakError> {
        let Some(command_line) = self.commands.get(language) else {
            return Err(SpeakError::VoiceUnavailable {
                language: language.to_string(),
            });
        };

        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            return Err(SpeakError::VoiceUnavailable {
                language: language.to_string(),
            });
        };

        debug!("Synthesizing {} chars via {}", text.chars().count(), program);

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| SpeakError::SynthesisFailed(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| SpeakError::SynthesisFailed(e.to_string()))?;
            // Close stdin so the synthesizer sees end of input
            drop(stdin);
        }

        let status = child
            .wait()
            .await
            .map_err(|e| SpeakError::SynthesisFailed(e.to_string()))?;
        if !status.success() {
            return Err(SpeakError::SynthesisFailed(format!(
                "synthesis command exited with {status}"
            )));
        }
        Ok(())
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        self.commands
            .keys()
            .map(|language| VoiceInfo {
                language: language.clone(),
            })
            .collect()
    }

    fn start_listening(&self, _language: &str) -> Result<oneshot::Receiver<String>, ListenError> {
        Err(ListenError::RecognitionUnavailable)
    }

    fn stop_listening(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(entries: &[(&str, &str)]) -> CommandVoiceIo {
        CommandVoiceIo::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_unconfigured_language_is_unavailable() {
        let voice = adapter(&[("en-IN", "cat")]);
        let err = voice.speak("hello", "hi-IN").await.unwrap_err();
        assert!(matches!(
            err,
            SpeakError::VoiceUnavailable { language } if language == "hi-IN"
        ));
    }

    #[tokio::test]
    async fn test_speak_runs_the_configured_command() {
        // `cat` consumes stdin and exits 0 — a stand-in synthesizer
        let voice = adapter(&[("en-IN", "cat")]);
        voice.speak("hello there", "en-IN").await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_program_is_synthesis_failure() {
        let voice = adapter(&[("en-IN", "definitely-not-a-synthesizer-binary")]);
        let err = voice.speak("hello", "en-IN").await.unwrap_err();
        assert!(matches!(err, SpeakError::SynthesisFailed(_)));
    }

    #[test]
    fn test_voices_reflect_configuration() {
        let voice = adapter(&[("en-IN", "cat"), ("hi-IN", "cat")]);
        let mut languages: Vec<String> =
            voice.voices().into_iter().map(|v| v.language).collect();
        languages.sort();
        assert_eq!(languages, vec!["en-IN", "hi-IN"]);
    }

    #[test]
    fn test_recognition_is_unsupported() {
        let voice = adapter(&[]);
        assert!(matches!(
            voice.start_listening("en-IN"),
            Err(ListenError::RecognitionUnavailable)
        ));
    }
}
