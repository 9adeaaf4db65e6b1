//! Application-level configuration.
//!
//! Timing and language parameters that control how the dialogue use case
//! behaves, independent of where their values come from (config file, CLI
//! flags, or test fixtures).

use std::time::Duration;

/// Dialogue timing and language parameters.
#[derive(Debug, Clone)]
pub struct ChatParams {
    /// Delay before the visitor menu is re-rendered after a scripted answer.
    pub menu_redisplay_delay: Duration,
    /// Delay before an agent-mode answer hands back to the visitor menu.
    pub agent_return_delay: Duration,
    /// How long a voice-unavailable notice stays in the transcript.
    pub voice_notice_ttl: Duration,
    /// Initial interface language (BCP-47 tag).
    pub language: String,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            menu_redisplay_delay: Duration::from_millis(1000),
            agent_return_delay: Duration::from_millis(1000),
            voice_notice_ttl: Duration::from_millis(5000),
            language: samvaad_domain::DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ChatParams {
    pub fn with_language(mut self, tag: impl Into<String>) -> Self {
        self.language = tag.into();
        self
    }

    /// Zero delays, for tests that drive deferred actions directly.
    pub fn immediate() -> Self {
        Self {
            menu_redisplay_delay: Duration::ZERO,
            agent_return_delay: Duration::ZERO,
            voice_notice_ttl: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ChatParams::default();
        assert_eq!(params.menu_redisplay_delay, Duration::from_millis(1000));
        assert_eq!(params.voice_notice_ttl, Duration::from_millis(5000));
        assert_eq!(params.language, "en-IN");
    }
}
