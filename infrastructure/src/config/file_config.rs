//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion into application parameters
//! happens in [`FileConfig::chat_params`].

use samvaad_application::ChatParams;
use samvaad_domain::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Query service settings
    pub service: FileServiceConfig,
    /// Dialogue timing and language settings
    pub chat: FileChatConfig,
    /// Speech synthesis settings
    pub voice: FileVoiceConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Convert the `[chat]` section into application parameters.
    pub fn chat_params(&self) -> ChatParams {
        ChatParams {
            menu_redisplay_delay: Duration::from_millis(self.chat.menu_redisplay_delay_ms),
            agent_return_delay: Duration::from_millis(self.chat.agent_return_delay_ms),
            voice_notice_ttl: Duration::from_millis(self.chat.voice_notice_ttl_ms),
            language: self.chat.language.clone(),
        }
    }
}

/// Raw query service configuration from TOML (`[service]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the retrieval/answer service.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Raw dialogue configuration from TOML (`[chat]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Delay before the visitor menu returns after a scripted answer.
    pub menu_redisplay_delay_ms: u64,
    /// Delay before an agent answer hands back to the visitor menu.
    pub agent_return_delay_ms: u64,
    /// Lifetime of a voice-unavailable notice.
    pub voice_notice_ttl_ms: u64,
    /// Initial interface language (BCP-47 tag).
    pub language: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            menu_redisplay_delay_ms: 1000,
            agent_return_delay_ms: 1000,
            voice_notice_ttl_ms: 5000,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Raw speech configuration from TOML (`[voice]` section)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileVoiceConfig {
    /// Master switch for speech synthesis.
    pub enabled: bool,
    /// Synthesis command per language tag; text is piped to its stdin.
    /// A language without an entry is reported as voice-unavailable.
    pub commands: HashMap<String, String>,
}

impl Default for FileVoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            commands: HashMap::new(),
        }
    }
}

/// Raw transcript logging configuration from TOML (`[logging]` section)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript file path; empty disables transcript logging.
    pub transcript_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(config.chat.language, "en-IN");
        assert!(config.voice.enabled);
        assert!(config.voice.commands.is_empty());
        assert!(config.logging.transcript_file.is_empty());
    }

    #[test]
    fn test_chat_params_conversion() {
        let mut config = FileConfig::default();
        config.chat.menu_redisplay_delay_ms = 250;
        config.chat.language = "hi-IN".to_string();

        let params = config.chat_params();
        assert_eq!(params.menu_redisplay_delay, Duration::from_millis(250));
        assert_eq!(params.agent_return_delay, Duration::from_millis(1000));
        assert_eq!(params.language, "hi-IN");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [service]
            base_url = "http://answers.ldrp.ac.in"

            [voice.commands]
            "en-IN" = "espeak-ng"
            "#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, "http://answers.ldrp.ac.in");
        assert_eq!(config.service.timeout_secs, 30);
        assert_eq!(
            config.voice.commands.get("en-IN").map(String::as_str),
            Some("espeak-ng")
        );
    }
}
