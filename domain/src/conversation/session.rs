//! Per-session conversation state

use super::filters::StudentFilters;
use super::stage::{Role, Stage};
use super::transcript::Transcript;
use crate::core::error::DomainError;
use crate::language;

/// State of one open conversation (Entity)
///
/// Owned by a single widget instance; there is no cross-session sharing.
/// The `epoch` counter versions deferred actions: it is bumped whenever the
/// session is reset or ended, so a delayed transition scheduled before the
/// bump can be recognized as stale and dropped.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    stage: Stage,
    role: Role,
    filters: StudentFilters,
    language: String,
    transcript: Transcript,
    epoch: u64,
}

impl ConversationSession {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            stage: Stage::AwaitingRole,
            role: Role::Unset,
            filters: StudentFilters::default(),
            language: language.into(),
            transcript: Transcript::new(),
            epoch: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn filters(&self) -> &StudentFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut StudentFilters {
        &mut self.filters
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, tag: impl Into<String>) -> Result<(), DomainError> {
        let tag = tag.into();
        if !language::is_supported(&tag) {
            return Err(DomainError::UnsupportedLanguage(tag));
        }
        self.language = tag;
        Ok(())
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Return to the initial stage: transcript cleared, role and filters
    /// reset, pending deferred actions invalidated. The selected language
    /// is kept (it is a UI preference, not conversation state).
    pub fn reset(&mut self) {
        self.stage = Stage::AwaitingRole;
        self.role = Role::Unset;
        self.filters = StudentFilters::default();
        self.transcript.reset();
        self.epoch += 1;
    }

    /// End the conversation: role cleared, pending deferred actions
    /// invalidated. The transcript is kept for reading back.
    pub fn end(&mut self) {
        self.stage = Stage::Ended;
        self.role = Role::Unset;
        self.epoch += 1;
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(language::DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::entities::ConversationMessage;

    #[test]
    fn test_new_session_is_initial() {
        let session = ConversationSession::default();
        assert_eq!(session.stage(), Stage::AwaitingRole);
        assert_eq!(session.role(), Role::Unset);
        assert_eq!(session.language(), language::DEFAULT_LANGUAGE);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_reset_reinitializes_and_bumps_epoch() {
        let mut session = ConversationSession::default();
        session.set_stage(Stage::StudentFreeform);
        session.set_role(Role::Student);
        session.filters_mut().set_batch("2024-2028").unwrap();
        let id = session.transcript_mut().allocate_id();
        session
            .transcript_mut()
            .append(ConversationMessage::user(id, "hello"));
        let epoch_before = session.epoch();

        session.reset();

        assert_eq!(session.stage(), Stage::AwaitingRole);
        assert_eq!(session.role(), Role::Unset);
        assert_eq!(session.filters(), &StudentFilters::default());
        assert!(session.transcript().is_empty());
        assert_eq!(session.epoch(), epoch_before + 1);
    }

    #[test]
    fn test_end_keeps_transcript() {
        let mut session = ConversationSession::default();
        let id = session.transcript_mut().allocate_id();
        session
            .transcript_mut()
            .append(ConversationMessage::assistant(id, "greeting"));
        let epoch_before = session.epoch();

        session.end();

        assert_eq!(session.stage(), Stage::Ended);
        assert_eq!(session.role(), Role::Unset);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.epoch(), epoch_before + 1);
    }

    #[test]
    fn test_set_language_validates_tag() {
        let mut session = ConversationSession::default();
        session.set_language("hi-IN").unwrap();
        assert_eq!(session.language(), "hi-IN");
        assert!(session.set_language("fr-FR").is_err());
        assert_eq!(session.language(), "hi-IN");
    }
}
