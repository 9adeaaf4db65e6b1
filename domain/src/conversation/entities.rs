//! Conversation transcript entities

use serde::{Deserialize, Serialize};

/// Identifier of a message within a session.
///
/// Allocated by the [`Transcript`](super::transcript::Transcript) and
/// monotonically increasing, so transcript order and id order agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageOrigin {
    User,
    Assistant,
}

/// How a message participates in the conversation.
///
/// Notices are informational: rendered distinctly and never dispatched
/// as queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// A regular conversation turn.
    Normal,
    /// An ephemeral system notice (e.g. "voice unavailable").
    SystemNotice,
    /// A "Did you mean ...?" notice inserted after a corrected submission.
    CorrectionNotice,
}

impl MessageKind {
    pub fn is_notice(&self) -> bool {
        matches!(self, MessageKind::SystemNotice | MessageKind::CorrectionNotice)
    }
}

/// A selectable choice attached to an assistant turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub payload: String,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

/// One turn in the conversation transcript (Entity)
///
/// Messages are immutable once created; the transcript they live in can be
/// wholesale reset, and notices can be removed by id, but an individual
/// message never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: MessageId,
    pub text: String,
    pub origin: MessageOrigin,
    pub kind: MessageKind,
    /// When present, these are the only valid option inputs until the next
    /// assistant turn supersedes them.
    pub options: Option<Vec<ChoiceOption>>,
}

impl ConversationMessage {
    pub fn user(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            origin: MessageOrigin::User,
            kind: MessageKind::Normal,
            options: None,
        }
    }

    pub fn assistant(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            origin: MessageOrigin::Assistant,
            kind: MessageKind::Normal,
            options: None,
        }
    }

    pub fn assistant_with_options(
        id: MessageId,
        text: impl Into<String>,
        options: Vec<ChoiceOption>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            origin: MessageOrigin::Assistant,
            kind: MessageKind::Normal,
            options: Some(options),
        }
    }

    pub fn system_notice(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            origin: MessageOrigin::Assistant,
            kind: MessageKind::SystemNotice,
            options: None,
        }
    }

    pub fn correction_notice(id: MessageId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            origin: MessageOrigin::Assistant,
            kind: MessageKind::CorrectionNotice,
            options: None,
        }
    }

    pub fn has_options(&self) -> bool {
        self.options.as_ref().is_some_and(|o| !o.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_origin_and_kind() {
        let msg = ConversationMessage::user(MessageId(1), "hi");
        assert_eq!(msg.origin, MessageOrigin::User);
        assert_eq!(msg.kind, MessageKind::Normal);
        assert!(!msg.has_options());

        let msg = ConversationMessage::system_notice(MessageId(2), "notice");
        assert_eq!(msg.origin, MessageOrigin::Assistant);
        assert!(msg.kind.is_notice());

        let msg = ConversationMessage::correction_notice(MessageId(3), "did you mean");
        assert!(msg.kind.is_notice());
    }

    #[test]
    fn test_has_options() {
        let opts = vec![ChoiceOption::new("A", "a")];
        let msg = ConversationMessage::assistant_with_options(MessageId(1), "pick", opts);
        assert!(msg.has_options());

        let msg = ConversationMessage::assistant_with_options(MessageId(2), "pick", vec![]);
        assert!(!msg.has_options());
    }
}
