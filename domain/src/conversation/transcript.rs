//! Append-only conversation transcript

use super::entities::{ChoiceOption, ConversationMessage, MessageId, MessageKind};

/// Ordered list of conversation turns (Entity)
///
/// Append order equals user-visible chronological order. The transcript can
/// be wholesale reset, and ephemeral notices can be removed by id; regular
/// turns are never removed or mutated.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ConversationMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next message id. Ids keep increasing across resets so
    /// they stay unique for the lifetime of the session.
    pub fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn append(&mut self, message: ConversationMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: MessageId) -> Option<&ConversationMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn latest(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    /// Options attached to the latest turn, if any.
    ///
    /// These are the only valid option inputs right now; payloads from
    /// superseded turns must be rejected by the caller.
    pub fn latest_options(&self) -> Option<&[ChoiceOption]> {
        self.latest()
            .and_then(|m| m.options.as_deref())
            .filter(|o| !o.is_empty())
    }

    /// Whether `payload` belongs to the latest turn's options.
    pub fn offers_payload(&self, payload: &str) -> bool {
        self.latest_options()
            .is_some_and(|opts| opts.iter().any(|o| o.payload == payload))
    }

    /// Remove an ephemeral notice by id.
    ///
    /// Regular turns are not removable; returns false if `id` is missing or
    /// names a [`MessageKind::Normal`] message.
    pub fn remove_notice(&mut self, id: MessageId) -> bool {
        let Some(index) = self
            .messages
            .iter()
            .position(|m| m.id == id && m.kind.is_notice())
        else {
            return false;
        };
        self.messages.remove(index);
        true
    }

    /// Drop all messages. Id allocation continues where it left off.
    pub fn reset(&mut self) {
        self.messages.clear();
    }
}
