//! Chat session use case — the dialogue controller.
//!
//! Drives the conversation state machine: role selection, the scripted
//! visitor menu, and free-text dispatch to the query service, with typo
//! correction applied to every submission first.
//!
//! Timer-driven transitions (menu re-render after a scripted answer, voice
//! notice removal) are not performed here; each one is returned as a
//! [`DeferredAction`] stamped with the session epoch, and the caller feeds
//! it back through [`ChatSession::apply_deferred`] after the delay. Reset
//! and end bump the epoch, so a deferred action scheduled before either is
//! recognized as stale and dropped instead of firing into the new session.

use crate::config::ChatParams;
use crate::ports::query_gateway::QueryGateway;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::ports::voice::{SpeakError, VoiceIo};
use samvaad_domain::script::{self, payload};
use samvaad_domain::{
    ChoiceOption, ConversationMessage, ConversationSession, DomainError, MessageId, MessageOrigin,
    Role, Stage, Transcript, TypoCorrector, differs_ignoring_case, language_display_name,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A transition the controller wants applied after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredKind {
    /// Re-render the visitor menu (after a scripted answer or a one-shot
    /// agent answer).
    RedisplayMenu,
    /// Remove an ephemeral notice from the transcript.
    RemoveNotice(MessageId),
}

/// A deferred transition plus the epoch it was scheduled under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredAction {
    pub kind: DeferredKind,
    pub delay: Duration,
    epoch: u64,
}

/// What one controller operation did to the transcript.
#[derive(Debug, Default)]
pub struct TurnOutcome {
    /// Newly appended messages, in transcript order.
    pub appended: Vec<ConversationMessage>,
    /// Source documents attached to an answer turn, when the query service
    /// reported any.
    pub sources: Vec<String>,
    /// A transition to apply after its delay, if one was scheduled.
    pub deferred: Option<DeferredAction>,
}

impl TurnOutcome {
    fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.appended.is_empty() && self.deferred.is_none()
    }
}

/// Use case driving one open conversation.
///
/// Single-owner: all transitions happen synchronously inside one call
/// except the outbound query dispatch, the only suspension point. The
/// input latch (`in_flight`) rejects submissions while a dispatch is
/// pending; it is a coarse gate, not a queue.
pub struct ChatSession {
    session: ConversationSession,
    gateway: Arc<dyn QueryGateway>,
    voice: Arc<dyn VoiceIo>,
    logger: Arc<dyn TranscriptLogger>,
    corrector: TypoCorrector,
    params: ChatParams,
    in_flight: bool,
}

impl ChatSession {
    pub fn new(gateway: Arc<dyn QueryGateway>, voice: Arc<dyn VoiceIo>, params: ChatParams) -> Self {
        let mut controller = Self {
            session: ConversationSession::new(params.language.clone()),
            gateway,
            voice,
            logger: Arc::new(NoTranscriptLogger),
            corrector: TypoCorrector::default(),
            params,
            in_flight: false,
        };
        controller.append_greeting();
        controller
    }

    /// Attach a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.logger = logger;
        self
    }

    // ==================== Accessors ====================

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    pub fn transcript(&self) -> &Transcript {
        self.session.transcript()
    }

    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    /// Whether a free-text submission would currently be accepted.
    pub fn free_text_enabled(&self) -> bool {
        self.session.stage().free_text_enabled() && !self.in_flight
    }

    pub fn language(&self) -> &str {
        self.session.language()
    }

    pub fn set_language(&mut self, tag: &str) -> Result<(), DomainError> {
        self.session.set_language(tag)
    }

    pub fn set_batch(&mut self, value: &str) -> Result<(), DomainError> {
        self.session.filters_mut().set_batch(value)
    }

    pub fn set_branch(&mut self, value: &str) -> Result<(), DomainError> {
        self.session.filters_mut().set_branch(value)
    }

    pub fn set_semester(&mut self, value: &str) -> Result<(), DomainError> {
        self.session.filters_mut().set_semester(value)
    }

    pub fn set_doc_type(&mut self, value: &str) -> Result<(), DomainError> {
        self.session.filters_mut().set_doc_type(value)
    }

    // ==================== Operations ====================

    /// Handle the selection of an option from the latest assistant turn.
    ///
    /// Payloads that don't belong to the latest turn are ignored: options
    /// are superseded the moment a newer assistant turn lands.
    pub fn select_option(&mut self, payload_key: &str) -> TurnOutcome {
        if self.in_flight {
            warn!("Option {} ignored: dispatch in flight", payload_key);
            return TurnOutcome::empty();
        }
        let Some(label) = self.offered_label(payload_key) else {
            warn!("Ignoring stray option payload: {}", payload_key);
            return TurnOutcome::empty();
        };

        match payload_key {
            payload::ROLE_VISITOR => {
                let mut outcome = self.begin_turn(&label);
                self.session.set_role(Role::Visitor);
                self.session.set_stage(Stage::VisitorMenu);
                outcome.appended.push(self.append_assistant_with_options(
                    script::VISITOR_WELCOME,
                    script::visitor_questions(),
                ));
                outcome
            }
            payload::ROLE_STUDENT => {
                let mut outcome = self.begin_turn(&label);
                self.session.set_role(Role::Student);
                self.session.set_stage(Stage::StudentFreeform);
                outcome
                    .appended
                    .push(self.append_assistant(script::STUDENT_PROMPT));
                outcome
            }
            payload::ASK_OTHER_QUERY => {
                let mut outcome = self.begin_turn(&label);
                self.session.set_stage(Stage::AgentFreeform);
                outcome
                    .appended
                    .push(self.append_assistant(script::AGENT_PROMPT));
                outcome
            }
            payload::END_CHAT => {
                let mut outcome = self.begin_turn(&label);
                let farewell = self.end();
                outcome.appended.extend(farewell.appended);
                outcome
            }
            other => match script::scripted_answer(other) {
                Some(answer) => {
                    let mut outcome = self.begin_turn(&label);
                    outcome.appended.push(self.append_assistant(answer));
                    outcome.deferred = Some(self.schedule(
                        DeferredKind::RedisplayMenu,
                        self.params.menu_redisplay_delay,
                    ));
                    outcome
                }
                None => {
                    // A menu offered a payload the answer table doesn't
                    // know; ignore rather than crash the conversation.
                    warn!("No scripted answer for payload: {}", other);
                    TurnOutcome::empty()
                }
            },
        }
    }

    /// Handle a free-text submission.
    ///
    /// The corrector runs first; the corrected text, not the original, is
    /// dispatched. Empty submissions are dropped silently. A dispatch
    /// failure becomes a single apologetic turn and input is re-enabled so
    /// the user can resubmit.
    pub async fn submit_free_text(&mut self, text: &str) -> TurnOutcome {
        let original = text.trim();
        if original.is_empty() {
            return TurnOutcome::empty();
        }
        if !self.free_text_enabled() {
            warn!("Free-text submission ignored: input disabled");
            return TurnOutcome::empty();
        }

        let corrected = self.corrector.correct(original);
        let mut outcome = TurnOutcome::empty();
        outcome.appended.push(self.append_user(original));
        if differs_ignoring_case(original, &corrected) {
            let notice = script::correction_notice_text(&corrected);
            outcome.appended.push(self.append_correction_notice(&notice));
        }

        let agent_mode = self.session.stage() == Stage::AgentFreeform;
        self.in_flight = true;
        let result = if agent_mode {
            self.gateway
                .freeform_query(&corrected, self.session.language())
                .await
        } else {
            self.gateway
                .student_query(self.session.filters(), &corrected, self.session.language())
                .await
        };
        self.in_flight = false;

        match result {
            Ok(answer) => {
                debug!(
                    "Dispatch answered with {} source(s)",
                    answer.sources.len()
                );
                outcome.appended.push(self.append_assistant(&answer.answer));
                outcome.sources = answer.sources;
                if agent_mode {
                    // One-shot agent turn: hand back to the visitor menu.
                    outcome.deferred = Some(
                        self.schedule(DeferredKind::RedisplayMenu, self.params.agent_return_delay),
                    );
                }
            }
            Err(error) => {
                warn!("Dispatch failed: {}", error);
                self.logger
                    .log(TranscriptEvent::dispatch_failed(&error.to_string()));
                outcome
                    .appended
                    .push(self.append_assistant(script::DISPATCH_FAILURE));
            }
        }
        outcome
    }

    /// Refresh: back to the greeting from any stage.
    pub fn reset(&mut self) -> TurnOutcome {
        info!("Session reset");
        self.session.reset();
        self.in_flight = false;
        self.logger.log(TranscriptEvent::session_reset());
        let mut outcome = TurnOutcome::empty();
        outcome.appended.push(self.append_greeting());
        outcome
    }

    /// Explicit end action, reachable from any stage.
    pub fn end(&mut self) -> TurnOutcome {
        if self.session.stage().is_ended() {
            return TurnOutcome::empty();
        }
        info!("Session ended");
        self.session.end();
        self.logger.log(TranscriptEvent::session_ended());
        let mut outcome = TurnOutcome::empty();
        outcome.appended.push(self.append_assistant(script::FAREWELL));
        outcome
    }

    /// Read an assistant turn aloud, on request.
    ///
    /// When no voice matches the session language, a transient notice is
    /// appended and scheduled for removal; the dialogue stage is untouched
    /// either way.
    pub async fn speak_message(&mut self, id: MessageId) -> TurnOutcome {
        let Some(message) = self.session.transcript().get(id) else {
            warn!("Cannot speak unknown message {}", id);
            return TurnOutcome::empty();
        };
        if message.origin != MessageOrigin::Assistant {
            debug!("Readout is only offered for assistant turns");
            return TurnOutcome::empty();
        }
        let text = message.text.clone();
        let language = self.session.language().to_string();

        match self.voice.speak(&text, &language).await {
            Ok(()) => TurnOutcome::empty(),
            Err(SpeakError::VoiceUnavailable { .. }) => {
                let notice_text = script::voice_unavailable_text(language_display_name(&language));
                let mut outcome = TurnOutcome::empty();
                let notice = self.append_system_notice(&notice_text);
                let notice_id = notice.id;
                outcome.appended.push(notice);
                outcome.deferred = Some(self.schedule(
                    DeferredKind::RemoveNotice(notice_id),
                    self.params.voice_notice_ttl,
                ));
                outcome
            }
            Err(error) => {
                warn!("Speech synthesis failed: {}", error);
                TurnOutcome::empty()
            }
        }
    }

    /// Apply a deferred transition, unless it has gone stale.
    pub fn apply_deferred(&mut self, action: DeferredAction) -> TurnOutcome {
        if action.epoch != self.session.epoch() {
            debug!("Dropping stale deferred action: {:?}", action.kind);
            return TurnOutcome::empty();
        }
        match action.kind {
            DeferredKind::RedisplayMenu => {
                self.session.set_stage(Stage::VisitorMenu);
                let mut outcome = TurnOutcome::empty();
                outcome.appended.push(self.append_assistant_with_options(
                    script::MENU_REENTRY,
                    script::visitor_questions_with_end(),
                ));
                outcome
            }
            DeferredKind::RemoveNotice(id) => {
                self.session.transcript_mut().remove_notice(id);
                TurnOutcome::empty()
            }
        }
    }

    // ==================== Internals ====================

    fn schedule(&self, kind: DeferredKind, delay: Duration) -> DeferredAction {
        DeferredAction {
            kind,
            delay,
            epoch: self.session.epoch(),
        }
    }

    /// Label of `payload` if the latest turn offers it.
    fn offered_label(&self, payload: &str) -> Option<String> {
        self.session
            .transcript()
            .latest_options()?
            .iter()
            .find(|o| o.payload == payload)
            .map(|o| o.label.clone())
    }

    /// Start an option turn: echo the selected label as a user message.
    fn begin_turn(&mut self, label: &str) -> TurnOutcome {
        let mut outcome = TurnOutcome::empty();
        outcome.appended.push(self.append_user(label));
        outcome
    }

    fn append_greeting(&mut self) -> ConversationMessage {
        self.append_assistant_with_options(script::GREETING, script::role_options())
    }

    fn append_user(&mut self, text: &str) -> ConversationMessage {
        let id = self.session.transcript_mut().allocate_id();
        let message = ConversationMessage::user(id, text);
        self.logger.log(TranscriptEvent::user_message(text));
        self.session.transcript_mut().append(message.clone());
        message
    }

    fn append_assistant(&mut self, text: &str) -> ConversationMessage {
        let id = self.session.transcript_mut().allocate_id();
        let message = ConversationMessage::assistant(id, text);
        self.logger.log(TranscriptEvent::assistant_message(text));
        self.session.transcript_mut().append(message.clone());
        message
    }

    fn append_assistant_with_options(
        &mut self,
        text: &str,
        options: Vec<ChoiceOption>,
    ) -> ConversationMessage {
        let id = self.session.transcript_mut().allocate_id();
        let message = ConversationMessage::assistant_with_options(id, text, options);
        self.logger.log(TranscriptEvent::assistant_message(text));
        self.session.transcript_mut().append(message.clone());
        message
    }

    fn append_system_notice(&mut self, text: &str) -> ConversationMessage {
        let id = self.session.transcript_mut().allocate_id();
        let message = ConversationMessage::system_notice(id, text);
        self.logger.log(TranscriptEvent::notice("system", text));
        self.session.transcript_mut().append(message.clone());
        message
    }

    fn append_correction_notice(&mut self, text: &str) -> ConversationMessage {
        let id = self.session.transcript_mut().allocate_id();
        let message = ConversationMessage::correction_notice(id, text);
        self.logger.log(TranscriptEvent::notice("correction", text));
        self.session.transcript_mut().append(message.clone());
        message
    }
}
