//! Dialogue stage and role
//!
//! The interaction flow is a small state machine:
//!
//! ```text
//! AwaitingRole ──visitor──▶ VisitorMenu ──ask other query──▶ AgentFreeform
//!      │                        ▲    │                            │
//!      │                        └────┘ (scripted answer loop)     │ (one-shot
//!      └────student──▶ StudentFreeform                            │  answer)
//!                                                                 ▼
//!            any stage ──end──▶ Ended        AgentFreeform ──▶ VisitorMenu
//! ```
//!
//! A refresh returns any stage to `AwaitingRole`. The stage is the single
//! authority on what input is currently legal; there are no mode flags
//! beside it.

use serde::{Deserialize, Serialize};

/// Current stage of the dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Initial stage: the greeting offers the role options.
    AwaitingRole,
    /// Visitor picked: scripted question menu, free text disabled.
    VisitorMenu,
    /// Student picked: academic filters active, free text enabled.
    StudentFreeform,
    /// "Ask other query" picked: one free-text turn to the agent service.
    AgentFreeform,
    /// Explicitly ended; only a refresh leaves this stage.
    Ended,
}

impl Stage {
    /// Whether free-text submissions are accepted in this stage.
    pub fn free_text_enabled(&self) -> bool {
        matches!(self, Stage::StudentFreeform | Stage::AgentFreeform)
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Stage::Ended)
    }
}

/// Chosen conversation role. Gates which answer table and service endpoint
/// apply; chosen once per session (until a refresh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Unset,
    Visitor,
    Student,
}
