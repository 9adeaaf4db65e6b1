//! Conversation subdomain — transcript entities, dialogue stages, and
//! per-session state.

pub mod entities;
pub mod filters;
pub mod session;
pub mod stage;
pub mod transcript;
