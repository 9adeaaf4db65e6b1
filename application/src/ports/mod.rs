//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod query_gateway;
pub mod transcript_logger;
pub mod voice;
