//! Query service gateway port
//!
//! Defines the interface for the remote retrieval/answer service. The
//! service itself is an opaque external collaborator; the dialogue
//! controller only depends on this contract.

use async_trait::async_trait;
use samvaad_domain::StudentFilters;
use thiserror::Error;

/// Errors that can occur while dispatching a query
#[derive(Error, Debug)]
pub enum QueryGatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Service returned status {status}")]
    BadStatus { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out")]
    Timeout,
}

/// A successful answer from the query service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAnswer {
    pub answer: String,
    /// Document names the answer was drawn from; may be empty.
    pub sources: Vec<String>,
}

impl QueryAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            sources: Vec::new(),
        }
    }

    pub fn with_sources(mut self, sources: Vec<String>) -> Self {
        self.sources = sources;
        self
    }
}

/// Gateway to the remote question-answering service
///
/// Exactly one of the two operations is addressed per user turn, selected
/// by the session role. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait QueryGateway: Send + Sync {
    /// Student-mode dispatch: the question travels with the academic
    /// filters and the target language.
    async fn student_query(
        &self,
        filters: &StudentFilters,
        question: &str,
        language: &str,
    ) -> Result<QueryAnswer, QueryGatewayError>;

    /// Agent-mode dispatch: question and target language only.
    async fn freeform_query(
        &self,
        question: &str,
        language: &str,
    ) -> Result<QueryAnswer, QueryGatewayError>;
}
