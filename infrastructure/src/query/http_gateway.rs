//! HTTP adapter for the query service gateway port

use super::wire::{FreeformQueryBody, QueryResponseBody, StudentQueryBody};
use async_trait::async_trait;
use samvaad_application::{QueryAnswer, QueryGateway, QueryGatewayError};
use samvaad_domain::StudentFilters;
use samvaad_domain::script::FALLBACK_ANSWER;
use std::time::Duration;
use tracing::debug;

/// Gateway to the retrieval/answer service over HTTP.
///
/// Student-mode questions go to `/student_query` with the academic
/// filters; agent-mode questions go to `/rag_query`. Both return
/// `{answer, sources}`; a response without a usable answer is mapped to
/// the fixed fallback answer rather than an error.
pub struct HttpQueryGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQueryGateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, QueryGatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryGatewayError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn post<B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<QueryAnswer, QueryGatewayError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Dispatching query to {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QueryGatewayError::Timeout
                } else {
                    QueryGatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryGatewayError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: QueryResponseBody = response
            .json()
            .await
            .map_err(|e| QueryGatewayError::MalformedResponse(e.to_string()))?;

        let answer = match body.answer {
            Some(text) if !text.trim().is_empty() => text,
            _ => FALLBACK_ANSWER.to_string(),
        };
        Ok(QueryAnswer {
            answer,
            sources: body.sources,
        })
    }
}

#[async_trait]
impl QueryGateway for HttpQueryGateway {
    async fn student_query(
        &self,
        filters: &StudentFilters,
        question: &str,
        language: &str,
    ) -> Result<QueryAnswer, QueryGatewayError> {
        let body = StudentQueryBody {
            batch: &filters.batch,
            branch: &filters.branch,
            semester: &filters.semester,
            doc_type: &filters.doc_type,
            question,
            target_language: language,
        };
        self.post("student_query", &body).await
    }

    async fn freeform_query(
        &self,
        question: &str,
        language: &str,
    ) -> Result<QueryAnswer, QueryGatewayError> {
        let body = FreeformQueryBody {
            question,
            target_language: language,
        };
        self.post("rag_query", &body).await
    }
}
