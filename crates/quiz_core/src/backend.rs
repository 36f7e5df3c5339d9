//! Network seam between the session controller and the remote quiz service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    domain::Question,
    error::SourceFailure,
    protocol::{CheckAnswerRequest, HistoryPayload, QuestionPayload, VerdictPayload},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("question source failed: {0}")]
    Source(String),
    #[error("unexpected response status {0}")]
    Status(StatusCode),
    #[error("malformed response payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Outcome of asking the source for the next question. Hard failures are
/// reported through `Err`; this type only distinguishes the recoverable case.
#[derive(Debug, Clone)]
pub enum QuestionFetch {
    Question(Question),
    /// The source failed but explicitly permitted a local substitute.
    FallbackPermitted { reason: String },
}

#[async_trait]
pub trait QuizBackend: Send + Sync {
    async fn next_question(&self) -> Result<QuestionFetch, BackendError>;
    async fn check_answer(&self, answer: &str) -> Result<VerdictPayload, BackendError>;
    async fn fetch_history(&self) -> Result<HistoryPayload, BackendError>;
}

pub struct HttpQuizBackend {
    http: Client,
    server_url: String,
}

impl HttpQuizBackend {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }
}

#[async_trait]
impl QuizBackend for HttpQuizBackend {
    async fn next_question(&self) -> Result<QuestionFetch, BackendError> {
        let response = self
            .http
            .get(format!("{}/get_question", self.server_url))
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        // An error body can arrive on any status; the fallback flag on it is
        // the only thing that turns a failure into a recoverable one.
        if let Ok(failure) = serde_json::from_slice::<SourceFailure>(&body) {
            if failure.fallback {
                return Ok(QuestionFetch::FallbackPermitted {
                    reason: failure.error,
                });
            }
            return Err(BackendError::Source(failure.error));
        }
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }
        let payload: QuestionPayload = serde_json::from_slice(&body)?;
        Ok(QuestionFetch::Question(payload.into()))
    }

    async fn check_answer(&self, answer: &str) -> Result<VerdictPayload, BackendError> {
        let payload = self
            .http
            .post(format!("{}/check_answer", self.server_url))
            .json(&CheckAnswerRequest {
                answer: answer.to_string(),
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload)
    }

    async fn fetch_history(&self) -> Result<HistoryPayload, BackendError> {
        let payload = self
            .http
            .get(format!("{}/get_history", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload)
    }
}
