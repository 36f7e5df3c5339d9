use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body the question source may attach to any response status.
/// `fallback: true` grants the client permission to substitute a locally
/// stored question for the round.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct SourceFailure {
    pub error: String,
    #[serde(default)]
    pub fallback: bool,
}

impl SourceFailure {
    pub fn new(error: impl Into<String>, fallback: bool) -> Self {
        Self {
            error: error.into(),
            fallback,
        }
    }
}
