use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, HistoryEntry, Question, SessionScore};

/// Successful body of `GET /get_question`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub difficulty: Difficulty,
}

impl From<QuestionPayload> for Question {
    fn from(payload: QuestionPayload) -> Self {
        Question {
            prompt: payload.question,
            options: payload.options,
            correct_answer: payload.correct_answer,
            hint: payload.hint,
            difficulty: payload.difficulty,
            image_url: payload.image,
        }
    }
}

/// Body of `POST /check_answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    pub answer: String,
}

/// The authoritative verdict for a submitted answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictPayload {
    pub is_correct: bool,
    pub correct_answer: String,
    #[serde(flatten)]
    pub totals: SessionScore,
    /// Difficulty the source intends for the next round, when it previews one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_difficulty: Option<Difficulty>,
}

/// Response of `GET /get_history`: the full chronological history plus the
/// current counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPayload {
    pub history: Vec<HistoryEntry>,
    #[serde(flatten)]
    pub totals: SessionScore,
}
