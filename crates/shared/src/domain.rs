use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display-only difficulty tag. The set is open: unrecognized values are
/// carried through verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Other(label) => label,
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(value),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One trivia item, held as the current question for the duration of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub hint: Option<String>,
    pub difficulty: Difficulty,
    pub image_url: Option<String>,
}

impl Question {
    /// The invariant every renderable question must satisfy: at least two
    /// choices, and the correct answer is one of them.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.options.iter().any(|option| option == &self.correct_answer)
    }

    pub fn has_hint(&self) -> bool {
        self.hint.as_deref().is_some_and(|hint| !hint.is_empty())
    }
}

/// A past round's outcome, owned and ordered by the remote history store.
/// Append-only from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub difficulty: Difficulty,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate counters owned by the remote store. The client displays these
/// verbatim and never computes them locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    pub score: u32,
    pub total_questions: u32,
}
