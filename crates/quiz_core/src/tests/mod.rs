
use std::sync::{Arc, Mutex as StdMutex};

use shared::{
    domain::{Difficulty, Question, SessionScore},
    protocol::VerdictPayload,
};

use crate::{RenderCommand, RenderSurface};

/// Surface that records every instruction it is given, so tests can assert
/// on exactly what a transition rendered.
#[derive(Clone, Default)]
pub(crate) struct RecordingSurface {
    commands: Arc<StdMutex<Vec<RenderCommand>>>,
}

impl RecordingSurface {
    pub(crate) fn new() -> (Self, Arc<StdMutex<Vec<RenderCommand>>>) {
        let surface = Self::default();
        let handle = surface.commands.clone();
        (surface, handle)
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, command: RenderCommand) {
        self.commands.lock().expect("command log").push(command);
    }
}

pub(crate) fn sample_question() -> Question {
    Question {
        prompt: "Capital of Japan?".to_string(),
        options: vec![
            "Kyoto".to_string(),
            "Osaka".to_string(),
            "Tokyo".to_string(),
            "Hiroshima".to_string(),
        ],
        correct_answer: "Tokyo".to_string(),
        hint: Some("This city hosted the 2020 Summer Olympics.".to_string()),
        difficulty: Difficulty::Easy,
        image_url: None,
    }
}

pub(crate) fn sample_verdict(is_correct: bool) -> VerdictPayload {
    VerdictPayload {
        is_correct,
        correct_answer: "Tokyo".to_string(),
        totals: SessionScore {
            score: 3,
            total_questions: 5,
        },
        new_difficulty: None,
    }
}
