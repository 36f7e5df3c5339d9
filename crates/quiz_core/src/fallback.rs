//! Built-in questions substituted when the remote source signals that a
//! local fallback is acceptable.

use rand::Rng;
use shared::domain::{Difficulty, Question};

pub(crate) fn builtin_questions() -> Vec<Question> {
    vec![
        Question {
            prompt: "Which river is the longest in the world?".to_string(),
            options: vec![
                "Amazon".to_string(),
                "Nile".to_string(),
                "Yangtze".to_string(),
                "Mississippi".to_string(),
            ],
            correct_answer: "Nile".to_string(),
            hint: Some("This river flows through northeastern Africa.".to_string()),
            difficulty: Difficulty::Medium,
            image_url: None,
        },
        Question {
            prompt: "What is the capital of Japan?".to_string(),
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
        },
        Question {
            prompt: "Which country is known as the 'Land of the Rising Sun'?".to_string(),
            options: vec![
                "China".to_string(),
                "South Korea".to_string(),
                "Japan".to_string(),
                "Thailand".to_string(),
            ],
            correct_answer: "Japan".to_string(),
            hint: Some(
                "This country's flag features a red circle on a white background.".to_string(),
            ),
            difficulty: Difficulty::Easy,
            image_url: None,
        },
    ]
}

/// Uniform random pick. `None` only when the configured set is empty.
pub(crate) fn pick(questions: &[Question]) -> Option<Question> {
    if questions.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..questions.len());
    Some(questions[index].clone())
}
