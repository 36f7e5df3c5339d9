//! Pure view-model to render-instruction mapping.
//!
//! Every state transition is expressed as a list of [`RenderCommand`]s built
//! by a pure function here; the stateful side (a terminal, a test recorder)
//! only has to interpret commands through [`RenderSurface`]. This keeps the
//! session machine testable without any real rendering target.

use chrono::{DateTime, Utc};
use shared::{
    domain::{Difficulty, Question},
    protocol::{HistoryPayload, VerdictPayload},
};

pub(crate) const LOADING_TEXT: &str = "Loading question...";
pub(crate) const CHECKING_TEXT: &str = "Checking answer...";
pub(crate) const ROUND_ERROR_TEXT: &str = "An error occurred. Please try again.";
pub(crate) const HISTORY_ERROR_TEXT: &str = "Failed to load history";
pub(crate) const NEXT_LABEL: &str = "Next Question";
pub(crate) const RETRY_LABEL: &str = "Try Again";

/// Named regions of the passive rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    QuestionText,
    Hint,
    Result,
    Score,
    Total,
}

/// The three action controls the controller owns the enabled state of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionControl {
    Start,
    Next,
    Hint,
}

/// Visual distinction applied to option controls once a verdict is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMarker {
    Correct,
    Incorrect,
}

/// One rendered line of the history panel, newest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLine {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub difficulty: Difficulty,
    pub time_label: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    SetText { region: Region, text: String },
    ClearRegion(Region),
    SetVisible { region: Region, visible: bool },
    SetControlEnabled { control: ActionControl, enabled: bool },
    SetNextLabel(String),
    /// Replaces all option controls; an empty list clears them.
    SetOptions(Vec<String>),
    SetOptionsEnabled(bool),
    MarkOption { option: String, marker: OptionMarker },
    SetDifficultyBadge(Difficulty),
    ShowImage(String),
    ShowImagePlaceholder,
    /// Fully replaces the history panel; an empty list is the empty state.
    SetHistory(Vec<HistoryLine>),
    SetHistoryError(String),
}

/// Stateful side of the rendering split. Implementations mutate the named
/// regions and controls; they never see controller state.
pub trait RenderSurface: Send {
    fn apply(&mut self, command: RenderCommand);
}

pub(crate) fn loading_view() -> Vec<RenderCommand> {
    vec![
        RenderCommand::SetVisible {
            region: Region::Hint,
            visible: false,
        },
        RenderCommand::ClearRegion(Region::Hint),
        RenderCommand::ClearRegion(Region::Result),
        RenderCommand::SetOptions(Vec::new()),
        RenderCommand::SetText {
            region: Region::QuestionText,
            text: LOADING_TEXT.to_string(),
        },
        RenderCommand::SetNextLabel(NEXT_LABEL.to_string()),
        RenderCommand::SetControlEnabled {
            control: ActionControl::Start,
            enabled: false,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Next,
            enabled: false,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Hint,
            enabled: false,
        },
        RenderCommand::ShowImagePlaceholder,
    ]
}

pub(crate) fn question_view(question: &Question) -> Vec<RenderCommand> {
    let mut commands = vec![
        RenderCommand::SetText {
            region: Region::QuestionText,
            text: question.prompt.clone(),
        },
        RenderCommand::SetDifficultyBadge(question.difficulty.clone()),
    ];
    match &question.image_url {
        Some(url) => commands.push(RenderCommand::ShowImage(url.clone())),
        None => commands.push(RenderCommand::ShowImagePlaceholder),
    }
    commands.extend([
        RenderCommand::SetOptions(question.options.clone()),
        RenderCommand::SetOptionsEnabled(true),
        RenderCommand::SetVisible {
            region: Region::Hint,
            visible: false,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Start,
            enabled: true,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Next,
            enabled: true,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Hint,
            enabled: true,
        },
    ]);
    commands
}

pub(crate) fn checking_view() -> Vec<RenderCommand> {
    vec![
        RenderCommand::SetOptionsEnabled(false),
        RenderCommand::SetControlEnabled {
            control: ActionControl::Start,
            enabled: false,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Next,
            enabled: false,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Hint,
            enabled: false,
        },
        RenderCommand::SetText {
            region: Region::Result,
            text: CHECKING_TEXT.to_string(),
        },
    ]
}

pub(crate) fn verdict_view(verdict: &VerdictPayload, selected: &str) -> Vec<RenderCommand> {
    let mut message = if verdict.is_correct {
        format!("Correct! The answer is {}.", verdict.correct_answer)
    } else {
        format!(
            "Incorrect. The correct answer is {}.",
            verdict.correct_answer
        )
    };
    if let Some(next) = &verdict.new_difficulty {
        message.push_str(&format!(" Next question difficulty: {next}."));
    }

    let mut commands = vec![
        RenderCommand::SetText {
            region: Region::Result,
            text: message,
        },
        RenderCommand::MarkOption {
            option: verdict.correct_answer.clone(),
            marker: OptionMarker::Correct,
        },
    ];
    if selected != verdict.correct_answer {
        commands.push(RenderCommand::MarkOption {
            option: selected.to_string(),
            marker: OptionMarker::Incorrect,
        });
    }
    commands.extend([
        RenderCommand::SetText {
            region: Region::Score,
            text: verdict.totals.score.to_string(),
        },
        RenderCommand::SetText {
            region: Region::Total,
            text: verdict.totals.total_questions.to_string(),
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Start,
            enabled: true,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Next,
            enabled: true,
        },
    ]);
    commands
}

pub(crate) fn round_error_view() -> Vec<RenderCommand> {
    vec![
        RenderCommand::SetText {
            region: Region::Result,
            text: ROUND_ERROR_TEXT.to_string(),
        },
        RenderCommand::SetNextLabel(RETRY_LABEL.to_string()),
        RenderCommand::SetControlEnabled {
            control: ActionControl::Start,
            enabled: true,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Next,
            enabled: true,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Hint,
            enabled: true,
        },
    ]
}

pub(crate) fn hint_view(hint: &str) -> Vec<RenderCommand> {
    vec![
        RenderCommand::SetText {
            region: Region::Hint,
            text: hint.to_string(),
        },
        RenderCommand::SetVisible {
            region: Region::Hint,
            visible: true,
        },
        RenderCommand::SetControlEnabled {
            control: ActionControl::Hint,
            enabled: false,
        },
    ]
}

pub(crate) fn history_view(payload: &HistoryPayload) -> Vec<RenderCommand> {
    let lines = payload
        .history
        .iter()
        .rev()
        .map(|entry| HistoryLine {
            question: entry.question.clone(),
            user_answer: entry.user_answer.clone(),
            correct_answer: entry.correct_answer.clone(),
            difficulty: entry.difficulty.clone(),
            time_label: format_entry_time(entry.timestamp),
            is_correct: entry.is_correct,
        })
        .collect();
    vec![
        RenderCommand::SetHistory(lines),
        RenderCommand::SetText {
            region: Region::Score,
            text: payload.totals.score.to_string(),
        },
        RenderCommand::SetText {
            region: Region::Total,
            text: payload.totals.total_questions.to_string(),
        },
    ]
}

pub(crate) fn history_error_view() -> Vec<RenderCommand> {
    vec![RenderCommand::SetHistoryError(
        HISTORY_ERROR_TEXT.to_string(),
    )]
}

/// Human-readable time for a history line. Kept in UTC so identical input
/// renders identically everywhere; the date keeps entries from different
/// days distinguishable.
pub(crate) fn format_entry_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
