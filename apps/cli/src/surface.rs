//! Terminal rendering surface: interprets render commands as plain stdout
//! lines. Region visibility and control enablement mostly collapse away in a
//! line-oriented terminal; the option list is shared with the input loop so
//! digits can be mapped back to answer text.

use std::sync::{Arc, Mutex};

use quiz_core::{ActionControl, HistoryLine, OptionMarker, Region, RenderCommand, RenderSurface};

pub struct TerminalSurface {
    options: Arc<Mutex<Vec<String>>>,
    score: String,
    next_label: String,
}

impl TerminalSurface {
    pub fn new(options: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            options,
            score: "0".to_string(),
            next_label: "Next Question".to_string(),
        }
    }
}

impl RenderSurface for TerminalSurface {
    fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::SetText { region, text } => match region {
                Region::QuestionText => println!("\n{text}"),
                Region::Hint => println!("Hint: {text}"),
                Region::Result => println!("{text}"),
                Region::Score => self.score = text,
                Region::Total => println!("Score: {}/{text}", self.score),
            },
            RenderCommand::ClearRegion(_) | RenderCommand::SetVisible { .. } => {}
            RenderCommand::SetControlEnabled {
                control: ActionControl::Next,
                enabled: true,
            } => println!("(press n for {})", self.next_label),
            RenderCommand::SetControlEnabled { .. } => {}
            RenderCommand::SetNextLabel(label) => self.next_label = label,
            RenderCommand::SetOptions(options) => {
                for (index, option) in options.iter().enumerate() {
                    println!("  {}) {option}", index + 1);
                }
                *self.options.lock().expect("option list") = options;
            }
            RenderCommand::SetOptionsEnabled(_) => {}
            RenderCommand::MarkOption { option, marker } => match marker {
                OptionMarker::Correct => println!("  correct answer: {option}"),
                OptionMarker::Incorrect => println!("  your pick:      {option}"),
            },
            RenderCommand::SetDifficultyBadge(difficulty) => {
                println!("Difficulty: {difficulty}");
            }
            RenderCommand::ShowImage(url) => println!("[image] {url}"),
            RenderCommand::ShowImagePlaceholder => {}
            RenderCommand::SetHistory(lines) => render_history(&lines),
            RenderCommand::SetHistoryError(message) => println!("History: {message}"),
        }
    }
}

fn render_history(lines: &[HistoryLine]) {
    if lines.is_empty() {
        println!("History: no quiz history yet");
        return;
    }
    println!("History (newest first):");
    for line in lines {
        let outcome = if line.is_correct { "+" } else { "-" };
        println!(
            "  [{outcome}] {} | you: {} | correct: {} | {} | {}",
            line.question, line.user_answer, line.correct_answer, line.difficulty, line.time_label
        );
    }
}
