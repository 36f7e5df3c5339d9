//! Client-side quiz session controller.
//!
//! Owns the round state machine (idle, loading, answering, checking, result),
//! talks to the remote quiz service through [`QuizBackend`], and drives a
//! passive [`RenderSurface`] with instructions produced by the pure mapping
//! in [`view`]. One controller instance is one logical session; nothing here
//! is process-global, so tests run as many independent sessions as they like.

use shared::domain::Question;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub mod backend;
mod fallback;
pub mod view;

#[cfg(test)]
mod tests;

pub use backend::{BackendError, HttpQuizBackend, QuestionFetch, QuizBackend};
pub use view::{
    ActionControl, HistoryLine, OptionMarker, Region, RenderCommand, RenderSurface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Idle,
    Loading,
    Answering,
    Checking,
    Result,
}

#[derive(Debug)]
struct RoundState {
    phase: RoundPhase,
    current_question: Option<Question>,
    busy: bool,
    hint_shown: bool,
    /// Monotonic round tag; completions carrying a stale tag are discarded
    /// so a late response can never corrupt a newer round's display.
    round: u64,
}

impl RoundState {
    fn new() -> Self {
        Self {
            phase: RoundPhase::Idle,
            current_question: None,
            busy: false,
            hint_shown: false,
            round: 0,
        }
    }
}

pub struct QuizSession<B, S> {
    backend: B,
    surface: Mutex<S>,
    state: Mutex<RoundState>,
    fallback_questions: Vec<Question>,
}

impl<B: QuizBackend, S: RenderSurface> QuizSession<B, S> {
    pub fn new(backend: B, surface: S) -> Self {
        Self {
            backend,
            surface: Mutex::new(surface),
            state: Mutex::new(RoundState::new()),
            fallback_questions: fallback::builtin_questions(),
        }
    }

    /// Replaces the built-in fallback set. Mostly for tests that need a
    /// deterministic substitute question.
    pub fn with_fallback_questions(mut self, questions: Vec<Question>) -> Self {
        self.fallback_questions = questions;
        self
    }

    pub async fn phase(&self) -> RoundPhase {
        self.state.lock().await.phase
    }

    pub async fn current_question(&self) -> Option<Question> {
        self.state.lock().await.current_question.clone()
    }

    /// One-time startup work: populate the history panel before any round.
    pub async fn initialize(&self) {
        self.refresh_history().await;
    }

    /// Start (or retry) a round. A no-op while a question request is already
    /// outstanding; callable from any phase otherwise, which is what makes
    /// "next" double as the retry affordance.
    pub async fn start_round(&self) {
        let round = {
            let mut state = self.state.lock().await;
            if state.busy {
                debug!("round start ignored while a question request is outstanding");
                return;
            }
            state.busy = true;
            state.phase = RoundPhase::Loading;
            state.current_question = None;
            state.hint_shown = false;
            state.round += 1;
            state.round
        };
        self.render(view::loading_view()).await;

        let question = match self.backend.next_question().await {
            Ok(QuestionFetch::Question(question)) => Some(question),
            Ok(QuestionFetch::FallbackPermitted { reason }) => {
                info!(reason, "question source degraded; picking local fallback");
                fallback::pick(&self.fallback_questions)
            }
            Err(err) => {
                warn!(error = %err, "question fetch failed");
                None
            }
        };
        let question = question.filter(|question| {
            let well_formed = question.is_well_formed();
            if !well_formed {
                warn!(prompt = %question.prompt, "rejecting malformed question");
            }
            well_formed
        });

        let mut state = self.state.lock().await;
        if state.round != round {
            debug!(round, "discarding stale question fetch");
            return;
        }
        match question {
            Some(question) => {
                state.phase = RoundPhase::Answering;
                state.current_question = Some(question.clone());
                state.busy = false;
                drop(state);
                self.render_for_round(round, view::question_view(&question))
                    .await;
            }
            None => {
                state.phase = RoundPhase::Idle;
                state.current_question = None;
                state.busy = false;
                drop(state);
                self.render_for_round(round, view::round_error_view()).await;
            }
        }
    }

    /// Submit the selected option for the current round. Only the first
    /// selection of an answering round does anything: the phase moves to
    /// checking before any await, so a round gets at most one verification
    /// request.
    pub async fn submit_answer(&self, answer: &str) {
        let round = {
            let mut state = self.state.lock().await;
            if state.phase != RoundPhase::Answering {
                debug!(phase = ?state.phase, "answer ignored outside the answering phase");
                return;
            }
            let is_current_option = state
                .current_question
                .as_ref()
                .is_some_and(|question| question.options.iter().any(|option| option == answer));
            if !is_current_option {
                debug!("ignoring selection that is not one of the current options");
                return;
            }
            state.phase = RoundPhase::Checking;
            state.round
        };
        self.render_for_round(round, view::checking_view()).await;

        let verdict = self.backend.check_answer(answer).await;

        {
            let mut state = self.state.lock().await;
            if state.round != round {
                debug!(round, "discarding stale verdict");
                return;
            }
            state.phase = match verdict {
                Ok(_) => RoundPhase::Result,
                // Round abandoned; the question stays populated but the
                // phase guard keeps it unusable until the next round.
                Err(_) => RoundPhase::Idle,
            };
        }
        match verdict {
            Ok(verdict) => {
                self.render_for_round(round, view::verdict_view(&verdict, answer))
                    .await;
                // Independent of the round machine: a failure here only
                // touches the history panel.
                self.refresh_history().await;
            }
            Err(err) => {
                warn!(error = %err, "answer verification failed");
                self.render_for_round(round, view::round_error_view()).await;
            }
        }
    }

    /// Reveal the current question's hint, at most once per round. No hint,
    /// already revealed, or no current question: a no-op.
    pub async fn reveal_hint(&self) {
        let (round, hint) = {
            let mut state = self.state.lock().await;
            if state.hint_shown {
                return;
            }
            let Some(hint) = state
                .current_question
                .as_ref()
                .filter(|question| question.has_hint())
                .and_then(|question| question.hint.clone())
            else {
                debug!("hint requested but the current question has none");
                return;
            };
            state.hint_shown = true;
            (state.round, hint)
        };
        self.render_for_round(round, view::hint_view(&hint)).await;
    }

    /// Re-read the full history and score from the store and re-render the
    /// panel. Failures surface only inside the panel; score regions keep
    /// their stale values.
    pub async fn refresh_history(&self) {
        match self.backend.fetch_history().await {
            Ok(payload) => self.render(view::history_view(&payload)).await,
            Err(err) => {
                warn!(error = %err, "history fetch failed");
                self.render(view::history_error_view()).await;
            }
        }
    }

    async fn render(&self, commands: Vec<RenderCommand>) {
        let mut surface = self.surface.lock().await;
        for command in commands {
            surface.apply(command);
        }
    }

    /// Round-scoped render. The round tag is re-checked after the surface
    /// lock is won: a transition validated moments before a newer round began
    /// must not draw over that round's display. The state lock is taken only
    /// for the check, never across a surface apply.
    async fn render_for_round(&self, round: u64, commands: Vec<RenderCommand>) {
        let mut surface = self.surface.lock().await;
        if self.state.lock().await.round != round {
            debug!(round, "discarding render for a superseded round");
            return;
        }
        for command in commands {
            surface.apply(command);
        }
    }
}
