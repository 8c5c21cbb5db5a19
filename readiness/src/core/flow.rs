//! Assessment flow controller.
//!
//! [`AssessmentFlow`] owns the question bank, the cursor, the answers given so
//! far and the pending (unconfirmed) selection. A renderer reads state through
//! [`AssessmentFlow::view`] and mutates it only through [`select`], [`advance`],
//! [`retreat`] and [`reset`]. Every transition either applies fully or returns
//! an error without touching state.
//!
//! [`select`]: AssessmentFlow::select
//! [`advance`]: AssessmentFlow::advance
//! [`retreat`]: AssessmentFlow::retreat
//! [`reset`]: AssessmentFlow::reset

use tracing::{debug, info};

use crate::core::bank::{QuestionBank, Section};
use crate::core::error::FlowError;
use crate::core::invariants::validate_bank;
use crate::core::progress::progress_percent;
use crate::core::question::Question;
use crate::core::scoring::{NoiseSource, ScoreReport, score_answers};
use crate::core::types::{Answer, AnswerSet, Cursor, SelectionPolicy};

/// Default half-width of the uniform noise added to each sub-score.
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 10.0;

/// Tunables applied to every transition of a flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSettings {
    pub selection_policy: SelectionPolicy,
    pub noise_amplitude: f64,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::Reject,
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
        }
    }
}

/// Lifecycle state. `Completed` is only left through `reset`.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    InProgress(Cursor),
    Completed(ScoreReport),
}

/// What a successful `advance` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advanced {
    /// Answer committed; the cursor moved to the next question.
    Moved(Cursor),
    /// Answer committed for the final question; the result was computed.
    Completed(ScoreReport),
}

/// Read-only snapshot handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct FlowView<'a> {
    pub cursor: Option<Cursor>,
    pub section: Option<&'a Section>,
    pub question: Option<&'a Question>,
    pub pending: Option<Answer>,
    /// Answer committed earlier for the current question, if any.
    pub recorded: Option<Answer>,
    pub can_retreat: bool,
    pub can_advance: bool,
    pub progress: f64,
    pub result: Option<&'a ScoreReport>,
}

pub struct AssessmentFlow<N> {
    bank: QuestionBank,
    noise: N,
    settings: FlowSettings,
    state: FlowState,
    answers: AnswerSet,
    pending: Option<Answer>,
}

impl<N: NoiseSource> AssessmentFlow<N> {
    /// Start a flow at `(1, 1)` over `bank`.
    ///
    /// Returns the bank invariant violations if the bank is malformed.
    pub fn new(bank: QuestionBank, noise: N, settings: FlowSettings) -> Result<Self, String> {
        let errors = validate_bank(&bank);
        if !errors.is_empty() {
            return Err(format!("invalid question bank: {}", errors.join("; ")));
        }
        Ok(Self {
            bank,
            noise,
            settings,
            state: FlowState::InProgress(Cursor::START),
            answers: AnswerSet::new(),
            pending: None,
        })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn settings(&self) -> FlowSettings {
        self.settings
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn pending(&self) -> Option<Answer> {
        self.pending
    }

    /// Current cursor; `None` once completed.
    pub fn cursor(&self) -> Option<Cursor> {
        match self.state {
            FlowState::InProgress(cursor) => Some(cursor),
            FlowState::Completed(_) => None,
        }
    }

    pub fn result(&self) -> Option<&ScoreReport> {
        match &self.state {
            FlowState::InProgress(_) => None,
            FlowState::Completed(report) => Some(report),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, FlowState::Completed(_))
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.cursor().and_then(|cursor| self.bank.section(cursor.section))
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.cursor().and_then(|cursor| self.bank.question_at(cursor))
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor().is_some_and(|cursor| cursor != Cursor::START)
    }

    pub fn can_advance(&self) -> bool {
        self.cursor().is_some() && self.pending.is_some()
    }

    /// Progress percentage; 100 once completed.
    pub fn progress_percent(&self) -> f64 {
        match self.state {
            FlowState::InProgress(cursor) => progress_percent(&self.bank, cursor),
            FlowState::Completed(_) => 100.0,
        }
    }

    pub fn view(&self) -> FlowView<'_> {
        let cursor = self.cursor();
        FlowView {
            cursor,
            section: self.current_section(),
            question: self.current_question(),
            pending: self.pending,
            recorded: cursor.and_then(|cursor| self.answers.get(cursor.key())),
            can_retreat: self.can_retreat(),
            can_advance: self.can_advance(),
            progress: self.progress_percent(),
            result: self.result(),
        }
    }

    /// Set the pending selection for the current question.
    ///
    /// `value` is a 0-based option index for choice and scale questions and
    /// the slider value for sliders. Overwrites any earlier pending selection;
    /// never moves the cursor.
    pub fn select(&mut self, value: i64) -> Result<Answer, FlowError> {
        let question = self.current_question().ok_or(FlowError::Completed)?;
        let answer = question.resolve(value, self.settings.selection_policy)?;
        debug!(cursor = ?self.cursor(), ?answer, "selection updated");
        self.pending = Some(answer);
        Ok(answer)
    }

    /// Commit the pending selection and move forward.
    ///
    /// Fails with [`FlowError::MissingSelection`] when nothing is pending and
    /// with [`FlowError::Completed`] after the final transition; neither
    /// mutates state.
    pub fn advance(&mut self) -> Result<Advanced, FlowError> {
        let cursor = self.cursor().ok_or(FlowError::Completed)?;
        let answer = self.pending.ok_or(FlowError::MissingSelection)?;

        self.answers.record(cursor.key(), answer);
        self.pending = None;

        match self.bank.next_cursor(cursor) {
            Some(next) => {
                debug!(from = %cursor, to = %next, ?answer, "advanced");
                self.state = FlowState::InProgress(next);
                Ok(Advanced::Moved(next))
            }
            None => {
                let report =
                    score_answers(&self.answers, &mut self.noise, self.settings.noise_amplitude);
                info!(
                    answers = self.answers.len(),
                    average = report.average,
                    psychological_fit = report.psychological_fit,
                    technical_readiness = report.technical_readiness,
                    overall = report.overall,
                    recommendation = %report.recommendation,
                    "assessment completed"
                );
                self.state = FlowState::Completed(report);
                Ok(Advanced::Completed(report))
            }
        }
    }

    /// Step back one question, crossing into the previous section if needed.
    ///
    /// Always discards the pending selection. Returns `false` without moving
    /// at `(1, 1)` or after completion.
    pub fn retreat(&mut self) -> bool {
        let Some(cursor) = self.cursor() else {
            return false;
        };
        self.pending = None;
        match self.bank.previous_cursor(cursor) {
            Some(previous) => {
                debug!(from = %cursor, to = %previous, "retreated");
                self.state = FlowState::InProgress(previous);
                true
            }
            None => false,
        }
    }

    /// Clear all answers and any result, and return to `(1, 1)`. Idempotent.
    pub fn reset(&mut self) {
        debug!(answers = self.answers.len(), completed = self.is_completed(), "reset");
        self.answers.clear();
        self.pending = None;
        self.state = FlowState::InProgress(Cursor::START);
    }
}
