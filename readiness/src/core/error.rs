//! Transition errors reported by the assessment flow.
//!
//! None of these leave the flow in a changed state: a failed transition is
//! always safe to retry.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// `advance` was called before an answer was selected for the current question.
    #[error("select an answer before continuing")]
    MissingSelection,
    /// Option index outside `0..options`.
    #[error("option {index} is out of range (question has {options} options)")]
    OptionOutOfRange { index: i64, options: usize },
    /// Slider value outside `[min, max]`.
    #[error("value {value} is out of range [{min}, {max}]")]
    SliderOutOfRange { value: i64, min: i64, max: i64 },
    /// The assessment already produced a result; only `reset` is accepted.
    #[error("assessment already completed")]
    Completed,
}
