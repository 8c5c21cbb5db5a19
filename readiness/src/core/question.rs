//! Question kinds and selection validation.

use serde::{Deserialize, Serialize};

use crate::core::error::FlowError;
use crate::core::types::{Answer, SelectionPolicy};

/// A single question. Kinds differ only in how selections are validated and
/// how answers are scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Question {
    /// Pick one of `options`. Answer is the option index.
    Choice { prompt: String, options: Vec<String> },
    /// Five-point agreement scale. Answer is the option index.
    Scale { prompt: String, options: Vec<String> },
    /// Integer in `[min, max]`.
    Slider { prompt: String, min: i64, max: i64 },
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::Choice { prompt, .. }
            | Question::Scale { prompt, .. }
            | Question::Slider { prompt, .. } => prompt,
        }
    }

    /// Option labels for choice and scale questions, `None` for sliders.
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Question::Choice { options, .. } | Question::Scale { options, .. } => Some(options),
            Question::Slider { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Question::Choice { .. } => "choice",
            Question::Scale { .. } => "scale",
            Question::Slider { .. } => "slider",
        }
    }

    /// Turn a raw selection into an answer for this question.
    ///
    /// For choice and scale questions `value` is a 0-based option index; for
    /// sliders it is the slider value. Out-of-range values are rejected or
    /// clamped according to `policy`.
    pub fn resolve(&self, value: i64, policy: SelectionPolicy) -> Result<Answer, FlowError> {
        match self {
            Question::Choice { options, .. } | Question::Scale { options, .. } => {
                resolve_option(value, options.len(), policy)
            }
            Question::Slider { min, max, .. } => resolve_slider(value, *min, *max, policy),
        }
    }
}

fn resolve_option(value: i64, options: usize, policy: SelectionPolicy) -> Result<Answer, FlowError> {
    let out_of_range = FlowError::OptionOutOfRange {
        index: value,
        options,
    };
    if options == 0 {
        return Err(out_of_range);
    }
    let last = options - 1;
    match usize::try_from(value) {
        Ok(index) if index <= last => Ok(Answer::Choice(index)),
        _ => match policy {
            SelectionPolicy::Reject => Err(out_of_range),
            SelectionPolicy::Clamp if value < 0 => Ok(Answer::Choice(0)),
            SelectionPolicy::Clamp => Ok(Answer::Choice(last)),
        },
    }
}

fn resolve_slider(value: i64, min: i64, max: i64, policy: SelectionPolicy) -> Result<Answer, FlowError> {
    if (min..=max).contains(&value) {
        return Ok(Answer::Slider(value));
    }
    match policy {
        SelectionPolicy::Reject => Err(FlowError::SliderOutOfRange { value, min, max }),
        SelectionPolicy::Clamp => Ok(Answer::Slider(value.clamp(min, max))),
    }
}
