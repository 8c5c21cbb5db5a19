//! Shared deterministic types for the assessment core.
//!
//! These types define the contract between the flow controller, the scorer and
//! whatever renders the assessment. They carry no I/O and no randomness.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Pointer to the question currently presented.
///
/// Both fields are 1-based: `(1, 1)` is the first question of the first section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cursor {
    pub section: usize,
    pub question: usize,
}

impl Cursor {
    pub const START: Cursor = Cursor {
        section: 1,
        question: 1,
    };

    pub fn new(section: usize, question: usize) -> Self {
        Self { section, question }
    }

    /// Answer slot addressed by this cursor.
    pub fn key(self) -> AnswerKey {
        AnswerKey {
            section: self.section,
            question: self.question,
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.question)
    }
}

/// Unique answer slot: section id plus question ordinal within that section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnswerKey {
    pub section: usize,
    pub question: usize,
}

impl From<Cursor> for AnswerKey {
    fn from(cursor: Cursor) -> Self {
        cursor.key()
    }
}

/// A committed or pending answer.
///
/// Choice and scale questions store the selected option index; sliders store
/// the selected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Answer {
    Choice(usize),
    Slider(i64),
}

impl Answer {
    /// Raw integer as stored in the answer set.
    pub fn raw(self) -> i64 {
        match self {
            Answer::Choice(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Answer::Slider(value) => value,
        }
    }
}

/// Answers keyed by slot. Keys are unique; ordering is by `(section, question)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: BTreeMap<AnswerKey, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AnswerKey) -> Option<Answer> {
        self.entries.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnswerKey, Answer)> + '_ {
        self.entries.iter().map(|(key, answer)| (*key, *answer))
    }

    /// Record `answer` under `key`, replacing any earlier answer for the slot.
    pub(crate) fn record(&mut self, key: AnswerKey, answer: Answer) {
        self.entries.insert(key, answer);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(AnswerKey, Answer)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (AnswerKey, Answer)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Final verdict derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    /// Threshold the unrounded overall score.
    ///
    /// `> 75` is `Yes`, `(55, 75]` is `Maybe`, anything else is `No`.
    pub fn from_overall(overall: f64) -> Self {
        if overall > 75.0 {
            Recommendation::Yes
        } else if overall > 55.0 {
            Recommendation::Maybe
        } else {
            Recommendation::No
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Yes => "YES",
            Recommendation::Maybe => "MAYBE",
            Recommendation::No => "NO",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How selections outside a question's valid range are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Refuse the selection and leave the pending answer untouched.
    #[default]
    Reject,
    /// Pull the selection onto the nearest valid option or slider bound.
    Clamp,
}
