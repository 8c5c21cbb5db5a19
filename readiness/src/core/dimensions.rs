//! Per-dimension breakdown for sections that rate one labelled trait per slider.
//!
//! A section qualifies when every question is a slider and it lists exactly one
//! feature label per question. Each label is paired with the slider answer at
//! the same position. The breakdown is presentational only and never feeds the
//! pooled score.

use serde::Serialize;

use crate::core::bank::{QuestionBank, Section};
use crate::core::question::Question;
use crate::core::types::{Answer, AnswerSet, Cursor};

/// One labelled slider answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionScore {
    pub label: String,
    /// Recorded slider value; `None` when the slot was never answered.
    pub value: Option<i64>,
}

/// Breakdown for one qualifying section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionBreakdown {
    pub title: String,
    pub dimensions: Vec<DimensionScore>,
}

/// Breakdowns for every qualifying section, in bank order.
pub fn dimension_breakdowns(
    bank: &QuestionBank,
    answers: &AnswerSet,
) -> Vec<DimensionBreakdown> {
    bank.sections
        .iter()
        .filter(|section| is_dimension_section(section))
        .map(|section| DimensionBreakdown {
            title: section.title.clone(),
            dimensions: section
                .features
                .iter()
                .enumerate()
                .map(|(index, label)| DimensionScore {
                    label: label.clone(),
                    value: slider_answer(answers, Cursor::new(section.id, index + 1)),
                })
                .collect(),
        })
        .collect()
}

fn is_dimension_section(section: &Section) -> bool {
    !section.questions.is_empty()
        && section.features.len() == section.questions.len()
        && section
            .questions
            .iter()
            .all(|question| matches!(question, Question::Slider { .. }))
}

fn slider_answer(answers: &AnswerSet, cursor: Cursor) -> Option<i64> {
    match answers.get(cursor.key())? {
        Answer::Slider(value) => Some(value),
        Answer::Choice(_) => None,
    }
}
