//! Semantic bank invariants not expressible via JSON Schema.

use crate::core::bank::{QuestionBank, Section};
use crate::core::question::Question;

/// Scale questions always offer this many labels.
pub const SCALE_OPTIONS: usize = 5;
/// Upper bound on choice options so `(index + 1) * 20` stays within 100.
pub const MAX_CHOICE_OPTIONS: usize = 5;
/// Slider answers are scored as-is, so ranges must sit inside this window.
pub const SLIDER_FLOOR: i64 = 0;
pub const SLIDER_CEILING: i64 = 100;

/// Check semantic invariants of a question bank:
/// - At least one section
/// - Section ids are `1..=n` in order
/// - Every section has at least one question
/// - Choice questions have 2..=5 non-empty options, scales exactly 5
/// - Slider ranges satisfy `0 <= min < max <= 100`
/// - Prompts are non-empty
pub fn validate_bank(bank: &QuestionBank) -> Vec<String> {
    let mut errors = Vec::new();

    if bank.sections.is_empty() {
        errors.push("bank must contain at least one section".to_string());
    }

    for (index, section) in bank.sections.iter().enumerate() {
        let expected = index + 1;
        if section.id != expected {
            errors.push(format!(
                "section at position {} has id {} (expected {})",
                expected, section.id, expected
            ));
        }
        validate_section(section, &mut errors);
    }

    errors
}

fn validate_section(section: &Section, errors: &mut Vec<String>) {
    let path = format!("section {}", section.id);

    if section.title.trim().is_empty() {
        errors.push(format!("{}: title must be non-empty", path));
    }

    if section.questions.is_empty() {
        errors.push(format!("{}: must contain at least one question", path));
    }

    for (index, question) in section.questions.iter().enumerate() {
        let question_path = format!("{}/question {}", path, index + 1);
        validate_question(question, errors, &question_path);
    }
}

fn validate_question(question: &Question, errors: &mut Vec<String>, path: &str) {
    if question.prompt().trim().is_empty() {
        errors.push(format!("{}: prompt must be non-empty", path));
    }

    match question {
        Question::Choice { options, .. } => {
            if !(2..=MAX_CHOICE_OPTIONS).contains(&options.len()) {
                errors.push(format!(
                    "{}: choice must have 2..={} options, found {}",
                    path,
                    MAX_CHOICE_OPTIONS,
                    options.len()
                ));
            }
            check_labels(options, errors, path);
        }
        Question::Scale { options, .. } => {
            if options.len() != SCALE_OPTIONS {
                errors.push(format!(
                    "{}: scale must have exactly {} options, found {}",
                    path,
                    SCALE_OPTIONS,
                    options.len()
                ));
            }
            check_labels(options, errors, path);
        }
        Question::Slider { min, max, .. } => {
            if min >= max {
                errors.push(format!("{}: slider min {} must be < max {}", path, min, max));
            }
            if *min < SLIDER_FLOOR || *max > SLIDER_CEILING {
                errors.push(format!(
                    "{}: slider range [{}, {}] must lie within [{}, {}]",
                    path, min, max, SLIDER_FLOOR, SLIDER_CEILING
                ));
            }
        }
    }
}

fn check_labels(options: &[String], errors: &mut Vec<String>, path: &str) {
    if options.iter().any(|option| option.trim().is_empty()) {
        errors.push(format!("{}: option labels must be non-empty", path));
    }
}
