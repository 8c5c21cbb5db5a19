//! Progress through the bank as a percentage.

use crate::core::bank::QuestionBank;
use crate::core::types::Cursor;

/// Percentage of the assessment considered complete at `cursor`.
///
/// Completed sections count in full and the current question counts as done
/// within its section: `((section - 1) + question / questions_in_section) /
/// sections * 100`. The result is capped at 100; unknown cursors yield 0.
pub fn progress_percent(bank: &QuestionBank, cursor: Cursor) -> f64 {
    let total = bank.section_count();
    let in_section = bank.questions_in(cursor.section).unwrap_or(0);
    if total == 0 || in_section == 0 || cursor.question == 0 {
        return 0.0;
    }

    let total = total as f64;
    let completed_sections = (cursor.section - 1) as f64 / total;
    let within_section = (cursor.question as f64 / in_section as f64) / total;
    ((completed_sections + within_section) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bank_with_sizes;

    fn approx(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn first_question_counts_as_partially_complete() {
        let bank = bank_with_sizes(&[4, 4, 4, 4, 4, 4]);
        let progress = progress_percent(&bank, Cursor::START);
        assert!(approx(progress, 100.0 / 24.0));
    }

    #[test]
    fn start_of_section_includes_completed_sections() {
        let bank = bank_with_sizes(&[3, 2]);
        assert!(approx(progress_percent(&bank, Cursor::new(2, 1)), 75.0));
        assert!(approx(progress_percent(&bank, Cursor::new(1, 3)), 50.0));
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let bank = bank_with_sizes(&[5, 1, 3, 6, 2, 4]);
        let mut cursor = Cursor::START;
        let mut last = progress_percent(&bank, cursor);
        while let Some(next) = bank.next_cursor(cursor) {
            cursor = next;
            let progress = progress_percent(&bank, cursor);
            assert!(progress >= last, "{progress} < {last} at {cursor}");
            assert!(progress <= 100.0);
            last = progress;
        }
    }

    #[test]
    fn unknown_cursor_is_zero() {
        let bank = bank_with_sizes(&[2]);
        assert_eq!(progress_percent(&bank, Cursor::new(4, 1)), 0.0);
    }
}
