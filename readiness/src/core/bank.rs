//! Static question bank and cursor arithmetic over it.

use serde::{Deserialize, Serialize};

use crate::core::question::Question;
use crate::core::types::Cursor;

/// One thematic group of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based ordinal; equals the section's position in the bank.
    pub id: usize,
    pub title: String,
    pub description: String,
    /// Estimated time to complete, for display (e.g. `"8-10 min"`).
    #[serde(default)]
    pub duration: String,
    /// Topic tags covered by the section.
    #[serde(default)]
    pub features: Vec<String>,
    pub questions: Vec<Question>,
}

/// Ordered, immutable sequence of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    pub title: String,
    pub sections: Vec<Section>,
}

impl QuestionBank {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|section| section.questions.len()).sum()
    }

    /// Section by 1-based id.
    pub fn section(&self, id: usize) -> Option<&Section> {
        id.checked_sub(1).and_then(|index| self.sections.get(index))
    }

    /// Number of questions in section `id`, looked up fresh from the bank.
    pub fn questions_in(&self, id: usize) -> Option<usize> {
        self.section(id).map(|section| section.questions.len())
    }

    pub fn question_at(&self, cursor: Cursor) -> Option<&Question> {
        self.section(cursor.section)?
            .questions
            .get(cursor.question.checked_sub(1)?)
    }

    pub fn contains(&self, cursor: Cursor) -> bool {
        self.question_at(cursor).is_some()
    }

    /// Cursor after `cursor`, or `None` when `cursor` is the final question.
    pub fn next_cursor(&self, cursor: Cursor) -> Option<Cursor> {
        let in_section = self.questions_in(cursor.section)?;
        if cursor.question < in_section {
            return Some(Cursor::new(cursor.section, cursor.question + 1));
        }
        let next = Cursor::new(cursor.section + 1, 1);
        self.contains(next).then_some(next)
    }

    /// Cursor before `cursor`, or `None` at `(1, 1)`.
    ///
    /// Crossing into the previous section lands on that section's last
    /// question, whatever its length.
    pub fn previous_cursor(&self, cursor: Cursor) -> Option<Cursor> {
        if cursor.question > 1 {
            return Some(Cursor::new(cursor.section, cursor.question - 1));
        }
        let section = cursor.section.checked_sub(1).filter(|id| *id >= 1)?;
        let last = self.questions_in(section).filter(|count| *count > 0)?;
        Some(Cursor::new(section, last))
    }

    pub fn is_last(&self, cursor: Cursor) -> bool {
        self.contains(cursor) && self.next_cursor(cursor).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::bank_with_sizes;

    #[test]
    fn next_cursor_walks_sections_in_order() {
        let bank = bank_with_sizes(&[2, 1, 3]);
        let mut cursor = Cursor::START;
        let mut visited = vec![cursor];
        while let Some(next) = bank.next_cursor(cursor) {
            cursor = next;
            visited.push(cursor);
        }
        assert_eq!(
            visited,
            vec![
                Cursor::new(1, 1),
                Cursor::new(1, 2),
                Cursor::new(2, 1),
                Cursor::new(3, 1),
                Cursor::new(3, 2),
                Cursor::new(3, 3),
            ]
        );
        assert_eq!(visited.len(), bank.question_count());
        assert!(bank.is_last(Cursor::new(3, 3)));
    }

    #[test]
    fn previous_cursor_uses_length_of_prior_section() {
        let bank = bank_with_sizes(&[4, 2]);
        assert_eq!(
            bank.previous_cursor(Cursor::new(2, 1)),
            Some(Cursor::new(1, 4))
        );
        assert_eq!(
            bank.previous_cursor(Cursor::new(2, 2)),
            Some(Cursor::new(2, 1))
        );
        assert_eq!(bank.previous_cursor(Cursor::START), None);
    }

    #[test]
    fn section_lookup_is_one_based() {
        let bank = bank_with_sizes(&[1, 1]);
        assert!(bank.section(0).is_none());
        assert_eq!(bank.section(2).map(|s| s.id), Some(2));
        assert!(bank.section(3).is_none());
        assert!(bank.question_at(Cursor::new(1, 0)).is_none());
    }
}
