//! Test-only helpers for constructing banks and scripting noise.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::bank::{QuestionBank, Section};
use crate::core::question::Question;
use crate::core::scoring::NoiseSource;

/// Noise source that replays scripted draws, then returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNoise {
    draws: VecDeque<f64>,
    /// Number of draws requested so far.
    pub calls: usize,
}

impl ScriptedNoise {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            calls: 0,
        }
    }

    /// Noise source that always draws 0.
    pub fn zero() -> Self {
        Self::default()
    }
}

impl NoiseSource for ScriptedNoise {
    fn perturbation(&mut self, _amplitude: f64) -> f64 {
        self.calls += 1;
        self.draws.pop_front().unwrap_or(0.0)
    }
}

/// Five-option choice question with a deterministic prompt.
pub fn choice(prompt: &str) -> Question {
    Question::Choice {
        prompt: prompt.to_string(),
        options: (1..=5).map(|i| format!("{} option {}", prompt, i)).collect(),
    }
}

/// Five-point agreement scale question.
pub fn scale(prompt: &str) -> Question {
    Question::Scale {
        prompt: prompt.to_string(),
        options: [
            "Strongly disagree",
            "Disagree",
            "Neutral",
            "Agree",
            "Strongly agree",
        ]
        .iter()
        .map(|label| label.to_string())
        .collect(),
    }
}

/// Slider over `[0, 100]`.
pub fn slider(prompt: &str) -> Question {
    Question::Slider {
        prompt: prompt.to_string(),
        min: 0,
        max: 100,
    }
}

/// Create a section with deterministic metadata.
pub fn section(id: usize, questions: Vec<Question>) -> Section {
    Section {
        id,
        title: format!("Section {}", id),
        description: format!("Section {} description", id),
        duration: "1 min".to_string(),
        features: Vec::new(),
        questions,
    }
}

/// Bank whose section `i` holds `sizes[i]` five-option choice questions.
pub fn bank_with_sizes(sizes: &[usize]) -> QuestionBank {
    let sections = sizes
        .iter()
        .enumerate()
        .map(|(index, size)| {
            let id = index + 1;
            let questions = (1..=*size)
                .map(|question| choice(&format!("s{}q{}", id, question)))
                .collect();
            section(id, questions)
        })
        .collect();
    QuestionBank {
        title: "Test bank".to_string(),
        sections,
    }
}

/// Two sections: `[choice, scale]` then `[slider]`.
pub fn mixed_bank() -> QuestionBank {
    QuestionBank {
        title: "Mixed bank".to_string(),
        sections: vec![
            section(1, vec![choice("background"), scale("enjoys puzzles")]),
            section(2, vec![slider("motivation")]),
        ],
    }
}

/// Write `contents` to `name` inside a fresh temp directory.
///
/// The directory is removed when the returned guard drops.
pub fn write_temp(name: &str, contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create tempdir")?;
    let path = dir.path().join(name);
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((dir, path))
}
