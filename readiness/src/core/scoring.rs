//! Result scoring.
//!
//! All answers are pooled into a single average regardless of section, and
//! both sub-scores are independent noisy perturbations of that average. The
//! "psychological" and "technical" labels therefore do not reflect distinct
//! question categories.

use serde::Serialize;

use crate::core::types::{Answer, AnswerSet, Recommendation};

/// Source of the uniform perturbation applied to each sub-score.
pub trait NoiseSource {
    /// Draw a value uniformly from `[-amplitude, amplitude]`.
    fn perturbation(&mut self, amplitude: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn perturbation(&mut self, amplitude: f64) -> f64 {
        (**self).perturbation(amplitude)
    }
}

/// Scores produced once per completed assessment.
///
/// Values are unrounded; use [`ScoreReport::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Mean transformed answer value across every section.
    pub average: f64,
    pub psychological_fit: f64,
    pub technical_readiness: f64,
    pub overall: f64,
    pub recommendation: Recommendation,
}

/// Display scores, each rounded independently to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundedScores {
    pub psychological_fit: u32,
    pub technical_readiness: u32,
    pub overall: u32,
}

impl ScoreReport {
    pub fn rounded(&self) -> RoundedScores {
        RoundedScores {
            psychological_fit: round_score(self.psychological_fit),
            technical_readiness: round_score(self.technical_readiness),
            overall: round_score(self.overall),
        }
    }
}

fn round_score(value: f64) -> u32 {
    value.round().clamp(0.0, 100.0) as u32
}

/// Map an answer onto the 0-100 scoring scale.
///
/// Option index `i` becomes `(i + 1) * 20`; slider values are used as-is.
pub fn transformed_value(answer: Answer) -> f64 {
    match answer {
        Answer::Choice(index) => (index as f64 + 1.0) * 20.0,
        Answer::Slider(value) => value as f64,
    }
}

/// Score an answer set, drawing one perturbation per sub-score from `noise`.
///
/// The recommendation is thresholded on the unrounded overall score.
pub fn score_answers<N: NoiseSource>(
    answers: &AnswerSet,
    noise: &mut N,
    amplitude: f64,
) -> ScoreReport {
    let average = average_score(answers);
    let psychological_fit = perturbed(average, noise, amplitude);
    let technical_readiness = perturbed(average, noise, amplitude);
    let overall = (psychological_fit + technical_readiness) / 2.0;

    ScoreReport {
        average,
        psychological_fit,
        technical_readiness,
        overall,
        recommendation: Recommendation::from_overall(overall),
    }
}

fn average_score(answers: &AnswerSet) -> f64 {
    if answers.is_empty() {
        return 0.0;
    }
    let total: f64 = answers
        .iter()
        .map(|(_, answer)| transformed_value(answer))
        .sum();
    total / answers.len() as f64
}

fn perturbed<N: NoiseSource>(average: f64, noise: &mut N, amplitude: f64) -> f64 {
    let amplitude = if amplitude.is_finite() {
        amplitude.abs()
    } else {
        0.0
    };
    // Draws stay within [-amplitude, amplitude] whatever the source returns.
    let delta = noise.perturbation(amplitude).clamp(-amplitude, amplitude);
    (average + delta).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AnswerKey;
    use crate::test_support::ScriptedNoise;

    fn answers(values: &[Answer]) -> AnswerSet {
        values
            .iter()
            .enumerate()
            .map(|(index, answer)| {
                (
                    AnswerKey {
                        section: 1,
                        question: index + 1,
                    },
                    *answer,
                )
            })
            .collect()
    }

    #[test]
    fn choice_indices_map_onto_twenty_point_steps() {
        assert_eq!(transformed_value(Answer::Choice(0)), 20.0);
        assert_eq!(transformed_value(Answer::Choice(2)), 60.0);
        assert_eq!(transformed_value(Answer::Choice(4)), 100.0);
        assert_eq!(transformed_value(Answer::Slider(37)), 37.0);
    }

    #[test]
    fn middle_answers_score_sixty_before_noise() {
        let set = answers(&[Answer::Choice(2), Answer::Choice(2), Answer::Slider(60)]);
        let mut noise = ScriptedNoise::new([0.0, 0.0]);
        let report = score_answers(&set, &mut noise, 10.0);
        assert_eq!(report.average, 60.0);
        assert_eq!(report.overall, 60.0);
        assert_eq!(report.recommendation, Recommendation::Maybe);
    }

    #[test]
    fn noise_is_applied_per_metric_and_clamped() {
        let set = answers(&[Answer::Choice(4), Answer::Slider(100)]);
        let mut noise = ScriptedNoise::new([7.5, -4.0]);
        let report = score_answers(&set, &mut noise, 10.0);
        assert_eq!(report.psychological_fit, 100.0);
        assert_eq!(report.technical_readiness, 96.0);
        assert_eq!(report.overall, 98.0);
        assert_eq!(report.recommendation, Recommendation::Yes);
    }

    #[test]
    fn out_of_range_noise_is_bounded_by_amplitude() {
        let set = answers(&[Answer::Slider(50)]);
        let mut noise = ScriptedNoise::new([-40.0, 40.0]);
        let report = score_answers(&set, &mut noise, 10.0);
        assert_eq!(report.psychological_fit, 40.0);
        assert_eq!(report.technical_readiness, 60.0);
    }

    #[test]
    fn recommendation_uses_unrounded_overall() {
        // 75.25 rounds to 75 for display but still clears the YES threshold.
        let set = answers(&[Answer::Slider(75)]);
        let mut noise = ScriptedNoise::new([0.5, 0.0]);
        let report = score_answers(&set, &mut noise, 10.0);
        assert_eq!(report.overall, 75.25);
        assert_eq!(report.rounded().overall, 75);
        assert_eq!(report.recommendation, Recommendation::Yes);
    }

    #[test]
    fn rounding_is_independent_per_score() {
        let report = ScoreReport {
            average: 60.0,
            psychological_fit: 62.5,
            technical_readiness: 57.4,
            overall: 59.95,
            recommendation: Recommendation::Maybe,
        };
        assert_eq!(
            report.rounded(),
            RoundedScores {
                psychological_fit: 63,
                technical_readiness: 57,
                overall: 60,
            }
        );
    }

    #[test]
    fn empty_answer_set_scores_zero() {
        let mut noise = ScriptedNoise::zero();
        let report = score_answers(&AnswerSet::new(), &mut noise, 10.0);
        assert_eq!(report.average, 0.0);
        assert_eq!(report.recommendation, Recommendation::No);
    }
}
