//! Lifecycle tests driving `AssessmentFlow` over the built-in bank.
//!
//! These walk the full six-section assessment to check cursor ordering,
//! progress, the one-shot completion and scoring bounds with real RNG noise.

use readiness::core::bank::QuestionBank;
use readiness::core::error::FlowError;
use readiness::core::flow::{Advanced, AssessmentFlow, FlowSettings};
use readiness::core::question::Question;
use readiness::core::scoring::NoiseSource;
use readiness::core::types::{Cursor, Recommendation};
use readiness::io::bank_store::builtin_bank;
use readiness::io::noise::RandNoise;
use readiness::test_support::ScriptedNoise;

/// Middle option for choice/scale questions, `slider` for sliders.
fn middle_answer(question: &Question, slider: i64) -> i64 {
    match question {
        Question::Slider { .. } => slider,
        _ => 2,
    }
}

/// Top option for choice/scale questions, the maximum for sliders.
fn top_answer(question: &Question) -> i64 {
    match question {
        Question::Slider { max, .. } => *max,
        Question::Choice { options, .. } | Question::Scale { options, .. } => {
            options.len() as i64 - 1
        }
    }
}

/// Answer every question with `pick`, returning the visited cursors.
fn answer_all<N, F>(flow: &mut AssessmentFlow<N>, pick: F) -> Vec<Cursor>
where
    N: NoiseSource,
    F: Fn(&Question) -> i64,
{
    let mut visited = Vec::new();
    while let Some(cursor) = flow.cursor() {
        visited.push(cursor);
        let question = flow.current_question().expect("question").clone();
        flow.select(pick(&question)).expect("select");
        flow.advance().expect("advance");
    }
    visited
}

fn builtin() -> QuestionBank {
    builtin_bank().expect("builtin bank")
}

#[test]
fn cursor_visits_every_question_in_order_once() {
    let bank = builtin();
    let total = bank.question_count();
    let mut flow =
        AssessmentFlow::new(bank, ScriptedNoise::zero(), FlowSettings::default()).expect("flow");

    let visited = answer_all(&mut flow, |q| middle_answer(q, 60));

    assert_eq!(visited.len(), total);
    assert_eq!(visited.first(), Some(&Cursor::START));
    for pair in visited.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let same_section = next.section == prev.section && next.question == prev.question + 1;
        let next_section = next.section == prev.section + 1 && next.question == 1;
        assert!(same_section || next_section, "{prev} -> {next}");
    }
    assert_eq!(visited.last().map(|c| c.section), Some(6));
    assert_eq!(flow.answers().len(), total);
}

#[test]
fn progress_never_decreases_and_ends_at_hundred() {
    let mut flow =
        AssessmentFlow::new(builtin(), ScriptedNoise::zero(), FlowSettings::default())
            .expect("flow");
    let mut last = flow.progress_percent();
    assert!(last > 0.0);
    while !flow.is_completed() {
        let question = flow.current_question().expect("question").clone();
        flow.select(middle_answer(&question, 50)).expect("select");
        flow.advance().expect("advance");
        let progress = flow.progress_percent();
        assert!(progress >= last);
        assert!(progress <= 100.0);
        last = progress;
    }
    assert_eq!(last, 100.0);
}

#[test]
fn middle_answers_land_in_maybe_or_no_band() {
    for seed in 0..200 {
        let mut flow = AssessmentFlow::new(
            builtin(),
            RandNoise::seeded(seed),
            FlowSettings::default(),
        )
        .expect("flow");
        answer_all(&mut flow, |q| middle_answer(q, 60));

        let report = *flow.result().expect("result");
        assert_eq!(report.average, 60.0);
        for score in [
            report.psychological_fit,
            report.technical_readiness,
            report.overall,
        ] {
            assert!((50.0..=70.0).contains(&score), "seed {seed}: {score}");
        }
        let expected = if report.overall > 55.0 {
            Recommendation::Maybe
        } else {
            Recommendation::No
        };
        assert_eq!(report.recommendation, expected, "seed {seed}");
    }
}

#[test]
fn perfect_answers_always_recommend_yes() {
    for seed in 0..200 {
        let mut flow = AssessmentFlow::new(
            builtin(),
            RandNoise::seeded(seed),
            FlowSettings::default(),
        )
        .expect("flow");
        answer_all(&mut flow, top_answer);

        let report = *flow.result().expect("result");
        assert_eq!(report.average, 100.0);
        assert!((90.0..=100.0).contains(&report.overall), "seed {seed}");
        assert_eq!(report.recommendation, Recommendation::Yes);
    }
}

#[test]
fn completion_draws_noise_exactly_once_per_metric() {
    let mut noise = ScriptedNoise::new([3.0, -3.0, 9.0, 9.0]);
    let report = {
        let mut flow = AssessmentFlow::new(builtin(), &mut noise, FlowSettings::default())
            .expect("flow");
        answer_all(&mut flow, |q| middle_answer(q, 60));
        assert_eq!(flow.advance(), Err(FlowError::Completed));
        assert_eq!(flow.advance(), Err(FlowError::Completed));
        *flow.result().expect("result")
    };
    assert_eq!(noise.calls, 2);
    assert_eq!(report.psychological_fit, 63.0);
    assert_eq!(report.technical_readiness, 57.0);
    assert_eq!(report.overall, 60.0);
}

#[test]
fn retake_after_reset_recomputes_result() {
    let mut flow = AssessmentFlow::new(
        builtin(),
        ScriptedNoise::new([0.0, 0.0, 0.0, 0.0]),
        FlowSettings::default(),
    )
    .expect("flow");
    answer_all(&mut flow, top_answer);
    assert_eq!(
        flow.result().map(|r| r.recommendation),
        Some(Recommendation::Yes)
    );

    flow.reset();
    assert_eq!(flow.cursor(), Some(Cursor::START));
    assert!(flow.answers().is_empty());

    answer_all(&mut flow, |_| 0);
    let report = flow.result().expect("result");
    assert!(report.average < 55.0);
    assert_eq!(report.recommendation, Recommendation::No);
}

#[test]
fn retreat_across_section_boundary_and_back() {
    let mut flow =
        AssessmentFlow::new(builtin(), ScriptedNoise::zero(), FlowSettings::default())
            .expect("flow");
    let first_section_len = flow.bank().questions_in(1).expect("section 1");
    for _ in 0..first_section_len {
        flow.select(1).expect("select");
        flow.advance().expect("advance");
    }
    assert_eq!(flow.cursor(), Some(Cursor::new(2, 1)));

    assert!(flow.retreat());
    assert_eq!(flow.cursor(), Some(Cursor::new(1, first_section_len)));
    flow.select(1).expect("select");
    assert_eq!(flow.advance(), Ok(Advanced::Moved(Cursor::new(2, 1))));
    assert_eq!(flow.answers().len(), first_section_len);
}
