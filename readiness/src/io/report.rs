//! Result view rendering.

use anyhow::{Context, Result};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::core::bank::QuestionBank;
use crate::core::dimensions::{DimensionBreakdown, dimension_breakdowns};
use crate::core::scoring::ScoreReport;
use crate::core::types::AnswerSet;
use crate::guidance::guidance_for;

const REPORT_TEMPLATE: &str = include_str!("../templates/report.txt");

/// Indented dimension labels end where the score labels above them do.
const LABEL_WIDTH: usize = 21;

/// A breakdown flattened into aligned display lines.
#[derive(Serialize)]
struct BreakdownView {
    title: String,
    lines: Vec<String>,
}

impl From<DimensionBreakdown> for BreakdownView {
    fn from(breakdown: DimensionBreakdown) -> Self {
        let lines = breakdown
            .dimensions
            .into_iter()
            .map(|dimension| match dimension.value {
                Some(value) => format!("{:<width$}{}/100", dimension.label, value, width = LABEL_WIDTH),
                None => format!("{:<width$}not answered", dimension.label, width = LABEL_WIDTH),
            })
            .collect();
        Self {
            title: breakdown.title,
            lines,
        }
    }
}

/// Template engine wrapper around minijinja.
pub struct ReportRenderer {
    env: Environment<'static>,
}

impl ReportRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("report", REPORT_TEMPLATE)
            .context("compile report template")?;
        Ok(Self { env })
    }

    /// Render rounded scores, per-dimension breakdowns, the recommendation
    /// and its guidance.
    pub fn render(
        &self,
        bank: &QuestionBank,
        report: &ScoreReport,
        answers: &AnswerSet,
    ) -> Result<String> {
        let template = self.env.get_template("report")?;
        let breakdowns: Vec<BreakdownView> = dimension_breakdowns(bank, answers)
            .into_iter()
            .map(BreakdownView::from)
            .collect();
        let rendered = template
            .render(context! {
                title => &bank.title,
                scores => report.rounded(),
                breakdowns => breakdowns,
                recommendation => report.recommendation.as_str(),
                guidance => guidance_for(report.recommendation),
                answered => answers.len(),
            })
            .context("render report")?;
        Ok(rendered)
    }
}
