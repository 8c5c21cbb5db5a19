//! Interactive terminal session for `readiness take`.
//!
//! Reads one command per line from any [`BufRead`], drives an
//! [`AssessmentFlow`] and writes the current screen to any [`Write`]. The
//! session holds no assessment state of its own.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::error::FlowError;
use crate::core::flow::AssessmentFlow;
use crate::core::question::Question;
use crate::core::scoring::{NoiseSource, ScoreReport};
use crate::core::types::Answer;
use crate::io::report::ReportRenderer;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEnd {
    /// The flow reached its result; carries the report shown to the user.
    Completed(ScoreReport),
    /// The user quit before completing.
    Quit,
    /// Input ran out before completing.
    EndOfInput,
}

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 1-based option number for choice/scale, raw value for sliders.
    Select(i64),
    Next,
    Back,
    Reset,
    Quit,
    Help,
}

/// Parse one input line. Returns `None` for blank or unrecognized input.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "" => None,
        "n" | "next" => Some(Command::Next),
        "b" | "back" | "prev" => Some(Command::Back),
        "r" | "reset" | "retake" => Some(Command::Reset),
        "q" | "quit" | "exit" => Some(Command::Quit),
        "h" | "help" | "?" => Some(Command::Help),
        other => other.parse::<i64>().ok().map(Command::Select),
    }
}

/// Run an interactive session until the user quits or input ends.
pub fn run_session<N, R, W>(
    flow: &mut AssessmentFlow<N>,
    renderer: &ReportRenderer,
    input: R,
    out: &mut W,
) -> Result<SessionEnd>
where
    N: NoiseSource,
    R: BufRead,
    W: Write,
{
    let bank = flow.bank();
    writeln!(
        out,
        "{}\n{} sections, {} questions. Type h for help.\n",
        bank.title,
        bank.section_count(),
        bank.question_count()
    )?;
    render_screen(flow, renderer, out)?;

    for chunk in input.split(b'\n') {
        let bytes = chunk.context("read input")?;
        let Ok(line) = String::from_utf8(bytes) else {
            warn!("ignored input line that is not valid UTF-8");
            writeln!(out, "Input was not valid UTF-8; line ignored.")?;
            continue;
        };
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "Unknown command '{}'. Type h for help.", line.trim())?;
            }
            continue;
        };
        debug!(?command, "session command");

        match command {
            Command::Quit => return Ok(finish(flow, SessionEnd::Quit)),
            Command::Help => write_help(out)?,
            Command::Select(number) => match select_from_input(flow, number) {
                Ok(answer) => {
                    let label = flow
                        .current_question()
                        .map(|question| describe_answer(question, answer))
                        .unwrap_or_default();
                    writeln!(out, "Selected: {}", label)?;
                }
                Err(err) => writeln!(out, "{}", notice(&err))?,
            },
            Command::Next => match flow.advance() {
                Ok(_) => render_screen(flow, renderer, out)?,
                Err(err) => writeln!(out, "{}", notice(&err))?,
            },
            Command::Back => {
                if flow.retreat() {
                    render_screen(flow, renderer, out)?;
                } else if flow.is_completed() {
                    writeln!(out, "{}", notice(&FlowError::Completed))?;
                } else {
                    writeln!(out, "Already at the first question.")?;
                }
            }
            Command::Reset => {
                flow.reset();
                writeln!(out, "Assessment restarted.\n")?;
                render_screen(flow, renderer, out)?;
            }
        }
    }

    out.flush().context("flush output")?;
    Ok(finish(flow, SessionEnd::EndOfInput))
}

fn finish<N: NoiseSource>(flow: &AssessmentFlow<N>, otherwise: SessionEnd) -> SessionEnd {
    match flow.result() {
        Some(report) => SessionEnd::Completed(*report),
        None => otherwise,
    }
}

/// Map user input onto a flow selection: option numbers are 1-based on screen.
fn select_from_input<N: NoiseSource>(
    flow: &mut AssessmentFlow<N>,
    number: i64,
) -> Result<Answer, FlowError> {
    let value = match flow.current_question() {
        Some(Question::Slider { .. }) => number,
        Some(_) => number.saturating_sub(1),
        None => return Err(FlowError::Completed),
    };
    flow.select(value)
}

/// User-facing notice for a rejected transition.
fn notice(err: &FlowError) -> String {
    match err {
        FlowError::MissingSelection => "Please select an answer before continuing.".to_string(),
        FlowError::OptionOutOfRange { options, .. } => {
            format!("Choose an option between 1 and {}.", options)
        }
        FlowError::SliderOutOfRange { min, max, .. } => {
            format!("Enter a value between {} and {}.", min, max)
        }
        FlowError::Completed => {
            "The assessment is complete. Type r to retake or q to quit.".to_string()
        }
    }
}

fn describe_answer(question: &Question, answer: Answer) -> String {
    match (question.options(), answer) {
        (Some(options), Answer::Choice(index)) => match options.get(index) {
            Some(label) => format!("{}) {}", index + 1, label),
            None => format!("option {}", index + 1),
        },
        (_, answer) => answer.raw().to_string(),
    }
}

fn render_screen<N, W>(flow: &AssessmentFlow<N>, renderer: &ReportRenderer, out: &mut W) -> Result<()>
where
    N: NoiseSource,
    W: Write,
{
    if let Some(report) = flow.result() {
        let text = renderer.render(flow.bank(), report, flow.answers())?;
        writeln!(out, "{}", text.trim_end())?;
        writeln!(out, "\nType r to retake the assessment or q to quit.")?;
        return Ok(());
    }

    let view = flow.view();
    let (Some(cursor), Some(section), Some(question)) = (view.cursor, view.section, view.question)
    else {
        return Ok(());
    };

    writeln!(
        out,
        "Assessment Progress: {:.0}% (section {} of {})",
        view.progress,
        cursor.section,
        flow.bank().section_count()
    )?;
    if section.duration.is_empty() {
        writeln!(out, "Section {}: {}", section.id, section.title)?;
    } else {
        writeln!(
            out,
            "Section {}: {} ({})",
            section.id, section.title, section.duration
        )?;
    }
    if !section.description.is_empty() {
        writeln!(out, "{}", section.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Q{}. {}", cursor.question, question.prompt())?;

    match question {
        Question::Choice { options, .. } | Question::Scale { options, .. } => {
            for (index, option) in options.iter().enumerate() {
                writeln!(out, "  {}) {}", index + 1, option)?;
            }
        }
        Question::Slider { min, max, .. } => {
            writeln!(out, "  Enter a value from {} to {}.", min, max)?;
        }
    }
    if let Some(recorded) = view.recorded {
        writeln!(out, "  (previous answer: {})", describe_answer(question, recorded))?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Commands:\n  <number>  select an option (or slider value)\n  n         next question\n  b         previous question\n  r         restart the assessment\n  q         quit"
    )?;
    Ok(())
}
