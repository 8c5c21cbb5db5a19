//! Command-line entry point for the readiness assessment.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use readiness::core::bank::QuestionBank;
use readiness::core::flow::AssessmentFlow;
use readiness::exit_codes;
use readiness::io::bank_store::resolve_bank;
use readiness::io::config::{DEFAULT_CONFIG_FILE, ReadinessConfig, load_config};
use readiness::io::noise::RandNoise;
use readiness::io::report::ReportRenderer;
use readiness::logging;
use readiness::session::{SessionEnd, run_session};

#[derive(Parser)]
#[command(
    name = "readiness",
    version,
    about = "Should you learn React.js? An interactive readiness assessment"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Take the assessment interactively.
    Take {
        #[command(flatten)]
        source: SourceArgs,
        /// Seed the scoring noise for a reproducible result.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check a question bank against the schema and invariants.
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print sections, durations and question counts.
    Outline {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Config file (defaults to `readiness.toml` when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Question bank JSON (defaults to the built-in bank).
    #[arg(long)]
    bank: Option<PathBuf>,
}

impl SourceArgs {
    /// Load config, letting `--bank` override the file.
    fn config(&self) -> Result<ReadinessConfig> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut cfg = load_config(&path)?;
        if let Some(bank) = &self.bank {
            cfg.bank_path = Some(bank.clone());
        }
        Ok(cfg)
    }
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Take { source, seed } => cmd_take(&source, seed),
        Command::Validate { source } => cmd_validate(&source),
        Command::Outline { source } => cmd_outline(&source),
    }
}

fn cmd_take(source: &SourceArgs, seed: Option<u64>) -> Result<i32> {
    let cfg = source.config()?;
    let bank = load_bank(&cfg)?;
    let seed = seed.or(cfg.seed);
    info!(seed = ?seed, policy = ?cfg.selection_policy, "starting assessment");

    let mut flow = AssessmentFlow::new(bank, RandNoise::from_seed(seed), cfg.flow_settings())
        .map_err(anyhow::Error::msg)?;
    let renderer = ReportRenderer::new()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let end = run_session(&mut flow, &renderer, stdin.lock(), &mut stdout)?;
    stdout.flush().context("flush stdout")?;

    Ok(match end {
        SessionEnd::Completed(_) => exit_codes::OK,
        SessionEnd::Quit | SessionEnd::EndOfInput => exit_codes::INCOMPLETE,
    })
}

fn cmd_validate(source: &SourceArgs) -> Result<i32> {
    let cfg = source.config()?;
    let bank = load_bank(&cfg)?;
    println!(
        "valid: {} ({} sections, {} questions)",
        bank.title,
        bank.section_count(),
        bank.question_count()
    );
    Ok(exit_codes::OK)
}

fn cmd_outline(source: &SourceArgs) -> Result<i32> {
    let cfg = source.config()?;
    let bank = load_bank(&cfg)?;
    print!("{}", render_outline(&bank));
    Ok(exit_codes::OK)
}

fn load_bank(cfg: &ReadinessConfig) -> Result<QuestionBank> {
    resolve_bank(cfg.bank_path.as_deref())
}

fn render_outline(bank: &QuestionBank) -> String {
    let mut lines = vec![format!(
        "{} ({} sections, {} questions)",
        bank.title,
        bank.section_count(),
        bank.question_count()
    )];
    for section in &bank.sections {
        let duration = if section.duration.is_empty() {
            String::new()
        } else {
            format!(" [{}]", section.duration)
        };
        lines.push(format!(
            "{:02}. {}{} - questions: {}",
            section.id,
            section.title,
            duration,
            section.questions.len()
        ));
        if !section.features.is_empty() {
            lines.push(format!("    {}", section.features.join(", ")));
        }
    }
    lines.push(String::new());
    lines.join("\n")
}
