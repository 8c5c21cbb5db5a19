//! Question bank loading with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::core::bank::QuestionBank;
use crate::core::invariants::validate_bank;

/// JSON Schema (Draft 2020-12) for question bank files.
pub const BANK_SCHEMA: &str = include_str!("../../schemas/question_bank.v1.schema.json");

const BUILTIN_BANK: &str = include_str!("../../banks/react_readiness.json");

/// The built-in "Should You Learn React.js?" bank.
pub fn builtin_bank() -> Result<QuestionBank> {
    let bank = parse_bank(BUILTIN_BANK).context("load built-in question bank")?;
    debug!(
        sections = bank.section_count(),
        questions = bank.question_count(),
        "built-in bank loaded"
    );
    Ok(bank)
}

/// Load and validate a bank from disk (schema + invariants).
pub fn load_bank(path: &Path) -> Result<QuestionBank> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read bank {}", path.display()))?;
    let bank = parse_bank(&contents).with_context(|| format!("load bank {}", path.display()))?;
    debug!(
        path = %path.display(),
        sections = bank.section_count(),
        questions = bank.question_count(),
        "bank loaded"
    );
    Ok(bank)
}

/// Load `path` if given, otherwise the built-in bank.
pub fn resolve_bank(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => load_bank(path),
        None => builtin_bank(),
    }
}

/// Parse and validate bank JSON.
pub fn parse_bank(raw: &str) -> Result<QuestionBank> {
    let value: Value = serde_json::from_str(raw).context("parse bank json")?;
    validate_schema(&value)?;
    let bank: QuestionBank = serde_json::from_value(value).context("deserialize bank")?;
    validate_bank_invariants(&bank)?;
    Ok(bank)
}

fn validate_schema(bank: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(BANK_SCHEMA).context("parse bank schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(bank) {
        let messages = compiled
            .iter_errors(bank)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "bank schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_bank_invariants(bank: &QuestionBank) -> Result<()> {
    let errors = validate_bank(bank);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("bank invariants failed: {}", errors.join("; ")))
}
