//! Assessment configuration stored in `readiness.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::flow::{DEFAULT_NOISE_AMPLITUDE, FlowSettings};
use crate::core::types::SelectionPolicy;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "readiness.toml";

/// Largest accepted noise amplitude.
pub const MAX_NOISE_AMPLITUDE: f64 = 50.0;

/// Assessment configuration (TOML).
///
/// Missing fields default to the values used by the built-in assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Half-width of the uniform noise added to each sub-score.
    pub noise_amplitude: f64,

    /// How out-of-range selections are handled (`reject` or `clamp`).
    pub selection_policy: SelectionPolicy,

    /// Seed for reproducible scoring noise. Unset draws from OS entropy.
    pub seed: Option<u64>,

    /// Custom question bank (JSON). Unset uses the built-in bank.
    pub bank_path: Option<PathBuf>,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            noise_amplitude: DEFAULT_NOISE_AMPLITUDE,
            selection_policy: SelectionPolicy::Reject,
            seed: None,
            bank_path: None,
        }
    }
}

impl ReadinessConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.noise_amplitude.is_finite() {
            return Err(anyhow!("noise_amplitude must be a finite number"));
        }
        if !(0.0..=MAX_NOISE_AMPLITUDE).contains(&self.noise_amplitude) {
            return Err(anyhow!(
                "noise_amplitude must be within [0, {}]",
                MAX_NOISE_AMPLITUDE
            ));
        }
        if let Some(path) = &self.bank_path {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("bank_path must not be empty"));
            }
        }
        Ok(())
    }

    /// Flow settings derived from this config.
    pub fn flow_settings(&self) -> FlowSettings {
        FlowSettings {
            selection_policy: self.selection_policy,
            noise_amplitude: self.noise_amplitude,
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ReadinessConfig::default()`.
pub fn load_config(path: &Path) -> Result<ReadinessConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = ReadinessConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ReadinessConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write_temp;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ReadinessConfig::default());
    }

    #[test]
    fn load_reads_partial_file_with_defaults() {
        let (_dir, path) =
            write_temp("readiness.toml", "selection_policy = \"clamp\"\nseed = 42\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.selection_policy, SelectionPolicy::Clamp);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.noise_amplitude, DEFAULT_NOISE_AMPLITUDE);
        assert!(cfg.bank_path.is_none());
    }

    #[test]
    fn load_rejects_out_of_range_amplitude() {
        let (_dir, path) = write_temp("readiness.toml", "noise_amplitude = 80.0\n").expect("write");
        let err = load_config(&path).expect_err("expected error");
        assert!(format!("{err:#}").contains("noise_amplitude"));
    }

    #[test]
    fn load_rejects_unknown_policy() {
        let (_dir, path) =
            write_temp("readiness.toml", "selection_policy = \"ignore\"\n").expect("write");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn flow_settings_follow_config() {
        let cfg = ReadinessConfig {
            noise_amplitude: 0.0,
            selection_policy: SelectionPolicy::Clamp,
            ..ReadinessConfig::default()
        };
        let settings = cfg.flow_settings();
        assert_eq!(settings.noise_amplitude, 0.0);
        assert_eq!(settings.selection_policy, SelectionPolicy::Clamp);
    }
}
