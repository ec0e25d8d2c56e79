//! Lab configuration, loaded from TOML.
//!
//! Every section and every field is optional; an empty file (or no file) gives
//! the defaults the lessons were written around.
//!
//! ```toml
//! seed = 7
//!
//! [confidence]
//! level = 95.0
//! statistic = "median"
//!
//! [[binomial.scenarios]]
//! name = "free throws"
//! trials = 20
//! probability = 0.75
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use statlab_core::distributions::MAX_TABLE_TRIALS;
use statlab_core::Statistic;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: String, reason: String },
}

fn invalid(field: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.into(),
    }
}

// ─── Top level ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabConfig {
    /// Master seed; each lesson derives its own streams from it.
    pub seed: u64,
    pub bootstrap: BootstrapLessonConfig,
    pub confidence: ConfidenceLessonConfig,
    pub qq: QqLessonConfig,
    pub long_tail: LongTailLessonConfig,
    pub t_distribution: TDistributionLessonConfig,
    pub binomial: BinomialLessonConfig,
    pub chi_square: ChiSquareLessonConfig,
    pub standard_error: StandardErrorLessonConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bootstrap: BootstrapLessonConfig::default(),
            confidence: ConfidenceLessonConfig::default(),
            qq: QqLessonConfig::default(),
            long_tail: LongTailLessonConfig::default(),
            t_distribution: TDistributionLessonConfig::default(),
            binomial: BinomialLessonConfig::default(),
            chi_square: ChiSquareLessonConfig::default(),
            standard_error: StandardErrorLessonConfig::default(),
        }
    }
}

impl LabConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LabConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject values no lesson could run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bootstrap.validate()?;
        self.confidence.validate()?;
        self.qq.validate()?;
        self.long_tail.validate()?;
        self.t_distribution.validate()?;
        self.binomial.validate()?;
        self.chi_square.validate()?;
        self.standard_error.validate()
    }
}

fn require_at_least(field: &str, value: usize, min: usize) -> Result<(), ConfigError> {
    if value < min {
        return Err(invalid(field, format!("{value} is below the minimum of {min}")));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(field, format!("{value} must be finite and > 0")));
    }
    Ok(())
}

fn require_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(invalid(field, format!("{value} must be finite")));
    }
    Ok(())
}

fn require_grid(field: &str, start: f64, stop: f64, points: usize) -> Result<(), ConfigError> {
    require_finite(field, start)?;
    require_finite(field, stop)?;
    if start >= stop {
        return Err(invalid(field, format!("empty range [{start}, {stop}]")));
    }
    require_at_least(field, points, 2)
}

// ─── Sections ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapLessonConfig {
    pub population_mean: f64,
    pub population_std: f64,
    pub initial_sample_size: usize,
    pub n_resamples: usize,
    /// How many bootstrap means to print.
    pub preview: usize,
    pub bins: usize,
    pub parallel: bool,
}

impl Default for BootstrapLessonConfig {
    fn default() -> Self {
        Self {
            population_mean: 170.0,
            population_std: 10.0,
            initial_sample_size: 10_000,
            n_resamples: 1_000,
            preview: 10,
            bins: 50,
            parallel: true,
        }
    }
}

impl BootstrapLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_finite("bootstrap.population_mean", self.population_mean)?;
        if !(self.population_std.is_finite() && self.population_std >= 0.0) {
            return Err(invalid("bootstrap.population_std", "must be finite and >= 0"));
        }
        require_at_least("bootstrap.initial_sample_size", self.initial_sample_size, 1)?;
        require_at_least("bootstrap.n_resamples", self.n_resamples, 1)?;
        require_at_least("bootstrap.bins", self.bins, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfidenceLessonConfig {
    pub data: Vec<f64>,
    pub statistic: Statistic,
    pub n_resamples: usize,
    /// Confidence level in percent.
    pub level: f64,
    pub bins: usize,
}

impl Default for ConfidenceLessonConfig {
    fn default() -> Self {
        Self {
            data: vec![85.0, 90.0, 78.0, 92.0, 88.0, 75.0, 84.0, 82.0, 89.0, 91.0],
            statistic: Statistic::Mean,
            n_resamples: 1_000,
            level: 90.0,
            bins: 20,
        }
    }
}

impl ConfidenceLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_at_least("confidence.data", self.data.len(), 1)?;
        if let Some(bad) = self.data.iter().find(|v| !v.is_finite()) {
            return Err(invalid("confidence.data", format!("non-finite value {bad}")));
        }
        require_at_least("confidence.n_resamples", self.n_resamples, 2)?;
        if !(self.level > 0.0 && self.level < 100.0) {
            return Err(invalid("confidence.level", format!("{} is outside (0, 100)", self.level)));
        }
        require_at_least("confidence.bins", self.bins, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QqLessonConfig {
    pub sample_size: usize,
    pub exponential_scale: f64,
    pub weibull_shape: f64,
    pub bins: usize,
}

impl Default for QqLessonConfig {
    fn default() -> Self {
        Self {
            sample_size: 1_000,
            exponential_scale: 1.0,
            weibull_shape: 1.5,
            bins: 30,
        }
    }
}

impl QqLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_at_least("qq.sample_size", self.sample_size, 2)?;
        require_positive("qq.exponential_scale", self.exponential_scale)?;
        require_positive("qq.weibull_shape", self.weibull_shape)?;
        require_at_least("qq.bins", self.bins, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LongTailLessonConfig {
    /// Tail index α.
    pub alpha: f64,
    pub x_min: f64,
    pub sample_size: usize,
    pub bins: usize,
}

impl Default for LongTailLessonConfig {
    fn default() -> Self {
        Self {
            alpha: 3.0,
            x_min: 1.0,
            sample_size: 1_000,
            bins: 100,
        }
    }
}

impl LongTailLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_positive("long_tail.alpha", self.alpha)?;
        require_positive("long_tail.x_min", self.x_min)?;
        require_at_least("long_tail.sample_size", self.sample_size, 2)?;
        require_at_least("long_tail.bins", self.bins, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TDistributionLessonConfig {
    pub degrees_of_freedom: Vec<f64>,
    pub x_start: f64,
    pub x_stop: f64,
    pub points: usize,
}

impl Default for TDistributionLessonConfig {
    fn default() -> Self {
        Self {
            degrees_of_freedom: vec![1.0, 5.0, 10.0, 30.0],
            x_start: -5.0,
            x_stop: 5.0,
            points: 100,
        }
    }
}

impl TDistributionLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_at_least("t_distribution.degrees_of_freedom", self.degrees_of_freedom.len(), 1)?;
        for &df in &self.degrees_of_freedom {
            require_positive("t_distribution.degrees_of_freedom", df)?;
        }
        require_grid("t_distribution.x_start/x_stop/points", self.x_start, self.x_stop, self.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinomialScenario {
    pub name: String,
    pub trials: u64,
    pub probability: f64,
    /// Axis label for the success count.
    #[serde(default = "default_success_label")]
    pub success_label: String,
}

fn default_success_label() -> String {
    "Number of successes".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinomialLessonConfig {
    pub scenarios: Vec<BinomialScenario>,
}

impl Default for BinomialLessonConfig {
    fn default() -> Self {
        Self {
            scenarios: vec![
                BinomialScenario {
                    name: "climbs".to_string(),
                    trials: 10,
                    probability: 0.7,
                    success_label: "Number of successful climbs".to_string(),
                },
                BinomialScenario {
                    name: "coin flips".to_string(),
                    trials: 5,
                    probability: 0.5,
                    success_label: "Number of heads".to_string(),
                },
            ],
        }
    }
}

impl BinomialLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_at_least("binomial.scenarios", self.scenarios.len(), 1)?;
        for s in &self.scenarios {
            if s.trials > MAX_TABLE_TRIALS {
                return Err(invalid(
                    "binomial.scenarios.trials",
                    format!("{} ({}) exceeds the maximum of {MAX_TABLE_TRIALS}", s.trials, s.name),
                ));
            }
            if !(0.0..=1.0).contains(&s.probability) {
                return Err(invalid(
                    "binomial.scenarios.probability",
                    format!("{} ({}) is outside [0, 1]", s.probability, s.name),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChiSquareLessonConfig {
    pub degrees_of_freedom: Vec<f64>,
    pub x_stop: f64,
    pub points: usize,
}

impl Default for ChiSquareLessonConfig {
    fn default() -> Self {
        Self {
            degrees_of_freedom: vec![1.0, 2.0, 3.0, 5.0, 10.0],
            x_stop: 20.0,
            points: 1_000,
        }
    }
}

impl ChiSquareLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_at_least("chi_square.degrees_of_freedom", self.degrees_of_freedom.len(), 1)?;
        for &df in &self.degrees_of_freedom {
            require_positive("chi_square.degrees_of_freedom", df)?;
        }
        require_grid("chi_square.x_stop/points", 0.0, self.x_stop, self.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StandardErrorLessonConfig {
    pub population_mean: f64,
    pub population_std: f64,
    pub sample_size: usize,
    pub sample_count: usize,
}

impl Default for StandardErrorLessonConfig {
    fn default() -> Self {
        Self {
            population_mean: 175.0,
            population_std: 10.0,
            sample_size: 10,
            sample_count: 5,
        }
    }
}

impl StandardErrorLessonConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        require_finite("standard_error.population_mean", self.population_mean)?;
        if !(self.population_std.is_finite() && self.population_std >= 0.0) {
            return Err(invalid("standard_error.population_std", "must be finite and >= 0"));
        }
        require_at_least("standard_error.sample_size", self.sample_size, 1)?;
        require_at_least("standard_error.sample_count", self.sample_count, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = LabConfig::from_toml_str("").unwrap();
        assert_eq!(config, LabConfig::default());
        assert_eq!(config.confidence.level, 90.0);
        assert_eq!(config.binomial.scenarios.len(), 2);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = LabConfig::from_toml_str(
            r#"
            seed = 7

            [confidence]
            level = 95.0
            statistic = "median"
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.confidence.level, 95.0);
        assert_eq!(config.confidence.statistic, Statistic::Median);
        assert_eq!(config.confidence.n_resamples, 1_000);
        assert_eq!(config.qq, QqLessonConfig::default());
    }

    #[test]
    fn binomial_scenarios_replace_defaults() {
        let config = LabConfig::from_toml_str(
            r#"
            [[binomial.scenarios]]
            name = "free throws"
            trials = 20
            probability = 0.75
            "#,
        )
        .unwrap();
        assert_eq!(config.binomial.scenarios.len(), 1);
        assert_eq!(config.binomial.scenarios[0].success_label, "Number of successes");
    }

    #[test]
    fn rejects_invalid_values() {
        let cases = [
            "[confidence]\nlevel = 100.0",
            "[bootstrap]\nn_resamples = 0",
            "[standard_error]\npopulation_std = -1.0",
            "[t_distribution]\ndegrees_of_freedom = [5.0, 0.0]",
            "[chi_square]\npoints = 1",
            "[[binomial.scenarios]]\nname = \"bad\"\ntrials = 3\nprobability = 1.5",
        ];
        for case in cases {
            assert!(
                matches!(LabConfig::from_toml_str(case), Err(ConfigError::Invalid { .. })),
                "{case}"
            );
        }
    }

    #[test]
    fn rejects_binomial_tables_too_large_to_build() {
        let err = LabConfig::from_toml_str(
            "[[binomial.scenarios]]\nname = \"huge\"\ntrials = 9223372036854775807\nprobability = 0.5",
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "binomial.scenarios.trials"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(LabConfig::from_toml_str(
            "[[binomial.scenarios]]\nname = \"edge\"\ntrials = 10000\nprobability = 0.5",
        )
        .is_ok());
    }

    #[test]
    fn rejects_unknown_keys_and_bad_syntax() {
        assert!(matches!(
            LabConfig::from_toml_str("[confidence]\nlevl = 95.0"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(LabConfig::from_toml_str("seed = "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn defaults_serialize_and_reload() {
        let text = LabConfig::default().to_toml_string().unwrap();
        assert_eq!(LabConfig::from_toml_str(&text).unwrap(), LabConfig::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LabConfig::from_file(Path::new("/nonexistent/statlab.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
