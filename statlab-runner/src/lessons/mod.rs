//! The eight lessons.
//!
//! A lesson is a straight line: draw data from its own RNG stream, compute the
//! statistic, describe the plots. Lessons share nothing but the master seed.

mod binomial;
mod bootstrap;
mod chi_square;
mod confidence;
mod long_tail;
mod qq;
mod standard_error;
mod t_distribution;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use statlab_core::distributions::DistributionError;
use statlab_core::profiling::ProfileScope;
use statlab_core::rng::RngHierarchy;
use statlab_core::StatError;
use thiserror::Error;

use crate::config::LabConfig;
use crate::figure::Figure;
use crate::report::LessonReport;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error(transparent)]
    Stat(#[from] StatError),

    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error("unknown lesson `{0}` (try `statlab list`)")]
    UnknownLesson(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lesson {
    Bootstrap,
    Confidence,
    Qq,
    LongTail,
    TDistribution,
    Binomial,
    ChiSquare,
    StandardError,
}

impl Lesson {
    pub const ALL: [Lesson; 8] = [
        Lesson::Bootstrap,
        Lesson::Confidence,
        Lesson::Qq,
        Lesson::LongTail,
        Lesson::TDistribution,
        Lesson::Binomial,
        Lesson::ChiSquare,
        Lesson::StandardError,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Bootstrap => "bootstrap",
            Lesson::Confidence => "confidence",
            Lesson::Qq => "qq",
            Lesson::LongTail => "long_tail",
            Lesson::TDistribution => "t_distribution",
            Lesson::Binomial => "binomial",
            Lesson::ChiSquare => "chi_square",
            Lesson::StandardError => "standard_error",
        }
    }

    /// Short label for tabs.
    pub fn title(self) -> &'static str {
        match self {
            Lesson::Bootstrap => "Bootstrap",
            Lesson::Confidence => "Confidence",
            Lesson::Qq => "QQ Plots",
            Lesson::LongTail => "Long Tail",
            Lesson::TDistribution => "t-Dist",
            Lesson::Binomial => "Binomial",
            Lesson::ChiSquare => "Chi-Square",
            Lesson::StandardError => "Std Error",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Lesson::Bootstrap => "Resample a normal sample with replacement and plot the bootstrap means",
            Lesson::Confidence => "Percentile confidence interval for the mean of ten exam scores",
            Lesson::Qq => "QQ plots of normal, exponential and Weibull samples",
            Lesson::LongTail => "Pareto samples: density with a long right tail and a QQ plot against the normal",
            Lesson::TDistribution => "Student's t densities for several degrees of freedom",
            Lesson::Binomial => "Binomial probability tables and bar charts",
            Lesson::ChiSquare => "Chi-square densities for several degrees of freedom",
            Lesson::StandardError => "Standard error of the mean by repeated sampling",
        }
    }

    /// 1-based position in [`Lesson::ALL`].
    pub fn number(self) -> usize {
        Lesson::ALL.iter().position(|&l| l == self).map_or(0, |i| i + 1)
    }

    pub fn from_number(n: usize) -> Option<Lesson> {
        n.checked_sub(1).and_then(|i| Lesson::ALL.get(i).copied())
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = LessonError;

    /// Accepts the lesson name (`-` and `_` interchangeable, any case) or its
    /// number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Ok(n) = key.parse::<usize>() {
            return Lesson::from_number(n).ok_or_else(|| LessonError::UnknownLesson(s.to_string()));
        }
        let alias = match key.as_str() {
            "ci" | "confidence_interval" | "confidence_intervals" => Some(Lesson::Confidence),
            "t" | "student_t" => Some(Lesson::TDistribution),
            "chi2" | "chi_squared" => Some(Lesson::ChiSquare),
            "se" => Some(Lesson::StandardError),
            _ => None,
        };
        alias
            .or_else(|| Lesson::ALL.into_iter().find(|l| l.name() == key))
            .ok_or_else(|| LessonError::UnknownLesson(s.to_string()))
    }
}

/// Everything one lesson run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonOutput {
    pub lesson: Lesson,
    pub seed: u64,
    pub report: LessonReport,
    pub figures: Vec<Figure>,
}

/// Run one lesson against `config`.
pub fn run_lesson(lesson: Lesson, config: &LabConfig) -> Result<LessonOutput, LessonError> {
    let _scope = ProfileScope::with_detail("lesson", || lesson.name().to_string());
    let rngs = RngHierarchy::new(config.seed);

    let (report, figures) = match lesson {
        Lesson::Bootstrap => bootstrap::run(&config.bootstrap, &rngs)?,
        Lesson::Confidence => confidence::run(&config.confidence, &rngs)?,
        Lesson::Qq => qq::run(&config.qq, &rngs)?,
        Lesson::LongTail => long_tail::run(&config.long_tail, &rngs)?,
        Lesson::TDistribution => t_distribution::run(&config.t_distribution)?,
        Lesson::Binomial => binomial::run(&config.binomial)?,
        Lesson::ChiSquare => chi_square::run(&config.chi_square)?,
        Lesson::StandardError => standard_error::run(&config.standard_error, &rngs)?,
    };

    Ok(LessonOutput {
        lesson,
        seed: config.seed,
        report,
        figures,
    })
}

/// Every lesson in order; stops at the first failure.
pub fn run_all(config: &LabConfig) -> Result<Vec<LessonOutput>, LessonError> {
    Lesson::ALL
        .into_iter()
        .map(|lesson| run_lesson(lesson, config))
        .collect()
}

type LessonResult = Result<(LessonReport, Vec<Figure>), LessonError>;
