//! StatLab Core — the numeric contracts behind the lessons.
//!
//! - Sample reducers and named statistics
//! - Percentiles with linear interpolation between order statistics
//! - Bootstrap resampling (sequential or rayon-parallel, identical output)
//! - Percentile confidence intervals
//! - Standard error by simulation
//! - Distributions, density curves and probability (QQ) plots
//! - Histograms
//! - Deterministic RNG hierarchy and opt-in profiling

pub mod bootstrap;
pub mod confidence;
pub mod distributions;
pub mod error;
pub mod histogram;
pub mod percentile;
pub mod profiling;
pub mod qq;
pub mod rng;
pub mod sample;
pub mod special;
pub mod standard_error;

pub use bootstrap::{bootstrap_statistic, bootstrap_statistics, BootstrapConfig};
pub use confidence::{bootstrap_confidence_interval, confidence_interval, ConfidenceInterval};
pub use error::{Result, StatError};
pub use histogram::Histogram;
pub use qq::{probability_plot, LinearFit, ProbabilityPlot};
pub use rng::RngHierarchy;
pub use sample::Statistic;
pub use standard_error::{simulate_sampling, SamplingSimulation};
