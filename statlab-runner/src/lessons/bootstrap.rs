use statlab_core::distributions::{Normal, Sampling};
use statlab_core::rng::RngHierarchy;
use statlab_core::sample::{mean, std_dev};
use statlab_core::{bootstrap_statistics, BootstrapConfig, Histogram};

use super::LessonResult;
use crate::config::BootstrapLessonConfig;
use crate::figure::{Figure, LineStyle, Marker, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &BootstrapLessonConfig, rngs: &RngHierarchy) -> LessonResult {
    let population = Normal::new(config.population_mean, config.population_std)?;
    let sample = population.sample(&mut rngs.stream("bootstrap.sample"), config.initial_sample_size);
    let sample_mean = mean(&sample);

    let resampling = BootstrapConfig::default()
        .with_resamples(config.n_resamples)
        .with_seed(rngs.sub_seed("bootstrap.resample", 0))
        .with_parallelism(config.parallel);
    let means = bootstrap_statistics(&sample, &resampling, mean)?;

    let mut report = LessonReport::new();
    report
        .scalar("Sample mean", sample_mean)
        .series(
            format!("First {} bootstrap means", config.preview.min(means.len())),
            means.iter().take(config.preview).copied().collect(),
        )
        .scalar("Mean of bootstrap means", mean(&means))
        .scalar("Std of bootstrap means", std_dev(&means, 0));

    let histogram = Histogram::new(&means, config.bins)?;
    let figure = Figure::new("Bootstrap Distribution of the Mean").with_panel(
        Panel::new("Bootstrap means", "Mean height", "Frequency")
            .with_series(Series::histogram("bootstrap means", &histogram, false))
            .with_marker(Marker::vertical(sample_mean, "sample mean", LineStyle::Dashed)),
    );

    Ok((report, vec![figure]))
}
