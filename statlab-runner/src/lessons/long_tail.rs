use statlab_core::distributions::{density_curve, linspace, ContinuousDistribution, Normal, Pareto, Sampling};
use statlab_core::rng::RngHierarchy;
use statlab_core::sample::{max, mean, median};
use statlab_core::{probability_plot, Histogram};

use super::qq::qq_panel;
use super::LessonResult;
use crate::config::LongTailLessonConfig;
use crate::figure::{Figure, LineStyle, Marker, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &LongTailLessonConfig, rngs: &RngHierarchy) -> LessonResult {
    let pareto = Pareto::new(config.alpha, config.x_min)?;
    let data = pareto.sample(&mut rngs.stream("long_tail.pareto"), config.sample_size);

    let sample_mean = mean(&data);
    let sample_median = median(&data);
    let largest = max(&data);

    let mut report = LessonReport::new();
    report
        .scalar("Sample mean", sample_mean)
        .scalar("Sample median", sample_median)
        .scalar("Sample max", largest)
        .scalar("Theoretical mean", pareto.mean())
        // Mean pulled above the median by the right tail.
        .scalar("Mean / median", sample_mean / sample_median);

    let histogram = Histogram::new(&data, config.bins)?;
    let grid = linspace(config.x_min, largest, 500);
    let peak = pareto.pdf(config.x_min);
    let tail_x = pareto.quantile(0.9);

    let density = Figure::new("Long-Tailed Distribution").with_panel(
        Panel::new(
            format!("Pareto(alpha = {}) samples", config.alpha),
            "Value",
            "Density",
        )
        .with_series(Series::histogram("samples", &histogram, true))
        .with_series(Series::line("Pareto pdf", density_curve(&pareto, &grid)))
        .with_marker(Marker::vertical(config.x_min, "x_min", LineStyle::Dashed))
        .with_annotation(tail_x, peak * 0.25, "Long Tail Region"),
    );

    let plot = probability_plot(&data, &Normal::standard())?;
    let center_y = plot.fit.intercept;
    let qq = Figure::new("Long-Tailed Data vs Normal").with_panel(
        qq_panel(&plot)
            .with_marker(Marker::vertical(0.0, "center", LineStyle::Dashed))
            .with_annotation(0.0, center_y, "Center Point"),
    );

    Ok((report, vec![density, qq]))
}
