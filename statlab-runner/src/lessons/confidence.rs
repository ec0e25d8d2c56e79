use statlab_core::rng::RngHierarchy;
use statlab_core::{bootstrap_confidence_interval, BootstrapConfig, Histogram};

use super::LessonResult;
use crate::config::ConfidenceLessonConfig;
use crate::figure::{Figure, LineStyle, Marker, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &ConfidenceLessonConfig, rngs: &RngHierarchy) -> LessonResult {
    let statistic = config.statistic;
    let resampling = BootstrapConfig::default()
        .with_resamples(config.n_resamples)
        .with_seed(rngs.sub_seed("confidence.resample", 0));
    let (stats, ci) = bootstrap_confidence_interval(
        &config.data,
        |draw| statistic.apply(draw),
        &resampling,
        config.level,
    )?;

    let mut report = LessonReport::new();
    report
        .scalar(format!("Sample {statistic}"), statistic.apply(&config.data))
        .interval(format!("{}% confidence interval", config.level), &ci)
        .scalar("Interval width", ci.width());

    let histogram = Histogram::new(&stats, config.bins)?;
    let figure = Figure::new(format!("Bootstrap Distribution ({statistic})")).with_panel(
        Panel::new("Bootstrap statistics", format!("Sample {statistic}"), "Frequency")
            .with_series(Series::histogram("bootstrap statistics", &histogram, false))
            .with_marker(Marker::vertical(ci.lower, "lower bound", LineStyle::Dashed))
            .with_marker(Marker::vertical(ci.upper, "upper bound", LineStyle::Dashed)),
    );

    Ok((report, vec![figure]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportValue;

    #[test]
    fn scores_interval_brackets_the_mean() {
        let (report, figures) = run(&ConfidenceLessonConfig::default(), &RngHierarchy::new(42)).unwrap();
        assert_eq!(report.scalar_value("Sample mean"), Some(85.4));
        match report.get("90% confidence interval") {
            Some(ReportValue::Interval { lower, upper, level }) => {
                assert_eq!(*level, 90.0);
                assert!(*lower <= 85.4 && 85.4 <= *upper);
            }
            other => panic!("unexpected {other:?}"),
        }
        let panel = &figures[0].panels[0];
        assert_eq!(panel.markers.len(), 2);
        assert_eq!(panel.series[0].points.len(), 20);
    }

    #[test]
    fn median_statistic_is_labelled() {
        let config = ConfidenceLessonConfig {
            statistic: statlab_core::Statistic::Median,
            ..ConfidenceLessonConfig::default()
        };
        let (report, _) = run(&config, &RngHierarchy::new(42)).unwrap();
        assert_eq!(report.scalar_value("Sample median"), Some(86.5));
    }
}
