use statlab_core::rng::RngHierarchy;
use statlab_core::simulate_sampling;

use super::LessonResult;
use crate::config::StandardErrorLessonConfig;
use crate::figure::{Figure, LineStyle, Marker, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &StandardErrorLessonConfig, rngs: &RngHierarchy) -> LessonResult {
    let sim = simulate_sampling(
        config.population_mean,
        config.population_std,
        config.sample_size,
        config.sample_count,
        &mut rngs.stream("standard_error.samples"),
    )?;

    let mut report = LessonReport::new();
    report
        .series("Sample means", sim.sample_means.clone())
        .scalar("Std of sample means", sim.sample_means_std)
        .scalar("Standard error", sim.standard_error)
        .scalar("Theoretical std of sample means", sim.expected_means_std);

    let bars = sim
        .sample_means
        .iter()
        .enumerate()
        .map(|(i, &m)| ((i + 1) as f64, m))
        .collect();
    let figure = Figure::new("Sample Means").with_panel(
        Panel::new(
            format!("{} samples of size {}", config.sample_count, config.sample_size),
            "Sample",
            "Mean",
        )
        .with_series(Series::bars("sample means", bars, 0.6))
        .with_marker(Marker::horizontal(
            config.population_mean,
            "population mean",
            LineStyle::Dashed,
        )),
    );

    Ok((report, vec![figure]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportValue;

    #[test]
    fn five_means_and_an_error() {
        let (report, figures) =
            run(&StandardErrorLessonConfig::default(), &RngHierarchy::new(0)).unwrap();
        match report.get("Sample means") {
            Some(ReportValue::Series { values }) => assert_eq!(values.len(), 5),
            other => panic!("unexpected {other:?}"),
        }
        let spread = report.scalar_value("Std of sample means").unwrap();
        let se = report.scalar_value("Standard error").unwrap();
        assert!((se - spread / 10f64.sqrt()).abs() < 1e-12);
        assert_eq!(figures[0].panels[0].markers.len(), 1);
    }
}
