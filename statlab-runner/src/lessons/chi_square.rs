use statlab_core::distributions::{density_curve, linspace, ChiSquared, ContinuousDistribution};

use super::LessonResult;
use crate::config::ChiSquareLessonConfig;
use crate::figure::{Figure, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &ChiSquareLessonConfig) -> LessonResult {
    let xs = linspace(0.0, config.x_stop, config.points);
    let mut panel = Panel::new("Chi-square densities", "x", "Density");
    let mut report = LessonReport::new();

    for &df in &config.degrees_of_freedom {
        let chi = ChiSquared::new(df)?;
        let curve = density_curve(&chi, &xs);
        let dropped = xs.len() - curve.len();
        panel = panel.with_series(Series::line(format!("df = {df}"), curve));
        report
            .scalar(format!("Mean, df = {df}"), chi.mean())
            .scalar(format!("Variance, df = {df}"), chi.variance());
        if dropped > 0 {
            report.text(
                format!("Note, df = {df}"),
                format!("{dropped} non-finite density point(s) left out of the curve"),
            );
        }
    }

    Ok((report, vec![Figure::new("Chi-Square Distribution").with_panel(panel)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn df_one_curve_drops_the_pole_at_zero() {
        let (report, figures) = run(&ChiSquareLessonConfig::default()).unwrap();
        let series = &figures[0].panels[0].series;
        assert_eq!(series.len(), 5);
        assert_eq!(series[0].points.len(), 999);
        assert!(series[1..].iter().all(|s| s.points.len() == 1000));
        assert_eq!(report.scalar_value("Variance, df = 10"), Some(20.0));
        assert!(report.get("Note, df = 1").is_some());
        assert!(report.get("Note, df = 2").is_none());
    }
}
