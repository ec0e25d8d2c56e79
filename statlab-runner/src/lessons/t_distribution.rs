use statlab_core::distributions::{density_curve, linspace, ContinuousDistribution, Normal, StudentT};

use super::LessonResult;
use crate::config::TDistributionLessonConfig;
use crate::figure::{Figure, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &TDistributionLessonConfig) -> LessonResult {
    let xs = linspace(config.x_start, config.x_stop, config.points);
    let mut panel = Panel::new("Student's t densities", "t", "Density");
    let mut report = LessonReport::new();

    for &df in &config.degrees_of_freedom {
        let t = StudentT::new(df)?;
        panel = panel.with_series(Series::line(format!("df = {df}"), density_curve(&t, &xs)));
        report.scalar(format!("Peak density, df = {df}"), t.pdf(0.0));
    }

    let normal = Normal::standard();
    report.scalar("Peak density, standard normal", normal.pdf(0.0));
    panel = panel.with_series(Series::line("standard normal", density_curve(&normal, &xs)));

    Ok((report, vec![Figure::new("t-Distribution").with_panel(panel)]))
}
