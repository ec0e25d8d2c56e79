use statlab_core::distributions::{Binomial, DiscreteDistribution};

use super::LessonResult;
use crate::config::BinomialLessonConfig;
use crate::figure::{Figure, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &BinomialLessonConfig) -> LessonResult {
    let mut report = LessonReport::new();
    let mut figures = Vec::with_capacity(config.scenarios.len());

    for scenario in &config.scenarios {
        let dist = Binomial::new(scenario.trials, scenario.probability)?;
        let table = dist.pmf_table()?;

        report.table(
            format!("{} (n = {}, p = {})", scenario.name, scenario.trials, scenario.probability),
            &["k", "P(X=k)"],
            table.iter().map(|row| vec![row.k as f64, row.probability]).collect(),
        );
        report.scalar(format!("{}: expected successes", scenario.name), dist.mean());

        let bars = table.iter().map(|row| (row.k as f64, row.probability)).collect();
        figures.push(
            Figure::new(format!("Binomial Distribution: {}", scenario.name)).with_panel(
                Panel::new(dist.name(), scenario.success_label.clone(), "Probability")
                    .with_series(Series::bars(scenario.name.clone(), bars, 0.8)),
            ),
        );
    }

    Ok((report, figures))
}
