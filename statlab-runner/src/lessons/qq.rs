use statlab_core::distributions::{ContinuousDistribution, Exponential, Normal, Sampling, Weibull};
use statlab_core::rng::RngHierarchy;
use statlab_core::{probability_plot, Histogram, ProbabilityPlot};

use super::{LessonError, LessonResult};
use crate::config::QqLessonConfig;
use crate::figure::{Figure, Panel, Series};
use crate::report::LessonReport;

pub(super) fn run(config: &QqLessonConfig, rngs: &RngHierarchy) -> LessonResult {
    let normal = Normal::standard();
    let exponential = Exponential::new(config.exponential_scale)?;
    let weibull = Weibull::new(config.weibull_shape, 1.0)?;

    let normal_data = normal.sample(&mut rngs.stream("qq.normal"), config.sample_size);
    let exponential_data = exponential.sample(&mut rngs.stream("qq.exponential"), config.sample_size);
    let weibull_data = weibull.sample(&mut rngs.stream("qq.weibull"), config.sample_size);

    let cases: [(&str, &str, &[f64], &dyn ContinuousDistribution); 4] = [
        ("Normal", "normal data", &normal_data, &normal),
        ("Exponential vs Normal", "exponential data", &exponential_data, &normal),
        ("Exponential vs Exponential", "exponential data", &exponential_data, &exponential),
        ("Weibull vs Weibull", "Weibull data", &weibull_data, &weibull),
    ];

    let mut report = LessonReport::new();
    let mut figures = Vec::with_capacity(cases.len());
    for (title, data_name, data, reference) in cases {
        let plot = probability_plot(data, reference)?;
        report.scalar(format!("{title}: QQ fit r"), plot.fit.r);
        figures.push(comparison_figure(title, data_name, data, &plot, config.bins)?);
    }

    Ok((report, figures))
}

/// Histogram of the data beside its probability plot.
pub(super) fn comparison_figure(
    title: &str,
    data_name: &str,
    data: &[f64],
    plot: &ProbabilityPlot,
    bins: usize,
) -> Result<Figure, LessonError> {
    let histogram = Histogram::new(data, bins)?;
    Ok(Figure::new(title)
        .with_panel(
            Panel::new(format!("Histogram of {data_name}"), "Value", "Frequency")
                .with_series(Series::histogram(data_name, &histogram, false)),
        )
        .with_panel(qq_panel(plot)))
}

pub(super) fn qq_panel(plot: &ProbabilityPlot) -> Panel {
    Panel::new(
        format!("QQ plot against {}", plot.distribution),
        "Theoretical quantiles",
        "Ordered values",
    )
    .with_series(Series::scatter("ordered values", plot.points().collect()))
    .with_series(Series::line("least-squares fit", plot.fit_line().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_figures_with_matching_fits_straightest() {
        let (report, figures) = run(&QqLessonConfig::default(), &RngHierarchy::new(0)).unwrap();
        assert_eq!(figures.len(), 4);
        assert!(figures.iter().all(|f| f.panels.len() == 2));

        let r = |label: &str| report.scalar_value(label).unwrap();
        assert!(r("Normal: QQ fit r") > 0.99);
        assert!(r("Exponential vs Exponential: QQ fit r") > r("Exponential vs Normal: QQ fit r"));
        assert!(r("Weibull vs Weibull: QQ fit r") > 0.99);
    }

    #[test]
    fn qq_panel_has_points_and_fit_line() {
        let (_, figures) = run(&QqLessonConfig::default(), &RngHierarchy::new(0)).unwrap();
        let qq = &figures[0].panels[1];
        assert_eq!(qq.series[0].points.len(), 1000);
        assert_eq!(qq.series[1].points.len(), 2);
    }
}
