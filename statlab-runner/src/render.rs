//! SVG output with plotters.
//!
//! Each figure becomes one SVG with its panels side by side. Text uses the
//! backend's built-in font handling, so no system fonts are needed.

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;

use crate::figure::{Figure, LineStyle, Marker, Panel, SeriesKind};
use crate::lessons::LessonOutput;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("invalid figure: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

const PANEL_WIDTH: u32 = 640;
const PANEL_HEIGHT: u32 = 520;
const DASHES: usize = 24;

/// Render every figure of a lesson into `dir` as `fig{N}.svg`.
pub fn render_lesson(output: &LessonOutput, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    output
        .figures
        .iter()
        .enumerate()
        .map(|(i, figure)| {
            let path = dir.join(format!("fig{}.svg", i + 1));
            render_figure_svg(figure, &path)?;
            Ok(path)
        })
        .collect()
}

pub fn render_figure_svg(figure: &Figure, path: &Path) -> Result<()> {
    if figure.panels.is_empty() {
        return Err(PlotError::InvalidData(format!("`{}` has no panels", figure.title)));
    }
    let width = PANEL_WIDTH * figure.panels.len() as u32;
    let root = SVGBackend::new(path, (width, PANEL_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;
    let root = root
        .titled(&figure.title, ("sans-serif", 26))
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    for (area, panel) in root.split_evenly((1, figure.panels.len())).iter().zip(&figure.panels) {
        draw_panel(area, panel)?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))
}

fn draw_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &Panel) -> Result<()> {
    let bounds = panel.bounds();
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 18))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(bounds.x.0..bounds.x.1, bounds.y.0..bounds.y.1)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .label_style(("sans-serif", 12))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (i, series) in panel.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        let half = series.bar_width / 2.0;
        let points = series.points.iter().copied();
        let drawn = match series.kind {
            SeriesKind::Line => chart.draw_series(LineSeries::new(points, color.stroke_width(2))),
            SeriesKind::Scatter => {
                chart.draw_series(points.map(|p| Circle::new(p, 2, color.mix(0.7).filled())))
            }
            SeriesKind::Bar | SeriesKind::Histogram => chart.draw_series(points.map(|(x, y)| {
                Rectangle::new([(x - half, 0.0), (x + half, y)], color.mix(0.6).filled())
            })),
        }
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
        drawn
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 4), (x + 16, y + 4)], color.filled()));
    }

    for (i, marker) in panel.markers.iter().enumerate() {
        let color = if i % 2 == 0 { RED } else { BLACK };
        let style = color.stroke_width(2);
        let (from, to) = match *marker {
            Marker::Vertical { x, .. } => ((x, bounds.y.0), (x, bounds.y.1)),
            Marker::Horizontal { y, .. } => ((bounds.x.0, y), (bounds.x.1, y)),
        };
        let segments = match marker.style() {
            LineStyle::Solid => vec![[from, to]],
            LineStyle::Dashed => dash_segments(from, to, DASHES),
        };
        chart
            .draw_series(segments.into_iter().map(|seg| PathElement::new(seg.to_vec(), style)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(marker.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], style));
    }

    for note in &panel.annotations {
        chart
            .draw_series(std::iter::once(Text::new(
                note.text.clone(),
                (note.x, note.y),
                ("sans-serif", 14).into_font(),
            )))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    if !panel.series.is_empty() || !panel.markers.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 12))
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    Ok(())
}

/// Split the segment `from → to` into `dashes` visible pieces with equal gaps.
fn dash_segments(from: (f64, f64), to: (f64, f64), dashes: usize) -> Vec<[(f64, f64); 2]> {
    let pieces = (dashes * 2).max(1) as f64;
    let at = |t: f64| (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
    (0..dashes)
        .map(|i| {
            let start = (2 * i) as f64 / pieces;
            let end = (2 * i + 1) as f64 / pieces;
            [at(start), at(end)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Series;

    #[test]
    fn dashes_alternate_along_the_segment() {
        let segs = dash_segments((0.0, 0.0), (0.0, 4.0), 2);
        assert_eq!(segs, vec![[(0.0, 0.0), (0.0, 1.0)], [(0.0, 2.0), (0.0, 3.0)]]);
    }

    #[test]
    fn renders_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fig.svg");
        let figure = Figure::new("Test").with_panel(
            Panel::new("panel", "x", "y")
                .with_series(Series::line("line", vec![(0.0, 0.0), (1.0, 1.0)]))
                .with_series(Series::bars("bars", vec![(0.5, 0.4)], 0.2))
                .with_marker(Marker::vertical(0.5, "mid", LineStyle::Dashed))
                .with_annotation(0.2, 0.8, "note"),
        );
        render_figure_svg(&figure, &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("note"));
    }

    #[test]
    fn rejects_figure_without_panels() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_figure_svg(&Figure::new("empty"), &dir.path().join("x.svg")).unwrap_err();
        assert!(matches!(err, PlotError::InvalidData(_)));
    }
}
