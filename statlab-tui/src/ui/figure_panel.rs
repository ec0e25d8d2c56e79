//! Figure view: one ratatui chart per figure panel.
//!
//! Reference lines become two-point line datasets spanning the axis bounds.
//! Chart has no free text, so each annotation is a single-point dataset whose
//! name carries the text into the legend.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph};

use statlab_runner::figure::Bounds;
use statlab_runner::{Figure, LineStyle, Marker, Panel, SeriesKind};

use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, figure: &Figure, position: usize, count: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ({}/{}) ", figure.title, position + 1, count))
        .title_style(theme::panel_title(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if figure.panels.is_empty() {
        render_empty(f, inner, "This figure has no panels.");
        return;
    }
    for (panel, cell) in figure.panels.iter().zip(panel_cells(inner, figure.panels.len())) {
        render_panel(f, cell, panel);
    }
}

pub fn render_empty(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Side by side for one or two panels, a two-column grid beyond that.
fn panel_cells(area: Rect, count: usize) -> Vec<Rect> {
    let columns = count.min(2) as u32;
    let rows = count.div_ceil(2) as u32;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows)))
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..columns).map(|_| Constraint::Ratio(1, columns)))
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

/// Owned point lists for one panel, in draw order.
struct Layer {
    name: String,
    points: Vec<(f64, f64)>,
    graph: GraphType,
    marker: symbols::Marker,
    style: Style,
}

fn layers(panel: &Panel, bounds: &Bounds) -> Vec<Layer> {
    let palette = Theme::default();
    let mut layers = Vec::new();

    for (i, series) in panel.series.iter().enumerate() {
        let (graph, marker) = match series.kind {
            SeriesKind::Line => (GraphType::Line, symbols::Marker::Braille),
            SeriesKind::Scatter => (GraphType::Scatter, symbols::Marker::Dot),
            SeriesKind::Bar | SeriesKind::Histogram => (GraphType::Bar, symbols::Marker::HalfBlock),
        };
        layers.push(Layer {
            name: series.name.clone(),
            points: series.points.clone(),
            graph,
            marker,
            style: Style::default().fg(palette.series(i)),
        });
    }

    for (i, marker) in panel.markers.iter().enumerate() {
        let points = match *marker {
            Marker::Vertical { x, .. } => vec![(x, bounds.y.0), (x, bounds.y.1)],
            Marker::Horizontal { y, .. } => vec![(bounds.x.0, y), (bounds.x.1, y)],
        };
        let symbol = match marker.style() {
            LineStyle::Solid => symbols::Marker::Braille,
            LineStyle::Dashed => symbols::Marker::Dot,
        };
        layers.push(Layer {
            name: marker.label().to_string(),
            points,
            graph: GraphType::Line,
            marker: symbol,
            style: Style::default().fg(palette.marker(i)),
        });
    }

    for annotation in &panel.annotations {
        layers.push(Layer {
            name: annotation.text.clone(),
            points: vec![(annotation.x, annotation.y)],
            graph: GraphType::Scatter,
            marker: symbols::Marker::Block,
            style: Style::default().fg(palette.warning),
        });
    }

    layers
}

fn render_panel(f: &mut Frame, area: Rect, panel: &Panel) {
    let bounds = panel.bounds();
    let layers = layers(panel, &bounds);

    let datasets: Vec<Dataset> = layers
        .iter()
        .map(|layer| {
            let dataset = Dataset::default()
                .marker(layer.marker)
                .graph_type(layer.graph)
                .style(layer.style)
                .data(&layer.points);
            if layer.name.is_empty() {
                dataset
            } else {
                dataset.name(layer.name.as_str())
            }
        })
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", panel.title), theme::accent()))
                .borders(Borders::NONE),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .title(Span::styled(panel.x_label.as_str(), theme::muted()))
                .style(theme::muted())
                .bounds([bounds.x.0, bounds.x.1])
                .labels(axis_labels(bounds.x)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(panel.y_label.as_str(), theme::muted()))
                .style(theme::muted())
                .bounds([bounds.y.0, bounds.y.1])
                .labels(axis_labels(bounds.y)),
        );

    f.render_widget(chart, area);
}

/// Low, middle and high tick labels.
fn axis_labels((lo, hi): (f64, f64)) -> Vec<Span<'static>> {
    [lo, (lo + hi) / 2.0, hi]
        .into_iter()
        .map(|v| Span::styled(tick(v), theme::muted()))
        .collect()
}

fn tick(v: f64) -> String {
    let magnitude = v.abs();
    if magnitude != 0.0 && !(1e-2..1e5).contains(&magnitude) {
        format!("{v:.1e}")
    } else if magnitude >= 100.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
