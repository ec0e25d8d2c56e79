//! Backend-independent description of a lesson's plots.
//!
//! A [`Figure`] is one window's worth of output: a title and one or more
//! side-by-side [`Panel`]s. The TUI draws panels with ratatui charts and
//! `render` draws them to SVG with plotters; neither needs to know which
//! lesson produced them.

use serde::{Deserialize, Serialize};
use statlab_core::Histogram;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub markers: Vec<Marker>,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Scatter,
    /// Separated bars centred on each x.
    Bar,
    /// Touching bars, one per histogram bin, centred on the bin midpoint.
    Histogram,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<(f64, f64)>,
    /// Bar width in x units; zero for lines and scatters.
    pub bar_width: f64,
}

impl Series {
    pub fn line(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::Line,
            points,
            bar_width: 0.0,
        }
    }

    pub fn scatter(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::Scatter,
            points,
            bar_width: 0.0,
        }
    }

    pub fn bars(name: impl Into<String>, points: Vec<(f64, f64)>, width: f64) -> Self {
        Self {
            name: name.into(),
            kind: SeriesKind::Bar,
            points,
            bar_width: width,
        }
    }

    /// Bars for a histogram, as counts or as a density.
    pub fn histogram(name: impl Into<String>, histogram: &Histogram, density: bool) -> Self {
        let heights: Vec<f64> = if density {
            histogram.density()
        } else {
            histogram.counts.iter().map(|&c| c as f64).collect()
        };
        Self {
            name: name.into(),
            kind: SeriesKind::Histogram,
            points: histogram.centers().into_iter().zip(heights).collect(),
            bar_width: histogram.bin_width(),
        }
    }

    fn is_bar_like(&self) -> bool {
        matches!(self.kind, SeriesKind::Bar | SeriesKind::Histogram)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A reference line across the whole panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "axis", rename_all = "snake_case")]
pub enum Marker {
    Vertical { x: f64, label: String, style: LineStyle },
    Horizontal { y: f64, label: String, style: LineStyle },
}

impl Marker {
    pub fn vertical(x: f64, label: impl Into<String>, style: LineStyle) -> Self {
        Marker::Vertical {
            x,
            label: label.into(),
            style,
        }
    }

    pub fn horizontal(y: f64, label: impl Into<String>, style: LineStyle) -> Self {
        Marker::Horizontal {
            y,
            label: label.into(),
            style,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Marker::Vertical { label, .. } | Marker::Horizontal { label, .. } => label,
        }
    }

    pub fn style(&self) -> LineStyle {
        match self {
            Marker::Vertical { style, .. } | Marker::Horizontal { style, .. } => *style,
        }
    }
}

/// Free text placed at data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Inclusive axis bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Panel {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series: Vec::new(),
            markers: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_annotation(mut self, x: f64, y: f64, text: impl Into<String>) -> Self {
        self.annotations.push(Annotation {
            x,
            y,
            text: text.into(),
        });
        self
    }

    /// Axis bounds covering every series, marker and annotation, padded by 5%
    /// on each side. Bar-like series always include y = 0.
    pub fn bounds(&self) -> Bounds {
        let mut xs = Span::default();
        let mut ys = Span::default();

        for s in &self.series {
            let half = s.bar_width / 2.0;
            for &(x, y) in &s.points {
                xs.add(x - half);
                xs.add(x + half);
                ys.add(y);
            }
            if s.is_bar_like() {
                ys.add(0.0);
            }
        }
        for m in &self.markers {
            match *m {
                Marker::Vertical { x, .. } => xs.add(x),
                Marker::Horizontal { y, .. } => ys.add(y),
            }
        }
        for a in &self.annotations {
            xs.add(a.x);
            ys.add(a.y);
        }

        Bounds {
            x: xs.padded(),
            y: ys.padded(),
        }
    }
}

struct Span {
    lo: f64,
    hi: f64,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }
}

impl Span {
    fn add(&mut self, v: f64) {
        if v.is_finite() {
            self.lo = self.lo.min(v);
            self.hi = self.hi.max(v);
        }
    }

    fn padded(&self) -> (f64, f64) {
        if self.lo > self.hi {
            return (0.0, 1.0);
        }
        if self.lo == self.hi {
            return (self.lo - 0.5, self.hi + 0.5);
        }
        let pad = (self.hi - self.lo) * 0.05;
        (self.lo - pad, self.hi + pad)
    }
}
