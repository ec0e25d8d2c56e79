//! StatLab Runner — lessons, configuration, figures and artifacts.
//!
//! This crate builds on `statlab-core` to provide:
//! - The eight lessons, each turning a config section into a report and figures
//! - TOML configuration with per-lesson defaults and validation
//! - A backend-independent figure model shared by the TUI and SVG output
//! - JSON/CSV export and plotters SVG rendering

pub mod config;
pub mod export;
pub mod figure;
pub mod lessons;
pub mod render;
pub mod report;

pub use config::{ConfigError, LabConfig};
pub use export::{save_artifacts, ReportManifest, SCHEMA_VERSION};
pub use figure::{Annotation, Figure, LineStyle, Marker, Panel, Series, SeriesKind};
pub use lessons::{run_all, run_lesson, Lesson, LessonError, LessonOutput};
pub use render::{render_figure_svg, render_lesson, PlotError};
pub use report::{LessonReport, ReportValue};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: lesson output can be produced on a worker thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send_sync<T: Send + Sync>() {}

        require_send_sync::<LabConfig>();
        require_send_sync::<LessonOutput>();
        require_send_sync::<Figure>();
        require_send_sync::<LessonReport>();
        require_send_sync::<LessonError>();
    }
}
