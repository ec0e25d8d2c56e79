//! Application state — single-owner, main-thread only.
//!
//! Lessons run synchronously on the main thread the first time their tab is
//! shown; results are kept until the seed changes.

use std::collections::HashMap;

use statlab_runner::{run_lesson, Figure, LabConfig, Lesson, LessonOutput};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub running: bool,
    pub config: LabConfig,
    pub active: Lesson,
    pub show_help: bool,
    pub status_message: Option<(String, StatusLevel)>,
    outputs: HashMap<Lesson, LessonOutput>,
    errors: HashMap<Lesson, String>,
    figure_index: HashMap<Lesson, usize>,
}

impl AppState {
    pub fn new(config: LabConfig, start: Lesson) -> Self {
        let mut app = Self {
            running: true,
            config,
            active: start,
            show_help: false,
            status_message: None,
            outputs: HashMap::new(),
            errors: HashMap::new(),
            figure_index: HashMap::new(),
        };
        app.ensure_active();
        app
    }

    /// Run the active lesson unless its output (or failure) is already known.
    pub fn ensure_active(&mut self) {
        let lesson = self.active;
        if self.outputs.contains_key(&lesson) || self.errors.contains_key(&lesson) {
            return;
        }
        match run_lesson(lesson, &self.config) {
            Ok(output) => {
                self.set_status(format!(
                    "{}: {} figure(s), seed {}",
                    lesson.title(),
                    output.figures.len(),
                    output.seed
                ));
                self.outputs.insert(lesson, output);
            }
            Err(e) => {
                self.set_error(format!("{}: {e}", lesson.title()));
                self.errors.insert(lesson, e.to_string());
            }
        }
    }

    pub fn select(&mut self, lesson: Lesson) {
        self.active = lesson;
        self.ensure_active();
    }

    pub fn next_lesson(&mut self) {
        let next = Lesson::from_number(self.active.number() % Lesson::ALL.len() + 1);
        if let Some(lesson) = next {
            self.select(lesson);
        }
    }

    pub fn prev_lesson(&mut self) {
        let count = Lesson::ALL.len();
        let prev = Lesson::from_number((self.active.number() + count - 2) % count + 1);
        if let Some(lesson) = prev {
            self.select(lesson);
        }
    }

    pub fn next_figure(&mut self) {
        self.step_figure(1);
    }

    pub fn prev_figure(&mut self) {
        let count = self.figure_count();
        if count > 0 {
            self.step_figure(count - 1);
        }
    }

    fn step_figure(&mut self, by: usize) {
        let count = self.figure_count();
        if count == 0 {
            return;
        }
        let index = self.figure_index.entry(self.active).or_insert(0);
        *index = (*index + by) % count;
    }

    /// Bump the seed and recompute the active lesson; the others recompute
    /// when next shown.
    pub fn reseed(&mut self) {
        self.config.seed = self.config.seed.wrapping_add(1);
        self.outputs.clear();
        self.errors.clear();
        self.ensure_active();
    }

    pub fn output(&self) -> Option<&LessonOutput> {
        self.outputs.get(&self.active)
    }

    pub fn error(&self) -> Option<&str> {
        self.errors.get(&self.active).map(String::as_str)
    }

    pub fn figure_count(&self) -> usize {
        self.output().map_or(0, |o| o.figures.len())
    }

    pub fn figure_position(&self) -> usize {
        self.figure_index.get(&self.active).copied().unwrap_or(0)
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.output().and_then(|o| o.figures.get(self.figure_position()))
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

#[cfg(test)]
pub(crate) fn quick_config() -> LabConfig {
    let mut config = LabConfig::default();
    config.bootstrap.initial_sample_size = 200;
    config.bootstrap.n_resamples = 50;
    config.qq.sample_size = 100;
    config.long_tail.sample_size = 100;
    config
}
