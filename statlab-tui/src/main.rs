//! StatLab TUI — one tab per lesson, figures drawn as terminal charts.
//!
//! Layout:
//! - Tabs: the eight lessons, selectable by number
//! - Figure: every panel of the current figure as a ratatui chart
//! - Report: the values the lesson computed
//! - Status bar: seed, figure position, last message

mod app;
mod input;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use statlab_runner::{LabConfig, Lesson};

use crate::app::AppState;

#[derive(Parser)]
#[command(name = "statlab-tui", about = "StatLab TUI — interactive statistics lessons")]
struct Args {
    /// Path to a TOML lab config. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the master seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Lesson to open first (name or number).
    #[arg(long, default_value = "bootstrap")]
    lesson: Lesson,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LabConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LabConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // The first lesson runs before the screen switches, so a slow start
    // leaves the shell visible rather than a blank frame.
    let mut app = AppState::new(config, args.lesson);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive to resizes.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn lesson_flag_accepts_numbers_and_aliases() {
        let args = Args::try_parse_from(["statlab-tui", "--lesson", "3", "--seed", "7"]).unwrap();
        assert_eq!(args.lesson, Lesson::Qq);
        assert_eq!(args.seed, Some(7));

        let args = Args::try_parse_from(["statlab-tui", "--lesson", "se"]).unwrap();
        assert_eq!(args.lesson, Lesson::StandardError);
    }
}
