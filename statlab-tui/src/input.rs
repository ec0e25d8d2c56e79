//! Keyboard input dispatch — help overlay first, then global keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use statlab_runner::Lesson;

use crate::app::AppState;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The help overlay swallows everything except its own close keys and quit.
    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => app.show_help = false,
            KeyCode::Char('q') => app.running = false,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char(c @ '1'..='8') => {
            let number = c as usize - '0' as usize;
            if let Some(lesson) = Lesson::from_number(number) {
                app.select(lesson);
            }
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_lesson();
            } else {
                app.next_lesson();
            }
        }
        KeyCode::BackTab => app.prev_lesson(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => step_figure(app, true),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => step_figure(app, false),
        KeyCode::Char('r') => {
            app.reseed();
            if app.error().is_none() {
                let seed = app.config.seed;
                app.set_status(format!("Reseeded: {} with seed {seed}", app.active.title()));
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}

fn step_figure(app: &mut AppState, forward: bool) {
    if app.figure_count() < 2 {
        app.set_warning(format!("{} has a single figure", app.active.title()));
        return;
    }
    if forward {
        app.next_figure();
    } else {
        app.prev_figure();
    }
}
