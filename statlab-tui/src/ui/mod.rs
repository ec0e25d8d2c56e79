//! Top-level UI layout — lesson tabs, figure and report, status bar.

pub mod figure_panel;
pub mod help_panel;
pub mod report_panel;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};

use statlab_runner::Lesson;

use crate::app::AppState;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(Block::default().style(theme::background()), f.area());
    draw_tabs(f, chunks[0], app);
    draw_lesson(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    if app.show_help {
        help_panel::render(f, centered_rect(70, 70, chunks[1]));
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let titles: Vec<Line> = Lesson::ALL
        .iter()
        .map(|l| Line::from(format!("{} {}", l.number(), l.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active.number().saturating_sub(1))
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(false))
                .title(Span::styled(" StatLab ", theme::panel_title(true))),
        );
    f.render_widget(tabs, area);
}

fn draw_lesson(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    match (app.output(), app.figure()) {
        (Some(output), Some(figure)) => {
            figure_panel::render(f, columns[0], figure, app.figure_position(), app.figure_count());
            report_panel::render(f, columns[1], output);
        }
        (Some(output), None) => {
            figure_panel::render_empty(f, columns[0], "This lesson has no figures.");
            report_panel::render(f, columns[1], output);
        }
        (None, _) => {
            let message = app
                .error()
                .map(|e| format!("Lesson failed: {e}"))
                .unwrap_or_else(|| "Lesson has not run yet.".to_string());
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::negative())
                .title(format!(" {} ", app.active.title()));
            let inner = block.inner(area);
            f.render_widget(block, area);
            figure_panel::render_empty(f, inner, &message);
        }
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
