//! Bottom status bar — seed, figure position, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(" seed {} ", app.config.seed),
        theme::neutral(),
    ));
    if app.figure_count() > 0 {
        spans.push(Span::styled(
            format!("fig {}/{} ", app.figure_position() + 1, app.figure_count()),
            theme::neutral(),
        ));
    }
    spans.push(Span::styled("· ?:Help r:Reseed q:Quit", theme::muted()));
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
