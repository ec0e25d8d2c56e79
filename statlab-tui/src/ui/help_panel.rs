//! Help overlay — keyboard shortcuts and lesson index.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use statlab_runner::Lesson;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Navigation");
    key(&mut lines, "1-8", "Switch to lesson by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle lessons forward / back");
    key(&mut lines, "← → / [ ]", "Previous / next figure");
    key(&mut lines, "r", "Reseed (seed + 1) and rerun");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Esc", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Lessons");
    for lesson in Lesson::ALL {
        key(&mut lines, &lesson.number().to_string(), lesson.description());
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Help ")
        .title_style(theme::panel_title(true));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, key: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {key:<18}"), theme::warning()),
        Span::styled(desc.to_string(), theme::text()),
    ]));
}
