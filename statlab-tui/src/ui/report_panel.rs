//! Report pane: the lesson's printed values, one entry per block.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use statlab_runner::{LessonOutput, ReportValue};

use crate::theme;

/// Series longer than this are summarised instead of listed.
const MAX_LISTED: usize = 12;

pub fn render(f: &mut Frame, area: Rect, output: &LessonOutput) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(" Report · seed {} ", output.seed))
        .title_style(theme::panel_title(false));

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(output.lesson.description(), theme::muted())),
        Line::from(""),
    ];
    for entry in &output.report.entries {
        lines.push(Line::from(Span::styled(entry.label.clone(), theme::accent_bold())));
        lines.extend(value_lines(&entry.value));
    }

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn value_lines(value: &ReportValue) -> Vec<Line<'static>> {
    match value {
        ReportValue::Series { values } if values.len() > MAX_LISTED => {
            let shown = ReportValue::Series {
                values: values[..MAX_LISTED].to_vec(),
            };
            vec![
                Line::from(format!("  {shown}")),
                Line::from(Span::styled(
                    format!("  … {} more", values.len() - MAX_LISTED),
                    theme::muted(),
                )),
            ]
        }
        ReportValue::Table { .. } => value
            .to_string()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| Line::from(format!("  {}", l.trim())))
            .collect(),
        other => vec![Line::from(Span::styled(format!("  {other}"), theme::text()))],
    }
}
