use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::fixed_rect;
use crate::ui::profile::state::ProfileState;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT};
use crate::ui::widgets::{form_lines, status_line};

pub fn render(frame: &mut Frame, area: Rect, state: &ProfileState) {
    let mut lines = vec![
        Line::from(Span::styled(" Profile", Style::default().fg(MUTED_TEXT))),
        Line::from(""),
    ];

    match &state.user {
        Some(user) => {
            lines.push(info_line("Username", user.username.clone()));
            lines.push(info_line("Bills", user.bill_count.to_string()));
            lines.push(info_line("Accounts", user.account_count.to_string()));
        }
        None if state.loading => {
            lines.push(Line::from(Span::styled(
                " Loading profile...",
                Style::default().fg(MUTED_TEXT),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                " Profile not loaded. Press F5 to retry.",
                Style::default().fg(MUTED_TEXT),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.extend(form_lines(&state.fields));
    lines.push(status_line(
        state.submitting,
        "Saving...",
        state.error.as_deref(),
    ));

    let rect = fixed_rect(72, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}

fn info_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<14}", label),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}
