use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::fixed_rect;
use crate::ui::register::state::RegisterState;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_OK};
use crate::ui::widgets::{form_lines, status_line};

pub fn render(frame: &mut Frame, area: Rect, state: &RegisterState) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Create a new account",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(&state.fields));

    let checkbox = if state.terms_accepted { "[x]" } else { "[ ]" };
    let checkbox_style = if state.terms_accepted {
        Style::default().fg(STATUS_OK)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", checkbox), checkbox_style),
        Span::styled(
            "I accept the user agreement (F6 to read)",
            Style::default().fg(MUTED_TEXT),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(status_line(
        state.submitting,
        "Creating account...",
        state.error.as_deref(),
    ));

    let rect = fixed_rect(72, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}
