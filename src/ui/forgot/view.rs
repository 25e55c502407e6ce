use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::forgot::state::ForgotState;
use crate::ui::layout::fixed_rect;
use crate::ui::theme::MUTED_TEXT;
use crate::ui::widgets::{form_lines, status_line};

pub fn render(frame: &mut Frame, area: Rect, state: &ForgotState) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Enter your account email and we'll send a reset link",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(&state.fields));
    lines.push(status_line(
        state.submitting,
        "Sending...",
        state.error.as_deref(),
    ));

    let rect = fixed_rect(72, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}
