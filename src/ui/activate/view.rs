use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::activate::state::ActivateState;
use crate::ui::layout::fixed_rect;
use crate::ui::theme::MUTED_TEXT;
use crate::ui::widgets::{form_lines, status_line};

pub fn render(frame: &mut Frame, area: Rect, state: &ActivateState) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Enter the activation code from your email",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(&state.fields));
    lines.push(status_line(
        state.submitting,
        "Activating...",
        state.error.as_deref(),
    ));

    let rect = fixed_rect(72, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}
