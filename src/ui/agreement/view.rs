use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::agreement::state::AgreementState;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

pub fn render(frame: &mut Frame, area: Rect, state: &AgreementState) {
    let title = state
        .doc
        .as_ref()
        .map(|doc| doc.title.clone())
        .unwrap_or_else(|| state.kind.title().to_string());

    let mut header = vec![Span::styled(
        format!(" {}", title),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if state.consent {
        header.push(Span::styled(
            "  (y to accept, n to decline)",
            Style::default().fg(MUTED_TEXT),
        ));
    }

    let body: Vec<Line> = match (&state.doc, &state.error) {
        (Some(doc), _) => doc
            .body
            .lines()
            .map(|line| Line::from(format!(" {}", line)))
            .collect(),
        (None, Some(error)) => vec![Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        ))],
        (None, None) => vec![Line::from(Span::styled(
            " Loading...",
            Style::default().fg(MUTED_TEXT),
        ))],
    };

    let mut lines = vec![Line::from(header), Line::from("")];
    lines.extend(body);

    frame.render_widget(
        Paragraph::new(lines).scroll((state.scroll, 0)),
        area,
    );
}
