//! Small rendering helpers shared by the screen views.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::form::FieldSet;
use crate::ui::layout::fixed_rect;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};

const LABEL_WIDTH: usize = 14;

/// One line per field: padded label, value (masked for secrets), a
/// cursor mark on the focused field, and the field error in red.
pub fn form_lines(fields: &FieldSet) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(fields.len() * 2);
    for (idx, field) in fields.fields().iter().enumerate() {
        let focused = idx == fields.focused();
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        let mut value = if field.secret {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.clone()
        };
        if focused {
            value.push('▏');
        }

        let mut spans = vec![
            Span::styled(
                format!(" {:<width$}", field.label, width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(value, Style::default().fg(HEADER_TEXT)),
        ];
        if let Some(error) = field.error {
            spans.push(Span::styled(
                format!("  {}", error),
                Style::default().fg(STATUS_ERROR),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

/// First visible row of a list, keeping the selection centered once the
/// list outgrows the window.
pub fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    let max_offset = len - visible;
    selected.saturating_sub(visible / 2).min(max_offset)
}

/// Clips a cell value to `max` characters with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Footer-adjacent status: a busy note while a request runs, otherwise
/// the screen error if there is one.
pub fn status_line(busy: bool, busy_text: &'static str, error: Option<&str>) -> Line<'static> {
    if busy {
        Line::from(Span::styled(
            format!(" {}", busy_text),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ))
    } else if let Some(message) = error {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(STATUS_ERROR),
        ))
    } else {
        Line::from("")
    }
}

/// Bordered popup over the current screen, fixed width, auto height.
pub struct PopupDialog {
    title: &'static str,
    lines: Vec<Line<'static>>,
    width: u16,
}

impl PopupDialog {
    pub fn new(title: &'static str, lines: Vec<Line<'static>>) -> Self {
        Self {
            title,
            lines,
            width: 50,
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let height = (self.lines.len() as u16).saturating_add(2);
        let rect = fixed_rect(self.width, height, area);
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Paragraph::new(self.lines).block(block), rect);
    }
}
