use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::bill_form::state::{BillFocus, BillFormState};
use crate::ui::form::Field;
use crate::ui::layout::fixed_rect;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::status_line;

const LABEL_WIDTH: usize = 14;

pub fn render(frame: &mut Frame, area: Rect, state: &BillFormState) {
    let category = state
        .selected_pay_type()
        .map(|pt| pt.name.clone())
        .unwrap_or_else(|| "none".to_string());
    let account = state
        .selected_account()
        .map(|account| format!("{} ({})", account.name, account.kind.label()))
        .unwrap_or_else(|| "none".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            " Record a new bill",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
        choice_line("Kind", state.kind.label().to_string(), state.focus == BillFocus::Kind),
        Line::from(""),
    ];
    for (index, field) in state.fields.fields().iter().enumerate() {
        lines.push(field_line(field, state.focus.field_index() == Some(index)));
        lines.push(Line::from(""));
    }
    lines.push(choice_line("Category", category, state.focus == BillFocus::PayType));
    lines.push(Line::from(""));
    lines.push(choice_line("Account", account, state.focus == BillFocus::Account));
    lines.push(Line::from(""));

    let busy = state.submitting || state.loading;
    let busy_text = if state.submitting {
        "Saving..."
    } else {
        "Loading categories..."
    };
    lines.push(status_line(busy, busy_text, state.error.as_deref()));

    let rect = fixed_rect(72, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED_TEXT)
    }
}

fn field_line(field: &Field, focused: bool) -> Line<'static> {
    let mut value = field.value.clone();
    if focused {
        value.push('▏');
    }
    let mut spans = vec![
        Span::styled(
            format!(" {:<width$}", field.label, width = LABEL_WIDTH),
            label_style(focused),
        ),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ];
    if let Some(error) = field.error {
        spans.push(Span::styled(
            format!("  {}", error),
            Style::default().fg(STATUS_ERROR),
        ));
    }
    Line::from(spans)
}

fn choice_line(label: &'static str, value: String, focused: bool) -> Line<'static> {
    let shown = if focused {
        format!("‹ {} ›", value)
    } else {
        value
    };
    Line::from(vec![
        Span::styled(
            format!(" {:<width$}", label, width = LABEL_WIDTH),
            label_style(focused),
        ),
        Span::styled(shown, Style::default().fg(HEADER_TEXT)),
    ])
}
