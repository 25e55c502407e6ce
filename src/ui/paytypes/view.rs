use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::FlowKind;
use crate::ui::paytypes::state::{EditTarget, PayTypesMode, PayTypesState};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, EXPENSE, HEADER_TEXT, INCOME, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::{scroll_offset, status_line, PopupDialog};

pub fn render(frame: &mut Frame, area: Rect, state: &PayTypesState) {
    let mut lines = vec![title_line(state), Line::from("")];

    if state.loading && state.pay_types.is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading categories...",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if state.pay_types.is_empty() {
        lines.push(Line::from(Span::styled(
            " No categories yet. Press N to add one.",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        let visible = area.height.saturating_sub(3) as usize;
        let offset = scroll_offset(state.selected, state.pay_types.len(), visible);
        for (idx, pay_type) in state
            .pay_types
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
        {
            let row_style = if idx == state.selected {
                Style::default().bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default()
            };
            let line = if pay_type.is_root() {
                let kind_color = match pay_type.kind {
                    FlowKind::Expense => EXPENSE,
                    FlowKind::Income => INCOME,
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {:<24}", pay_type.name),
                        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(pay_type.kind.label(), Style::default().fg(kind_color)),
                ])
            } else {
                Line::from(Span::styled(
                    format!("    {}", pay_type.name),
                    Style::default().fg(HEADER_TEXT),
                ))
            };
            lines.push(line.style(row_style));
        }
    }

    lines.push(status_line(
        state.loading || state.busy,
        if state.busy { "Saving..." } else { "Loading..." },
        state.error.as_deref(),
    ));
    frame.render_widget(Paragraph::new(lines), area);

    match state.mode {
        PayTypesMode::Edit(target) => render_edit(frame, area, state, target),
        PayTypesMode::ConfirmDelete => render_confirm(frame, area, state),
        PayTypesMode::Browse => {}
    }
}

fn title_line(state: &PayTypesState) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " Categories",
        Style::default().fg(MUTED_TEXT),
    )];
    if state.dirty {
        spans.push(Span::styled(
            "  unsaved order, press o to save",
            Style::default().fg(ACCENT),
        ));
    }
    Line::from(spans)
}

fn render_edit(frame: &mut Frame, area: Rect, state: &PayTypesState, target: EditTarget) {
    let title = match target {
        EditTarget::NewRoot { .. } => "New category",
        EditTarget::NewChild { .. } => "New subcategory",
        EditTarget::Rename { .. } => "Rename category",
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(" Name: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format!("{}▏", state.edit_value),
            Style::default().fg(HEADER_TEXT),
        ),
    ])];
    match target {
        EditTarget::NewRoot { kind } => {
            lines.push(Line::from(vec![
                Span::styled(" Kind: ", Style::default().fg(MUTED_TEXT)),
                Span::styled(
                    format!("‹ {} ›", kind.label()),
                    Style::default().fg(HEADER_TEXT),
                ),
            ]));
        }
        EditTarget::NewChild { parent_id } => {
            let parent = state
                .pay_types
                .iter()
                .find(|pt| pt.id == parent_id)
                .map(|pt| pt.name.as_str())
                .unwrap_or("?");
            lines.push(Line::from(Span::styled(
                format!(" Under: {}", parent),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        EditTarget::Rename { .. } => {}
    }
    if let Some(error) = state.edit_error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: Save │ Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    PopupDialog::new(title, lines).render(frame, area);
}

fn render_confirm(frame: &mut Frame, area: Rect, state: &PayTypesState) {
    let name = state
        .selected_entry()
        .map(|entry| entry.name.as_str())
        .unwrap_or("?");
    let lines = vec![
        Line::from(Span::styled(
            format!(" Delete \"{}\"? Its bills keep the name.", name),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " y: Delete │ n: Keep",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    PopupDialog::new("Delete category", lines).render(frame, area);
}
