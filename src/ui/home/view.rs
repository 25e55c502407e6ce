use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::{totals, FlowKind};
use crate::money::format_with_symbol;
use crate::ui::home::state::HomeState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, EXPENSE, HEADER_TEXT, INCOME, MUTED_TEXT};
use crate::ui::widgets::{scroll_offset, status_line, truncate};

pub fn render(frame: &mut Frame, area: Rect, state: &HomeState, symbol: &str) {
    let mut lines: Vec<Line> = Vec::new();

    let (expense, income) = totals(&state.bills);
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {}  ", state.month),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled("out ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format_with_symbol(expense, symbol),
            Style::default().fg(EXPENSE),
        ),
        Span::styled("   in ", Style::default().fg(MUTED_TEXT)),
        Span::styled(
            format_with_symbol(income, symbol),
            Style::default().fg(INCOME),
        ),
    ]));
    lines.push(Line::from(""));

    if state.loading && state.bills.is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading bills...",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if state.bills.is_empty() {
        lines.push(Line::from(Span::styled(
            " No bills this month. Press n to add one.",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        let visible_rows = area.height.saturating_sub(3) as usize;
        let offset = scroll_offset(state.selected, state.bills.len(), visible_rows);
        let amount_width = 12;
        let name_width = 18;

        for (idx, bill) in state.bills.iter().enumerate().skip(offset).take(visible_rows) {
            let amount_color = match bill.kind {
                FlowKind::Expense => EXPENSE,
                FlowKind::Income => INCOME,
            };
            let signed = match bill.kind {
                FlowKind::Expense => format!("-{}", format_with_symbol(bill.amount_minor, symbol)),
                FlowKind::Income => format!("+{}", format_with_symbol(bill.amount_minor, symbol)),
            };
            let mut detail = match (&bill.account_name, &bill.remark) {
                (Some(account), Some(remark)) => format!("{}  {}", account, remark),
                (Some(account), None) => account.clone(),
                (None, Some(remark)) => remark.clone(),
                (None, None) => String::new(),
            };
            if bill.image.is_some() {
                if !detail.is_empty() {
                    detail.push_str("  ");
                }
                detail.push_str("[receipt]");
            }

            let row_style = if idx == state.selected {
                Style::default().bg(ACTIVE_HIGHLIGHT)
            } else {
                Style::default()
            };
            lines.push(
                Line::from(vec![
                    Span::styled(
                        format!(" {}  ", bill.happened_label()),
                        Style::default().fg(MUTED_TEXT),
                    ),
                    Span::styled(
                        format!("{:<width$}", truncate(&bill.pay_type_name, name_width), width = name_width),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::styled(
                        format!("{:>width$}", signed, width = amount_width),
                        Style::default().fg(amount_color),
                    ),
                    Span::styled(format!("  {}", detail), Style::default().fg(MUTED_TEXT)),
                ])
                .style(row_style),
            );
        }
    }

    lines.push(status_line(
        state.loading && !state.bills.is_empty(),
        "Refreshing...",
        state.error.as_deref(),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}
