use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::model::AccountKind;
use crate::money::format_with_symbol;
use crate::ui::accounts::state::AccountsState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::widgets::{scroll_offset, status_line, truncate};

pub fn render(frame: &mut Frame, area: Rect, state: &AccountsState, symbol: &str) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Accounts  ", Style::default().fg(MUTED_TEXT)),
            Span::styled("total ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format_with_symbol(state.total_minor(), symbol),
                balance_style(state.total_minor()),
            ),
        ]),
        kind_totals_line(state, symbol),
        Line::from(""),
    ];

    if state.loading && state.accounts.is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading accounts...",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if state.accounts.is_empty() {
        lines.push(Line::from(Span::styled(
            " No accounts on record.",
            Style::default().fg(MUTED_TEXT),
        )));
    } else {
        let visible = area.height.saturating_sub(4) as usize;
        let offset = scroll_offset(state.selected, state.accounts.len(), visible);
        for (idx, account) in state
            .accounts
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
            let mut spans = vec![
                Span::styled(
                    format!(" {:<20}", truncate(&account.name, 20)),
                    Style::default().fg(HEADER_TEXT),
                ),
                Span::styled(
                    format!("{:<12}", account.kind.label()),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::styled(
                    format!(
                        "{:>14}",
                        format_with_symbol(account.balance_minor, symbol)
                    ),
                    balance_style(account.balance_minor),
                ),
            ];
            if let Some(remark) = &account.remark {
                spans.push(Span::styled(
                    format!("  {}", remark),
                    Style::default().fg(MUTED_TEXT),
                ));
            }
            lines.push(Line::from(spans).style(row_style));
        }
    }

    lines.push(status_line(
        state.loading && !state.accounts.is_empty(),
        "Refreshing...",
        state.error.as_deref(),
    ));
    frame.render_widget(Paragraph::new(lines), area);
}

fn kind_totals_line(state: &AccountsState, symbol: &str) -> Line<'static> {
    let mut spans = vec![Span::from("            ")];
    for kind in [AccountKind::Electronic, AccountKind::Savings] {
        let total = state.kind_total_minor(kind);
        spans.push(Span::styled(
            format!("{} ", kind.label().to_lowercase()),
            Style::default().fg(MUTED_TEXT),
        ));
        spans.push(Span::styled(
            format!("{}   ", format_with_symbol(total, symbol)),
            balance_style(total),
        ));
    }
    Line::from(spans)
}

fn balance_style(balance_minor: i64) -> Style {
    if balance_minor < 0 {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(STATUS_OK)
    }
}
