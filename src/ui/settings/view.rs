use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::fixed_rect;
use crate::ui::settings::state::{SettingsState, ENTRY_PRIVACY, ENTRY_SIGN_OUT, ENTRY_TERMS};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::ui::widgets::status_line;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &SettingsState,
    server_url: &str,
    config_path: &str,
) {
    let mut lines = vec![
        Line::from(Span::styled(" Settings", Style::default().fg(MUTED_TEXT))),
        Line::from(""),
        entry_line(state, ENTRY_TERMS, "View user agreement".to_string()),
        entry_line(state, ENTRY_PRIVACY, "View privacy policy".to_string()),
        sign_out_line(state),
        Line::from(""),
        info_line("Server", server_url.to_string()),
        info_line("Config", config_path.to_string()),
        Line::from(""),
        status_line(state.busy, "Signing out...", state.error.as_deref()),
    ];

    let rect = fixed_rect(72, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}

fn entry_line(state: &SettingsState, index: usize, label: String) -> Line<'static> {
    let style = if state.selected == index {
        Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(Span::styled(format!(" {:<40}", label), style))
}

fn sign_out_line(state: &SettingsState) -> Line<'static> {
    let label = if state.confirm_logout {
        " Sign out (Enter again to confirm)"
    } else {
        " Sign out"
    };
    let mut style = Style::default().fg(STATUS_ERROR);
    if state.selected == ENTRY_SIGN_OUT {
        style = style.bg(ACTIVE_HIGHLIGHT);
    }
    Line::from(Span::styled(format!("{:<41}", label), style))
}

fn info_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<10}", label), Style::default().fg(MUTED_TEXT)),
        Span::styled(value, Style::default().fg(MUTED_TEXT)),
    ])
}
