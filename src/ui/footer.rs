use crate::ui::nav::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the footer, per screen.
pub fn hints(screen: &Screen) -> &'static str {
    match screen {
        Screen::Login => " Tab: Next field │ Enter: Sign in │ F5: New captcha │ F2: Register │ F3: Reset │ F4: Activate │ Ctrl+Q: Quit",
        Screen::Register => " Tab: Next field │ Ctrl+T: Toggle terms │ F6: View terms │ Enter: Submit │ Esc: Back",
        Screen::Forgot => " Enter: Send reset email │ Esc: Back │ Ctrl+Q: Quit",
        Screen::Activate => " Tab: Next field │ Enter: Activate │ Esc: Back │ Ctrl+Q: Quit",
        Screen::Home => " ←/→: Month │ ↑/↓: Select │ n: New bill │ c: Categories │ a: Accounts │ p: Profile │ s: Settings │ r: Refresh │ Esc: Quit",
        Screen::BillForm => " Tab: Next │ ←/→: Change choice │ Enter: Save │ Esc: Cancel",
        Screen::PayTypes => " ↑/↓: Select │ J/K: Move │ o: Save order │ n/N: New child/root │ e: Rename │ d: Delete │ r: Refresh │ Esc: Back",
        Screen::Accounts => " ↑/↓: Select │ r: Refresh │ Esc: Back",
        Screen::Profile => " Tab: Next field │ Enter: Save │ F5: Reload │ Esc: Back",
        Screen::Settings => " ↑/↓: Select │ Enter: Open │ Esc: Back",
        Screen::Agreement { consent: false, .. } => " ↑/↓/PgUp/PgDn: Scroll │ Esc: Back",
        Screen::Agreement { consent: true, .. } => " ↑/↓: Scroll │ y: Accept │ n: Decline",
    }
}

pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn new(hints: &'static str) -> Self {
        Self { hints }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
