use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top band: app name, current screen, and who is signed in.
pub struct Header {
    title: &'static str,
    user: Option<String>,
}

impl Header {
    pub fn new(title: &'static str, user: Option<String>) -> Self {
        Self { title, user }
    }

    pub fn widget(&self, width: u16) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let user_style = Style::default().fg(STATUS_OK);

        let left = format!("  billfold  │  {}", self.title);
        let right = match &self.user {
            Some(name) => format!("{}  ", name),
            None => String::new(),
        };

        let left_width = left.chars().count();
        let right_width = right.chars().count();
        let padding = (width.saturating_sub(2) as usize)
            .saturating_sub(left_width)
            .saturating_sub(right_width);

        let line = Line::from(vec![
            Span::styled("  billfold", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.title, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, user_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
