use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::layout::fixed_rect;
use crate::ui::login::state::{CaptchaState, LoginState};
use crate::ui::theme::{MUTED_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::widgets::{form_lines, status_line};

pub fn render(frame: &mut Frame, area: Rect, state: &LoginState) {
    let mut lines = vec![
        Line::from(Span::styled(
            " Sign in to your ledger",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(&state.fields));

    lines.push(captcha_line(&state.captcha));
    lines.push(Line::from(""));
    lines.push(status_line(
        state.submitting,
        "Signing in...",
        state.error.as_deref(),
    ));

    let rect = fixed_rect(72, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines), rect);
}

fn captcha_line(captcha: &CaptchaState) -> Line<'static> {
    match captcha {
        CaptchaState::Missing => Line::from(Span::styled(
            " Captcha: not loaded (F5)",
            Style::default().fg(MUTED_TEXT),
        )),
        CaptchaState::Loading => Line::from(Span::styled(
            " Captcha: loading...",
            Style::default().fg(MUTED_TEXT),
        )),
        CaptchaState::Ready(captcha) => Line::from(vec![
            Span::styled(" Captcha image: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                captcha.image_path.display().to_string(),
                Style::default().fg(STATUS_OK),
            ),
        ]),
        CaptchaState::Failed { message } => Line::from(Span::styled(
            format!(" Captcha failed: {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
    }
}
