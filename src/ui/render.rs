//! Top-level frame composition: header band, current screen, footer,
//! and the toast overlay.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::{hints, Footer};
use crate::ui::header::Header;
use crate::ui::layout::regions;
use crate::ui::nav::Screen;
use crate::ui::theme::STATUS_OK;
use crate::ui::{
    accounts, activate, agreement, bill_form, forgot, home, login, paytypes, profile, register,
    settings,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let bands = regions(area);
    let screen = app.screen();

    let header = Header::new(screen.title(), app.user_label());
    frame.render_widget(header.widget(bands.header.width), bands.header);

    let config = app.config().get();
    match screen {
        Screen::Login => login::render(frame, bands.body, app.login()),
        Screen::Register => register::render(frame, bands.body, app.register()),
        Screen::Forgot => forgot::render(frame, bands.body, app.forgot()),
        Screen::Activate => activate::render(frame, bands.body, app.activate()),
        Screen::Home => home::render(frame, bands.body, app.home(), &config.ui.currency_symbol),
        Screen::BillForm => bill_form::render(frame, bands.body, app.bill_form()),
        Screen::PayTypes => paytypes::render(frame, bands.body, app.pay_types()),
        Screen::Accounts => {
            accounts::render(frame, bands.body, app.accounts(), &config.ui.currency_symbol);
        }
        Screen::Profile => profile::render(frame, bands.body, app.profile()),
        Screen::Settings => {
            let config_path = app.config().path().display().to_string();
            settings::render(
                frame,
                bands.body,
                app.settings(),
                &config.server.base_url,
                &config_path,
            );
        }
        Screen::Agreement { .. } => agreement::render(frame, bands.body, app.agreement()),
    }

    let footer = Footer::new(hints(&screen));
    frame.render_widget(footer.widget(bands.footer), bands.footer);

    if let Some(message) = app.toast() {
        draw_toast(frame, area, bands.footer, message);
    }
}

/// One highlighted line in the bottom-right corner, above the footer.
fn draw_toast(frame: &mut Frame, area: Rect, footer: Rect, message: &str) {
    let text = format!(" {} ", message);
    let width = (text.chars().count() as u16).min(area.width);
    if width == 0 || footer.y == 0 {
        return;
    }
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: footer.y.saturating_sub(1),
        width,
        height: 1,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        ))),
        rect,
    );
}
