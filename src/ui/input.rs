//! Keyboard handling: turns key events into per-screen intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::accounts::AccountsIntent;
use crate::ui::activate::ActivateIntent;
use crate::ui::agreement::AgreementIntent;
use crate::ui::app::App;
use crate::ui::bill_form::BillFormIntent;
use crate::ui::forgot::ForgotIntent;
use crate::ui::home::HomeIntent;
use crate::ui::login::LoginIntent;
use crate::ui::nav::{NavRequest, Screen};
use crate::ui::paytypes::{PayTypesIntent, PayTypesMode};
use crate::ui::profile::ProfileIntent;
use crate::ui::register::RegisterIntent;
use crate::ui::settings::SettingsIntent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Terminals that report releases would double every keystroke.
    if key.kind != KeyEventKind::Press {
        return;
    }
    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    match app.screen() {
        Screen::Login => login_keys(app, key),
        Screen::Register => register_keys(app, key),
        Screen::Forgot => forgot_keys(app, key),
        Screen::Activate => activate_keys(app, key),
        Screen::Home => home_keys(app, key),
        Screen::BillForm => bill_form_keys(app, key),
        Screen::PayTypes => pay_types_keys(app, key),
        Screen::Accounts => accounts_keys(app, key),
        Screen::Profile => profile_keys(app, key),
        Screen::Settings => settings_keys(app, key),
        Screen::Agreement { consent, .. } => agreement_keys(app, key, consent),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

/// A character meant for a text field. Control and alt chords are
/// shortcuts, not input.
fn typed_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn login_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_login(LoginIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_login(LoginIntent::FocusPrev),
        KeyCode::Enter => app.dispatch_login(LoginIntent::Submit),
        KeyCode::F(5) => app.dispatch_login(LoginIntent::RefreshCaptcha),
        KeyCode::F(2) => app.navigate(NavRequest::Push(Screen::Register)),
        KeyCode::F(3) => app.navigate(NavRequest::Push(Screen::Forgot)),
        KeyCode::F(4) => app.navigate(NavRequest::Push(Screen::Activate)),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        _ => {
            if let Some(c) = typed_char(key) {
                app.dispatch_login(LoginIntent::Input(c));
            }
        }
    }
}

fn register_keys(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 't') {
        app.dispatch_register(RegisterIntent::ToggleTerms);
        return;
    }
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_register(RegisterIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_register(RegisterIntent::FocusPrev),
        KeyCode::Enter => app.dispatch_register(RegisterIntent::Submit),
        KeyCode::F(6) => app.dispatch_register(RegisterIntent::ViewTerms),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        KeyCode::Backspace => app.dispatch_register(RegisterIntent::Backspace),
        _ => {
            if let Some(c) = typed_char(key) {
                app.dispatch_register(RegisterIntent::Input(c));
            }
        }
    }
}

fn forgot_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.dispatch_forgot(ForgotIntent::Submit),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        KeyCode::Backspace => app.dispatch_forgot(ForgotIntent::Backspace),
        _ => {
            if let Some(c) = typed_char(key) {
                app.dispatch_forgot(ForgotIntent::Input(c));
            }
        }
    }
}

fn activate_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_activate(ActivateIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_activate(ActivateIntent::FocusPrev),
        KeyCode::Enter => app.dispatch_activate(ActivateIntent::Submit),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        KeyCode::Backspace => app.dispatch_activate(ActivateIntent::Backspace),
        _ => {
            if let Some(c) = typed_char(key) {
                app.dispatch_activate(ActivateIntent::Input(c));
            }
        }
    }
}

fn home_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.dispatch_home(HomeIntent::PrevMonth),
        KeyCode::Right => app.dispatch_home(HomeIntent::NextMonth),
        KeyCode::Up => app.dispatch_home(HomeIntent::SelectUp),
        KeyCode::Down => app.dispatch_home(HomeIntent::SelectDown),
        KeyCode::Char('n') => app.navigate(NavRequest::Push(Screen::BillForm)),
        KeyCode::Char('c') => app.navigate(NavRequest::Push(Screen::PayTypes)),
        KeyCode::Char('a') => app.navigate(NavRequest::Push(Screen::Accounts)),
        KeyCode::Char('p') => app.navigate(NavRequest::Push(Screen::Profile)),
        KeyCode::Char('s') => app.navigate(NavRequest::Push(Screen::Settings)),
        KeyCode::Char('r') => app.dispatch_home(HomeIntent::Refresh),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        _ => {}
    }
}

fn bill_form_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_bill_form(BillFormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_bill_form(BillFormIntent::FocusPrev),
        KeyCode::Left => app.dispatch_bill_form(BillFormIntent::CycleLeft),
        KeyCode::Right => app.dispatch_bill_form(BillFormIntent::CycleRight),
        KeyCode::Enter => app.dispatch_bill_form(BillFormIntent::Submit),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        KeyCode::Backspace => app.dispatch_bill_form(BillFormIntent::Backspace),
        _ => {
            if let Some(c) = typed_char(key) {
                app.dispatch_bill_form(BillFormIntent::Input(c));
            }
        }
    }
}

fn pay_types_keys(app: &mut App, key: KeyEvent) {
    match app.pay_types().mode {
        PayTypesMode::Edit(_) => match key.code {
            KeyCode::Enter => app.dispatch_pay_types(PayTypesIntent::Submit),
            KeyCode::Esc => app.dispatch_pay_types(PayTypesIntent::Cancel),
            KeyCode::Backspace => app.dispatch_pay_types(PayTypesIntent::Backspace),
            KeyCode::Left | KeyCode::Right => app.dispatch_pay_types(PayTypesIntent::ToggleKind),
            _ => {
                if let Some(c) = typed_char(key) {
                    app.dispatch_pay_types(PayTypesIntent::Input(c));
                }
            }
        },
        PayTypesMode::ConfirmDelete => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                app.dispatch_pay_types(PayTypesIntent::ConfirmDelete);
            }
            KeyCode::Char('n') | KeyCode::Esc => app.dispatch_pay_types(PayTypesIntent::Cancel),
            _ => {}
        },
        PayTypesMode::Browse => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.dispatch_pay_types(PayTypesIntent::SelectUp),
            KeyCode::Down | KeyCode::Char('j') => {
                app.dispatch_pay_types(PayTypesIntent::SelectDown);
            }
            KeyCode::Char('K') => app.dispatch_pay_types(PayTypesIntent::MoveUp),
            KeyCode::Char('J') => app.dispatch_pay_types(PayTypesIntent::MoveDown),
            KeyCode::Char('o') => app.dispatch_pay_types(PayTypesIntent::SaveOrder),
            KeyCode::Char('n') => app.dispatch_pay_types(PayTypesIntent::BeginCreateChild),
            KeyCode::Char('N') => app.dispatch_pay_types(PayTypesIntent::BeginCreateRoot),
            KeyCode::Char('e') => app.dispatch_pay_types(PayTypesIntent::BeginRename),
            KeyCode::Char('d') => app.dispatch_pay_types(PayTypesIntent::BeginDelete),
            KeyCode::Char('r') => app.dispatch_pay_types(PayTypesIntent::Refresh),
            KeyCode::Esc => app.navigate(NavRequest::Back),
            _ => {}
        },
    }
}

fn accounts_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_accounts(AccountsIntent::SelectUp),
        KeyCode::Down => app.dispatch_accounts(AccountsIntent::SelectDown),
        KeyCode::Char('r') => app.dispatch_accounts(AccountsIntent::Refresh),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        _ => {}
    }
}

fn profile_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.dispatch_profile(ProfileIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_profile(ProfileIntent::FocusPrev),
        KeyCode::Enter => app.dispatch_profile(ProfileIntent::Submit),
        KeyCode::F(5) => app.dispatch_profile(ProfileIntent::Refresh),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        KeyCode::Backspace => app.dispatch_profile(ProfileIntent::Backspace),
        _ => {
            if let Some(c) = typed_char(key) {
                app.dispatch_profile(ProfileIntent::Input(c));
            }
        }
    }
}

fn settings_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_settings(SettingsIntent::MoveUp),
        KeyCode::Down => app.dispatch_settings(SettingsIntent::MoveDown),
        KeyCode::Enter => app.dispatch_settings(SettingsIntent::Activate),
        KeyCode::Esc => app.navigate(NavRequest::Back),
        _ => {}
    }
}

fn agreement_keys(app: &mut App, key: KeyEvent, consent: bool) {
    match key.code {
        KeyCode::Up => app.dispatch_agreement(AgreementIntent::ScrollUp),
        KeyCode::Down => app.dispatch_agreement(AgreementIntent::ScrollDown),
        KeyCode::PageUp => app.dispatch_agreement(AgreementIntent::PageUp),
        KeyCode::PageDown => app.dispatch_agreement(AgreementIntent::PageDown),
        KeyCode::Char('y') if consent => app.dispatch_agreement(AgreementIntent::Accept),
        KeyCode::Char('n') if consent => app.dispatch_agreement(AgreementIntent::Decline),
        // A consent page cannot be escaped; the choice has to be made.
        KeyCode::Esc if !consent => app.navigate(NavRequest::Back),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};
    use crate::session::SessionStore;

    struct TestEnv {
        _rx: tokio::sync::mpsc::Receiver<crate::ui::worker::ApiRequest>,
        _dir: tempfile::TempDir,
    }

    fn make_app(signed_in: bool) -> (App, TestEnv) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = ConfigStore::new(Config::default(), dir.path().join("config.toml"));
        let session = SessionStore::load_or_default(&dir.path().join("session.toml"));
        session.set_privacy_accepted(true).expect("persist consent");
        if signed_in {
            session
                .set_auth("token-1".to_string(), "user123".to_string())
                .expect("persist auth");
        }
        let (tx, rx) = tokio::sync::mpsc::channel(32);
        (App::new(config, session, tx), TestEnv { _rx: rx, _dir: dir })
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn ctrl_q_quits_from_any_screen() {
        let (mut app, _env) = make_app(true);

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );

        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let (mut app, _env) = make_app(false);
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );

        handle_key(&mut app, release);

        assert_eq!(app.login().fields.value(0), "");
    }

    #[test]
    fn typing_lands_in_the_focused_login_field() {
        let (mut app, _env) = make_app(false);

        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Char('1'));

        assert_eq!(app.login().fields.value(0), "u1");
    }

    #[test]
    fn home_shortcuts_navigate() {
        let (mut app, _env) = make_app(true);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen(), Screen::Settings);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn escape_backs_out_of_the_register_screen() {
        let (mut app, _env) = make_app(false);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.screen(), Screen::Register);

        press(&mut app, KeyCode::Esc);

        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn escape_does_not_leave_a_consent_page() {
        let (mut app, _env) = make_app(false);
        app.navigate(crate::ui::nav::NavRequest::Push(Screen::Agreement {
            kind: crate::model::AgreementKind::Privacy,
            consent: true,
        }));

        press(&mut app, KeyCode::Esc);

        assert!(matches!(app.screen(), Screen::Agreement { .. }));
    }
}
