//! Application shell: owns the navigation stack and every screen's
//! state, runs reducers, and carries out the effects they emit.

use std::time::{Duration, Instant};

use crate::api::ApiError;
use crate::config::ConfigStore;
use crate::model::{AgreementKind, Month};
use crate::repo::{ApiCall, ApiOutcome};
use crate::session::SessionStore;
use crate::ui::accounts::{AccountsIntent, AccountsReducer, AccountsState};
use crate::ui::activate::{ActivateIntent, ActivateReducer, ActivateState};
use crate::ui::agreement::{AgreementIntent, AgreementReducer, AgreementState};
use crate::ui::bill_form::{BillFormIntent, BillFormReducer, BillFormState};
use crate::ui::effect::UiEffect;
use crate::ui::events::ApiReply;
use crate::ui::forgot::{ForgotIntent, ForgotReducer, ForgotState};
use crate::ui::home::{HomeIntent, HomeReducer, HomeState};
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavRequest, NavStack, Popped, Screen};
use crate::ui::paytypes::{PayTypesIntent, PayTypesReducer, PayTypesState};
use crate::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::ui::register::{RegisterIntent, RegisterReducer, RegisterState};
use crate::ui::settings::{SettingsIntent, SettingsReducer, SettingsState};
use crate::ui::worker::ApiRequest;
use crate::ui::{login, register};

/// How long a toast stays on screen.
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Run one reducer step against a screen's state field and carry out
/// the effects it produced.
macro_rules! dispatch_screen {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let transition = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = transition.state;
        for effect in transition.effects {
            $self.handle_effect(effect);
        }
    }};
}

pub struct App {
    should_quit: bool,
    nav: NavStack,
    /// Bumped on every navigation change. Server replies stamped with
    /// an older value belong to a screen the user already left and
    /// are dropped.
    epoch: u64,
    login: LoginState,
    register: RegisterState,
    forgot: ForgotState,
    activate: ActivateState,
    home: HomeState,
    bill_form: BillFormState,
    pay_types: PayTypesState,
    accounts: AccountsState,
    profile: ProfileState,
    settings: SettingsState,
    agreement: AgreementState,
    toast: Option<(String, Instant)>,
    config: ConfigStore,
    session: SessionStore,
    api_tx: tokio::sync::mpsc::Sender<ApiRequest>,
}

impl App {
    pub fn new(
        config: ConfigStore,
        session: SessionStore,
        api_tx: tokio::sync::mpsc::Sender<ApiRequest>,
    ) -> Self {
        let root = if session.is_signed_in() {
            Screen::Home
        } else {
            Screen::Login
        };
        let mut app = Self {
            should_quit: false,
            nav: NavStack::new(root),
            epoch: 0,
            login: LoginState::default(),
            register: RegisterState::default(),
            forgot: ForgotState::default(),
            activate: ActivateState::default(),
            home: HomeState::default(),
            bill_form: BillFormState::default(),
            pay_types: PayTypesState::default(),
            accounts: AccountsState::default(),
            profile: ProfileState::default(),
            settings: SettingsState::default(),
            agreement: AgreementState::default(),
            toast: None,
            config,
            session,
            api_tx,
        };
        app.enter_current();
        if !app.session.privacy_accepted() {
            app.navigate(NavRequest::Push(Screen::Agreement {
                kind: AgreementKind::Privacy,
                consent: true,
            }));
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.nav.current()
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_ref().map(|(message, _)| message.as_str())
    }

    /// Name shown in the header when signed in.
    pub fn user_label(&self) -> Option<String> {
        if !self.session.is_signed_in() {
            return None;
        }
        let data = self.session.get();
        data.nick_name.or(data.username)
    }

    pub fn login(&self) -> &LoginState {
        &self.login
    }

    pub fn register(&self) -> &RegisterState {
        &self.register
    }

    pub fn forgot(&self) -> &ForgotState {
        &self.forgot
    }

    pub fn activate(&self) -> &ActivateState {
        &self.activate
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn bill_form(&self) -> &BillFormState {
        &self.bill_form
    }

    pub fn pay_types(&self) -> &PayTypesState {
        &self.pay_types
    }

    pub fn accounts(&self) -> &AccountsState {
        &self.accounts
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn agreement(&self) -> &AgreementState {
        &self.agreement
    }

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_screen!(self, login, LoginReducer, intent);
    }

    pub fn dispatch_register(&mut self, intent: RegisterIntent) {
        dispatch_screen!(self, register, RegisterReducer, intent);
    }

    pub fn dispatch_forgot(&mut self, intent: ForgotIntent) {
        dispatch_screen!(self, forgot, ForgotReducer, intent);
    }

    pub fn dispatch_activate(&mut self, intent: ActivateIntent) {
        dispatch_screen!(self, activate, ActivateReducer, intent);
    }

    pub fn dispatch_home(&mut self, intent: HomeIntent) {
        dispatch_screen!(self, home, HomeReducer, intent);
    }

    pub fn dispatch_bill_form(&mut self, intent: BillFormIntent) {
        dispatch_screen!(self, bill_form, BillFormReducer, intent);
    }

    pub fn dispatch_pay_types(&mut self, intent: PayTypesIntent) {
        dispatch_screen!(self, pay_types, PayTypesReducer, intent);
    }

    pub fn dispatch_accounts(&mut self, intent: AccountsIntent) {
        dispatch_screen!(self, accounts, AccountsReducer, intent);
    }

    pub fn dispatch_profile(&mut self, intent: ProfileIntent) {
        dispatch_screen!(self, profile, ProfileReducer, intent);
    }

    pub fn dispatch_settings(&mut self, intent: SettingsIntent) {
        dispatch_screen!(self, settings, SettingsReducer, intent);
    }

    pub fn dispatch_agreement(&mut self, intent: AgreementIntent) {
        dispatch_screen!(self, agreement, AgreementReducer, intent);
    }

    /// Apply a navigation change and let the now-current screen react.
    pub fn navigate(&mut self, request: NavRequest) {
        match request {
            NavRequest::Push(screen) => {
                self.nav.push(screen);
                self.bump_epoch();
                self.enter_current();
            }
            NavRequest::BringToFront(screen) => {
                self.nav.bring_to_front(screen);
                self.bump_epoch();
                self.enter_current();
            }
            NavRequest::Reset(root) => {
                self.nav.reset(root);
                self.bump_epoch();
                self.enter_current();
            }
            NavRequest::Back => match self.nav.back() {
                Popped::To(_) => {
                    self.bump_epoch();
                    self.refresh_revealed();
                }
                Popped::WouldExit => self.request_quit(),
            },
        }
    }

    fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Reset the screen that just became current.
    fn enter_current(&mut self) {
        match self.nav.current() {
            Screen::Login => self.dispatch_login(LoginIntent::Enter),
            Screen::Register => self.dispatch_register(RegisterIntent::Enter),
            Screen::Forgot => self.dispatch_forgot(ForgotIntent::Enter),
            Screen::Activate => {
                let username = self.pending_username();
                self.dispatch_activate(ActivateIntent::Enter { username });
            }
            Screen::Home => self.dispatch_home(HomeIntent::Enter {
                current: Month::current(),
            }),
            Screen::BillForm => self.dispatch_bill_form(BillFormIntent::Enter),
            Screen::PayTypes => self.dispatch_pay_types(PayTypesIntent::Enter),
            Screen::Accounts => self.dispatch_accounts(AccountsIntent::Enter),
            Screen::Profile => self.dispatch_profile(ProfileIntent::Enter),
            Screen::Settings => self.dispatch_settings(SettingsIntent::Enter),
            Screen::Agreement { kind, consent } => {
                self.dispatch_agreement(AgreementIntent::Enter { kind, consent });
            }
        }
    }

    /// Refetch on screens revealed by a back pop, so edits made deeper
    /// in the stack show up. The login screen gets a fresh captcha: any
    /// fetch that was in flight when the user left died with the epoch.
    fn refresh_revealed(&mut self) {
        match self.nav.current() {
            Screen::Login => self.dispatch_login(LoginIntent::RefreshCaptcha),
            Screen::Home => self.dispatch_home(HomeIntent::Refresh),
            Screen::PayTypes => self.dispatch_pay_types(PayTypesIntent::Refresh),
            Screen::Accounts => self.dispatch_accounts(AccountsIntent::Refresh),
            Screen::Profile => self.dispatch_profile(ProfileIntent::Refresh),
            _ => {}
        }
    }

    /// Username to prefill on the activation screen, taken from
    /// whichever form the user came through.
    fn pending_username(&self) -> Option<String> {
        let registered = self.register.fields.value(register::FIELD_USERNAME).trim();
        if !registered.is_empty() {
            return Some(registered.to_string());
        }
        let typed = self.login.fields.value(login::FIELD_USERNAME).trim();
        if !typed.is_empty() {
            return Some(typed.to_string());
        }
        None
    }

    fn handle_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Api(call) => self.queue_api(call),
            UiEffect::Navigate(request) => self.navigate(request),
            UiEffect::Toast(message) => self.show_toast(message),
            UiEffect::AcceptConsent => {
                if let Err(err) = self.session.set_privacy_accepted(true) {
                    tracing::warn!("failed to record consent: {err}");
                    self.show_toast("Could not save your consent".to_string());
                }
            }
            UiEffect::Logout => self.finish_logout("Signed out"),
            UiEffect::Quit => self.request_quit(),
        }
    }

    fn queue_api(&mut self, call: ApiCall) {
        let request = ApiRequest {
            epoch: self.epoch,
            call,
        };
        if let Err(err) = self.api_tx.try_send(request) {
            tracing::error!("api queue unavailable: {err}");
            self.show_toast("Too many pending requests".to_string());
        }
    }

    fn show_toast(&mut self, message: String) {
        self.toast = Some((message, Instant::now()));
    }

    pub fn on_tick(&mut self) {
        if let Some((_, shown_at)) = &self.toast {
            if shown_at.elapsed() >= TOAST_TTL {
                self.toast = None;
            }
        }
    }

    /// Route a finished server call back to the screen that asked.
    pub fn on_api_reply(&mut self, reply: ApiReply) {
        if reply.epoch != self.epoch {
            tracing::debug!(
                stale = reply.epoch,
                current = self.epoch,
                "dropping reply for a screen the user left"
            );
            return;
        }
        match reply.outcome {
            ApiOutcome::Captcha(result) => {
                self.dispatch_login(LoginIntent::CaptchaLoaded(friendly(result)));
            }
            ApiOutcome::LoggedIn { username, result } => match result {
                Ok(token) => self.finish_login(username, token),
                Err(err) => self.dispatch_login(LoginIntent::Failed {
                    message: err.user_message(),
                }),
            },
            ApiOutcome::Registered(result) => {
                self.dispatch_register(RegisterIntent::Finished(friendly(result)));
            }
            ApiOutcome::ResetRequested(result) => {
                self.dispatch_forgot(ForgotIntent::Finished(friendly(result)));
            }
            ApiOutcome::Activated(result) => {
                self.dispatch_activate(ActivateIntent::Finished(friendly(result)));
            }
            ApiOutcome::Agreement(result) => {
                self.dispatch_agreement(AgreementIntent::Loaded(friendly(result)));
            }
            ApiOutcome::Bills(result) => {
                self.dispatch_home(HomeIntent::Loaded(friendly(result)));
            }
            ApiOutcome::BillCreated(result) => {
                self.dispatch_bill_form(BillFormIntent::Finished(friendly(result)));
            }
            // The bill form and the category screen both ask for these
            // lists; whichever is current gets the reply.
            ApiOutcome::PayTypes(result) => match self.nav.current() {
                Screen::BillForm => {
                    self.dispatch_bill_form(BillFormIntent::PayTypesLoaded(friendly(result)));
                }
                _ => self.dispatch_pay_types(PayTypesIntent::Loaded(friendly(result))),
            },
            ApiOutcome::Accounts(result) => match self.nav.current() {
                Screen::BillForm => {
                    self.dispatch_bill_form(BillFormIntent::AccountsLoaded(friendly(result)));
                }
                _ => self.dispatch_accounts(AccountsIntent::Loaded(friendly(result))),
            },
            ApiOutcome::PayTypeSaved(result) => {
                self.dispatch_pay_types(PayTypesIntent::Mutated {
                    result: friendly(result),
                    toast: "Category saved",
                });
            }
            ApiOutcome::PayTypesSorted(result) => {
                self.dispatch_pay_types(PayTypesIntent::Mutated {
                    result: friendly(result),
                    toast: "Order saved",
                });
            }
            ApiOutcome::PayTypeDeleted(result) => {
                self.dispatch_pay_types(PayTypesIntent::Mutated {
                    result: friendly(result),
                    toast: "Category deleted",
                });
            }
            ApiOutcome::UserLoaded(result) => {
                if let Ok(user) = &result {
                    if let Err(err) = self
                        .session
                        .set_profile(user.nick_name.clone(), user.email.clone())
                    {
                        tracing::warn!("failed to store profile in session: {err}");
                    }
                }
                if self.nav.current() == Screen::Profile {
                    self.dispatch_profile(ProfileIntent::Loaded(friendly(result)));
                }
            }
            ApiOutcome::ProfileSaved {
                nick_name,
                email,
                result,
            } => {
                if result.is_ok() {
                    if let Err(err) = self.session.set_profile(nick_name, Some(email)) {
                        tracing::warn!("failed to store profile in session: {err}");
                    }
                }
                self.dispatch_profile(ProfileIntent::Finished(friendly(result)));
            }
            ApiOutcome::LoggedOut(result) => {
                self.dispatch_settings(SettingsIntent::LogoutFinished(friendly(result)));
            }
        }
    }

    fn finish_login(&mut self, username: String, token: String) {
        if let Err(err) = self.session.set_auth(token, username) {
            tracing::warn!("failed to persist session: {err}");
            self.show_toast("Signed in, but the session could not be saved".to_string());
        }
        self.navigate(NavRequest::Reset(Screen::Home));
        self.show_toast("Signed in".to_string());
        // Profile details feed the header; fetch them in the background.
        self.queue_api(ApiCall::FetchUser);
    }

    fn finish_logout(&mut self, message: &str) {
        if let Err(err) = self.session.clear() {
            tracing::warn!("failed to clear session file: {err}");
        }
        self.navigate(NavRequest::Reset(Screen::Login));
        self.show_toast(message.to_string());
    }

    /// The server rejected our token. Sent by the client's relogin
    /// hook, so it can arrive ahead of the failed call's own reply.
    pub fn on_session_expired(&mut self) {
        if !self.session.is_signed_in() {
            return;
        }
        self.finish_logout("Session expired. Sign in again.");
    }
}

fn friendly<T>(result: Result<T, ApiError>) -> Result<T, String> {
    result.map_err(|err| err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::Bill;

    fn make_app(signed_in: bool, consented: bool) -> (App, TestEnv) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = ConfigStore::new(Config::default(), dir.path().join("config.toml"));
        let session = SessionStore::load_or_default(&dir.path().join("session.toml"));
        if signed_in {
            session
                .set_auth("token-1".to_string(), "user123".to_string())
                .expect("persist auth");
        }
        if consented {
            session.set_privacy_accepted(true).expect("persist consent");
        }
        let (tx, rx) = tokio::sync::mpsc::channel(32);
        let app = App::new(config, session, tx);
        (app, TestEnv { rx, _dir: dir })
    }

    struct TestEnv {
        rx: tokio::sync::mpsc::Receiver<ApiRequest>,
        _dir: tempfile::TempDir,
    }

    #[test]
    fn starts_on_login_when_signed_out() {
        let (app, mut env) = make_app(false, true);

        assert_eq!(app.screen(), Screen::Login);
        let request = env.rx.try_recv().expect("captcha fetch queued");
        assert!(matches!(request.call, ApiCall::FetchCaptcha));
    }

    #[test]
    fn starts_on_home_when_signed_in() {
        let (app, mut env) = make_app(true, true);

        assert_eq!(app.screen(), Screen::Home);
        let request = env.rx.try_recv().expect("bill fetch queued");
        assert!(matches!(request.call, ApiCall::FetchBills { .. }));
    }

    #[test]
    fn first_run_opens_the_privacy_consent_page() {
        let (app, _env) = make_app(false, false);

        assert_eq!(
            app.screen(),
            Screen::Agreement {
                kind: AgreementKind::Privacy,
                consent: true,
            }
        );
    }

    #[test]
    fn accepting_consent_returns_and_persists() {
        let (mut app, mut env) = make_app(false, false);

        app.dispatch_agreement(AgreementIntent::Accept);

        assert_eq!(app.screen(), Screen::Login);
        assert!(app.session().privacy_accepted());

        // The captcha queued before the consent page died with its
        // epoch; revealing the login screen must fetch a live one.
        let mut last = None;
        while let Ok(request) = env.rx.try_recv() {
            last = Some(request);
        }
        match last {
            Some(request) => {
                assert!(matches!(request.call, ApiCall::FetchCaptcha));
                assert_eq!(request.epoch, 2);
            }
            None => panic!("Expected a queued captcha fetch"),
        }
    }

    #[test]
    fn login_success_moves_home_and_persists_the_session() {
        let (mut app, _env) = make_app(false, true);

        app.on_api_reply(ApiReply {
            epoch: 0,
            outcome: ApiOutcome::LoggedIn {
                username: "user123".to_string(),
                result: Ok("token-9".to_string()),
            },
        });

        assert_eq!(app.screen(), Screen::Home);
        assert!(app.session().is_signed_in());
        assert_eq!(app.toast(), Some("Signed in"));
    }

    #[test]
    fn stale_replies_are_dropped() {
        let (mut app, _env) = make_app(true, true);
        assert!(app.home().loading);

        app.on_api_reply(ApiReply {
            epoch: 99,
            outcome: ApiOutcome::Bills(Ok(Vec::<Bill>::new())),
        });
        assert!(app.home().loading, "stale reply must not land");

        app.on_api_reply(ApiReply {
            epoch: 0,
            outcome: ApiOutcome::Bills(Ok(Vec::new())),
        });
        assert!(!app.home().loading);
    }

    #[test]
    fn session_expiry_returns_to_login() {
        let (mut app, _env) = make_app(true, true);
        app.navigate(NavRequest::Push(Screen::Settings));

        app.on_session_expired();

        assert_eq!(app.screen(), Screen::Login);
        assert!(!app.session().is_signed_in());
        assert_eq!(app.toast(), Some("Session expired. Sign in again."));
        // Repeats from queued-up failures are ignored.
        app.on_session_expired();
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn back_on_the_root_screen_quits() {
        let (mut app, _env) = make_app(true, true);

        app.navigate(NavRequest::Back);

        assert!(app.should_quit());
    }

    #[test]
    fn pay_type_replies_go_to_the_bill_form_when_it_is_open() {
        let (mut app, _env) = make_app(true, true);
        app.navigate(NavRequest::Push(Screen::BillForm));

        app.on_api_reply(ApiReply {
            epoch: 1,
            outcome: ApiOutcome::PayTypes(Ok(vec![crate::model::PayType {
                id: 1,
                parent_id: 0,
                name: "Food".to_string(),
                kind: crate::model::FlowKind::Expense,
                sort: 0,
            }])),
        });

        assert!(!app.bill_form().loading);
        assert_eq!(app.bill_form().pay_types.len(), 1);
        assert!(app.pay_types().pay_types.is_empty());
    }
}
