//! The one effect type shared by every screen reducer.

use crate::repo::ApiCall;
use crate::ui::mvi;
use crate::ui::nav::NavRequest;

/// Side effects reducers hand back to the shell.
#[derive(Debug)]
pub enum UiEffect {
    /// Queue a server call; the reply comes back as an intent.
    Api(ApiCall),
    Navigate(NavRequest),
    /// Short status line shown over the footer.
    Toast(String),
    /// Record the privacy consent in the session file.
    AcceptConsent,
    /// Tear down the session and return to sign-in.
    Logout,
    Quit,
}

impl mvi::Effect for UiEffect {}
