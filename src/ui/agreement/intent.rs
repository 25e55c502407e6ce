use crate::model::{AgreementDoc, AgreementKind};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AgreementIntent {
    Enter { kind: AgreementKind, consent: bool },
    Loaded(Result<AgreementDoc, String>),
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    /// Consent mode only.
    Accept,
    Decline,
}

impl Intent for AgreementIntent {}
