use crate::model::{AgreementDoc, AgreementKind};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgreementState {
    pub kind: AgreementKind,
    /// Consent mode: the reader must accept or decline instead of just
    /// leaving.
    pub consent: bool,
    pub doc: Option<AgreementDoc>,
    pub scroll: u16,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for AgreementState {}

impl AgreementState {
    pub fn max_scroll(&self) -> u16 {
        match &self.doc {
            Some(doc) => doc
                .body
                .lines()
                .count()
                .saturating_sub(1)
                .min(u16::MAX as usize) as u16,
            None => 0,
        }
    }
}
