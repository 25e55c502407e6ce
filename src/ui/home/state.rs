use crate::model::{Bill, Month};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub month: Month,
    pub bills: Vec<Bill>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl UiState for HomeState {}
