// src/config/state.rs
use crate::compare::Comparison;
use crate::data::Selection;

use super::options::AppOptions;

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    /// Sidebar multi-selects
    pub selection: Selection,

    /// Comparison single-selects
    pub stock1: Option<String>,
    pub stock2: Option<String>,

    /// Last "Analyze and Compare" result; cleared when inputs change.
    pub comparison: Option<Result<Comparison, String>>,

    /// Output text field shown in the export bar
    pub out_path_text: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();
        Self {
            options,
            gui: GuiState { out_path_text, ..GuiState::default() },
        }
    }
}
