//! Title-template selection states

use serde::Serialize;

/// Where the title-template feature is in its selection workflow.
///
/// ```text
/// disabled -> generating -> suggested -> selected -> editing-manual
///                                     \-> manual
/// ```
/// Disabling returns to `Disabled` from any state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    /// Feature switched off
    #[default]
    Disabled,
    /// Waiting for suggestions; `auto_select` picks the first on arrival
    Generating { auto_select: bool },
    /// Suggestions shown, none chosen
    Suggested,
    /// A suggestion is chosen
    Selected { index: usize },
    /// Editing a copy of the chosen suggestion by hand
    EditingManual { from: usize },
    /// Writing a template from scratch
    Manual,
}

impl SelectionState {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SelectionState::Disabled)
    }

    /// Whether the template text is editable directly
    pub fn is_manual(&self) -> bool {
        matches!(
            self,
            SelectionState::Manual | SelectionState::EditingManual { .. }
        )
    }

    /// Whether suggestions are on screen for choosing
    pub fn shows_suggestions(&self) -> bool {
        matches!(
            self,
            SelectionState::Suggested | SelectionState::Selected { .. }
        )
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            SelectionState::Selected { index } => Some(*index),
            _ => None,
        }
    }

    /// Short name for logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            SelectionState::Disabled => "disabled",
            SelectionState::Generating { .. } => "generating",
            SelectionState::Suggested => "suggested",
            SelectionState::Selected { .. } => "selected",
            SelectionState::EditingManual { .. } => "editing-manual",
            SelectionState::Manual => "manual",
        }
    }
}
