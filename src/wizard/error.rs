use thiserror::Error;

use crate::generation::GenerationError;

/// Errors from wizard actions
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Cannot {action} while title template is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Suggestion {index} out of range ({len} available)")]
    SuggestionOutOfRange { index: usize, len: usize },

    #[error("Step {0} does not exist")]
    UnknownStep(usize),

    #[error("Category details must be enhanced before continuing")]
    DetailsNotEnhanced,

    #[error("Title template is invalid: {}", .0.join("; "))]
    InvalidTemplate(Vec<String>),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub type WizardResult<T> = Result<T, WizardError>;
