use thiserror::Error;

use crate::generation::GenerationError;
use crate::telemetry::TelemetryError;
use crate::wizard::WizardError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Stable code for log lines
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Telemetry(_) => "TELEMETRY_ERROR",
            AppError::Generation(GenerationError::Superseded(_)) => "SUPERSEDED",
            AppError::Generation(_) => "GENERATION_ERROR",
            AppError::Wizard(_) => "WIZARD_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
