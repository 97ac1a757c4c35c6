// Supporting modules
pub mod config;
pub mod error;
pub mod telemetry;

// Domain layer
pub mod generation;
pub mod template;

// Application layer
pub mod wizard;

pub use error::{AppError, Result};
