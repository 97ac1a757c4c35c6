//! Suggestion backend factory

use std::sync::Arc;
use std::time::Duration;

use crate::config::WizardConfig;

use super::backend::{MockBackendConfig, MockSuggestionBackend, SuggestionBackend};

/// Create a suggestion backend based on configuration.
///
/// `"mock"` is the only backend today; any other value logs a warning and
/// falls back to it.
///
/// # Example
///
/// ```rust,ignore
/// let backend = create_suggestion_backend(&settings.wizard);
/// ```
pub fn create_suggestion_backend(settings: &WizardConfig) -> Arc<dyn SuggestionBackend> {
    let config = MockBackendConfig {
        generation_delay: Duration::from_millis(settings.generation_delay_ms),
        enhance_delay: Duration::from_millis(settings.enhance_delay_ms),
    };

    match settings.backend.as_str() {
        "mock" => {
            tracing::info!(
                backend = "mock",
                generation_delay_ms = settings.generation_delay_ms,
                seeded = settings.rng_seed.is_some(),
                "Creating mock suggestion backend"
            );
        }
        other => {
            tracing::warn!(
                requested = %other,
                "Unknown suggestion backend requested, falling back to mock"
            );
        }
    }

    Arc::new(MockSuggestionBackend::new(config, settings.rng_seed))
}
