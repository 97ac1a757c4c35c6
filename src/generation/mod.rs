//! Simulated AI generation with supersedable requests

mod backend;
mod enhance;
mod factory;
mod token;

pub use backend::{
    GenerationError, MockBackendConfig, MockSuggestionBackend, SuggestionBackend,
};
pub use enhance::{enhance_idea, EnhancedDetails};
pub use factory::create_suggestion_backend;
pub use token::{GenerationStatsSnapshot, GenerationToken, GenerationTracker};
