//! Backend trait for title suggestions and idea enhancement.
//!
//! The wizard talks to a [`SuggestionBackend`] so a real generation service can
//! later replace [`MockSuggestionBackend`], which serves canned data after a
//! simulated delay.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::template::{suggestions, SuggestionSet};

use super::enhance::{enhance_idea, EnhancedDetails};
use super::token::GenerationToken;

/// Errors from a generation request
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A newer request or a cancellation invalidated this one
    #[error("Generation {0} was superseded")]
    Superseded(u64),

    /// Nothing to enhance
    #[error("Category idea is empty")]
    EmptyIdea,

    /// Backend could not serve the request
    #[error("Suggestion backend unavailable: {0}")]
    Unavailable(String),
}

/// Source of title suggestions and category enhancements
#[async_trait]
pub trait SuggestionBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Produce up to `count` title suggestions for a category name
    async fn suggest(
        &self,
        category_name: &str,
        count: usize,
        token: &GenerationToken,
    ) -> Result<SuggestionSet, GenerationError>;

    /// Turn a free-text idea into a category title and description
    async fn enhance(
        &self,
        idea: &str,
        token: &GenerationToken,
    ) -> Result<EnhancedDetails, GenerationError>;
}

/// Delays used by the mock backend
#[derive(Debug, Clone)]
pub struct MockBackendConfig {
    pub generation_delay: Duration,
    pub enhance_delay: Duration,
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self {
            generation_delay: Duration::from_millis(1500),
            enhance_delay: Duration::from_millis(1500),
        }
    }
}

/// Canned suggestions and rule-based enhancement behind a fixed delay
pub struct MockSuggestionBackend {
    config: MockBackendConfig,
    rng: Mutex<StdRng>,
}

impl MockSuggestionBackend {
    /// Create a mock backend; a seed makes fallback ordering reproducible
    pub fn new(config: MockBackendConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng: Mutex::new(rng),
        }
    }

    /// Wait out `delay` unless the token is superseded first
    async fn simulate_latency(
        &self,
        delay: Duration,
        token: &GenerationToken,
    ) -> Result<(), GenerationError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(generation = token.id(), "Mock generation superseded");
                Err(GenerationError::Superseded(token.id()))
            }
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

impl Default for MockSuggestionBackend {
    fn default() -> Self {
        Self::new(MockBackendConfig::default(), None)
    }
}

#[async_trait]
impl SuggestionBackend for MockSuggestionBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn suggest(
        &self,
        category_name: &str,
        count: usize,
        token: &GenerationToken,
    ) -> Result<SuggestionSet, GenerationError> {
        self.simulate_latency(self.config.generation_delay, token)
            .await?;

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(suggestions::compose(category_name, count, &mut *rng))
    }

    async fn enhance(
        &self,
        idea: &str,
        token: &GenerationToken,
    ) -> Result<EnhancedDetails, GenerationError> {
        if idea.trim().is_empty() {
            return Err(GenerationError::EmptyIdea);
        }

        self.simulate_latency(self.config.enhance_delay, token)
            .await?;

        enhance_idea(idea).ok_or(GenerationError::EmptyIdea)
    }
}
