//! Create-category wizard.
//!
//! [`CategoryWizard`] ties together the category details step, step
//! navigation and the title-template session, and talks to a
//! [`SuggestionBackend`] for suggestions and idea enhancement.
//!
//! The async helpers (`enhance`, `enable_title_template`,
//! `regenerate_suggestions`) await the backend in place. A UI that must stay
//! responsive instead calls the `begin_*` method, runs the backend request
//! on its own task, and hands the outcome to the matching `complete_*`
//! method; outcomes of superseded requests are dropped there.

mod details;
mod error;
mod session;
mod state;
mod steps;

use std::sync::Arc;

use serde::Serialize;

use crate::config::WizardConfig;
use crate::generation::{
    EnhancedDetails, GenerationError, GenerationToken, GenerationTracker, SuggestionBackend,
};
use crate::template::SuggestionSet;

pub use details::CategoryDetails;
pub use error::{WizardError, WizardResult};
pub use session::TitleTemplateSession;
pub use state::SelectionState;
pub use steps::{WizardStep, WizardSteps, STEPS};

/// What the wizard produces when finished
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    /// Title template, when the feature is on and a template was set
    pub title_template: Option<String>,
}

pub struct CategoryWizard {
    backend: Arc<dyn SuggestionBackend>,
    suggestion_count: usize,
    details: CategoryDetails,
    steps: WizardSteps,
    title: TitleTemplateSession,
    enhancements: GenerationTracker,
}

impl CategoryWizard {
    pub fn new(backend: Arc<dyn SuggestionBackend>, config: &WizardConfig) -> Self {
        Self {
            backend,
            suggestion_count: config.suggestion_count,
            details: CategoryDetails::new(config.default_category.clone()),
            steps: WizardSteps::new(),
            title: TitleTemplateSession::new(),
            enhancements: GenerationTracker::new("enhancement"),
        }
    }

    /// Backend handle for running requests on a separate task
    pub fn backend(&self) -> Arc<dyn SuggestionBackend> {
        Arc::clone(&self.backend)
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestion_count
    }

    pub fn details(&self) -> &CategoryDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut CategoryDetails {
        &mut self.details
    }

    pub fn steps(&self) -> &WizardSteps {
        &self.steps
    }

    pub fn title(&self) -> &TitleTemplateSession {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut TitleTemplateSession {
        &mut self.title
    }

    // Details step

    /// Start enhancing the current idea, superseding any enhancement in flight
    pub fn begin_enhancement(&mut self) -> WizardResult<(String, GenerationToken)> {
        if self.details.idea.trim().is_empty() {
            return Err(GenerationError::EmptyIdea.into());
        }
        Ok((self.details.idea.clone(), self.enhancements.begin()))
    }

    /// Apply an enhancement outcome; `Ok(false)` when it was superseded
    pub fn complete_enhancement(
        &mut self,
        token: &GenerationToken,
        result: Result<EnhancedDetails, GenerationError>,
    ) -> WizardResult<bool> {
        if !self.enhancements.accept(token) {
            return Ok(false);
        }

        let enhanced = result?;
        tracing::info!(title = %enhanced.title, "Category idea enhanced");
        self.details.apply_enhancement(enhanced);
        Ok(true)
    }

    /// Enhance the current idea into a name and description
    pub async fn enhance(&mut self) -> WizardResult<bool> {
        let (idea, token) = self.begin_enhancement()?;
        let result = self.backend.enhance(&idea, &token).await;
        self.complete_enhancement(&token, result)
    }

    /// Drop any enhancement in flight and return to idea editing
    pub fn reset_enhancement(&mut self) {
        self.enhancements.cancel();
        self.details.reset_enhancement();
    }

    // Title template

    /// Switch the title template on and wait for the first suggestions
    pub async fn enable_title_template(&mut self) -> WizardResult<bool> {
        let token = self.title.enable()?;
        Ok(self.fetch_suggestions(token).await)
    }

    /// Replace the displayed suggestions with a fresh set
    pub async fn regenerate_suggestions(&mut self) -> WizardResult<bool> {
        let token = self.title.regenerate()?;
        Ok(self.fetch_suggestions(token).await)
    }

    pub fn disable_title_template(&mut self) {
        self.title.disable();
    }

    async fn fetch_suggestions(&mut self, token: GenerationToken) -> bool {
        let result = self
            .backend
            .suggest(&self.details.name, self.suggestion_count, &token)
            .await;
        self.title.complete_generation(&token, result)
    }

    /// Request suggestions for the current name on behalf of a detached task
    pub async fn request_suggestions(
        backend: Arc<dyn SuggestionBackend>,
        category_name: String,
        count: usize,
        token: GenerationToken,
    ) -> (GenerationToken, Result<SuggestionSet, GenerationError>) {
        let result = backend.suggest(&category_name, count, &token).await;
        (token, result)
    }

    // Navigation

    /// Advance one step. Leaving the details step requires an enhanced idea.
    pub fn next_step(&mut self) -> WizardResult<bool> {
        if self.steps.is_first() && !self.details.is_enhanced() {
            return Err(WizardError::DetailsNotEnhanced);
        }
        Ok(self.steps.next())
    }

    pub fn previous_step(&mut self) -> bool {
        self.steps.previous()
    }

    pub fn go_to_step(&mut self, index: usize) -> WizardResult<()> {
        self.steps.go_to(index)
    }

    /// Finish the wizard, rejecting an invalid title template
    pub fn finish(&self) -> WizardResult<CategoryDraft> {
        let title_template = if self.title.is_enabled() && !self.title.value().is_empty() {
            if !self.title.report().is_valid() {
                return Err(WizardError::InvalidTemplate(self.title.errors()));
            }
            Some(self.title.value().to_string())
        } else {
            None
        };

        tracing::info!(
            name = %self.details.name,
            has_title_template = title_template.is_some(),
            "Category wizard finished"
        );

        Ok(CategoryDraft {
            name: self.details.name.clone(),
            description: self.details.description.clone(),
            title_template,
        })
    }
}
