//! Title-template session: selection state, current template value and its
//! validation, driven by suggestion generations that may be superseded.

use crate::generation::{
    GenerationError, GenerationStatsSnapshot, GenerationToken, GenerationTracker,
};
use crate::template::{render, validate, Suggestion, SuggestionSet, ValidationReport, Variable};

use super::error::{WizardError, WizardResult};
use super::state::SelectionState;

/// State of the "auto-generate title" feature for one wizard
#[derive(Debug)]
pub struct TitleTemplateSession {
    state: SelectionState,
    suggestions: SuggestionSet,
    value: String,
    report: ValidationReport,
    generations: GenerationTracker,
}

impl Default for TitleTemplateSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleTemplateSession {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Disabled,
            suggestions: SuggestionSet::default(),
            value: String::new(),
            report: ValidationReport::default(),
            generations: GenerationTracker::new("title_suggestions"),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    /// The chosen suggestion, if any
    pub fn selected(&self) -> Option<&Suggestion> {
        self.state
            .selected_index()
            .and_then(|index| self.suggestions.get(index))
    }

    /// Current template text
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Validation messages for the current value
    pub fn errors(&self) -> Vec<String> {
        self.report.messages()
    }

    /// Live preview of the current value
    pub fn preview(&self) -> String {
        render(&self.value)
    }

    pub fn generation_stats(&self) -> GenerationStatsSnapshot {
        self.generations.stats()
    }

    /// Switch the feature on and start generating suggestions.
    ///
    /// The first suggestion is selected automatically when the generation
    /// completes.
    pub fn enable(&mut self) -> WizardResult<GenerationToken> {
        if self.state.is_enabled() {
            return Err(self.invalid("enable"));
        }

        self.value.clear();
        self.report = ValidationReport::default();
        self.state = SelectionState::Generating { auto_select: true };

        tracing::info!("Title template enabled");
        Ok(self.generations.begin())
    }

    /// Switch the feature off from any state, discarding selection and any
    /// generation in flight.
    pub fn disable(&mut self) {
        if matches!(self.state, SelectionState::Generating { .. }) {
            self.generations.cancel();
        }

        self.state = SelectionState::Disabled;
        self.value.clear();
        self.report = ValidationReport::default();

        tracing::info!("Title template disabled");
    }

    /// Flip the feature; returns a token when it was switched on
    pub fn toggle(&mut self) -> Option<GenerationToken> {
        if self.state.is_enabled() {
            self.disable();
            None
        } else {
            self.enable().ok()
        }
    }

    /// Ask for a fresh set of suggestions, superseding any in flight.
    ///
    /// A request that replaces the one started by `enable` keeps its
    /// auto-selection.
    pub fn regenerate(&mut self) -> WizardResult<GenerationToken> {
        match self.state {
            SelectionState::Generating { auto_select } => {
                self.state = SelectionState::Generating { auto_select };
                Ok(self.generations.begin())
            }
            SelectionState::Suggested | SelectionState::Selected { .. } => {
                self.state = SelectionState::Generating { auto_select: false };
                Ok(self.generations.begin())
            }
            _ => Err(self.invalid("regenerate suggestions")),
        }
    }

    /// Apply the outcome of a generation.
    ///
    /// Returns `false` and leaves the session untouched when `token` has been
    /// superseded or cancelled.
    pub fn complete_generation(
        &mut self,
        token: &GenerationToken,
        result: Result<SuggestionSet, GenerationError>,
    ) -> bool {
        let SelectionState::Generating { auto_select } = self.state else {
            if token.id() == self.generations.current() {
                tracing::warn!(
                    state = self.state.name(),
                    "Generation completed outside generating state"
                );
            }
            self.generations.discard(token);
            return false;
        };

        if !self.generations.accept(token) {
            return false;
        }

        match result {
            Ok(suggestions) => {
                tracing::info!(
                    generation = token.id(),
                    count = suggestions.len(),
                    "Title suggestions ready"
                );
                self.suggestions = suggestions;
            }
            Err(e) => {
                tracing::warn!(generation = token.id(), error = %e, "Title suggestion generation failed");
                self.suggestions = SuggestionSet::default();
            }
        }

        self.state = SelectionState::Suggested;
        if auto_select && !self.suggestions.is_empty() {
            self.apply_selection(0);
        }
        true
    }

    /// Choose one of the displayed suggestions
    pub fn select(&mut self, index: usize) -> WizardResult<()> {
        if !self.state.shows_suggestions() {
            return Err(self.invalid("select a suggestion"));
        }
        if index >= self.suggestions.len() {
            return Err(WizardError::SuggestionOutOfRange {
                index,
                len: self.suggestions.len(),
            });
        }

        self.apply_selection(index);
        Ok(())
    }

    /// Leave the suggestions and start from an empty template
    pub fn customize_manually(&mut self) -> WizardResult<()> {
        if !self.state.shows_suggestions() {
            return Err(self.invalid("customize manually"));
        }

        self.state = SelectionState::Manual;
        self.value.clear();
        self.report = ValidationReport::default();
        Ok(())
    }

    /// Edit the chosen suggestion by hand
    pub fn edit_selected(&mut self) -> WizardResult<()> {
        let Some(suggestion) = self.selected().copied() else {
            return Err(self.invalid("edit the selection"));
        };
        let from = self.state.selected_index().unwrap_or_default();

        self.state = SelectionState::EditingManual { from };
        self.set_value(suggestion.template.to_string());
        Ok(())
    }

    /// Replace the template text while editing manually
    pub fn set_template(&mut self, value: impl Into<String>) -> WizardResult<()> {
        if !self.state.is_manual() {
            return Err(self.invalid("edit the template"));
        }

        self.set_value(value.into());
        Ok(())
    }

    /// Insert a variable at a character position, returning the new cursor
    /// position just after the inserted token.
    pub fn insert_variable(&mut self, cursor: usize, variable: &Variable) -> WizardResult<usize> {
        if !self.state.is_manual() {
            return Err(self.invalid("insert a variable"));
        }

        let byte_index = self
            .value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len());
        let cursor = self.value[..byte_index].chars().count();

        let mut value = self.value.clone();
        value.insert_str(byte_index, variable.name);
        self.set_value(value);

        Ok(cursor + variable.name.chars().count())
    }

    fn apply_selection(&mut self, index: usize) {
        if let Some(suggestion) = self.suggestions.get(index).copied() {
            self.state = SelectionState::Selected { index };
            self.set_value(suggestion.template.to_string());
        }
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.report = if self.state.is_enabled() && !self.value.is_empty() {
            validate(&self.value)
        } else {
            ValidationReport::default()
        };
    }

    fn invalid(&self, action: &'static str) -> WizardError {
        WizardError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{compose, variables};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn vacation_suggestions() -> SuggestionSet {
        compose("Vacation", 3, &mut StdRng::seed_from_u64(11))
    }

    fn enabled_session() -> TitleTemplateSession {
        let mut session = TitleTemplateSession::new();
        let token = session.enable().unwrap();
        assert!(session.complete_generation(&token, Ok(vacation_suggestions())));
        session
    }

    #[test]
    fn test_enable_auto_selects_first_suggestion() {
        let session = enabled_session();

        assert_eq!(session.state(), SelectionState::Selected { index: 0 });
        assert_eq!(
            session.value(),
            "{creator} vacation request ({field.start} - {field.end})"
        );
        assert!(session.report().is_valid());
        assert_eq!(
            session.preview(),
            "John Doe vacation request (Dec 15 - Dec 20, 2024)"
        );
    }

    #[test]
    fn test_enable_with_no_results_stays_suggested() {
        let mut session = TitleTemplateSession::new();
        let token = session.enable().unwrap();
        session.complete_generation(&token, Ok(SuggestionSet::default()));

        assert_eq!(session.state(), SelectionState::Suggested);
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_failed_generation_lands_in_suggested() {
        let mut session = TitleTemplateSession::new();
        let token = session.enable().unwrap();
        let applied = session.complete_generation(
            &token,
            Err(GenerationError::Unavailable("offline".to_string())),
        );

        assert!(applied);
        assert_eq!(session.state(), SelectionState::Suggested);
        assert!(session.suggestions().is_empty());
    }

    #[test]
    fn test_enable_twice_is_rejected() {
        let mut session = enabled_session();
        assert!(matches!(
            session.enable(),
            Err(WizardError::InvalidTransition { state: "selected", .. })
        ));
    }

    #[test]
    fn test_disable_mid_generation_discards_completion() {
        let mut session = TitleTemplateSession::new();
        let token = session.enable().unwrap();
        session.disable();

        assert!(!session.complete_generation(&token, Ok(vacation_suggestions())));
        assert_eq!(session.state(), SelectionState::Disabled);
        assert!(session.value().is_empty());
        assert_eq!(session.generation_stats().discarded, 1);
    }

    #[test]
    fn test_reenable_ignores_earlier_generation() {
        let mut session = TitleTemplateSession::new();
        let stale = session.enable().unwrap();
        session.disable();
        let fresh = session.enable().unwrap();

        assert!(!session.complete_generation(&stale, Ok(vacation_suggestions())));
        assert_eq!(session.state(), SelectionState::Generating { auto_select: true });

        assert!(session.complete_generation(&fresh, Ok(vacation_suggestions())));
        assert_eq!(session.state(), SelectionState::Selected { index: 0 });
    }

    #[test]
    fn test_regenerate_clears_selection() {
        let mut session = enabled_session();
        let token = session.regenerate().unwrap();
        assert_eq!(session.state(), SelectionState::Generating { auto_select: false });

        session.complete_generation(&token, Ok(vacation_suggestions()));
        assert_eq!(session.state(), SelectionState::Suggested);
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_regenerate_during_enable_keeps_auto_select() {
        let mut session = TitleTemplateSession::new();
        let first = session.enable().unwrap();
        let second = session.regenerate().unwrap();
        assert_eq!(session.state(), SelectionState::Generating { auto_select: true });

        assert!(!session.complete_generation(&first, Ok(vacation_suggestions())));
        assert!(session.complete_generation(&second, Ok(vacation_suggestions())));
        assert_eq!(session.state(), SelectionState::Selected { index: 0 });
    }

    #[test]
    fn test_repeated_completion_is_not_counted_as_applied() {
        let mut session = TitleTemplateSession::new();
        let token = session.enable().unwrap();
        assert!(session.complete_generation(&token, Ok(vacation_suggestions())));
        assert!(!session.complete_generation(&token, Ok(SuggestionSet::default())));

        assert_eq!(session.state(), SelectionState::Selected { index: 0 });
        assert_eq!(session.suggestions().len(), 3);

        let stats = session.generation_stats();
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.discarded, 1);
    }

    #[test]
    fn test_select_and_out_of_range() {
        let mut session = enabled_session();
        session.select(2).unwrap();
        assert_eq!(session.state(), SelectionState::Selected { index: 2 });
        assert_eq!(session.value(), session.suggestions().get(2).unwrap().template);

        assert!(matches!(
            session.select(3),
            Err(WizardError::SuggestionOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_customize_manually_starts_empty() {
        let mut session = enabled_session();
        session.customize_manually().unwrap();

        assert_eq!(session.state(), SelectionState::Manual);
        assert!(session.value().is_empty());
        assert!(session.report().is_valid());
    }

    #[test]
    fn test_edit_selected_seeds_value() {
        let mut session = enabled_session();
        session.select(1).unwrap();
        let chosen = session.value().to_string();

        session.edit_selected().unwrap();
        assert_eq!(session.state(), SelectionState::EditingManual { from: 1 });
        assert_eq!(session.value(), chosen);
    }

    #[test]
    fn test_edit_requires_selection() {
        let mut session = TitleTemplateSession::new();
        assert!(session.edit_selected().is_err());
        assert!(session.set_template("{creator}").is_err());
    }

    #[test]
    fn test_manual_edits_are_validated() {
        let mut session = enabled_session();
        session.customize_manually().unwrap();

        session.set_template("{creator} {bogus").unwrap();
        assert_eq!(session.errors().len(), 1);

        session.set_template("{creator} {bogus}").unwrap();
        assert_eq!(session.errors(), vec!["\"{bogus}\" is not a valid variable"]);

        session.set_template("").unwrap();
        assert!(session.report().is_valid());
    }

    #[test]
    fn test_insert_variable_at_cursor() {
        let mut session = enabled_session();
        session.customize_manually().unwrap();
        session.set_template("Request by ").unwrap();

        let creator = variables::lookup("{creator}").unwrap();
        let cursor = session.insert_variable(11, creator).unwrap();
        assert_eq!(session.value(), "Request by {creator}");
        assert_eq!(cursor, 20);

        let org = variables::lookup("{organization}").unwrap();
        let cursor = session.insert_variable(0, org).unwrap();
        assert_eq!(session.value(), "{organization}Request by {creator}");
        assert_eq!(cursor, 14);

        // past the end appends
        session.insert_variable(500, creator).unwrap();
        assert!(session.value().ends_with("{creator}{creator}"));
        assert!(session.report().is_valid());
    }

    #[test]
    fn test_disable_from_manual_clears_everything() {
        let mut session = enabled_session();
        session.customize_manually().unwrap();
        session.set_template("{nope}").unwrap();

        session.disable();
        assert_eq!(session.state(), SelectionState::Disabled);
        assert!(session.value().is_empty());
        assert!(session.report().is_valid());
    }

    #[test]
    fn test_toggle() {
        let mut session = TitleTemplateSession::new();
        assert!(session.toggle().is_some());
        assert!(session.is_enabled());
        assert!(session.toggle().is_none());
        assert!(!session.is_enabled());
    }
}
