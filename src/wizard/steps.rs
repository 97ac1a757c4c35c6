//! Wizard step sequence and navigation

use std::collections::BTreeSet;

use serde::Serialize;

use super::error::{WizardError, WizardResult};

/// One page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardStep {
    /// 1-based display number
    pub number: usize,
    pub label: &'static str,
    pub key: &'static str,
}

pub const STEPS: &[WizardStep] = &[
    WizardStep {
        number: 1,
        label: "Category details",
        key: "details",
    },
    WizardStep {
        number: 2,
        label: "Select category capsules",
        key: "capsules",
    },
    WizardStep {
        number: 3,
        label: "Set up custom fields",
        key: "custom",
    },
    WizardStep {
        number: 4,
        label: "Select a workflow",
        key: "workflow",
    },
];

/// Current step and the steps visited so far
#[derive(Debug, Clone)]
pub struct WizardSteps {
    current: usize,
    visited: BTreeSet<usize>,
}

impl Default for WizardSteps {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSteps {
    pub fn new() -> Self {
        Self {
            current: 0,
            visited: BTreeSet::from([0]),
        }
    }

    /// Index of the current step
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static WizardStep {
        &STEPS[self.current]
    }

    pub fn is_visited(&self, index: usize) -> bool {
        self.visited.contains(&index)
    }

    pub fn visited(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited.iter().copied()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current == STEPS.len() - 1
    }

    /// Index of a step by key
    pub fn index_of(key: &str) -> Option<usize> {
        STEPS.iter().position(|s| s.key == key)
    }

    /// Jump to any step
    pub fn go_to(&mut self, index: usize) -> WizardResult<()> {
        if index >= STEPS.len() {
            return Err(WizardError::UnknownStep(index));
        }

        self.current = index;
        self.visited.insert(index);
        tracing::debug!(step = STEPS[index].key, "Moved to wizard step");
        Ok(())
    }

    /// Advance one step; returns false on the last step
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.go_to(self.current + 1).is_ok()
    }

    /// Go back one step; returns false on the first step
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }
}
