//! Title template validation
//!
//! Problems with a template are reported as data, never as an `Err`: an empty
//! [`ValidationReport`] is the valid state.

use std::collections::HashSet;
use std::ops::Range;

use thiserror::Error;

use super::tokenizer::{brace_counts, spans};
use super::variables;

/// A single problem found in a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateIssue {
    #[error("Unclosed braces: All {{ }} must be properly closed")]
    UnbalancedBraces { open: usize, close: usize },

    #[error("\"{token}\" is not a valid variable")]
    UnknownVariable { token: String, span: Range<usize> },

    #[error("Invalid variable format: \"{token}\" (variables cannot contain spaces)")]
    InvalidFormat { token: String, span: Range<usize> },
}

impl TemplateIssue {
    /// Byte range of the offending token, if the issue is tied to one
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            TemplateIssue::UnbalancedBraces { .. } => None,
            TemplateIssue::UnknownVariable { span, .. }
            | TemplateIssue::InvalidFormat { span, .. } => Some(span.clone()),
        }
    }
}

/// Ordered list of issues found in a template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<TemplateIssue>,
}

impl ValidationReport {
    /// True when no issues were found
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[TemplateIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human-readable error strings in report order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Validate a title template against the variable registry.
///
/// Issues come out in a fixed order: the brace-balance issue first, then
/// unknown variables left to right, then whitespace-format issues left to
/// right. An empty template is valid.
pub fn validate(template: &str) -> ValidationReport {
    let mut issues = Vec::new();

    if template.is_empty() {
        return ValidationReport { issues };
    }

    let (open, close) = brace_counts(template);
    if open != close {
        issues.push(TemplateIssue::UnbalancedBraces { open, close });
    }

    let found: Vec<_> = spans(template).collect();

    for span in &found {
        if !variables::is_known(span.text) {
            issues.push(TemplateIssue::UnknownVariable {
                token: span.text.to_string(),
                span: span.range(),
            });
        }
    }

    let mut reported = HashSet::new();
    for span in found.iter().filter(|s| s.has_whitespace()) {
        if reported.insert(span.text) {
            issues.push(TemplateIssue::InvalidFormat {
                token: span.text.to_string(),
                span: span.range(),
            });
        }
    }

    if !issues.is_empty() {
        tracing::trace!(template, issue_count = issues.len(), "Template has issues");
    }

    ValidationReport { issues }
}
