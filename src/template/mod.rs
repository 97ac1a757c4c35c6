//! Title template engine.
//!
//! This module provides:
//! - A fixed registry of `{placeholder}` variables ([`variables`])
//! - A tokenizer yielding positioned `{...}` spans ([`tokenizer`])
//! - Validation that reports problems as data ([`validate`])
//! - Live preview rendering with canned values ([`render`])
//! - A curated template library matched by category name ([`match_by_category`])
//! - Suggestion composition with shuffled generic fallbacks ([`compose`])
//!
//! # Example
//!
//! ```
//! use category_wizard::template::{render, validate};
//!
//! let template = "{creator} vacation request ({field.start} - {field.end})";
//! assert!(validate(template).is_valid());
//! assert_eq!(
//!     render(template),
//!     "John Doe vacation request (Dec 15 - Dec 20, 2024)"
//! );
//! ```

pub mod library;
pub mod preview;
pub mod suggestions;
pub mod tokenizer;
pub mod validator;
pub mod variables;

pub use library::{match_by_category, TitleTemplateEntry};
pub use preview::render;
pub use suggestions::{
    compose, FallbackTemplate, Suggestion, SuggestionOrigin, SuggestionSet,
    DEFAULT_SUGGESTION_COUNT,
};
pub use tokenizer::Span;
pub use validator::{validate, TemplateIssue, ValidationReport};
pub use variables::{list_variables, Variable};
