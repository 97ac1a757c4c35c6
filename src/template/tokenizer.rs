//! Placeholder tokenizer
//!
//! Scans a template for `{...}` spans. A span opens at a `{` and closes at the
//! next `}`; its content must be non-empty and may itself contain `{`, so
//! `{{creator}` is a single span. Positions are byte offsets into the template.

use std::ops::Range;

/// A bracketed span found in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Byte offset of the opening brace
    pub start: usize,
    /// Byte offset one past the closing brace
    pub end: usize,
    /// The span text including both braces
    pub text: &'a str,
}

impl<'a> Span<'a> {
    /// Text between the braces
    pub fn content(&self) -> &'a str {
        &self.text[1..self.text.len() - 1]
    }

    /// Byte range of the span in the template
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the content contains any whitespace
    pub fn has_whitespace(&self) -> bool {
        self.content().chars().any(char::is_whitespace)
    }
}

/// Iterator over the spans of a template, left to right
pub struct Spans<'a> {
    template: &'a str,
    pos: usize,
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = self.template.get(self.pos..)?;
            let open = self.pos + rest.find('{')?;
            let close = open + 1 + self.template[open + 1..].find('}')?;

            if close == open + 1 {
                // `{}` has no content; the closing brace may still end a later span
                self.pos = open + 1;
                continue;
            }

            self.pos = close + 1;
            return Some(Span {
                start: open,
                end: close + 1,
                text: &self.template[open..=close],
            });
        }
    }
}

/// Tokenize a template into its bracketed spans
pub fn spans(template: &str) -> Spans<'_> {
    Spans { template, pos: 0 }
}

/// Count of opening and closing braces
pub fn brace_counts(template: &str) -> (usize, usize) {
    template.chars().fold((0, 0), |(open, close), c| match c {
        '{' => (open + 1, close),
        '}' => (open, close + 1),
        _ => (open, close),
    })
}
