//! Simulated "enhance with AI" for a free-text category idea

use serde::Serialize;

const TITLE_WORDS: usize = 3;
const VACATION_KEYWORD: &str = "vacation";
const VACATION_TITLE: &str = "Vacation Request";

/// Category name and description derived from an idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnhancedDetails {
    pub title: String,
    pub description: String,
}

/// Split a free-text idea into a title and a description.
///
/// A `-` separates title from description; without one the first three
/// space-separated words form the title. Returns `None` for a blank idea.
pub fn enhance_idea(idea: &str) -> Option<EnhancedDetails> {
    if idea.trim().is_empty() {
        return None;
    }

    let (mut title, description) = match idea.split_once('-') {
        Some((head, tail)) => (head.trim().to_string(), tail.trim().to_string()),
        None => {
            let words: Vec<&str> = idea.split(' ').collect();
            let title = words[..words.len().min(TITLE_WORDS)].join(" ");
            let description = if words.len() > TITLE_WORDS {
                words[TITLE_WORDS..].join(" ")
            } else {
                String::new()
            };
            (title, description)
        }
    };

    if title.to_lowercase().contains(VACATION_KEYWORD) {
        title = VACATION_TITLE.to_string();
    }

    let description = if description.is_empty() {
        idea.to_string()
    } else {
        description
    };

    Some(EnhancedDetails { title, description })
}
