//! Suggestion composition: library matches topped up with generic fallbacks

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::library::{self, TitleTemplateEntry};

/// Default number of suggestions shown to the user
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// A generic, category-agnostic title template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FallbackTemplate {
    pub template: &'static str,
    pub description: &'static str,
}

const FALLBACK_POOL: &[FallbackTemplate] = &[
    FallbackTemplate {
        template: "{creator} vacation / time off request",
        description: "Combines creator with vacation request type for clear context",
    },
    FallbackTemplate {
        template: "Vacation Request - {creator} ({field.start} - {field.end})",
        description: "Formal vacation request format with creator and date range",
    },
    FallbackTemplate {
        template: "Time Off: {creator} | {field.start} - {field.end}, 2024",
        description: "Alternative format with creator and date range",
    },
    FallbackTemplate {
        template: "{creator} vacation / time off request {field.start} {field.end}",
        description: "Combines creator, request type, and date range for comprehensive context",
    },
    FallbackTemplate {
        template: "{creator} Vacation Request {field.start} to {field.end}",
        description: "Formal vacation request format with date range",
    },
    FallbackTemplate {
        template: "{organization} - {creator} Time Off {field.start} {field.end}",
        description: "Focus on organization and creator for team context",
    },
    FallbackTemplate {
        template: "{creator} Time Off Request ({field.start} - {field.end})",
        description: "Alternative format with parentheses for date range",
    },
];

/// The generic fallback pool in declaration order
pub fn fallback_pool() -> &'static [FallbackTemplate] {
    FALLBACK_POOL
}

/// Where a suggestion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SuggestionOrigin {
    /// Curated library entry for a matching category
    Library { id: &'static str },
    /// Generic fallback template
    Fallback,
}

/// A title template offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub template: &'static str,
    pub description: &'static str,
    pub origin: SuggestionOrigin,
}

impl Suggestion {
    pub fn is_library(&self) -> bool {
        matches!(self.origin, SuggestionOrigin::Library { .. })
    }
}

impl From<&'static TitleTemplateEntry> for Suggestion {
    fn from(entry: &'static TitleTemplateEntry) -> Self {
        Self {
            template: entry.template,
            description: entry.description,
            origin: SuggestionOrigin::Library { id: entry.id },
        }
    }
}

impl From<&'static FallbackTemplate> for Suggestion {
    fn from(fallback: &'static FallbackTemplate) -> Self {
        Self {
            template: fallback.template,
            description: fallback.description,
            origin: SuggestionOrigin::Fallback,
        }
    }
}

/// Ordered set of suggestions for one category name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SuggestionSet {
    suggestions: Vec<Suggestion>,
}

impl SuggestionSet {
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.suggestions.get(index)
    }

    pub fn first(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.suggestions.iter()
    }

    pub fn as_slice(&self) -> &[Suggestion] {
        &self.suggestions
    }
}

impl<'a> IntoIterator for &'a SuggestionSet {
    type Item = &'a Suggestion;
    type IntoIter = std::slice::Iter<'a, Suggestion>;

    fn into_iter(self) -> Self::IntoIter {
        self.suggestions.iter()
    }
}

/// Compose up to `target_count` suggestions for a category name.
///
/// Library matches come first in catalog order. Remaining slots are filled
/// from the fallback pool in an order drawn from `rng`, skipping any fallback
/// whose template equals a library template already chosen.
pub fn compose<R: Rng + ?Sized>(
    category_name: &str,
    target_count: usize,
    rng: &mut R,
) -> SuggestionSet {
    let matches = library::match_by_category(category_name);
    let set = compose_from(&matches, FALLBACK_POOL, target_count, rng);

    tracing::debug!(
        category = %category_name,
        library = matches.len().min(target_count),
        total = set.len(),
        "Composed title suggestions"
    );

    set
}

fn compose_from<R: Rng + ?Sized>(
    matches: &[&'static TitleTemplateEntry],
    pool: &'static [FallbackTemplate],
    target_count: usize,
    rng: &mut R,
) -> SuggestionSet {
    let mut suggestions: Vec<Suggestion> =
        matches.iter().copied().map(Suggestion::from).collect();

    if suggestions.len() < target_count {
        let taken: HashSet<&str> = suggestions.iter().map(|s| s.template).collect();

        let mut candidates: Vec<&'static FallbackTemplate> = pool
            .iter()
            .filter(|f| !taken.contains(f.template))
            .collect();
        candidates.shuffle(rng);

        let needed = target_count - suggestions.len();
        suggestions.extend(candidates.into_iter().take(needed).map(Suggestion::from));
    }

    suggestions.truncate(target_count);
    SuggestionSet { suggestions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_vacation_fills_to_three_with_library_first() {
        for seed in 0..20 {
            let set = compose("Vacation", 3, &mut seeded(seed));
            assert_eq!(set.len(), 3);
            assert_eq!(
                set.first().unwrap().origin,
                SuggestionOrigin::Library { id: "hr-vacation" }
            );
            assert!(set.iter().skip(1).all(|s| !s.is_library()));
        }
    }

    #[test]
    fn test_same_seed_same_order() {
        let a = compose("Unrelated", 3, &mut seeded(42));
        let b = compose("Unrelated", 3, &mut seeded(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unmatched_category_uses_fallbacks_only() {
        let set = compose("Completely Unrelated Topic", 3, &mut seeded(7));
        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|s| s.origin == SuggestionOrigin::Fallback));

        let mut templates: Vec<_> = set.iter().map(|s| s.template).collect();
        templates.sort();
        templates.dedup();
        assert_eq!(templates.len(), 3);
    }

    #[test]
    fn test_library_matches_truncated_to_target() {
        // "on" matches three library entries
        let set = compose("on", 2, &mut seeded(1));
        assert_eq!(set.len(), 2);
        assert!(set.iter().all(Suggestion::is_library));
    }

    #[test]
    fn test_target_larger_than_pool_exhausts_pool() {
        let set = compose("Completely Unrelated Topic", 50, &mut seeded(3));
        assert_eq!(set.len(), fallback_pool().len());
    }

    #[test]
    fn test_zero_target_is_empty() {
        assert!(compose("Vacation", 0, &mut seeded(0)).is_empty());
    }

    #[test]
    fn test_fallback_identical_to_library_template_is_excluded() {
        let set = compose("Vacation", 10, &mut seeded(9));
        assert_eq!(set.len(), 1 + fallback_pool().len());

        let library_templates: Vec<_> = set
            .iter()
            .filter(|s| s.is_library())
            .map(|s| s.template)
            .collect();
        let duplicated = set
            .iter()
            .filter(|s| !s.is_library())
            .any(|s| library_templates.contains(&s.template));
        assert!(!duplicated);
    }

    #[test]
    fn test_fallback_matching_library_template_is_skipped() {
        static POOL: &[FallbackTemplate] = &[
            FallbackTemplate {
                template: "{creator} vacation request ({field.start} - {field.end})",
                description: "Same text as the vacation library entry",
            },
            FallbackTemplate {
                template: "{creator} away {field.start}",
                description: "Short form",
            },
            FallbackTemplate {
                template: "Leave: {creator}",
                description: "Minimal",
            },
        ];
        let matches = library::match_by_category("Vacation");
        assert_eq!(matches[0].template, POOL[0].template);

        for seed in 0..20 {
            let set = compose_from(&matches, POOL, 3, &mut seeded(seed));
            assert_eq!(set.len(), 3);
            assert!(set.first().unwrap().is_library());
            assert!(set
                .iter()
                .skip(1)
                .all(|s| s.template != POOL[0].template));
        }

        // with room for everything the duplicate is still left out
        let set = compose_from(&matches, POOL, 10, &mut seeded(0));
        assert_eq!(set.len(), 3);
    }
}
