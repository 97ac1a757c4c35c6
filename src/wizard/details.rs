//! First-step category details

use serde::Serialize;

use crate::generation::EnhancedDetails;

/// Name, description and the free-text idea they may be derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDetails {
    pub name: String,
    pub description: String,
    pub idea: String,
    enhanced: bool,
}

impl CategoryDetails {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            idea: String::new(),
            enhanced: false,
        }
    }

    /// Whether name and description came from an accepted enhancement
    pub fn is_enhanced(&self) -> bool {
        self.enhanced
    }

    pub fn apply_enhancement(&mut self, details: EnhancedDetails) {
        self.name = details.title;
        self.description = details.description;
        self.enhanced = true;
    }

    /// Go back to editing the idea
    pub fn reset_enhancement(&mut self) {
        self.enhanced = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_reset() {
        let mut details = CategoryDetails::new("Vacation");
        assert!(!details.is_enhanced());

        details.apply_enhancement(EnhancedDetails {
            title: "Vacation Request".to_string(),
            description: "Time off".to_string(),
        });
        assert!(details.is_enhanced());
        assert_eq!(details.name, "Vacation Request");

        details.reset_enhancement();
        assert!(!details.is_enhanced());
        assert_eq!(details.description, "Time off");
    }
}
