//! Variable registry: the fixed catalog of placeholders a title template may use

use serde::Serialize;

/// Group name for built-in record fields
pub const SYSTEM_FIELDS: &str = "System Fields";

/// Group name for category-specific custom fields
pub const CUSTOM_FIELDS: &str = "Custom Fields";

/// A placeholder that can appear in a title template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variable {
    /// Bracketed token, e.g. `{creator}`
    pub name: &'static str,

    /// Example shown next to the variable in the picker
    pub example: &'static str,

    /// Value substituted when rendering a live preview
    pub preview: &'static str,
}

impl Variable {
    const fn new(name: &'static str, example: &'static str, preview: &'static str) -> Self {
        Self {
            name,
            example,
            preview,
        }
    }

    /// Identifier without the surrounding braces
    pub fn identifier(&self) -> &'static str {
        self.name.trim_start_matches('{').trim_end_matches('}')
    }
}

const SYSTEM: &[Variable] = &[
    Variable::new("{name}", "Category Name", "Vacation"),
    Variable::new("{creator}", "John Doe", "John Doe"),
    Variable::new("{organization}", "Сresset", "Cresset"),
    Variable::new("{due_date}", "03/15/2024", "03/15/2024"),
    Variable::new("{created_date}", "01/20/2024", "01/20/2024"),
    Variable::new("{freeform}", "User-entered text", "User-entered text"),
];

const CUSTOM: &[Variable] = &[
    Variable::new("{field.start}", "01/15/2024", "Dec 15"),
    Variable::new("{field.end}", "01/20/2024", "Dec 20"),
    Variable::new("{field.project_name}", "Summer Vacation", "Summer Vacation"),
    Variable::new("{field.budget}", "$50,000", "$50,000"),
    Variable::new("{field.location}", "Building A", "Building A"),
];

const GROUPS: &[(&str, &[Variable])] = &[(SYSTEM_FIELDS, SYSTEM), (CUSTOM_FIELDS, CUSTOM)];

/// All variable groups in display order
pub fn list_variables() -> &'static [(&'static str, &'static [Variable])] {
    GROUPS
}

/// Iterate every registered variable, system fields first
pub fn all_variables() -> impl Iterator<Item = &'static Variable> {
    GROUPS.iter().flat_map(|(_, vars)| vars.iter())
}

/// Find a variable by its exact bracketed token
pub fn lookup(token: &str) -> Option<&'static Variable> {
    all_variables().find(|v| v.name == token)
}

/// Whether the exact bracketed token is a registered variable
pub fn is_known(token: &str) -> bool {
    lookup(token).is_some()
}
