//! Curated title templates keyed by category label

use serde::Serialize;

/// A pre-authored title template associated with a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleTemplateEntry {
    /// Unique entry identifier
    pub id: &'static str,

    /// Category label the template is written for
    pub category: &'static str,

    /// Template text with `{placeholder}` tokens
    pub template: &'static str,

    pub description: &'static str,

    /// Sample rendered title
    pub example: &'static str,

    /// Placeholders referenced by the template, in order
    pub fields: &'static [&'static str],
}

const LIBRARY: &[TitleTemplateEntry] = &[
    // HR
    TitleTemplateEntry {
        id: "hr-vacation",
        category: "Vacation Requests",
        template: "{creator} vacation request ({field.start} - {field.end})",
        description: "Standard format for time off tracking",
        example: "John Doe vacation request (Dec 15 - Dec 20)",
        fields: &["{creator}", "{field.start}", "{field.end}"],
    },
    TitleTemplateEntry {
        id: "hr-onboarding",
        category: "Onboarding",
        template: "Onboarding: {field.employee_name} - {created_date}",
        description: "Track new hire progress",
        example: "Onboarding: Alice Smith - 01/20/2024",
        fields: &["{field.employee_name}", "{created_date}"],
    },
    // Maintenance
    TitleTemplateEntry {
        id: "maint-work-order",
        category: "Maintenance",
        template: "Work Order #{field.order_id}: {field.issue_type} - {field.location}",
        description: "Detailed work order for repairs",
        example: "Work Order #1234: Plumbing - Building A",
        fields: &["{field.order_id}", "{field.issue_type}", "{field.location}"],
    },
    // Invoices
    TitleTemplateEntry {
        id: "inv-vendor",
        category: "Invoices",
        template: "Invoice: {field.vendor} - {field.amount} (Due: {due_date})",
        description: "Vendor payment tracking",
        example: "Invoice: Amazon - $450.00 (Due: 03/15/2024)",
        fields: &["{field.vendor}", "{field.amount}", "{due_date}"],
    },
    // Family office
    TitleTemplateEntry {
        id: "fo-investment",
        category: "Investment Decisions",
        template: "Investment: {field.asset_name} - {field.strategy} ({created_date})",
        description: "Track financial decisions",
        example: "Investment: Apple Stock - Growth (01/20/2024)",
        fields: &["{field.asset_name}", "{field.strategy}", "{created_date}"],
    },
];

/// Every library entry in catalog order
pub fn entries() -> &'static [TitleTemplateEntry] {
    LIBRARY
}

/// Find a library entry by id
pub fn get(id: &str) -> Option<&'static TitleTemplateEntry> {
    LIBRARY.iter().find(|e| e.id == id)
}

/// Library entries whose category label matches the given category name.
///
/// Matching is case-insensitive containment in either direction: the label
/// contains the query, or the query contains the label. Results keep catalog
/// order. An empty query is contained in every label and so matches all.
pub fn match_by_category(category_name: &str) -> Vec<&'static TitleTemplateEntry> {
    let query = category_name.to_lowercase();

    LIBRARY
        .iter()
        .filter(|entry| {
            let label = entry.category.to_lowercase();
            label.contains(&query) || query.contains(&label)
        })
        .collect()
}
