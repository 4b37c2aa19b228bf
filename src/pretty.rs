//! Record re-serialization for display
//!
//! Renders a parsed record back to `@type{key, ...}` text for the per-entry
//! "BibTeX" view, omitting the fields that only drive presentation.

use crate::record::Record;

/// Fields that drive presentation rather than bibliography content
const HIDDEN_FIELDS: &[&str] = &[
    "shared_authors",
    "url",
    "paperurl",
    "projecturl",
    "codeurl",
    "videourl",
    "slidesurl",
    "posterurl",
    "arxivurl",
    "preview",
    "preview_width",
    "previewwidth",
    "selected",
];

/// Format a record as display text, one field per line
pub fn format_record(record: &Record) -> String {
    let mut result = String::new();
    result.push('@');
    result.push_str(&record.entry_type);
    result.push('{');
    result.push_str(&record.key);
    result.push_str(",\n");

    for (name, value) in record.fields() {
        if HIDDEN_FIELDS.contains(&name) {
            continue;
        }
        result.push_str("  ");
        result.push_str(name);
        result.push_str(" = {");
        result.push_str(value);
        result.push_str("},\n");
    }

    result.push('}');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let mut record = Record::new("article", "Smith2024");
        record.set("title", "A Great Paper");
        record.set("year", "2024");

        let out = format_record(&record);
        assert_eq!(
            out,
            "@article{Smith2024,\n  title = {A Great Paper},\n  year = {2024},\n}"
        );
    }

    #[test]
    fn test_presentation_fields_are_hidden() {
        let mut record = Record::new("article", "k");
        record.set("title", "T");
        record.set("paperurl", "https://example.org/paper.pdf");
        record.set("preview", "img.png");
        record.set("selected", "true");
        record.set("shared_authors", "Jane Doe");

        let out = format_record(&record);
        assert!(out.contains("title = {T}"));
        assert!(!out.contains("paperurl"));
        assert!(!out.contains("preview"));
        assert!(!out.contains("selected"));
        assert!(!out.contains("shared_authors"));
    }
}
