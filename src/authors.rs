//! Author list splitting, reformatting, and annotation
//!
//! Turns a raw author field into one HTML-safe display string: names are
//! rewritten to "First Last" order, linked via the author link table,
//! highlighted when they belong to the site owner, and marked with a
//! trailing `*` when the record's shared-author list names them.

use lazy_static::lazy_static;
use regex::Regex;

use crate::escape::escape_html;
use crate::links::AuthorLinkTable;

// Tokens identifying the site owner's name for highlighting
const OWNER_GIVEN: &str = "shrisha";
const OWNER_FAMILY: &str = "bharadwaj";

lazy_static! {
    /// The word "and" surrounded by whitespace is the sole author separator
    static ref AND_SEPARATOR: Regex = Regex::new(r"(?i)\s+and\s+").unwrap();
    /// The final ", X" of a joined list, where X carries no comma
    static ref FINAL_SEPARATOR: Regex = Regex::new(r", ([^,]+)$").unwrap();
}

/// Split a raw author field into trimmed, non-empty name segments
pub fn split_authors(author_field: &str) -> Vec<String> {
    AND_SEPARATOR
        .split(author_field)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split a raw shared-author field (comma-separated) into its name list
pub fn split_shared_authors(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Rewrite "Last, First [Middle...]" to "First [Middle...] Last".
///
/// A segment with no comma is assumed to already read "First Last" and is
/// returned as-is.
pub fn format_author_name(name: &str) -> String {
    let name = name.trim();
    if name.contains(',') {
        let parts: Vec<&str> = name.split(',').map(str::trim).collect();
        if parts.len() >= 2 {
            let last = parts[0];
            let first = parts[1..].join(" ");
            return format!("{} {}", first, last);
        }
    }
    name.to_string()
}

/// The last-name fragment of an original segment: the text before the first
/// comma, or the final whitespace-delimited token if there is no comma.
fn last_name_fragment(name_lower: &str) -> &str {
    match name_lower.split_once(',') {
        Some((last, _)) => last.trim(),
        None => name_lower.split_whitespace().last().unwrap_or(name_lower),
    }
}

/// Whether an author matches any entry in the shared-author list.
///
/// An ordered union of independent heuristics, deliberately permissive:
/// over-matching is the accepted risk, because the author field and the
/// shared-author field are rarely formatted consistently.
fn is_shared_author(formatted: &str, original: &str, shared_authors: &[String]) -> bool {
    let formatted_lower = formatted.to_lowercase();
    let original_lower = original.to_lowercase();
    let original_last = last_name_fragment(&original_lower);
    let formatted_last = formatted_lower.split_whitespace().last().unwrap_or("");

    for entry in shared_authors {
        let shared_lower = entry.to_lowercase();
        let shared_last = shared_lower
            .split_whitespace()
            .last()
            .unwrap_or("")
            .to_string();

        // field says "Last, First", shared list says "First Last"
        if original_last == shared_last
            // both sides reduce to the same surname
            || formatted_last == shared_last
            // one side abbreviates or adds middle names
            || formatted_lower.contains(&shared_lower)
            || shared_lower.contains(&formatted_lower)
            // shared list carries a bare surname
            || original_lower.contains(shared_last.as_str())
            || shared_lower.contains(original_last)
        {
            return true;
        }
    }
    false
}

/// Format a raw author field into one HTML-safe display string.
///
/// Authors are joined with ", "; with two or more, the final separator is
/// upgraded so the list reads "..., and X" (a two-author list becomes
/// "A, and B"). An empty or absent field yields an empty string.
pub fn format_authors(
    author_field: &str,
    links: &AuthorLinkTable,
    shared_authors: &[String],
) -> String {
    let segments = split_authors(author_field);
    if segments.is_empty() {
        return String::new();
    }

    let rendered: Vec<String> = segments
        .iter()
        .map(|original| {
            let name = format_author_name(original);
            let name_lower = name.to_lowercase();
            let url = links.url_for(&name);
            let is_owner = name_lower.contains(OWNER_GIVEN) && name_lower.contains(OWNER_FAMILY);

            let mut display = escape_html(&name);
            if is_shared_author(&name, original, shared_authors) {
                display.push('*');
            }

            // Link and highlight are not mutually exclusive: a highlighted
            // name with a link keeps the link, in highlighted style
            match (is_owner, url) {
                (true, Some(url)) => format!(
                    r#"<a href="{}" class="authorLink authorHighlight" target="_blank" rel="noopener">{}</a>"#,
                    escape_html(url),
                    display
                ),
                (true, None) => format!(r#"<span class="authorHighlight">{}</span>"#, display),
                (false, Some(url)) => format!(
                    r#"<a href="{}" class="authorLink" target="_blank" rel="noopener">{}</a>"#,
                    escape_html(url),
                    display
                ),
                (false, None) => display,
            }
        })
        .collect();

    let joined = rendered.join(", ");
    if rendered.len() > 1 {
        FINAL_SEPARATOR.replace(&joined, ", and $1").into_owned()
    } else {
        joined
    }
}
