//! Title normalization

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A brace group with no nested braces inside it
    static ref BRACE_GROUP: Regex = Regex::new(r"\{([^}]+)\}").unwrap();
}

/// Remove brace-grouping markers from a title while keeping their text.
///
/// Only single-level groups are stripped: each non-overlapping `{...}` with
/// no nested braces loses its markers, and the replacement is not re-scanned,
/// so deeper nesting keeps its remaining braces.
pub fn clean_title(title: &str) -> String {
    BRACE_GROUP.replace_all(title, "$1").into_owned()
}
