//! Author link table
//!
//! The external author→URL mapping consumed by the author formatter. The
//! collaborator fetches the bytes (typically a JSON object of name→URL);
//! this crate owns the decode and the case-insensitive lookup.

use std::collections::HashMap;

use thiserror::Error;

/// Error type for link table decoding
#[derive(Debug, Error)]
pub enum LinkTableError {
    #[error("invalid author link table: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Case-insensitive mapping from author display name to URL.
///
/// Entries with empty URLs are dropped at construction, so a lookup hit
/// always carries a usable URL. Read-only to the formatting layer.
#[derive(Debug, Clone, Default)]
pub struct AuthorLinkTable {
    urls: HashMap<String, String>,
}

impl AuthorLinkTable {
    /// Create an empty table (every author unlinked)
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a table from a JSON object of `{"Name": "https://..."}`
    pub fn from_json(json: &str) -> Result<Self, LinkTableError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    /// Add an entry; empty URLs are treated as "no link" and skipped
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        let url = url.into();
        if !url.is_empty() {
            self.urls.insert(name.into().to_lowercase(), url);
        }
    }

    /// Look up the URL for a name, case-insensitively
    pub fn url_for(&self, name: &str) -> Option<&str> {
        self.urls.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl FromIterator<(String, String)> for AuthorLinkTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, url) in iter {
            table.insert(name, url);
        }
        table
    }
}
