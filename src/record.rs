//! Parsed record data structures

use serde::{Deserialize, Serialize};

/// A parsed bibliographic record.
///
/// Well-known fields get their own slots; anything else lands in `extra`,
/// which preserves input order so re-serialization is deterministic. Field
/// names are stored lowercased and looked up case-insensitively. Setting a
/// field that already has a value overwrites it (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// The record's category keyword (e.g. "article"), lowercased.
    pub entry_type: String,
    /// The record's identifier within the input; empty if the input omitted it.
    pub key: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub venue: Option<String>,
    pub journal: Option<String>,
    pub booktitle: Option<String>,
    pub doi: Option<String>,
    /// Comma-separated list of co-first-author names.
    pub shared_authors: Option<String>,
    pub url: Option<String>,
    pub paperurl: Option<String>,
    pub projecturl: Option<String>,
    pub codeurl: Option<String>,
    pub videourl: Option<String>,
    pub slidesurl: Option<String>,
    pub posterurl: Option<String>,
    pub arxivurl: Option<String>,
    pub preview: Option<String>,
    pub preview_width: Option<String>,
    pub selected: Option<String>,
    /// Unrecognized fields, in input order.
    pub extra: Vec<(String, String)>,
}

impl Record {
    /// Create an empty record with the given type and key
    pub fn new(entry_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            key: key.into(),
            ..Self::default()
        }
    }

    /// Set a field value by name (case-insensitive), overwriting any prior value
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match name.to_lowercase().as_str() {
            "title" => self.title = Some(value),
            "author" => self.author = Some(value),
            "year" => self.year = Some(value),
            "venue" => self.venue = Some(value),
            "journal" => self.journal = Some(value),
            "booktitle" => self.booktitle = Some(value),
            "doi" => self.doi = Some(value),
            "shared_authors" => self.shared_authors = Some(value),
            "url" => self.url = Some(value),
            "paperurl" => self.paperurl = Some(value),
            "projecturl" => self.projecturl = Some(value),
            "codeurl" => self.codeurl = Some(value),
            "videourl" => self.videourl = Some(value),
            "slidesurl" => self.slidesurl = Some(value),
            "posterurl" => self.posterurl = Some(value),
            "arxivurl" => self.arxivurl = Some(value),
            "preview" => self.preview = Some(value),
            "preview_width" => self.preview_width = Some(value),
            "selected" => self.selected = Some(value),
            other => {
                if let Some(slot) = self.extra.iter_mut().find(|(k, _)| k == other) {
                    slot.1 = value;
                } else {
                    self.extra.push((other.to_string(), value));
                }
            }
        }
    }

    /// Get a field value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&str> {
        match name.to_lowercase().as_str() {
            "title" => self.title.as_deref(),
            "author" => self.author.as_deref(),
            "year" => self.year.as_deref(),
            "venue" => self.venue.as_deref(),
            "journal" => self.journal.as_deref(),
            "booktitle" => self.booktitle.as_deref(),
            "doi" => self.doi.as_deref(),
            "shared_authors" => self.shared_authors.as_deref(),
            "url" => self.url.as_deref(),
            "paperurl" => self.paperurl.as_deref(),
            "projecturl" => self.projecturl.as_deref(),
            "codeurl" => self.codeurl.as_deref(),
            "videourl" => self.videourl.as_deref(),
            "slidesurl" => self.slidesurl.as_deref(),
            "posterurl" => self.posterurl.as_deref(),
            "arxivurl" => self.arxivurl.as_deref(),
            "preview" => self.preview.as_deref(),
            "preview_width" => self.preview_width.as_deref(),
            "selected" => self.selected.as_deref(),
            other => self
                .extra
                .iter()
                .find(|(k, _)| k == other)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// All present fields as (name, value) pairs: well-known fields first in a
    /// fixed order, then unrecognized fields in input order.
    pub fn fields(&self) -> Vec<(&str, &str)> {
        let known: [(&str, &Option<String>); 19] = [
            ("title", &self.title),
            ("author", &self.author),
            ("year", &self.year),
            ("venue", &self.venue),
            ("journal", &self.journal),
            ("booktitle", &self.booktitle),
            ("doi", &self.doi),
            ("shared_authors", &self.shared_authors),
            ("url", &self.url),
            ("paperurl", &self.paperurl),
            ("projecturl", &self.projecturl),
            ("codeurl", &self.codeurl),
            ("videourl", &self.videourl),
            ("slidesurl", &self.slidesurl),
            ("posterurl", &self.posterurl),
            ("arxivurl", &self.arxivurl),
            ("preview", &self.preview),
            ("preview_width", &self.preview_width),
            ("selected", &self.selected),
        ];

        let mut out = Vec::new();
        for (name, value) in known {
            if let Some(v) = value {
                out.push((name, v.as_str()));
            }
        }
        for (k, v) in &self.extra {
            out.push((k.as_str(), v.as_str()));
        }
        out
    }
}
