//! Bibliographic record engine for a publications page
//!
//! Parses a bracketed, comma-separated record format (entries of
//! `@type{key, field = value, ...}`) and turns raw record fields into
//! display-ready structured data: author name lists with link/highlight
//! annotation, venue strings, and de-braced titles.
//!
//! The parser is tolerant, not validating: it never fails on malformed
//! input and best-effort-recovers instead. Field values are opaque strings;
//! no field semantics are validated. Fetching the raw text and link table,
//! filtering and sorting records, and building visual layout all belong to
//! the render layer, which consumes the strings this crate produces.

mod authors;
mod escape;
mod links;
mod parser;
mod pretty;
mod record;
mod title;
mod venue;

pub use authors::{format_author_name, format_authors, split_authors, split_shared_authors};
pub use escape::escape_html;
pub use links::{AuthorLinkTable, LinkTableError};
pub use parser::parse;
pub use pretty::format_record;
pub use record::Record;
pub use title::clean_title;
pub use venue::format_venue;
