//! Venue classification
//!
//! Derives one display string for publication venue from the overlapping
//! `venue`/`booktitle`/`journal`/`year` fields, with special-cased handling
//! for the SIGGRAPH venue family.

use crate::record::Record;

/// Produce the display venue string for a record.
///
/// If any venue-bearing field mentions SIGGRAPH, family formatting applies:
/// the regional edition picks "SIGGRAPH Asia" over "SIGGRAPH", the record is
/// classified as Journal Track or Conference Track, and the result composes
/// as `"<family>, <track>, <year>"`, degrading gracefully as information is
/// missing. Otherwise the first non-empty of `venue`, `booktitle`, `journal`
/// is used, with `", <year>"` appended when a year is present.
pub fn format_venue(record: &Record) -> String {
    let venue = record.get("venue").unwrap_or("").trim();
    let booktitle = record.get("booktitle").unwrap_or("").trim();
    let journal = record.get("journal").unwrap_or("").trim();
    let year = record.get("year").unwrap_or("").trim();

    let venue_lower = venue.to_lowercase();
    let booktitle_lower = booktitle.to_lowercase();
    let journal_lower = journal.to_lowercase();

    let in_family = venue_lower.contains("siggraph")
        || booktitle_lower.contains("siggraph")
        || journal_lower.contains("siggraph");

    if in_family {
        let family = if venue_lower.contains("asia")
            || booktitle_lower.contains("asia")
            || journal_lower.contains("asia")
        {
            "SIGGRAPH Asia"
        } else {
            "SIGGRAPH"
        };

        // Journal-track detection is checked before conference-track
        // detection, so a record carrying both fields classifies as journal
        let track = if !journal.is_empty()
            || journal_lower.contains("tog")
            || journal_lower.contains("transactions")
            || venue_lower.contains("journal")
        {
            Some("Journal Track")
        } else if !booktitle.is_empty()
            || venue_lower.contains("conference")
            || booktitle_lower.contains("conference")
        {
            Some("Conference Track")
        } else {
            None
        };

        return match (track, year.is_empty()) {
            (Some(track), false) => format!("{}, {}, {}", family, track, year),
            (None, false) => format!("{}, {}", family, year),
            (Some(track), true) => format!("{}, {}", family, track),
            (None, true) => family.to_string(),
        };
    }

    let chosen = if !venue.is_empty() {
        venue
    } else if !booktitle.is_empty() {
        booktitle
    } else {
        journal
    };

    if !chosen.is_empty() && !year.is_empty() {
        format!("{}, {}", chosen, year)
    } else {
        chosen.to_string()
    }
}
