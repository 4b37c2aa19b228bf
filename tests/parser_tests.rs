//! Record parser integration tests

use bibpage_core::{parse, Record};

// === Basic Parsing ===

#[test]
fn test_parse_simple_record() {
    let input = r#"
@article{Einstein1905,
    author = {Albert Einstein},
    title = {On the Electrodynamics of Moving Bodies},
    journal = {Annalen der Physik},
    year = {1905}
}
"#;
    let records = parse(input);

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.entry_type, "article");
    assert_eq!(record.key, "Einstein1905");
    assert_eq!(record.get("author"), Some("Albert Einstein"));
    assert_eq!(
        record.get("title"),
        Some("On the Electrodynamics of Moving Bodies")
    );
    assert_eq!(record.get("year"), Some("1905"));
}

#[test]
fn test_parse_multiple_records_in_order() {
    let input = r#"
@article{Paper1, title = {First}}
@book{Book1, title = {Second}}
@inproceedings{Conf1, title = {Third}}
"#;
    let records = parse(input);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].key, "Paper1");
    assert_eq!(records[1].key, "Book1");
    assert_eq!(records[2].key, "Conf1");
    assert_eq!(records[1].entry_type, "book");
}

#[test]
fn test_entry_type_is_lowercased() {
    let records = parse("@ARTICLE{k, title = {T}}");
    assert_eq!(records[0].entry_type, "article");
}

// === Value Forms ===

#[test]
fn test_nested_braces_stripped_at_outermost_level_only() {
    let input = r#"@article{k1, title = {A {Nested} Title}, year = {2020}}"#;
    let records = parse(input);
    assert_eq!(records[0].get("title"), Some("A {Nested} Title"));
    assert_eq!(records[0].get("year"), Some("2020"));
}

#[test]
fn test_quoted_value_with_escaped_quote() {
    let input = r#"@article{k, author = "O\"Brien, Pat"}"#;
    let records = parse(input);
    // The escaped quote does not terminate the value early
    assert_eq!(records[0].get("author"), Some(r#"O\"Brien, Pat"#));
}

#[test]
fn test_quoted_value() {
    let records = parse(r#"@article{k, title = "Quoted Title", year = "2024"}"#);
    assert_eq!(records[0].get("title"), Some("Quoted Title"));
    assert_eq!(records[0].get("year"), Some("2024"));
}

#[test]
fn test_bare_word_value() {
    let records = parse("@article{k, month = dec, year = 2024}");
    assert_eq!(records[0].get("month"), Some("dec"));
    assert_eq!(records[0].get("year"), Some("2024"));
}

#[test]
fn test_value_containing_at_sign() {
    // The @ inside a braced value is consumed with the value, so the scan
    // for the next record marker never sees it
    let input = "@misc{a, note = {mail me @ home}}\n@misc{b, note = {x}}";
    let records = parse(input);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("note"), Some("mail me @ home"));
    assert_eq!(records[1].key, "b");
}

// === Delimiters ===

#[test]
fn test_paren_delimited_record() {
    let records = parse("@article(k, title = {Parens}, year = 1999)");
    assert_eq!(records[0].key, "k");
    assert_eq!(records[0].get("title"), Some("Parens"));
    assert_eq!(records[0].get("year"), Some("1999"));
}

#[test]
fn test_trailing_comma() {
    let records = parse("@article{k, title = {T},}");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("title"), Some("T"));
}

// === Field Names ===

#[test]
fn test_field_names_lowercased() {
    let records = parse("@article{k, TITLE = {T}, YeAr = {2024}}");
    assert_eq!(records[0].get("title"), Some("T"));
    assert_eq!(records[0].get("year"), Some("2024"));
}

#[test]
fn test_duplicate_field_last_write_wins() {
    let records = parse("@article{k, year = {2020}, year = {2021}}");
    assert_eq!(records[0].get("year"), Some("2021"));
}

#[test]
fn test_unrecognized_fields_are_kept() {
    let records = parse("@article{k, frobnicate = {yes}}");
    assert_eq!(records[0].get("frobnicate"), Some("yes"));
}

// === Malformed Input ===

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
    assert!(parse("   \n  ").is_empty());
    assert!(parse("plain text with no marker").is_empty());
}

#[test]
fn test_missing_key() {
    let records = parse("@misc{, title = {T}}");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "");
    assert_eq!(records[0].get("title"), Some("T"));
}

#[test]
fn test_unterminated_record_at_eof() {
    let records = parse("@article{k, title = {Cut off");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("title"), Some("Cut off"));
}

#[test]
fn test_record_with_trailing_bare_token() {
    let records = parse("@article{k, title = {T}, dangling}");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("title"), Some("T"));
    assert_eq!(records[0].get("dangling"), None);
}

#[test]
fn test_marker_with_nothing_after() {
    assert_eq!(parse("@").len(), 0);
    assert_eq!(parse("@article").len(), 0);
}

// === Idempotence ===

#[test]
fn test_reparse_yields_identical_records() {
    let input = r#"
@article{a, title = {One}, author = {Doe, Jane}}
@book{b, title = {Two}, year = 2001}
"#;
    let first: Vec<Record> = parse(input);
    let second: Vec<Record> = parse(input);
    assert_eq!(first, second);
}
