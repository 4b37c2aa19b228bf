//! Tolerant record parser
//!
//! A flat cursor over the input bytes with explicit position tracking. The
//! parser tolerates rather than validates: it never fails on malformed
//! input, it best-effort-recovers and may silently produce a record with
//! missing fields. Unterminated input simply ends reading at end-of-input
//! with whatever was accumulated.
//!
//! All structural delimiters are ASCII, so positions advance byte-wise and
//! slicing the UTF-8 input at delimiter boundaries is safe.

use crate::record::Record;

/// Parse the input text into the ordered sequence of records found in it.
///
/// Records appear in the order their `@` start markers appear. The scan for
/// the next `@` only happens between completed records, so an `@` inside a
/// value's literal text is never matched. Empty input, or input with no `@`
/// at all, yields an empty sequence.
pub fn parse(input: &str) -> Vec<Record> {
    let mut records = Vec::new();
    let mut cur = Cursor::new(input);

    while cur.seek_past(b'@') {
        cur.skip_ws();
        let entry_type = cur
            .read_until(|c| c == b'{' || c == b'(')
            .trim()
            .to_lowercase();
        // The opening delimiter fixes the closing delimiter for the whole record
        let close = match cur.bump() {
            Some(b'{') => b'}',
            Some(_) => b')',
            None => break,
        };
        cur.skip_ws();
        let key = cur.read_until(|c| c == b',' || c == close).trim();
        let mut record = Record::new(entry_type, key);
        if cur.peek() == Some(b',') {
            cur.bump();
        }

        loop {
            cur.skip_ws();
            match cur.peek() {
                None => break,
                // Closing delimiter where a field name would start: record
                // ends here (covers trailing commas)
                Some(c) if c == close => {
                    cur.bump();
                    break;
                }
                Some(_) => {}
            }
            let name = cur
                .read_until(|c| c == b'=' || c == close)
                .trim()
                .to_lowercase();
            // A bare token with no `=` before the closing delimiter is dropped
            if cur.peek() == Some(close) {
                cur.bump();
                break;
            }
            cur.bump(); // =
            let value = read_value(&mut cur, close);
            record.set(&name, value);
            cur.skip_ws();
            if cur.peek() == Some(b',') {
                cur.bump();
            }
        }

        records.push(record);
    }

    records
}

/// Consume exactly one field value, honoring the three literal forms.
fn read_value(cur: &mut Cursor, close: u8) -> String {
    cur.skip_ws();
    match cur.peek() {
        Some(b'{') => {
            let span = cur.read_balanced(b'{', b'}');
            let inner = span.strip_prefix('{').unwrap_or(span);
            let inner = inner.strip_suffix('}').unwrap_or(inner);
            inner.trim().to_string()
        }
        Some(b'"') => {
            cur.bump();
            let start = cur.pos;
            while let Some(c) = cur.bump() {
                // A quote immediately preceded by a backslash does not close
                // the value; the backslash stays in the text
                if c == b'"' && cur.bytes.get(cur.pos.wrapping_sub(2)) != Some(&b'\\') {
                    return cur.input[start..cur.pos - 1].trim().to_string();
                }
            }
            cur.input[start..cur.pos].trim().to_string()
        }
        _ => cur
            .read_until(|c| c == b',' || c == close || c == b'\n')
            .trim()
            .to_string(),
    }
}

/// Byte cursor with the small read helpers the scanner is built from.
struct Cursor<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Advance to just past the next occurrence of `byte`; false if none remains
    fn seek_past(&mut self, byte: u8) -> bool {
        match self.bytes[self.pos..].iter().position(|&b| b == byte) {
            Some(offset) => {
                self.pos += offset + 1;
                true
            }
            None => {
                self.pos = self.bytes.len();
                false
            }
        }
    }

    /// Consume until `pred` matches or end of input; the matching byte is not consumed
    fn read_until(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if pred(c) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Consume a depth-balanced span, delimiters included.
    ///
    /// Assumes the cursor is on `open`. Nested pairs are counted so an inner
    /// `close` does not prematurely end the span. At end of input the span is
    /// returned as accumulated.
    fn read_balanced(&mut self, open: u8, close: u8) -> &'a str {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(c) = self.bump() {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
        }
        &self.input[start..self.pos]
    }
}
