//! Record-string parser.
//!
//! ## Wire Format
//!
//! Program executions return records as ASCII strings:
//!
//! ```text
//! { owner: aleo1abc.private, amount: 150000000u128.private, _nonce: 123group.public }
//! ```
//!
//! Parsing strips the outer braces, splits the body into top-level
//! `key: value` pairs, and removes the trailing `.private`/`.public`
//! visibility annotation from each value; the data layer only needs the
//! underlying value.
//!
//! ## Nested Values
//!
//! Splitting is brace-balanced: a value that itself contains a composite
//! (`{...}`, `[...]`, `(...)`) is kept verbatim, commas inside it and all.
//! A naive top-level comma split would shear such values apart.

use crate::errors::{DarkpoolError, Result};

/// A parsed record: ordered `key -> value` pairs with visibility stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Parse a wire record string.
    ///
    /// # Errors
    ///
    /// [`DarkpoolError::Parse`] with the offending raw string attached when
    /// the outer braces are missing, a pair has no key, or the braces inside
    /// a value never re-balance.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let body = trimmed
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or_else(|| DarkpoolError::parse("record must be enclosed in braces", raw))?;

        let mut fields = Vec::new();
        for pair in split_top_level(body, raw)? {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let colon = pair
                .find(':')
                .ok_or_else(|| DarkpoolError::parse("field pair missing `:`", raw))?;
            let key = pair[..colon].trim();
            if key.is_empty() {
                return Err(DarkpoolError::parse("field pair missing key", raw));
            }
            let value = strip_visibility(pair[colon + 1..].trim());
            fields.push((key.to_string(), value.to_string()));
        }

        Ok(RawRecord { fields })
    }

    /// Look up a field by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up a field that the record schema requires.
    pub fn require(&self, key: &str, raw: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| DarkpoolError::parse(format!("missing field `{key}`"), raw))
    }

    /// The fields in wire order.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Split `body` on commas at nesting depth zero.
fn split_top_level<'a>(body: &'a str, raw: &str) -> Result<Vec<&'a str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in body.char_indices() {
        match c {
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| DarkpoolError::parse("unbalanced closing brace", raw))?;
            }
            ',' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(DarkpoolError::parse("unbalanced opening brace", raw));
    }
    parts.push(&body[start..]);
    Ok(parts)
}

/// Drop a trailing `.private` / `.public` visibility annotation.
fn strip_visibility(value: &str) -> &str {
    value
        .strip_suffix(".private")
        .or_else(|| value.strip_suffix(".public"))
        .unwrap_or(value)
}

// ============================================================================
// Unit Tests
// ============================================================================
