//! Typed wire literals.
//!
//! Every primitive value handed to the VM carries a type suffix
//! (`0u8`, `150000000u128`, `2field`, `123scalar`). Addresses and booleans
//! are the exceptions: addresses travel bare and booleans are the `true` /
//! `false` tokens.
//!
//! Tagging is **idempotent**: asset identifiers circulate already suffixed
//! (`"2field"`), and tagging them again must not double-append.

use crate::errors::{DarkpoolError, Result};

/// The primitive wire types understood by the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralType {
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    Field,
    Scalar,
    Group,
    Address,
    Bool,
}

impl LiteralType {
    /// The suffix appended to values of this type.
    ///
    /// Empty for the types that travel without one.
    pub fn suffix(self) -> &'static str {
        match self {
            LiteralType::U8 => "u8",
            LiteralType::U16 => "u16",
            LiteralType::U32 => "u32",
            LiteralType::U64 => "u64",
            LiteralType::U128 => "u128",
            LiteralType::I8 => "i8",
            LiteralType::I16 => "i16",
            LiteralType::I32 => "i32",
            LiteralType::I64 => "i64",
            LiteralType::I128 => "i128",
            LiteralType::Field => "field",
            LiteralType::Scalar => "scalar",
            LiteralType::Group => "group",
            LiteralType::Address => "",
            LiteralType::Bool => "",
        }
    }

    /// Append this type's suffix to `value`, idempotently.
    ///
    /// A value that already ends in the correct suffix is returned unchanged.
    /// Suffix checks are exact, so `"1u128"` is never mistaken for a
    /// `u8`-tagged value (`u128` does not end in `u8`).
    pub fn tag(self, value: &str) -> String {
        let suffix = self.suffix();
        if suffix.is_empty() || value.ends_with(suffix) {
            value.to_string()
        } else {
            format!("{value}{suffix}")
        }
    }
}

// ----------------------------------------------------------------------------
// Typed formatters, one per primitive, mirroring the entry-point signatures
// ----------------------------------------------------------------------------

/// Format a `u8` literal, e.g. side flags (`0u8`).
pub fn u8_lit(v: u8) -> String {
    format!("{v}u8")
}

/// Format a `u64` literal, e.g. timestamps (`1700000000u64`).
pub fn u64_lit(v: u64) -> String {
    format!("{v}u64")
}

/// Format a `u128` literal, e.g. scaled amounts (`150000000u128`).
pub fn u128_lit(v: u128) -> String {
    format!("{v}u128")
}

/// Format a field element, leaving already-tagged identifiers unchanged.
pub fn field_lit(v: &str) -> String {
    LiteralType::Field.tag(v)
}

/// Format a scalar, leaving already-tagged values unchanged.
pub fn scalar_lit(v: &str) -> String {
    LiteralType::Scalar.tag(v)
}

/// Addresses travel bare on the wire.
pub fn address_lit(v: &str) -> String {
    v.to_string()
}

/// Booleans are rendered as the `true`/`false` tokens, never numeric flags.
pub fn bool_lit(v: bool) -> String {
    v.to_string()
}

// ----------------------------------------------------------------------------
// Literal parsers: the decode direction, suffix-stripping
// ----------------------------------------------------------------------------

/// Parse a `u8` literal, accepting the bare digits as well.
pub fn parse_u8(raw: &str) -> Result<u8> {
    strip(raw, "u8")
        .parse()
        .map_err(|_| DarkpoolError::parse("expected a u8 literal", raw))
}

/// Parse a `u64` literal, accepting the bare digits as well.
pub fn parse_u64(raw: &str) -> Result<u64> {
    strip(raw, "u64")
        .parse()
        .map_err(|_| DarkpoolError::parse("expected a u64 literal", raw))
}

/// Parse a `u128` literal, accepting the bare digits as well.
pub fn parse_u128(raw: &str) -> Result<u128> {
    strip(raw, "u128")
        .parse()
        .map_err(|_| DarkpoolError::parse("expected a u128 literal", raw))
}

/// Parse a boolean token.
pub fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DarkpoolError::parse("expected `true` or `false`", raw)),
    }
}

fn strip<'a>(raw: &'a str, suffix: &str) -> &'a str {
    let trimmed = raw.trim();
    trimmed.strip_suffix(suffix).unwrap_or(trimmed)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tagging() {
        assert_eq!(u8_lit(0), "0u8");
        assert_eq!(u64_lit(1_700_000_000), "1700000000u64");
        assert_eq!(u128_lit(150_000_000), "150000000u128");
        assert_eq!(field_lit("2"), "2field");
        assert_eq!(scalar_lit("12345"), "12345scalar");
        assert_eq!(address_lit("aleo1abc"), "aleo1abc");
        assert_eq!(bool_lit(true), "true");
        assert_eq!(bool_lit(false), "false");
    }

    #[test]
    fn test_tagging_is_idempotent() {
        assert_eq!(field_lit("2field"), "2field");
        assert_eq!(scalar_lit("12345scalar"), "12345scalar");
        assert_eq!(LiteralType::U128.tag("150000000u128"), "150000000u128");
        assert_eq!(LiteralType::U8.tag("0u8"), "0u8");
    }

    #[test]
    fn test_near_miss_suffixes() {
        // "u128" does not end in "u8": tagging U8 onto a u128 appends
        assert_eq!(LiteralType::U8.tag("1u128"), "1u128u8");
        // and the converse never strips
        assert_eq!(parse_u128("1u128").unwrap(), 1);
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_u8("0u8").unwrap(), 0);
        assert_eq!(parse_u8("1").unwrap(), 1);
        assert_eq!(parse_u64("1700000000u64").unwrap(), 1_700_000_000);
        assert_eq!(parse_u128("200000000000u128").unwrap(), 200_000_000_000);
        assert!(parse_bool("true").unwrap());
        assert!(!parse_bool("false").unwrap());
    }

    #[test]
    fn test_parser_failures_carry_raw() {
        let err = parse_u128("not-a-number").unwrap_err();
        assert!(err.to_string().contains("not-a-number"));
        assert!(parse_bool("1").is_err());
    }
}
