//! Wire-format primitives for the darkpool program.
//!
//! ## Components
//!
//! - [`literal`]: typed-literal formatting (`0u8`, `2field`, ...) and the
//!   matching suffix-stripping parsers
//! - [`parser`]: the record-string parser ([`RawRecord`])
//!
//! Record schemas themselves live with the record types in [`crate::types`];
//! this module only knows about the primitive encodings.

pub mod literal;
pub mod parser;

pub use parser::RawRecord;
