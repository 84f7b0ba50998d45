//! Error taxonomy for the darkpool data layer.
//!
//! Three failure classes cross the crate boundary:
//!
//! - [`DarkpoolError::Validation`]: malformed or out-of-domain numeric input
//!   (negative amounts, values that overflow the fixed-point range). Fails
//!   fast, never clamps.
//! - [`DarkpoolError::Parse`]: a wire string that does not match the expected
//!   record structure. Carries the offending raw string for diagnostics.
//! - [`DarkpoolError::Execution`]: any failure surfaced by the execution
//!   engine, propagated verbatim and never retried here.
//!
//! Division by zero in derived display fields is *not* an error: percent
//! filled is defined as zero when the order amount is zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DarkpoolError {
    /// Numeric input outside the domain of the fixed-point codec.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Wire string that violates the record/literal format.
    #[error("parse failure: {reason} (raw: `{raw}`)")]
    Parse { reason: String, raw: String },

    /// Failure reported by the execution engine (local or network).
    #[error("execution failed: {0}")]
    Execution(String),
}

impl DarkpoolError {
    /// Shorthand for a parse failure with the offending raw text attached.
    pub fn parse(reason: impl Into<String>, raw: impl Into<String>) -> Self {
        DarkpoolError::Parse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DarkpoolError>;
