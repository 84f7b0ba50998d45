//! Core data model for the darkpool client layer.
//!
//! All monetary quantities travel as `u128` values scaled by 10^8 and are
//! decoded into `rust_decimal::Decimal` for display.
//!
//! ## Types
//!
//! - [`Side`]: Buy or Sell
//! - [`OrderRecord`] / [`Order`]: raw order record and its display form
//! - [`TokenRecord`] / [`Token`]: private balances
//! - [`MatchReceiptRecord`] / [`MatchReceipt`]: per-party match results
//! - [`SettlementReceiptRecord`] / [`SettlementReceipt`]: settlement results
//! - [`TradeEntry`]: trade-history rows
//!
//! Raw records carry explicit `SCHEMA` constants: wire field order is a
//! contract with the on-chain program, declared rather than inferred.

mod order;
mod receipt;
mod token;
mod trade;
pub mod asset;
pub mod scaled;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::errors::{DarkpoolError, Result};

/// Convert a wire timestamp (unix seconds) to a [`SystemTime`].
///
/// The wire accepts the full `u64` range but `SystemTime` does not; values
/// past its horizon are rejected rather than panicking the display mappers.
pub(crate) fn system_time_from_secs(secs: u64) -> Result<SystemTime> {
    UNIX_EPOCH
        .checked_add(Duration::from_secs(secs))
        .ok_or_else(|| {
            DarkpoolError::Validation(format!("timestamp {secs} is out of representable range"))
        })
}

// Re-export all types at module level
pub use order::{Order, OrderRecord, Side};
pub use receipt::{MatchReceipt, MatchReceiptRecord, SettlementReceipt, SettlementReceiptRecord};
pub use token::{Token, TokenRecord};
pub use trade::TradeEntry;
