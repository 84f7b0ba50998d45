//! # Obscura Core
//!
//! Client-side trading layer for a privacy-preserving darkpool on Aleo.
//!
//! ## Architecture
//!
//! - **Types**: record structs, their display forms, and the fixed-point
//!   codec (10^8 scaling)
//! - **Wire**: typed-literal formatting and the brace-balanced record parser
//! - **Book**: order book aggregation into price levels and spread
//! - **Service**: the async darkpool facade over an injected execution
//!   engine, plus wallet transaction envelopes
//!
//! ## Design Principles
//!
//! 1. **Pure core**: codec, formatter, parser, and aggregator are
//!    synchronous, deterministic, and share no state
//! 2. **No floating point on the wire**: decimals in, scaled `u128`
//!    literals out, floor rounding everywhere
//! 3. **Records over rows**: private state is consumed and re-emitted,
//!    never mutated, so every action returns fresh records
//! 4. **One async seam**: only the execution engine call awaits

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy shared across the crate
pub mod errors;

/// Record structs, display mappers, assets, fixed-point codec
pub mod types;

/// Wire literals and record parsing
pub mod wire;

/// Order book aggregation
pub mod book;

/// Async facade, input builders, engine and wallet traits
pub mod service;

/// Seeded demo data
pub mod fixtures;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use book::{aggregate, BookLevel, OrderBookView, Spread};
pub use errors::{DarkpoolError, Result};
pub use service::{DarkpoolService, Executed, ExecutionEngine, ExecutionMode, Wallet, PROGRAM_ID};
pub use types::{
    MatchReceipt, MatchReceiptRecord, Order, OrderRecord, SettlementReceipt,
    SettlementReceiptRecord, Side, Token, TokenRecord, TradeEntry,
};
pub use wire::RawRecord;
