//! Order-book aggregation for the owner's open orders.
//!
//! ## Components
//!
//! - [`BookLevel`] / [`Spread`] / [`OrderBookView`]: the display types
//! - [`aggregate`]: pure snapshot aggregation (filter, bucket, sort,
//!   cumulative totals, spread)
//!
//! In a darkpool only the caller's own orders are visible; the book this
//! module produces is therefore the *owner's* depth, recomputed from scratch
//! per snapshot rather than maintained incrementally.

pub mod aggregate;
pub mod level;

pub use aggregate::{aggregate, PRICE_DISPLAY_DECIMALS};
pub use level::{BookLevel, OrderBookView, Spread};
