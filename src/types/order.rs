//! Order records and their display form.
//!
//! ## Record Lifecycle
//!
//! An order record is UTXO-style private state: matching consumes the old
//! record and emits a replacement with a larger `filled`, and cancellation
//! consumes it with no replacement. Nothing is mutated in place, which is
//! why the display form keeps the originating raw record around, since cancelling
//! later requires re-submitting exactly that record.
//!
//! ## Wire Schema
//!
//! Serialization order is a correctness contract with the on-chain program,
//! so it is declared explicitly in [`OrderRecord::SCHEMA`] rather than
//! inferred from struct layout.

use std::time::SystemTime;

use rust_decimal::Decimal;

use crate::errors::{DarkpoolError, Result};
use crate::types::scaled::from_scaled;
use crate::types::system_time_from_secs;
use crate::wire::literal;
use crate::wire::RawRecord;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
///
/// Encoded on the wire as a `u8` literal:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Buy order (bid) - wants to purchase the base asset
    #[default]
    Buy,
    /// Sell order (ask) - wants to sell the base asset
    Sell,
}

impl Side {
    /// Convert to u8 for the wire
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from the wire u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// OrderRecord - raw wire form
// ============================================================================

/// An order record as returned by program execution.
///
/// Scaled integers stay scaled here; conversion to decimals happens in the
/// display mapper. The `_nonce` metadata field is kept for completeness but
/// never re-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderRecord {
    /// Owning address
    pub owner: String,
    /// Unique order identifier (field literal)
    pub order_id: String,
    /// 0 = buy, 1 = sell
    pub side: u8,
    /// Base asset identifier (field literal)
    pub base_asset: String,
    /// Quote asset identifier (field literal)
    pub quote_asset: String,
    /// Order size, scaled by 10^8
    pub amount: u128,
    /// Limit price, scaled by 10^8
    pub price: u128,
    /// Commitment salt (scalar literal)
    pub salt: String,
    /// Filled size so far, scaled by 10^8
    pub filled: u128,
    /// Creation time, unix seconds
    pub created_at: u64,
    /// Record nonce (`_nonce` metadata, excluded from serialization)
    pub nonce: Option<String>,
}

impl OrderRecord {
    /// Declared wire field order for the on-chain `Order` record.
    pub const SCHEMA: [&'static str; 10] = [
        "owner",
        "order_id",
        "side",
        "base_asset",
        "quote_asset",
        "amount",
        "price",
        "salt",
        "filled",
        "created_at",
    ];

    /// Render the record as a transition input, in schema order.
    ///
    /// Reserved metadata fields (`_`-prefixed) are omitted.
    pub fn to_wire(&self) -> String {
        let body: Vec<String> = Self::SCHEMA
            .iter()
            .map(|name| format!("{name}: {}", self.wire_value(name)))
            .collect();
        format!("{{ {} }}", body.join(", "))
    }

    fn wire_value(&self, field: &str) -> String {
        match field {
            "owner" => literal::address_lit(&self.owner),
            "order_id" => literal::field_lit(&self.order_id),
            "side" => literal::u8_lit(self.side),
            "base_asset" => literal::field_lit(&self.base_asset),
            "quote_asset" => literal::field_lit(&self.quote_asset),
            "amount" => literal::u128_lit(self.amount),
            "price" => literal::u128_lit(self.price),
            "salt" => literal::scalar_lit(&self.salt),
            "filled" => literal::u128_lit(self.filled),
            "created_at" => literal::u64_lit(self.created_at),
            other => unreachable!("field `{other}` is not in the order schema"),
        }
    }

    /// Decode an order record from its wire string.
    pub fn from_wire(raw: &str) -> Result<Self> {
        let rec = RawRecord::parse(raw)?;
        Ok(OrderRecord {
            owner: rec.require("owner", raw)?.to_string(),
            order_id: rec.require("order_id", raw)?.to_string(),
            side: literal::parse_u8(rec.require("side", raw)?)?,
            base_asset: rec.require("base_asset", raw)?.to_string(),
            quote_asset: rec.require("quote_asset", raw)?.to_string(),
            amount: literal::parse_u128(rec.require("amount", raw)?)?,
            price: literal::parse_u128(rec.require("price", raw)?)?,
            salt: rec.require("salt", raw)?.to_string(),
            filled: literal::parse_u128(rec.require("filled", raw)?)?,
            created_at: literal::parse_u64(rec.require("created_at", raw)?)?,
            nonce: rec.get("_nonce").map(str::to_string),
        })
    }

    /// Whether the order has reached its terminal Filled state.
    pub fn is_filled(&self) -> bool {
        self.filled >= self.amount
    }
}

// ============================================================================
// Order - display form
// ============================================================================

/// A display-ready order with decimal quantities and derived fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub owner: String,
    pub side: Side,
    pub base_asset: String,
    pub quote_asset: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub filled: Decimal,
    /// `amount - filled`, floored at zero
    pub remaining: Decimal,
    /// `filled / amount * 100`, clamped to `[0, 100]`; zero when amount is zero
    pub percent_filled: Decimal,
    pub created_at: SystemTime,
    /// The raw record this order was mapped from, kept for re-submission
    pub raw: OrderRecord,
}

impl Order {
    /// Map a raw order record to its display form.
    ///
    /// Pure: the input record is cloned into `raw`, never mutated.
    pub fn from_record(record: &OrderRecord) -> Result<Self> {
        let side = Side::from_u8(record.side).ok_or_else(|| {
            DarkpoolError::Validation(format!("order side must be 0 or 1, got {}", record.side))
        })?;
        let amount = from_scaled(record.amount)?;
        let filled = from_scaled(record.filled)?;
        let remaining = (amount - filled).max(Decimal::ZERO);
        let percent_filled = percent_filled(amount, filled);

        Ok(Order {
            order_id: record.order_id.clone(),
            owner: record.owner.clone(),
            side,
            base_asset: record.base_asset.clone(),
            quote_asset: record.quote_asset.clone(),
            amount,
            price: from_scaled(record.price)?,
            filled,
            remaining,
            percent_filled,
            created_at: system_time_from_secs(record.created_at)?,
            raw: record.clone(),
        })
    }

    /// Whether the order still has unfilled size.
    pub fn is_open(&self) -> bool {
        self.remaining > Decimal::ZERO
    }
}

/// Guarded percent-filled: zero when `amount` is zero, clamped to `[0, 100]`.
fn percent_filled(amount: Decimal, filled: Decimal) -> Decimal {
    if amount.is_zero() {
        return Decimal::ZERO;
    }
    (filled / amount * Decimal::ONE_HUNDRED).clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

// ============================================================================
// Unit Tests
// ============================================================================
