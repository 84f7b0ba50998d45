//! Match and settlement receipts.
//!
//! A match produces one `MatchReceipt` per counterparty; settling the match
//! later produces one `SettlementReceipt` per party. Both are owner-scoped
//! records with scaled economic fields, decoded here into display decimals.

use std::time::SystemTime;

use rust_decimal::Decimal;

use crate::errors::Result;
use crate::types::scaled::from_scaled;
use crate::types::system_time_from_secs;
use crate::wire::literal;
use crate::wire::RawRecord;

// ============================================================================
// MatchReceipt
// ============================================================================

/// Raw match receipt record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchReceiptRecord {
    pub owner: String,
    /// Match identifier (field literal)
    pub match_id: String,
    /// The holder's order (field literal)
    pub order_id: String,
    /// The counterparty's order (field literal)
    pub counterparty_order_id: String,
    /// Matched size, scaled by 10^8
    pub amount_filled: u128,
    /// Execution price, scaled by 10^8
    pub execution_price: u128,
    /// Whether the holder was the buyer
    pub is_buy: bool,
    /// Match time, unix seconds
    pub timestamp: u64,
    /// Record nonce (`_nonce` metadata, excluded from serialization)
    pub nonce: Option<String>,
}

impl MatchReceiptRecord {
    /// Declared wire field order for the on-chain `MatchReceipt` record.
    pub const SCHEMA: [&'static str; 8] = [
        "owner",
        "match_id",
        "order_id",
        "counterparty_order_id",
        "amount_filled",
        "execution_price",
        "is_buy",
        "timestamp",
    ];

    /// Render the record as a transition input, in schema order.
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
            "match_id" => literal::field_lit(&self.match_id),
            "order_id" => literal::field_lit(&self.order_id),
            "counterparty_order_id" => literal::field_lit(&self.counterparty_order_id),
            "amount_filled" => literal::u128_lit(self.amount_filled),
            "execution_price" => literal::u128_lit(self.execution_price),
            "is_buy" => literal::bool_lit(self.is_buy),
            "timestamp" => literal::u64_lit(self.timestamp),
            other => unreachable!("field `{other}` is not in the match-receipt schema"),
        }
    }

    /// Decode a match receipt record from its wire string.
    pub fn from_wire(raw: &str) -> Result<Self> {
        let rec = RawRecord::parse(raw)?;
        Ok(MatchReceiptRecord {
            owner: rec.require("owner", raw)?.to_string(),
            match_id: rec.require("match_id", raw)?.to_string(),
            order_id: rec.require("order_id", raw)?.to_string(),
            counterparty_order_id: rec.require("counterparty_order_id", raw)?.to_string(),
            amount_filled: literal::parse_u128(rec.require("amount_filled", raw)?)?,
            execution_price: literal::parse_u128(rec.require("execution_price", raw)?)?,
            is_buy: literal::parse_bool(rec.require("is_buy", raw)?)?,
            timestamp: literal::parse_u64(rec.require("timestamp", raw)?)?,
            nonce: rec.get("_nonce").map(str::to_string),
        })
    }
}

/// Display-ready match receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReceipt {
    pub match_id: String,
    pub order_id: String,
    pub counterparty_order_id: String,
    pub amount_filled: Decimal,
    pub execution_price: Decimal,
    pub is_buy: bool,
    pub timestamp: SystemTime,
    /// The raw record, kept for settlement
    pub raw: MatchReceiptRecord,
}

impl MatchReceipt {
    /// Map a raw match receipt to its display form. Pure.
    pub fn from_record(record: &MatchReceiptRecord) -> Result<Self> {
        Ok(MatchReceipt {
            match_id: record.match_id.clone(),
            order_id: record.order_id.clone(),
            counterparty_order_id: record.counterparty_order_id.clone(),
            amount_filled: from_scaled(record.amount_filled)?,
            execution_price: from_scaled(record.execution_price)?,
            is_buy: record.is_buy,
            timestamp: system_time_from_secs(record.timestamp)?,
            raw: record.clone(),
        })
    }
}

// ============================================================================
// SettlementReceipt
// ============================================================================

/// Raw settlement receipt record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettlementReceiptRecord {
    pub owner: String,
    /// Match identifier this settlement closes (field literal)
    pub match_id: String,
    /// Base asset delivered, scaled by 10^8
    pub base_amount: u128,
    /// Quote asset delivered, scaled by 10^8
    pub quote_amount: u128,
    /// Settlement time, unix seconds
    pub timestamp: u64,
    /// Record nonce (`_nonce` metadata, excluded from serialization)
    pub nonce: Option<String>,
}

impl SettlementReceiptRecord {
    /// Declared wire field order for the on-chain `SettlementReceipt` record.
    pub const SCHEMA: [&'static str; 5] =
        ["owner", "match_id", "base_amount", "quote_amount", "timestamp"];

    /// Render the record as a transition input, in schema order.
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
            "match_id" => literal::field_lit(&self.match_id),
            "base_amount" => literal::u128_lit(self.base_amount),
            "quote_amount" => literal::u128_lit(self.quote_amount),
            "timestamp" => literal::u64_lit(self.timestamp),
            other => unreachable!("field `{other}` is not in the settlement-receipt schema"),
        }
    }

    /// Decode a settlement receipt record from its wire string.
    pub fn from_wire(raw: &str) -> Result<Self> {
        let rec = RawRecord::parse(raw)?;
        Ok(SettlementReceiptRecord {
            owner: rec.require("owner", raw)?.to_string(),
            match_id: rec.require("match_id", raw)?.to_string(),
            base_amount: literal::parse_u128(rec.require("base_amount", raw)?)?,
            quote_amount: literal::parse_u128(rec.require("quote_amount", raw)?)?,
            timestamp: literal::parse_u64(rec.require("timestamp", raw)?)?,
            nonce: rec.get("_nonce").map(str::to_string),
        })
    }
}

/// Display-ready settlement receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementReceipt {
    pub match_id: String,
    pub base_amount: Decimal,
    pub quote_amount: Decimal,
    pub timestamp: SystemTime,
    pub raw: SettlementReceiptRecord,
}

impl SettlementReceipt {
    /// Map a raw settlement receipt to its display form. Pure.
    pub fn from_record(record: &SettlementReceiptRecord) -> Result<Self> {
        Ok(SettlementReceipt {
            match_id: record.match_id.clone(),
            base_amount: from_scaled(record.base_amount)?,
            quote_amount: from_scaled(record.quote_amount)?,
            timestamp: system_time_from_secs(record.timestamp)?,
            raw: record.clone(),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
