//! Token records and their display form.

use rust_decimal::Decimal;

use crate::errors::Result;
use crate::types::scaled::from_scaled;
use crate::wire::literal;
use crate::wire::RawRecord;

/// A token record: owner-scoped private balance of one asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenRecord {
    /// Owning address
    pub owner: String,
    /// Asset identifier (field literal)
    pub asset_id: String,
    /// Balance, scaled by 10^8
    pub amount: u128,
    /// Record nonce (`_nonce` metadata, excluded from serialization)
    pub nonce: Option<String>,
}

impl TokenRecord {
    /// Declared wire field order for the on-chain `Token` record.
    pub const SCHEMA: [&'static str; 3] = ["owner", "asset_id", "amount"];

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
            "asset_id" => literal::field_lit(&self.asset_id),
            "amount" => literal::u128_lit(self.amount),
            other => unreachable!("field `{other}` is not in the token schema"),
        }
    }

    /// Decode a token record from its wire string.
    pub fn from_wire(raw: &str) -> Result<Self> {
        let rec = RawRecord::parse(raw)?;
        Ok(TokenRecord {
            owner: rec.require("owner", raw)?.to_string(),
            asset_id: rec.require("asset_id", raw)?.to_string(),
            amount: literal::parse_u128(rec.require("amount", raw)?)?,
            nonce: rec.get("_nonce").map(str::to_string),
        })
    }
}

/// Display-ready token balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub owner: String,
    pub asset_id: String,
    /// Decimal balance
    pub amount: Decimal,
    /// The scaled wire integer, unconverted
    pub raw_amount: u128,
    /// The raw record, kept for re-submission (transfer/split/combine)
    pub raw: TokenRecord,
}

impl Token {
    /// Map a raw token record to its display form. Pure.
    pub fn from_record(record: &TokenRecord) -> Result<Self> {
        Ok(Token {
            owner: record.owner.clone(),
            asset_id: record.asset_id.clone(),
            amount: from_scaled(record.amount)?,
            raw_amount: record.amount,
            raw: record.clone(),
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_wire_form() {
        let record = TokenRecord {
            owner: "addr1".into(),
            asset_id: "1field".into(),
            amount: 100_000_000,
            nonce: Some("5group".into()),
        };
        assert_eq!(
            record.to_wire(),
            "{ owner: addr1, asset_id: 1field, amount: 100000000u128 }"
        );
    }

    #[test]
    fn test_token_wire_roundtrip() {
        let record = TokenRecord {
            owner: "aleo1abc".into(),
            asset_id: "3field".into(),
            amount: 42,
            nonce: None,
        };
        assert_eq!(TokenRecord::from_wire(&record.to_wire()).unwrap(), record);
    }

    #[test]
    fn test_token_display() {
        let record = TokenRecord {
            owner: "aleo1abc".into(),
            asset_id: "2field".into(),
            amount: 150_000_000,
            nonce: None,
        };
        let token = Token::from_record(&record).unwrap();
        assert_eq!(token.amount, Decimal::new(15, 1));
        assert_eq!(token.raw_amount, 150_000_000);
        assert_eq!(token.raw, record);
    }
}
