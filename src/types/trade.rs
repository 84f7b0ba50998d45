//! Trade history entries for display.

use std::time::SystemTime;

use rust_decimal::Decimal;

use crate::types::order::Side;
use crate::types::receipt::MatchReceipt;

/// One row in the trade history view.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeEntry {
    pub id: String,
    pub match_id: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub side: Side,
    pub timestamp: SystemTime,
    /// Whether one of the caller's own orders was party to the trade
    pub is_mine: bool,
}

impl TradeEntry {
    /// Build a history entry from a match receipt.
    ///
    /// Receipts held by the caller are their own trades by definition.
    pub fn from_receipt(receipt: &MatchReceipt) -> Self {
        TradeEntry {
            id: format!("{}-{}", receipt.match_id, receipt.order_id),
            match_id: receipt.match_id.clone(),
            price: receipt.execution_price,
            amount: receipt.amount_filled,
            side: if receipt.is_buy { Side::Buy } else { Side::Sell },
            timestamp: receipt.timestamp,
            is_mine: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::receipt::MatchReceiptRecord;

    #[test]
    fn test_entry_from_receipt() {
        let record = MatchReceiptRecord {
            owner: "aleo1me".into(),
            match_id: "11field".into(),
            order_id: "7field".into(),
            counterparty_order_id: "8field".into(),
            amount_filled: 150_000_000,
            execution_price: 200_000_000_000,
            is_buy: false,
            timestamp: 1_700_000_000,
            nonce: None,
        };
        let entry = TradeEntry::from_receipt(&MatchReceipt::from_record(&record).unwrap());
        assert_eq!(entry.id, "11field-7field");
        assert_eq!(entry.side, Side::Sell);
        assert_eq!(entry.amount, Decimal::new(15, 1));
        assert!(entry.is_mine);
    }
}
