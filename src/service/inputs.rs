//! Transaction-input builders.
//!
//! Each darkpool entry point takes a positional argument array; the builders
//! here turn structured Rust values into that array. Argument order is part
//! of the program ABI and must not drift, so every builder lays its vector
//! out in one place, top to bottom, in call order.
//!
//! Amounts and prices arrive as display decimals and leave as scaled `u128`
//! literals. Record arguments are serialized through their own `to_wire`.

use rand::Rng;
use rust_decimal::Decimal;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::Result;
use crate::types::scaled::to_scaled;
use crate::types::{MatchReceiptRecord, OrderRecord, Side, TokenRecord};
use crate::wire::literal::{address_lit, field_lit, scalar_lit, u128_lit, u64_lit, u8_lit};

// ============================================================================
// Input structs
// ============================================================================

/// Arguments for `place_order`.
#[derive(Debug, Clone)]
pub struct PlaceOrderInput {
    pub side: Side,
    pub base_asset: String,
    pub quote_asset: String,
    /// Base-asset amount, display units.
    pub amount: Decimal,
    /// Quote per base, display units.
    pub price: Decimal,
    /// Blinding salt; freshly generated when absent.
    pub salt: Option<String>,
    /// Unix seconds; current time when absent.
    pub timestamp: Option<u64>,
}

/// Arguments for `cancel_order`.
#[derive(Debug, Clone)]
pub struct CancelOrderInput {
    pub order: OrderRecord,
}

/// Arguments for `match_orders`.
#[derive(Debug, Clone)]
pub struct MatchOrdersInput {
    pub buy_order: OrderRecord,
    pub sell_order: OrderRecord,
    /// Agreed execution price, display units.
    pub execution_price: Decimal,
    /// Matched base amount, display units.
    pub match_amount: Decimal,
    pub timestamp: Option<u64>,
}

/// Arguments for `settle_trade`.
#[derive(Debug, Clone)]
pub struct SettleTradeInput {
    pub buyer_receipt: MatchReceiptRecord,
    pub seller_receipt: MatchReceiptRecord,
    /// Buyer's quote-asset token funding the purchase.
    pub buyer_quote_token: TokenRecord,
    /// Seller's base-asset token funding the sale.
    pub seller_base_token: TokenRecord,
    pub base_asset: String,
    pub quote_asset: String,
    pub timestamp: Option<u64>,
}

/// Arguments for `mint_token`.
#[derive(Debug, Clone)]
pub struct MintTokenInput {
    pub receiver: String,
    pub asset_id: String,
    /// Display units.
    pub amount: Decimal,
}

/// Arguments for `transfer_token`.
#[derive(Debug, Clone)]
pub struct TransferTokenInput {
    pub token: TokenRecord,
    pub receiver: String,
    /// Display units.
    pub amount: Decimal,
}

/// Arguments for `split_token`.
#[derive(Debug, Clone)]
pub struct SplitTokenInput {
    pub token: TokenRecord,
    /// First piece, display units. The program emits the remainder as the
    /// second piece.
    pub amount: Decimal,
}

/// Arguments for `combine_tokens`.
#[derive(Debug, Clone)]
pub struct CombineTokensInput {
    pub first: TokenRecord,
    pub second: TokenRecord,
}

// ============================================================================
// Builders
// ============================================================================

/// `place_order(side, base, quote, amount, price, salt, timestamp)`
pub fn place_order_inputs(input: &PlaceOrderInput) -> Result<Vec<String>> {
    let salt = input.salt.clone().unwrap_or_else(generate_salt);
    let timestamp = input.timestamp.unwrap_or_else(unix_timestamp);
    Ok(vec![
        u8_lit(input.side.to_u8()),
        field_lit(&input.base_asset),
        field_lit(&input.quote_asset),
        u128_lit(to_scaled(input.amount)?),
        u128_lit(to_scaled(input.price)?),
        scalar_lit(&salt),
        u64_lit(timestamp),
    ])
}

/// `cancel_order(order)`
pub fn cancel_order_inputs(input: &CancelOrderInput) -> Result<Vec<String>> {
    Ok(vec![input.order.to_wire()])
}

/// `match_orders(buy_order, sell_order, execution_price, match_amount, timestamp)`
pub fn match_orders_inputs(input: &MatchOrdersInput) -> Result<Vec<String>> {
    let timestamp = input.timestamp.unwrap_or_else(unix_timestamp);
    Ok(vec![
        input.buy_order.to_wire(),
        input.sell_order.to_wire(),
        u128_lit(to_scaled(input.execution_price)?),
        u128_lit(to_scaled(input.match_amount)?),
        u64_lit(timestamp),
    ])
}

/// `settle_trade(buyer_receipt, seller_receipt, buyer_quote_token,
/// seller_base_token, base_asset, quote_asset, timestamp)`
pub fn settle_trade_inputs(input: &SettleTradeInput) -> Result<Vec<String>> {
    let timestamp = input.timestamp.unwrap_or_else(unix_timestamp);
    Ok(vec![
        input.buyer_receipt.to_wire(),
        input.seller_receipt.to_wire(),
        input.buyer_quote_token.to_wire(),
        input.seller_base_token.to_wire(),
        field_lit(&input.base_asset),
        field_lit(&input.quote_asset),
        u64_lit(timestamp),
    ])
}

/// `mint_token(receiver, asset_id, amount)`
pub fn mint_token_inputs(input: &MintTokenInput) -> Result<Vec<String>> {
    Ok(vec![
        address_lit(&input.receiver),
        field_lit(&input.asset_id),
        u128_lit(to_scaled(input.amount)?),
    ])
}

/// `transfer_token(token, receiver, amount)`
pub fn transfer_token_inputs(input: &TransferTokenInput) -> Result<Vec<String>> {
    Ok(vec![
        input.token.to_wire(),
        address_lit(&input.receiver),
        u128_lit(to_scaled(input.amount)?),
    ])
}

/// `split_token(token, amount)`
pub fn split_token_inputs(input: &SplitTokenInput) -> Result<Vec<String>> {
    Ok(vec![input.token.to_wire(), u128_lit(to_scaled(input.amount)?)])
}

/// `combine_tokens(first, second)`
pub fn combine_tokens_inputs(input: &CombineTokensInput) -> Result<Vec<String>> {
    Ok(vec![input.first.to_wire(), input.second.to_wire()])
}

// ============================================================================
// Defaults
// ============================================================================

/// Fresh blinding salt: 128 random bits rendered as a decimal string,
/// suitable for the scalar literal position.
pub fn generate_salt() -> String {
    let bytes: [u8; 16] = rand::thread_rng().gen();
    u128::from_be_bytes(bytes).to_string()
}

/// Current unix time in whole seconds.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token(asset_id: &str, amount: u128) -> TokenRecord {
        TokenRecord {
            owner: "aleo1trader".into(),
            asset_id: asset_id.into(),
            amount,
            nonce: None,
        }
    }

    fn sample_receipt(order_id: &str, is_buy: bool) -> MatchReceiptRecord {
        MatchReceiptRecord {
            owner: "aleo1trader".into(),
            match_id: "11field".into(),
            order_id: order_id.into(),
            counterparty_order_id: "99field".into(),
            amount_filled: 50_000_000,
            execution_price: 200_000_000_000,
            is_buy,
            timestamp: 1_700_000_100,
            nonce: None,
        }
    }

    fn sample_order() -> OrderRecord {
        OrderRecord {
            owner: "aleo1buyer".into(),
            order_id: "77field".into(),
            side: 0,
            base_asset: "3field".into(),
            quote_asset: "1field".into(),
            amount: 150_000_000,
            price: 200_000_000_000,
            salt: "42scalar".into(),
            filled: 0,
            created_at: 1_700_000_000,
            nonce: None,
        }
    }

    #[test]
    fn place_order_positions() {
        let inputs = place_order_inputs(&PlaceOrderInput {
            side: Side::Buy,
            base_asset: "2field".into(),
            quote_asset: "1field".into(),
            amount: Decimal::new(15, 1),
            price: Decimal::new(2000, 0),
            salt: Some("12345".into()),
            timestamp: Some(1_700_000_000),
        })
        .unwrap();

        assert_eq!(
            inputs,
            vec![
                "0u8".to_string(),
                "2field".to_string(),
                "1field".to_string(),
                "150000000u128".to_string(),
                "200000000000u128".to_string(),
                "12345scalar".to_string(),
                "1700000000u64".to_string(),
            ]
        );
    }

    #[test]
    fn place_order_defaults_salt_and_timestamp() {
        let inputs = place_order_inputs(&PlaceOrderInput {
            side: Side::Sell,
            base_asset: "3field".into(),
            quote_asset: "1field".into(),
            amount: Decimal::ONE,
            price: Decimal::new(100, 0),
            salt: None,
            timestamp: None,
        })
        .unwrap();

        assert!(inputs[5].ends_with("scalar"));
        assert!(inputs[6].ends_with("u64"));
        // Salt body is a plain decimal number.
        let body = inputs[5].strip_suffix("scalar").unwrap();
        assert!(body.parse::<u128>().is_ok());
    }

    #[test]
    fn fresh_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn match_orders_positions() {
        let buy = sample_order();
        let mut sell = sample_order();
        sell.side = 1;

        let inputs = match_orders_inputs(&MatchOrdersInput {
            buy_order: buy.clone(),
            sell_order: sell.clone(),
            execution_price: Decimal::new(2000, 0),
            match_amount: Decimal::new(5, 1),
            timestamp: Some(1_700_000_100),
        })
        .unwrap();

        assert_eq!(inputs.len(), 5);
        assert_eq!(inputs[0], buy.to_wire());
        assert_eq!(inputs[1], sell.to_wire());
        assert_eq!(inputs[2], "200000000000u128");
        assert_eq!(inputs[3], "50000000u128");
        assert_eq!(inputs[4], "1700000100u64");
    }

    #[test]
    fn settle_trade_positions() {
        let buyer_receipt = sample_receipt("1field", true);
        let seller_receipt = sample_receipt("2field", false);
        let buyer_quote_token = sample_token("1field", 200_000_000_000);
        let seller_base_token = sample_token("3field", 150_000_000);

        let inputs = settle_trade_inputs(&SettleTradeInput {
            buyer_receipt: buyer_receipt.clone(),
            seller_receipt: seller_receipt.clone(),
            buyer_quote_token: buyer_quote_token.clone(),
            seller_base_token: seller_base_token.clone(),
            base_asset: "3field".into(),
            quote_asset: "1field".into(),
            timestamp: Some(1_700_000_200),
        })
        .unwrap();

        // Four records, both asset ids, then the timestamp.
        assert_eq!(inputs.len(), 7);
        assert_eq!(inputs[0], buyer_receipt.to_wire());
        assert_eq!(inputs[1], seller_receipt.to_wire());
        assert_eq!(inputs[2], buyer_quote_token.to_wire());
        assert_eq!(inputs[3], seller_base_token.to_wire());
        assert_eq!(inputs[4], "3field");
        assert_eq!(inputs[5], "1field");
        assert_eq!(inputs[6], "1700000200u64");
    }

    #[test]
    fn transfer_token_positions() {
        let token = sample_token("3field", 150_000_000);
        let inputs = transfer_token_inputs(&TransferTokenInput {
            token: token.clone(),
            receiver: "aleo1receiver".into(),
            amount: Decimal::new(5, 1),
        })
        .unwrap();

        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs[0], token.to_wire());
        assert_eq!(inputs[1], "aleo1receiver");
        assert_eq!(inputs[2], "50000000u128");
    }

    #[test]
    fn split_token_positions() {
        let token = sample_token("3field", 150_000_000);
        let inputs = split_token_inputs(&SplitTokenInput {
            token: token.clone(),
            amount: Decimal::ONE,
        })
        .unwrap();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], token.to_wire());
        assert_eq!(inputs[1], "100000000u128");
    }

    #[test]
    fn combine_tokens_positions() {
        let first = sample_token("3field", 100_000_000);
        let second = sample_token("3field", 50_000_000);
        let inputs = combine_tokens_inputs(&CombineTokensInput {
            first: first.clone(),
            second: second.clone(),
        })
        .unwrap();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], first.to_wire());
        assert_eq!(inputs[1], second.to_wire());
    }

    #[test]
    fn cancel_order_positions() {
        let order = sample_order();
        let inputs = cancel_order_inputs(&CancelOrderInput {
            order: order.clone(),
        })
        .unwrap();
        assert_eq!(inputs, vec![order.to_wire()]);
    }

    #[test]
    fn mint_token_positions() {
        let inputs = mint_token_inputs(&MintTokenInput {
            receiver: "aleo1abc".into(),
            asset_id: "1field".into(),
            amount: Decimal::new(100, 0),
        })
        .unwrap();
        assert_eq!(inputs, vec!["aleo1abc", "1field", "10000000000u128"]);
    }

    #[test]
    fn negative_amount_rejected() {
        let err = mint_token_inputs(&MintTokenInput {
            receiver: "aleo1abc".into(),
            asset_id: "1field".into(),
            amount: Decimal::new(-1, 0),
        })
        .unwrap_err();
        assert!(err.to_string().contains("negative"));
    }
}
