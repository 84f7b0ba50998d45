//! Demo and test fixtures.
//!
//! Deterministic under a seeded RNG: every generator takes `&mut impl Rng`
//! so tests can pass a `ChaCha8Rng` with a fixed seed and binaries can pass
//! `thread_rng()`. Fixture orders are real [`OrderRecord`]s mapped through
//! the usual display path, so they exercise the same code the live flow
//! does.

use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::time::{Duration, SystemTime};

use crate::book::{aggregate, OrderBookView};
use crate::types::asset::{DEFAULT_BASE_ASSET, DEFAULT_QUOTE_ASSET};
use crate::types::scaled::to_scaled;
use crate::types::{Order, OrderRecord, Side, TradeEntry};

const FIXTURE_OWNER: &str = "aleo1fixture";

fn dec(rng: &mut impl Rng, lo: f64, hi: f64) -> Decimal {
    let v = rng.gen_range(lo..hi);
    Decimal::from_f64(v).unwrap_or_default().round_dp(4)
}

/// Synthetic open orders around `base_price`. Buys sit below it, sells
/// above, partially filled up to half their size.
pub fn mock_orders(
    rng: &mut impl Rng,
    count: usize,
    owner: &str,
    base_price: Decimal,
) -> Vec<Order> {
    let mut orders = Vec::with_capacity(count);
    let now = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    for i in 0..count {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let offset = dec(rng, 0.0, 50.0);
        let price = match side {
            Side::Buy => (base_price - offset).max(Decimal::ONE),
            Side::Sell => base_price + offset,
        };
        let amount = dec(rng, 0.1, 10.0);
        let filled = amount * dec(rng, 0.0, 0.5);

        let record = OrderRecord {
            owner: owner.to_string(),
            order_id: format!("{}field", 1000 + i),
            side: side.to_u8(),
            base_asset: DEFAULT_BASE_ASSET.to_string(),
            quote_asset: DEFAULT_QUOTE_ASSET.to_string(),
            amount: scaled(amount),
            price: scaled(price),
            salt: format!("{}scalar", rng.gen::<u64>()),
            filled: scaled(filled),
            created_at: now.saturating_sub(rng.gen_range(0..86_400)),
            nonce: None,
        };
        // Fixture records are always in-domain, mapping cannot fail.
        if let Ok(order) = Order::from_record(&record) {
            orders.push(order);
        }
    }
    orders
}

/// A populated two-sided book: `levels` orders per side spaced by
/// `spread` around `mid`, aggregated through the real pipeline.
pub fn mock_order_book(
    rng: &mut impl Rng,
    mid: Decimal,
    spread: Decimal,
    levels: usize,
) -> OrderBookView {
    let mut orders = Vec::with_capacity(levels * 2);
    let now = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    for i in 0..levels {
        let step = Decimal::new(5, 1) * Decimal::from(i as u64);
        for (side, price) in [
            (Side::Buy, mid - spread - step - dec(rng, 0.0, 0.2)),
            (Side::Sell, mid + spread + step + dec(rng, 0.0, 0.2)),
        ] {
            let record = OrderRecord {
                owner: FIXTURE_OWNER.to_string(),
                order_id: format!("{}field", 2000 + i * 2 + side.to_u8() as usize),
                side: side.to_u8(),
                base_asset: DEFAULT_BASE_ASSET.to_string(),
                quote_asset: DEFAULT_QUOTE_ASSET.to_string(),
                amount: scaled(dec(rng, 0.1, 10.0)),
                price: scaled(price.max(Decimal::ONE)),
                salt: format!("{}scalar", rng.gen::<u64>()),
                filled: 0,
                created_at: now,
                nonce: None,
            };
            if let Ok(order) = Order::from_record(&record) {
                orders.push(order);
            }
        }
    }
    aggregate(&orders)
}

/// Synthetic trade history, most recent first, spaced thirty seconds apart.
pub fn mock_trades(rng: &mut impl Rng, count: usize, base_price: Decimal) -> Vec<TradeEntry> {
    let now = SystemTime::now();
    (0..count)
        .map(|i| {
            let drift = dec(rng, -5.0, 5.0);
            TradeEntry {
                id: format!("trade-{i}"),
                match_id: format!("match-{i}"),
                price: (base_price + drift).max(Decimal::ONE),
                amount: dec(rng, 0.01, 5.0),
                side: if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell },
                timestamp: now - Duration::from_secs(i as u64 * 30),
                is_mine: rng.gen_bool(0.1),
            }
        })
        .collect()
}

fn scaled(value: Decimal) -> u128 {
    // Generators only emit non-negative in-range quantities; a panic here
    // means a generator change broke that invariant.
    to_scaled(value).expect("fixture quantity outside the codec domain")
}
