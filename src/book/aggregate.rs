//! Order-book aggregation.
//!
//! ## Algorithm
//!
//! 1. Filter to orders with `remaining > 0` (terminal orders never
//!    contribute depth).
//! 2. Bucket each order by its price rounded to 2 display decimals.
//!    Identical rounded prices always merge into one level.
//! 3. Per side, accumulate `size += remaining` and `order_count += 1`.
//! 4. Sort buckets: bids descending, asks ascending (best price first on
//!    both sides).
//! 5. Walk each side accumulating cumulative notional
//!    `total += size * price`.
//! 6. Spread = `best_ask - best_bid`, percent relative to the best bid;
//!    both zero when either side is empty.
//!
//! The function is pure: the output ordering is a deterministic function of
//! the input set, never of call order, and re-aggregating the same snapshot
//! yields an identical view. Concurrent callers aggregating different
//! snapshots share no state.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::book::level::{BookLevel, OrderBookView, Spread};
use crate::types::{Order, Side};

/// Display precision for price buckets, in decimal places.
pub const PRICE_DISPLAY_DECIMALS: u32 = 2;

#[derive(Default)]
struct Bucket {
    size: Decimal,
    order_count: usize,
}

/// Aggregate a caller's open orders into a display-ready book.
pub fn aggregate(orders: &[Order]) -> OrderBookView {
    let mut bids: BTreeMap<Decimal, Bucket> = BTreeMap::new();
    let mut asks: BTreeMap<Decimal, Bucket> = BTreeMap::new();

    for order in orders.iter().filter(|o| o.remaining > Decimal::ZERO) {
        let price = order
            .price
            .round_dp_with_strategy(PRICE_DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        let side = match order.side {
            Side::Buy => &mut bids,
            Side::Sell => &mut asks,
        };
        let bucket = side.entry(price).or_default();
        bucket.size += order.remaining;
        bucket.order_count += 1;
    }

    // BTreeMap iterates ascending; bids walk in reverse for best-bid-first.
    let bids = build_side(bids.into_iter().rev());
    let asks = build_side(asks.into_iter());
    let spread = spread_of(&bids, &asks);

    OrderBookView { bids, asks, spread }
}

/// Walk sorted buckets accumulating the cumulative notional.
fn build_side(buckets: impl Iterator<Item = (Decimal, Bucket)>) -> Vec<BookLevel> {
    let mut total = Decimal::ZERO;
    buckets
        .map(|(price, bucket)| {
            total += bucket.size * price;
            BookLevel {
                price,
                size: bucket.size,
                total,
                order_count: bucket.order_count,
                is_dark: false,
            }
        })
        .collect()
}

fn spread_of(bids: &[BookLevel], asks: &[BookLevel]) -> Spread {
    let (Some(best_bid), Some(best_ask)) = (bids.first(), asks.first()) else {
        return Spread::default();
    };
    let value = best_ask.price - best_bid.price;
    let percent = if best_bid.price.is_zero() {
        Decimal::ZERO
    } else {
        value / best_bid.price * Decimal::ONE_HUNDRED
    };
    Spread { value, percent }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::time::UNIX_EPOCH;

    use crate::types::OrderRecord;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn order(side: Side, price: &str, amount: &str, filled: &str) -> Order {
        let amount = dec(amount);
        let filled = dec(filled);
        Order {
            order_id: "1field".into(),
            owner: "aleo1me".into(),
            side,
            base_asset: "3field".into(),
            quote_asset: "1field".into(),
            amount,
            price: dec(price),
            filled,
            remaining: (amount - filled).max(Decimal::ZERO),
            percent_filled: Decimal::ZERO,
            created_at: UNIX_EPOCH,
            raw: OrderRecord::default(),
        }
    }

    #[test]
    fn test_same_bucket_merges() {
        // remaining 5 and 3 at prices rounding to 100.00 -> one level
        let orders = vec![
            order(Side::Buy, "100.001", "5", "0"),
            order(Side::Buy, "99.999", "3", "0"),
        ];
        let book = aggregate(&orders);

        assert_eq!(book.bids.len(), 1);
        let level = &book.bids[0];
        assert_eq!(level.price, dec("100.00"));
        assert_eq!(level.size, dec("8"));
        assert_eq!(level.order_count, 2);
    }

    #[test]
    fn test_filled_orders_excluded() {
        let orders = vec![
            order(Side::Buy, "100", "5", "5"),  // terminal, no depth
            order(Side::Buy, "100", "2", "1"),
        ];
        let book = aggregate(&orders);
        assert_eq!(book.bids.len(), 1);
        assert_eq!(book.bids[0].size, dec("1"));
        assert_eq!(book.bids[0].order_count, 1);
    }

    #[test]
    fn test_sort_order() {
        let orders = vec![
            order(Side::Buy, "98", "1", "0"),
            order(Side::Buy, "100", "1", "0"),
            order(Side::Buy, "99", "1", "0"),
            order(Side::Sell, "103", "1", "0"),
            order(Side::Sell, "101", "1", "0"),
            order(Side::Sell, "102", "1", "0"),
        ];
        let book = aggregate(&orders);

        let bid_prices: Vec<_> = book.bids.iter().map(|l| l.price).collect();
        assert_eq!(bid_prices, vec![dec("100"), dec("99"), dec("98")]);
        let ask_prices: Vec<_> = book.asks.iter().map(|l| l.price).collect();
        assert_eq!(ask_prices, vec![dec("101"), dec("102"), dec("103")]);

        assert_eq!(book.best_bid().unwrap().price, dec("100"));
        assert_eq!(book.best_ask().unwrap().price, dec("101"));
    }

    #[test]
    fn test_cumulative_total_non_decreasing() {
        let orders = vec![
            order(Side::Sell, "101", "2", "0"),
            order(Side::Sell, "102", "3", "0"),
            order(Side::Sell, "103", "1", "0"),
        ];
        let book = aggregate(&orders);

        assert_eq!(book.asks[0].total, dec("202"));            // 2 * 101
        assert_eq!(book.asks[1].total, dec("508"));            // + 3 * 102
        assert_eq!(book.asks[2].total, dec("611"));            // + 1 * 103
        for pair in book.asks.windows(2) {
            assert!(pair[1].total >= pair[0].total);
        }
    }

    #[test]
    fn test_conservation_per_side() {
        let orders = vec![
            order(Side::Buy, "100.004", "5", "1"),
            order(Side::Buy, "100.001", "3", "0.5"),
            order(Side::Buy, "95", "2", "0"),
            order(Side::Sell, "105", "4", "4"), // terminal
            order(Side::Sell, "106", "7", "2"),
        ];
        let book = aggregate(&orders);

        let bid_depth: Decimal = book.bids.iter().map(|l| l.size).sum();
        let ask_depth: Decimal = book.asks.iter().map(|l| l.size).sum();
        let open_bid: Decimal = orders
            .iter()
            .filter(|o| o.side == Side::Buy && o.remaining > Decimal::ZERO)
            .map(|o| o.remaining)
            .sum();
        let open_ask: Decimal = orders
            .iter()
            .filter(|o| o.side == Side::Sell && o.remaining > Decimal::ZERO)
            .map(|o| o.remaining)
            .sum();

        assert_eq!(bid_depth, open_bid);
        assert_eq!(ask_depth, open_ask);
    }

    #[test]
    fn test_spread() {
        let orders = vec![
            order(Side::Buy, "99", "1", "0"),
            order(Side::Sell, "101", "1", "0"),
        ];
        let book = aggregate(&orders);
        assert_eq!(book.spread.value, dec("2"));
        // 2 / 99 * 100 ≈ 2.0202...
        assert!(book.spread.percent > dec("2.02"));
        assert!(book.spread.percent < dec("2.03"));
    }

    #[test]
    fn test_spread_zero_when_one_sided() {
        let bids_only = aggregate(&[order(Side::Buy, "99", "1", "0")]);
        assert_eq!(bids_only.spread, Spread::default());

        let empty = aggregate(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.spread, Spread::default());
    }

    #[test]
    fn test_deterministic_reaggregation() {
        let orders = vec![
            order(Side::Buy, "100.12", "5", "1"),
            order(Side::Sell, "101.99", "2", "0"),
            order(Side::Buy, "100.12", "1", "0"),
        ];
        assert_eq!(aggregate(&orders), aggregate(&orders));
    }
}
