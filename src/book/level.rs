//! Order-book view types.

use rust_decimal::Decimal;

/// One aggregated price point on one side of the book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookLevel {
    /// Price rounded to the display precision (2 decimals)
    pub price: Decimal,
    /// Total remaining size resting at this price
    pub size: Decimal,
    /// Cumulative notional (`size * price`) up to and including this level,
    /// walking from the best price outward. Monotonically non-decreasing.
    pub total: Decimal,
    /// Number of distinct orders contributing to the level
    pub order_count: usize,
    /// Marks hidden (dark) liquidity. Always `false` for a caller's own
    /// orders; owners see their own liquidity.
    pub is_dark: bool,
}

/// Best-bid/best-ask gap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spread {
    /// `best_ask - best_bid`; zero when either side is empty
    pub value: Decimal,
    /// `value / best_bid * 100`; zero when either side is empty
    pub percent: Decimal,
}

/// A display-ready order book.
///
/// Bids are strictly descending by price (best bid first); asks strictly
/// ascending (best ask first).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderBookView {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
    pub spread: Spread,
}

impl OrderBookView {
    /// The highest resting buy price, if any.
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    /// The lowest resting sell price, if any. Asks are sorted ascending, so
    /// this is always the first element, never the last.
    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Whether both sides are empty.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
