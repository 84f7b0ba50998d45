//! Asset registry for the supported trading pairs.
//!
//! Asset identifiers are field literals on the wire. The registry mirrors
//! the deployed program's asset table; USDC is the quote asset for every
//! listed pair.

/// A tradeable or quote asset known to the darkpool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Field-literal identifier, e.g. `"2field"`
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Quote assets price the others and are not directly tradeable
    pub is_quote: bool,
}

pub const USDC: Asset = Asset {
    id: "1field",
    symbol: "USDC",
    name: "USD Coin",
    is_quote: true,
};
pub const BTC: Asset = Asset {
    id: "2field",
    symbol: "BTC",
    name: "Bitcoin",
    is_quote: false,
};
pub const ETH: Asset = Asset {
    id: "3field",
    symbol: "ETH",
    name: "Ethereum",
    is_quote: false,
};
pub const ALEO: Asset = Asset {
    id: "4field",
    symbol: "ALEO",
    name: "Aleo",
    is_quote: false,
};

/// Default trading pair: ETH priced in USDC.
pub const DEFAULT_BASE_ASSET: &str = ETH.id;
pub const DEFAULT_QUOTE_ASSET: &str = USDC.id;

/// All assets known to the registry.
pub fn all() -> &'static [Asset] {
    &[USDC, BTC, ETH, ALEO]
}

/// Base assets available for trading (non-quote).
pub fn tradeable() -> impl Iterator<Item = &'static Asset> {
    all().iter().filter(|a| !a.is_quote)
}

/// Resolve an asset id to its symbol, accepting bare ids (`"2"`) as well as
/// tagged ones (`"2field"`).
pub fn symbol_for(asset_id: &str) -> Option<&'static str> {
    let normalized = if asset_id.ends_with("field") {
        asset_id.to_string()
    } else {
        format!("{asset_id}field")
    };
    all()
        .iter()
        .find(|a| a.id == normalized)
        .map(|a| a.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(symbol_for("1field"), Some("USDC"));
        assert_eq!(symbol_for("2"), Some("BTC"));
        assert_eq!(symbol_for("9field"), None);
    }

    #[test]
    fn test_tradeable_excludes_quote() {
        assert!(tradeable().all(|a| !a.is_quote));
        assert_eq!(tradeable().count(), 3);
    }

    #[test]
    fn test_default_pair() {
        assert_eq!(DEFAULT_BASE_ASSET, "3field");
        assert_eq!(DEFAULT_QUOTE_ASSET, "1field");
    }
}
