//! Obscura Core - Demo Walkthrough
//!
//! Exercises the client pipeline end to end without a network: builds
//! entry-point inputs, runs `place_order` through the facade against an
//! in-process engine, parses the resulting record, and aggregates a
//! seeded order set into a displayable book.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

use obscura_core::book::aggregate;
use obscura_core::fixtures::mock_orders;
use obscura_core::service::{
    DarkpoolService, Executed, ExecutionEngine, ExecutionMode, PlaceOrderInput,
};
use obscura_core::types::asset::{DEFAULT_BASE_ASSET, DEFAULT_QUOTE_ASSET};
use obscura_core::{DarkpoolError, Result, Side};

/// Simulates the darkpool program in process: `place_order` mints a fresh
/// order record straight from its inputs.
struct DemoEngine;

#[async_trait]
impl ExecutionEngine for DemoEngine {
    async fn local_execute(
        &self,
        _program: &str,
        function: &str,
        inputs: &[String],
    ) -> Result<Vec<String>> {
        match function {
            "place_order" => Ok(vec![format!(
                "{{ owner: aleo1demo.private, order_id: 7field.private, \
                 side: {}.private, base_asset: {}.private, quote_asset: {}.private, \
                 amount: {}.private, price: {}.private, salt: {}.private, \
                 filled: 0u128.private, created_at: {}.private }}",
                inputs[0], inputs[1], inputs[2], inputs[3], inputs[4], inputs[5], inputs[6]
            )]),
            other => Err(DarkpoolError::Execution(format!(
                "demo engine does not simulate {other}"
            ))),
        }
    }

    async fn network_execute(
        &self,
        _program_id: &str,
        _function: &str,
        _inputs: &[String],
        _signing_key: &str,
        _fee: Option<f64>,
    ) -> Result<String> {
        Ok("at1demo".to_string())
    }

    async fn read_mapping(
        &self,
        _program_id: &str,
        _mapping: &str,
        _key: &str,
    ) -> Result<Option<String>> {
        Ok(Some("true".to_string()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    println!("===========================================");
    println!("  Obscura Core - Darkpool Client Layer");
    println!("===========================================");
    println!();

    let service = DarkpoolService::new(DemoEngine);

    // Place an order through the full local path: input assembly, engine
    // call, record parse, display mapping.
    let placed = service
        .place_order(
            &PlaceOrderInput {
                side: Side::Buy,
                base_asset: DEFAULT_BASE_ASSET.to_string(),
                quote_asset: DEFAULT_QUOTE_ASSET.to_string(),
                amount: Decimal::new(15, 1),
                price: Decimal::new(2000, 0),
                salt: None,
                timestamp: None,
            },
            ExecutionMode::Local {
                program: "program obscuradarkpool.aleo".to_string(),
            },
        )
        .await?;

    match placed {
        Executed::Local(order) => {
            println!("placed order {}:", order.order_id);
            println!("  side:      {:?}", order.side);
            println!("  amount:    {}", order.amount);
            println!("  price:     {}", order.price);
            println!("  remaining: {}", order.remaining);
            println!("  filled:    {}%", order.percent_filled);
        }
        Executed::Submitted(tx_id) => println!("submitted: {tx_id}"),
    }
    println!();

    let active = service.is_order_active("7field").await?;
    println!("order_active[7field] = {active}");
    println!();

    // Book aggregation over seeded fixtures.
    let mut rng = StdRng::seed_from_u64(7);
    let orders = mock_orders(&mut rng, 40, "aleo1demo", Decimal::new(2000, 0));
    let book = aggregate(&orders);
    println!(
        "aggregated book: {} bid levels, {} ask levels",
        book.bids.len(),
        book.asks.len()
    );
    if let (Some(bid), Some(ask)) = (book.best_bid(), book.best_ask()) {
        println!("  best bid: {} x {}", bid.price, bid.size);
        println!("  best ask: {} x {}", ask.price, ask.size);
        println!(
            "  spread:   {} ({}%)",
            book.spread.value, book.spread.percent
        );
    }

    Ok(())
}
