//! Darkpool service facade.
//!
//! One async method per trading action. Each method builds the positional
//! input array, hands it to the injected [`ExecutionEngine`], and either
//! returns the network transaction id as-is or parses every local output
//! position into its typed result. The facade holds no state between calls;
//! the order lifecycle lives entirely in the caller's record set.
//!
//! Engine failures pass through unchanged. The facade never retries.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::errors::{DarkpoolError, Result};
use crate::service::engine::ExecutionEngine;
use crate::service::inputs::{
    cancel_order_inputs, combine_tokens_inputs, match_orders_inputs, mint_token_inputs,
    place_order_inputs, settle_trade_inputs, split_token_inputs, transfer_token_inputs,
    CancelOrderInput, CombineTokensInput, MatchOrdersInput, MintTokenInput, PlaceOrderInput,
    SettleTradeInput, SplitTokenInput, TransferTokenInput,
};
use crate::types::scaled::from_scaled_str;
use crate::types::{
    MatchReceipt, MatchReceiptRecord, Order, OrderRecord, SettlementReceipt,
    SettlementReceiptRecord, Token, TokenRecord,
};

/// On-chain program identifier.
pub const PROGRAM_ID: &str = "obscuradarkpool.aleo";

// ============================================================================
// Execution mode and results
// ============================================================================

/// How an action should run.
#[derive(Debug, Clone)]
pub enum ExecutionMode {
    /// Simulate against the full program source; outputs come back inline.
    Local { program: String },
    /// Submit to the network under a signing key; only a transaction id
    /// comes back, outputs become visible once the transaction confirms.
    Network {
        signing_key: String,
        fee: Option<f64>,
    },
}

/// Outcome of a dispatched action.
#[derive(Debug, Clone, PartialEq)]
pub enum Executed<T> {
    /// Local simulation finished and its outputs parsed.
    Local(T),
    /// Network submission accepted; holds the transaction id.
    Submitted(String),
}

impl<T> Executed<T> {
    /// The local result, if this was a local execution.
    pub fn local(self) -> Option<T> {
        match self {
            Executed::Local(v) => Some(v),
            Executed::Submitted(_) => None,
        }
    }

    /// The transaction id, if this was a network submission.
    pub fn tx_id(&self) -> Option<&str> {
        match self {
            Executed::Local(_) => None,
            Executed::Submitted(id) => Some(id),
        }
    }
}

/// Everything `match_orders` emits: a receipt per side plus the updated
/// order records that replace the consumed ones. The replacements carry the
/// new `filled` and are what the caller must hold for later cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub buyer_receipt: MatchReceipt,
    pub seller_receipt: MatchReceipt,
    pub updated_buy_order: Order,
    pub updated_sell_order: Order,
}

/// Everything `settle_trade` emits: a settlement per side, the tokens each
/// party received, and the change pieces from the funding tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleOutcome {
    pub buyer_settlement: SettlementReceipt,
    pub seller_settlement: SettlementReceipt,
    pub buyer_base_token: Token,
    pub seller_quote_token: Token,
    pub buyer_quote_change: Token,
    pub seller_base_change: Token,
}

/// Change and recipient pieces of a transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOutcome {
    pub sender: Token,
    pub receiver: Token,
}

/// Two pieces produced by a split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    pub first: Token,
    pub second: Token,
}

// ============================================================================
// Service
// ============================================================================

/// Async entry point for every darkpool action and mapping query.
///
/// Constructed over any [`ExecutionEngine`]; several independent instances
/// may coexist, each bound to its own engine and program id.
pub struct DarkpoolService<E: ExecutionEngine> {
    engine: E,
    program_id: String,
}

impl<E: ExecutionEngine> DarkpoolService<E> {
    pub fn new(engine: E) -> Self {
        Self::with_program_id(engine, PROGRAM_ID)
    }

    pub fn with_program_id(engine: E, program_id: &str) -> Self {
        Self {
            engine,
            program_id: program_id.to_string(),
        }
    }

    pub fn program_id(&self) -> &str {
        &self.program_id
    }

    /// Borrow the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    // ------------------------------------------------------------------
    // Trading actions
    // ------------------------------------------------------------------

    /// Place a new order. Local mode returns the freshly minted order.
    pub async fn place_order(
        &self,
        input: &PlaceOrderInput,
        mode: ExecutionMode,
    ) -> Result<Executed<Order>> {
        let inputs = place_order_inputs(input)?;
        info!(side = ?input.side, %input.amount, %input.price, "place_order");
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("place_order", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                let outputs = self
                    .engine
                    .local_execute(&program, "place_order", &inputs)
                    .await?;
                let raw = output_at(&outputs, 0, "place_order")?;
                let record = OrderRecord::from_wire(raw)?;
                Ok(Executed::Local(Order::from_record(&record)?))
            }
        }
    }

    /// Cancel an order, consuming its record. No output to parse.
    pub async fn cancel_order(
        &self,
        input: &CancelOrderInput,
        mode: ExecutionMode,
    ) -> Result<Executed<()>> {
        let inputs = cancel_order_inputs(input)?;
        info!(order_id = %input.order.order_id, "cancel_order");
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("cancel_order", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                self.engine
                    .local_execute(&program, "cancel_order", &inputs)
                    .await?;
                Ok(Executed::Local(()))
            }
        }
    }

    /// Match a buy order against a sell order. Local mode returns both
    /// match receipts and the replacement order records.
    pub async fn match_orders(
        &self,
        input: &MatchOrdersInput,
        mode: ExecutionMode,
    ) -> Result<Executed<MatchOutcome>> {
        let inputs = match_orders_inputs(input)?;
        info!(
            buy = %input.buy_order.order_id,
            sell = %input.sell_order.order_id,
            %input.execution_price,
            %input.match_amount,
            "match_orders"
        );
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("match_orders", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                let outputs = self
                    .engine
                    .local_execute(&program, "match_orders", &inputs)
                    .await?;
                let buyer = MatchReceiptRecord::from_wire(output_at(&outputs, 0, "match_orders")?)?;
                let seller =
                    MatchReceiptRecord::from_wire(output_at(&outputs, 1, "match_orders")?)?;
                let buy_order = OrderRecord::from_wire(output_at(&outputs, 2, "match_orders")?)?;
                let sell_order = OrderRecord::from_wire(output_at(&outputs, 3, "match_orders")?)?;
                Ok(Executed::Local(MatchOutcome {
                    buyer_receipt: MatchReceipt::from_record(&buyer)?,
                    seller_receipt: MatchReceipt::from_record(&seller)?,
                    updated_buy_order: Order::from_record(&buy_order)?,
                    updated_sell_order: Order::from_record(&sell_order)?,
                }))
            }
        }
    }

    /// Settle a matched trade by swapping funding tokens. Local mode
    /// returns both settlement receipts and all four token pieces.
    pub async fn settle_trade(
        &self,
        input: &SettleTradeInput,
        mode: ExecutionMode,
    ) -> Result<Executed<SettleOutcome>> {
        let inputs = settle_trade_inputs(input)?;
        info!(match_id = %input.buyer_receipt.match_id, "settle_trade");
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("settle_trade", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                let outputs = self
                    .engine
                    .local_execute(&program, "settle_trade", &inputs)
                    .await?;
                let buyer =
                    SettlementReceiptRecord::from_wire(output_at(&outputs, 0, "settle_trade")?)?;
                let seller =
                    SettlementReceiptRecord::from_wire(output_at(&outputs, 1, "settle_trade")?)?;
                let token_at = |i: usize| -> Result<Token> {
                    let record = TokenRecord::from_wire(output_at(&outputs, i, "settle_trade")?)?;
                    Token::from_record(&record)
                };
                Ok(Executed::Local(SettleOutcome {
                    buyer_settlement: SettlementReceipt::from_record(&buyer)?,
                    seller_settlement: SettlementReceipt::from_record(&seller)?,
                    buyer_base_token: token_at(2)?,
                    seller_quote_token: token_at(3)?,
                    buyer_quote_change: token_at(4)?,
                    seller_base_change: token_at(5)?,
                }))
            }
        }
    }

    /// Mint tokens to a receiver. Local mode returns the minted token.
    pub async fn mint_token(
        &self,
        input: &MintTokenInput,
        mode: ExecutionMode,
    ) -> Result<Executed<Token>> {
        let inputs = mint_token_inputs(input)?;
        info!(asset = %input.asset_id, %input.amount, "mint_token");
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("mint_token", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                let outputs = self
                    .engine
                    .local_execute(&program, "mint_token", &inputs)
                    .await?;
                let record = TokenRecord::from_wire(output_at(&outputs, 0, "mint_token")?)?;
                Ok(Executed::Local(Token::from_record(&record)?))
            }
        }
    }

    /// Transfer part of a token to another address. Local mode returns the
    /// sender's change piece and the receiver's piece.
    pub async fn transfer_token(
        &self,
        input: &TransferTokenInput,
        mode: ExecutionMode,
    ) -> Result<Executed<TransferOutcome>> {
        let inputs = transfer_token_inputs(input)?;
        info!(to = %input.receiver, %input.amount, "transfer_token");
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("transfer_token", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                let outputs = self
                    .engine
                    .local_execute(&program, "transfer_token", &inputs)
                    .await?;
                let sender = TokenRecord::from_wire(output_at(&outputs, 0, "transfer_token")?)?;
                let receiver = TokenRecord::from_wire(output_at(&outputs, 1, "transfer_token")?)?;
                Ok(Executed::Local(TransferOutcome {
                    sender: Token::from_record(&sender)?,
                    receiver: Token::from_record(&receiver)?,
                }))
            }
        }
    }

    /// Split a token into two pieces. Local mode returns both pieces.
    pub async fn split_token(
        &self,
        input: &SplitTokenInput,
        mode: ExecutionMode,
    ) -> Result<Executed<SplitOutcome>> {
        let inputs = split_token_inputs(input)?;
        info!(%input.amount, "split_token");
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("split_token", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                let outputs = self
                    .engine
                    .local_execute(&program, "split_token", &inputs)
                    .await?;
                let first = TokenRecord::from_wire(output_at(&outputs, 0, "split_token")?)?;
                let second = TokenRecord::from_wire(output_at(&outputs, 1, "split_token")?)?;
                Ok(Executed::Local(SplitOutcome {
                    first: Token::from_record(&first)?,
                    second: Token::from_record(&second)?,
                }))
            }
        }
    }

    /// Combine two same-asset tokens into one. Local mode returns the
    /// merged token.
    pub async fn combine_tokens(
        &self,
        input: &CombineTokensInput,
        mode: ExecutionMode,
    ) -> Result<Executed<Token>> {
        let inputs = combine_tokens_inputs(input)?;
        info!("combine_tokens");
        match mode {
            ExecutionMode::Network { signing_key, fee } => {
                self.submit("combine_tokens", &inputs, &signing_key, fee).await
            }
            ExecutionMode::Local { program } => {
                let outputs = self
                    .engine
                    .local_execute(&program, "combine_tokens", &inputs)
                    .await?;
                let record = TokenRecord::from_wire(output_at(&outputs, 0, "combine_tokens")?)?;
                Ok(Executed::Local(Token::from_record(&record)?))
            }
        }
    }

    // ------------------------------------------------------------------
    // Mapping queries
    // ------------------------------------------------------------------

    /// Read a raw mapping value.
    pub async fn mapping_value(&self, mapping: &str, key: &str) -> Result<Option<String>> {
        debug!(mapping, key, "mapping_value");
        self.engine.read_mapping(&self.program_id, mapping, key).await
    }

    /// Whether an order id is still live on chain.
    pub async fn is_order_active(&self, order_id: &str) -> Result<bool> {
        Ok(self
            .mapping_value("order_active", order_id)
            .await?
            .as_deref()
            == Some("true"))
    }

    /// Cumulative traded volume for a market, in display units. Absent
    /// entries read as zero.
    pub async fn market_volume(&self, market_id: &str) -> Result<Decimal> {
        match self.mapping_value("market_volume", market_id).await? {
            Some(raw) => from_scaled_str(&raw),
            None => Ok(Decimal::ZERO),
        }
    }

    /// Whether a match id has been executed.
    pub async fn is_match_executed(&self, match_id: &str) -> Result<bool> {
        Ok(self
            .mapping_value("executed_matches", match_id)
            .await?
            .as_deref()
            == Some("true"))
    }

    /// Whether a match id has been settled.
    pub async fn is_match_settled(&self, match_id: &str) -> Result<bool> {
        Ok(self
            .mapping_value("settled_matches", match_id)
            .await?
            .as_deref()
            == Some("true"))
    }

    // ------------------------------------------------------------------

    async fn submit<T>(
        &self,
        function: &str,
        inputs: &[String],
        signing_key: &str,
        fee: Option<f64>,
    ) -> Result<Executed<T>> {
        let tx_id = self
            .engine
            .network_execute(&self.program_id, function, inputs, signing_key, fee)
            .await?;
        info!(function, %tx_id, "submitted");
        Ok(Executed::Submitted(tx_id))
    }
}

fn output_at<'a>(outputs: &'a [String], index: usize, function: &str) -> Result<&'a str> {
    outputs.get(index).map(String::as_str).ok_or_else(|| {
        DarkpoolError::Execution(format!(
            "{function} returned {} outputs, output {index} missing",
            outputs.len()
        ))
    })
}
