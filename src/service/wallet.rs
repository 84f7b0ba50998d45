//! Wallet-submitted transaction requests.
//!
//! Network submissions through a connected wallet carry the full request
//! envelope: sender address, chain, program, function, positional inputs,
//! and fee. Constructors exist for the wallet-driven entry points; the rest
//! of the protocol (matching, settlement) runs through the execution engine
//! with an operator key instead.

use crate::errors::{DarkpoolError, Result};
use crate::service::engine::Wallet;
use crate::service::inputs::{
    cancel_order_inputs, mint_token_inputs, place_order_inputs, transfer_token_inputs,
    CancelOrderInput, MintTokenInput, PlaceOrderInput, TransferTokenInput,
};
use crate::service::PROGRAM_ID;

/// Network chain identifier.
pub const CHAIN_ID: &str = "testnetbeta";

/// Default transaction fee in credits.
pub const DEFAULT_FEE: f64 = 0.5;

/// A fully assembled transaction awaiting wallet signature and broadcast.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub address: String,
    pub chain_id: String,
    pub program_id: String,
    pub function: String,
    pub inputs: Vec<String>,
    /// Fee in credits, paid from the public balance.
    pub fee: f64,
}

impl TransactionRequest {
    fn new(address: &str, function: &str, inputs: Vec<String>, fee: Option<f64>) -> Self {
        Self {
            address: address.to_string(),
            chain_id: CHAIN_ID.to_string(),
            program_id: PROGRAM_ID.to_string(),
            function: function.to_string(),
            inputs,
            fee: fee.unwrap_or(DEFAULT_FEE),
        }
    }

    pub fn place_order(
        address: &str,
        input: &PlaceOrderInput,
        fee: Option<f64>,
    ) -> Result<Self> {
        Ok(Self::new(address, "place_order", place_order_inputs(input)?, fee))
    }

    pub fn cancel_order(
        address: &str,
        input: &CancelOrderInput,
        fee: Option<f64>,
    ) -> Result<Self> {
        Ok(Self::new(address, "cancel_order", cancel_order_inputs(input)?, fee))
    }

    pub fn mint_token(address: &str, input: &MintTokenInput, fee: Option<f64>) -> Result<Self> {
        Ok(Self::new(address, "mint_token", mint_token_inputs(input)?, fee))
    }

    pub fn transfer_token(
        address: &str,
        input: &TransferTokenInput,
        fee: Option<f64>,
    ) -> Result<Self> {
        Ok(Self::new(
            address,
            "transfer_token",
            transfer_token_inputs(input)?,
            fee,
        ))
    }
}

/// Submit a request through a wallet, refusing when no session is live.
pub async fn submit_via_wallet<W: Wallet>(
    wallet: &W,
    request: &TransactionRequest,
) -> Result<String> {
    if !wallet.connected() {
        return Err(DarkpoolError::Execution("wallet not connected".to_string()));
    }
    wallet.submit(request).await
}
