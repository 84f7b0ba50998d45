//! Async service layer.
//!
//! ## Layout
//!
//! - [`engine`]: the [`ExecutionEngine`] and [`Wallet`] traits the facade
//!   is generic over.
//! - [`inputs`]: positional input builders, one per program entry point.
//! - [`darkpool`]: the [`DarkpoolService`] facade plus mapping queries.
//! - [`wallet`]: [`TransactionRequest`] envelopes for wallet submission.

pub mod darkpool;
pub mod engine;
pub mod inputs;
pub mod wallet;

pub use darkpool::{
    DarkpoolService, Executed, ExecutionMode, MatchOutcome, SettleOutcome, SplitOutcome,
    TransferOutcome, PROGRAM_ID,
};
pub use engine::{ExecutionEngine, Wallet};
pub use inputs::{
    generate_salt, unix_timestamp, CancelOrderInput, CombineTokensInput, MatchOrdersInput,
    MintTokenInput, PlaceOrderInput, SettleTradeInput, SplitTokenInput, TransferTokenInput,
};
pub use wallet::{submit_via_wallet, TransactionRequest, CHAIN_ID, DEFAULT_FEE};
