//! External-collaborator traits: the execution engine and the wallet.
//!
//! Both are consumed by interface only. The engine runs program functions,
//! locally without proofs, or on the network for real, and answers point
//! queries against on-chain mappings. Implementations own their own
//! timeout/cancellation policy; the facade propagates whatever outcome it
//! receives without retrying.

use async_trait::async_trait;

use crate::errors::Result;
use crate::service::wallet::TransactionRequest;

/// Program execution boundary.
///
/// Injected into [`crate::service::DarkpoolService`] at construction so
/// tests can substitute scripted doubles and applications can run several
/// independent service instances.
#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Execute a function locally (no proof), returning every output
    /// position as its wire string, in order.
    async fn local_execute(
        &self,
        program: &str,
        function: &str,
        inputs: &[String],
    ) -> Result<Vec<String>>;

    /// Execute a function on the network, returning the transaction id.
    /// Outputs are not available until the transaction is confirmed; callers
    /// poll separately.
    async fn network_execute(
        &self,
        program_id: &str,
        function: &str,
        inputs: &[String],
        signing_key: &str,
        fee: Option<f64>,
    ) -> Result<String>;

    /// Read one value from an on-chain key/value mapping.
    async fn read_mapping(
        &self,
        program_id: &str,
        mapping: &str,
        key: &str,
    ) -> Result<Option<String>>;
}

/// Wallet boundary: connection state, public address, and transaction
/// submission through the user's signer.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// The connected public address.
    fn address(&self) -> &str;

    /// Whether a wallet session is live.
    fn connected(&self) -> bool;

    /// Submit a transaction request for signing and broadcast, returning the
    /// transaction id.
    async fn submit(&self, request: &TransactionRequest) -> Result<String>;
}
