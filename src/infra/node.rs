//! Chain-scoped client handles.
//!
//! An operation never talks to a provider directly. It asks a [`Node`] for a
//! read-only [`PublicClient`] or a signing [`WalletClient`] scoped to a chain
//! and drops the handle when the invocation completes. The production
//! implementation lives in [`crate::infra::blockchain`].

use {
    crate::domain::eth,
    alloy::transports::TransportError,
    std::sync::Arc,
};

/// Resolves chain-scoped clients. `None` selects the node's default chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Node: Send + Sync {
    async fn public_client(
        &self,
        chain: Option<eth::ChainId>,
    ) -> Result<Arc<dyn PublicClient>, Error>;

    async fn wallet_client(
        &self,
        chain: Option<eth::ChainId>,
    ) -> Result<Arc<dyn WalletClient>, Error>;
}

/// Read-only access to a chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PublicClient: Send + Sync {
    fn chain(&self) -> eth::ChainId;

    /// Executes the call against the latest block without creating a
    /// transaction (`eth_call`). Reverts are reported as errors.
    async fn call(&self, call: &eth::Call, from: Option<eth::Address>)
    -> Result<eth::Bytes, Error>;

    /// Estimates the gas the call would use (`eth_estimateGas`).
    async fn estimate_gas(
        &self,
        call: &eth::Call,
        from: Option<eth::Address>,
    ) -> Result<eth::Gas, Error>;
}

/// A client bound to an unlocked account that can sign and broadcast
/// transactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WalletClient: Send + Sync {
    fn chain(&self) -> eth::ChainId;

    fn account(&self) -> eth::Address;

    /// Signs and broadcasts the call. Resolves once the node accepted the
    /// transaction into its pool, not when it is mined.
    async fn send(&self, call: &eth::Call) -> Result<eth::TxHash, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no node configured for chain {0}")]
    UnconfiguredChain(eth::ChainId),

    #[error("no signer configured")]
    MissingSigner,

    #[error("node reports chain {actual} but was configured for {expected}")]
    ChainMismatch {
        expected: eth::ChainId,
        actual: u64,
    },

    #[error(transparent)]
    Rpc(#[from] TransportError),

    #[error("failed to decode return data: {0}")]
    Decode(#[from] alloy::sol_types::Error),

    #[error(transparent)]
    Client(#[from] reqwest::Error),
}
