//! [`Node`] implementation over `alloy` HTTP providers.

use {
    crate::{
        domain::eth,
        infra::node::{self, Node, PublicClient, WalletClient},
    },
    alloy::{
        network::{EthereumWallet, TransactionBuilder},
        providers::{DynProvider, Provider, ProviderBuilder},
        rpc::{client::RpcClient, types::TransactionRequest},
        signers::local::PrivateKeySigner,
        transports::http::Http,
    },
    std::{collections::HashMap, sync::Arc, time::Duration},
};

/// Connection settings for a single chain.
#[derive(Clone, Debug)]
pub struct Endpoint {
    pub chain: eth::ChainId,
    pub url: reqwest::Url,
}

/// Resolves `alloy` providers for a fixed set of chains.
///
/// Providers are built fresh for every resolution; nothing is cached or
/// pooled across invocations.
pub struct Rpc {
    endpoints: HashMap<eth::ChainId, reqwest::Url>,
    default_chain: eth::ChainId,
    signer: Option<PrivateKeySigner>,
    timeout: Duration,
}

impl Rpc {
    pub fn new(
        endpoints: Vec<Endpoint>,
        default_chain: eth::ChainId,
        signer: Option<PrivateKeySigner>,
        timeout: Duration,
    ) -> Self {
        Self {
            endpoints: endpoints
                .into_iter()
                .map(|endpoint| (endpoint.chain, endpoint.url))
                .collect(),
            default_chain,
            signer,
            timeout,
        }
    }

    fn endpoint(&self, chain: Option<eth::ChainId>) -> Result<(eth::ChainId, RpcClient), node::Error> {
        let chain = chain.unwrap_or(self.default_chain);
        let url = self
            .endpoints
            .get(&chain)
            .ok_or(node::Error::UnconfiguredChain(chain))?;
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let is_local = matches!(url.host_str(), Some("localhost" | "127.0.0.1"));
        Ok((chain, RpcClient::new(Http::with_client(client, url.clone()), is_local)))
    }
}

#[async_trait::async_trait]
impl Node for Rpc {
    async fn public_client(
        &self,
        chain: Option<eth::ChainId>,
    ) -> Result<Arc<dyn PublicClient>, node::Error> {
        let (chain, client) = self.endpoint(chain)?;
        let provider = ProviderBuilder::new().connect_client(client).erased();
        Ok(Arc::new(Public { chain, provider }))
    }

    async fn wallet_client(
        &self,
        chain: Option<eth::ChainId>,
    ) -> Result<Arc<dyn WalletClient>, node::Error> {
        let signer = self.signer.clone().ok_or(node::Error::MissingSigner)?;
        let (chain, client) = self.endpoint(chain)?;
        let account = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(client)
            .erased();

        // Never sign for a node that serves a different chain.
        let actual = provider.get_chain_id().await?;
        if actual != chain.value() {
            return Err(node::Error::ChainMismatch {
                expected: chain,
                actual,
            });
        }

        Ok(Arc::new(Wallet {
            chain,
            account,
            provider,
        }))
    }
}

fn request(call: &eth::Call, from: Option<eth::Address>) -> TransactionRequest {
    let request = TransactionRequest::default()
        .with_to(call.to.0)
        .with_value(call.value.0)
        .with_input(call.calldata.clone());
    match from {
        Some(from) => request.with_from(from),
        None => request,
    }
}

struct Public {
    chain: eth::ChainId,
    provider: DynProvider,
}

#[async_trait::async_trait]
impl PublicClient for Public {
    fn chain(&self) -> eth::ChainId {
        self.chain
    }

    async fn call(
        &self,
        call: &eth::Call,
        from: Option<eth::Address>,
    ) -> Result<eth::Bytes, node::Error> {
        Ok(self.provider.call(request(call, from)).await?)
    }

    async fn estimate_gas(
        &self,
        call: &eth::Call,
        from: Option<eth::Address>,
    ) -> Result<eth::Gas, node::Error> {
        let gas = self.provider.estimate_gas(request(call, from)).await?;
        Ok(eth::Gas::from(gas))
    }
}

struct Wallet {
    chain: eth::ChainId,
    account: eth::Address,
    provider: DynProvider,
}

#[async_trait::async_trait]
impl WalletClient for Wallet {
    fn chain(&self) -> eth::ChainId {
        self.chain
    }

    fn account(&self) -> eth::Address {
        self.account
    }

    async fn send(&self, call: &eth::Call) -> Result<eth::TxHash, node::Error> {
        let pending = self
            .provider
            .send_transaction(request(call, Some(self.account)))
            .await?;
        Ok(*pending.tx_hash())
    }
}
