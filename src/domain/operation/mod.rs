//! Simulate-then-write orchestration of bridge actions.
//!
//! An [`Operation`] exposes two phases for one [`Action`]:
//!
//! - [`Operation::simulate`] dry-runs the call through a read-only client.
//! - [`Operation::execute`] dry-runs the call with the wallet account as
//!   sender and, only if that succeeds, signs and broadcasts it.
//!
//! Both phases encode the call through the same [`Action::encode`] routine.
//! Each phase owns one [`ActionState`] cell that observers can subscribe to.

use {
    crate::{
        domain::{
            bridge::{Action, Defaults, MissingParameter, Request},
            eth,
        },
        infra::{
            metrics,
            node::{self, Node, PublicClient},
        },
    },
    std::{marker::PhantomData, sync::Arc},
    tokio::{sync::watch, task::JoinHandle},
    tracing::Instrument,
};

mod state;

pub use self::state::{ActionState, Status};
use self::state::Phase;

/// Result of a successful dry run.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub chain: eth::ChainId,
    /// The exact call that was simulated and that a write would broadcast.
    pub call: eth::Call,
    pub from: Option<eth::Address>,
    /// Raw return data of the call.
    pub output: eth::Bytes,
    pub gas: eth::Gas,
}

/// A bridge action bound to a node, with independent simulate and write
/// state. Cloning yields a handle to the same operation and state.
pub struct Operation<A> {
    inner: Arc<Inner<A>>,
}

struct Inner<A> {
    node: Arc<dyn Node>,
    defaults: Defaults,
    key: String,
    simulation: Phase<Simulation>,
    write: Phase<eth::TxHash>,
    action: PhantomData<fn() -> A>,
}

/// Caller overrides of how an operation is set up.
#[derive(Clone, Debug, Default)]
pub struct Options {
    /// Key the operation is logged and counted under. Defaults to the action
    /// name.
    pub key: Option<String>,
}

impl<A> Clone for Operation<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: Action> Operation<A> {
    pub fn new(node: Arc<dyn Node>, defaults: Defaults) -> Self {
        Self::with_options(node, defaults, Options::default())
    }

    pub fn with_options(node: Arc<dyn Node>, defaults: Defaults, options: Options) -> Self {
        Self {
            inner: Arc::new(Inner {
                node,
                defaults,
                key: options.key.unwrap_or_else(|| A::NAME.to_owned()),
                simulation: Phase::new(),
                write: Phase::new(),
                action: PhantomData,
            }),
        }
    }

    /// The key the operation is logged and counted under.
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Dry-runs the request against a read-only client. Never resolves a
    /// wallet.
    ///
    /// The invocation runs on its own task, so it completes and settles the
    /// simulation state even if the returned future is dropped.
    pub async fn simulate(&self, request: Request<A>) -> Result<Simulation, Error> {
        let operation = self.clone();
        let span = tracing::info_span!("simulate", action = %self.inner.key);
        join(tokio::spawn(
            async move { operation.run_simulation(request).await }.instrument(span),
        ))
        .await
    }

    /// Dry-runs the request with the wallet account as sender and broadcasts
    /// it if the dry run succeeded. Returns the transaction hash as soon as
    /// the node accepted the transaction.
    ///
    /// Like [`Operation::simulate`], the invocation outlives the returned
    /// future.
    pub async fn execute(&self, request: Request<A>) -> Result<eth::TxHash, Error> {
        let operation = self.clone();
        let span = tracing::info_span!("write", action = %self.inner.key);
        join(tokio::spawn(
            async move { operation.run_execution(request).await }.instrument(span),
        ))
        .await
    }

    /// Fire-and-forget variant of [`Operation::execute`]. The outcome is only
    /// observable through the write state. Must be called from within a tokio
    /// runtime.
    pub fn write(&self, request: Request<A>) -> tokio::task::JoinHandle<()> {
        let operation = self.clone();
        tokio::spawn(async move {
            if let Err(err) = operation.execute(request).await {
                tracing::debug!(?err, "write settled with an error");
            }
        })
    }

    pub fn simulation_state(&self) -> ActionState<Simulation> {
        self.inner.simulation.state()
    }

    pub fn write_state(&self) -> ActionState<eth::TxHash> {
        self.inner.write.state()
    }

    pub fn subscribe_simulation(&self) -> watch::Receiver<ActionState<Simulation>> {
        self.inner.simulation.subscribe()
    }

    pub fn subscribe_write(&self) -> watch::Receiver<ActionState<eth::TxHash>> {
        self.inner.write.subscribe()
    }

    async fn run_simulation(&self, request: Request<A>) -> Result<Simulation, Error> {
        let invocation = async {
            let request = request.with_defaults(&self.inner.defaults);
            let client = self
                .inner
                .node
                .public_client(request.chain_id)
                .await
                .map_err(|err| Error::Client(Arc::new(err)))?;
            dry_run(client.as_ref(), &request.args, request.account).await
        };

        observe(
            &self.inner.key,
            "simulate",
            self.inner.simulation.run(invocation),
        )
        .await
    }

    async fn run_execution(&self, request: Request<A>) -> Result<eth::TxHash, Error> {
        let invocation = async {
            let request = request.with_defaults(&self.inner.defaults);
            let wallet = self
                .inner
                .node
                .wallet_client(request.chain_id)
                .await
                .map_err(|err| Error::Signer(Arc::new(err)))?;
            let public = self
                .inner
                .node
                .public_client(request.chain_id)
                .await
                .map_err(|err| Error::Client(Arc::new(err)))?;

            let account = wallet.account();
            match request.account {
                Some(requested) if requested != account => {
                    return Err(Error::AccountMismatch {
                        requested,
                        wallet: account,
                    });
                }
                _ => {}
            }

            let simulation = dry_run(public.as_ref(), &request.args, Some(account)).await?;
            let hash = wallet
                .send(&simulation.call)
                .await
                .map_err(|err| Error::Submission(Arc::new(err)))?;
            tracing::info!(%hash, chain = %wallet.chain(), %account, "transaction submitted");
            Ok(hash)
        };

        observe(&self.inner.key, "write", self.inner.write.run(invocation)).await
    }
}

/// Waits for a spawned invocation. Panics are resumed on the caller.
async fn join<T>(task: JoinHandle<Result<T, Error>>) -> Result<T, Error> {
    match task.await {
        Ok(result) => result,
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(_) => Err(Error::Cancelled),
    }
}

async fn dry_run<A: Action>(
    client: &dyn PublicClient,
    args: &A,
    from: Option<eth::Address>,
) -> Result<Simulation, Error> {
    let call = args.encode()?;
    let output = client
        .call(&call, from)
        .await
        .map_err(|err| Error::Simulation(Arc::new(err)))?;
    let gas = client
        .estimate_gas(&call, from)
        .await
        .map_err(|err| Error::Simulation(Arc::new(err)))?;
    tracing::debug!(gas = ?gas.0, chain = %client.chain(), "simulated");

    Ok(Simulation {
        chain: client.chain(),
        call,
        from,
        output,
        gas,
    })
}

async fn observe<T>(
    action: &str,
    phase: &str,
    invocation: impl std::future::Future<Output = Result<T, Error>>,
) -> Result<T, Error> {
    metrics::invoked(action, phase);
    let result = invocation.await;
    match &result {
        Ok(_) => metrics::completed(action, phase, "success"),
        Err(err) => {
            tracing::warn!(?err, "{phase} failed");
            metrics::completed(action, phase, err.format_variant());
        }
    }
    result
}

/// Failure of an operation phase, classified by the step that failed. The
/// underlying node error is passed through as is.
#[derive(Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error("public client unavailable: {0}")]
    Client(#[source] Arc<node::Error>),

    #[error("wallet client unavailable: {0}")]
    Signer(#[source] Arc<node::Error>),

    #[error("simulation failed: {0}")]
    Simulation(#[source] Arc<node::Error>),

    #[error("transaction submission failed: {0}")]
    Submission(#[source] Arc<node::Error>),

    #[error(transparent)]
    MissingParameter(#[from] MissingParameter),

    #[error("requested account {requested} does not match wallet account {wallet}")]
    AccountMismatch {
        requested: eth::Address,
        wallet: eth::Address,
    },

    #[error("invocation cancelled by runtime shutdown")]
    Cancelled,
}

impl Error {
    /// for instrumentization purposes
    pub fn format_variant(&self) -> &'static str {
        match self {
            Self::Client(_) => "Client",
            Self::Signer(_) => "Signer",
            Self::Simulation(_) => "Simulation",
            Self::Submission(_) => "Submission",
            Self::MissingParameter(_) => "MissingParameter",
            Self::AccountMismatch { .. } => "AccountMismatch",
            Self::Cancelled => "Cancelled",
        }
    }
}
