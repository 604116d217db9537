//! The bridge contract calls supported by this crate.
//!
//! Every call is modelled as an [`Action`]: a plain argument struct that knows
//! how to fill in operation-fixed defaults and how to encode itself into an
//! [`eth::Call`]. The encoding routine is the only place where arguments are
//! turned into calldata, so dry runs and broadcasts always agree on what is
//! being sent.

use crate::domain::eth;

mod defaults;
mod deposit;
pub mod erc20;
mod withdraw;

pub use self::{
    defaults::{DEFAULT_GAS_LIMIT, Defaults},
    deposit::{DepositErc20, DepositEth},
    withdraw::{WithdrawErc20, WithdrawEth},
};

/// A bridge contract call.
pub trait Action: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Operation name used in logs and metrics.
    const NAME: &'static str;

    /// The side of the bridge the transaction is sent on.
    const LAYER: eth::Layer;

    /// Fills in every field the caller left empty. Fields the caller set are
    /// never touched.
    fn with_defaults(self, defaults: &Defaults) -> Self;

    fn encode(&self) -> Result<eth::Call, MissingParameter>;
}

/// An invocation of an [`Action`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request<A> {
    pub args: A,
    /// The chain to send the call on. Defaults to the configured chain of the
    /// action's layer.
    pub chain_id: Option<eth::ChainId>,
    /// Sender for read-only dry runs. When set, writes fail unless the wallet
    /// account matches it.
    pub account: Option<eth::Address>,
}

impl<A: Action> Request<A> {
    pub fn new(args: A) -> Self {
        Self {
            args,
            chain_id: None,
            account: None,
        }
    }

    pub fn on_chain(self, chain_id: eth::ChainId) -> Self {
        Self {
            chain_id: Some(chain_id),
            ..self
        }
    }

    pub fn from_account(self, account: eth::Address) -> Self {
        Self {
            account: Some(account),
            ..self
        }
    }

    pub fn with_defaults(self, defaults: &Defaults) -> Self {
        Self {
            args: self.args.with_defaults(defaults),
            chain_id: self.chain_id.or(defaults.chain(A::LAYER)),
            account: self.account,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("missing parameter `{0}`")]
pub struct MissingParameter(pub &'static str);
