use crate::{
    domain::eth,
    infra::contracts::{self, Deployment},
};

/// Conservative gas limit for the L2 leg of a bridge message.
pub const DEFAULT_GAS_LIMIT: u32 = 100_000;

/// Operation-fixed values injected into requests so that callers only supply
/// the variable fields (recipient, amount, token).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Defaults {
    pub l1_chain_id: Option<eth::ChainId>,
    pub l2_chain_id: Option<eth::ChainId>,
    pub portal: Option<eth::ContractAddress>,
    pub l1_standard_bridge: Option<eth::ContractAddress>,
    pub l2_standard_bridge: eth::ContractAddress,
    pub gas_limit: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            l1_chain_id: None,
            l2_chain_id: None,
            portal: None,
            l1_standard_bridge: None,
            l2_standard_bridge: eth::ContractAddress(contracts::L2_STANDARD_BRIDGE),
            gas_limit: DEFAULT_GAS_LIMIT,
        }
    }
}

impl Defaults {
    pub fn for_deployment(deployment: &Deployment) -> Self {
        Self {
            l1_chain_id: Some(deployment.l1_chain_id),
            l2_chain_id: Some(deployment.l2_chain_id),
            portal: Some(deployment.portal),
            l1_standard_bridge: Some(deployment.l1_standard_bridge),
            ..Default::default()
        }
    }

    /// The chain calls of the given layer are sent on.
    pub fn chain(&self, layer: eth::Layer) -> Option<eth::ChainId> {
        match layer {
            eth::Layer::L1 => self.l1_chain_id,
            eth::Layer::L2 => self.l2_chain_id,
        }
    }
}
