//! L2 → L1 withdrawals through the `L2StandardBridge` predeploy.
//!
//! These only initiate the withdrawal. Proving and finalizing it on L1 happens
//! after the challenge period and is out of scope.

use {
    super::{Action, Defaults, MissingParameter},
    crate::{domain::eth, infra::contracts},
    alloy::sol_types::SolCall,
};

/// Withdraws native Ether to an L1 address.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEth {
    /// L1 recipient.
    pub to: eth::Address,
    pub amount: eth::U256,
    pub min_gas_limit: Option<u32>,
    pub extra_data: eth::Bytes,
    pub l2_standard_bridge: Option<eth::ContractAddress>,
}

impl WithdrawEth {
    pub fn new(to: eth::Address, amount: eth::U256) -> Self {
        Self {
            to,
            amount,
            min_gas_limit: None,
            extra_data: Default::default(),
            l2_standard_bridge: None,
        }
    }
}

impl Action for WithdrawEth {
    const LAYER: eth::Layer = eth::Layer::L2;
    const NAME: &'static str = "withdraw_eth";

    fn with_defaults(self, defaults: &Defaults) -> Self {
        Self {
            min_gas_limit: self.min_gas_limit.or(Some(defaults.gas_limit)),
            l2_standard_bridge: self
                .l2_standard_bridge
                .or(Some(defaults.l2_standard_bridge)),
            ..self
        }
    }

    fn encode(&self) -> Result<eth::Call, MissingParameter> {
        let call = withdraw_to(
            self.l2_standard_bridge,
            eth::TokenAddress(contracts::OVM_ETH),
            self.to,
            self.amount,
            self.min_gas_limit,
            &self.extra_data,
        )?;
        Ok(eth::Call {
            value: eth::Ether(self.amount),
            ..call
        })
    }
}

/// Withdraws an L2 ERC20 token to an L1 address. The bridge burns `amount`
/// of `l2_token` from the sender.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawErc20 {
    pub l2_token: eth::TokenAddress,
    /// L1 recipient.
    pub to: eth::Address,
    pub amount: eth::U256,
    pub min_gas_limit: Option<u32>,
    pub extra_data: eth::Bytes,
    pub l2_standard_bridge: Option<eth::ContractAddress>,
}

impl WithdrawErc20 {
    pub fn new(l2_token: eth::TokenAddress, to: eth::Address, amount: eth::U256) -> Self {
        Self {
            l2_token,
            to,
            amount,
            min_gas_limit: None,
            extra_data: Default::default(),
            l2_standard_bridge: None,
        }
    }
}

impl Action for WithdrawErc20 {
    const LAYER: eth::Layer = eth::Layer::L2;
    const NAME: &'static str = "withdraw_erc20";

    fn with_defaults(self, defaults: &Defaults) -> Self {
        Self {
            min_gas_limit: self.min_gas_limit.or(Some(defaults.gas_limit)),
            l2_standard_bridge: self
                .l2_standard_bridge
                .or(Some(defaults.l2_standard_bridge)),
            ..self
        }
    }

    fn encode(&self) -> Result<eth::Call, MissingParameter> {
        withdraw_to(
            self.l2_standard_bridge,
            self.l2_token,
            self.to,
            self.amount,
            self.min_gas_limit,
            &self.extra_data,
        )
    }
}

fn withdraw_to(
    bridge: Option<eth::ContractAddress>,
    l2_token: eth::TokenAddress,
    to: eth::Address,
    amount: eth::U256,
    min_gas_limit: Option<u32>,
    extra_data: &eth::Bytes,
) -> Result<eth::Call, MissingParameter> {
    let bridge = bridge.ok_or(MissingParameter("l2_standard_bridge"))?;
    let min_gas_limit = min_gas_limit.ok_or(MissingParameter("min_gas_limit"))?;
    let calldata = contracts::L2StandardBridge::withdrawToCall {
        _l2Token: l2_token.0,
        _to: to,
        _amount: amount,
        _minGasLimit: min_gas_limit,
        _extraData: extra_data.clone(),
    }
    .abi_encode();

    Ok(eth::Call {
        to: bridge,
        value: eth::Ether::default(),
        calldata: calldata.into(),
    })
}
