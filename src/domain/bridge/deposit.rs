//! L1 → L2 deposits.

use {
    super::{Action, Defaults, MissingParameter},
    crate::{domain::eth, infra::contracts},
    alloy::sol_types::SolCall,
};

/// Deposits Ether into L2 through the `OptimismPortal`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEth {
    /// L2 recipient.
    pub to: eth::Address,
    /// Amount sent with the deposit and credited to `to` on L2.
    pub value: eth::Ether,
    /// Gas limit of the L2 deposit transaction.
    pub gas_limit: Option<u64>,
    pub data: eth::Bytes,
    pub is_creation: bool,
    pub portal: Option<eth::ContractAddress>,
}

impl DepositEth {
    pub fn new(to: eth::Address, value: eth::Ether) -> Self {
        Self {
            to,
            value,
            gas_limit: None,
            data: Default::default(),
            is_creation: false,
            portal: None,
        }
    }
}

impl Action for DepositEth {
    const LAYER: eth::Layer = eth::Layer::L1;
    const NAME: &'static str = "deposit_eth";

    fn with_defaults(self, defaults: &Defaults) -> Self {
        Self {
            gas_limit: self.gas_limit.or(Some(u64::from(defaults.gas_limit))),
            portal: self.portal.or(defaults.portal),
            ..self
        }
    }

    fn encode(&self) -> Result<eth::Call, MissingParameter> {
        let portal = self.portal.ok_or(MissingParameter("portal"))?;
        let gas_limit = self.gas_limit.ok_or(MissingParameter("gas_limit"))?;
        let calldata = contracts::OptimismPortal::depositTransactionCall {
            _to: self.to,
            _value: self.value.0,
            _gasLimit: gas_limit,
            _isCreation: self.is_creation,
            _data: self.data.clone(),
        }
        .abi_encode();

        Ok(eth::Call {
            to: portal,
            value: self.value,
            calldata: calldata.into(),
        })
    }
}

/// Deposits an ERC20 token into L2 through the `L1StandardBridge`. The bridge
/// must already be approved to spend `amount` of `l1_token`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositErc20 {
    pub l1_token: eth::TokenAddress,
    pub l2_token: eth::TokenAddress,
    pub to: eth::Address,
    pub amount: eth::U256,
    pub min_gas_limit: Option<u32>,
    pub extra_data: eth::Bytes,
    pub l1_standard_bridge: Option<eth::ContractAddress>,
}

impl DepositErc20 {
    pub fn new(
        l1_token: eth::TokenAddress,
        l2_token: eth::TokenAddress,
        to: eth::Address,
        amount: eth::U256,
    ) -> Self {
        Self {
            l1_token,
            l2_token,
            to,
            amount,
            min_gas_limit: None,
            extra_data: Default::default(),
            l1_standard_bridge: None,
        }
    }
}

impl Action for DepositErc20 {
    const LAYER: eth::Layer = eth::Layer::L1;
    const NAME: &'static str = "deposit_erc20";

    fn with_defaults(self, defaults: &Defaults) -> Self {
        Self {
            min_gas_limit: self.min_gas_limit.or(Some(defaults.gas_limit)),
            l1_standard_bridge: self.l1_standard_bridge.or(defaults.l1_standard_bridge),
            ..self
        }
    }

    fn encode(&self) -> Result<eth::Call, MissingParameter> {
        let bridge = self
            .l1_standard_bridge
            .ok_or(MissingParameter("l1_standard_bridge"))?;
        let min_gas_limit = self.min_gas_limit.ok_or(MissingParameter("min_gas_limit"))?;
        let calldata = contracts::L1StandardBridge::depositERC20ToCall {
            _l1Token: self.l1_token.0,
            _l2Token: self.l2_token.0,
            _to: self.to,
            _amount: self.amount,
            _minGasLimit: min_gas_limit,
            _extraData: self.extra_data.clone(),
        }
        .abi_encode();

        Ok(eth::Call {
            to: bridge,
            value: eth::Ether::default(),
            calldata: calldata.into(),
        })
    }
}
