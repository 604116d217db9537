use crate::domain::{
    bridge::{Defaults, DEFAULT_GAS_LIMIT},
    eth,
};

mod deposit;
mod withdraw;

/// Portal used by all scenarios.
pub const PORTAL: eth::Address = eth::Address::repeat_byte(0x01);

/// L1 standard bridge used by all scenarios.
pub const L1_STANDARD_BRIDGE: eth::Address = eth::Address::repeat_byte(0x02);

/// Defaults of a Goerli/Base Goerli setup with made up L1 contracts.
pub fn defaults() -> Defaults {
    Defaults {
        l1_chain_id: Some(eth::ChainId::Goerli),
        l2_chain_id: Some(eth::ChainId::BaseGoerli),
        portal: Some(eth::ContractAddress(PORTAL)),
        l1_standard_bridge: Some(eth::ContractAddress(L1_STANDARD_BRIDGE)),
        gas_limit: DEFAULT_GAS_LIMIT,
        ..Default::default()
    }
}

/// Wei amount of the given number of whole Ether.
pub fn ether(amount: &str) -> eth::U256 {
    crate::domain::form::parse_units(amount, crate::domain::form::ETHER_DECIMALS).unwrap()
}
