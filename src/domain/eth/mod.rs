mod chain;

pub use {
    self::chain::{ChainId, Layer, UnsupportedChain},
    alloy::primitives::{Address, Bytes, TxHash, U256},
};

/// A contract address.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ContractAddress(pub Address);

impl From<Address> for ContractAddress {
    fn from(inner: Address) -> Self {
        Self(inner)
    }
}

/// An ERC20 token address.
///
/// https://eips.ethereum.org/EIPS/eip-20
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TokenAddress(pub Address);

impl From<Address> for TokenAddress {
    fn from(inner: Address) -> Self {
        Self(inner)
    }
}

/// An Ether amount in wei.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ether(pub U256);

impl From<U256> for Ether {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

/// Gas amount.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Gas(pub U256);

impl From<u64> for Gas {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

/// An encoded contract call, ready to be dry-run or signed and broadcast.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub to: ContractAddress,
    pub value: Ether,
    pub calldata: Bytes,
}
