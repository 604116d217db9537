use alloy::primitives::TxHash;

/// A supported Ethereum Chain ID.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChainId {
    Mainnet = 1,
    Goerli = 5,
    Sepolia = 11155111,
    Optimism = 10,
    OptimismGoerli = 420,
    OptimismSepolia = 11155420,
    Base = 8453,
    BaseGoerli = 84531,
    BaseSepolia = 84532,
}

/// Which side of the bridge a chain is on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layer {
    L1,
    L2,
}

impl ChainId {
    pub fn new(value: u64) -> Result<Self, UnsupportedChain> {
        match value {
            1 => Ok(Self::Mainnet),
            5 => Ok(Self::Goerli),
            11155111 => Ok(Self::Sepolia),
            10 => Ok(Self::Optimism),
            420 => Ok(Self::OptimismGoerli),
            11155420 => Ok(Self::OptimismSepolia),
            8453 => Ok(Self::Base),
            84531 => Ok(Self::BaseGoerli),
            84532 => Ok(Self::BaseSepolia),
            _ => Err(UnsupportedChain(value)),
        }
    }

    /// Returns the chain ID as a numeric value.
    pub fn value(self) -> u64 {
        self as u64
    }

    pub fn layer(self) -> Layer {
        match self {
            ChainId::Mainnet | ChainId::Goerli | ChainId::Sepolia => Layer::L1,
            ChainId::Optimism
            | ChainId::OptimismGoerli
            | ChainId::OptimismSepolia
            | ChainId::Base
            | ChainId::BaseGoerli
            | ChainId::BaseSepolia => Layer::L2,
        }
    }

    /// Base URL of the canonical block explorer for the chain.
    pub fn explorer(self) -> &'static str {
        match self {
            ChainId::Mainnet => "https://etherscan.io",
            ChainId::Goerli => "https://goerli.etherscan.io",
            ChainId::Sepolia => "https://sepolia.etherscan.io",
            ChainId::Optimism => "https://optimistic.etherscan.io",
            ChainId::OptimismGoerli => "https://goerli-optimism.etherscan.io",
            ChainId::OptimismSepolia => "https://sepolia-optimism.etherscan.io",
            ChainId::Base => "https://basescan.org",
            ChainId::BaseGoerli => "https://goerli.basescan.org",
            ChainId::BaseSepolia => "https://sepolia.basescan.org",
        }
    }

    /// Link to a transaction on the chain's block explorer.
    pub fn transaction_url(self, hash: &TxHash) -> String {
        format!("{}/tx/{hash}", self.explorer())
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported chain {0}")]
pub struct UnsupportedChain(pub u64);
