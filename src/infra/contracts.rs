//! Contract bindings via `alloy::sol!` and the addresses of the OP stack
//! bridge contracts.
//!
//! Only the functions we actually call are included.

use {
    crate::domain::eth::{self, ChainId},
    alloy::{
        primitives::{Address, address},
        sol,
    },
};

sol! {
    interface OptimismPortal {
        function depositTransaction(
            address _to,
            uint256 _value,
            uint64 _gasLimit,
            bool _isCreation,
            bytes _data
        ) external payable;
    }
}

sol! {
    interface L1StandardBridge {
        function depositERC20To(
            address _l1Token,
            address _l2Token,
            address _to,
            uint256 _amount,
            uint32 _minGasLimit,
            bytes _extraData
        ) external;
    }
}

sol! {
    interface L2StandardBridge {
        function withdrawTo(
            address _l2Token,
            address _to,
            uint256 _amount,
            uint32 _minGasLimit,
            bytes _extraData
        ) external payable;
    }
}

sol! {
    interface IERC20 {
        function decimals() external view returns (uint8);
    }
}

/// `L2StandardBridge` predeploy, identical on every OP stack chain.
pub const L2_STANDARD_BRIDGE: Address = address!("4200000000000000000000000000000000000010");

/// Legacy ERC20 representation of Ether on OP stack chains. Withdrawing this
/// "token" through the `L2StandardBridge` withdraws native Ether.
pub const OVM_ETH: Address = address!("DeadDeAddeAddEAddeadDEaDDEAdDeaDDeAD0000");

/// L1 contracts of a known OP stack deployment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Deployment {
    pub l1_chain_id: ChainId,
    pub l2_chain_id: ChainId,
    pub portal: eth::ContractAddress,
    pub l1_standard_bridge: eth::ContractAddress,
}

impl Deployment {
    /// Returns the deployment that bridges into the given L2 chain, or `None`
    /// for L1 chains.
    pub fn for_l2(chain: ChainId) -> Option<Self> {
        let (l1_chain_id, portal, l1_standard_bridge) = match chain {
            ChainId::Optimism => (
                ChainId::Mainnet,
                address!("bEb5Fc579115071764c7423A4f12eDde41f106Ed"),
                address!("99C9fc46f92E8a1c0deC1b1747d010903E884bE1"),
            ),
            ChainId::Base => (
                ChainId::Mainnet,
                address!("49048044D57e1C92A77f79988d21Fa8fAF74E97e"),
                address!("3154Cf16ccdb4C6d922629664174b904d80F2C35"),
            ),
            ChainId::OptimismGoerli => (
                ChainId::Goerli,
                address!("5b47E1A08Ea6d985D6649300584e6722Ec4B1383"),
                address!("636Af16bf2f682dD3109e60102b8E1A089FedAa8"),
            ),
            ChainId::BaseGoerli => (
                ChainId::Goerli,
                address!("e93c8cD0D409341205A592f8c4Ac1A5fe5585cfA"),
                address!("fA6D8Ee5BE770F84FC001D098C4bD604Fe01284a"),
            ),
            ChainId::OptimismSepolia => (
                ChainId::Sepolia,
                address!("16Fc5058F25648194471939df75CF27A2fdC48BC"),
                address!("FBb0621E0B23b5478B630BD55a5f21f67730B0F1"),
            ),
            ChainId::BaseSepolia => (
                ChainId::Sepolia,
                address!("49f53e41452C74589E85cA1677426Ba426459e85"),
                address!("fd0Bf71F60660E2f608ed56e1659C450eB113120"),
            ),
            ChainId::Mainnet | ChainId::Goerli | ChainId::Sepolia => return None,
        };

        Some(Self {
            l1_chain_id,
            l2_chain_id: chain,
            portal: eth::ContractAddress(portal),
            l1_standard_bridge: eth::ContractAddress(l1_standard_bridge),
        })
    }
}
