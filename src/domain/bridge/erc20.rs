use {
    crate::{
        domain::eth,
        infra::{
            contracts::IERC20,
            node::{self, PublicClient},
        },
    },
    alloy::sol_types::SolCall,
};

/// Reads the number of decimals of an ERC20 token.
pub async fn decimals(client: &dyn PublicClient, token: eth::TokenAddress) -> Result<u8, node::Error> {
    let call = eth::Call {
        to: eth::ContractAddress(token.0),
        value: eth::Ether::default(),
        calldata: IERC20::decimalsCall {}.abi_encode().into(),
    };
    let output = client.call(&call, None).await?;
    Ok(IERC20::decimalsCall::abi_decode_returns(&output)?)
}
