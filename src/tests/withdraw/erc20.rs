//! ERC20 withdrawals scale the entered amount by the token's decimals, which
//! are read from the token contract on L2.

use {
    crate::{
        domain::{
            bridge::{self, WithdrawErc20},
            eth,
            form,
            operation::Operation,
        },
        infra::{
            cli,
            contracts::{self, IERC20},
            node::{MockNode, MockPublicClient, Node, PublicClient},
        },
        tests::{self, mock, withdraw},
    },
    alloy::sol_types::{SolCall, SolValue},
    std::sync::Arc,
};

/// A node whose L2 client serves a token with the given decimals and accepts
/// every other call.
fn token_node(decimals: u8) -> MockNode {
    let mut node = MockNode::new();
    node.expect_wallet_client().never();
    node.expect_public_client().returning(move |chain| {
        assert_eq!(chain, Some(eth::ChainId::BaseGoerli));
        let mut client = MockPublicClient::new();
        client.expect_chain().return_const(eth::ChainId::BaseGoerli);
        client.expect_call().returning(move |call, _| {
            if call.calldata[..] == IERC20::decimalsCall::SELECTOR[..] {
                Ok(eth::U256::from(decimals).abi_encode().into())
            } else {
                Ok(eth::Bytes::new())
            }
        });
        client
            .expect_estimate_gas()
            .returning(|_, _| Ok(eth::Gas::from(90_000)));
        Ok(Arc::new(client) as Arc<dyn PublicClient>)
    });
    node
}

fn withdrawal(amount: &str) -> form::WithdrawErc20Form {
    form::WithdrawErc20Form {
        l2_token: cli::DEFAULT_WITHDRAW_TOKEN.to_owned(),
        to: withdraw::RECIPIENT.to_string(),
        amount: amount.to_owned(),
    }
}

#[tokio::test]
async fn scales_amount_by_token_decimals() {
    let node: Arc<dyn Node> = Arc::new(token_node(6));
    let form = withdrawal("1.5");

    let client = node
        .public_client(Some(eth::ChainId::BaseGoerli))
        .await
        .unwrap();
    let decimals = bridge::erc20::decimals(client.as_ref(), form.token().unwrap())
        .await
        .unwrap();
    assert_eq!(decimals, 6);

    let operation = Operation::<WithdrawErc20>::new(node, tests::defaults());
    let simulation = operation
        .simulate(form.request(Some(decimals)).unwrap())
        .await
        .unwrap();

    assert_eq!(
        simulation.call.to,
        eth::ContractAddress(contracts::L2_STANDARD_BRIDGE)
    );
    assert_eq!(simulation.call.value, eth::Ether::default());
    assert_eq!(simulation.gas, eth::Gas::from(90_000));

    let decoded =
        contracts::L2StandardBridge::withdrawToCall::abi_decode(&simulation.call.calldata)
            .unwrap();
    assert_eq!(decoded._l2Token, form.token().unwrap().0);
    assert_eq!(decoded._to, withdraw::RECIPIENT);
    assert_eq!(decoded._amount, eth::U256::from(1_500_000));
}

#[tokio::test]
async fn eighteen_decimals() {
    let node: Arc<dyn Node> = Arc::new(token_node(18));
    let operation = Operation::<WithdrawErc20>::new(node, tests::defaults());

    let simulation = operation
        .simulate(withdrawal("1.5").request(Some(18)).unwrap())
        .await
        .unwrap();

    let decoded =
        contracts::L2StandardBridge::withdrawToCall::abi_decode(&simulation.call.calldata)
            .unwrap();
    assert_eq!(
        decoded._amount,
        eth::U256::from(1_500_000_000_000_000_000_u128)
    );
}

#[tokio::test]
async fn unresolved_decimals_simulate_zero_amount() {
    let node = Arc::new(mock::node::Node::new());
    let operation = Operation::<WithdrawErc20>::new(node.clone(), tests::defaults());

    let simulation = operation
        .simulate(withdrawal("1.5").request(None).unwrap())
        .await
        .unwrap();

    let decoded =
        contracts::L2StandardBridge::withdrawToCall::abi_decode(&simulation.call.calldata)
            .unwrap();
    assert_eq!(decoded._amount, eth::U256::ZERO);
    assert_eq!(simulation.chain, eth::ChainId::BaseGoerli);
}
