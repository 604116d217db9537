//! Dry runs of ETH deposits only ever talk to the read-only client.

use {
    crate::{
        domain::{
            bridge::DepositEth,
            eth,
            operation::{self, Operation, Status},
        },
        infra::{contracts, metrics},
        tests::{self, deposit, mock},
    },
    alloy::sol_types::SolCall,
    std::sync::Arc,
};

#[tokio::test]
async fn never_resolves_wallet() {
    let node = Arc::new(mock::node::Node::new());
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());

    let simulation = operation.simulate(deposit::request()).await.unwrap();

    assert!(!node.resolved_wallet());
    assert_eq!(
        node.events(),
        vec![
            mock::node::Event::PublicClient(eth::ChainId::Goerli),
            mock::node::Event::Call {
                chain: eth::ChainId::Goerli,
                call: simulation.call.clone(),
                from: None,
            },
            mock::node::Event::EstimateGas {
                chain: eth::ChainId::Goerli,
                from: None,
            },
        ]
    );

    assert_eq!(simulation.chain, eth::ChainId::Goerli);
    assert_eq!(simulation.call.to, eth::ContractAddress(tests::PORTAL));
    assert_eq!(simulation.call.value, eth::Ether(tests::ether("1.5")));
    assert_eq!(simulation.gas, eth::Gas::from(21_000));

    let decoded =
        contracts::OptimismPortal::depositTransactionCall::abi_decode(&simulation.call.calldata)
            .unwrap();
    assert_eq!(decoded._to, deposit::RECIPIENT);
    assert_eq!(decoded._value, tests::ether("1.5"));
    assert_eq!(decoded._gasLimit, 100_000);
    assert!(!decoded._isCreation);

    let state = operation.simulation_state();
    assert_eq!(state.status(), Status::Success);
    assert_eq!(state.data().map(|simulation| simulation.gas), Some(simulation.gas));
    assert_eq!(operation.write_state().status(), Status::Idle);
}

#[tokio::test]
async fn simulates_from_requested_account() {
    let node = Arc::new(mock::node::Node::new());
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());
    let account = eth::Address::repeat_byte(0xcc);

    let simulation = operation
        .simulate(
            deposit::request()
                .on_chain(eth::ChainId::Sepolia)
                .from_account(account),
        )
        .await
        .unwrap();

    assert_eq!(simulation.from, Some(account));
    assert_eq!(simulation.chain, eth::ChainId::Sepolia);
    assert!(node.events().contains(&mock::node::Event::EstimateGas {
        chain: eth::ChainId::Sepolia,
        from: Some(account),
    }));
    assert!(!node.resolved_wallet());
}

#[tokio::test]
async fn explicit_gas_limit_wins_over_default() {
    let node = Arc::new(mock::node::Node::new());
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());

    let mut request = deposit::request();
    request.args.gas_limit = Some(250_000);
    let simulation = operation.simulate(request).await.unwrap();

    let decoded =
        contracts::OptimismPortal::depositTransactionCall::abi_decode(&simulation.call.calldata)
            .unwrap();
    assert_eq!(decoded._gasLimit, 250_000);
}

#[tokio::test]
async fn reverting_dry_run_ends_in_error() {
    let node = Arc::new(mock::node::Node::builder().reverting().build());
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());

    let result = operation.simulate(deposit::request()).await;

    assert!(matches!(result, Err(operation::Error::Simulation(_))));
    let state = operation.simulation_state();
    assert_eq!(state.status(), Status::Error);
    assert!(state.data().is_none());
    assert!(matches!(state.error(), Some(operation::Error::Simulation(_))));

    // The gas estimate is skipped once the call reverted.
    assert!(
        !node
            .events()
            .iter()
            .any(|event| matches!(event, mock::node::Event::EstimateGas { .. }))
    );
}

#[tokio::test]
async fn unknown_portal_is_reported_before_any_request() {
    let node = Arc::new(mock::node::Node::new());
    let defaults = crate::domain::bridge::Defaults {
        portal: None,
        ..tests::defaults()
    };
    let operation = Operation::<DepositEth>::new(node.clone(), defaults);

    let result = operation.simulate(deposit::request()).await;

    assert!(matches!(
        result,
        Err(operation::Error::MissingParameter(missing)) if missing.0 == "portal"
    ));
    assert_eq!(
        node.events(),
        vec![mock::node::Event::PublicClient(eth::ChainId::Goerli)]
    );
}

#[tokio::test]
async fn counts_invocations_under_caller_key() {
    let node = Arc::new(mock::node::Node::new());
    let operation = Operation::<DepositEth>::with_options(
        node,
        tests::defaults(),
        operation::Options {
            key: Some("deposit-preview".to_owned()),
        },
    );
    assert_eq!(operation.key(), "deposit-preview");
    assert_eq!(
        Operation::<DepositEth>::new(Arc::new(mock::node::Node::new()), tests::defaults()).key(),
        "deposit_eth"
    );

    operation.simulate(deposit::request()).await.unwrap();

    let families = metrics::registry().gather();
    let invocations = families
        .iter()
        .find(|family| family.get_name() == "bridge_invocations")
        .unwrap();
    assert!(invocations.get_metric().iter().any(|metric| {
        metric
            .get_label()
            .iter()
            .any(|label| label.get_name() == "action" && label.get_value() == "deposit-preview")
    }));
}
