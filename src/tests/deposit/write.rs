//! Writes dry-run the exact call they broadcast and never broadcast a call
//! whose dry run failed.

use {
    crate::{
        domain::{
            bridge::DepositEth,
            eth,
            operation::{self, Operation, Status},
        },
        tests::{self, deposit, mock},
    },
    std::{sync::Arc, time::Duration},
};

#[tokio::test]
async fn simulates_before_sending() {
    let node = Arc::new(mock::node::Node::new());
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());

    let hash = operation.execute(deposit::request()).await.unwrap();

    let events = node.events();
    let call = node.sends().pop().unwrap();
    assert_eq!(
        events,
        vec![
            mock::node::Event::WalletClient(eth::ChainId::Goerli),
            mock::node::Event::PublicClient(eth::ChainId::Goerli),
            mock::node::Event::Call {
                chain: eth::ChainId::Goerli,
                call: call.clone(),
                from: Some(mock::node::ACCOUNT),
            },
            mock::node::Event::EstimateGas {
                chain: eth::ChainId::Goerli,
                from: Some(mock::node::ACCOUNT),
            },
            mock::node::Event::Send {
                chain: eth::ChainId::Goerli,
                call,
            },
        ]
    );

    assert_eq!(operation.write_state().data(), Some(&hash));
    // Writes run their own dry run without touching the simulation state.
    assert_eq!(operation.simulation_state().status(), Status::Idle);
}

#[tokio::test]
async fn reverting_dry_run_is_never_sent() {
    let node = Arc::new(
        mock::node::Node::builder()
            .reverting()
            .gated(mock::node::Gate::Calls)
            .build(),
    );
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());
    let mut updates = operation.subscribe_write();

    let task = operation.write(deposit::request());
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().status(), Status::Pending);

    node.release(1);
    task.await.unwrap();

    let state = operation.write_state();
    assert_eq!(state.status(), Status::Error);
    assert!(state.data().is_none());
    assert!(matches!(state.error(), Some(operation::Error::Simulation(_))));
    assert!(node.sends().is_empty());
}

#[tokio::test]
async fn every_write_starts_pending() {
    let node = Arc::new(
        mock::node::Node::builder()
            .gated(mock::node::Gate::Sends)
            .build(),
    );
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());
    let mut updates = operation.subscribe_write();

    let mut hashes = Vec::new();
    for _ in 0..2 {
        let task = operation.write(deposit::request());
        updates
            .wait_for(|state| state.status() == Status::Pending)
            .await
            .unwrap();

        node.release(1);
        task.await.unwrap();
        let state = operation.write_state();
        assert_eq!(state.status(), Status::Success);
        hashes.push(*state.data().unwrap());
    }

    assert_ne!(hashes[0], hashes[1]);
    assert_eq!(node.sends().len(), 2);
}

#[tokio::test]
async fn concurrent_writes_are_queued() {
    let node = Arc::new(
        mock::node::Node::builder()
            .gated(mock::node::Gate::Sends)
            .build(),
    );
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());

    let first = operation.write(deposit::request());
    let second = operation.write(deposit::request());
    // Let both tasks run until they block.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(operation.write_state().status(), Status::Pending);
    assert_eq!(
        node.events()
            .iter()
            .filter(|event| matches!(event, mock::node::Event::WalletClient(_)))
            .count(),
        1
    );

    node.release(1);
    first.await.unwrap();
    node.release(1);
    second.await.unwrap();

    // The second write only resolved its clients once the first one was sent.
    let sends = node.sends();
    assert_eq!(sends.len(), 2);
    let invocation = |call: &eth::Call| {
        vec![
            mock::node::Event::WalletClient(eth::ChainId::Goerli),
            mock::node::Event::PublicClient(eth::ChainId::Goerli),
            mock::node::Event::Call {
                chain: eth::ChainId::Goerli,
                call: call.clone(),
                from: Some(mock::node::ACCOUNT),
            },
            mock::node::Event::EstimateGas {
                chain: eth::ChainId::Goerli,
                from: Some(mock::node::ACCOUNT),
            },
            mock::node::Event::Send {
                chain: eth::ChainId::Goerli,
                call: call.clone(),
            },
        ]
    };
    assert_eq!(
        node.events(),
        [invocation(&sends[0]), invocation(&sends[1])].concat()
    );
    assert_eq!(operation.write_state().status(), Status::Success);
}

#[tokio::test]
async fn account_mismatch_aborts_before_dry_run() {
    let node = Arc::new(mock::node::Node::new());
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());
    let requested = eth::Address::repeat_byte(0xcc);

    let result = operation
        .execute(deposit::request().from_account(requested))
        .await;

    assert!(matches!(
        result,
        Err(operation::Error::AccountMismatch { requested: r, wallet })
            if r == requested && wallet == mock::node::ACCOUNT
    ));
    assert!(
        !node
            .events()
            .iter()
            .any(|event| matches!(event, mock::node::Event::Call { .. }))
    );
    assert!(node.sends().is_empty());
}

#[tokio::test]
async fn missing_signer_fails_write() {
    let node = Arc::new(mock::node::Node::builder().read_only().build());
    let operation = Operation::<DepositEth>::new(node.clone(), tests::defaults());

    let result = operation.execute(deposit::request()).await;

    assert!(matches!(result, Err(operation::Error::Signer(_))));
    assert_eq!(
        node.events(),
        vec![mock::node::Event::WalletClient(eth::ChainId::Goerli)]
    );

    // Simulating does not need a signer.
    operation.simulate(deposit::request()).await.unwrap();
    assert_eq!(operation.write_state().status(), Status::Error);
    assert_eq!(operation.simulation_state().status(), Status::Success);
}
