use {
    crate::{
        domain::{
            bridge::{self, Action, Defaults, Request},
            eth,
            form,
            operation::{ActionState, Operation, Simulation},
        },
        infra::{
            blockchain::{Endpoint, Rpc},
            cli,
            config,
            metrics,
            node::Node,
        },
        util::conv,
    },
    alloy::signers::local::PrivateKeySigner,
    anyhow::Context,
    clap::Parser,
    std::{str::FromStr, sync::Arc},
    tracing_subscriber::EnvFilter,
};

pub async fn start(args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
    let args = cli::Args::parse_from(args);
    run_with(args).await
}

async fn run_with(args: cli::Args) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(command = ?args.command, "running bridge");

    let config = config::file::load(&args.config).await;
    let signer = args
        .private_key
        .as_deref()
        .map(PrivateKeySigner::from_str)
        .transpose()
        .context("invalid private key")?;
    let node: Arc<dyn Node> = Arc::new(Rpc::new(
        vec![
            Endpoint {
                chain: config.l1.chain_id,
                url: config.l1.node_url.clone(),
            },
            Endpoint {
                chain: config.l2.chain_id,
                url: config.l2.node_url.clone(),
            },
        ],
        config.l1.chain_id,
        signer,
        config.request_timeout,
    ));

    let result = dispatch(node, &config.defaults, args.command).await;

    if args.metrics {
        let metrics = prometheus::TextEncoder::new()
            .encode_to_string(&metrics::registry().gather())
            .context("failed to encode metrics")?;
        println!("{metrics}");
    }
    result
}

async fn dispatch(
    node: Arc<dyn Node>,
    defaults: &Defaults,
    command: cli::Command,
) -> anyhow::Result<()> {
    let chain_id = command
        .common()
        .chain_id
        .map(eth::ChainId::new)
        .transpose()?;
    let account = command.common().account;
    let action = command.common().action;

    match command {
        cli::Command::DepositEth { to, amount, .. } => {
            let request = form::DepositEthForm { to, amount }.request()?;
            perform(node, defaults, action, scope(request, chain_id, account)).await
        }
        cli::Command::DepositErc20 {
            l1_token,
            l2_token,
            to,
            amount,
            ..
        } => {
            let form = form::DepositErc20Form {
                l1_token,
                l2_token,
                to,
                amount,
            };
            let chain = chain_id.or(defaults.l1_chain_id);
            let decimals = token_decimals(node.as_ref(), chain, form.token()).await;
            refuse_unscaled_write(action, decimals)?;
            let request = form.request(decimals)?;
            perform(node, defaults, action, scope(request, chain_id, account)).await
        }
        cli::Command::WithdrawEth { to, amount, .. } => {
            let request = form::WithdrawEthForm { to, amount }.request()?;
            perform(node, defaults, action, scope(request, chain_id, account)).await
        }
        cli::Command::WithdrawErc20 {
            l2_token,
            to,
            amount,
            ..
        } => {
            let form = form::WithdrawErc20Form {
                l2_token,
                to,
                amount,
            };
            let chain = chain_id.or(defaults.l2_chain_id);
            let decimals = token_decimals(node.as_ref(), chain, form.token()).await;
            refuse_unscaled_write(action, decimals)?;
            let request = form.request(decimals)?;
            perform(node, defaults, action, scope(request, chain_id, account)).await
        }
    }
}

fn scope<A: Action>(
    request: Request<A>,
    chain_id: Option<eth::ChainId>,
    account: Option<eth::Address>,
) -> Request<A> {
    Request {
        chain_id,
        account,
        ..request
    }
}

/// Resolves the decimals of the token the amount is denominated in. Failures
/// leave the decimals unresolved.
async fn token_decimals(
    node: &dyn Node,
    chain: Option<eth::ChainId>,
    token: Option<eth::TokenAddress>,
) -> Option<u8> {
    let token = token?;
    let decimals = async {
        let client = node.public_client(chain).await?;
        bridge::erc20::decimals(client.as_ref(), token).await
    };
    match decimals.await {
        Ok(decimals) => Some(decimals),
        Err(err) => {
            tracing::warn!(?err, token = ?token.0, "failed to fetch token decimals");
            None
        }
    }
}

fn refuse_unscaled_write(action: form::Action, decimals: Option<u8>) -> anyhow::Result<()> {
    if action == form::Action::Write && decimals.is_none() {
        anyhow::bail!("token decimals are unknown, refusing to send a zero amount");
    }
    Ok(())
}

async fn perform<A: Action>(
    node: Arc<dyn Node>,
    defaults: &Defaults,
    action: form::Action,
    request: Request<A>,
) -> anyhow::Result<()> {
    let chain = request.clone().with_defaults(defaults).chain_id;
    let operation = Operation::<A>::new(node, defaults.clone());

    match action {
        form::Action::Simulate => {
            if let Err(err) = operation.simulate(request).await {
                tracing::debug!(?err, "simulation settled with an error");
            }
            println!("{}", render_simulation(&operation.simulation_state()));
            check(operation.simulation_state(), action)
        }
        form::Action::Write => {
            operation.write(request).await.context("write task failed")?;
            println!("{}", render_write(&operation.write_state(), chain));
            check(operation.write_state(), action)
        }
    }
}

fn check<T>(state: ActionState<T>, action: form::Action) -> anyhow::Result<()> {
    match state {
        ActionState::Error(err) => Err(anyhow::Error::new(err).context(format!("{action} failed"))),
        _ => Ok(()),
    }
}

/// Renders the simulation state of an operation.
pub fn render_simulation(state: &ActionState<Simulation>) -> String {
    let mut lines = vec![format!("Status: {}", state.status())];
    if let Some(simulation) = state.data() {
        lines.push(format!("Chain: {}", simulation.chain));
        lines.push(format!("To: {}", simulation.call.to.0));
        lines.push(format!(
            "Value: {} ETH",
            conv::units_to_decimal(&simulation.call.value.0, form::ETHER_DECIMALS)
        ));
        lines.push(format!("Gas: {}", simulation.gas.0));
        lines.push(format!("Output: {}", simulation.output));
    }
    if let Some(err) = state.error() {
        lines.push(format!("Error: {err}"));
    }
    lines.join("\n")
}

/// Renders the write state of an operation, linking successful transactions
/// to the block explorer of the chain they were sent on.
pub fn render_write(state: &ActionState<eth::TxHash>, chain: Option<eth::ChainId>) -> String {
    let mut lines = vec![format!("Status: {}", state.status())];
    if let Some(hash) = state.data() {
        lines.push(format!("Transaction: {hash}"));
        if let Some(chain) = chain {
            lines.push(format!("Explorer: {}", chain.transaction_url(hash)));
        }
    }
    if let Some(err) = state.error() {
        lines.push(format!("Error: {err}"));
    }
    lines.join("\n")
}
