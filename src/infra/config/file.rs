use {
    crate::{
        domain::{
            bridge::{DEFAULT_GAS_LIMIT, Defaults},
            eth,
        },
        infra::contracts::Deployment,
        util::serialize,
    },
    serde::Deserialize,
    serde_with::serde_as,
    std::{path::Path, time::Duration},
};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    /// The L1 chain deposits are sent on.
    l1: Chain,

    /// The L2 chain withdrawals are sent on. Contract addresses of known
    /// deployments are derived from it.
    l2: Chain,

    /// Override for the `OptimismPortal` address on L1.
    #[serde(default)]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    portal: Option<eth::Address>,

    /// Override for the `L1StandardBridge` address on L1.
    #[serde(default)]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    l1_standard_bridge: Option<eth::Address>,

    /// Gas limit used for the L2 leg of a bridge message when the caller does
    /// not specify one.
    #[serde(default = "default_gas_limit")]
    gas_limit: u32,

    /// Timeout for individual node requests.
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    request_timeout: Duration,
}

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Chain {
    #[serde_as(as = "serialize::ChainId")]
    chain_id: eth::ChainId,

    #[serde_as(as = "serde_with::DisplayFromStr")]
    node_url: reqwest::Url,
}

fn default_gas_limit() -> u32 {
    DEFAULT_GAS_LIMIT
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

/// Load the bridge configuration from a TOML file.
///
/// # Panics
///
/// This method panics if the config is invalid or on I/O errors.
pub async fn load(path: &Path) -> super::Config {
    let data = tokio::fs::read_to_string(path)
        .await
        .unwrap_or_else(|e| panic!("I/O error while reading {path:?}: {e:?}"));
    parse(&data).unwrap_or_else(|e| panic!("invalid configuration in {path:?}: {e}"))
}

fn parse(data: &str) -> Result<super::Config, Error> {
    let config: Config = toml::de::from_str(data)?;

    if config.l1.chain_id.layer() != eth::Layer::L1 {
        return Err(Error::WrongLayer("l1", config.l1.chain_id));
    }
    if config.l2.chain_id.layer() != eth::Layer::L2 {
        return Err(Error::WrongLayer("l2", config.l2.chain_id));
    }

    // Known contract addresses only apply if the L2 actually settles on the
    // configured L1.
    let deployment = Deployment::for_l2(config.l2.chain_id)
        .filter(|deployment| deployment.l1_chain_id == config.l1.chain_id);
    let defaults = Defaults {
        l1_chain_id: Some(config.l1.chain_id),
        l2_chain_id: Some(config.l2.chain_id),
        portal: config
            .portal
            .map(eth::ContractAddress)
            .or(deployment.map(|deployment| deployment.portal)),
        l1_standard_bridge: config
            .l1_standard_bridge
            .map(eth::ContractAddress)
            .or(deployment.map(|deployment| deployment.l1_standard_bridge)),
        gas_limit: config.gas_limit,
        ..Default::default()
    };

    Ok(super::Config {
        l1: super::Chain {
            chain_id: config.l1.chain_id,
            node_url: config.l1.node_url,
        },
        l2: super::Chain {
            chain_id: config.l2.chain_id,
            node_url: config.l2.node_url,
        },
        defaults,
        request_timeout: config.request_timeout,
    })
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("[{0}] chain {1} is on the wrong side of the bridge")]
    WrongLayer(&'static str, eth::ChainId),
}
