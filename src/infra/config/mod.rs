use {
    crate::domain::{bridge::Defaults, eth},
    std::time::Duration,
};

pub mod file;

/// Node connection for one side of the bridge.
#[derive(Clone, Debug)]
pub struct Chain {
    pub chain_id: eth::ChainId,
    pub node_url: reqwest::Url,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub l1: Chain,
    pub l2: Chain,
    pub defaults: Defaults,
    pub request_timeout: Duration,
}
