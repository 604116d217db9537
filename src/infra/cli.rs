//! CLI arguments for the `opbridge` binary.

use {
    crate::domain::{eth, form},
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

/// Withdrawal token used when none is given on the command line.
pub const DEFAULT_WITHDRAW_TOKEN: &str = "0x7c6b91D9Be155A6Db01f749217d76fF02A7227F2";

/// Simulate and send OP-stack bridge transactions.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The log filter.
    #[arg(long, env = "RUST_LOG", default_value = "warn,opbridge=info")]
    pub log: String,

    /// Path to the bridge configuration file.
    #[arg(long, env = "OPBRIDGE_CONFIG")]
    pub config: PathBuf,

    /// Hex-encoded private key of the sending account. Only needed for
    /// writes.
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Print the collected metrics once the command finished.
    #[arg(long)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by all bridge commands.
#[derive(clap::Args, Debug)]
pub struct Common {
    /// Whether to only simulate the transaction or to also send it.
    #[arg(long, value_enum, default_value_t)]
    pub action: form::Action,

    /// Chain to send the transaction on. Defaults to the configured chain of
    /// the side of the bridge the action starts on.
    #[arg(long)]
    pub chain_id: Option<u64>,

    /// Sender used when simulating. Writes require it to be the wallet
    /// account.
    #[arg(long)]
    pub account: Option<eth::Address>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Deposit ETH from L1 to L2 through the portal.
    DepositEth {
        #[command(flatten)]
        common: Common,

        /// Recipient on L2.
        #[arg(long)]
        to: String,

        /// Amount of ETH, e.g. `0.01`.
        #[arg(long)]
        amount: String,
    },

    /// Deposit an ERC20 token from L1 to L2 through the standard bridge.
    DepositErc20 {
        #[command(flatten)]
        common: Common,

        #[arg(long)]
        l1_token: String,

        #[arg(long)]
        l2_token: String,

        /// Recipient on L2.
        #[arg(long)]
        to: String,

        /// Amount in whole tokens, scaled by the token's decimals.
        #[arg(long)]
        amount: String,
    },

    /// Withdraw ETH from L2 to L1 through the L2 standard bridge.
    WithdrawEth {
        #[command(flatten)]
        common: Common,

        /// Recipient on L1.
        #[arg(long)]
        to: String,

        /// Amount of ETH, e.g. `0.01`.
        #[arg(long)]
        amount: String,
    },

    /// Withdraw an ERC20 token from L2 to L1 through the L2 standard bridge.
    WithdrawErc20 {
        #[command(flatten)]
        common: Common,

        #[arg(long, default_value = DEFAULT_WITHDRAW_TOKEN)]
        l2_token: String,

        /// Recipient on L1.
        #[arg(long)]
        to: String,

        /// Amount in whole tokens, scaled by the token's decimals.
        #[arg(long)]
        amount: String,
    },
}

impl Command {
    pub fn common(&self) -> &Common {
        match self {
            Self::DepositEth { common, .. }
            | Self::DepositErc20 { common, .. }
            | Self::WithdrawEth { common, .. }
            | Self::WithdrawErc20 { common, .. } => common,
        }
    }
}
