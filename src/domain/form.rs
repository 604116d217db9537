//! Binding of free-text user input to bridge requests.
//!
//! Forms hold the raw strings a user typed and turn them into typed
//! [`Request`]s. Token amounts can only be scaled once the token's decimals
//! are known; until then the amount is zero.

use {
    crate::{
        domain::{
            bridge::{DepositErc20, DepositEth, Request, WithdrawErc20, WithdrawEth},
            eth,
        },
        util::conv,
    },
    bigdecimal::BigDecimal,
    std::{fmt, str::FromStr},
};

/// Decimals of Ether and of amounts entered in Ether.
pub const ETHER_DECIMALS: u8 = 18;

/// Which phase a user trigger runs and which state is displayed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Action {
    #[default]
    Simulate,
    Write,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Simulate => "Simulate",
            Self::Write => "Write",
        })
    }
}

/// Parses a decimal amount into an integer amount of the smallest unit, e.g.
/// `"1.5"` with 18 decimals is `1500000000000000000`.
pub fn parse_units(input: &str, decimals: u8) -> Result<eth::U256, Error> {
    let invalid = || Error::InvalidAmount(input.to_owned());
    let decimal = BigDecimal::from_str(input.trim()).map_err(|_| invalid())?;
    conv::decimal_to_units(&decimal, decimals).ok_or_else(invalid)
}

/// Parses an amount whose precision may not be known yet. Without decimals the
/// input is not looked at and the amount is zero.
pub fn parse_amount(input: &str, decimals: Option<u8>) -> Result<eth::U256, Error> {
    match decimals {
        Some(decimals) => parse_units(input, decimals),
        None => Ok(eth::U256::ZERO),
    }
}

pub fn parse_address(field: &'static str, input: &str) -> Result<eth::Address, Error> {
    eth::Address::from_str(input.trim()).map_err(|_| Error::InvalidAddress {
        field,
        input: input.to_owned(),
    })
}

#[derive(Clone, Debug, Default)]
pub struct DepositEthForm {
    pub to: String,
    pub amount: String,
}

impl DepositEthForm {
    pub fn request(&self) -> Result<Request<DepositEth>, Error> {
        let to = parse_address("to", &self.to)?;
        let value = parse_units(&self.amount, ETHER_DECIMALS)?;
        Ok(Request::new(DepositEth::new(to, eth::Ether(value))))
    }
}

#[derive(Clone, Debug, Default)]
pub struct DepositErc20Form {
    pub l1_token: String,
    pub l2_token: String,
    pub to: String,
    pub amount: String,
}

impl DepositErc20Form {
    /// The token whose decimals scale the amount, if the input is a valid
    /// address.
    pub fn token(&self) -> Option<eth::TokenAddress> {
        parse_address("l1_token", &self.l1_token)
            .ok()
            .map(eth::TokenAddress)
    }

    pub fn request(&self, decimals: Option<u8>) -> Result<Request<DepositErc20>, Error> {
        let l1_token = eth::TokenAddress(parse_address("l1_token", &self.l1_token)?);
        let l2_token = eth::TokenAddress(parse_address("l2_token", &self.l2_token)?);
        let to = parse_address("to", &self.to)?;
        let amount = parse_amount(&self.amount, decimals)?;
        Ok(Request::new(DepositErc20::new(l1_token, l2_token, to, amount)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct WithdrawEthForm {
    pub to: String,
    pub amount: String,
}

impl WithdrawEthForm {
    pub fn request(&self) -> Result<Request<WithdrawEth>, Error> {
        let to = parse_address("to", &self.to)?;
        let amount = parse_units(&self.amount, ETHER_DECIMALS)?;
        Ok(Request::new(WithdrawEth::new(to, amount)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct WithdrawErc20Form {
    pub l2_token: String,
    pub to: String,
    pub amount: String,
}

impl WithdrawErc20Form {
    pub fn token(&self) -> Option<eth::TokenAddress> {
        parse_address("l2_token", &self.l2_token)
            .ok()
            .map(eth::TokenAddress)
    }

    pub fn request(&self, decimals: Option<u8>) -> Result<Request<WithdrawErc20>, Error> {
        let l2_token = eth::TokenAddress(parse_address("l2_token", &self.l2_token)?);
        let to = parse_address("to", &self.to)?;
        let amount = parse_amount(&self.amount, decimals)?;
        Ok(Request::new(WithdrawErc20::new(l2_token, to, amount)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {field} address {input:?}")]
    InvalidAddress { field: &'static str, input: String },

    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
}
