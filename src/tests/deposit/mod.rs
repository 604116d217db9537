use {
    crate::{
        domain::{
            bridge::{DepositEth, Request},
            eth,
        },
        tests,
    },
};

mod simulate;
mod write;

pub const RECIPIENT: eth::Address = eth::Address::repeat_byte(0xbb);

/// Deposit of 1.5 ETH to [`RECIPIENT`].
pub fn request() -> Request<DepositEth> {
    Request::new(DepositEth::new(RECIPIENT, eth::Ether(tests::ether("1.5"))))
}
