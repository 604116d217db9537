use crate::domain::eth;

mod erc20;

pub const RECIPIENT: eth::Address = eth::Address::repeat_byte(0xdd);
