mod chain_id;

pub use self::chain_id::ChainId;
