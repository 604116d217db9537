pub mod blockchain;
pub mod cli;
pub mod config;
pub mod contracts;
pub mod metrics;
pub mod node;
