pub mod bridge;
pub mod eth;
pub mod form;
pub mod operation;
