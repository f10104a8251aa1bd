pub mod contract;

pub use contract::{Contract, Direction, OptionKind, Portfolio, MAX_CONTRACTS};
