//! Payoff-at-expiry analysis for small options portfolios, served over HTTP.
//!
//! The `analysis` module is the pure core; `server` decodes and validates
//! requests and maps results onto the wire schemas.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod models;
pub mod server;
pub mod state;
