//! Facade over an external AMM protocol
//!
//! This module contains:
//! - DexFacade: the user-facing contract delegating to Router and Factory
//! - External interfaces for the wrapped Router, Factory and Pair contracts

pub mod dex_facade;

#[cfg(test)]
pub mod tests;

pub use dex_facade::DexFacade;
