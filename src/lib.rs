//! DexFacade contracts
//!
//! A facade contract over an external AMM protocol (Router + Factory +
//! Pair contracts). The facade validates caller intent, delegates swap and
//! liquidity operations to the wrapped Router, resolves pairs through the
//! wrapped Factory, and tracks a global swap counter. Mock collaborators
//! for the wrapped protocol live in `mocks` and back the test suite and
//! the local deploy script.

pub mod errors;
pub mod events;
pub mod facade;
pub mod mocks;
pub mod token;

pub use errors::DexFacadeError;
pub use facade::DexFacade;
