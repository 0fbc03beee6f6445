//! Mock AMM collaborators
//!
//! Deterministic doubles for the wrapped protocol, used by the test suite
//! and the local deploy script:
//! - MockFactory: pair registry
//! - MockPair: LP token bound to a token pair, proportional burn
//! - MockRouter: flat-rate exact-output swaps, desired-amount liquidity
//!
//! There is no pricing curve here on purpose; the facade treats the real
//! protocol as the sole authority for AMM math.

pub mod factory;
pub mod pair;
pub mod router;

pub use factory::MockFactory;
pub use pair::MockPair;
pub use router::MockRouter;

use odra::Address;

/// Order two token addresses canonically
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}
