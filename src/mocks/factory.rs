//! Mock Factory contract
//!
//! Holds the canonical (token_a, token_b) -> pair mapping. Pairs are
//! registered explicitly by fixtures instead of being deployed on chain.
use odra::prelude::*;
use odra::{Address, Mapping, Var};

use super::sort_tokens;

/// Pair registry keyed by the sorted token pair
#[odra::module]
pub struct MockFactory {
    /// Mapping: (token0, token1) -> pair address
    pairs: Mapping<(Address, Address), Address>,
    /// Number of registered pairs
    pair_count: Var<u64>,
}

#[odra::module]
impl MockFactory {
    /// Register a deployed pair for a token pair
    pub fn register_pair(&mut self, token_a: Address, token_b: Address, pair: Address) {
        let key = sort_tokens(token_a, token_b);
        if self.pairs.get(&key).is_none() {
            self.pair_count.set(self.pair_count.get_or_default() + 1);
        }
        self.pairs.set(&key, pair);
    }

    /// Look up the pair address for a token pair, in either order
    pub fn get_pair(&self, token_a: Address, token_b: Address) -> Option<Address> {
        self.pairs.get(&sort_tokens(token_a, token_b))
    }

    /// Number of registered pairs
    pub fn pair_count(&self) -> u64 {
        self.pair_count.get_or_default()
    }
}
