//! Mock Router contract
//!
//! Implements the facade's Router interface with deterministic semantics:
//! liquidity adds consume exactly the desired amounts, removes pay out the
//! proportional pair share, and exact-output swaps settle one input unit
//! per output unit through pair inventory. Deadlines and min/max bounds
//! are enforced like the real protocol; the pricing curve is not.
use odra::casper_types::U256;
use odra::prelude::*;
use odra::{Address, Var};

use super::sort_tokens;
use crate::errors::DexFacadeError;
use crate::token::Cep18TokenContractRef;

/// External interface for the pair fixture
#[odra::external_contract]
pub trait LiquidityPair {
    fn token0(&self) -> Address;
    fn token1(&self) -> Address;
    fn total_supply(&self) -> U256;
    fn balance_of(&self, owner: Address) -> U256;
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;
    fn mint(&mut self, to: Address, amount: U256) -> Result<(), DexFacadeError>;
    fn burn(&mut self, to: Address, liquidity: U256) -> Result<(U256, U256), DexFacadeError>;
    fn pay(&mut self, token: Address, to: Address, amount: U256) -> Result<(), DexFacadeError>;
}

/// External interface for the factory fixture
#[odra::external_contract]
pub trait PairRegistry {
    fn get_pair(&self, token_a: Address, token_b: Address) -> Option<Address>;
}

/// Router fixture
#[odra::module]
pub struct MockRouter {
    /// Factory holding the pair registry
    factory: Var<Address>,
}

#[odra::module]
impl MockRouter {
    /// Initialize the router with the factory address
    pub fn init(&mut self, factory: Address) {
        self.factory.set(factory);
    }

    /// Get the factory address
    pub fn factory(&self) -> Address {
        self.factory.get_or_revert_with(DexFacadeError::Unauthorized)
    }

    /// Swap tokens for an exact output amount at a flat 1:1 rate.
    /// Returns the amounts moved along the path.
    pub fn swap_tokens_for_exact_tokens(
        &mut self,
        amount_out: U256,
        amount_in_max: U256,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<U256>, DexFacadeError> {
        self.ensure_deadline(deadline)?;
        if path.len() < 2 {
            return Err(DexFacadeError::InvalidPath);
        }

        // Flat rate: one input unit per output unit on every hop
        let amount_in = amount_out;
        if amount_in > amount_in_max {
            return Err(DexFacadeError::ExcessiveSlippage);
        }

        let caller = self.env().caller();
        let first_pair = self.get_pair(path[0], path[1])?;
        self.pull_token(path[0], caller, first_pair, amount_in)?;

        for i in 0..path.len() - 1 {
            let pair = self.get_pair(path[i], path[i + 1])?;
            let recipient = if i < path.len() - 2 {
                self.get_pair(path[i + 1], path[i + 2])?
            } else {
                to
            };
            let mut pair_ref = LiquidityPairContractRef::new(self.env(), pair);
            pair_ref.pay(path[i + 1], recipient, amount_out)?;
        }

        Ok(vec![amount_out; path.len()])
    }

    /// Add liquidity, consuming exactly the desired amounts.
    /// Returns (amount_a, amount_b, liquidity).
    pub fn add_liquidity(
        &mut self,
        token_a: Address,
        token_b: Address,
        amount_a_desired: U256,
        amount_b_desired: U256,
        amount_a_min: U256,
        amount_b_min: U256,
        to: Address,
        deadline: u64,
    ) -> Result<(U256, U256, U256), DexFacadeError> {
        self.ensure_deadline(deadline)?;

        if amount_a_desired < amount_a_min || amount_b_desired < amount_b_min {
            return Err(DexFacadeError::InsufficientAmount);
        }

        let caller = self.env().caller();
        let pair = self.get_pair(token_a, token_b)?;

        self.pull_token(token_a, caller, pair, amount_a_desired)?;
        self.pull_token(token_b, caller, pair, amount_b_desired)?;

        let liquidity = amount_a_desired + amount_b_desired;
        let mut pair_ref = LiquidityPairContractRef::new(self.env(), pair);
        pair_ref.mint(to, liquidity)?;

        Ok((amount_a_desired, amount_b_desired, liquidity))
    }

    /// Burn LP tokens and return the underlying amounts to `to`.
    /// Returns (amount_a, amount_b).
    pub fn remove_liquidity(
        &mut self,
        token_a: Address,
        token_b: Address,
        liquidity: U256,
        amount_a_min: U256,
        amount_b_min: U256,
        to: Address,
        deadline: u64,
    ) -> Result<(U256, U256), DexFacadeError> {
        self.ensure_deadline(deadline)?;

        let caller = self.env().caller();
        let pair = self.get_pair(token_a, token_b)?;

        let mut pair_ref = LiquidityPairContractRef::new(self.env(), pair);
        pair_ref.transfer_from(caller, pair, liquidity);
        let (amount0, amount1) = pair_ref.burn(to, liquidity)?;

        let (token0, _) = sort_tokens(token_a, token_b);
        let (amount_a, amount_b) = if token_a == token0 {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        };

        if amount_a < amount_a_min || amount_b < amount_b_min {
            return Err(DexFacadeError::InsufficientAmount);
        }

        Ok((amount_a, amount_b))
    }

    // ============ Internal Functions ============

    fn ensure_deadline(&self, deadline: u64) -> Result<(), DexFacadeError> {
        if self.env().get_block_time() > deadline {
            return Err(DexFacadeError::DeadlineExpired);
        }
        Ok(())
    }

    fn get_pair(&self, token_a: Address, token_b: Address) -> Result<Address, DexFacadeError> {
        let factory_ref = PairRegistryContractRef::new(self.env(), self.factory());
        factory_ref
            .get_pair(token_a, token_b)
            .ok_or(DexFacadeError::PairNotFound)
    }

    fn pull_token(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), DexFacadeError> {
        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);
        if !token_ref.transfer_from(from, to, amount) {
            return Err(DexFacadeError::TransferFailed);
        }
        Ok(())
    }
}
