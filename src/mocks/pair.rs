//! Mock Pair contract
//!
//! An LP token bound to a (token0, token1) pair. The pair holds the pooled
//! token balances directly; those balances are its reserves. Mint, burn
//! and pay-out are gated to the router.
use odra::casper_types::U256;
use odra::prelude::*;
use odra::{Address, SubModule, Var};

use super::sort_tokens;
use crate::errors::DexFacadeError;
use crate::token::{Cep18TokenContractRef, LpToken};

/// Liquidity pair fixture
#[odra::module]
pub struct MockPair {
    /// LP token for this pair
    lp_token: SubModule<LpToken>,
    /// Address of token0
    token0: Var<Address>,
    /// Address of token1
    token1: Var<Address>,
    /// Router allowed to mint, burn and pay out
    router: Var<Address>,
}

#[odra::module]
impl MockPair {
    /// Initialize the pair with two token addresses and the router
    pub fn init(&mut self, token_a: Address, token_b: Address, router: Address) {
        let (token0, token1) = sort_tokens(token_a, token_b);
        self.token0.set(token0);
        self.token1.set(token1);
        self.router.set(router);
        self.lp_token
            .init(String::from("Mock LP Token"), String::from("MOCK-LP"));
    }

    // ============ View Functions ============

    pub fn token0(&self) -> Address {
        self.token0.get_or_revert_with(DexFacadeError::PairNotFound)
    }

    pub fn token1(&self) -> Address {
        self.token1.get_or_revert_with(DexFacadeError::PairNotFound)
    }

    pub fn total_supply(&self) -> U256 {
        self.lp_token.total_supply()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.lp_token.balance_of(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.lp_token.allowance(owner, spender)
    }

    // ============ LP Token Functions ============

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.lp_token.transfer(to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.lp_token.approve(spender, amount)
    }

    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.lp_token.transfer_from(from, to, amount)
    }

    // ============ Router Functions ============

    /// Mint LP tokens to a liquidity provider
    pub fn mint(&mut self, to: Address, amount: U256) -> Result<(), DexFacadeError> {
        self.ensure_router()?;
        self.lp_token.mint(to, amount);
        Ok(())
    }

    /// Burn LP tokens previously transferred to this pair and send the
    /// proportional share of both pooled tokens to `to`.
    /// Returns (amount0, amount1).
    pub fn burn(&mut self, to: Address, liquidity: U256) -> Result<(U256, U256), DexFacadeError> {
        self.ensure_router()?;

        let this = self.env().self_address();
        let total_supply = self.total_supply();
        if total_supply.is_zero() || self.lp_token.balance_of(this) < liquidity {
            return Err(DexFacadeError::InsufficientLiquidity);
        }

        let token0 = self.token0();
        let token1 = self.token1();
        let balance0 = self.pooled_balance(token0);
        let balance1 = self.pooled_balance(token1);

        // Proportional share, computed against the pre-burn supply
        let amount0 = liquidity * balance0 / total_supply;
        let amount1 = liquidity * balance1 / total_supply;

        self.lp_token.burn(this, liquidity);
        self.pay_out(token0, to, amount0)?;
        self.pay_out(token1, to, amount1)?;

        Ok((amount0, amount1))
    }

    /// Send pooled tokens out during a swap
    pub fn pay(&mut self, token: Address, to: Address, amount: U256) -> Result<(), DexFacadeError> {
        self.ensure_router()?;
        if self.pooled_balance(token) < amount {
            return Err(DexFacadeError::InsufficientLiquidity);
        }
        self.pay_out(token, to, amount)
    }

    // ============ Internal Functions ============

    fn ensure_router(&self) -> Result<(), DexFacadeError> {
        let router = self.router.get_or_revert_with(DexFacadeError::Unauthorized);
        if self.env().caller() != router {
            return Err(DexFacadeError::Unauthorized);
        }
        Ok(())
    }

    fn pooled_balance(&self, token: Address) -> U256 {
        let token_ref = Cep18TokenContractRef::new(self.env(), token);
        token_ref.balance_of(self.env().self_address())
    }

    fn pay_out(&self, token: Address, to: Address, amount: U256) -> Result<(), DexFacadeError> {
        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);
        if !token_ref.transfer(to, amount) {
            return Err(DexFacadeError::TransferFailed);
        }
        Ok(())
    }
}
