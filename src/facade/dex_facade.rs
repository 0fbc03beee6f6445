//! DexFacade contract
//!
//! A thin facade over an existing AMM protocol. It validates arguments,
//! pulls caller funds, delegates execution to the wrapped Router and keeps
//! a running swap counter. All pricing, reserve and LP mint/burn math is
//! owned by the wrapped protocol.
use odra::casper_types::account::AccountHash;
use odra::casper_types::U256;
use odra::prelude::*;
use odra::{Address, Var};

use crate::errors::DexFacadeError;
use crate::events::{LiquidityAdded, LiquidityRemoved, TokensSwapped};
use crate::token::Cep18TokenContractRef;

/// External interface for the wrapped Router contract
#[odra::external_contract]
pub trait RouterContract {
    fn swap_tokens_for_exact_tokens(
        &mut self,
        amount_out: U256,
        amount_in_max: U256,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> Result<Vec<U256>, DexFacadeError>;
    fn add_liquidity(
        &mut self,
        token_a: Address,
        token_b: Address,
        amount_a_desired: U256,
        amount_b_desired: U256,
        amount_a_min: U256,
        amount_b_min: U256,
        to: Address,
        deadline: u64,
    ) -> Result<(U256, U256, U256), DexFacadeError>;
    fn remove_liquidity(
        &mut self,
        token_a: Address,
        token_b: Address,
        liquidity: U256,
        amount_a_min: U256,
        amount_b_min: U256,
        to: Address,
        deadline: u64,
    ) -> Result<(U256, U256), DexFacadeError>;
}

/// External interface for the wrapped Factory contract
#[odra::external_contract]
pub trait FactoryContract {
    fn get_pair(&self, token_a: Address, token_b: Address) -> Option<Address>;
}

/// External interface for a pair (LP) token
#[odra::external_contract]
pub trait PairContract {
    fn balance_of(&self, owner: Address) -> U256;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;
}

/// All-zero account hash, the platform analogue of the EVM zero address
pub fn zero_address() -> Address {
    Address::Account(AccountHash::new([0u8; 32]))
}

/// DexFacade contract
#[odra::module]
pub struct DexFacade {
    /// Wrapped Router contract address
    router: Var<Address>,
    /// Wrapped Factory contract address
    factory: Var<Address>,
    /// Deploying account, informational only
    owner: Var<Address>,
    /// Number of successful swaps executed through this facade
    swap_counter: Var<u64>,
}

#[odra::module]
impl DexFacade {
    /// Initialize the facade with the Router and Factory addresses
    pub fn init(&mut self, router: Address, factory: Address) {
        self.router.set(router);
        self.factory.set(factory);
        self.owner.set(self.env().caller());
        self.swap_counter.set(0);
    }

    // ============ View Functions ============

    /// Get the wrapped Router address
    pub fn router_address(&self) -> Address {
        self.router.get_or_revert_with(DexFacadeError::Unauthorized)
    }

    /// Get the wrapped Factory address
    pub fn factory_address(&self) -> Address {
        self.factory.get_or_revert_with(DexFacadeError::Unauthorized)
    }

    /// Get the deploying account
    pub fn owner(&self) -> Address {
        self.owner.get_or_revert_with(DexFacadeError::Unauthorized)
    }

    /// Get the number of successful swaps executed so far
    pub fn swap_counter(&self) -> u64 {
        self.swap_counter.get_or_default()
    }

    /// Get the holder's balance of the pair token for (token_a, token_b)
    pub fn check_liquidity_added(
        &self,
        token_a: Address,
        token_b: Address,
        holder: Address,
    ) -> Result<U256, DexFacadeError> {
        let pair = self.pair_for(token_a, token_b)?;
        let pair_ref = PairContractContractRef::new(self.env(), pair);
        Ok(pair_ref.balance_of(holder))
    }

    /// Get the canonical pair address for (token_a, token_b)
    pub fn get_pair_address(
        &self,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, DexFacadeError> {
        self.pair_for(token_a, token_b)
    }

    // ============ Swap ============

    /// Swap up to `amount_in_max` of `path[0]` for exactly `amount_out`
    /// of the last token in `path`, sent to `recipient`.
    ///
    /// Requires a prior allowance of `amount_in_max` from the caller to
    /// this contract on the input token. Any unspent input is refunded to
    /// the caller within the same call.
    pub fn swap_tokens(
        &mut self,
        amount_out: U256,
        amount_in_max: U256,
        path: Vec<Address>,
        recipient: Address,
        deadline: u64,
    ) -> Result<(), DexFacadeError> {
        if recipient == zero_address() {
            return Err(DexFacadeError::ZeroAddressNotAllowed);
        }
        if amount_in_max.is_zero() {
            return Err(DexFacadeError::ZeroValueNotAllowed);
        }
        if path.len() < 2 {
            return Err(DexFacadeError::InvalidPath);
        }

        let caller = self.env().caller();
        let this = self.env().self_address();
        let token_in = path[0];
        let token_out = path[path.len() - 1];
        let router = self.router_address();

        self.safe_transfer_from(token_in, caller, this, amount_in_max)?;
        self.approve_token(token_in, router, amount_in_max);

        let mut router_ref = RouterContractContractRef::new(self.env(), router);
        let amounts =
            router_ref.swap_tokens_for_exact_tokens(amount_out, amount_in_max, path, recipient, deadline)?;

        let spent = amounts[0];
        let leftover = amount_in_max.saturating_sub(spent);
        if !leftover.is_zero() {
            self.safe_transfer(token_in, caller, leftover)?;
        }

        self.swap_counter.set(self.swap_counter.get_or_default() + 1);

        self.env().emit_event(TokensSwapped {
            caller,
            recipient,
            token_in,
            token_out,
            amount_in: spent,
            amount_out,
        });

        Ok(())
    }

    // ============ Liquidity ============

    /// Provide liquidity to the (token_a, token_b) pool via the Router.
    /// Returns (amount_a, amount_b, liquidity).
    ///
    /// Requires prior allowances of the desired amounts from the caller to
    /// this contract. Unconsumed desired amounts are refunded.
    pub fn add_liquidity(
        &mut self,
        token_a: Address,
        token_b: Address,
        amount_a_desired: U256,
        amount_b_desired: U256,
        amount_a_min: U256,
        amount_b_min: U256,
        recipient: Address,
        deadline: u64,
    ) -> Result<(U256, U256, U256), DexFacadeError> {
        if token_a == zero_address() || token_b == zero_address() || recipient == zero_address() {
            return Err(DexFacadeError::ZeroAddressNotAllowed);
        }

        let caller = self.env().caller();
        let this = self.env().self_address();
        let router = self.router_address();

        self.safe_transfer_from(token_a, caller, this, amount_a_desired)?;
        self.safe_transfer_from(token_b, caller, this, amount_b_desired)?;
        self.approve_token(token_a, router, amount_a_desired);
        self.approve_token(token_b, router, amount_b_desired);

        let mut router_ref = RouterContractContractRef::new(self.env(), router);
        let (amount_a, amount_b, liquidity) = router_ref.add_liquidity(
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        )?;

        let leftover_a = amount_a_desired.saturating_sub(amount_a);
        if !leftover_a.is_zero() {
            self.safe_transfer(token_a, caller, leftover_a)?;
        }
        let leftover_b = amount_b_desired.saturating_sub(amount_b);
        if !leftover_b.is_zero() {
            self.safe_transfer(token_b, caller, leftover_b)?;
        }

        self.env().emit_event(LiquidityAdded {
            provider: caller,
            recipient,
            token_a,
            token_b,
            amount_a,
            amount_b,
            liquidity,
        });

        Ok((amount_a, amount_b, liquidity))
    }

    /// Burn `liquidity` pair-token units and send the underlying amounts
    /// to `recipient` via the Router. Returns (amount_a, amount_b).
    ///
    /// Requires a prior allowance of `liquidity` from the caller to this
    /// contract on the pair token.
    pub fn remove_liquidity(
        &mut self,
        token_a: Address,
        token_b: Address,
        liquidity: U256,
        amount_a_min: U256,
        amount_b_min: U256,
        recipient: Address,
        deadline: u64,
    ) -> Result<(U256, U256), DexFacadeError> {
        if token_a == zero_address() || token_b == zero_address() || recipient == zero_address() {
            return Err(DexFacadeError::ZeroAddressNotAllowed);
        }
        if liquidity.is_zero() {
            return Err(DexFacadeError::ZeroValueNotAllowed);
        }

        let caller = self.env().caller();
        let this = self.env().self_address();
        let router = self.router_address();
        let pair = self.pair_for(token_a, token_b)?;

        let mut pair_ref = PairContractContractRef::new(self.env(), pair);
        if pair_ref.balance_of(caller) < liquidity {
            return Err(DexFacadeError::InsufficientLiquidity);
        }

        if !pair_ref.transfer_from(caller, this, liquidity) {
            return Err(DexFacadeError::TransferFailed);
        }
        pair_ref.approve(router, liquidity);

        let mut router_ref = RouterContractContractRef::new(self.env(), router);
        let (amount_a, amount_b) = router_ref.remove_liquidity(
            token_a,
            token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        )?;

        self.env().emit_event(LiquidityRemoved {
            provider: caller,
            recipient,
            token_a,
            token_b,
            amount_a,
            amount_b,
            liquidity,
        });

        Ok((amount_a, amount_b))
    }

    // ============ Internal Functions ============

    /// Resolve the pair address from the Factory, never cached locally
    fn pair_for(&self, token_a: Address, token_b: Address) -> Result<Address, DexFacadeError> {
        let factory_ref = FactoryContractContractRef::new(self.env(), self.factory_address());
        factory_ref
            .get_pair(token_a, token_b)
            .ok_or(DexFacadeError::PairNotFound)
    }

    fn safe_transfer_from(
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

    fn safe_transfer(&self, token: Address, to: Address, amount: U256) -> Result<(), DexFacadeError> {
        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);
        if !token_ref.transfer(to, amount) {
            return Err(DexFacadeError::TransferFailed);
        }
        Ok(())
    }

    fn approve_token(&self, token: Address, spender: Address, amount: U256) {
        let mut token_ref = Cep18TokenContractRef::new(self.env(), token);
        token_ref.approve(spender, amount);
    }
}
