//! CEP-18 style fungible token support
//!
//! `Cep18Token` is the external interface the facade uses to talk to any
//! asset or pair token. `LpToken` is a plain CEP-18 implementation used as
//! the LP token inside `MockPair` and as a standalone test/demo token.
use odra::casper_types::U256;
use odra::prelude::*;
use odra::{Address, Mapping, Var};

use crate::errors::DexFacadeError;
use crate::events::{Approval, Transfer};

/// External interface for any CEP-18 compatible token
#[odra::external_contract]
pub trait Cep18Token {
    fn total_supply(&self) -> U256;
    fn balance_of(&self, owner: Address) -> U256;
    fn allowance(&self, owner: Address, spender: Address) -> U256;
    fn transfer(&mut self, to: Address, amount: U256) -> bool;
    fn approve(&mut self, spender: Address, amount: U256) -> bool;
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;
}

/// CEP-18 token module
#[odra::module]
pub struct LpToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: (owner, spender) -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl LpToken {
    pub fn init(&mut self, name: String, symbol: String) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(18);
        self.total_supply.set(U256::zero());
    }

    // ============ View Functions ============

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    // ============ Write Functions ============

    /// Transfer tokens to another address
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Approve a spender to spend the caller's tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens on behalf of `from` (requires approval)
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        let current_allowance = self.allowance(from, caller);

        if current_allowance < amount {
            self.env().revert(DexFacadeError::InsufficientAllowance);
        }

        self.approve_internal(from, caller, current_allowance - amount);
        self.transfer_internal(from, to, amount);
        true
    }

    /// Mint new tokens. Open on purpose: this token is a fixture; real
    /// deployments wrap an existing CEP-18 asset instead.
    pub fn mint(&mut self, to: Address, amount: U256) {
        let balance = self.balance_of(to);
        self.balances.set(&to, balance + amount);
        self.total_supply
            .set(self.total_supply.get_or_default() + amount);

        self.env().emit_event(Transfer {
            from: None,
            to: Some(to),
            amount,
        });
    }

    /// Burn tokens from an address
    pub fn burn(&mut self, from: Address, amount: U256) {
        let balance = self.balance_of(from);
        if balance < amount {
            self.env().revert(DexFacadeError::InsufficientBalance);
        }
        self.balances.set(&from, balance - amount);
        self.total_supply
            .set(self.total_supply.get_or_default() - amount);

        self.env().emit_event(Transfer {
            from: Some(from),
            to: None,
            amount,
        });
    }

    // ============ Internal Functions ============

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(DexFacadeError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from: Some(from),
            to: Some(to),
            amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            amount,
        });
    }
}
