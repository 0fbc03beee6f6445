//! Events emitted by the facade and token contracts
use odra::casper_types::U256;
use odra::prelude::*;
use odra::Address;

/// Emitted on every successful exact-output swap
#[odra::event]
pub struct TokensSwapped {
    pub caller: Address,
    pub recipient: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub amount_in: U256,
    pub amount_out: U256,
}

/// Emitted when liquidity is provided through the facade
#[odra::event]
pub struct LiquidityAdded {
    pub provider: Address,
    pub recipient: Address,
    pub token_a: Address,
    pub token_b: Address,
    pub amount_a: U256,
    pub amount_b: U256,
    pub liquidity: U256,
}

/// Emitted when liquidity is withdrawn through the facade
#[odra::event]
pub struct LiquidityRemoved {
    pub provider: Address,
    pub recipient: Address,
    pub token_a: Address,
    pub token_b: Address,
    pub amount_a: U256,
    pub amount_b: U256,
    pub liquidity: U256,
}

/// CEP-18 transfer event
#[odra::event]
pub struct Transfer {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub amount: U256,
}

/// CEP-18 approval event
#[odra::event]
pub struct Approval {
    pub owner: Address,
    pub spender: Address,
    pub amount: U256,
}
