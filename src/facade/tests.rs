//! End-to-end tests for the facade against the mock AMM stack
use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, NoArgs};
use odra::prelude::Addressable;
use odra::Address;

use crate::errors::DexFacadeError;
use crate::facade::dex_facade::{zero_address, DexFacade, DexFacadeHostRef, DexFacadeInitArgs};
use crate::mocks::factory::MockFactory;
use crate::mocks::pair::{MockPair, MockPairHostRef, MockPairInitArgs};
use crate::mocks::router::{MockRouter, MockRouterInitArgs};
use crate::token::{LpToken, LpTokenHostRef, LpTokenInitArgs};

const DEADLINE: u64 = 1_000_000;

fn units(amount: u64) -> U256 {
    U256::from(amount) * U256::from(1_000_000_000_000_000_000u64)
}

struct Fixture {
    env: HostEnv,
    facade: DexFacadeHostRef,
    token_a: LpTokenHostRef,
    token_b: LpTokenHostRef,
    pair: MockPairHostRef,
    token_a_addr: Address,
    token_b_addr: Address,
    facade_addr: Address,
    pair_addr: Address,
    user: Address,
}

fn setup() -> Fixture {
    let env = odra_test::env();
    let user = env.get_account(1);

    let mut token_a = LpToken::deploy(
        &env,
        LpTokenInitArgs {
            name: String::from("Mock USD"),
            symbol: String::from("MUSD"),
        },
    );
    let mut token_b = LpToken::deploy(
        &env,
        LpTokenInitArgs {
            name: String::from("Mock DAI"),
            symbol: String::from("MDAI"),
        },
    );
    let token_a_addr = token_a.address().clone();
    let token_b_addr = token_b.address().clone();

    let mut factory = MockFactory::deploy(&env, NoArgs);
    let router = MockRouter::deploy(
        &env,
        MockRouterInitArgs {
            factory: factory.address().clone(),
        },
    );
    let pair = MockPair::deploy(
        &env,
        MockPairInitArgs {
            token_a: token_a_addr,
            token_b: token_b_addr,
            router: router.address().clone(),
        },
    );
    let pair_addr = pair.address().clone();
    factory.register_pair(token_a_addr, token_b_addr, pair_addr);

    let facade = DexFacade::deploy(
        &env,
        DexFacadeInitArgs {
            router: router.address().clone(),
            factory: factory.address().clone(),
        },
    );
    let facade_addr = facade.address().clone();

    token_a.mint(user, units(10_000));
    token_b.mint(user, units(10_000));

    Fixture {
        env,
        facade,
        token_a,
        token_b,
        pair,
        token_a_addr,
        token_b_addr,
        facade_addr,
        pair_addr,
        user,
    }
}

/// Add (amount_a, amount_b) through the facade as `user`, LP minted to `user`
fn provide_liquidity(f: &mut Fixture, amount_a: U256, amount_b: U256) -> U256 {
    f.env.set_caller(f.user);
    f.token_a.approve(f.facade_addr, amount_a);
    f.token_b.approve(f.facade_addr, amount_b);
    let (_, _, liquidity) = f.facade.add_liquidity(
        f.token_a_addr,
        f.token_b_addr,
        amount_a,
        amount_b,
        U256::zero(),
        U256::zero(),
        f.user,
        DEADLINE,
    );
    liquidity
}

// ============ Deployment ============

#[test]
fn test_deployment() {
    let f = setup();
    let deployer = f.env.get_account(0);

    assert_eq!(f.facade.owner(), deployer);
    assert_eq!(f.facade.swap_counter(), 0);
    // Router and factory addresses are set and distinct
    assert_ne!(f.facade.router_address(), f.facade.factory_address());
}

// ============ Swap ============

#[test]
fn test_swap_rejects_zero_recipient() {
    let mut f = setup();
    let balance_before = f.token_a.balance_of(f.user);

    f.env.set_caller(f.user);
    assert_eq!(
        f.facade.try_swap_tokens(
            units(20),
            units(1000),
            vec![f.token_a_addr, f.token_b_addr],
            zero_address(),
            DEADLINE
        ),
        Err(DexFacadeError::ZeroAddressNotAllowed.into())
    );

    assert_eq!(f.facade.swap_counter(), 0);
    assert_eq!(f.token_a.balance_of(f.user), balance_before);
}

#[test]
fn test_swap_rejects_zero_amount_in_max() {
    let mut f = setup();

    f.env.set_caller(f.user);
    assert_eq!(
        f.facade.try_swap_tokens(
            units(20),
            U256::zero(),
            vec![f.token_a_addr, f.token_b_addr],
            f.user,
            DEADLINE
        ),
        Err(DexFacadeError::ZeroValueNotAllowed.into())
    );
    assert_eq!(f.facade.swap_counter(), 0);
}

#[test]
fn test_swap_rejects_short_path() {
    let mut f = setup();

    f.env.set_caller(f.user);
    assert_eq!(
        f.facade
            .try_swap_tokens(units(20), units(1000), vec![f.token_a_addr], f.user, DEADLINE),
        Err(DexFacadeError::InvalidPath.into())
    );
}

#[test]
fn test_swap_success() {
    let mut f = setup();
    provide_liquidity(&mut f, units(1000), units(1000));

    let recipient = f.env.get_account(2);
    let user_a_before = f.token_a.balance_of(f.user);

    f.env.set_caller(f.user);
    f.token_a.approve(f.facade_addr, units(1000));
    f.facade.swap_tokens(
        units(20),
        units(1000),
        vec![f.token_a_addr, f.token_b_addr],
        recipient,
        DEADLINE,
    );

    assert_eq!(f.facade.swap_counter(), 1);
    // Exact output delivered
    assert_eq!(f.token_b.balance_of(recipient), units(20));
    // Flat mock rate: 20 spent, the other 980 refunded
    assert_eq!(f.token_a.balance_of(f.user), user_a_before - units(20));
    // Facade keeps no custody
    assert_eq!(f.token_a.balance_of(f.facade_addr), U256::zero());
    assert_eq!(f.token_b.balance_of(f.facade_addr), U256::zero());
}

#[test]
fn test_swap_counter_counts_only_swaps() {
    let mut f = setup();
    provide_liquidity(&mut f, units(2000), units(2000));

    f.env.set_caller(f.user);
    for _ in 0..3 {
        f.token_a.approve(f.facade_addr, units(50));
        f.facade.swap_tokens(
            units(50),
            units(50),
            vec![f.token_a_addr, f.token_b_addr],
            f.user,
            DEADLINE,
        );
    }
    // Liquidity traffic in between must not move the counter
    provide_liquidity(&mut f, units(100), units(100));

    assert_eq!(f.facade.swap_counter(), 3);
}

#[test]
fn test_swap_propagates_allowance_failure() {
    let mut f = setup();
    provide_liquidity(&mut f, units(1000), units(1000));

    f.env.set_caller(f.user);
    f.token_a.approve(f.facade_addr, units(5));
    assert_eq!(
        f.facade.try_swap_tokens(
            units(20),
            units(1000),
            vec![f.token_a_addr, f.token_b_addr],
            f.user,
            DEADLINE
        ),
        Err(DexFacadeError::InsufficientAllowance.into())
    );
    assert_eq!(f.facade.swap_counter(), 0);
}

#[test]
fn test_swap_propagates_expired_deadline() {
    let mut f = setup();
    provide_liquidity(&mut f, units(1000), units(1000));

    f.env.advance_block_time(DEADLINE + 1);

    f.env.set_caller(f.user);
    f.token_a.approve(f.facade_addr, units(1000));
    assert_eq!(
        f.facade.try_swap_tokens(
            units(20),
            units(1000),
            vec![f.token_a_addr, f.token_b_addr],
            f.user,
            DEADLINE
        ),
        Err(DexFacadeError::DeadlineExpired.into())
    );
    assert_eq!(f.facade.swap_counter(), 0);
}

// ============ Add Liquidity ============

#[test]
fn test_add_liquidity_rejects_zero_recipient() {
    let mut f = setup();

    f.env.set_caller(f.user);
    f.token_a.approve(f.facade_addr, units(1000));
    f.token_b.approve(f.facade_addr, units(30));
    assert_eq!(
        f.facade.try_add_liquidity(
            f.token_a_addr,
            f.token_b_addr,
            units(1000),
            units(30),
            U256::zero(),
            U256::zero(),
            zero_address(),
            DEADLINE
        ),
        Err(DexFacadeError::ZeroAddressNotAllowed.into())
    );
}

#[test]
fn test_add_liquidity_rejects_zero_token_addresses() {
    let mut f = setup();

    f.env.set_caller(f.user);
    assert_eq!(
        f.facade.try_add_liquidity(
            zero_address(),
            zero_address(),
            units(1000),
            units(30),
            U256::zero(),
            U256::zero(),
            f.user,
            DEADLINE
        ),
        Err(DexFacadeError::ZeroAddressNotAllowed.into())
    );
}

#[test]
fn test_add_liquidity_success() {
    let mut f = setup();

    let a_before = f.token_a.balance_of(f.user);
    let b_before = f.token_b.balance_of(f.user);
    let lp_before = f
        .facade
        .check_liquidity_added(f.token_a_addr, f.token_b_addr, f.user);
    assert_eq!(lp_before, U256::zero());

    let liquidity = provide_liquidity(&mut f, units(1000), units(30));
    assert!(liquidity > U256::zero());

    let lp_after = f
        .facade
        .check_liquidity_added(f.token_a_addr, f.token_b_addr, f.user);
    assert!(lp_after > lp_before);
    assert!(f.token_a.balance_of(f.user) < a_before);
    assert!(f.token_b.balance_of(f.user) < b_before);
    // Facade keeps no custody
    assert_eq!(f.token_a.balance_of(f.facade_addr), U256::zero());
    assert_eq!(f.token_b.balance_of(f.facade_addr), U256::zero());
}

// ============ Remove Liquidity ============

#[test]
fn test_remove_liquidity_rejects_zero_liquidity() {
    let mut f = setup();
    provide_liquidity(&mut f, units(1000), units(30));

    f.env.set_caller(f.user);
    assert_eq!(
        f.facade.try_remove_liquidity(
            f.token_a_addr,
            f.token_b_addr,
            U256::zero(),
            U256::zero(),
            U256::zero(),
            f.user,
            DEADLINE
        ),
        Err(DexFacadeError::ZeroValueNotAllowed.into())
    );
}

#[test]
fn test_remove_liquidity_rejects_zero_addresses() {
    let mut f = setup();
    provide_liquidity(&mut f, units(1000), units(30));

    f.env.set_caller(f.user);
    assert_eq!(
        f.facade.try_remove_liquidity(
            zero_address(),
            zero_address(),
            units(10),
            U256::zero(),
            U256::zero(),
            zero_address(),
            DEADLINE
        ),
        Err(DexFacadeError::ZeroAddressNotAllowed.into())
    );
}

#[test]
fn test_remove_liquidity_rejects_insufficient_balance() {
    let mut f = setup();
    let liquidity = provide_liquidity(&mut f, units(1000), units(30));

    f.env.set_caller(f.user);
    assert_eq!(
        f.facade.try_remove_liquidity(
            f.token_a_addr,
            f.token_b_addr,
            liquidity + U256::one(),
            U256::zero(),
            U256::zero(),
            f.user,
            DEADLINE
        ),
        Err(DexFacadeError::InsufficientLiquidity.into())
    );
    // Position untouched
    assert_eq!(f.pair.balance_of(f.user), liquidity);
}

#[test]
fn test_remove_liquidity_success() {
    let mut f = setup();
    let liquidity = provide_liquidity(&mut f, units(1000), units(30));

    let a_before = f.token_a.balance_of(f.user);
    let b_before = f.token_b.balance_of(f.user);

    f.env.set_caller(f.user);
    f.pair.approve(f.facade_addr, liquidity);
    let (amount_a, amount_b) = f.facade.remove_liquidity(
        f.token_a_addr,
        f.token_b_addr,
        liquidity,
        U256::one(),
        U256::one(),
        f.user,
        DEADLINE,
    );

    // Whole position burned, both sides paid out
    assert_eq!(f.pair.balance_of(f.user), U256::zero());
    assert_eq!(f.token_a.balance_of(f.user), a_before + amount_a);
    assert_eq!(f.token_b.balance_of(f.user), b_before + amount_b);
    assert_eq!(
        f.facade
            .check_liquidity_added(f.token_a_addr, f.token_b_addr, f.user),
        U256::zero()
    );
}

// ============ Queries ============

#[test]
fn test_get_pair_address() {
    let f = setup();
    assert_eq!(
        f.facade.get_pair_address(f.token_a_addr, f.token_b_addr),
        f.pair_addr
    );
}

#[test]
fn test_unknown_pair_is_reported() {
    let f = setup();
    let unknown_token = f.env.get_account(9);

    assert_eq!(
        f.facade.try_get_pair_address(f.token_a_addr, unknown_token),
        Err(DexFacadeError::PairNotFound.into())
    );
    assert_eq!(
        f.facade
            .try_check_liquidity_added(f.token_a_addr, unknown_token, f.user),
        Err(DexFacadeError::PairNotFound.into())
    );
}
