//! Error definitions for the DexFacade contract and its fixtures
use odra::prelude::*;
use odra::OdraError;

/// Errors surfaced by the facade and the mock AMM stack
#[derive(OdraError, Debug, PartialEq, Eq)]
pub enum DexFacadeError {
    /// A required address parameter is the zero address
    #[odra_error(code = 1)]
    ZeroAddressNotAllowed,

    /// A required positive-amount parameter is zero
    #[odra_error(code = 2)]
    ZeroValueNotAllowed,

    /// Caller's pair-token balance is below the liquidity requested
    #[odra_error(code = 3)]
    InsufficientLiquidity,

    /// No pair registered for the given token pair
    #[odra_error(code = 4)]
    PairNotFound,

    /// Swap path must contain at least two tokens
    #[odra_error(code = 5)]
    InvalidPath,

    /// Token transfer returned failure
    #[odra_error(code = 6)]
    TransferFailed,

    /// Deadline expired before execution
    #[odra_error(code = 7)]
    DeadlineExpired,

    /// Amount consumed or returned is below the given minimum
    #[odra_error(code = 8)]
    InsufficientAmount,

    /// Required input exceeds the caller's maximum
    #[odra_error(code = 9)]
    ExcessiveSlippage,

    /// Token balance too low for the requested transfer
    #[odra_error(code = 10)]
    InsufficientBalance,

    /// Spender allowance too low for the requested transfer
    #[odra_error(code = 11)]
    InsufficientAllowance,

    /// Caller is not allowed to perform this action
    #[odra_error(code = 12)]
    Unauthorized,
}
