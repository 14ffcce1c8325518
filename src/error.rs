use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StakeError {
    #[error("entity already exists at the derived address")]
    AlreadyExists,

    #[error("entity not found at the derived address")]
    NotFound,

    #[error("caller is not the config authority")]
    IncorrectAuthority,

    #[error("caller identity could not be verified")]
    Unauthorized,

    #[error("deposit id does not match the next id in the chain")]
    AddressMismatch,

    #[error("the unbonding time is not over yet")]
    UnbondingTimeNotOverYet,

    #[error("soft cap reached, locked until the payout gate opens")]
    PayoutGateNotYetReached,

    #[error("vault never reached its soft cap")]
    VaultNotStarted,

    #[error("reward already claimed")]
    AlreadyClaimed,

    #[error("insufficient balance")]
    InsufficientBalance,

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("math overflow")]
    MathOverflow,

    #[error("division by zero")]
    DivisionByZero,

    #[error("derivation seed exceeds scheme limits")]
    SeedTooLong,
}

pub type StakeResult<T> = std::result::Result<T, StakeError>;
