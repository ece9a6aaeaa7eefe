use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Collector is paused")]
    Paused,
    #[msg("Reward balance below requested minimum")]
    SlippageExceeded,
    #[msg("Total fees must be <= 100%")]
    FeeTooHigh,
    #[msg("Harvest incentive too large")]
    IncentiveTooHigh,
    #[msg("Asset is not recoverable")]
    NotRecoverable,
    #[msg("Reward mint cannot be made recoverable")]
    RewardNotRecoverable,
    #[msg("Required pool does not exist")]
    MissingPool,
    #[msg("Role registry is full")]
    RoleRegistryFull,
    #[msg("Recoverable set is full")]
    RecoverableSetFull,
    #[msg("Too many positions")]
    TooManyPositions,
    #[msg("Invalid mint")]
    InvalidMint,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid pair account")]
    InvalidPairAccount,
    #[msg("Invalid program account")]
    InvalidProgramAccount,
    #[msg("Invalid recovery accounts")]
    InvalidRecoveryAccounts,
    #[msg("Collector token account was not supplied")]
    MissingTokenAccount,
    #[msg("Insufficient pool liquidity")]
    InsufficientLiquidity,
    #[msg("Math overflow")]
    MathOverflow,
}
