use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Faucet is paused")]
    FaucetPaused,
    #[msg("Cooldown still active for this wallet")]
    CooldownActive,
    #[msg("Lifetime claim limit reached")]
    LifetimeLimitReached,
    #[msg("Arithmetic Overflow")]
    ArithmeticOverflow,
    #[msg("Invalid faucet configuration")]
    InvalidConfiguration,
    #[msg("Claim record does not belong to this wallet")]
    InvalidClaimRecord,
}
