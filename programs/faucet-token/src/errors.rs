use anchor_lang::prelude::*;

#[error_code]
pub enum TokenError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Mint would exceed the maximum supply")]
    SupplyCapExceeded,
    #[msg("Arithmetic Overflow")]
    ArithmeticOverflow,
    #[msg("Maximum supply must be greater than zero")]
    InvalidSupplyCap,
    #[msg("Metadata field too long")]
    MetadataFieldTooLong,
    #[msg("Invalid Token Account")]
    InvalidTokenAccount,
}
