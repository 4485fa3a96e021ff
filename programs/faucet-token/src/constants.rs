/// Number of decimals for the Faucet Token
pub const TOKEN_DECIMALS: u8 = 9;

/// 10^9 - One whole token in raw units
pub const ONE_TOKEN: u64 = 1_000_000_000;

/// Default hard cap: 1,000,000 tokens with 9 decimals
pub const DEFAULT_MAX_SUPPLY: u64 = 1_000_000 * ONE_TOKEN;

// PDA SEEDS

/// Seed for the TokenConfig account PDA
pub const TOKEN_CONFIG_SEED: &[u8] = b"token_config";
/// Seed for the mint authority PDA
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// The maximum length for a token symbol
pub const SYMBOL_MAX_LENGTH: usize = 10;

/// The maximum length for a token name or URI
pub const NAME_AND_URI_MAX_LENGTH: usize = 256;
