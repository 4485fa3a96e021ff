use faucet_token::constants::ONE_TOKEN;

/// 24 * 60 * 60 - Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86400;

/// Default grant per claim: 100 tokens
pub const DEFAULT_CLAIM_AMOUNT: u64 = 100 * ONE_TOKEN;
/// Default minimum time between two claims of the same wallet
pub const DEFAULT_COOLDOWN_DURATION: i64 = SECONDS_PER_DAY;
/// Default cap on what a single wallet can ever claim: 1,000 tokens
pub const DEFAULT_MAX_LIFETIME_CLAIM: u64 = 1_000 * ONE_TOKEN;

// PDA SEEDS

/// Seed for the FaucetState account PDA
pub const FAUCET_STATE_SEED: &[u8] = b"faucet_state";
/// Seed for ClaimRecord account PDA
pub const CLAIM_RECORD_SEED: &[u8] = b"claim_record";
