use anchor_lang::prelude::*;

/// Event emitted when a faucet is created
/// Fields:
/// - faucet: The `FaucetState` account
/// - mint: The mint the faucet distributes
/// - owner: The administrator of the faucet
/// - claim_amount: Tokens granted per claim
/// - cooldown_duration: Seconds between two claims of one wallet
/// - max_lifetime_claim: Cap on what one wallet can ever claim
#[event]
pub struct FaucetInitialized {
    pub faucet: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub claim_amount: u64,
    pub cooldown_duration: i64,
    pub max_lifetime_claim: u64,
}

/// Event emitted on every successful claim
/// Fields:
/// - account: The wallet that claimed
/// - amount: The amount minted to the wallet
/// - timestamp: The cluster time of the claim
#[event]
pub struct TokensClaimed {
    pub account: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

/// Event emitted when the pause flag is written
#[event]
pub struct FaucetPauseSet {
    pub faucet: Pubkey,
    pub paused: bool,
    pub authority: Pubkey,
}
