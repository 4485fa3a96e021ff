use anchor_lang::prelude::*;

/// Event emitted when the token mint and its `TokenConfig` are created
/// Fields:
/// - mint: The public key of the new mint
/// - owner: The administrator of the token
/// - max_supply: The hard cap on issued supply
#[event]
pub struct TokenInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub max_supply: u64,
}

/// Event emitted when the distributor mints tokens
/// Fields:
/// - mint: The public key of the mint
/// - destination: The token account that received the tokens
/// - amount: The amount minted
/// - issued_supply: The issued supply after the mint
#[event]
pub struct TokensMinted {
    pub mint: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub issued_supply: u64,
}

/// Event emitted when the distributor role is assigned
/// Fields:
/// - mint: The public key of the mint
/// - previous: The previous distributor (default pubkey if none)
/// - new: The new distributor
#[event]
pub struct DistributorSet {
    pub mint: Pubkey,
    pub previous: Pubkey,
    pub new: Pubkey,
}

/// Event emitted when the owner role is handed to another wallet
/// Fields:
/// - mint: The public key of the mint
/// - previous: The previous owner
/// - new: The new owner
#[event]
pub struct OwnershipTransferred {
    pub mint: Pubkey,
    pub previous: Pubkey,
    pub new: Pubkey,
}
