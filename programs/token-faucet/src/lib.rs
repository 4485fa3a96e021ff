#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
#[cfg(test)]
mod invariants;
pub mod security;
pub mod state;

pub use instructions::*;
pub use state::ClaimStatus;

declare_id!("34GeYxLMb6bEEp6Xt7BBryoyc3Be35g77pzUXHqxYAuL");

#[program]
pub mod token_faucet {
    use super::*;

    /// Create a faucet for a Faucet Token mint
    ///
    /// The faucet mints only once the token owner calls `faucet_token::set_distributor`
    /// with the `FaucetState` address.
    /// Signer must be the token owner and becomes the faucet owner.
    /// Unset configuration values take their defaults.
    pub fn initialize_faucet(
        ctx: Context<InitializeFaucet>,
        claim_amount: Option<u64>,
        cooldown_duration: Option<i64>,
        max_lifetime_claim: Option<u64>,
    ) -> Result<()> {
        ctx.accounts.initialize_faucet(
            claim_amount,
            cooldown_duration,
            max_lifetime_claim,
            &ctx.bumps,
        )
    }

    /// Claim `claim_amount` tokens
    ///
    /// Fails if the faucet is paused, the cooldown is active, the lifetime cap
    /// would be exceeded or the mint is refused. A failure leaves no state behind.
    pub fn request_tokens(ctx: Context<RequestTokens>) -> Result<()> {
        ctx.accounts.request_tokens(ctx.bumps.claim_record)
    }

    /// Pause or unpause the faucet
    /// Signer must be the faucet owner
    pub fn set_paused(ctx: Context<FaucetOwnerAdmin>, paused: bool) -> Result<()> {
        ctx.accounts.set_paused(paused)
    }

    /// Whether claims are paused
    /// Unpermissioned
    pub fn is_paused(ctx: Context<FaucetView>) -> Result<bool> {
        Ok(ctx.accounts.is_paused())
    }

    /// Whether `account` could claim right now
    /// Unpermissioned
    pub fn can_claim(ctx: Context<ClaimView>, account: Pubkey) -> Result<bool> {
        ctx.accounts.can_claim(account)
    }

    /// What `account` can still claim over its lifetime
    /// Unpermissioned
    pub fn remaining_allowance(ctx: Context<ClaimView>, account: Pubkey) -> Result<u64> {
        ctx.accounts.remaining_allowance(account)
    }

    /// The gate currently blocking `account`, or `Eligible`
    /// Unpermissioned
    pub fn claim_status(ctx: Context<ClaimView>, account: Pubkey) -> Result<ClaimStatus> {
        ctx.accounts.claim_status(account)
    }
}
