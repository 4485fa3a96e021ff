#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod security;
pub mod state;

pub use instructions::*;

declare_id!("4DV9n5FTGitzKryC2jYD5ePFdEZRSdMMWdNu5F3StYaZ");

#[program]
pub mod faucet_token {
    use super::*;

    /// Create the Faucet Token mint and its `TokenConfig`
    ///
    /// The mint is a Token-2022 mint with on-mint metadata and no freeze authority.
    /// Its mint authority is a PDA of this program, so every mint goes through `mint`.
    /// The signer becomes the owner.
    pub fn initialize_token(
        ctx: Context<InitializeToken>,
        name: String,
        symbol: String,
        uri: String,
        max_supply: Option<u64>,
    ) -> Result<()> {
        ctx.accounts
            .initialize_token(name, symbol, uri, max_supply, &ctx.bumps)
    }

    /// Mint tokens to a destination account
    ///
    /// Fails unless the issued supply stays within the cap.
    /// Signer must be the registered distributor
    pub fn mint(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
        ctx.accounts.mint(amount)
    }

    /// Assign or reassign the distributor
    /// Signer must be the owner
    pub fn set_distributor(ctx: Context<TokenOwnerAdmin>, distributor: Pubkey) -> Result<()> {
        ctx.accounts.set_distributor(distributor)
    }

    /// Transfer the owner role to a new wallet
    /// Signer must be the owner
    pub fn transfer_ownership(ctx: Context<TokenOwnerAdmin>, new_owner: Pubkey) -> Result<()> {
        ctx.accounts.transfer_ownership(new_owner)
    }

    /// Balance of `holder`'s associated token account, zero until it exists
    /// Unpermissioned
    pub fn balance_of(ctx: Context<BalanceOf>, holder: Pubkey) -> Result<u64> {
        ctx.accounts.balance_of(holder)
    }

    /// Total amount minted so far
    /// Unpermissioned
    pub fn issued_supply(ctx: Context<SupplyView>) -> Result<u64> {
        Ok(ctx.accounts.issued_supply())
    }
}
