use anchor_lang::prelude::*;
use anchor_spl::token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface};

use crate::{
    constants::{MINT_AUTHORITY_SEED, TOKEN_CONFIG_SEED},
    events::TokensMinted,
    state::TokenConfig,
};

/// Mint Faucet Tokens to a destination account.
/// Only the distributor recorded in `TokenConfig` may sign.
#[derive(Accounts)]
pub struct MintTokens<'info> {
    /// The distributor, usually the faucet's state PDA signing through CPI
    pub distributor: Signer<'info>,

    /// The `TokenConfig` account holding the supply counters
    /// # PDA Seeds
    /// - `TOKEN_CONFIG_SEED`
    /// - Mint address
    #[account(
        mut,
        seeds = [TOKEN_CONFIG_SEED, mint.key().as_ref()],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    /// The Faucet Token mint
    #[account(
        mut,
        mint::authority = mint_authority,
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The mint authority PDA
    /// # PDA Seeds
    /// - `MINT_AUTHORITY_SEED`
    /// - Mint address
    ///
    /// CHECK: This account is used to verify the mint authority, but does not need to be checked for correctness as it is uninitialized.
    #[account(
        seeds = [MINT_AUTHORITY_SEED, mint.key().as_ref()],
        bump = token_config.mint_authority_bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// The token account receiving the minted tokens
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    /// The token program (Token-2022)
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> MintTokens<'info> {
    /// Mint `amount` tokens to the destination account
    /// # Arguments
    /// * `amount` - The amount of raw tokens to mint, zero succeeds without minting
    /// # Returns
    /// * `Result<()>` - Ok if tokens are minted, Err if the signer is not the distributor
    ///   or the mint would exceed the supply cap
    pub fn mint(&mut self, amount: u64) -> Result<()> {
        let issued_supply = self
            .token_config
            .apply_mint(&self.distributor.key(), amount)?;

        if amount == 0 {
            return Ok(());
        }

        let mint_key = self.mint.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            MINT_AUTHORITY_SEED,
            mint_key.as_ref(),
            &[self.token_config.mint_authority_bump],
        ]];

        mint_to(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                MintTo {
                    mint: self.mint.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.mint_authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        emit!(TokensMinted {
            mint: mint_key,
            destination: self.destination.key(),
            amount,
            issued_supply,
        });

        Ok(())
    }
}
