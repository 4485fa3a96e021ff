use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::get_associated_token_address_with_program_id,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::TOKEN_CONFIG_SEED, errors::TokenError, state::TokenConfig};

/// Read the balance of a holder. Unpermissioned.
#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct BalanceOf<'info> {
    /// The `TokenConfig` account of the mint
    /// # PDA Seeds
    /// - `TOKEN_CONFIG_SEED`
    /// - Mint address
    #[account(
        seeds = [TOKEN_CONFIG_SEED, mint.key().as_ref()],
        bump = token_config.bump,
        has_one = mint,
    )]
    pub token_config: Account<'info, TokenConfig>,

    /// The Faucet Token mint
    #[account(mint::token_program = token_program)]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The holder's associated token account address
    ///
    /// CHECK: Address validated against the associated token address of `holder`.
    /// Read as a zero balance until the account is created.
    #[account(
        address = get_associated_token_address_with_program_id(
            &holder,
            &mint.key(),
            &token_program.key(),
        ) @ TokenError::InvalidTokenAccount,
    )]
    pub holder_token_account: UncheckedAccount<'info>,

    /// The token program (Token-2022)
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> BalanceOf<'info> {
    pub fn balance_of(&self, holder: Pubkey) -> Result<u64> {
        let data = self.holder_token_account.try_borrow_data()?;
        if data.is_empty() {
            return Ok(0);
        }

        require_keys_eq!(
            *self.holder_token_account.owner,
            self.token_program.key(),
            TokenError::InvalidTokenAccount
        );
        holder_balance(&data, &self.mint.key(), &holder)
    }
}

/// Balance held in a token account's data, checked against the expected mint and holder
pub fn holder_balance(data: &[u8], mint: &Pubkey, holder: &Pubkey) -> Result<u64> {
    let account = TokenAccount::try_deserialize(&mut &data[..])?;
    require_keys_eq!(account.mint, *mint, TokenError::InvalidTokenAccount);
    require_keys_eq!(account.owner, *holder, TokenError::InvalidTokenAccount);
    Ok(account.amount)
}

/// Read the supply counters. Unpermissioned.
#[derive(Accounts)]
pub struct SupplyView<'info> {
    /// The `TokenConfig` account of the mint
    /// # PDA Seeds
    /// - `TOKEN_CONFIG_SEED`
    /// - Mint address
    #[account(
        seeds = [TOKEN_CONFIG_SEED, token_config.mint.as_ref()],
        bump = token_config.bump,
    )]
    pub token_config: Account<'info, TokenConfig>,
}

impl<'info> SupplyView<'info> {
    pub fn issued_supply(&self) -> u64 {
        self.token_config.issued_supply
    }
}
