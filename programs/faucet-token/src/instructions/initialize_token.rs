use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction},
};
use anchor_spl::{
    token_2022::Token2022,
    token_interface::{token_metadata_initialize, TokenMetadataInitialize},
};
use spl_token_2022::{
    extension::{self, ExtensionType},
    instruction::initialize_mint2,
    pod::PodMint,
};

use crate::{
    constants::{
        MINT_AUTHORITY_SEED, NAME_AND_URI_MAX_LENGTH, SYMBOL_MAX_LENGTH, TOKEN_CONFIG_SEED,
        TOKEN_DECIMALS,
    },
    errors::TokenError,
    events::TokenInitialized,
    state::TokenConfig,
};

/// Create the Faucet Token mint and its `TokenConfig` account
/// The signer becomes the owner. No distributor is set yet.
#[derive(Accounts)]
pub struct InitializeToken<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The account that becomes the owner of the token
    pub owner: Signer<'info>,

    /// The new mint account to be initialized
    ///
    /// CHECK: Mint account - will be initialized manually with the MetadataPointer extension
    #[account(mut)]
    pub mint: Signer<'info>,

    /// The mint authority PDA that will control the mint
    /// # PDA Seeds
    /// - `MINT_AUTHORITY_SEED`
    /// - Mint address
    ///
    /// CHECK: This account is used to verify the mint authority, but does not need to be checked for correctness as it is uninitialized.
    #[account(
        seeds = [MINT_AUTHORITY_SEED, mint.key().as_ref()],
        bump,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// The `TokenConfig` account to be initialized
    /// # PDA Seeds
    /// - `TOKEN_CONFIG_SEED`
    /// - Mint address
    #[account(
        init,
        payer = payer,
        space = 8 + TokenConfig::INIT_SPACE,
        seeds = [TOKEN_CONFIG_SEED, mint.key().as_ref()],
        bump
    )]
    pub token_config: Account<'info, TokenConfig>,

    /// The system program
    pub system_program: Program<'info, System>,

    /// The token program (Token-2022)
    pub token_program: Program<'info, Token2022>,
}

impl<'info> InitializeToken<'info> {
    /// Initialize the mint with on-mint metadata and record the supply cap
    /// # Arguments
    /// * `name` - The name of the token
    /// * `symbol` - The symbol of the token
    /// * `uri` - The metadata URI for the token
    /// * `max_supply` - The hard cap on issued supply in raw units, `DEFAULT_MAX_SUPPLY` if `None`
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the mint and config are successfully initialized, Err otherwise
    pub fn initialize_token(
        &mut self,
        name: String,
        symbol: String,
        uri: String,
        max_supply: Option<u64>,
        bumps: &InitializeTokenBumps,
    ) -> Result<()> {
        let max_supply = TokenConfig::resolve_max_supply(max_supply)?;

        require!(
            name.len() <= NAME_AND_URI_MAX_LENGTH
                && uri.len() <= NAME_AND_URI_MAX_LENGTH
                && symbol.len() <= SYMBOL_MAX_LENGTH,
            TokenError::MetadataFieldTooLong
        );

        self.create_mint_account()?;
        self.initialize_mint(name, symbol, uri, bumps.mint_authority)?;

        self.token_config.set_inner(TokenConfig {
            owner: self.owner.key(),
            mint: self.mint.key(),
            distributor: Pubkey::default(),
            max_supply,
            issued_supply: 0,
            bump: bumps.token_config,
            mint_authority_bump: bumps.mint_authority,
        });

        emit!(TokenInitialized {
            mint: self.mint.key(),
            owner: self.owner.key(),
            max_supply,
        });

        Ok(())
    }

    /// Allocate the mint account with room for the MetadataPointer extension
    /// and hand it to the token program
    fn create_mint_account(&self) -> Result<()> {
        let space =
            ExtensionType::try_calculate_account_len::<PodMint>(&[ExtensionType::MetadataPointer])?;
        let rent = Rent::get()?;

        invoke(
            &system_instruction::allocate(&self.mint.key(), space as u64),
            &[self.mint.to_account_info()],
        )?;

        invoke(
            &system_instruction::transfer(
                &self.payer.key(),
                &self.mint.key(),
                rent.minimum_balance(space)
                    .saturating_sub(self.mint.lamports()),
            ),
            &[
                self.payer.to_account_info(),
                self.mint.to_account_info(),
                self.system_program.to_account_info(),
            ],
        )?;

        invoke(
            &system_instruction::assign(&self.mint.key(), &self.token_program.key()),
            &[
                self.mint.to_account_info(),
                self.system_program.to_account_info(),
            ],
        )?;

        Ok(())
    }

    /// Initialize the extension, the mint itself, then the metadata
    /// The order matters - extensions must be initialized before the mint itself
    fn initialize_mint(
        &self,
        name: String,
        symbol: String,
        uri: String,
        mint_authority_bump: u8,
    ) -> Result<()> {
        let mint_key = self.mint.key();
        let signer_seeds: &[&[&[u8]]] =
            &[&[MINT_AUTHORITY_SEED, mint_key.as_ref(), &[mint_authority_bump]]];

        let init_metadata_pointer_ix = extension::metadata_pointer::instruction::initialize(
            &self.token_program.key(),
            &mint_key,
            Some(self.mint_authority.key()),
            Some(mint_key),
        )?;
        invoke(&init_metadata_pointer_ix, &[self.mint.to_account_info()])?;

        // No freeze authority: balances can never be frozen
        let init_mint_ix = initialize_mint2(
            &self.token_program.key(),
            &mint_key,
            &self.mint_authority.key(),
            None,
            TOKEN_DECIMALS,
        )?;
        invoke(&init_mint_ix, &[self.mint.to_account_info()])?;

        token_metadata_initialize(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TokenMetadataInitialize {
                    program_id: self.token_program.to_account_info(),
                    mint: self.mint.to_account_info(),
                    metadata: self.mint.to_account_info(),
                    mint_authority: self.mint_authority.to_account_info(),
                    update_authority: self.mint_authority.to_account_info(),
                },
                signer_seeds,
            ),
            name,
            symbol,
            uri,
        )?;

        // Metadata grows the account, top it back up to rent-exempt
        let shortfall = Rent::get()?
            .minimum_balance(self.mint.to_account_info().data_len())
            .saturating_sub(self.mint.lamports());

        if shortfall > 0 {
            invoke(
                &system_instruction::transfer(&self.payer.key(), &mint_key, shortfall),
                &[
                    self.payer.to_account_info(),
                    self.mint.to_account_info(),
                    self.system_program.to_account_info(),
                ],
            )?;
        }

        Ok(())
    }
}
