use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};
use faucet_token::{
    constants::{MINT_AUTHORITY_SEED, TOKEN_CONFIG_SEED},
    program::FaucetToken,
    state::TokenConfig,
};

use crate::{
    constants::{CLAIM_RECORD_SEED, FAUCET_STATE_SEED},
    events::TokensClaimed,
    state::{ClaimRecord, FaucetState},
};

/// Claim `claim_amount` tokens from the faucet.
/// The transaction submitter is the claimant.
#[derive(Accounts)]
pub struct RequestTokens<'info> {
    /// The claiming wallet, pays for its claim record and token account on first claim
    #[account(mut)]
    pub user: Signer<'info>,

    /// The `FaucetState` account, signs the mint as distributor
    /// # PDA Seeds
    /// - `FAUCET_STATE_SEED`
    /// - Mint address
    #[account(
        mut,
        seeds = [FAUCET_STATE_SEED, mint.key().as_ref()],
        bump = faucet_state.bump,
        has_one = mint,
        has_one = token_config,
    )]
    pub faucet_state: Box<Account<'info, FaucetState>>,

    /// The user's claim record, created on first claim
    /// # PDA Seeds
    /// - `CLAIM_RECORD_SEED`
    /// - FaucetState address
    /// - User's address
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + ClaimRecord::INIT_SPACE,
        seeds = [CLAIM_RECORD_SEED, faucet_state.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub claim_record: Box<Account<'info, ClaimRecord>>,

    /// The `TokenConfig` of the mint, updated by the mint CPI
    /// # PDA Seeds
    /// - `TOKEN_CONFIG_SEED`
    /// - Mint address
    #[account(
        mut,
        seeds = [TOKEN_CONFIG_SEED, mint.key().as_ref()],
        bump = token_config.bump,
        seeds::program = faucet_token::ID,
    )]
    pub token_config: Box<Account<'info, TokenConfig>>,

    /// The Faucet Token mint
    #[account(
        mut,
        mint::token_program = token_program,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// The mint authority PDA of the faucet-token program
    /// # PDA Seeds
    /// - `MINT_AUTHORITY_SEED`
    /// - Mint address
    ///
    /// CHECK: Validated by seeds here and again by the faucet-token program.
    #[account(
        seeds = [MINT_AUTHORITY_SEED, mint.key().as_ref()],
        bump = token_config.mint_authority_bump,
        seeds::program = faucet_token::ID,
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// The user's associated token account for the Faucet Token
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The faucet-token program that owns the supply ledger
    pub ledger_program: Program<'info, FaucetToken>,

    /// The token program (Token-2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// The associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> RequestTokens<'info> {
    /// Gate the claim, mint through the faucet-token program, then record it.
    /// Any failure, including the mint's, reverts the whole transaction.
    /// # Arguments
    /// * `bump` - The bump of the claim record PDA
    /// # Returns
    /// * `Result<()>` - Ok if the claim succeeded, Err with the first failing gate otherwise
    pub fn request_tokens(&mut self, bump: u8) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.initialize_claim_record(bump);

        self.faucet_state.check_claim(&self.claim_record, now)?;

        let amount = self.faucet_state.claim_amount;
        self.mint_to_user(amount)?;

        self.claim_record.record_claim(amount, now)?;
        self.faucet_state.record_distribution()?;

        emit!(TokensClaimed {
            account: self.user.key(),
            amount,
            timestamp: now,
        });

        Ok(())
    }

    /// Initializes the claim record if it has just been created
    #[inline(always)]
    fn initialize_claim_record(&mut self, bump: u8) {
        if self.claim_record.owner != self.user.key() {
            msg!("Creating claim record for {}", self.user.key());
            self.claim_record.set_inner(ClaimRecord {
                bump,
                ..ClaimRecord::empty(self.user.key())
            });
        }
    }

    /// CPI into `faucet_token::mint`, signed by the faucet state PDA
    fn mint_to_user(&self, amount: u64) -> Result<()> {
        let mint_key = self.mint.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            FAUCET_STATE_SEED,
            mint_key.as_ref(),
            &[self.faucet_state.bump],
        ]];

        faucet_token::cpi::mint(
            CpiContext::new_with_signer(
                self.ledger_program.to_account_info(),
                faucet_token::cpi::accounts::MintTokens {
                    distributor: self.faucet_state.to_account_info(),
                    token_config: self.token_config.to_account_info(),
                    mint: self.mint.to_account_info(),
                    mint_authority: self.mint_authority.to_account_info(),
                    destination: self.user_token_account.to_account_info(),
                    token_program: self.token_program.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }
}
