use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;
use faucet_token::{constants::TOKEN_CONFIG_SEED, state::TokenConfig};

use crate::{
    constants::FAUCET_STATE_SEED,
    events::FaucetInitialized,
    state::{FaucetConfig, FaucetState},
};

/// Create the faucet for a Faucet Token mint
/// The signer becomes the faucet owner
#[derive(Accounts)]
pub struct InitializeFaucet<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The account that becomes the owner of the faucet
    pub owner: Signer<'info>,

    /// The `TokenConfig` of the mint, owned by the faucet-token program.
    /// Its owner must sign as the faucet owner.
    /// # PDA Seeds
    /// - `TOKEN_CONFIG_SEED`
    /// - Mint address
    #[account(
        seeds = [TOKEN_CONFIG_SEED, mint.key().as_ref()],
        bump = token_config.bump,
        seeds::program = faucet_token::ID,
        has_one = mint,
    )]
    pub token_config: Box<Account<'info, TokenConfig>>,

    /// The Faucet Token mint
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// The `FaucetState` account to be initialized
    /// # PDA Seeds
    /// - `FAUCET_STATE_SEED`
    /// - Mint address
    #[account(
        init,
        payer = payer,
        space = 8 + FaucetState::INIT_SPACE,
        seeds = [FAUCET_STATE_SEED, mint.key().as_ref()],
        bump
    )]
    pub faucet_state: Account<'info, FaucetState>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeFaucet<'info> {
    /// Record the claim configuration of the faucet
    /// # Arguments
    /// * `claim_amount` - Raw tokens granted per claim, `DEFAULT_CLAIM_AMOUNT` if `None`
    /// * `cooldown_duration` - Seconds between two claims of the same wallet, `DEFAULT_COOLDOWN_DURATION` if `None`
    /// * `max_lifetime_claim` - Cap on what one wallet can ever claim, `DEFAULT_MAX_LIFETIME_CLAIM` if `None`
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the faucet is created, Err if the signer is not the token owner
    ///   or the configuration is invalid
    pub fn initialize_faucet(
        &mut self,
        claim_amount: Option<u64>,
        cooldown_duration: Option<i64>,
        max_lifetime_claim: Option<u64>,
        bumps: &InitializeFaucetBumps,
    ) -> Result<()> {
        FaucetState::check_initializer(&self.token_config, &self.owner.key())?;

        let FaucetConfig {
            claim_amount,
            cooldown_duration,
            max_lifetime_claim,
        } = FaucetState::resolve_config(claim_amount, cooldown_duration, max_lifetime_claim)?;

        self.faucet_state.set_inner(FaucetState {
            owner: self.owner.key(),
            mint: self.mint.key(),
            token_config: self.token_config.key(),
            claim_amount,
            cooldown_duration,
            max_lifetime_claim,
            paused: false,
            total_distributed: 0,
            total_claims: 0,
            bump: bumps.faucet_state,
        });

        // Claims fail with Unauthorized until the token owner wires the faucet in
        if self.token_config.distributor != self.faucet_state.key() {
            msg!(
                "Faucet {} is not yet the distributor of mint {}",
                self.faucet_state.key(),
                self.mint.key()
            );
        }

        emit!(FaucetInitialized {
            faucet: self.faucet_state.key(),
            mint: self.mint.key(),
            owner: self.owner.key(),
            claim_amount,
            cooldown_duration,
            max_lifetime_claim,
        });

        Ok(())
    }
}
