use anchor_lang::prelude::*;

use crate::{
    constants::FAUCET_STATE_SEED, errors::FaucetError, events::FaucetPauseSet,
    state::FaucetState,
};

/// Owner-only administration of the `FaucetState` account
#[derive(Accounts)]
pub struct FaucetOwnerAdmin<'info> {
    /// The owner of the faucet
    pub owner: Signer<'info>,

    /// The `FaucetState` account to be modified
    /// # PDA Seeds
    /// - `FAUCET_STATE_SEED`
    /// - Mint address
    #[account(
        mut,
        seeds = [FAUCET_STATE_SEED, faucet_state.mint.as_ref()],
        bump = faucet_state.bump,
        has_one = owner @ FaucetError::Unauthorized,
    )]
    pub faucet_state: Account<'info, FaucetState>,
}

impl<'info> FaucetOwnerAdmin<'info> {
    /// Pause or unpause claims
    /// Claim records are left untouched, unpausing restores normal evaluation
    /// # Arguments
    /// * `paused` - The new value of the pause flag
    /// # Returns
    /// * `Result<()>` - Ok if the flag is written, Err otherwise
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.faucet_state.set_paused(paused);

        emit!(FaucetPauseSet {
            faucet: self.faucet_state.key(),
            paused,
            authority: self.owner.key(),
        });

        Ok(())
    }
}
