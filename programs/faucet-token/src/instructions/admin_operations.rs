use anchor_lang::prelude::*;

use crate::{
    constants::TOKEN_CONFIG_SEED,
    errors::TokenError,
    events::{DistributorSet, OwnershipTransferred},
    state::TokenConfig,
};

/// Owner-only administration of the `TokenConfig` account
#[derive(Accounts)]
pub struct TokenOwnerAdmin<'info> {
    /// The current owner of the token
    pub owner: Signer<'info>,

    /// The `TokenConfig` account to be modified
    /// # PDA Seeds
    /// - `TOKEN_CONFIG_SEED`
    /// - Mint address
    #[account(
        mut,
        seeds = [TOKEN_CONFIG_SEED, token_config.mint.as_ref()],
        bump = token_config.bump,
        has_one = owner @ TokenError::Unauthorized,
    )]
    pub token_config: Account<'info, TokenConfig>,
}

impl<'info> TokenOwnerAdmin<'info> {
    /// Assign the distributor, the only key allowed to mint.
    /// Can be called again to move the role to a new distributor.
    /// # Arguments
    /// * `distributor` - The new distributor, usually the faucet's state PDA
    /// # Returns
    /// * `Result<()>` - Ok if the distributor is set, Err otherwise
    pub fn set_distributor(&mut self, distributor: Pubkey) -> Result<()> {
        let previous = self.token_config.set_distributor(distributor);

        emit!(DistributorSet {
            mint: self.token_config.mint,
            previous,
            new: distributor,
        });

        Ok(())
    }

    /// Hand the owner role to another wallet
    /// # Arguments
    /// * `new_owner` - The wallet that becomes the owner
    /// # Returns
    /// * `Result<()>` - Ok if ownership is transferred, Err otherwise
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<()> {
        let previous = self.token_config.set_owner(new_owner);

        emit!(OwnershipTransferred {
            mint: self.token_config.mint,
            previous,
            new: new_owner,
        });

        Ok(())
    }
}
