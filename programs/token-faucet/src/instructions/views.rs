use anchor_lang::prelude::*;

use crate::{
    constants::{CLAIM_RECORD_SEED, FAUCET_STATE_SEED},
    state::{ClaimRecord, ClaimStatus, FaucetState},
};

/// Read the faucet configuration. Unpermissioned.
#[derive(Accounts)]
pub struct FaucetView<'info> {
    /// The `FaucetState` account
    /// # PDA Seeds
    /// - `FAUCET_STATE_SEED`
    /// - Mint address
    #[account(
        seeds = [FAUCET_STATE_SEED, faucet_state.mint.as_ref()],
        bump = faucet_state.bump,
    )]
    pub faucet_state: Account<'info, FaucetState>,
}

impl<'info> FaucetView<'info> {
    pub fn is_paused(&self) -> bool {
        self.faucet_state.paused
    }
}

/// Read the claim gate of one wallet. Unpermissioned.
#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct ClaimView<'info> {
    /// The `FaucetState` account
    /// # PDA Seeds
    /// - `FAUCET_STATE_SEED`
    /// - Mint address
    #[account(
        seeds = [FAUCET_STATE_SEED, faucet_state.mint.as_ref()],
        bump = faucet_state.bump,
    )]
    pub faucet_state: Account<'info, FaucetState>,

    /// The wallet's claim record address
    /// # PDA Seeds
    /// - `CLAIM_RECORD_SEED`
    /// - FaucetState address
    /// - Wallet address
    ///
    /// CHECK: Address validated by seeds. Read as an empty record until the wallet first claims.
    #[account(
        seeds = [CLAIM_RECORD_SEED, faucet_state.key().as_ref(), account.as_ref()],
        bump,
    )]
    pub claim_record: UncheckedAccount<'info>,
}

impl<'info> ClaimView<'info> {
    fn load_record(&self, account: Pubkey) -> Result<ClaimRecord> {
        let data = self.claim_record.try_borrow_data()?;
        ClaimRecord::load_or_empty(account, self.claim_record.owner, &data)
    }

    /// Same gate `request_tokens` applies, evaluated at the current cluster time
    pub fn claim_status(&self, account: Pubkey) -> Result<ClaimStatus> {
        let now = Clock::get()?.unix_timestamp;
        let record = self.load_record(account)?;
        self.faucet_state.claim_status(&record, now)
    }

    pub fn can_claim(&self, account: Pubkey) -> Result<bool> {
        Ok(self.claim_status(account)? == ClaimStatus::Eligible)
    }

    pub fn remaining_allowance(&self, account: Pubkey) -> Result<u64> {
        let record = self.load_record(account)?;
        Ok(self.faucet_state.remaining_allowance(&record))
    }
}
