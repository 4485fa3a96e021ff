use anchor_lang::prelude::*;

use crate::errors::FaucetError;

/// ClaimRecord state account - tracks one wallet's claims against one faucet
#[account]
#[derive(InitSpace, Debug)]
pub struct ClaimRecord {
    // The wallet this record belongs to
    pub owner: Pubkey,

    // Unix timestamp of the last successful claim, 0 if the wallet never claimed
    pub last_claim_at: i64,

    // Cumulative amount claimed, never above the faucet's lifetime cap
    pub total_claimed: u64,

    // Number of successful claims
    pub claim_count: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl ClaimRecord {
    /// The record of a wallet that has never claimed
    pub fn empty(owner: Pubkey) -> Self {
        Self {
            owner,
            last_claim_at: 0,
            total_claimed: 0,
            claim_count: 0,
            bump: 0,
        }
    }

    /// Read the record stored at a wallet's claim record address.
    /// An address this program never initialized reads as `ClaimRecord::empty`.
    /// # Arguments
    /// * `wallet` - The wallet the address was derived for
    /// * `owner` - The program owning the account at that address
    /// * `data` - The account data
    /// # Returns
    /// * `Result<ClaimRecord>` - The stored record, or an empty one
    pub fn load_or_empty(wallet: Pubkey, owner: &Pubkey, data: &[u8]) -> Result<Self> {
        if *owner != crate::ID || data.is_empty() {
            return Ok(Self::empty(wallet));
        }

        let record = Self::try_deserialize(&mut &data[..])?;
        require_keys_eq!(record.owner, wallet, FaucetError::InvalidClaimRecord);

        Ok(record)
    }

    pub fn has_claimed(&self) -> bool {
        self.last_claim_at != 0
    }

    /// Earliest timestamp at which the cooldown is over, `None` before the first claim
    pub fn next_claim_at(&self, cooldown_duration: i64) -> Option<i64> {
        if !self.has_claimed() {
            return None;
        }
        self.last_claim_at.checked_add(cooldown_duration)
    }

    /// Record a successful claim of `amount` at `now`.
    /// Nothing is written if a counter would overflow.
    pub fn record_claim(&mut self, amount: u64, now: i64) -> Result<()> {
        let total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(FaucetError::ArithmeticOverflow)?;

        self.last_claim_at = now;
        self.total_claimed = total_claimed;
        self.claim_count = claim_count;

        Ok(())
    }
}
