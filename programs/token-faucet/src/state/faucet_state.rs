use anchor_lang::prelude::*;

use faucet_token::state::TokenConfig;

use crate::{
    constants::{DEFAULT_CLAIM_AMOUNT, DEFAULT_COOLDOWN_DURATION, DEFAULT_MAX_LIFETIME_CLAIM},
    errors::FaucetError,
    state::ClaimRecord,
};

/// Eligibility of one wallet, derived from its `ClaimRecord` and the faucet state.
/// `Paused` overrides every per-wallet state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub enum ClaimStatus {
    Eligible,
    CoolingDown,
    LifetimeExhausted,
    Paused,
}

/// FaucetState state account - configuration and counters of one faucet
#[account]
#[derive(InitSpace)]
pub struct FaucetState {
    // Administrator allowed to pause and unpause the faucet
    pub owner: Pubkey,

    // The Faucet Token mint this faucet distributes
    pub mint: Pubkey,

    // The `TokenConfig` of the mint in the faucet-token program
    pub token_config: Pubkey,

    // Fixed grant per claim, in raw units
    pub claim_amount: u64,

    // Minimum number of seconds between two claims of one wallet
    pub cooldown_duration: i64,

    // Cap on the cumulative amount one wallet can claim
    pub max_lifetime_claim: u64,

    // When set, every claim fails with `FaucetPaused`
    pub paused: bool,

    // Sum of every successful claim
    pub total_distributed: u64,

    // Number of successful claims across all wallets
    pub total_claims: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

/// Claim configuration of a new faucet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaucetConfig {
    pub claim_amount: u64,
    pub cooldown_duration: i64,
    pub max_lifetime_claim: u64,
}

impl FaucetState {
    /// Only the owner of the token may create its faucet
    pub fn check_initializer(token_config: &TokenConfig, owner: &Pubkey) -> Result<()> {
        require_keys_eq!(token_config.owner, *owner, FaucetError::Unauthorized);
        Ok(())
    }

    /// Fill unset values with the defaults, then validate the result
    pub fn resolve_config(
        claim_amount: Option<u64>,
        cooldown_duration: Option<i64>,
        max_lifetime_claim: Option<u64>,
    ) -> Result<FaucetConfig> {
        let config = FaucetConfig {
            claim_amount: claim_amount.unwrap_or(DEFAULT_CLAIM_AMOUNT),
            cooldown_duration: cooldown_duration.unwrap_or(DEFAULT_COOLDOWN_DURATION),
            max_lifetime_claim: max_lifetime_claim.unwrap_or(DEFAULT_MAX_LIFETIME_CLAIM),
        };
        Self::validate_config(
            config.claim_amount,
            config.cooldown_duration,
            config.max_lifetime_claim,
        )?;
        Ok(config)
    }

    /// Reject configurations under which no claim could ever succeed
    pub fn validate_config(
        claim_amount: u64,
        cooldown_duration: i64,
        max_lifetime_claim: u64,
    ) -> Result<()> {
        require_gt!(claim_amount, 0, FaucetError::InvalidConfiguration);
        require_gte!(cooldown_duration, 0, FaucetError::InvalidConfiguration);
        require_gte!(
            max_lifetime_claim,
            claim_amount,
            FaucetError::InvalidConfiguration
        );
        Ok(())
    }

    /// Evaluate the claim gate for `record` at time `now`.
    /// Checks run in order: pause flag, cooldown, lifetime cap.
    /// # Arguments
    /// * `record` - The wallet's claim record, `ClaimRecord::empty` if it never claimed
    /// * `now` - The cluster unix timestamp
    /// # Returns
    /// * `Result<ClaimStatus>` - The first gate that blocks the claim, or `Eligible`
    pub fn claim_status(&self, record: &ClaimRecord, now: i64) -> Result<ClaimStatus> {
        if self.paused {
            return Ok(ClaimStatus::Paused);
        }

        if record.has_claimed() {
            let elapsed = now
                .checked_sub(record.last_claim_at)
                .ok_or(FaucetError::ArithmeticOverflow)?;
            if elapsed < self.cooldown_duration {
                return Ok(ClaimStatus::CoolingDown);
            }
        }

        let total_after_claim = record
            .total_claimed
            .checked_add(self.claim_amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        if total_after_claim > self.max_lifetime_claim {
            return Ok(ClaimStatus::LifetimeExhausted);
        }

        Ok(ClaimStatus::Eligible)
    }

    /// Fail with the error matching the first blocking gate
    pub fn check_claim(&self, record: &ClaimRecord, now: i64) -> Result<()> {
        match self.claim_status(record, now)? {
            ClaimStatus::Eligible => Ok(()),
            ClaimStatus::Paused => err!(FaucetError::FaucetPaused),
            ClaimStatus::CoolingDown => {
                msg!(
                    "Cooldown active: last claim at {}, next claim at {:?}, now {}",
                    record.last_claim_at,
                    record.next_claim_at(self.cooldown_duration),
                    now
                );
                err!(FaucetError::CooldownActive)
            }
            ClaimStatus::LifetimeExhausted => {
                msg!(
                    "Lifetime limit reached: claimed {} + {} > max {}",
                    record.total_claimed,
                    self.claim_amount,
                    self.max_lifetime_claim
                );
                err!(FaucetError::LifetimeLimitReached)
            }
        }
    }

    /// Same predicate as `check_claim`, read-only
    pub fn can_claim(&self, record: &ClaimRecord, now: i64) -> Result<bool> {
        Ok(self.claim_status(record, now)? == ClaimStatus::Eligible)
    }

    pub fn remaining_allowance(&self, record: &ClaimRecord) -> u64 {
        self.max_lifetime_claim.saturating_sub(record.total_claimed)
    }

    /// Write the pause flag, returning the previous value
    pub fn set_paused(&mut self, paused: bool) -> bool {
        let previous = self.paused;
        self.paused = paused;

        if previous == paused {
            msg!("Faucet pause flag already {}", paused);
        }

        previous
    }

    /// Account for one successful claim in the global counters
    pub fn record_distribution(&mut self) -> Result<()> {
        let total_distributed = self
            .total_distributed
            .checked_add(self.claim_amount)
            .ok_or(FaucetError::ArithmeticOverflow)?;
        let total_claims = self
            .total_claims
            .checked_add(1)
            .ok_or(FaucetError::ArithmeticOverflow)?;

        self.total_distributed = total_distributed;
        self.total_claims = total_claims;

        Ok(())
    }
}
