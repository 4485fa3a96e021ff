use anchor_lang::prelude::*;

use crate::{constants::DEFAULT_MAX_SUPPLY, errors::TokenError};

/// TokenConfig state account - supply accounting and roles for the Faucet Token mint
#[account]
#[derive(InitSpace)]
pub struct TokenConfig {
    // Administrator allowed to assign the distributor and hand over ownership
    pub owner: Pubkey,

    // The Token-2022 mint governed by this config
    pub mint: Pubkey,

    // The only signer allowed to mint
    // `Pubkey::default()` until the owner wires a distributor
    pub distributor: Pubkey,

    // Hard cap on issued supply, fixed at creation
    pub max_supply: u64,

    // Running total of raw tokens minted, never decreases
    pub issued_supply: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,

    // The bump of the mint authority PDA, used to sign `mint_to`
    pub mint_authority_bump: u8,
}

impl TokenConfig {
    /// Supply cap for a new mint, `DEFAULT_MAX_SUPPLY` when none is given
    pub fn resolve_max_supply(max_supply: Option<u64>) -> Result<u64> {
        let max_supply = max_supply.unwrap_or(DEFAULT_MAX_SUPPLY);
        require_gt!(max_supply, 0, TokenError::InvalidSupplyCap);
        Ok(max_supply)
    }

    pub fn has_distributor(&self) -> bool {
        self.distributor != Pubkey::default()
    }

    /// Fails with `Unauthorized` unless `signer` is the registered distributor
    pub fn check_distributor(&self, signer: &Pubkey) -> Result<()> {
        require!(self.has_distributor(), TokenError::Unauthorized);
        require_keys_eq!(self.distributor, *signer, TokenError::Unauthorized);
        Ok(())
    }

    /// Issued supply after minting `amount`, or the reason the mint is refused.
    /// # Arguments
    /// * `amount` - The amount of raw tokens to mint
    /// # Returns
    /// * `Result<u64>` - The new issued supply, never above `max_supply`
    pub fn supply_after_mint(&self, amount: u64) -> Result<u64> {
        let new_supply = self
            .issued_supply
            .checked_add(amount)
            .ok_or(TokenError::ArithmeticOverflow)?;

        if new_supply > self.max_supply {
            msg!(
                "Supply cap exceeded: requested {}, remaining {} of max {}",
                amount,
                self.remaining_supply(),
                self.max_supply
            );
            return err!(TokenError::SupplyCapExceeded);
        }

        Ok(new_supply)
    }

    /// Authorize and account for a mint of `amount` by `signer`.
    /// Nothing is written unless every check passes.
    /// # Arguments
    /// * `signer` - The key that signed the mint instruction
    /// * `amount` - The amount of raw tokens to mint, zero is a no-op
    /// # Returns
    /// * `Result<u64>` - The issued supply after the mint
    pub fn apply_mint(&mut self, signer: &Pubkey, amount: u64) -> Result<u64> {
        self.check_distributor(signer)?;

        let new_supply = self.supply_after_mint(amount)?;
        self.issued_supply = new_supply;

        Ok(new_supply)
    }

    pub fn remaining_supply(&self) -> u64 {
        self.max_supply.saturating_sub(self.issued_supply)
    }

    /// Move the distributor role to `distributor`
    /// # Returns
    /// * `Pubkey` - The previous distributor, `Pubkey::default()` if none was set
    pub fn set_distributor(&mut self, distributor: Pubkey) -> Pubkey {
        let previous = self.distributor;
        self.distributor = distributor;

        if previous != Pubkey::default() && previous != distributor {
            msg!("Distributor reassigned from {} to {}", previous, distributor);
        }

        previous
    }

    /// Hand the owner role to `new_owner`, returning the previous owner
    pub fn set_owner(&mut self, new_owner: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.owner, new_owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ONE_TOKEN;
    use proptest::prelude::*;

    fn create_test_config(distributor: Pubkey, max_supply: u64, issued_supply: u64) -> TokenConfig {
        TokenConfig {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            distributor,
            max_supply,
            issued_supply,
            bump: 255,
            mint_authority_bump: 254,
        }
    }

    #[test]
    fn test_distributor_can_mint() {
        let distributor = Pubkey::new_unique();
        let mut config = create_test_config(distributor, DEFAULT_MAX_SUPPLY, 0);

        let issued = config.apply_mint(&distributor, 100 * ONE_TOKEN).unwrap();

        assert_eq!(issued, 100 * ONE_TOKEN);
        assert_eq!(config.issued_supply, 100 * ONE_TOKEN);
        assert_eq!(config.remaining_supply(), DEFAULT_MAX_SUPPLY - 100 * ONE_TOKEN);
    }

    #[test]
    fn test_non_distributor_is_rejected() {
        let distributor = Pubkey::new_unique();
        let mut config = create_test_config(distributor, DEFAULT_MAX_SUPPLY, 0);

        let result = config.apply_mint(&Pubkey::new_unique(), 100);

        assert_eq!(result.unwrap_err(), TokenError::Unauthorized.into());
        assert_eq!(config.issued_supply, 0);
    }

    #[test]
    fn test_unset_distributor_rejects_everyone() {
        let mut config = create_test_config(Pubkey::default(), DEFAULT_MAX_SUPPLY, 0);

        assert!(!config.has_distributor());

        let result = config.apply_mint(&Pubkey::default(), 100);
        assert_eq!(result.unwrap_err(), TokenError::Unauthorized.into());
    }

    #[test]
    fn test_zero_amount_is_a_noop() {
        let distributor = Pubkey::new_unique();
        let mut config = create_test_config(distributor, 1_000, 1_000);

        // Even with the cap fully used, a zero mint succeeds
        assert_eq!(config.apply_mint(&distributor, 0).unwrap(), 1_000);
        assert_eq!(config.issued_supply, 1_000);
    }

    #[test]
    fn test_zero_amount_still_requires_distributor() {
        let mut config = create_test_config(Pubkey::new_unique(), 1_000, 0);

        let result = config.apply_mint(&Pubkey::new_unique(), 0);
        assert_eq!(result.unwrap_err(), TokenError::Unauthorized.into());
    }

    #[test]
    fn test_mint_up_to_exact_cap() {
        let distributor = Pubkey::new_unique();
        let mut config = create_test_config(distributor, 1_000, 900);

        assert_eq!(config.apply_mint(&distributor, 100).unwrap(), 1_000);
        assert_eq!(config.remaining_supply(), 0);
    }

    #[test]
    fn test_mint_above_cap_leaves_state_unchanged() {
        let distributor = Pubkey::new_unique();
        let mut config = create_test_config(distributor, 1_000, 950);

        let result = config.apply_mint(&distributor, 51);

        assert_eq!(result.unwrap_err(), TokenError::SupplyCapExceeded.into());
        assert_eq!(config.issued_supply, 950);
    }

    #[test]
    fn test_overflow_fails_closed() {
        let distributor = Pubkey::new_unique();
        let mut config = create_test_config(distributor, u64::MAX, u64::MAX - 1);

        let result = config.apply_mint(&distributor, 2);

        assert_eq!(result.unwrap_err(), TokenError::ArithmeticOverflow.into());
        assert_eq!(config.issued_supply, u64::MAX - 1);
    }

    #[test]
    fn test_set_distributor_wires_first_distributor() {
        let mut config = create_test_config(Pubkey::default(), DEFAULT_MAX_SUPPLY, 0);
        let distributor = Pubkey::new_unique();

        let previous = config.set_distributor(distributor);

        assert_eq!(previous, Pubkey::default());
        assert!(config.has_distributor());
        assert!(config.apply_mint(&distributor, 1).is_ok());
    }

    #[test]
    fn test_set_distributor_reassigns_role() {
        let old = Pubkey::new_unique();
        let new = Pubkey::new_unique();
        let mut config = create_test_config(old, DEFAULT_MAX_SUPPLY, 0);

        let previous = config.set_distributor(new);

        assert_eq!(previous, old);
        assert_eq!(config.distributor, new);
        assert_eq!(
            config.apply_mint(&old, 1).unwrap_err(),
            TokenError::Unauthorized.into()
        );
        assert_eq!(config.apply_mint(&new, 1).unwrap(), 1);
    }

    #[test]
    fn test_set_owner_returns_previous_owner() {
        let mut config = create_test_config(Pubkey::new_unique(), DEFAULT_MAX_SUPPLY, 0);
        let original = config.owner;
        let new_owner = Pubkey::new_unique();

        assert_eq!(config.set_owner(new_owner), original);
        assert_eq!(config.owner, new_owner);
    }

    #[test]
    fn test_resolve_max_supply() {
        assert_eq!(TokenConfig::resolve_max_supply(None).unwrap(), DEFAULT_MAX_SUPPLY);
        assert_eq!(TokenConfig::resolve_max_supply(Some(500)).unwrap(), 500);
        assert_eq!(
            TokenConfig::resolve_max_supply(Some(0)).unwrap_err(),
            TokenError::InvalidSupplyCap.into()
        );
    }

    proptest! {
        #[test]
        fn test_issued_supply_never_exceeds_cap(
            max_supply in 1u64..=DEFAULT_MAX_SUPPLY,
            amounts in prop::collection::vec(0u64..=DEFAULT_MAX_SUPPLY / 4, 1..50),
        ) {
            let distributor = Pubkey::new_unique();
            let mut config = create_test_config(distributor, max_supply, 0);

            for amount in amounts {
                let before = config.issued_supply;
                match config.apply_mint(&distributor, amount) {
                    Ok(issued) => {
                        prop_assert_eq!(issued, before + amount);
                        prop_assert_eq!(config.issued_supply, issued);
                    }
                    Err(_) => {
                        prop_assert!(before + amount > max_supply);
                        prop_assert_eq!(config.issued_supply, before);
                    }
                }
                prop_assert!(config.issued_supply <= config.max_supply);
            }
        }
    }
}
