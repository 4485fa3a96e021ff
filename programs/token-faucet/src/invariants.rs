//! End-to-end claim scenarios against an in-memory ledger.
//!
//! `Ledger` runs the same sequence as `request_tokens` and the faucet-token `mint`
//! on copies of the accounts and commits them only if every step succeeds,
//! the way the runtime discards the writes of a failed transaction.

use std::collections::HashMap;

use anchor_lang::prelude::*;
use faucet_token::{errors::TokenError, state::TokenConfig};
use proptest::prelude::*;

use crate::{
    errors::FaucetError,
    state::{ClaimRecord, FaucetState},
};

const T0: i64 = 1_700_000_000;

#[derive(Clone)]
struct Ledger {
    faucet_key: Pubkey,
    faucet: FaucetState,
    token_config: TokenConfig,
    records: HashMap<Pubkey, ClaimRecord>,
    balances: HashMap<Pubkey, u64>,
    // (account, amount, timestamp) of every `TokensClaimed`
    events: Vec<(Pubkey, u64, i64)>,
}

impl Ledger {
    fn new(claim_amount: u64, cooldown: i64, max_lifetime: u64, max_supply: u64) -> Self {
        let faucet_key = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        Self {
            faucet_key,
            faucet: FaucetState {
                owner: Pubkey::new_unique(),
                mint,
                token_config: Pubkey::new_unique(),
                claim_amount,
                cooldown_duration: cooldown,
                max_lifetime_claim: max_lifetime,
                paused: false,
                total_distributed: 0,
                total_claims: 0,
                bump: 255,
            },
            token_config: TokenConfig {
                owner: Pubkey::new_unique(),
                mint,
                distributor: faucet_key,
                max_supply,
                issued_supply: 0,
                bump: 255,
                mint_authority_bump: 254,
            },
            records: HashMap::new(),
            balances: HashMap::new(),
            events: Vec::new(),
        }
    }

    fn record(&self, user: &Pubkey) -> ClaimRecord {
        self.records
            .get(user)
            .cloned()
            .unwrap_or_else(|| ClaimRecord::empty(*user))
    }

    fn balance_of(&self, user: &Pubkey) -> u64 {
        self.balances.get(user).copied().unwrap_or(0)
    }

    fn can_claim(&self, user: &Pubkey, now: i64) -> bool {
        self.faucet.can_claim(&self.record(user), now).unwrap()
    }

    fn request_tokens(&mut self, user: Pubkey, now: i64) -> Result<()> {
        let mut next = self.clone();
        next.apply_claim(user, now)?;
        *self = next;
        Ok(())
    }

    fn apply_claim(&mut self, user: Pubkey, now: i64) -> Result<()> {
        let mut record = self.record(&user);
        self.faucet.check_claim(&record, now)?;

        let amount = self.faucet.claim_amount;
        self.token_config.apply_mint(&self.faucet_key, amount)?;
        *self.balances.entry(user).or_insert(0) += amount;

        record.record_claim(amount, now)?;
        self.records.insert(user, record);
        self.faucet.record_distribution()?;
        self.events.push((user, amount, now));

        Ok(())
    }
}

#[test]
fn test_first_claim_mints_claim_amount() {
    let mut ledger = Ledger::new(100, 60, 300, 10_000);
    let user = Pubkey::new_unique();

    assert!(ledger.can_claim(&user, T0));
    ledger.request_tokens(user, T0).unwrap();

    assert_eq!(ledger.balance_of(&user), 100);
    assert_eq!(ledger.token_config.issued_supply, 100);
    assert_eq!(ledger.record(&user).last_claim_at, T0);
    assert_eq!(ledger.record(&user).total_claimed, 100);
}

#[test]
fn test_cooldown_window() {
    let mut ledger = Ledger::new(100, 60, 300, 10_000);
    let user = Pubkey::new_unique();

    ledger.request_tokens(user, T0).unwrap();

    assert!(!ledger.can_claim(&user, T0 + 59));
    assert_eq!(
        ledger.request_tokens(user, T0 + 59).unwrap_err(),
        FaucetError::CooldownActive.into()
    );
    assert_eq!(ledger.balance_of(&user), 100);

    assert!(ledger.can_claim(&user, T0 + 60));
    ledger.request_tokens(user, T0 + 60).unwrap();
    assert_eq!(ledger.balance_of(&user), 200);
}

#[test]
fn test_lifetime_cap_after_three_claims() {
    let mut ledger = Ledger::new(100, 60, 300, 10_000);
    let user = Pubkey::new_unique();

    for i in 0..3 {
        ledger.request_tokens(user, T0 + i * 60).unwrap();
    }

    assert_eq!(ledger.record(&user).total_claimed, 300);
    assert_eq!(ledger.faucet.remaining_allowance(&ledger.record(&user)), 0);
    assert_eq!(
        ledger.request_tokens(user, T0 + 180).unwrap_err(),
        FaucetError::LifetimeLimitReached.into()
    );
    assert_eq!(ledger.balance_of(&user), 300);
}

#[test]
fn test_pause_and_unpause() {
    let mut ledger = Ledger::new(100, 60, 300, 10_000);
    let claimed = Pubkey::new_unique();
    let fresh = Pubkey::new_unique();

    ledger.request_tokens(claimed, T0).unwrap();
    ledger.faucet.set_paused(true);

    for user in [claimed, fresh] {
        assert_eq!(
            ledger.request_tokens(user, T0 + 120).unwrap_err(),
            FaucetError::FaucetPaused.into()
        );
    }

    ledger.faucet.set_paused(false);

    assert_eq!(ledger.record(&claimed).total_claimed, 100);
    ledger.request_tokens(claimed, T0 + 120).unwrap();
    ledger.request_tokens(fresh, T0 + 120).unwrap();
    assert_eq!(ledger.token_config.issued_supply, 300);
}

#[test]
fn test_supply_cap_failure_leaves_claim_record_unchanged() {
    let mut ledger = Ledger::new(100, 60, 300, 150);
    let first = Pubkey::new_unique();
    let second = Pubkey::new_unique();

    ledger.request_tokens(first, T0).unwrap();

    assert_eq!(
        ledger.request_tokens(first, T0 + 60).unwrap_err(),
        TokenError::SupplyCapExceeded.into()
    );
    assert_eq!(
        ledger.request_tokens(second, T0 + 60).unwrap_err(),
        TokenError::SupplyCapExceeded.into()
    );

    let record = ledger.record(&first);
    assert_eq!(record.last_claim_at, T0);
    assert_eq!(record.total_claimed, 100);
    assert!(!ledger.records.contains_key(&second));
    assert_eq!(ledger.faucet.total_distributed, 100);
    assert_eq!(ledger.events.len(), 1);
}

#[test]
fn test_faucet_without_distributor_role_is_unauthorized() {
    let mut ledger = Ledger::new(100, 60, 300, 10_000);
    ledger.token_config.set_distributor(Pubkey::new_unique());
    let user = Pubkey::new_unique();

    // The gate passes but the mint is refused
    assert!(ledger.can_claim(&user, T0));
    assert_eq!(
        ledger.request_tokens(user, T0).unwrap_err(),
        TokenError::Unauthorized.into()
    );
    assert_eq!(ledger.balance_of(&user), 0);
}

#[test]
fn test_one_event_per_claim() {
    let mut ledger = Ledger::new(100, 60, 300, 10_000);
    let user = Pubkey::new_unique();

    ledger.request_tokens(user, T0).unwrap();
    assert_eq!(
        ledger.request_tokens(user, T0 + 1).unwrap_err(),
        FaucetError::CooldownActive.into()
    );
    ledger.request_tokens(user, T0 + 61).unwrap();

    assert_eq!(ledger.events, vec![(user, 100, T0), (user, 100, T0 + 61)]);
}

proptest! {
    #[test]
    fn test_ledger_invariants_hold(
        claim_amount in 1u64..=100,
        lifetime_claims in 1u64..=5,
        max_supply in 1u64..=2_000,
        cooldown in 0i64..=100,
        steps in prop::collection::vec((0usize..4, 0i64..=150, any::<bool>()), 1..80),
    ) {
        let max_lifetime = claim_amount * lifetime_claims;
        let mut ledger = Ledger::new(claim_amount, cooldown, max_lifetime, max_supply);
        let users: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let mut now = T0;

        for (user_index, advance, toggle_pause) in steps {
            now += advance;
            if toggle_pause {
                ledger.faucet.paused = !ledger.faucet.paused;
            }

            let user = users[user_index];
            let before = ledger.clone();
            let predicted = ledger.can_claim(&user, now);

            match ledger.request_tokens(user, now) {
                Ok(()) => {
                    prop_assert!(predicted);
                    prop_assert_eq!(ledger.balance_of(&user), before.balance_of(&user) + claim_amount);
                }
                Err(_) => {
                    prop_assert_eq!(ledger.record(&user).last_claim_at, before.record(&user).last_claim_at);
                    prop_assert_eq!(ledger.record(&user).total_claimed, before.record(&user).total_claimed);
                    prop_assert_eq!(ledger.token_config.issued_supply, before.token_config.issued_supply);
                }
            }

            let balances: u64 = ledger.balances.values().sum();
            prop_assert!(ledger.token_config.issued_supply <= max_supply);
            prop_assert_eq!(balances, ledger.token_config.issued_supply);
            prop_assert_eq!(ledger.faucet.total_distributed, ledger.token_config.issued_supply);
            for record in ledger.records.values() {
                prop_assert!(record.total_claimed <= max_lifetime);
            }
        }
    }
}
