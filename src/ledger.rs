//! Collaborator contracts the engine runs against.
//!
//! The engine never talks to a blockchain or wallet directly: time, token
//! custody and caller authenticity come in through these traits. The
//! in-memory implementations below are suitable for tests and for embedding
//! the engine behind a transport that supplies its own substrate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::address::{AccountId, CurrencyId};
use crate::error::{StakeError, StakeResult};
use crate::math::SafeMath;

/// Trusted source of the current time in seconds.
pub trait Clock {
    fn now(&self) -> i64;
}

/// External fungible-token substrate.
///
/// `transfer` debits and credits atomically; the enclosing operation aborts
/// whole if the debited balance is insufficient. Accounts are created on
/// first credit, there is no separate account-creation step.
pub trait TokenLedger {
    fn balance(&self, currency: &CurrencyId, account: &AccountId) -> u64;

    fn transfer(
        &mut self,
        currency: &CurrencyId,
        from: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> StakeResult<()>;
}

/// Caller-authenticity check, run before every operation body.
///
/// Transports that already enforce signatures can plug in [`AllowAll`].
pub trait IdentityVerifier {
    fn verify(&self, caller: &AccountId) -> StakeResult<()>;
}

/// Wall-clock seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

/// Manually driven clock. Clones share the same underlying time, so a test
/// can keep a handle and advance it while the engine owns its copy.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Arc<AtomicI64>);

impl ManualClock {
    pub fn new(now: i64) -> Self {
        ManualClock(Arc::new(AtomicI64::new(now)))
    }

    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// In-memory token ledger with a mint faucet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryLedger {
    balances: BTreeMap<(CurrencyId, AccountId), u64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit freshly issued tokens to `account`.
    pub fn mint(
        &mut self,
        currency: &CurrencyId,
        account: &AccountId,
        amount: u64,
    ) -> StakeResult<()> {
        let balance = self.balances.entry((*currency, *account)).or_insert(0);
        *balance = balance.safe_add(amount)?;
        Ok(())
    }

    /// Sum of all balances held in one currency.
    pub fn total_supply(&self, currency: &CurrencyId) -> u64 {
        self.balances
            .iter()
            .filter(|((c, _), _)| c == currency)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl TokenLedger for MemoryLedger {
    fn balance(&self, currency: &CurrencyId, account: &AccountId) -> u64 {
        self.balances
            .get(&(*currency, *account))
            .copied()
            .unwrap_or(0)
    }

    fn transfer(
        &mut self,
        currency: &CurrencyId,
        from: &AccountId,
        to: &AccountId,
        amount: u64,
    ) -> StakeResult<()> {
        let from_balance = self.balance(currency, from);
        if from_balance < amount {
            return Err(StakeError::InsufficientBalance);
        }
        let to_balance = self.balance(currency, to);
        let credited = to_balance.safe_add(amount)?;

        self.balances.insert((*currency, *from), from_balance - amount);
        self.balances.insert((*currency, *to), credited);
        Ok(())
    }
}

/// Verifier for deployments where authenticity is enforced upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl IdentityVerifier for AllowAll {
    fn verify(&self, _caller: &AccountId) -> StakeResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_ledger_transfer() {
        let currency = CurrencyId::named("meme");
        let alice = AccountId::named("alice");
        let bob = AccountId::named("bob");

        let mut ledger = MemoryLedger::new();
        ledger.mint(&currency, &alice, 100).unwrap();

        ledger.transfer(&currency, &alice, &bob, 40).unwrap();
        assert_eq!(ledger.balance(&currency, &alice), 60);
        assert_eq!(ledger.balance(&currency, &bob), 40);
        assert_eq!(ledger.total_supply(&currency), 100);
    }

    #[test]
    fn test_memory_ledger_insufficient_balance() {
        let currency = CurrencyId::named("meme");
        let alice = AccountId::named("alice");
        let bob = AccountId::named("bob");

        let mut ledger = MemoryLedger::new();
        ledger.mint(&currency, &alice, 10).unwrap();

        assert_eq!(
            ledger.transfer(&currency, &alice, &bob, 11),
            Err(StakeError::InsufficientBalance)
        );
        // failed transfer leaves balances untouched
        assert_eq!(ledger.balance(&currency, &alice), 10);
        assert_eq!(ledger.balance(&currency, &bob), 0);
    }

    #[test]
    fn test_manual_clock_shared_handle() {
        let clock = ManualClock::new(1_000);
        let handle = clock.clone();
        handle.advance(5);
        assert_eq!(clock.now(), 1_005);
    }
}
