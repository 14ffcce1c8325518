use serde::{Deserialize, Serialize};

use crate::address::{AccountId, CurrencyId};

/// Immutable staking parameters for one stake currency.
///
/// Created once by whoever initializes it, never mutated, never deleted.
/// Uniquely keyed by the stake currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeConfig {
    pub version: u8,
    /// Identity allowed to create vaults under this config
    pub authority: AccountId,
    /// Currency of the tokens being staked
    pub stake_currency: CurrencyId,
    /// Seconds a position must age before it is withdrawable
    pub lock_period: u32,
    /// Seconds between the soft cap being reached and the payout gate
    pub lock_extend_time: u32,
    /// Minimum aggregate stake that starts the payout countdown
    pub soft_cap: u64,
    /// When the config was created
    pub created_at: i64,
}

impl StakeConfig {
    pub fn new(
        authority: AccountId,
        stake_currency: CurrencyId,
        lock_period: u32,
        lock_extend_time: u32,
        soft_cap: u64,
        now: i64,
    ) -> Self {
        StakeConfig {
            version: 1,
            authority,
            stake_currency,
            lock_period,
            lock_extend_time,
            soft_cap,
            created_at: now,
        }
    }
}
