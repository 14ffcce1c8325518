use serde::{Deserialize, Serialize};

use crate::address::{Address, CurrencyId};
use crate::error::{StakeError, StakeResult};
use crate::math::SafeMath;

/// Secondary key distinguishing vaults under one config.
///
/// The two modes are mutually exclusive per vault: a pool vault aggregates
/// one position per staker and distributes a reward currency after the
/// payout gate; a ledger vault tracks independently timed deposits with its
/// own lock period and distributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultKind {
    Pool { reward_currency: CurrencyId },
    Ledger { lock_period: u32 },
}

impl VaultKind {
    /// Seed bytes feeding the vault's address derivation.
    pub fn secondary_seed(&self) -> Vec<u8> {
        match self {
            VaultKind::Pool { reward_currency } => reward_currency.0.to_vec(),
            VaultKind::Ledger { lock_period } => lock_period.to_le_bytes().to_vec(),
        }
    }

    pub fn is_pool(&self) -> bool {
        matches!(self, VaultKind::Pool { .. })
    }
}

/// Where a vault sits in its soft-cap lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultState {
    Empty,
    Accumulating,
    SoftCapReached,
    PayoutOpen,
}

/// Pooled staking pot for one (config, secondary-key) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vault {
    pub version: u8,
    /// Address of the owning config
    pub config: Address,
    pub kind: VaultKind,
    /// Aggregate stake; frozen as the reward denominator in pool mode the
    /// instant the soft cap is reached
    pub total_staked: u64,
    /// Payout gate timestamp, 0 until the soft cap is reached
    pub end_time: i64,
    pub reached_soft_cap: bool,
    /// True once the first successful claim froze the reward pool
    pub reached_payout_gate: bool,
    /// Reward balance captured on the first claim, set exactly once
    pub total_reward_pool: u64,
    pub created_at: i64,
}

impl Vault {
    pub fn new(config: Address, kind: VaultKind, now: i64) -> Self {
        Vault {
            version: 1,
            config,
            kind,
            total_staked: 0,
            end_time: 0,
            reached_soft_cap: false,
            reached_payout_gate: false,
            total_reward_pool: 0,
            created_at: now,
        }
    }

    pub fn state(&self, now: i64) -> VaultState {
        if !self.reached_soft_cap {
            if self.total_staked == 0 {
                VaultState::Empty
            } else {
                VaultState::Accumulating
            }
        } else if now < self.end_time {
            VaultState::SoftCapReached
        } else {
            VaultState::PayoutOpen
        }
    }

    /// Fold a new stake into the aggregate and run the one-way soft-cap
    /// transition. Returns true when this stake crossed the threshold.
    ///
    /// In pool mode `total_staked` is the reward denominator and stops
    /// moving once frozen; a ledger vault keeps a live total.
    pub fn record_stake(
        &mut self,
        amount: u64,
        soft_cap: u64,
        lock_extend_time: u32,
        now: i64,
    ) -> StakeResult<bool> {
        match self.kind {
            VaultKind::Pool { .. } if self.reached_soft_cap => {}
            _ => self.total_staked = self.total_staked.safe_add(amount)?,
        }

        if !self.reached_soft_cap && self.total_staked >= soft_cap {
            self.reached_soft_cap = true;
            self.end_time = now.safe_add(lock_extend_time as i64)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Remove withdrawn principal from the aggregate where the mode calls
    /// for it. A frozen pool denominator is left untouched.
    pub fn record_unstake(&mut self, amount: u64) -> StakeResult<()> {
        match self.kind {
            VaultKind::Pool { .. } if self.reached_soft_cap => {}
            _ => self.total_staked = self.total_staked.safe_sub(amount)?,
        }
        Ok(())
    }

    /// Unstake gate: between the soft cap and the payout gate nothing may
    /// leave the vault.
    pub fn ensure_withdrawals_open(&self, now: i64) -> StakeResult<()> {
        if self.reached_soft_cap && now < self.end_time {
            return Err(StakeError::PayoutGateNotYetReached);
        }
        Ok(())
    }

    /// One-shot capture of the reward pool on the first successful claim.
    pub fn freeze_reward_pool(&mut self, reward_balance: u64) {
        if !self.reached_payout_gate {
            self.reached_payout_gate = true;
            self.total_reward_pool = reward_balance;
        }
    }
}
