use serde::{Deserialize, Serialize};

use crate::address::{AccountId, Address};
use crate::error::{StakeError, StakeResult};
use crate::math::{stake_math, SafeMath};

/// One staker's position within a vault.
///
/// Persists for the life of the vault, even after full withdrawal, so the
/// claim history is never lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakerRecord {
    /// Address of the owning vault
    pub vault: Address,
    pub staker: AccountId,
    /// Currently withdrawable principal
    pub stake_amount: u64,
    /// Principal frozen at soft-cap time, the reward numerator (pool mode)
    pub snapshot_amount: u64,
    /// One-shot claim flag (pool mode)
    pub claimed: bool,
    /// Highest deposit id issued so far (ledger mode)
    pub current_deposit_id: u64,
    /// Most recent stake time, drives pool-mode unbonding
    pub last_stake_time: i64,
    pub created_at: i64,
}

impl StakerRecord {
    pub fn new(vault: Address, staker: AccountId, now: i64) -> Self {
        StakerRecord {
            vault,
            staker,
            stake_amount: 0,
            snapshot_amount: 0,
            claimed: false,
            current_deposit_id: 0,
            last_stake_time: now,
            created_at: now,
        }
    }

    /// Add principal. The snapshot follows the position only while the
    /// vault is still accumulating toward its soft cap.
    pub fn record_stake(&mut self, amount: u64, track_snapshot: bool, now: i64) -> StakeResult<()> {
        self.stake_amount = self.stake_amount.safe_add(amount)?;
        if track_snapshot {
            self.snapshot_amount = self.snapshot_amount.safe_add(amount)?;
        }
        self.last_stake_time = now;
        Ok(())
    }

    /// Remove principal. `shrink_snapshot` only while the snapshot is not
    /// yet frozen; once frozen it never changes again.
    pub fn record_unstake(&mut self, amount: u64, shrink_snapshot: bool) -> StakeResult<()> {
        if amount > self.stake_amount {
            return Err(StakeError::InsufficientBalance);
        }
        self.stake_amount = self.stake_amount.safe_sub(amount)?;
        if shrink_snapshot {
            self.snapshot_amount = self.snapshot_amount.safe_sub(amount)?;
        }
        Ok(())
    }

    /// Id the next deposit in this record's chain must carry.
    pub fn next_deposit_id(&self) -> u64 {
        self.current_deposit_id + 1
    }

    /// Accept a deposit id supplied by the caller. Anything other than the
    /// next id in the gapless chain is an addressing mismatch.
    pub fn accept_deposit_id(&mut self, id: u64) -> StakeResult<()> {
        if id != self.next_deposit_id() {
            return Err(StakeError::AddressMismatch);
        }
        self.current_deposit_id = id;
        Ok(())
    }

    pub fn unbonding_over(&self, now: i64, lock_period: u32) -> StakeResult<bool> {
        Ok(now >= stake_math::unlock_time(self.last_stake_time, lock_period)?)
    }

    /// false -> true exactly once, on the first successful claim.
    pub fn mark_claimed(&mut self) -> StakeResult<()> {
        if self.claimed {
            return Err(StakeError::AlreadyClaimed);
        }
        self.claimed = true;
        Ok(())
    }
}

/// Immutable record of one ledger-mode deposit event.
///
/// Ids form a gapless, strictly increasing sequence per staker record. The
/// record is kept even after the funds are fully withdrawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakeDeposit {
    pub id: u64,
    /// Address of the owning staker record
    pub staker_record: Address,
    /// Remaining principal in this deposit
    pub amount: u64,
    pub created_at: i64,
}

impl StakeDeposit {
    pub fn new(id: u64, staker_record: Address, amount: u64, now: i64) -> Self {
        StakeDeposit {
            id,
            staker_record,
            amount,
            created_at: now,
        }
    }

    /// Partial withdrawals are permitted; draining the deposit does not
    /// delete it.
    pub fn withdraw(&mut self, amount: u64) -> StakeResult<()> {
        if amount > self.amount {
            return Err(StakeError::InsufficientBalance);
        }
        self.amount = self.amount.safe_sub(amount)?;
        Ok(())
    }

    /// Each deposit ages from its own creation time.
    pub fn unbonding_over(&self, now: i64, lock_period: u32) -> StakeResult<bool> {
        Ok(now >= stake_math::unlock_time(self.created_at, lock_period)?)
    }
}
