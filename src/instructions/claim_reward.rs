use tracing::{debug, info};

use crate::address::{reward_custody, staker_record_address, AccountId, Address};
use crate::engine::StakingEngine;
use crate::error::{StakeError, StakeResult};
use crate::ledger::{Clock, IdentityVerifier, TokenLedger};
use crate::math::stake_math;
use crate::state::VaultKind;

impl<C, L, I> StakingEngine<C, L, I>
where
    C: Clock,
    L: TokenLedger,
    I: IdentityVerifier,
{
    /// Claim the caller's proportional share of a pool vault's reward pool.
    ///
    /// The first successful claim after the payout gate freezes whatever
    /// reward balance sits in the vault's custody as the pool. Each staker
    /// gets `floor(pool * snapshot / total_staked)` exactly once; an
    /// unfunded pool pays zero and still consumes the claim right, since
    /// time is the sole unlock condition.
    pub fn claim_reward(&mut self, caller: AccountId, vault: Address) -> StakeResult<u64> {
        self.verify_caller(&caller)?;

        let mut pot = self.load_vault(&vault)?;
        let reward_currency = match pot.kind {
            VaultKind::Pool { reward_currency } => reward_currency,
            // ledger vaults distribute nothing
            VaultKind::Ledger { .. } => return Err(StakeError::VaultNotStarted),
        };

        if !pot.reached_soft_cap {
            return Err(StakeError::VaultNotStarted);
        }
        let now = self.clock.now();
        if now < pot.end_time {
            return Err(StakeError::PayoutGateNotYetReached);
        }

        let record_address = staker_record_address(&vault, &caller)?;
        let mut record = self
            .staker_records
            .get(&record_address)
            .cloned()
            .ok_or(StakeError::NotFound)?;
        if record.claimed {
            return Err(StakeError::AlreadyClaimed);
        }

        let custody = reward_custody(&vault)?;
        if !pot.reached_payout_gate {
            let reward_balance = self.ledger.balance(&reward_currency, &custody);
            pot.freeze_reward_pool(reward_balance);
            info!(%vault, total_reward_pool = reward_balance, "payout gate reached, reward pool frozen");
        }

        let claimable =
            stake_math::earned_amount(record.snapshot_amount, pot.total_staked, pot.total_reward_pool)?;
        record.mark_claimed()?;

        if claimable > 0 {
            self.ledger
                .transfer(&reward_currency, &custody, &caller, claimable)?;
        }

        self.staker_records.insert(record_address, record);
        self.vaults.insert(vault, pot);
        debug!(%vault, staker = %caller, claimable, "reward claimed");

        Ok(claimable)
    }
}
