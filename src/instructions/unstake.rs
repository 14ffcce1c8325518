use tracing::debug;

use crate::address::{deposit_address, stake_custody, staker_record_address, AccountId, Address};
use crate::engine::StakingEngine;
use crate::error::{StakeError, StakeResult};
use crate::ledger::{Clock, IdentityVerifier, TokenLedger};
use crate::state::VaultKind;

impl<C, L, I> StakingEngine<C, L, I>
where
    C: Clock,
    L: TokenLedger,
    I: IdentityVerifier,
{
    /// Withdraw `amount` of previously staked principal.
    ///
    /// Gates run in order: the unbonding period for the position (pool
    /// mode) or the referenced deposit (ledger mode), then the soft-cap /
    /// payout-gate window during which nothing may leave the vault.
    pub fn unstake(
        &mut self,
        caller: AccountId,
        vault: Address,
        amount: u64,
        deposit_id: Option<u64>,
    ) -> StakeResult<()> {
        self.verify_caller(&caller)?;
        if amount == 0 {
            return Err(StakeError::InvalidAmount);
        }

        let mut pot = self.load_vault(&vault)?;
        let config = self.load_config(&pot.config)?;
        let now = self.clock.now();

        let record_address = staker_record_address(&vault, &caller)?;
        let mut record = self
            .staker_records
            .get(&record_address)
            .cloned()
            .ok_or(StakeError::NotFound)?;

        let mut touched_deposit = None;
        match pot.kind {
            VaultKind::Pool { .. } => {
                if !record.unbonding_over(now, config.lock_period)? {
                    return Err(StakeError::UnbondingTimeNotOverYet);
                }
                pot.ensure_withdrawals_open(now)?;

                let snapshot_live = !pot.reached_soft_cap;
                record.record_unstake(amount, snapshot_live)?;
                pot.record_unstake(amount)?;
            }
            VaultKind::Ledger { lock_period } => {
                let id = deposit_id.ok_or(StakeError::NotFound)?;
                let address = deposit_address(&record_address, id)?;
                let mut deposit = self
                    .deposits
                    .get(&address)
                    .cloned()
                    .ok_or(StakeError::NotFound)?;

                if !deposit.unbonding_over(now, lock_period)? {
                    return Err(StakeError::UnbondingTimeNotOverYet);
                }
                pot.ensure_withdrawals_open(now)?;

                deposit.withdraw(amount)?;
                record.record_unstake(amount, false)?;
                pot.record_unstake(amount)?;
                touched_deposit = Some((address, deposit));
            }
        }

        let custody = stake_custody(&vault)?;
        self.ledger
            .transfer(&config.stake_currency, &custody, &caller, amount)?;

        if let Some((address, deposit)) = touched_deposit {
            self.deposits.insert(address, deposit);
        }
        self.staker_records.insert(record_address, record);
        self.vaults.insert(vault, pot);
        debug!(%vault, staker = %caller, amount, "unstake");

        Ok(())
    }
}
