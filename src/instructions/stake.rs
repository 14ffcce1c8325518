use tracing::{debug, info};

use crate::address::{deposit_address, stake_custody, staker_record_address, AccountId, Address};
use crate::engine::StakingEngine;
use crate::error::{StakeError, StakeResult};
use crate::ledger::{Clock, IdentityVerifier, TokenLedger};
use crate::state::{StakeDeposit, StakerRecord, VaultKind};

impl<C, L, I> StakingEngine<C, L, I>
where
    C: Clock,
    L: TokenLedger,
    I: IdentityVerifier,
{
    /// Deposit `amount` of the stake currency into a vault.
    ///
    /// Ledger mode requires `deposit_id` to be exactly the next id in the
    /// caller's deposit chain; pool mode ignores it. The token transfer is
    /// the first side effect, and the ledger entries commit only once it
    /// has succeeded.
    pub fn stake(
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
            .unwrap_or_else(|| StakerRecord::new(vault, caller, now));

        let new_deposit = match pot.kind {
            VaultKind::Ledger { .. } => {
                let id = deposit_id.ok_or(StakeError::AddressMismatch)?;
                record.accept_deposit_id(id)?;
                let address = deposit_address(&record_address, id)?;
                if self.deposits.contains_key(&address) {
                    return Err(StakeError::AlreadyExists);
                }
                Some((address, StakeDeposit::new(id, record_address, amount, now)))
            }
            VaultKind::Pool { .. } => None,
        };

        let track_snapshot = pot.kind.is_pool() && !pot.reached_soft_cap;
        record.record_stake(amount, track_snapshot, now)?;
        let crossed_soft_cap = pot.record_stake(amount, config.soft_cap, config.lock_extend_time, now)?;

        let custody = stake_custody(&vault)?;
        self.ledger
            .transfer(&config.stake_currency, &caller, &custody, amount)?;

        if let Some((address, deposit)) = new_deposit {
            self.deposits.insert(address, deposit);
        }
        self.staker_records.insert(record_address, record);
        if crossed_soft_cap {
            info!(%vault, total_staked = pot.total_staked, end_time = pot.end_time, "soft cap reached");
        }
        debug!(%vault, staker = %caller, amount, "stake");
        self.vaults.insert(vault, pot);

        Ok(())
    }
}
