use tracing::info;

use crate::address::{config_address, AccountId, Address, CurrencyId};
use crate::engine::StakingEngine;
use crate::error::{StakeError, StakeResult};
use crate::ledger::{Clock, IdentityVerifier, TokenLedger};
use crate::state::StakeConfig;

impl<C, L, I> StakingEngine<C, L, I>
where
    C: Clock,
    L: TokenLedger,
    I: IdentityVerifier,
{
    /// Create the config for one stake currency. The caller becomes its
    /// authority.
    pub fn create_config(
        &mut self,
        caller: AccountId,
        stake_currency: CurrencyId,
        lock_period: u32,
        lock_extend_time: u32,
        soft_cap: u64,
    ) -> StakeResult<Address> {
        self.verify_caller(&caller)?;

        let address = config_address(&stake_currency)?;
        if self.configs.contains_key(&address) {
            return Err(StakeError::AlreadyExists);
        }

        let now = self.clock.now();
        let config = StakeConfig::new(
            caller,
            stake_currency,
            lock_period,
            lock_extend_time,
            soft_cap,
            now,
        );
        self.configs.insert(address, config);

        info!(%address, %stake_currency, lock_period, lock_extend_time, soft_cap, "stake config created");
        Ok(address)
    }
}
