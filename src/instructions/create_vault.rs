use tracing::info;

use crate::address::{vault_address, AccountId, Address};
use crate::engine::StakingEngine;
use crate::error::{StakeError, StakeResult};
use crate::ledger::{Clock, IdentityVerifier, TokenLedger};
use crate::state::{Vault, VaultKind};

impl<C, L, I> StakingEngine<C, L, I>
where
    C: Clock,
    L: TokenLedger,
    I: IdentityVerifier,
{
    /// Create a vault under an existing config. Only the config authority
    /// may do this; one vault per (config, secondary key).
    pub fn create_vault(
        &mut self,
        caller: AccountId,
        config: Address,
        kind: VaultKind,
    ) -> StakeResult<Address> {
        self.verify_caller(&caller)?;

        let stake_config = self.load_config(&config)?;
        if stake_config.authority != caller {
            return Err(StakeError::IncorrectAuthority);
        }

        let address = vault_address(&config, &kind.secondary_seed())?;
        if self.vaults.contains_key(&address) {
            return Err(StakeError::AlreadyExists);
        }

        let now = self.clock.now();
        self.vaults.insert(address, Vault::new(config, kind, now));

        info!(%address, config = %config, pool = kind.is_pool(), "vault created");
        Ok(address)
    }
}
