//! The staking engine: entity store plus collaborator handles.
//!
//! Every operation runs as one atomic step against this state: all guards
//! are validated and all new field values are computed before anything is
//! written back, so a failing operation leaves no partial effect. The
//! surrounding transport is expected to serialize conflicting operations;
//! the engine itself holds no locks and spawns no tasks.

use std::collections::BTreeMap;

use crate::address::{AccountId, Address};
use crate::error::{StakeError, StakeResult};
use crate::ledger::{AllowAll, Clock, IdentityVerifier, TokenLedger};
use crate::state::{StakeConfig, StakeDeposit, StakerRecord, Vault};

pub struct StakingEngine<C, L, I = AllowAll> {
    pub(crate) clock: C,
    pub(crate) ledger: L,
    pub(crate) identity: I,
    pub(crate) configs: BTreeMap<Address, StakeConfig>,
    pub(crate) vaults: BTreeMap<Address, Vault>,
    pub(crate) staker_records: BTreeMap<Address, StakerRecord>,
    pub(crate) deposits: BTreeMap<Address, StakeDeposit>,
}

impl<C, L> StakingEngine<C, L, AllowAll>
where
    C: Clock,
    L: TokenLedger,
{
    /// Engine for deployments where caller authenticity is enforced by the
    /// transport.
    pub fn new(clock: C, ledger: L) -> Self {
        Self::with_identity(clock, ledger, AllowAll)
    }
}

impl<C, L, I> StakingEngine<C, L, I>
where
    C: Clock,
    L: TokenLedger,
    I: IdentityVerifier,
{
    pub fn with_identity(clock: C, ledger: L, identity: I) -> Self {
        StakingEngine {
            clock,
            ledger,
            identity,
            configs: BTreeMap::new(),
            vaults: BTreeMap::new(),
            staker_records: BTreeMap::new(),
            deposits: BTreeMap::new(),
        }
    }

    // Read-only fetch by derived address, for clients and tooling.

    pub fn config(&self, address: &Address) -> Option<&StakeConfig> {
        self.configs.get(address)
    }

    pub fn vault(&self, address: &Address) -> Option<&Vault> {
        self.vaults.get(address)
    }

    pub fn staker_record(&self, address: &Address) -> Option<&StakerRecord> {
        self.staker_records.get(address)
    }

    pub fn deposit(&self, address: &Address) -> Option<&StakeDeposit> {
        self.deposits.get(address)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutable token substrate, e.g. to fund a vault's reward custody.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub(crate) fn verify_caller(&self, caller: &AccountId) -> StakeResult<()> {
        self.identity.verify(caller)
    }

    pub(crate) fn load_vault(&self, address: &Address) -> StakeResult<Vault> {
        self.vaults.get(address).cloned().ok_or(StakeError::NotFound)
    }

    pub(crate) fn load_config(&self, address: &Address) -> StakeResult<StakeConfig> {
        self.configs
            .get(address)
            .cloned()
            .ok_or(StakeError::NotFound)
    }
}
