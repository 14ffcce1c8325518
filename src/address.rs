//! Deterministic, directory-free addressing.
//!
//! Every entity lives at an address derived from a kind tag plus the
//! identifiers of its parents. Clients recompute the address instead of
//! consulting a directory; the same tuple always derives the same address
//! and distinct tuples practically never collide.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::constants::*;
use crate::error::{StakeError, StakeResult};

/// Derived storage location of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; 32]);

/// Identity of a participant or token-holding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

/// Identity of a fungible asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurrencyId(pub [u8; 32]);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl AccountId {
    /// Account id from a human-readable label. Convenient for tests and
    /// tooling; production embedders supply real key material.
    pub fn named(label: &str) -> Self {
        AccountId(label_digest(b"account", label))
    }
}

impl CurrencyId {
    /// Currency id from a human-readable label.
    pub fn named(label: &str) -> Self {
        CurrencyId(label_digest(b"currency", label))
    }
}

fn label_digest(tag: &[u8], label: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    hasher.update(label.as_bytes());
    hasher.finalize().into()
}

/// Derive the address for `(kind, seeds...)`.
///
/// Each part is framed with its length before hashing so that distinct
/// tuples can never produce the same byte stream. Inputs beyond the scheme
/// limits are a configuration error, never silently truncated.
pub fn derive_address(kind: &[u8], seeds: &[&[u8]]) -> StakeResult<Address> {
    if seeds.len() + 1 > MAX_SEEDS {
        return Err(StakeError::SeedTooLong);
    }
    if kind.len() > MAX_SEED_LEN {
        return Err(StakeError::SeedTooLong);
    }

    let mut hasher = Sha256::new();
    hasher.update([kind.len() as u8]);
    hasher.update(kind);
    for seed in seeds {
        if seed.len() > MAX_SEED_LEN {
            return Err(StakeError::SeedTooLong);
        }
        hasher.update([seed.len() as u8]);
        hasher.update(seed);
    }

    Ok(Address(hasher.finalize().into()))
}

/// Address of the config for one stake currency.
pub fn config_address(stake_currency: &CurrencyId) -> StakeResult<Address> {
    derive_address(STAKE_CONFIG_SEED, &[&stake_currency.0])
}

/// Address of the vault under `config` with the given secondary-key seed.
pub fn vault_address(config: &Address, secondary_seed: &[u8]) -> StakeResult<Address> {
    derive_address(VAULT_SEED, &[&config.0, secondary_seed])
}

/// Address of a staker's record within a vault.
pub fn staker_record_address(vault: &Address, staker: &AccountId) -> StakeResult<Address> {
    derive_address(STAKER_RECORD_SEED, &[&vault.0, &staker.0])
}

/// Address of deposit `id` in a staker record's chain.
pub fn deposit_address(record: &Address, id: u64) -> StakeResult<Address> {
    derive_address(STAKE_DEPOSIT_SEED, &[&record.0, &id.to_le_bytes()])
}

/// Token account holding a vault's staked principal.
pub fn stake_custody(vault: &Address) -> StakeResult<AccountId> {
    derive_address(STAKE_CUSTODY_SEED, &[&vault.0]).map(|a| AccountId(a.0))
}

/// Token account holding a pool vault's reward currency.
pub fn reward_custody(vault: &Address) -> StakeResult<AccountId> {
    derive_address(REWARD_CUSTODY_SEED, &[&vault.0]).map(|a| AccountId(a.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let currency = CurrencyId::named("meme");
        let a = config_address(&currency).unwrap();
        let b = config_address(&currency).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_tuples_distinct_addresses() {
        let a = config_address(&CurrencyId::named("meme")).unwrap();
        let b = config_address(&CurrencyId::named("other")).unwrap();
        assert_ne!(a, b);

        let vault = vault_address(&a, b"pool").unwrap();
        let alice = staker_record_address(&vault, &AccountId::named("alice")).unwrap();
        let bob = staker_record_address(&vault, &AccountId::named("bob")).unwrap();
        assert_ne!(alice, bob);

        assert_ne!(
            deposit_address(&alice, 1).unwrap(),
            deposit_address(&alice, 2).unwrap()
        );
    }

    #[test]
    fn test_kind_tag_separates_namespaces() {
        let vault = vault_address(&Address([7u8; 32]), b"x").unwrap();
        assert_ne!(stake_custody(&vault).unwrap().0, reward_custody(&vault).unwrap().0);
        // a custody account never collides with the vault itself
        assert_ne!(stake_custody(&vault).unwrap().0, vault.0);
    }

    #[test]
    fn test_length_framing_blocks_boundary_shifts() {
        let a = derive_address(b"kind", &[b"ab", b"c"]).unwrap();
        let b = derive_address(b"kind", &[b"a", b"bc"]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_oversized_seed_is_configuration_error() {
        let long = [0u8; MAX_SEED_LEN + 1];
        assert_eq!(
            derive_address(b"kind", &[&long]),
            Err(StakeError::SeedTooLong)
        );

        let part = [0u8; 1];
        let many: Vec<&[u8]> = vec![&part; MAX_SEEDS];
        assert_eq!(derive_address(b"kind", &many), Err(StakeError::SeedTooLong));
    }
}
