//! Derivation tags and limits for the address scheme.

use static_assertions::const_assert;

/// Tag for a stake configuration, keyed by stake currency.
pub const STAKE_CONFIG_SEED: &[u8] = b"staking_config";
/// Tag for a vault, keyed by (config, secondary key).
pub const VAULT_SEED: &[u8] = b"staking_vault";
/// Tag for a per-staker record, keyed by (vault, staker).
pub const STAKER_RECORD_SEED: &[u8] = b"staker_record";
/// Tag for a ledger-mode deposit, keyed by (record, id).
pub const STAKE_DEPOSIT_SEED: &[u8] = b"stake_detail";
/// Tag for the token account holding a vault's staked principal.
pub const STAKE_CUSTODY_SEED: &[u8] = b"stake_custody";
/// Tag for the token account holding a pool vault's reward currency.
pub const REWARD_CUSTODY_SEED: &[u8] = b"reward_custody";

/// Maximum number of seed parts accepted by the deriver.
pub const MAX_SEEDS: usize = 8;
/// Maximum length of a single seed part in bytes.
pub const MAX_SEED_LEN: usize = 32;

const_assert!(STAKE_CONFIG_SEED.len() <= MAX_SEED_LEN);
const_assert!(VAULT_SEED.len() <= MAX_SEED_LEN);
const_assert!(STAKER_RECORD_SEED.len() <= MAX_SEED_LEN);
const_assert!(STAKE_DEPOSIT_SEED.len() <= MAX_SEED_LEN);
const_assert!(STAKE_CUSTODY_SEED.len() <= MAX_SEED_LEN);
const_assert!(REWARD_CUSTODY_SEED.len() <= MAX_SEED_LEN);
