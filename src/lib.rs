//! Token-staking ledger with time-locked deposits and soft-cap gated
//! reward distribution.
//!
//! A [`StakingEngine`] manages a hierarchy of entities — [`StakeConfig`] →
//! [`Vault`] → [`StakerRecord`] → [`StakeDeposit`] — each stored at an
//! address derived deterministically from its parents, so clients compute
//! locations instead of querying a directory. Pool vaults distribute a
//! reward currency proportionally once a funding threshold (soft cap) and a
//! subsequent grace period are both satisfied; ledger vaults track
//! independently timed deposits through a gapless id chain.
//!
//! Time, token custody and caller authenticity are external collaborators
//! behind the traits in [`ledger`]; the in-memory implementations there
//! make the whole state machine runnable in tests.

pub mod address;
pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod math;
pub mod state;

pub use address::{AccountId, Address, CurrencyId};
pub use engine::StakingEngine;
pub use error::{StakeError, StakeResult};
pub use state::{StakeConfig, StakeDeposit, StakerRecord, Vault, VaultKind, VaultState};
