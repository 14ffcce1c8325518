mod stake_config;
mod staker_record;
mod vault;

pub use stake_config::StakeConfig;
pub use staker_record::{StakeDeposit, StakerRecord};
pub use vault::{Vault, VaultKind, VaultState};
