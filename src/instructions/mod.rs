mod claim_reward;
mod create_config;
mod create_vault;
mod stake;
mod unstake;
