//! Field catalog: the environment variable names expected by the
//! deployment scripts.
//!
//! These names are an external contract; downstream tooling reads the
//! normalized configuration under exactly these keys.

// Discriminators
pub const BRIDGE_MODE: &str = "BRIDGE_MODE";
pub const HOME_REWARDABLE: &str = "HOME_REWARDABLE";
pub const FOREIGN_REWARDABLE: &str = "FOREIGN_REWARDABLE";
pub const HOME_EVM_VERSION: &str = "HOME_EVM_VERSION";
pub const FOREIGN_EVM_VERSION: &str = "FOREIGN_EVM_VERSION";
pub const HOME_FEE_MANAGER_TYPE: &str = "HOME_FEE_MANAGER_TYPE";
pub const DEPLOY_REWARDABLE_TOKEN: &str = "DEPLOY_REWARDABLE_TOKEN";
pub const ERC20_EXTENDED_BY_ERC677: &str = "ERC20_EXTENDED_BY_ERC677";

// Deployment account and gas settings
pub const DEPLOYMENT_ACCOUNT_PRIVATE_KEY: &str = "DEPLOYMENT_ACCOUNT_PRIVATE_KEY";
pub const DEPLOYMENT_GAS_LIMIT_EXTRA: &str = "DEPLOYMENT_GAS_LIMIT_EXTRA";
pub const HOME_DEPLOYMENT_GAS_PRICE: &str = "HOME_DEPLOYMENT_GAS_PRICE";
pub const FOREIGN_DEPLOYMENT_GAS_PRICE: &str = "FOREIGN_DEPLOYMENT_GAS_PRICE";
pub const GET_RECEIPT_INTERVAL_IN_MILLISECONDS: &str = "GET_RECEIPT_INTERVAL_IN_MILLISECONDS";

// Home chain
pub const HOME_RPC_URL: &str = "HOME_RPC_URL";
pub const HOME_BRIDGE_OWNER: &str = "HOME_BRIDGE_OWNER";
pub const HOME_VALIDATORS_OWNER: &str = "HOME_VALIDATORS_OWNER";
pub const HOME_UPGRADEABLE_ADMIN: &str = "HOME_UPGRADEABLE_ADMIN";
pub const HOME_DAILY_LIMIT: &str = "HOME_DAILY_LIMIT";
pub const HOME_MAX_AMOUNT_PER_TX: &str = "HOME_MAX_AMOUNT_PER_TX";
pub const HOME_MIN_AMOUNT_PER_TX: &str = "HOME_MIN_AMOUNT_PER_TX";
pub const HOME_REQUIRED_BLOCK_CONFIRMATIONS: &str = "HOME_REQUIRED_BLOCK_CONFIRMATIONS";
pub const HOME_GAS_PRICE: &str = "HOME_GAS_PRICE";

// Foreign chain
pub const FOREIGN_RPC_URL: &str = "FOREIGN_RPC_URL";
pub const FOREIGN_BRIDGE_OWNER: &str = "FOREIGN_BRIDGE_OWNER";
pub const FOREIGN_VALIDATORS_OWNER: &str = "FOREIGN_VALIDATORS_OWNER";
pub const FOREIGN_UPGRADEABLE_ADMIN: &str = "FOREIGN_UPGRADEABLE_ADMIN";
pub const FOREIGN_REQUIRED_BLOCK_CONFIRMATIONS: &str = "FOREIGN_REQUIRED_BLOCK_CONFIRMATIONS";
pub const FOREIGN_GAS_PRICE: &str = "FOREIGN_GAS_PRICE";
pub const FOREIGN_MAX_AMOUNT_PER_TX: &str = "FOREIGN_MAX_AMOUNT_PER_TX";
pub const FOREIGN_DAILY_LIMIT: &str = "FOREIGN_DAILY_LIMIT";
pub const FOREIGN_MIN_AMOUNT_PER_TX: &str = "FOREIGN_MIN_AMOUNT_PER_TX";

// Validator set
pub const REQUIRED_NUMBER_OF_VALIDATORS: &str = "REQUIRED_NUMBER_OF_VALIDATORS";
pub const VALIDATORS: &str = "VALIDATORS";
pub const VALIDATORS_REWARD_ACCOUNTS: &str = "VALIDATORS_REWARD_ACCOUNTS";
pub const HOME_TRANSACTIONS_FEE: &str = "HOME_TRANSACTIONS_FEE";
pub const FOREIGN_TRANSACTIONS_FEE: &str = "FOREIGN_TRANSACTIONS_FEE";

// Token and reward contracts
pub const BRIDGEABLE_TOKEN_NAME: &str = "BRIDGEABLE_TOKEN_NAME";
pub const BRIDGEABLE_TOKEN_SYMBOL: &str = "BRIDGEABLE_TOKEN_SYMBOL";
pub const BRIDGEABLE_TOKEN_DECIMALS: &str = "BRIDGEABLE_TOKEN_DECIMALS";
pub const ERC20_TOKEN_ADDRESS: &str = "ERC20_TOKEN_ADDRESS";
pub const BLOCK_REWARD_ADDRESS: &str = "BLOCK_REWARD_ADDRESS";
pub const DPOS_STAKING_ADDRESS: &str = "DPOS_STAKING_ADDRESS";
