//! Mode compatibility rules
//!
//! A fixed, ordered list of cross-field rules that cannot be expressed as
//! per-field type checks. Earlier rules gate later ones: a bad bridge mode
//! already failed in [`Discriminators::from_bag`] before anything here
//! runs, so every rule may assume valid modes.

use alloy::primitives::Address;
use types::fields;
use types::utils;
use types::{BridgeMode, ConfigError, RewardMode, RuleViolation};

use crate::discriminators::Discriminators;
use crate::loader::ConfigBag;
use crate::validation::ValidatedConfig;

/// Pre-pass rules, evaluated on raw discriminators before the schema is
/// applied.
pub fn check_pre(disc: &Discriminators, bag: &ConfigBag) -> Result<(), ConfigError> {
    check_reward_parity(disc, bag)?;
    check_mode_combinations(disc)?;
    Ok(())
}

/// With a reward mode enabled, VALIDATORS and VALIDATORS_REWARD_ACCOUNTS
/// must split into the same number of entries.
///
/// Runs on the raw strings so a length mismatch is reported before any
/// address in either list is parsed.
fn check_reward_parity(disc: &Discriminators, bag: &ConfigBag) -> Result<(), ConfigError> {
    if !disc.home_reward.is_enabled() && !disc.foreign_reward.is_enabled() {
        return Ok(());
    }

    let validators = utils::list_len(bag.get(fields::VALIDATORS));
    let reward_accounts = utils::list_len(bag.get(fields::VALIDATORS_REWARD_ACCOUNTS));
    if validators != reward_accounts {
        return Err(RuleViolation::RewardAccountsParity {
            validators,
            reward_accounts,
        }
        .into());
    }
    Ok(())
}

/// Forbidden bridge-mode / reward-mode combinations
fn check_mode_combinations(disc: &Discriminators) -> Result<(), ConfigError> {
    match disc.bridge_mode {
        BridgeMode::NativeToErc => {
            if disc.foreign_reward.is_enabled() {
                return Err(RuleViolation::ForeignFeesUnsupported {
                    mode: disc.bridge_mode,
                }
                .into());
            }
            if disc.home_reward == RewardMode::BothDirections
                && disc.foreign_reward == RewardMode::OneDirection
            {
                return Err(RuleViolation::AmbiguousFeeRouting {
                    mode: disc.bridge_mode,
                    home: disc.home_reward,
                    foreign: disc.foreign_reward,
                }
                .into());
            }
        }
        BridgeMode::ErcToErc => {
            if disc.foreign_reward.is_enabled() {
                return Err(RuleViolation::ForeignFeesUnsupported {
                    mode: disc.bridge_mode,
                }
                .into());
            }
        }
        BridgeMode::ErcToNative => {
            if disc.home_reward == RewardMode::OneDirection {
                return Err(RuleViolation::HomeOneDirectionUnsupported {
                    mode: disc.bridge_mode,
                }
                .into());
            }
            if disc.foreign_reward.is_enabled() {
                return Err(RuleViolation::ForeignFeesUnsupported {
                    mode: disc.bridge_mode,
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Post-pass rule, evaluated on normalized values.
///
/// Collecting home fees on ERC_TO_ERC requires a deployed block reward
/// contract; the zero address is a placeholder, not a contract.
pub fn check_post(disc: &Discriminators, config: &ValidatedConfig) -> Result<(), ConfigError> {
    if disc.bridge_mode == BridgeMode::ErcToErc
        && disc.home_reward.is_enabled()
        && config.address(fields::BLOCK_REWARD_ADDRESS) == Some(Address::ZERO)
    {
        return Err(RuleViolation::MissingBlockRewardContract.into());
    }
    Ok(())
}
