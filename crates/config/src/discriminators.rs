//! Discriminator fields: the handful of bag entries that steer schema
//! composition and rule evaluation

use serde::Serialize;
use types::fields;
use types::{BridgeMode, ConfigError, EvmVersion, FeeManagerType, RewardMode};

use crate::loader::ConfigBag;

/// The subset of the bag that decides which other fields a deployment
/// needs.
///
/// Serializes under the catalog's field names. The boolean flags and the
/// fee manager type are skipped: when a mode requires them they also appear
/// as schema fields, and the normalized configuration carries them there.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Discriminators {
    #[serde(rename = "BRIDGE_MODE")]
    pub bridge_mode: BridgeMode,
    #[serde(rename = "HOME_REWARDABLE")]
    pub home_reward: RewardMode,
    #[serde(rename = "FOREIGN_REWARDABLE")]
    pub foreign_reward: RewardMode,
    #[serde(rename = "HOME_EVM_VERSION", skip_serializing_if = "Option::is_none")]
    pub home_evm_version: Option<EvmVersion>,
    #[serde(rename = "FOREIGN_EVM_VERSION", skip_serializing_if = "Option::is_none")]
    pub foreign_evm_version: Option<EvmVersion>,
    #[serde(skip)]
    pub deploy_rewardable_token: bool,
    #[serde(skip)]
    pub erc20_extended_by_erc677: bool,
    #[serde(skip)]
    pub home_fee_manager_type: Option<FeeManagerType>,
}

impl Discriminators {
    /// Read and domain-check every discriminator field.
    ///
    /// This is the first compatibility rule: every later rule assumes the
    /// modes parsed, so a value outside its enumerated domain fails here
    /// before any branch logic runs.
    pub fn from_bag(bag: &ConfigBag) -> Result<Self, ConfigError> {
        let home_evm_version = optional_enum(
            bag,
            fields::HOME_EVM_VERSION,
            EvmVersion::from_str,
            EvmVersion::ALLOWED,
        )?;
        let foreign_evm_version = optional_enum(
            bag,
            fields::FOREIGN_EVM_VERSION,
            EvmVersion::from_str,
            EvmVersion::ALLOWED,
        )?;

        let bridge_mode = required_enum(
            bag,
            fields::BRIDGE_MODE,
            BridgeMode::from_str,
            BridgeMode::ALLOWED,
        )?;
        let home_reward = required_enum(
            bag,
            fields::HOME_REWARDABLE,
            RewardMode::from_str,
            RewardMode::ALLOWED,
        )?;
        let foreign_reward = required_enum(
            bag,
            fields::FOREIGN_REWARDABLE,
            RewardMode::from_str,
            RewardMode::ALLOWED,
        )?;

        // Branch steering compares the raw flag to "true", matching the
        // wire format the deployment scripts write.
        let deploy_rewardable_token = bag.get(fields::DEPLOY_REWARDABLE_TOKEN) == Some("true");
        let erc20_extended_by_erc677 = bag.get(fields::ERC20_EXTENDED_BY_ERC677) == Some("true");

        // Only meaningful when home fees are collected in both directions
        // on an ERC_TO_NATIVE bridge; ignored otherwise, even if present.
        let home_fee_manager_type = if bridge_mode == BridgeMode::ErcToNative
            && home_reward == RewardMode::BothDirections
        {
            Some(required_enum(
                bag,
                fields::HOME_FEE_MANAGER_TYPE,
                FeeManagerType::from_str,
                FeeManagerType::ALLOWED,
            )?)
        } else {
            None
        };

        Ok(Self {
            bridge_mode,
            home_reward,
            foreign_reward,
            home_evm_version,
            foreign_evm_version,
            deploy_rewardable_token,
            erc20_extended_by_erc677,
            home_fee_manager_type,
        })
    }
}

fn required_enum<T>(
    bag: &ConfigBag,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    allowed: &'static [&'static str],
) -> Result<T, ConfigError> {
    let raw = bag.get(field).unwrap_or_default();
    parse(raw).ok_or_else(|| ConfigError::MalformedDiscriminator {
        field,
        value: raw.to_string(),
        allowed,
    })
}

fn optional_enum<T>(
    bag: &ConfigBag,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
    allowed: &'static [&'static str],
) -> Result<Option<T>, ConfigError> {
    match bag.get(field) {
        None => Ok(None),
        Some(raw) => parse(raw)
            .map(Some)
            .ok_or_else(|| ConfigError::MalformedDiscriminator {
                field,
                value: raw.to_string(),
                allowed,
            }),
    }
}
