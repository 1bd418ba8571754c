//! Discriminator enums that steer schema composition and rule evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Bridge deployment mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeMode {
    /// Native coin on the home chain, ERC677 token on the foreign chain
    NativeToErc,
    /// ERC20 token on the foreign chain, ERC677 token on the home chain
    ErcToErc,
    /// ERC20 token on the foreign chain, native coin on the home chain
    ErcToNative,
}

/// Fee collection mode for one side of the bridge
///
/// The wire value for the disabled variant is literally `"false"`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardMode {
    /// No fee collection on this side
    #[serde(rename = "false")]
    None,
    /// Fees are collected for transfers in one direction only
    OneDirection,
    /// Fees are collected for transfers in both directions
    BothDirections,
}

/// Fee manager contract flavor for the home side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeManagerType {
    /// Fees are distributed among the bridge validators
    BridgeValidatorsReward,
    /// Fees are distributed through the POSDAO block reward contract
    PosdaoReward,
}

/// EVM version the contracts are compiled for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EvmVersion {
    #[serde(rename = "byzantium")]
    Byzantium,
    #[serde(rename = "spuriousDragon")]
    SpuriousDragon,
}

impl BridgeMode {
    /// Accepted wire values, in declaration order
    pub const ALLOWED: &'static [&'static str] =
        &["NATIVE_TO_ERC", "ERC_TO_ERC", "ERC_TO_NATIVE"];

    /// Parse a bridge mode from its wire value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "NATIVE_TO_ERC" => Some(BridgeMode::NativeToErc),
            "ERC_TO_ERC" => Some(BridgeMode::ErcToErc),
            "ERC_TO_NATIVE" => Some(BridgeMode::ErcToNative),
            _ => None,
        }
    }

    /// Convert the bridge mode to its wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeMode::NativeToErc => "NATIVE_TO_ERC",
            BridgeMode::ErcToErc => "ERC_TO_ERC",
            BridgeMode::ErcToNative => "ERC_TO_NATIVE",
        }
    }
}

impl RewardMode {
    /// Accepted wire values, in declaration order
    pub const ALLOWED: &'static [&'static str] = &["false", "ONE_DIRECTION", "BOTH_DIRECTIONS"];

    /// Parse a reward mode from its wire value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "false" => Some(RewardMode::None),
            "ONE_DIRECTION" => Some(RewardMode::OneDirection),
            "BOTH_DIRECTIONS" => Some(RewardMode::BothDirections),
            _ => None,
        }
    }

    /// Convert the reward mode to its wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            RewardMode::None => "false",
            RewardMode::OneDirection => "ONE_DIRECTION",
            RewardMode::BothDirections => "BOTH_DIRECTIONS",
        }
    }

    /// Whether fee collection is enabled on this side
    pub fn is_enabled(&self) -> bool {
        !matches!(self, RewardMode::None)
    }
}

impl FeeManagerType {
    /// Accepted wire values, in declaration order
    pub const ALLOWED: &'static [&'static str] = &["BRIDGE_VALIDATORS_REWARD", "POSDAO_REWARD"];

    /// Parse a fee manager type from its wire value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "BRIDGE_VALIDATORS_REWARD" => Some(FeeManagerType::BridgeValidatorsReward),
            "POSDAO_REWARD" => Some(FeeManagerType::PosdaoReward),
            _ => None,
        }
    }

    /// Convert the fee manager type to its wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            FeeManagerType::BridgeValidatorsReward => "BRIDGE_VALIDATORS_REWARD",
            FeeManagerType::PosdaoReward => "POSDAO_REWARD",
        }
    }
}

impl EvmVersion {
    /// Accepted wire values, in declaration order
    pub const ALLOWED: &'static [&'static str] = &["byzantium", "spuriousDragon"];

    /// Parse an EVM version from its wire value
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "byzantium" => Some(EvmVersion::Byzantium),
            "spuriousDragon" => Some(EvmVersion::SpuriousDragon),
            _ => None,
        }
    }

    /// Convert the EVM version to its wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            EvmVersion::Byzantium => "byzantium",
            EvmVersion::SpuriousDragon => "spuriousDragon",
        }
    }
}

impl fmt::Display for BridgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RewardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FeeManagerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EvmVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
