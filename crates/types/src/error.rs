//! Error types for the bridge deployment configuration gate

use thiserror::Error;

use crate::modes::{BridgeMode, RewardMode};

/// A fatal configuration failure.
///
/// Every variant is unrecoverable: the deployment tooling must not act on a
/// bag that produced one of these. There is no retry or partial-success
/// path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A mode or flag field holds a value outside its enumerated domain
    #[error("Invalid {field}: {value}. Supported values are {}", .allowed.join(", "))]
    MalformedDiscriminator {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    /// A field required by the composed schema is absent and has no default
    #[error("Missing required configuration field: {field}")]
    MissingField { field: &'static str },

    /// A field is present but failed its validator
    #[error("Invalid value for {field}: {value}: {reason}")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A cross-field compatibility rule failed
    #[error(transparent)]
    RuleViolation(#[from] RuleViolation),
}

/// A named mode compatibility rule that cannot be expressed as a per-field
/// type check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// VALIDATORS and VALIDATORS_REWARD_ACCOUNTS must have the same length
    /// whenever a reward mode is enabled
    #[error(
        "List of rewards accounts ({reward_accounts} accounts) should be the same length \
         as list of validators ({validators} accounts)"
    )]
    RewardAccountsParity {
        validators: usize,
        reward_accounts: usize,
    },

    /// Fee collection on the foreign chain is unsupported in this mode
    #[error("Collecting fees on Foreign Network on {mode} bridge mode is not supported")]
    ForeignFeesUnsupported { mode: BridgeMode },

    /// The home/foreign reward mode combination has no unambiguous fee routing
    #[error(
        "Combination of HOME_REWARDABLE: {home} and FOREIGN_REWARDABLE: {foreign} \
         should be avoided on {mode} bridge mode"
    )]
    AmbiguousFeeRouting {
        mode: BridgeMode,
        home: RewardMode,
        foreign: RewardMode,
    },

    /// Only both-directions fee collection is meaningful on the home side
    /// of this mode
    #[error(
        "Only BOTH_DIRECTIONS is supported for collecting fees on Home Network \
         on {mode} bridge mode"
    )]
    HomeOneDirectionUnsupported { mode: BridgeMode },

    /// Home fee collection on ERC_TO_ERC requires a deployed block reward
    /// contract
    #[error(
        "Collecting fees on Home Network on ERC_TO_ERC mode without Block Reward \
         contract is not supported"
    )]
    MissingBlockRewardContract,
}
