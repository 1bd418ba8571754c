//! Validation engine: applies a composed schema to a raw bag

use std::collections::BTreeMap;

use alloy::primitives::{Address, U256};
use serde::Serialize;
use types::{ConfigError, FieldValue};

use crate::discriminators::Discriminators;
use crate::loader::ConfigBag;
use crate::rules;
use crate::schema::{build_schema, Schema};

/// Fully validated, normalized configuration.
///
/// Terminal artifact of the gate: built once, never mutated, consumed by
/// the deployment scripts. Serializes as a flat map under the catalog's
/// field names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidatedConfig {
    #[serde(flatten)]
    discriminators: Discriminators,
    #[serde(flatten)]
    fields: BTreeMap<&'static str, FieldValue>,
}

impl ValidatedConfig {
    /// The discriminators this configuration was validated under
    pub fn discriminators(&self) -> &Discriminators {
        &self.discriminators
    }

    /// Normalized value for a schema field
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn str_value(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    pub fn num(&self, name: &str) -> Option<u64> {
        self.get(name)?.as_num()
    }

    pub fn bool_value(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_bool()
    }

    pub fn big_num(&self, name: &str) -> Option<U256> {
        self.get(name)?.as_big_num()
    }

    pub fn address(&self, name: &str) -> Option<Address> {
        self.get(name)?.as_address()
    }

    pub fn address_list(&self, name: &str) -> Option<&[Address]> {
        self.get(name)?.as_address_list()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Normalized fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }
}

/// Apply a composed schema to a raw bag.
///
/// Validation is independent per field; a spec's default substitutes for
/// an absent raw value before the parse attempt. The first problem aborts
/// the whole pass, reported with the field name and offending raw value.
pub fn apply_schema(
    bag: &ConfigBag,
    schema: &Schema,
    discriminators: &Discriminators,
) -> Result<ValidatedConfig, ConfigError> {
    let mut fields = BTreeMap::new();
    for spec in schema.iter() {
        let raw = match bag.get(spec.name).or(spec.default) {
            Some(raw) => raw,
            None => return Err(ConfigError::MissingField { field: spec.name }),
        };
        fields.insert(spec.name, spec.kind.parse(spec.name, raw)?);
    }
    Ok(ValidatedConfig {
        discriminators: discriminators.clone(),
        fields,
    })
}

/// Configuration validator: the whole validate-and-normalize gate.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a raw bag end to end.
    ///
    /// Control flow: discriminator read, pre-pass rules, schema build,
    /// field validation, post-pass rules. Fail-fast throughout.
    pub fn validate(bag: &ConfigBag) -> Result<ValidatedConfig, ConfigError> {
        let disc = Discriminators::from_bag(bag)?;
        rules::check_pre(&disc, bag)?;
        let schema = build_schema(&disc);
        let config = apply_schema(bag, &schema, &disc)?;
        rules::check_post(&disc, &config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::fields;
    use types::utils::ZERO_ADDRESS;
    use types::{BridgeMode, RuleViolation};

    fn addr(n: u8) -> String {
        format!("0x{:040x}", n)
    }

    fn base_entries() -> Vec<(&'static str, String)> {
        vec![
            (
                fields::DEPLOYMENT_ACCOUNT_PRIVATE_KEY,
                "67d5a9a1ea4b5e9f1c7c5f3b2e1d0c9b8a7f6e5d4c3b2a19080706050403020f".to_string(),
            ),
            (fields::DEPLOYMENT_GAS_LIMIT_EXTRA, "200000".to_string()),
            (fields::HOME_DEPLOYMENT_GAS_PRICE, "10000000000".to_string()),
            (fields::FOREIGN_DEPLOYMENT_GAS_PRICE, "10000000000".to_string()),
            (fields::GET_RECEIPT_INTERVAL_IN_MILLISECONDS, "3000".to_string()),
            (fields::HOME_RPC_URL, "http://localhost:8545".to_string()),
            (fields::HOME_BRIDGE_OWNER, addr(0x11)),
            (fields::HOME_VALIDATORS_OWNER, addr(0x12)),
            (fields::HOME_UPGRADEABLE_ADMIN, addr(0x13)),
            (fields::HOME_DAILY_LIMIT, "30000000000000000000000000".to_string()),
            (fields::HOME_MAX_AMOUNT_PER_TX, "1500000000000000000000000".to_string()),
            (fields::HOME_MIN_AMOUNT_PER_TX, "500000000000000000".to_string()),
            (fields::HOME_REQUIRED_BLOCK_CONFIRMATIONS, "1".to_string()),
            (fields::HOME_GAS_PRICE, "1000000000".to_string()),
            (fields::FOREIGN_RPC_URL, "http://localhost:8546".to_string()),
            (fields::FOREIGN_BRIDGE_OWNER, addr(0x21)),
            (fields::FOREIGN_VALIDATORS_OWNER, addr(0x22)),
            (fields::FOREIGN_UPGRADEABLE_ADMIN, addr(0x23)),
            (fields::FOREIGN_REQUIRED_BLOCK_CONFIRMATIONS, "8".to_string()),
            (fields::FOREIGN_GAS_PRICE, "10000000000".to_string()),
            (
                fields::FOREIGN_MAX_AMOUNT_PER_TX,
                "1500000000000000000000000".to_string(),
            ),
            (fields::REQUIRED_NUMBER_OF_VALIDATORS, "1".to_string()),
            (fields::VALIDATORS, addr(0x31)),
        ]
    }

    fn native_to_erc_entries() -> Vec<(&'static str, String)> {
        let mut entries = base_entries();
        entries.extend([
            (fields::BRIDGE_MODE, "NATIVE_TO_ERC".to_string()),
            (fields::HOME_REWARDABLE, "false".to_string()),
            (fields::FOREIGN_REWARDABLE, "false".to_string()),
            (fields::BRIDGEABLE_TOKEN_NAME, "Test Token".to_string()),
            (fields::BRIDGEABLE_TOKEN_SYMBOL, "TST".to_string()),
            (fields::BRIDGEABLE_TOKEN_DECIMALS, "18".to_string()),
            (fields::FOREIGN_DAILY_LIMIT, "15000000000000000000000000".to_string()),
            (fields::FOREIGN_MIN_AMOUNT_PER_TX, "500000000000000000".to_string()),
            (fields::DEPLOY_REWARDABLE_TOKEN, "false".to_string()),
            (fields::BLOCK_REWARD_ADDRESS, addr(0x41)),
        ]);
        entries
    }

    fn erc_to_erc_entries() -> Vec<(&'static str, String)> {
        let mut entries = base_entries();
        entries.extend([
            (fields::BRIDGE_MODE, "ERC_TO_ERC".to_string()),
            (fields::HOME_REWARDABLE, "false".to_string()),
            (fields::FOREIGN_REWARDABLE, "false".to_string()),
            (fields::ERC20_TOKEN_ADDRESS, addr(0x51)),
            (fields::BRIDGEABLE_TOKEN_NAME, "Test Token".to_string()),
            (fields::BRIDGEABLE_TOKEN_SYMBOL, "TST".to_string()),
            (fields::BRIDGEABLE_TOKEN_DECIMALS, "18".to_string()),
            (fields::DEPLOY_REWARDABLE_TOKEN, "false".to_string()),
            (fields::DPOS_STAKING_ADDRESS, addr(0x52)),
            (fields::BLOCK_REWARD_ADDRESS, addr(0x53)),
            (fields::ERC20_EXTENDED_BY_ERC677, "false".to_string()),
        ]);
        entries
    }

    fn erc_to_native_entries() -> Vec<(&'static str, String)> {
        let mut entries = base_entries();
        entries.extend([
            (fields::BRIDGE_MODE, "ERC_TO_NATIVE".to_string()),
            (fields::HOME_REWARDABLE, "false".to_string()),
            (fields::FOREIGN_REWARDABLE, "false".to_string()),
            (fields::ERC20_TOKEN_ADDRESS, addr(0x51)),
        ]);
        entries
    }

    fn bag(entries: Vec<(&'static str, String)>) -> ConfigBag {
        ConfigBag::from_iter(entries)
    }

    #[test]
    fn test_native_to_erc_full_pass() {
        let config = ConfigValidator::validate(&bag(native_to_erc_entries())).unwrap();
        assert_eq!(config.discriminators().bridge_mode, BridgeMode::NativeToErc);
        assert_eq!(config.num(fields::BRIDGEABLE_TOKEN_DECIMALS), Some(18));
        assert_eq!(config.bool_value(fields::DEPLOY_REWARDABLE_TOKEN), Some(false));
        assert_eq!(
            config.big_num(fields::HOME_DAILY_LIMIT),
            Some("30000000000000000000000000".parse().unwrap())
        );
        assert_eq!(config.address_list(fields::VALIDATORS).unwrap().len(), 1);
    }

    #[test]
    fn test_erc_to_erc_full_pass() {
        let config = ConfigValidator::validate(&bag(erc_to_erc_entries())).unwrap();
        assert_eq!(
            config.address(fields::ERC20_TOKEN_ADDRESS),
            Some(addr(0x51).parse().unwrap())
        );
        // ERC677 extension off: no foreign limits required
        assert!(config.get(fields::FOREIGN_DAILY_LIMIT).is_none());
    }

    #[test]
    fn test_missing_base_field_fails() {
        let entries: Vec<_> = native_to_erc_entries()
            .into_iter()
            .filter(|(name, _)| *name != fields::HOME_RPC_URL)
            .collect();
        let err = ConfigValidator::validate(&bag(entries)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingField {
                field: fields::HOME_RPC_URL
            }
        );
    }

    #[test]
    fn test_malformed_field_reports_raw_value() {
        let mut entries = native_to_erc_entries();
        entries.push((fields::HOME_BRIDGE_OWNER, "0xnotanaddress".to_string()));
        let err = ConfigValidator::validate(&bag(entries)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "HOME_BRIDGE_OWNER",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_discriminator_checked_before_schema() {
        // everything else is missing too, but the bad mode wins
        let bag = ConfigBag::from_iter([
            (fields::BRIDGE_MODE, "SIDECHAIN"),
            (fields::HOME_REWARDABLE, "false"),
            (fields::FOREIGN_REWARDABLE, "false"),
        ]);
        let err = ConfigValidator::validate(&bag).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MalformedDiscriminator {
                field: "BRIDGE_MODE",
                ..
            }
        ));
    }

    // Scenario A: ERC_TO_NATIVE with no block reward resolves to the zero
    // address instead of failing.
    #[test]
    fn test_absent_block_reward_defaults_to_zero_address() {
        let config = ConfigValidator::validate(&bag(erc_to_native_entries())).unwrap();
        assert_eq!(
            config.address(fields::BLOCK_REWARD_ADDRESS),
            Some(Address::ZERO)
        );
    }

    // Scenario B: home fees on ERC_TO_ERC require a real block reward
    // contract.
    #[test]
    fn test_erc_to_erc_home_fees_with_zero_block_reward_fail() {
        let mut entries = erc_to_erc_entries();
        entries.extend([
            (fields::HOME_REWARDABLE, "ONE_DIRECTION".to_string()),
            (fields::BLOCK_REWARD_ADDRESS, ZERO_ADDRESS.to_string()),
            (fields::VALIDATORS_REWARD_ACCOUNTS, addr(0x61)),
            (fields::HOME_TRANSACTIONS_FEE, "1".to_string()),
            (fields::FOREIGN_TRANSACTIONS_FEE, "1".to_string()),
        ]);
        let err = ConfigValidator::validate(&bag(entries)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RuleViolation(RuleViolation::MissingBlockRewardContract)
        );
    }

    #[test]
    fn test_erc_to_erc_home_fees_with_real_block_reward_pass() {
        let mut entries = erc_to_erc_entries();
        entries.extend([
            (fields::HOME_REWARDABLE, "ONE_DIRECTION".to_string()),
            (fields::VALIDATORS_REWARD_ACCOUNTS, addr(0x61)),
            (fields::HOME_TRANSACTIONS_FEE, "1".to_string()),
            (fields::FOREIGN_TRANSACTIONS_FEE, "1".to_string()),
        ]);
        let config = ConfigValidator::validate(&bag(entries)).unwrap();
        assert_eq!(
            config.address(fields::BLOCK_REWARD_ADDRESS),
            Some(addr(0x53).parse().unwrap())
        );
    }

    // Scenario C: list length parity is checked on the raw strings, before
    // any address parsing could reject the placeholder entries.
    #[test]
    fn test_reward_accounts_parity_mismatch() {
        let mut entries = native_to_erc_entries();
        entries.extend([
            (fields::HOME_REWARDABLE, "ONE_DIRECTION".to_string()),
            (fields::VALIDATORS, "0xA 0xB 0xC".to_string()),
            (fields::VALIDATORS_REWARD_ACCOUNTS, "0xD 0xE".to_string()),
        ]);
        let err = ConfigValidator::validate(&bag(entries)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::RuleViolation(RuleViolation::RewardAccountsParity {
                validators: 3,
                reward_accounts: 2,
            })
        );
    }

    // Scenario D: deploying a rewardable token requires the staking
    // contract address.
    #[test]
    fn test_rewardable_token_requires_staking_address() {
        let mut entries = native_to_erc_entries();
        entries.push((fields::DEPLOY_REWARDABLE_TOKEN, "true".to_string()));
        let err = ConfigValidator::validate(&bag(entries)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingField {
                field: fields::DPOS_STAKING_ADDRESS
            }
        );
    }

    #[test]
    fn test_forbidden_combinations_fail() {
        let forbidden = [
            ("NATIVE_TO_ERC", "false", "ONE_DIRECTION"),
            ("NATIVE_TO_ERC", "BOTH_DIRECTIONS", "ONE_DIRECTION"),
            ("ERC_TO_ERC", "false", "BOTH_DIRECTIONS"),
            ("ERC_TO_NATIVE", "ONE_DIRECTION", "false"),
            ("ERC_TO_NATIVE", "false", "ONE_DIRECTION"),
        ];
        for (mode, home, foreign) in forbidden {
            let mut entries = match mode {
                "NATIVE_TO_ERC" => native_to_erc_entries(),
                "ERC_TO_ERC" => erc_to_erc_entries(),
                _ => erc_to_native_entries(),
            };
            entries.extend([
                (fields::BRIDGE_MODE, mode.to_string()),
                (fields::HOME_REWARDABLE, home.to_string()),
                (fields::FOREIGN_REWARDABLE, foreign.to_string()),
                (fields::VALIDATORS_REWARD_ACCOUNTS, addr(0x61)),
            ]);
            let err = ConfigValidator::validate(&bag(entries)).unwrap_err();
            assert!(
                matches!(err, ConfigError::RuleViolation(_)),
                "{mode}/{home}/{foreign}: {err}"
            );
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let entries = bag(erc_to_native_entries());
        let first = ConfigValidator::validate(&entries).unwrap();
        let second = ConfigValidator::validate(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_serializes_under_catalog_names() {
        let config = ConfigValidator::validate(&bag(erc_to_native_entries())).unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["BRIDGE_MODE"], "ERC_TO_NATIVE");
        assert_eq!(json["HOME_REWARDABLE"], "false");
        assert!(json.get("BLOCK_REWARD_ADDRESS").is_some());
        assert!(json.get("HOME_EVM_VERSION").is_none());
    }
}
