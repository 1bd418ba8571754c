//! Conditional schema composition
//!
//! Starting from a fixed base of always-required fields, the schema grows
//! with whatever the selected bridge mode and reward modes demand. The
//! result is a complete field-to-validator mapping for one deployment.

use std::collections::BTreeMap;

use types::fields;
use types::utils::ZERO_ADDRESS;
use types::{BridgeMode, RewardMode, ValidatorKind};

use crate::discriminators::Discriminators;

/// Specification of a single configuration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: ValidatorKind,
    /// Raw value substituted when the field is absent from the bag
    pub default: Option<&'static str>,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: ValidatorKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    const fn with_default(name: &'static str, kind: ValidatorKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
        }
    }
}

/// Field name to FieldSpec mapping for one deployment.
///
/// Built once from the discriminators and never mutated afterwards. A later
/// insert for the same name replaces the earlier spec, so mode branches can
/// refine a base field (e.g. attach a default).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: BTreeMap<&'static str, FieldSpec>,
}

impl Schema {
    fn insert(&mut self, spec: FieldSpec) {
        self.fields.insert(spec.name, spec);
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field specs in name order
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.values()
    }
}

/// Fields every deployment needs regardless of mode
const BASE: &[FieldSpec] = &[
    FieldSpec::required(fields::DEPLOYMENT_ACCOUNT_PRIVATE_KEY, ValidatorKind::Str),
    FieldSpec::required(fields::DEPLOYMENT_GAS_LIMIT_EXTRA, ValidatorKind::Num),
    FieldSpec::required(fields::HOME_DEPLOYMENT_GAS_PRICE, ValidatorKind::BigNum),
    FieldSpec::required(fields::FOREIGN_DEPLOYMENT_GAS_PRICE, ValidatorKind::BigNum),
    FieldSpec::required(
        fields::GET_RECEIPT_INTERVAL_IN_MILLISECONDS,
        ValidatorKind::BigNum,
    ),
    FieldSpec::required(fields::HOME_RPC_URL, ValidatorKind::Str),
    FieldSpec::required(fields::HOME_BRIDGE_OWNER, ValidatorKind::Address),
    FieldSpec::required(fields::HOME_VALIDATORS_OWNER, ValidatorKind::AddressList),
    FieldSpec::required(fields::HOME_UPGRADEABLE_ADMIN, ValidatorKind::Address),
    FieldSpec::required(fields::HOME_DAILY_LIMIT, ValidatorKind::BigNum),
    FieldSpec::required(fields::HOME_MAX_AMOUNT_PER_TX, ValidatorKind::BigNum),
    FieldSpec::required(fields::HOME_MIN_AMOUNT_PER_TX, ValidatorKind::BigNum),
    FieldSpec::required(fields::HOME_REQUIRED_BLOCK_CONFIRMATIONS, ValidatorKind::Num),
    FieldSpec::required(fields::HOME_GAS_PRICE, ValidatorKind::BigNum),
    FieldSpec::required(fields::FOREIGN_RPC_URL, ValidatorKind::Str),
    FieldSpec::required(fields::FOREIGN_BRIDGE_OWNER, ValidatorKind::Address),
    FieldSpec::required(fields::FOREIGN_VALIDATORS_OWNER, ValidatorKind::Address),
    FieldSpec::required(fields::FOREIGN_UPGRADEABLE_ADMIN, ValidatorKind::Address),
    FieldSpec::required(
        fields::FOREIGN_REQUIRED_BLOCK_CONFIRMATIONS,
        ValidatorKind::Num,
    ),
    FieldSpec::required(fields::FOREIGN_GAS_PRICE, ValidatorKind::BigNum),
    FieldSpec::required(fields::FOREIGN_MAX_AMOUNT_PER_TX, ValidatorKind::BigNum),
    FieldSpec::required(fields::REQUIRED_NUMBER_OF_VALIDATORS, ValidatorKind::Num),
    FieldSpec::required(fields::VALIDATORS, ValidatorKind::AddressList),
];

/// Compose the full schema for one deployment from its discriminators.
///
/// Pure and total: failures belong to the compatibility rules or the
/// validation engine, never here.
pub fn build_schema(disc: &Discriminators) -> Schema {
    let mut schema = Schema::default();
    for spec in BASE {
        schema.insert(*spec);
    }

    match disc.bridge_mode {
        BridgeMode::NativeToErc => {
            schema.insert(FieldSpec::required(
                fields::BRIDGEABLE_TOKEN_NAME,
                ValidatorKind::Str,
            ));
            schema.insert(FieldSpec::required(
                fields::BRIDGEABLE_TOKEN_SYMBOL,
                ValidatorKind::Str,
            ));
            schema.insert(FieldSpec::required(
                fields::BRIDGEABLE_TOKEN_DECIMALS,
                ValidatorKind::Num,
            ));
            schema.insert(FieldSpec::required(
                fields::FOREIGN_DAILY_LIMIT,
                ValidatorKind::BigNum,
            ));
            schema.insert(FieldSpec::required(
                fields::FOREIGN_MIN_AMOUNT_PER_TX,
                ValidatorKind::BigNum,
            ));
            schema.insert(FieldSpec::required(
                fields::DEPLOY_REWARDABLE_TOKEN,
                ValidatorKind::Bool,
            ));
            schema.insert(FieldSpec::required(
                fields::BLOCK_REWARD_ADDRESS,
                ValidatorKind::Address,
            ));
            if disc.deploy_rewardable_token {
                schema.insert(FieldSpec::required(
                    fields::DPOS_STAKING_ADDRESS,
                    ValidatorKind::Address,
                ));
            }
        }
        BridgeMode::ErcToErc => {
            schema.insert(FieldSpec::required(
                fields::ERC20_TOKEN_ADDRESS,
                ValidatorKind::Address,
            ));
            schema.insert(FieldSpec::required(
                fields::BRIDGEABLE_TOKEN_NAME,
                ValidatorKind::Str,
            ));
            schema.insert(FieldSpec::required(
                fields::BRIDGEABLE_TOKEN_SYMBOL,
                ValidatorKind::Str,
            ));
            schema.insert(FieldSpec::required(
                fields::BRIDGEABLE_TOKEN_DECIMALS,
                ValidatorKind::Num,
            ));
            schema.insert(FieldSpec::required(
                fields::DEPLOY_REWARDABLE_TOKEN,
                ValidatorKind::Bool,
            ));
            schema.insert(FieldSpec::required(
                fields::DPOS_STAKING_ADDRESS,
                ValidatorKind::Address,
            ));
            schema.insert(FieldSpec::required(
                fields::BLOCK_REWARD_ADDRESS,
                ValidatorKind::Address,
            ));
            schema.insert(FieldSpec::required(
                fields::ERC20_EXTENDED_BY_ERC677,
                ValidatorKind::Bool,
            ));
            if disc.erc20_extended_by_erc677 {
                schema.insert(FieldSpec::required(
                    fields::FOREIGN_DAILY_LIMIT,
                    ValidatorKind::BigNum,
                ));
                schema.insert(FieldSpec::required(
                    fields::FOREIGN_MIN_AMOUNT_PER_TX,
                    ValidatorKind::BigNum,
                ));
            }
        }
        BridgeMode::ErcToNative => {
            schema.insert(FieldSpec::required(
                fields::ERC20_TOKEN_ADDRESS,
                ValidatorKind::Address,
            ));
            // an absent block reward resolves to the zero address instead
            // of failing; the post-pass rules decide whether that is
            // acceptable
            schema.insert(FieldSpec::with_default(
                fields::BLOCK_REWARD_ADDRESS,
                ValidatorKind::Address,
                ZERO_ADDRESS,
            ));
        }
    }

    if disc.home_reward.is_enabled() || disc.foreign_reward.is_enabled() {
        schema.insert(FieldSpec::required(
            fields::VALIDATORS_REWARD_ACCOUNTS,
            ValidatorKind::AddressList,
        ));
        schema.insert(FieldSpec::required(
            fields::HOME_TRANSACTIONS_FEE,
            ValidatorKind::Num,
        ));
        schema.insert(FieldSpec::required(
            fields::FOREIGN_TRANSACTIONS_FEE,
            ValidatorKind::Num,
        ));
    }

    if disc.bridge_mode == BridgeMode::ErcToNative && disc.home_reward == RewardMode::BothDirections
    {
        schema.insert(FieldSpec::required(
            fields::HOME_FEE_MANAGER_TYPE,
            ValidatorKind::Str,
        ));
    }

    schema
}
