//! Typed configuration values and the primitive validators

use alloy::primitives::{Address, U256};
use serde::Serialize;

use crate::error::ConfigError;
use crate::utils;

/// Validator kind attached to a schema field.
///
/// The names follow the raw-value shapes the deployment settings use:
/// free string, integer, boolean, arbitrary-precision integer, account
/// address, space-separated address list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    Str,
    Num,
    Bool,
    BigNum,
    Address,
    AddressList,
}

/// A normalized, typed configuration value
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Num(u64),
    Bool(bool),
    BigNum(U256),
    Address(Address),
    AddressList(Vec<Address>),
}

impl ValidatorKind {
    /// Run the primitive validator for this kind against a raw value.
    ///
    /// Returns the normalized value, or a failure naming the offending
    /// field and raw input.
    pub fn parse(&self, field: &'static str, raw: &str) -> Result<FieldValue, ConfigError> {
        match self {
            ValidatorKind::Str => Ok(FieldValue::Str(raw.to_string())),
            ValidatorKind::Num => raw
                .parse::<u64>()
                .map(FieldValue::Num)
                .map_err(|e| invalid(field, raw, e.to_string())),
            ValidatorKind::Bool => match raw {
                "true" | "1" => Ok(FieldValue::Bool(true)),
                "false" | "0" => Ok(FieldValue::Bool(false)),
                _ => Err(invalid(field, raw, "not a boolean".to_string())),
            },
            ValidatorKind::BigNum => raw
                .parse::<U256>()
                .map(FieldValue::BigNum)
                .map_err(|e| invalid(field, raw, e.to_string())),
            ValidatorKind::Address => utils::parse_address(raw)
                .map(FieldValue::Address)
                .ok_or_else(|| invalid(field, raw, "not a valid address".to_string())),
            ValidatorKind::AddressList => {
                let mut addresses = Vec::new();
                for part in raw.split(' ') {
                    match utils::parse_address(part) {
                        Some(address) => addresses.push(address),
                        // fail on the first bad element, naming it
                        None => return Err(invalid(field, part, "not a valid address".to_string())),
                    }
                }
                Ok(FieldValue::AddressList(addresses))
            }
        }
    }
}

fn invalid(field: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        value: value.to_string(),
        reason,
    }
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<u64> {
        match self {
            FieldValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_big_num(&self) -> Option<U256> {
        match self {
            FieldValue::BigNum(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            FieldValue::Address(a) => Some(*a),
            _ => None,
        }
    }

    pub fn as_address_list(&self) -> Option<&[Address]> {
        match self {
            FieldValue::AddressList(list) => Some(list),
            _ => None,
        }
    }
}
