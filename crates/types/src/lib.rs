//! Shared types for the bridge deployment configuration gate
//!
//! This crate contains the discriminator enums, the error taxonomy, the
//! field catalog, and the primitive validators shared across the deployment
//! tooling.

pub mod error;
pub mod fields;
pub mod modes;
pub mod utils;
pub mod value;

// Re-export commonly used types
pub use error::{ConfigError, RuleViolation};
pub use modes::{BridgeMode, EvmVersion, FeeManagerType, RewardMode};
pub use value::{FieldValue, ValidatorKind};
