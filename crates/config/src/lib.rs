//! Configuration management for the bridge deployment tooling
//!
//! This crate decides, from a handful of mode discriminators, which
//! settings a deployment needs, validates every field, and enforces the
//! cross-field mode compatibility rules. Deployment scripts receive either
//! a fully validated, typed configuration or a hard failure before any
//! on-chain action occurs.

pub mod discriminators;
pub mod loader;
pub mod rules;
pub mod schema;
pub mod validation;

pub use discriminators::Discriminators;
pub use loader::{ConfigBag, ConfigLoader};
pub use schema::{build_schema, FieldSpec, Schema};
pub use validation::{ConfigValidator, ValidatedConfig};
