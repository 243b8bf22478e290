//! Shared domain types for SessionVault: configuration and the common
//! error type used by all `sv-` crates.

pub mod config;
pub mod error;
