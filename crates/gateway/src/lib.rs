//! SessionVault gateway: HTTP surface, CLI, and shared state.

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod state;
