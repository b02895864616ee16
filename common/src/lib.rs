//! # macshift-common
//!
//! Domain types and ports shared by the reconfigurator and the CLI.
//!
//! * **[`validation`]**: the input validator and the validated value types.
//! * **[`system`]**: the contracts towards the operating system (running commands, reading interfaces).
//! * **[`config`]**: runtime options picked by the user.
//! * **[`network`]**: small helpers around hardware addresses.

pub mod config;
pub mod network;
pub mod system;
pub mod validation;
