//! # macshift-core
//!
//! The interface reconfigurator and the concrete system adapters it runs on.

pub mod backend;
pub mod interface;
pub mod reconfigure;
pub mod runner;
