//! # xmrlet-core
//!
//! Configuration and logging setup shared by the xmrlet crates.

pub mod config;
pub mod logging;
