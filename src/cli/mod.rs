//! CLI command implementations
//!
//! - `simple`: diagnose, demo, table, selfcheck
//! - `config`: schema output
//! - `util`: shared argument helpers

pub mod config;
pub mod simple;
pub mod util;

pub use config::cmd_schema;
pub use simple::{cmd_demo, cmd_diagnose, cmd_selfcheck, cmd_table};
