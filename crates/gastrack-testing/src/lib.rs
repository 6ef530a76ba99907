//! Testing infrastructure for gastrack integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: ready-made refuel histories
//! - `assertions`: checks over `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
