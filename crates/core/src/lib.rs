// crates/core/src/lib.rs
//! Wiring for the `repo_visualiser` binary: argument parsing, run
//! configuration and adapter selection.
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod config;
pub mod presentation;

pub use bootstrap::{run, run_with_config};
pub use config::RunConfig;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default file the diagram is written to when no output is requested.
pub const DEFAULT_OUTPUT: &str = "diagram.svg";
