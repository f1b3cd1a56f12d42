// crates/infra/src/lib.rs
//! Adapters implementing the `repo_visualiser_ports` traits against the
//! local filesystem.
#![allow(clippy::multiple_crate_versions)]

pub mod classification;
pub mod config_file;
pub mod delivery;
pub mod filesystem;
pub mod persistence;

pub use classification::ExtensionClassifier;
pub use config_file::{ConfigFile, ConfigFileLoader};
pub use delivery::{StdoutSink, StepSummarySink, SvgFileSink};
pub use filesystem::WalkFileSource;
