//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`orchestrator`]: Traverse, filter, aggregate, pack and render a tree
//! - [`dto`]: Options crossing the use case boundary
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::VisualiseOptions;
pub use orchestrator::VisualiseRepository;
