//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Source tree traversal and line counting
//! - [`classification`]: Language detection for a single file
//! - [`config`]: Where ignore patterns come from
//! - [`delivery`]: Where finished diagrams go
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod classification;
pub mod config;
pub mod delivery;
pub mod filesystem;
