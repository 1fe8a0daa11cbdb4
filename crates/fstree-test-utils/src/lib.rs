//! Shared test utilities for the fstree workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: spec texts used across test suites
//! - [`root`]: [`root::TestRoot`], a temporary directory with setup and
//!   assertion helpers

pub mod fixtures;
pub mod root;
