//! Common test utilities for loadplan scenario and CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp project and home directory
//! - Fixtures: order builders and a sample catalog
//! - Assertions: session invariant helpers

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
