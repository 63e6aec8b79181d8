//! Domain Policies
//!
//! Business rules that decide whether planning actions are allowed.

mod compatibility;

pub use compatibility::{CompatibilityPolicy, Verdict};
