//! Shared test utilities for the block-canvas workspace.

pub mod fixtures;

pub use fixtures::{first_diff, tiny_table};
