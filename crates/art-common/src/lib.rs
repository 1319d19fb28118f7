//! Common types shared across the block-canvas workspace.

pub mod color;
pub mod error;
pub mod seed;

pub use color::Rgb;
pub use error::{ArtError, ArtResult};
pub use seed::Seed;
