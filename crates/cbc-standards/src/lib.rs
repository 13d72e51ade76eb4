#![deny(unsafe_code)]

pub mod assets;
pub mod error;
pub mod hash;
pub mod loaders;
pub mod manifest;
pub mod registry;

pub use crate::error::StandardsError;
pub use crate::registry::{StandardsRegistry, StandardsSummary};
