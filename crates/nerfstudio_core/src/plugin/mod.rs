//! Method registration and discovery contracts.
//!
//! External packages publish a [`types::MethodSpecification`] through the
//! entry-point registry; users can add more through the
//! `NERFSTUDIO_METHOD_CONFIGS` environment variable. Discovery merges both
//! sources into name-keyed method tables for the CLI/training harness.

pub mod discovery;
pub mod overrides;
pub mod registry;
pub mod resolver;
pub mod types;
