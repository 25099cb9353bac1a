//! Method specification published by external plugins.

use crate::trainer::TrainerConfig;
use serde::{Deserialize, Serialize};

/// Bundle registered by a plugin to expose one trainable method.
///
/// The discovery layer validates the shape of every registered payload
/// against this type and reads exactly two things from it: the config's
/// `method_name` and the human-readable description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodSpecification {
    /// Training configuration surfaced to the harness.
    pub config: TrainerConfig,
    /// One-line description shown in CLI method listings.
    pub description: String,
}

impl MethodSpecification {
    pub fn new(config: TrainerConfig, description: impl Into<String>) -> Self {
        Self {
            config,
            description: description.into(),
        }
    }
}
