//! Module/attribute resolution seam for environment-variable overrides.
//!
//! Dynamic loading of a `module:attribute` path is modeled as an injected
//! capability so the override mechanism can be exercised without a real
//! loader behind it.

use std::any::Any;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Capability contract for resolving a `module:attribute` path to a value.
pub trait ModuleResolver {
    /// Resolves `module` and fetches `attribute` from it.
    fn resolve(
        &self,
        module: &str,
        attribute: &str,
    ) -> Result<Arc<dyn Any + Send + Sync>, ResolveError>;
}

/// Resolution errors surfaced to the override pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    ModuleNotFound(String),
    AttributeNotFound { module: String, attribute: String },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModuleNotFound(module) => write!(f, "module not found: {module}"),
            Self::AttributeNotFound { module, attribute } => {
                write!(f, "module {module} has no attribute {attribute}")
            }
        }
    }
}

impl Error for ResolveError {}

/// In-process resolver backed by pre-registered values.
#[derive(Default)]
pub struct StaticModuleResolver {
    modules: BTreeMap<String, BTreeMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl StaticModuleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one value under `module` / `attribute`, replacing any
    /// previous value at that path.
    pub fn register(&mut self, module: &str, attribute: &str, value: Arc<dyn Any + Send + Sync>) {
        self.modules
            .entry(module.to_string())
            .or_default()
            .insert(attribute.to_string(), value);
    }
}

impl ModuleResolver for StaticModuleResolver {
    fn resolve(
        &self,
        module: &str,
        attribute: &str,
    ) -> Result<Arc<dyn Any + Send + Sync>, ResolveError> {
        let attributes = self
            .modules
            .get(module)
            .ok_or_else(|| ResolveError::ModuleNotFound(module.to_string()))?;
        attributes
            .get(attribute)
            .cloned()
            .ok_or_else(|| ResolveError::AttributeNotFound {
                module: module.to_string(),
                attribute: attribute.to_string(),
            })
    }
}
