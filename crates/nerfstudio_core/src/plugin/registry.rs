//! Entry-point registry contracts.
//!
//! # Responsibility
//! - Model the host packaging system's entry-point mechanism as an injected
//!   capability so discovery can run against any registration backend.
//! - Provide the in-process registry used by first-party wiring and tests.
//!
//! # Invariants
//! - Registered payloads are opaque until discovery downcasts them; the
//!   registry itself never inspects values.
//! - `entries` returns registrations in insertion order within a group.

use crate::plugin::types::MethodSpecification;
use std::any::Any;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Entry-point group under which method configurations are advertised.
pub const METHOD_CONFIGS_GROUP: &str = "nerfstudio.method_configs";

/// One advertised entry point: a name plus an opaque loaded value.
#[derive(Clone)]
pub struct EntryPoint {
    /// Name the publishing package registered the value under.
    pub name: String,
    value: Arc<dyn Any + Send + Sync>,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>, value: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns the registered value without interpreting it.
    pub fn load(&self) -> Arc<dyn Any + Send + Sync> {
        Arc::clone(&self.value)
    }
}

/// Capability contract for the host's extension registry.
pub trait EntryPointRegistry {
    /// Returns all entry points advertised under `group`.
    fn entries(&self, group: &str) -> Vec<EntryPoint>;
}

/// In-process entry-point registry.
#[derive(Default)]
pub struct StaticEntryPointRegistry {
    groups: BTreeMap<String, Vec<EntryPoint>>,
}

impl StaticEntryPointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one opaque value under a group and entry name.
    pub fn register(
        &mut self,
        group: &str,
        name: &str,
        value: Arc<dyn Any + Send + Sync>,
    ) -> Result<(), RegistryError> {
        let group = group.trim();
        if group.is_empty() {
            return Err(RegistryError::EmptyGroup);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyEntryName);
        }

        self.groups
            .entry(group.to_string())
            .or_default()
            .push(EntryPoint::new(name, value));
        Ok(())
    }

    /// Registers one specification under the method-configs group.
    pub fn register_method(
        &mut self,
        name: &str,
        specification: MethodSpecification,
    ) -> Result<(), RegistryError> {
        self.register(METHOD_CONFIGS_GROUP, name, Arc::new(specification))
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}

impl EntryPointRegistry for StaticEntryPointRegistry {
    fn entries(&self, group: &str) -> Vec<EntryPoint> {
        self.groups.get(group).cloned().unwrap_or_default()
    }
}

/// Internal registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    EmptyGroup,
    EmptyEntryName,
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyGroup => write!(f, "entry-point group must not be empty"),
            Self::EmptyEntryName => write!(f, "entry-point name must not be empty"),
        }
    }
}

impl Error for RegistryError {}
