//! Method discovery over entry-point registrations and overrides.
//!
//! # Responsibility
//! - Merge every valid `nerfstudio.method_configs` entry point and every
//!   environment-variable override into two name-keyed method tables.
//!
//! # Invariants
//! - Discovery always returns, possibly with a partial result; no failure
//!   escapes to the caller.
//! - A shape-mismatched registry entry is skipped with a warning and never
//!   blocks other entries.
//! - Override entries win over registry entries with the same method name.

use crate::console::Console;
use crate::plugin::overrides::{apply_overrides, METHOD_CONFIGS_ENV};
use crate::plugin::registry::{EntryPointRegistry, METHOD_CONFIGS_GROUP};
use crate::plugin::resolver::ModuleResolver;
use crate::plugin::types::MethodSpecification;
use crate::trainer::TrainerConfig;
use std::collections::BTreeMap;

/// Discovers all registered methods, reading the override list from the
/// `NERFSTUDIO_METHOD_CONFIGS` environment variable.
///
/// Returns the method-config table and the description table, both keyed by
/// method name. Expected to run once at process startup.
pub fn discover_methods(
    registry: &dyn EntryPointRegistry,
    resolver: &dyn ModuleResolver,
    console: &dyn Console,
) -> (BTreeMap<String, TrainerConfig>, BTreeMap<String, String>) {
    let overrides = std::env::var(METHOD_CONFIGS_ENV).ok();
    discover_methods_with_overrides(registry, resolver, console, overrides.as_deref())
}

/// Discovery pipeline with the raw override list passed in directly.
pub fn discover_methods_with_overrides(
    registry: &dyn EntryPointRegistry,
    resolver: &dyn ModuleResolver,
    console: &dyn Console,
    overrides: Option<&str>,
) -> (BTreeMap<String, TrainerConfig>, BTreeMap<String, String>) {
    let mut methods = BTreeMap::new();
    let mut descriptions = BTreeMap::new();

    for entry in registry.entries(METHOD_CONFIGS_GROUP) {
        let value = entry.load();
        let Some(specification) = value.downcast_ref::<MethodSpecification>() else {
            console.warn(&format!(
                "could not load entry point `{}`: registered value is not a MethodSpecification",
                entry.name
            ));
            continue;
        };
        let method_name = specification.config.method_name.clone();
        methods.insert(method_name.clone(), specification.config.clone());
        descriptions.insert(method_name, specification.description.clone());
    }

    if let Some(raw) = overrides {
        apply_overrides(raw, resolver, console, &mut methods, &mut descriptions);
    }

    (methods, descriptions)
}

#[cfg(test)]
mod tests {
    use super::discover_methods_with_overrides;
    use crate::console::Console;
    use crate::plugin::registry::StaticEntryPointRegistry;
    use crate::plugin::resolver::StaticModuleResolver;
    use crate::plugin::types::MethodSpecification;
    use crate::trainer::TrainerConfig;

    struct SilentConsole;

    impl Console for SilentConsole {
        fn info(&self, _message: &str) {}
        fn warn(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
    }

    #[test]
    fn keys_output_by_method_name_not_entry_name() {
        let mut registry = StaticEntryPointRegistry::new();
        registry
            .register_method(
                "some-entry-name",
                MethodSpecification::new(TrainerConfig::new("nerfacto"), "Baseline."),
            )
            .expect("registration");

        let (methods, descriptions) = discover_methods_with_overrides(
            &registry,
            &StaticModuleResolver::new(),
            &SilentConsole,
            None,
        );
        assert!(methods.contains_key("nerfacto"));
        assert!(!methods.contains_key("some-entry-name"));
        assert_eq!(
            descriptions.get("nerfacto").map(String::as_str),
            Some("Baseline.")
        );
    }

    #[test]
    fn later_registration_wins_for_duplicate_method_names() {
        let mut registry = StaticEntryPointRegistry::new();
        registry
            .register_method(
                "first",
                MethodSpecification::new(TrainerConfig::new("nerfacto"), "First."),
            )
            .expect("first registration");
        registry
            .register_method(
                "second",
                MethodSpecification::new(TrainerConfig::new("nerfacto"), "Second."),
            )
            .expect("second registration");

        let (methods, descriptions) = discover_methods_with_overrides(
            &registry,
            &StaticModuleResolver::new(),
            &SilentConsole,
            None,
        );
        assert_eq!(methods.len(), 1);
        assert_eq!(
            descriptions.get("nerfacto").map(String::as_str),
            Some("Second.")
        );
    }
}
