//! Core plugin-discovery logic for the nerfstudio training harness.
//! This crate is the single source of truth for method registration invariants.

pub mod console;
pub mod logging;
pub mod plugin;
pub mod trainer;

pub use console::{Console, LogConsole};
pub use logging::{default_log_level, init_logging, logging_status};
pub use plugin::discovery::{discover_methods, discover_methods_with_overrides};
pub use plugin::overrides::{OverrideError, METHOD_CONFIGS_ENV};
pub use plugin::registry::{
    EntryPoint, EntryPointRegistry, RegistryError, StaticEntryPointRegistry, METHOD_CONFIGS_GROUP,
};
pub use plugin::resolver::{ModuleResolver, ResolveError, StaticModuleResolver};
pub use plugin::types::MethodSpecification;
pub use trainer::TrainerConfig;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
