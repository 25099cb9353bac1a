//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nerfstudio_core` discovery
//!   wiring, including `NERFSTUDIO_METHOD_CONFIGS` overrides.
//! - Keep output deterministic for quick local sanity checks.

use nerfstudio_core::{
    core_version, discover_methods, LogConsole, MethodSpecification, RegistryError,
    StaticEntryPointRegistry, StaticModuleResolver, TrainerConfig,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("nerfstudio_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), RegistryError> {
    let mut registry = StaticEntryPointRegistry::new();
    registry.register_method(
        "vanilla-nerf",
        MethodSpecification::new(
            TrainerConfig::new("vanilla-nerf"),
            "Built-in baseline method used to verify discovery wiring.",
        ),
    )?;

    // No dynamic loader behind the CLI probe; a populated override variable
    // is reported through the console and discovery degrades gracefully.
    let resolver = StaticModuleResolver::new();
    let console = LogConsole::new();
    let (methods, descriptions) = discover_methods(&registry, &resolver, &console);

    println!("nerfstudio_core version={}", core_version());
    for (name, config) in &methods {
        let description = descriptions.get(name).map(String::as_str).unwrap_or("");
        println!(
            "method {name} max_num_iterations={} description={description}",
            config.max_num_iterations
        );
    }
    Ok(())
}
