//! Environment-variable method overrides.
//!
//! # Responsibility
//! - Parse the `NERFSTUDIO_METHOD_CONFIGS` override list
//!   (`name=module:attribute,...`) and resolve each referenced value.
//! - Merge resolved specifications into the discovery output.
//!
//! # Invariants
//! - The first error abandons the whole override pass; no override entry is
//!   merged when the pass fails.
//! - Empty segments from trailing commas are ignored.
//! - Failures are reported through the console, never raised to the caller.

use crate::console::Console;
use crate::plugin::resolver::{ModuleResolver, ResolveError};
use crate::plugin::types::MethodSpecification;
use crate::trainer::TrainerConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable holding the override list.
pub const METHOD_CONFIGS_ENV: &str = "NERFSTUDIO_METHOD_CONFIGS";

static MODULE_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("valid module path regex")
});
static ATTRIBUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid attribute regex"));

/// Override-pass errors. Any one of these abandons the entire pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideError {
    /// Definition is not of the form `name=module:attribute`.
    MalformedDefinition(String),
    /// Path after `=` is not of the form `module:attribute`.
    MalformedPath(String),
    Resolve(ResolveError),
    /// Resolved value is not a [`MethodSpecification`].
    NotASpecification { name: String },
}

impl Display for OverrideError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDefinition(definition) => {
                write!(
                    f,
                    "malformed method definition `{definition}` (expected name=module:attribute)"
                )
            }
            Self::MalformedPath(path) => {
                write!(
                    f,
                    "malformed method path `{path}` (expected module:attribute)"
                )
            }
            Self::Resolve(err) => write!(f, "could not resolve method: {err}"),
            Self::NotASpecification { name } => {
                write!(
                    f,
                    "value registered for method `{name}` is not a MethodSpecification"
                )
            }
        }
    }
}

impl Error for OverrideError {}

impl From<ResolveError> for OverrideError {
    fn from(err: ResolveError) -> Self {
        Self::Resolve(err)
    }
}

/// Applies the override list into the method tables.
///
/// On failure the tables are left exactly as discovered from the registry and
/// the error is reported through the console.
pub(crate) fn apply_overrides(
    raw: &str,
    resolver: &dyn ModuleResolver,
    console: &dyn Console,
    methods: &mut BTreeMap<String, TrainerConfig>,
    descriptions: &mut BTreeMap<String, String>,
) {
    match collect_overrides(raw, resolver, console) {
        Ok(resolved) => {
            for (name, specification) in resolved {
                methods.insert(name.clone(), specification.config);
                descriptions.insert(name, specification.description);
            }
        }
        Err(err) => {
            console.error(&format!(
                "could not load methods from environment variable {METHOD_CONFIGS_ENV}: {err}"
            ));
        }
    }
}

/// Parses and resolves every definition in `raw`, stopping at the first error.
fn collect_overrides(
    raw: &str,
    resolver: &dyn ModuleResolver,
    console: &dyn Console,
) -> Result<Vec<(String, MethodSpecification)>, OverrideError> {
    let mut resolved = Vec::new();
    for definition in raw.split(',') {
        if definition.is_empty() {
            continue;
        }

        let parts: Vec<&str> = definition.split('=').collect();
        let (name, path) = match parts.as_slice() {
            [name, path] => (*name, *path),
            _ => return Err(OverrideError::MalformedDefinition(definition.to_string())),
        };
        console.info(&format!(
            "loading method {name} from environment variable {METHOD_CONFIGS_ENV}"
        ));

        let path_parts: Vec<&str> = path.split(':').collect();
        let (module, attribute) = match path_parts.as_slice() {
            [module, attribute] => (*module, *attribute),
            _ => return Err(OverrideError::MalformedPath(path.to_string())),
        };
        if !MODULE_PATH_RE.is_match(module) || !ATTRIBUTE_RE.is_match(attribute) {
            return Err(OverrideError::MalformedPath(path.to_string()));
        }

        let value = resolver.resolve(module, attribute)?;
        let specification = value
            .downcast_ref::<MethodSpecification>()
            .cloned()
            .ok_or_else(|| OverrideError::NotASpecification {
                name: name.to_string(),
            })?;
        resolved.push((name.to_string(), specification));
    }
    Ok(resolved)
}
