//! Injector descriptor
//!
//! An [`InjectorConfig`] names one injector and, optionally, the injector it
//! inherits bindings from. Descriptors are immutable once created; the
//! hierarchy registry is responsible for checking that a parent exists.

use crate::constants::HIERARCHY_PATH_SEPARATOR;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Immutable descriptor of a single injector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InjectorConfig {
    name: String,
    parent_name: Option<String>,
}

impl InjectorConfig {
    /// Descriptor of a root injector (no parent)
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
        }
    }

    /// Descriptor of an injector inheriting from `parent`
    pub fn with_parent<S: Into<String>, P: Into<String>>(name: S, parent: P) -> Self {
        Self {
            name: name.into(),
            parent_name: Some(parent.into()),
        }
    }

    /// Unique injector name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this injector has a parent
    pub fn has_parent(&self) -> bool {
        self.parent_name.is_some()
    }

    /// Name of the parent injector, if any
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    /// Check the descriptor on its own, without looking at the registry
    ///
    /// Names must be non-blank and must not contain the hierarchy path
    /// separator, otherwise two different ancestries could render to the
    /// same path string. An injector cannot be its own parent.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        if let Some(parent) = &self.parent_name {
            validate_name(parent)?;
            if parent == &self.name {
                return Err(Error::cycle(
                    format!("injector '{}' declares itself as parent", self.name),
                    vec![self.name.clone()],
                ));
            }
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_argument("Injector name cannot be empty"));
    }
    if name.contains(HIERARCHY_PATH_SEPARATOR) {
        return Err(Error::invalid_argument(format!(
            "Injector name '{name}' cannot contain the hierarchy separator '{HIERARCHY_PATH_SEPARATOR}'"
        )));
    }
    Ok(())
}
