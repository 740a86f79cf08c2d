//! Application options: the user level registry of templates and inventories.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::definitions::{InventoryDefinition, TemplateDefinition};
use crate::error::{ConfigError, ConfigResult};

/// Parsed application options.
///
/// Holds every template and inventory the user has declared. An absent or
/// empty options file produces the default (empty) value, which validates
/// clean.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppOptions {
    /// Directly declared templates.
    #[serde(default)]
    pub templates: Vec<TemplateDefinition>,
    /// Declared inventories, addressed by namespace.
    #[serde(default)]
    pub inventories: Vec<InventoryDefinition>,
}

impl AppOptions {
    /// Load options from a YAML file on disk and validate them.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        debug!("Loading application options from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse options from YAML text and validate them.
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let options: AppOptions = serde_yaml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Check the declared options against the structural requirements.
    ///
    /// Problems are collected across all declarations and reported as one
    /// aggregate error, never one field at a time.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut messages = Vec::new();
        for (i, template) in self.templates.iter().enumerate() {
            messages.extend(template.validate(&format!("template {}", i)));
        }
        for (i, inventory) in self.inventories.iter().enumerate() {
            messages.extend(inventory.validate(&format!("inventory {}", i)));
        }
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(messages))
        }
    }

    /// Find a directly declared template by name.
    ///
    /// When two declarations share a name the first one wins.
    pub fn find_template(&self, name: &str) -> Option<&TemplateDefinition> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Find an inventory by namespace.
    ///
    /// When two declarations share a namespace the first one wins.
    pub fn find_inventory(&self, namespace: &str) -> Option<&InventoryDefinition> {
        self.inventories.iter().find(|i| i.namespace == namespace)
    }
}
