//! Inventory documents.
//!
//! An inventory is a collection of templates published together, described
//! by a definition file at the inventory root. Inventories let a single
//! source (typically a Git repository) advertise many templates without the
//! user declaring each one in their own options file.

use serde::{Deserialize, Serialize};

use crate::definitions::{SourceType, TemplateDefinition};
use crate::error::ConfigResult;

/// Well known file name for inventory definition documents.
pub const INVENTORY_FILE_NAME: &str = ".rejig.inv.yml";

/// One template entry in an inventory document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Name the template is published under.
    #[serde(default)]
    pub name: String,
    /// Optional replacement name, taking precedence over `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Where the template files live: a path or a repository URL.
    #[serde(default)]
    pub source: String,
    /// How to interpret the source field.
    #[serde(default, rename = "type")]
    pub source_type: SourceType,
    /// Sub-folder inside the source holding the template root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Glob patterns for source paths that must never be generated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

impl InventoryEntry {
    /// Name this entry resolves under.
    pub fn resolved_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Convert the entry into a standalone template definition.
    pub fn to_definition(&self) -> TemplateDefinition {
        TemplateDefinition {
            name: self.resolved_name().to_string(),
            source: self.source.clone(),
            source_type: self.source_type,
            folder: self.folder.clone(),
            exclusions: self.exclusions.clone(),
        }
    }
}

/// Parsed contents of an inventory definition file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFile {
    /// Templates published by this inventory.
    #[serde(default)]
    pub templates: Vec<InventoryEntry>,
}

impl InventoryFile {
    /// Parse an inventory document from YAML text.
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inventory_file() {
        let inventory = InventoryFile::from_yaml(
            r#"
templates:
  - name: test1
    source: http://some/repo
    type: git
"#,
        )
        .unwrap();

        assert_eq!(inventory.templates.len(), 1);
        let entry = &inventory.templates[0];
        assert_eq!(entry.resolved_name(), "test1");
        assert_eq!(entry.source, "http://some/repo");
        assert_eq!(entry.source_type, SourceType::Git);
    }

    #[test]
    fn test_alias_overrides_name() {
        let inventory = InventoryFile::from_yaml(
            r#"
templates:
  - name: internal-name
    alias: public-name
    source: ./tmpl
    type: local
"#,
        )
        .unwrap();

        let entry = &inventory.templates[0];
        assert_eq!(entry.resolved_name(), "public-name");

        let definition = entry.to_definition();
        assert_eq!(definition.name, "public-name");
        assert_eq!(definition.source, "./tmpl");
        assert_eq!(definition.source_type, SourceType::Local);
    }

    #[test]
    fn test_entry_overrides_carry_through() {
        let inventory = InventoryFile::from_yaml(
            r#"
templates:
  - name: svc
    source: ./svc
    type: local
    folder: project
    exclusions:
      - "*.tmp"
"#,
        )
        .unwrap();

        let definition = inventory.templates[0].to_definition();
        assert_eq!(definition.folder.as_deref(), Some("project"));
        assert_eq!(definition.exclusions, vec!["*.tmp"]);
    }

    #[test]
    fn test_empty_inventory_document() {
        let inventory = InventoryFile::from_yaml("templates: []").unwrap();
        assert!(inventory.templates.is_empty());
    }

    #[test]
    fn test_malformed_inventory_document() {
        assert!(InventoryFile::from_yaml("templates: fubar").is_err());
    }
}
