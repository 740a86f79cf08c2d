//! Template and inventory definitions.
//!
//! These are the immutable records the resolver and generation engine work
//! from. They are produced by deserializing the application options file or
//! an inventory document and are never modified afterwards.

use serde::{Deserialize, Serialize};

/// Kind of location template or inventory files are stored in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// A path on the local file system.
    Local,
    /// A Git repository URL.
    Git,
    /// Missing or unrecognized type token. Preserved by parsing so that
    /// validation can report it; the source locator refuses to open it.
    #[default]
    #[serde(other)]
    Unknown,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Local => "local",
            SourceType::Git => "git",
            SourceType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named template declaration.
///
/// In the application options file the name is carried by the `alias` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateDefinition {
    /// Name the template is looked up by.
    #[serde(default, rename = "alias")]
    pub name: String,
    /// Where the template files live: a path or a repository URL.
    #[serde(default)]
    pub source: String,
    /// How to interpret the source field.
    #[serde(default, rename = "type")]
    pub source_type: SourceType,
    /// Sub-folder inside the source holding the template root. Defaults to
    /// the source root itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Glob patterns for source paths that must never be generated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
}

impl TemplateDefinition {
    /// Collect the structural problems with this definition.
    ///
    /// `label` identifies the definition in the report, e.g. `template 3`.
    pub fn validate(&self, label: &str) -> Vec<String> {
        let mut messages = Vec::new();
        if self.name.is_empty() {
            messages.push(format!("{} alias is undefined", label));
        }
        if self.source.is_empty() {
            messages.push(format!("{} source is undefined", label));
        }
        if self.source_type == SourceType::Unknown {
            messages.push(format!("{} type is undefined", label));
        }
        messages
    }
}

/// A declared inventory: a remote or local collection of templates published
/// under a shared namespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryDefinition {
    /// Namespace prefix used in qualified template names.
    #[serde(default)]
    pub namespace: String,
    /// Where the inventory lives: a path or a repository URL.
    #[serde(default)]
    pub source: String,
    /// How to interpret the source field.
    #[serde(default, rename = "type")]
    pub source_type: SourceType,
}

impl InventoryDefinition {
    /// Collect the structural problems with this definition.
    pub fn validate(&self, label: &str) -> Vec<String> {
        let mut messages = Vec::new();
        if self.namespace.is_empty() {
            messages.push(format!("{} namespace is undefined", label));
        }
        if self.source.is_empty() {
            messages.push(format!("{} source is undefined", label));
        }
        if self.source_type == SourceType::Unknown {
            messages.push(format!("{} type is undefined", label));
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type_tokens() {
        let local: SourceType = serde_yaml::from_str("local").unwrap();
        assert_eq!(local, SourceType::Local);

        let git: SourceType = serde_yaml::from_str("git").unwrap();
        assert_eq!(git, SourceType::Git);
    }

    #[test]
    fn test_source_type_unrecognized_token() {
        // Unrecognized tokens parse cleanly so validation can report them
        let other: SourceType = serde_yaml::from_str("subversion").unwrap();
        assert_eq!(other, SourceType::Unknown);
    }

    #[test]
    fn test_template_definition_from_yaml() {
        let definition: TemplateDefinition = serde_yaml::from_str(
            r#"
alias: test1
source: /path/to/template
type: local
"#,
        )
        .unwrap();

        assert_eq!(definition.name, "test1");
        assert_eq!(definition.source, "/path/to/template");
        assert_eq!(definition.source_type, SourceType::Local);
        assert!(definition.folder.is_none());
        assert!(definition.exclusions.is_empty());
    }

    #[test]
    fn test_template_definition_optionals() {
        let definition: TemplateDefinition = serde_yaml::from_str(
            r#"
alias: test1
source: https://some/repo
type: git
folder: subfolder
exclusions:
  - "*.log"
  - local/**
"#,
        )
        .unwrap();

        assert_eq!(definition.folder.as_deref(), Some("subfolder"));
        assert_eq!(definition.exclusions, vec!["*.log", "local/**"]);
    }

    #[test]
    fn test_template_definition_missing_type() {
        let definition: TemplateDefinition = serde_yaml::from_str(
            r#"
alias: test2
source: /some/path2
"#,
        )
        .unwrap();

        assert_eq!(definition.source_type, SourceType::Unknown);
        let messages = definition.validate("template 0");
        assert_eq!(messages, vec!["template 0 type is undefined"]);
    }

    #[test]
    fn test_empty_definitions_report_every_field() {
        let template: TemplateDefinition = serde_yaml::from_str("{}").unwrap();
        let messages = template.validate("template 0");
        assert!(messages.contains(&"template 0 alias is undefined".to_string()));
        assert!(messages.contains(&"template 0 source is undefined".to_string()));
        assert!(messages.contains(&"template 0 type is undefined".to_string()));

        let inventory: InventoryDefinition = serde_yaml::from_str("{}").unwrap();
        let messages = inventory.validate("inventory 0");
        assert!(messages.contains(&"inventory 0 namespace is undefined".to_string()));
        assert!(messages.contains(&"inventory 0 source is undefined".to_string()));
        assert!(messages.contains(&"inventory 0 type is undefined".to_string()));
    }
}
