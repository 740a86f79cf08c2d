//! Template manifest parsing.
//!
//! A template may carry a manifest file at its root describing itself:
//! version constraints, the input arguments it supports, and any extra
//! metadata the template author wants to attach. Unrecognized keys are
//! preserved rather than rejected so older tool versions can still process
//! manifests carrying newer extensions.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{TemplateError, TemplateResult};

/// Well known file name for template manifest files.
pub const MANIFEST_FILE_NAME: &str = ".rejig.yml";

/// Version identifiers for the various aspects of a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Format version of the manifest file and its contents.
    #[serde(default)]
    pub schema: Option<Version>,
    /// Minimum version of the tool needed to process the template.
    #[serde(default)]
    pub rejigger: Option<Version>,
    /// Version number associated with the template itself.
    #[serde(default)]
    pub template: Option<Version>,
}

/// One input argument supported by a template.
///
/// A value for each argument must be provided by the user to customize the
/// content produced from the template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Name of the argument, exactly as referenced by the template contents.
    pub name: String,
    /// Descriptive text explaining the purpose of the argument.
    #[serde(default)]
    pub description: String,
}

/// The `template` section of a manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// Input arguments supported by the template, in declaration order.
    #[serde(default)]
    pub args: Vec<ArgSpec>,
}

/// Parsed contents of a template manifest file.
#[derive(Debug, Clone, Default)]
pub struct ManifestData {
    /// Version identifiers for the template.
    pub versions: VersionInfo,
    /// Metadata describing the template.
    pub template: TemplateInfo,
    /// Every top level manifest key not otherwise recognized.
    pub miscellaneous: HashMap<String, serde_json::Value>,
}

impl ManifestData {
    /// Parse a manifest file from disk.
    pub fn parse(path: &Path) -> TemplateResult<Self> {
        debug!("Parsing template manifest {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| TemplateError::Path {
            path: path.to_path_buf(),
            message: format!("failed to open manifest file: {}", e),
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a manifest document from YAML text.
    ///
    /// The document is decoded in three passes over the same content: the
    /// typed `versions` section, the typed `template` section, and the whole
    /// document as an open map holding everything else. Each pass fails
    /// independently so problems are reported against the section that
    /// actually has them.
    pub fn from_yaml(content: &str) -> TemplateResult<Self> {
        #[derive(Deserialize)]
        struct VersionSection {
            #[serde(default)]
            versions: VersionInfo,
        }

        #[derive(Deserialize)]
        struct TemplateSection {
            #[serde(default)]
            template: TemplateInfo,
        }

        let document: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| TemplateError::ManifestParse {
                section: "YAML content",
                source: e,
            })?;
        if document.is_null() {
            return Ok(Self::default());
        }

        let versions: VersionSection = serde_yaml::from_value(document.clone()).map_err(|e| {
            TemplateError::ManifestParse {
                section: "version information",
                source: e,
            }
        })?;

        let template: TemplateSection = serde_yaml::from_value(document.clone()).map_err(|e| {
            TemplateError::ManifestParse {
                section: "template metadata",
                source: e,
            }
        })?;

        let mut remaining: HashMap<String, serde_json::Value> = serde_yaml::from_value(document)
            .map_err(|e| TemplateError::ManifestParse {
                section: "additional config options",
                source: e,
            })?;
        remaining.remove("versions");
        remaining.remove("template");

        Ok(Self {
            versions: versions.versions,
            template: template.template,
            miscellaneous: remaining,
        })
    }

    /// Input arguments declared by the manifest, in declaration order.
    pub fn declared_args(&self) -> &[ArgSpec] {
        &self.template.args
    }
}
