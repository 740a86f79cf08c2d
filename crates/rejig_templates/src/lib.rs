//! # rejig_templates
//!
//! Template resolution and project generation for Rejigger.
//!
//! The crate resolves a template name (plain or `namespace.name`) to a
//! concrete definition, materializes the template's source on the local disk
//! and renders the template tree into a target directory, substituting
//! context values into both file paths and file contents.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use std::path::Path;
//!
//! use rejig_config::AppOptions;
//! use rejig_templates::{generate, SourceCache, TemplateResolver};
//!
//! let options = AppOptions::from_yaml(
//!     r#"
//! templates:
//!   - alias: webapp
//!     source: /srv/templates/webapp
//!     type: local
//! "#,
//! )
//! .unwrap();
//!
//! let mut sources = SourceCache::new().unwrap();
//! let resolver = TemplateResolver::new(&options);
//! let definition = resolver.resolve(&mut sources, "webapp").unwrap();
//!
//! let context = HashMap::from([("project_name".to_string(), "demo".into())]);
//! generate(&definition, &mut sources, Path::new("demo"), &context).unwrap();
//! ```

pub mod error;
pub mod generator;
pub mod manifest;
pub mod render;
pub mod resolver;
pub mod source;

pub use error::{TemplateError, TemplateResult};
pub use generator::{generate, generate_tree};
pub use manifest::{ArgSpec, ManifestData, TemplateInfo, VersionInfo, MANIFEST_FILE_NAME};
pub use render::{GenerationContext, Renderer};
pub use resolver::TemplateResolver;
pub use source::{GitFetcher, RepositoryFetcher, SourceCache};
