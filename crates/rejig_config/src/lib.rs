//! # rejig_config
//!
//! Application options and the template/inventory registry for Rejigger.
//!
//! The options file (`~/.rejig` by default) declares the templates a user
//! can generate projects from, either directly or through inventories:
//! namespaced collections of templates described by their own definition
//! file. This crate owns the data model for those declarations, the YAML
//! parsing, and the structural validation rules.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use rejig_config::AppOptions;
//!
//! let options = AppOptions::load(Path::new("/home/user/.rejig")).unwrap();
//! for template in &options.templates {
//!     println!("{} -> {}", template.name, template.source);
//! }
//! ```

pub mod definitions;
pub mod error;
pub mod inventory;
pub mod options;

pub use definitions::{InventoryDefinition, SourceType, TemplateDefinition};
pub use error::{ConfigError, ConfigResult};
pub use inventory::{InventoryEntry, InventoryFile, INVENTORY_FILE_NAME};
pub use options::AppOptions;
