//! Template name resolution.
//!
//! Names come in two forms: a plain `name` looked up among directly
//! registered templates, and a `namespace.name` looked up inside a registered
//! inventory. Inventories are consulted lazily: an unknown namespace fails
//! without fetching anything.

use tracing::info;

use rejig_config::{
    AppOptions, ConfigError, InventoryDefinition, InventoryFile, SourceType, TemplateDefinition,
    INVENTORY_FILE_NAME,
};

use crate::error::{TemplateError, TemplateResult};
use crate::source::SourceCache;

/// Resolves template names against registered templates and inventories.
pub struct TemplateResolver<'a> {
    options: &'a AppOptions,
}

impl<'a> TemplateResolver<'a> {
    pub fn new(options: &'a AppOptions) -> Self {
        Self { options }
    }

    /// Resolve a template name to a concrete definition.
    ///
    /// A plain name is matched against registered templates. A dotted
    /// `namespace.name` selects an inventory by namespace, loads its listing
    /// and matches the remainder against the listed templates. Names with
    /// more than one dot are invalid.
    pub fn resolve(
        &self,
        sources: &mut SourceCache,
        name: &str,
    ) -> TemplateResult<TemplateDefinition> {
        let parts: Vec<&str> = name.split('.').collect();
        match parts.as_slice() {
            [plain] => self
                .options
                .find_template(plain)
                .cloned()
                .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string())),
            [namespace, template_name] => {
                let inventory = self
                    .options
                    .find_inventory(namespace)
                    .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;

                let templates = self.inventory_templates(sources, inventory)?;
                let definition = templates
                    .into_iter()
                    .find(|candidate| candidate.name == *template_name)
                    .ok_or_else(|| TemplateError::UnknownTemplate(name.to_string()))?;

                let label = format!("template {} in inventory {}", template_name, namespace);
                let problems = definition.validate(&label);
                if !problems.is_empty() {
                    return Err(ConfigError::Validation(problems).into());
                }

                Ok(definition)
            }
            _ => Err(TemplateError::InvalidName(name.to_string())),
        }
    }

    /// Load an inventory's template listing.
    ///
    /// Local sources listed with a relative path are resolved against the
    /// inventory root, so an inventory can ship its templates alongside the
    /// listing file.
    pub fn inventory_templates(
        &self,
        sources: &mut SourceCache,
        inventory: &InventoryDefinition,
    ) -> TemplateResult<Vec<TemplateDefinition>> {
        info!("Expanding inventory {}", inventory.namespace);

        let root = sources.open_inventory(inventory)?;
        let listing_path = root.join(INVENTORY_FILE_NAME);
        let content = std::fs::read_to_string(&listing_path).map_err(|e| TemplateError::Path {
            path: listing_path,
            message: format!("failed to open inventory file: {}", e),
        })?;
        let listing = InventoryFile::from_yaml(&content)?;

        let templates = listing
            .templates
            .into_iter()
            .map(|entry| {
                let mut definition = entry.to_definition();
                if definition.source_type == SourceType::Local
                    && !std::path::Path::new(&definition.source).is_absolute()
                {
                    definition.source = root.join(&definition.source).to_string_lossy().into_owned();
                }
                definition
            })
            .collect();

        Ok(templates)
    }
}
