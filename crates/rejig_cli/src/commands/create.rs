//! Create command - Create a new project from a template.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use dialoguer::Input;
use serde_json::Value;
use tracing::warn;

use rejig_templates::{
    generate, GenerationContext, ManifestData, SourceCache, TemplateError, TemplateResolver,
    MANIFEST_FILE_NAME,
};

use crate::config;

#[derive(Args)]
pub struct CreateArgs {
    /// Folder to create the new project in (must be empty or absent)
    target: PathBuf,

    /// Name of the template to generate the project from
    template: String,

    /// Context value for the template, repeatable (skips the prompt)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

pub fn execute(config_path: Option<&Path>, args: CreateArgs) -> Result<()> {
    let options = config::load_options(config_path)?;
    validate_target(&args.target)?;

    let mut sources = SourceCache::new().context("Failed to prepare source cache")?;

    println!("Loading template {}...", args.template);
    let resolver = TemplateResolver::new(&options);
    let definition = resolver.resolve(&mut sources, &args.template)?;
    let root = sources.open(&definition)?;

    let context = gather_params(&root, &args.set)?;

    println!(
        "Generating project {} from template {}...",
        args.target.display(),
        definition.name
    );

    // Make sure our output folder exists
    fs::create_dir_all(&args.target).with_context(|| {
        format!("Failed to create target folder {}", args.target.display())
    })?;

    generate(&definition, &mut sources, &args.target, &context)
        .context("Failed generating project")?;

    println!("Project '{}' created successfully!", definition.name);
    println!();
    println!("Location: {}", args.target.display());
    println!();
    println!("Next steps:");
    println!("  cd {}", args.target.display());

    Ok(())
}

/// The target folder may be absent or empty, anything else would risk
/// clobbering existing content.
fn validate_target(target: &Path) -> Result<()> {
    if target.is_dir() {
        let mut contents = fs::read_dir(target)
            .with_context(|| format!("Failed to read target folder {}", target.display()))?;
        if contents.next().is_some() {
            return Err(TemplateError::Path {
                path: target.to_path_buf(),
                message: "path is not empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

/// Collect the context values for the template.
///
/// Values given with `--set` are taken as-is. For every argument declared by
/// the template manifest and not already set, the user is prompted.
fn gather_params(root: &Path, set: &[String]) -> Result<GenerationContext> {
    let mut context = GenerationContext::new();
    for entry in set {
        let (name, value) = entry.split_once('=').with_context(|| {
            format!("Invalid --set value '{}', expected NAME=VALUE", entry)
        })?;
        context.insert(name.to_string(), Value::String(value.to_string()));
    }

    let manifest_path = root.join(MANIFEST_FILE_NAME);
    if !manifest_path.is_file() {
        return Ok(context);
    }

    let manifest = match ManifestData::parse(&manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            warn!("Ignoring unreadable template manifest: {}", e);
            return Ok(context);
        }
    };

    for arg in manifest.declared_args() {
        if context.contains_key(&arg.name) {
            continue;
        }
        let prompt = if arg.description.is_empty() {
            arg.name.clone()
        } else {
            format!("{} ({})", arg.name, arg.description)
        };
        let value: String = Input::new().with_prompt(prompt).interact_text()?;
        context.insert(arg.name.clone(), Value::String(value));
    }

    Ok(context)
}
