//! Project generation.
//!
//! Walks a template tree and materializes it under a target directory,
//! rendering every relative path and every file body against the generation
//! context. Directory and file permission bits are carried over from the
//! template. Generation stops at the first error and leaves whatever was
//! written so far in place.

use std::fs;
use std::path::Path;

use glob::Pattern;
use tracing::{debug, info};
use walkdir::WalkDir;

use rejig_config::TemplateDefinition;

use crate::error::{TemplateError, TemplateResult};
use crate::manifest::MANIFEST_FILE_NAME;
use crate::render::{GenerationContext, Renderer};
use crate::source::SourceCache;

/// Generate a project from a template definition.
///
/// Opens the definition's source (fetching it if needed) and renders the
/// template tree into `target`.
pub fn generate(
    definition: &TemplateDefinition,
    sources: &mut SourceCache,
    target: &Path,
    context: &GenerationContext,
) -> TemplateResult<()> {
    let root = sources.open(definition)?;
    generate_tree(&root, &definition.exclusions, target, context)
}

/// Render the template tree rooted at `root` into `target`.
///
/// Entries matching an exclusion pattern are skipped, for directories
/// together with everything below them. The template manifest file is never
/// part of the output.
pub fn generate_tree(
    root: &Path,
    exclusions: &[String],
    target: &Path,
    context: &GenerationContext,
) -> TemplateResult<()> {
    let patterns = compile_exclusions(exclusions)?;
    let renderer = Renderer::new();

    info!(
        "Generating project in {} from {}",
        target.display(),
        root.display()
    );

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry.map_err(std::io::Error::from)?;
        let source = entry.path();
        let relative = source.strip_prefix(root).unwrap();

        if let Some(pattern) = matched_exclusion(&patterns, relative) {
            debug!("Skipping {} (matches {})", relative.display(), pattern);
            if entry.file_type().is_dir() {
                walker.skip_current_dir();
            }
            continue;
        }

        // The manifest describes the template, it is never part of the output
        if relative == Path::new(MANIFEST_FILE_NAME) {
            continue;
        }

        let rendered =
            renderer
                .render(&relative.to_string_lossy(), context)
                .map_err(|e| TemplateError::Render {
                    path: relative.to_path_buf(),
                    message: e.to_string(),
                })?;
        let destination = target.join(rendered);
        let metadata = entry.metadata().map_err(std::io::Error::from)?;

        if entry.file_type().is_dir() {
            create_output_dir(&destination, &metadata)?;
        } else {
            create_output_file(&renderer, source, relative, &destination, &metadata, context)?;
        }
    }

    Ok(())
}

fn create_output_dir(destination: &Path, metadata: &fs::Metadata) -> TemplateResult<()> {
    fs::create_dir_all(destination).map_err(|e| TemplateError::Path {
        path: destination.to_path_buf(),
        message: format!("failed to create project directory: {}", e),
    })?;
    copy_permissions(destination, metadata)?;
    Ok(())
}

fn create_output_file(
    renderer: &Renderer,
    source: &Path,
    relative: &Path,
    destination: &Path,
    metadata: &fs::Metadata,
    context: &GenerationContext,
) -> TemplateResult<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| TemplateError::Path {
            path: parent.to_path_buf(),
            message: format!("failed to create project directory: {}", e),
        })?;
    }

    let content = fs::read_to_string(source).map_err(|e| TemplateError::Path {
        path: relative.to_path_buf(),
        message: format!("failed to read template file: {}", e),
    })?;
    let rendered = renderer
        .render(&content, context)
        .map_err(|e| TemplateError::Render {
            path: relative.to_path_buf(),
            message: e.to_string(),
        })?;

    fs::write(destination, rendered).map_err(|e| TemplateError::Path {
        path: destination.to_path_buf(),
        message: format!("failed to generate project file: {}", e),
    })?;
    copy_permissions(destination, metadata)?;
    debug!("Rendered {}", relative.display());
    Ok(())
}

#[cfg(unix)]
fn copy_permissions(destination: &Path, metadata: &fs::Metadata) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    fs::set_permissions(destination, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn copy_permissions(_destination: &Path, _metadata: &fs::Metadata) -> std::io::Result<()> {
    Ok(())
}

fn compile_exclusions(exclusions: &[String]) -> TemplateResult<Vec<Pattern>> {
    exclusions
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|e| TemplateError::Exclusion {
                pattern: pattern.clone(),
                source: e,
            })
        })
        .collect()
}

fn matched_exclusion<'a>(patterns: &'a [Pattern], relative: &Path) -> Option<&'a Pattern> {
    patterns.iter().find(|pattern| pattern.matches_path(relative))
}
