//! Source location and fetching.
//!
//! A template or inventory definition names a source: a local path or a Git
//! repository URL. The locator turns that into a directory on the local file
//! system, fetching and caching remote sources as needed. Remote working
//! trees live under a per run temporary directory that is removed when the
//! cache is dropped, so there is no caching across invocations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use tracing::{debug, info};

use rejig_config::{InventoryDefinition, SourceType, TemplateDefinition};

use crate::error::{TemplateError, TemplateResult};

/// Capability for materializing a remote repository on the local disk.
///
/// Implementations clone `source` into `destination`, checking out
/// `reference` when given and the remote's default branch otherwise, and
/// leave a plain working tree there.
pub trait RepositoryFetcher {
    fn fetch(
        &self,
        source: &str,
        reference: Option<&str>,
        destination: &Path,
    ) -> TemplateResult<()>;
}

/// Fetcher shelling out to the system `git` client.
#[derive(Debug, Default)]
pub struct GitFetcher;

impl GitFetcher {
    /// Check if Git is available on the system.
    pub fn is_git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

impl RepositoryFetcher for GitFetcher {
    fn fetch(
        &self,
        source: &str,
        reference: Option<&str>,
        destination: &Path,
    ) -> TemplateResult<()> {
        info!("Cloning {} into {}", source, destination.display());

        let mut command = Command::new("git");
        command.args(["clone", "--depth", "1"]);
        if let Some(branch) = reference {
            command.args(["--branch", branch]);
        }
        command.arg(source).arg(destination);

        let output = command.output().map_err(|e| TemplateError::Fetch {
            url: source.to_string(),
            message: format!("failed to run git clone: {}", e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TemplateError::Fetch {
                url: source.to_string(),
                message: format!("git clone failed: {}", stderr.trim()),
            });
        }

        Ok(())
    }
}

/// Source locator with a per run cache of fetched repositories.
///
/// Each distinct (source, reference) pair is fetched at most once per run;
/// later opens reuse the cached working tree.
pub struct SourceCache {
    fetcher: Box<dyn RepositoryFetcher>,
    workdir: TempDir,
    fetched: HashMap<(String, Option<String>), PathBuf>,
}

impl SourceCache {
    /// Create a cache backed by the system Git client.
    pub fn new() -> TemplateResult<Self> {
        Self::with_fetcher(Box::new(GitFetcher))
    }

    /// Create a cache with a custom fetch capability.
    pub fn with_fetcher(fetcher: Box<dyn RepositoryFetcher>) -> TemplateResult<Self> {
        Ok(Self {
            fetcher,
            workdir: TempDir::new()?,
            fetched: HashMap::new(),
        })
    }

    /// Open a template definition's source and return the template root.
    ///
    /// For local sources the root is the literal path; Git sources are
    /// fetched (or reused from the cache) first. The definition's folder,
    /// when set, is resolved inside the source.
    pub fn open(&mut self, definition: &TemplateDefinition) -> TemplateResult<PathBuf> {
        let base = self.open_source(
            &definition.source,
            definition.source_type,
            &definition.name,
        )?;
        let root = match &definition.folder {
            Some(folder) => base.join(folder),
            None => base,
        };
        ensure_directory(root)
    }

    /// Open an inventory definition's source and return the inventory root.
    pub fn open_inventory(&mut self, inventory: &InventoryDefinition) -> TemplateResult<PathBuf> {
        let root = self.open_source(
            &inventory.source,
            inventory.source_type,
            &inventory.namespace,
        )?;
        ensure_directory(root)
    }

    fn open_source(
        &mut self,
        source: &str,
        source_type: SourceType,
        name: &str,
    ) -> TemplateResult<PathBuf> {
        match source_type {
            SourceType::Local => Ok(PathBuf::from(source)),
            SourceType::Git => self.fetch_cached(source, None),
            SourceType::Unknown => Err(TemplateError::UnsupportedSourceType(name.to_string())),
        }
    }

    fn fetch_cached(&mut self, source: &str, reference: Option<&str>) -> TemplateResult<PathBuf> {
        let key = (source.to_string(), reference.map(String::from));
        if let Some(path) = self.fetched.get(&key) {
            debug!("Reusing fetched copy of {}", source);
            return Ok(path.clone());
        }

        let destination = self.workdir.path().join(format!("src{}", self.fetched.len()));
        self.fetcher.fetch(source, reference, &destination)?;
        self.fetched.insert(key, destination.clone());
        Ok(destination)
    }
}

fn ensure_directory(path: PathBuf) -> TemplateResult<PathBuf> {
    if !path.is_dir() {
        return Err(TemplateError::Path {
            path,
            message: "source root does not exist or is not a directory".to_string(),
        });
    }
    Ok(path)
}
