//! Application options discovery.
//!
//! The options file is looked up in the user's home folder unless an
//! explicit path is given on the command line. A missing default file is
//! not an error: Rejigger starts with an empty registry.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use rejig_config::AppOptions;

/// Name of the options file looked up in the user's home folder.
pub const CONFIG_FILE_NAME: &str = ".rejig";

/// Load the application options, either from an explicitly given path or
/// from the default location in the user's home folder.
pub fn load_options(explicit: Option<&Path>) -> Result<AppOptions> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("Options file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let home = match dirs::home_dir() {
                Some(home) => home,
                None => {
                    debug!("No home folder, starting with an empty registry");
                    return Ok(AppOptions::default());
                }
            };
            let path = home.join(CONFIG_FILE_NAME);
            if !path.is_file() {
                debug!("No options file at {}, starting with an empty registry", path.display());
                return Ok(AppOptions::default());
            }
            path
        }
    };

    AppOptions::load(&path).with_context(|| {
        format!("Failed loading application options from {}", path.display())
    })
}
