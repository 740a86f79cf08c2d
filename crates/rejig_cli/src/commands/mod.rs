//! CLI command definitions.
//!
//! This module defines the command structure for the Rejigger CLI.
//! Each subcommand maps to a project scaffolding workflow.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod create;

/// Rejigger - Project templating tool
#[derive(Parser)]
#[command(name = "rejig")]
#[command(version, about = "Rejigger - Project templating tool")]
#[command(long_about = r#"
Rejigger creates new projects from templates: directory trees whose file
names and contents carry placeholders that get filled in at generation
time. Templates are registered in an options file in your home folder,
either directly or through inventories of templates published under a
shared namespace.

WORKFLOWS:
  create        → Create a new project from a template

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration error
  4 - Template error

For more information, visit: https://github.com/rejigger/rejigger
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the application options file (defaults to ~/.rejig)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project from a template
    Create(create::CreateArgs),
}
