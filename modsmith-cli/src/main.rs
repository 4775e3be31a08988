//! modsmith CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{GenerateCommand, TemplatesCommand};

#[derive(Parser)]
#[command(name = "modsmith")]
#[command(version)]
#[command(about = "Module skeleton generator for pluggable host applications", long_about = None)]
struct Cli {
    /// Path to an alternative configuration file (default: ./modsmith.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new module skeleton
    Generate {
        /// Module ID, e.g. `admin`
        #[arg(long)]
        id: String,

        /// Fully qualified module class, e.g. `app\modules\admin\Module`
        #[arg(long)]
        class: String,

        /// Module description for the manifest
        #[arg(long, default_value = "")]
        description: String,

        /// Module author, e.g. `Jane Doe <jane@example.com>`
        #[arg(long, default_value = "")]
        author: String,

        /// Output alias path (defaults to the configured output path)
        #[arg(short, long)]
        output: Option<String>,

        /// Overwrite existing files without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// List the templates the generator depends on
    Templates,
}

fn main() -> Result<()> {
    modsmith::observability::init()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            id,
            class,
            description,
            author,
            output,
            force,
            dry_run,
        } => {
            let cmd = GenerateCommand {
                id,
                class,
                description,
                author,
                output,
                force,
                dry_run,
                config_path: cli.config,
            };
            cmd.execute()?;
        }
        Commands::Templates => {
            TemplatesCommand {
                config_path: cli.config,
            }
            .execute()?;
        }
    }

    Ok(())
}
