//! Host configuration commands

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use hostkit_core::PLUGINS_KEY;
use std::path::PathBuf;

use crate::config::ConfigLoader;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective host options and plugin list
    Show {
        /// Host configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the project configuration path
    Path,
    /// Write the default configuration file
    Init {
        /// Destination (defaults to the project config path)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show { config } => show_config(config),
        ConfigCommands::Path => show_path(),
        ConfigCommands::Init { path, force } => init_config(path, force),
    }
}

fn show_config(config: Option<PathBuf>) -> Result<()> {
    let host = super::build_host(config.as_deref(), false)?;

    let mut document = host.options().clone();
    document.set(PLUGINS_KEY, host.plugins().names())?;
    print!("{}", document.to_toml_string()?);
    Ok(())
}

fn show_path() -> Result<()> {
    println!("Project config: {}", ConfigLoader::project_config_path().display());
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(ConfigLoader::project_config_path);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    ConfigLoader::default_document().save(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
