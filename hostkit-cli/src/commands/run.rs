//! Run the feature once

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::feature::run_feature;

/// Run arguments
#[derive(Args)]
pub struct RunArgs {
    /// Host configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Build the feature without any plugins
    #[arg(long)]
    pub no_extension: bool,
}

/// Run command
pub fn run(args: RunArgs) -> Result<()> {
    let mut host = super::build_host(args.config.as_deref(), args.no_extension)?;

    for line in run_feature(&mut host) {
        println!("{}", line);
    }

    Ok(())
}
