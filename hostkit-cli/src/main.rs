use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod feature;

#[derive(Parser)]
#[command(name = "hostkit", about = "Build a host, attach its plugins, run it")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the feature once, with its plugins
    Run(commands::run::RunArgs),
    /// List the plugins registered on the host
    Plugins(commands::plugins::PluginsArgs),
    /// Inspect or create the host configuration file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Plugins(args) => commands::plugins::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
