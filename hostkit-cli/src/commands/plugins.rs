//! Plugin listing command

use anyhow::Result;
use clap::Args;
use hostkit_core::{PluginInfo, PluginState};
use std::path::PathBuf;

/// Plugin listing arguments
#[derive(Args)]
pub struct PluginsArgs {
    /// Host configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run plugins command
pub fn run(args: PluginsArgs) -> Result<()> {
    let host = super::build_host(args.config.as_deref(), false)?;
    let plugins = host.plugin_info();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plugins)?);
        return Ok(());
    }

    if plugins.is_empty() {
        println!("No plugins registered on {}", host.handle().name());
        return Ok(());
    }

    for p in &plugins {
        println!("{}", format_plugin(p));
    }

    let extension = host.state().before_do();
    if !extension.is_empty() {
        println!();
        println!("{}: {}", extension.name(), extension.labels().join(", "));
    }

    Ok(())
}

fn format_plugin(p: &PluginInfo) -> String {
    let status = match p.state {
        PluginState::Initialized => "✓",
        PluginState::Registered => "○",
    };

    let hooks = if p.hooks.is_empty() {
        "no hooks".to_string()
    } else {
        p.hooks
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!("{} {}    {}", status, p.name, hooks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostkit_plugin_api::Hook;

    #[test]
    fn test_format_initialized_plugin() {
        let info = PluginInfo {
            name: "feature-extension".to_string(),
            state: PluginState::Initialized,
            hooks: vec![Hook::Init],
        };
        assert_eq!(format_plugin(&info), "✓ feature-extension    init");
    }

    #[test]
    fn test_format_plugin_without_hooks() {
        let info = PluginInfo {
            name: "quiet".to_string(),
            state: PluginState::Registered,
            hooks: vec![],
        };
        assert_eq!(format_plugin(&info), "○ quiet    no hooks");
    }

    #[test]
    fn test_plugin_info_json() {
        let info = PluginInfo {
            name: "feature-extension".to_string(),
            state: PluginState::Initialized,
            hooks: vec![Hook::Init, Hook::Custom("ready".into())],
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["state"], "initialized");
        assert_eq!(json["hooks"], serde_json::json!(["init", "ready"]));
    }
}
