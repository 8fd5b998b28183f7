//! Plugin host error types

use hostkit_plugin_api::{Capability, Hook, PluginError};
use thiserror::Error;

/// Errors that can occur in the plugin host
#[derive(Error, Debug)]
pub enum HostError {
    /// Plugin requires a capability the host does not declare
    #[error("Plugin '{plugin}' requires capability '{capability}' which the host does not declare")]
    MissingCapability {
        plugin: String,
        capability: Capability,
    },

    /// A plugin hook returned an error
    #[error("Plugin '{plugin}' failed in hook '{hook}': {source}")]
    HookFailed {
        plugin: String,
        hook: Hook,
        #[source]
        source: PluginError,
    },

    /// Configuration named a plugin no factory is known for
    #[error("Unknown plugin '{name}'")]
    UnknownPlugin { name: String },

    /// Configuration error (parsing, wrong shape, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error surfaced by the plugin API outside of a hook
    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
