//! hostkit-core: the host side of hostkit
//!
//! This crate provides the infrastructure for attaching plugins to a host:
//!
//! - [`Host`]: owns the host state, its effective options and the registered plugins
//! - [`HostOptions`] / [`PluginSpec`]: the caller-supplied plugin list and option values
//! - [`PluginRegistry`]: ordered name → plugin mapping, last registration wins
//! - [`ExtensionPoint`]: explicit interception points plugins hook into
//! - [`FactoryCatalog`]: resolves plugin names in TOML configuration files
//!
//! # Example
//!
//! ```ignore
//! use hostkit_core::{Host, HostOptions};
//!
//! let host = Host::build(
//!     Feature::default(),
//!     HostOptions::new().with_factory::<FeatureExtension>(),
//! )?;
//!
//! host.state().do_it();
//! ```
//!
//! # Setup order
//!
//! ```text
//! Host::new            options overlaid, plugins pending
//!   └─ construct_plugins   every plugin registered, host attached
//!        └─ init_plugins       declared init hooks run in registration order
//! ```

pub mod catalog;
pub mod error;
pub mod extension;
pub mod host;
pub mod options;
pub mod registry;

pub use catalog::{FactoryCatalog, PLUGINS_KEY};
pub use error::HostError;
pub use extension::ExtensionPoint;
pub use host::{Host, HostState, PluginInfo};
pub use options::{HostOptions, PluginFactory, PluginSpec};
pub use registry::{PluginEntry, PluginRegistry, PluginState};

// Re-export the plugin API so hosts only need one dependency
pub use hostkit_plugin_api as api;
