//! hostkit-plugin-api - Plugin API for hostkit hosts
//!
//! This crate provides the traits and types needed to write plugins that
//! attach to a hostkit host. A plugin owns its own options, receives a
//! back-reference to its host when the host registers it, and may declare
//! hooks the host runs once every plugin is registered.
//!
//! # Example
//!
//! ```ignore
//! use hostkit_plugin_api::{Hook, HookContext, Plugin, PluginBase, PluginError, PluginOptions};
//!
//! pub struct Greeter {
//!     base: PluginBase,
//! }
//!
//! impl Default for Greeter {
//!     fn default() -> Self {
//!         Self { base: PluginBase::new(Self::configure(PluginOptions::new())) }
//!     }
//! }
//!
//! impl Plugin<MyHost> for Greeter {
//!     fn name(&self) -> &str {
//!         "greeter"
//!     }
//!
//!     fn base(&self) -> &PluginBase {
//!         &self.base
//!     }
//!
//!     fn base_mut(&mut self) -> &mut PluginBase {
//!         &mut self.base
//!     }
//!
//!     fn hooks(&self) -> Vec<Hook> {
//!         vec![Hook::Init]
//!     }
//!
//!     fn init(&mut self, ctx: &mut HookContext<'_, MyHost>) -> Result<(), PluginError> {
//!         ctx.log_info("Greeter attached");
//!         Ok(())
//!     }
//! }
//! ```

pub mod context;
pub mod error;
pub mod options;
pub mod types;

pub use context::HookContext;
pub use error::PluginError;
pub use options::{Options, PluginOptions};
pub use types::*;

/// The core plugin trait - implement this to attach behavior to a host of
/// type `S`.
///
/// Hooks default to no-ops. A plugin only gets a hook call if it lists
/// that hook in [`Plugin::hooks`]; undeclared hooks are never invoked.
pub trait Plugin<S: ?Sized>: 'static {
    /// Stable registration name. Two plugins with the same name on one host
    /// replace each other, the later one wins.
    fn name(&self) -> &str;

    /// Shared plugin state (options and host back-reference)
    fn base(&self) -> &PluginBase;

    /// Mutable shared plugin state
    fn base_mut(&mut self) -> &mut PluginBase;

    /// Effective options of this plugin
    fn options(&self) -> &PluginOptions {
        self.base().options()
    }

    /// The host this plugin is attached to, `None` until registration
    fn of(&self) -> Option<&HostHandle> {
        self.base().of()
    }

    /// Default options for this plugin type
    fn default_options() -> PluginOptions
    where
        Self: Sized,
    {
        PluginOptions::new()
    }

    /// Effective options: [`Plugin::default_options`] overlaid with `partial`
    fn configure(partial: PluginOptions) -> PluginOptions
    where
        Self: Sized,
    {
        Self::default_options().overlay(partial)
    }

    /// Hooks this plugin overrides
    fn hooks(&self) -> Vec<Hook> {
        Vec::new()
    }

    /// Check whether a hook is declared
    fn declares(&self, hook: &Hook) -> bool {
        self.hooks().contains(hook)
    }

    /// Capabilities the host must declare before this plugin can attach
    fn required_capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }

    /// Called once after every plugin of the host is registered
    fn init(&mut self, _ctx: &mut HookContext<'_, S>) -> Result<(), PluginError> {
        Ok(())
    }

    /// Run a declared hook. [`Hook::Init`] goes to [`Plugin::init`]; plugins
    /// declaring custom hooks override this to handle them.
    fn call_hook(&mut self, hook: &Hook, ctx: &mut HookContext<'_, S>) -> Result<(), PluginError> {
        match hook {
            Hook::Init => self.init(ctx),
            Hook::Custom(_) => Ok(()),
        }
    }
}
