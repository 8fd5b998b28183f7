//! Host - owns host state, options and the registered plugins

use serde::Serialize;

use hostkit_plugin_api::{Hook, HookContext, HostCapabilities, HostHandle, Options, Plugin};

use crate::error::HostError;
use crate::options::{HostOptions, PluginSpec};
use crate::registry::{PluginRegistry, PluginState};

/// State of a concrete host.
///
/// This is the part of the host plugins get to see: hooks receive it
/// mutably through their [`HookContext`].
pub trait HostState: HostCapabilities + 'static {
    /// Name recorded in the handle given to plugins
    fn host_name(&self) -> &str {
        "host"
    }

    /// Default host options, overlaid by caller-supplied values
    fn default_options() -> Options
    where
        Self: Sized,
    {
        Options::new()
    }
}

/// Information about a registered plugin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginInfo {
    /// Registration name
    pub name: String,
    /// Current state
    pub state: PluginState,
    /// Hooks the plugin declares
    pub hooks: Vec<Hook>,
}

/// A host with plugins.
///
/// Setup is two explicit steps and their order matters:
/// [`Host::construct_plugins`] registers every plugin and attaches the host,
/// then [`Host::init_plugins`] runs the init hook of every plugin that
/// declares one. [`Host::build`] performs both in that order.
pub struct Host<S: HostState> {
    state: S,
    options: Options,
    handle: HostHandle,
    pending: Vec<PluginSpec<S>>,
    plugins: PluginRegistry<S>,
}

impl<S: HostState> Host<S> {
    /// Create a host. Plugins stay pending until [`Host::construct_plugins`].
    pub fn new(state: S, options: HostOptions<S>) -> Self {
        let HostOptions { plugins, values } = options;
        let options = S::default_options().overlay(values);
        let handle = HostHandle::new(state.host_name());

        tracing::debug!(host = %handle, plugins = plugins.len(), "Host created");

        Self {
            state,
            options,
            handle,
            pending: plugins,
            plugins: PluginRegistry::new(),
        }
    }

    /// Create a host, register its plugins and run their init hooks
    pub fn build(state: S, options: HostOptions<S>) -> Result<Self, HostError> {
        let mut host = Self::new(state, options);
        host.construct_plugins()?;
        host.init_plugins()?;
        Ok(host)
    }

    /// Register every pending plugin, in configuration order.
    ///
    /// Factories are invoked, instances are used as they are. A plugin whose
    /// required capabilities the host does not declare stops registration
    /// with [`HostError::MissingCapability`]; plugins after it are dropped.
    pub fn construct_plugins(&mut self) -> Result<(), HostError> {
        for spec in std::mem::take(&mut self.pending) {
            let from_factory = spec.is_factory();
            let mut plugin = spec.resolve();
            let name = plugin.name().to_string();

            if let Some(capability) = plugin
                .required_capabilities()
                .into_iter()
                .find(|cap| !self.state.has_capability(cap))
            {
                tracing::error!(plugin = %name, capability = %capability, "Missing host capability");
                return Err(HostError::MissingCapability {
                    plugin: name,
                    capability,
                });
            }

            plugin.base_mut().attach(self.handle.clone());

            if self.plugins.insert(plugin).is_some() {
                tracing::warn!(plugin = %name, "Plugin name already registered, replacing");
            }

            tracing::debug!(plugin = %name, from_factory, "Plugin registered");
        }

        Ok(())
    }

    /// Run the init hook of every registered plugin not yet initialized
    pub fn init_plugins(&mut self) -> Result<(), HostError> {
        self.init_plugins_with(&Hook::Init)
    }

    /// Run `hook` on every registered plugin that declares it, in
    /// registration order.
    ///
    /// Plugins that do not declare the hook are not called. The first hook
    /// error is returned and the remaining plugins are not visited.
    ///
    /// Only [`Hook::Init`] moves plugins to [`PluginState::Initialized`];
    /// plugins already initialized are skipped when it runs again.
    pub fn init_plugins_with(&mut self, hook: &Hook) -> Result<(), HostError> {
        let registered = self.plugins.names();
        let initializing = *hook == Hook::Init;

        for entry in self.plugins.iter_mut() {
            if initializing && entry.state() == PluginState::Initialized {
                continue;
            }

            if entry.plugin().declares(hook) {
                let name = entry.name().to_string();
                let mut ctx =
                    HookContext::new(&mut self.state, &self.handle, hook, &name, &registered);

                tracing::debug!(plugin = %name, hook = %hook, "Running plugin hook");

                if let Err(source) = entry.plugin_mut().call_hook(hook, &mut ctx) {
                    tracing::error!(plugin = %name, hook = %hook, error = %source, "Plugin hook failed");
                    return Err(HostError::HookFailed {
                        plugin: name,
                        hook: hook.clone(),
                        source,
                    });
                }
            }

            if initializing {
                entry.mark_initialized();
            }
        }

        Ok(())
    }

    /// Host state
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Host state, mutably
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Effective host options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The handle attached to every plugin of this host
    pub fn handle(&self) -> &HostHandle {
        &self.handle
    }

    /// Registered plugins
    pub fn plugins(&self) -> &PluginRegistry<S> {
        &self.plugins
    }

    /// Get a registered plugin by name
    pub fn plugin(&self, name: &str) -> Option<&dyn Plugin<S>> {
        self.plugins.get(name)
    }

    /// Get a registered plugin by name, mutably
    pub fn plugin_mut(&mut self, name: &str) -> Option<&mut dyn Plugin<S>> {
        self.plugins.get_mut(name)
    }

    /// Get the number of registered plugins
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    /// Number of plugin specifications not yet registered
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Information about every registered plugin, in registration order
    pub fn plugin_info(&self) -> Vec<PluginInfo> {
        self.plugins
            .iter()
            .map(|entry| PluginInfo {
                name: entry.name().to_string(),
                state: entry.state(),
                hooks: entry.hooks(),
            })
            .collect()
    }
}
