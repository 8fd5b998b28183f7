//! Host options and plugin specifications

use std::fmt;

use hostkit_plugin_api::{Options, Plugin};

/// Something that can produce a plugin with its own default options
pub struct PluginFactory<S: ?Sized> {
    type_name: &'static str,
    build: fn() -> Box<dyn Plugin<S>>,
}

impl<S: ?Sized + 'static> PluginFactory<S> {
    /// Wrap a constructor function
    pub fn new(type_name: &'static str, build: fn() -> Box<dyn Plugin<S>>) -> Self {
        Self { type_name, build }
    }

    /// Factory for any plugin type constructible without arguments
    pub fn of<P: Plugin<S> + Default>() -> Self {
        fn build<S: ?Sized + 'static, P: Plugin<S> + Default>() -> Box<dyn Plugin<S>> {
            Box::new(P::default())
        }

        Self {
            type_name: std::any::type_name::<P>(),
            build: build::<S, P>,
        }
    }

    /// Rust type name of the produced plugin (diagnostics only)
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Construct a fresh plugin instance
    pub fn build(&self) -> Box<dyn Plugin<S>> {
        (self.build)()
    }
}

impl<S: ?Sized + 'static> Clone for PluginFactory<S> {
    fn clone(&self) -> Self {
        Self {
            type_name: self.type_name,
            build: self.build,
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for PluginFactory<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginFactory")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// One entry of a host's plugin list
pub enum PluginSpec<S: ?Sized> {
    /// Construct a new plugin during registration
    Factory(PluginFactory<S>),
    /// Use an already-constructed plugin as-is
    Instance(Box<dyn Plugin<S>>),
}

impl<S: ?Sized + 'static> PluginSpec<S> {
    /// Produce the plugin this entry stands for
    pub fn resolve(self) -> Box<dyn Plugin<S>> {
        match self {
            Self::Factory(factory) => factory.build(),
            Self::Instance(plugin) => plugin,
        }
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }
}

impl<S: ?Sized + 'static> fmt::Debug for PluginSpec<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factory(factory) => f.debug_tuple("Factory").field(&factory.type_name).finish(),
            Self::Instance(plugin) => f.debug_tuple("Instance").field(&plugin.name()).finish(),
        }
    }
}

impl<S: ?Sized + 'static> From<PluginFactory<S>> for PluginSpec<S> {
    fn from(factory: PluginFactory<S>) -> Self {
        Self::Factory(factory)
    }
}

impl<S: ?Sized + 'static> From<Box<dyn Plugin<S>>> for PluginSpec<S> {
    fn from(plugin: Box<dyn Plugin<S>>) -> Self {
        Self::Instance(plugin)
    }
}

/// Caller-supplied (partial) host configuration.
///
/// `values` is overlaid onto the host state's default options when the host
/// is built. `plugins` is the ordered plugin list.
pub struct HostOptions<S: ?Sized> {
    pub plugins: Vec<PluginSpec<S>>,
    pub values: Options,
}

impl<S: ?Sized + 'static> HostOptions<S> {
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            values: Options::new(),
        }
    }

    /// Builder: append a plugin specification
    pub fn with_plugin(mut self, spec: impl Into<PluginSpec<S>>) -> Self {
        self.plugins.push(spec.into());
        self
    }

    /// Builder: append a plugin to be constructed by its `Default` impl
    pub fn with_factory<P: Plugin<S> + Default>(self) -> Self {
        self.with_plugin(PluginFactory::of::<P>())
    }

    /// Builder: append a ready-made plugin instance
    pub fn with_instance<P: Plugin<S>>(self, plugin: P) -> Self {
        let plugin: Box<dyn Plugin<S>> = Box::new(plugin);
        self.with_plugin(plugin)
    }

    /// Builder: set an option value
    pub fn with_value(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.values = self.values.with_value(key, value);
        self
    }

    /// Builder: replace all option values
    pub fn with_values(mut self, values: Options) -> Self {
        self.values = values;
        self
    }
}

impl<S: ?Sized + 'static> Default for HostOptions<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized + 'static> fmt::Debug for HostOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostOptions")
            .field("plugins", &self.plugins)
            .field("values", &self.values)
            .finish()
    }
}
