//! Factory catalog - resolves plugin names in configuration files

use std::collections::HashMap;
use std::path::Path;

use hostkit_plugin_api::{Options, Plugin};

use crate::error::HostError;
use crate::options::{HostOptions, PluginFactory};

/// Key of the plugin list in a host configuration document
pub const PLUGINS_KEY: &str = "plugins";

/// Plugin factories a configuration file may refer to by name
pub struct FactoryCatalog<S: ?Sized> {
    factories: HashMap<String, PluginFactory<S>>,
}

impl<S: ?Sized + 'static> FactoryCatalog<S> {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Builder: make a plugin type available under `name`
    pub fn with<P: Plugin<S> + Default>(mut self, name: &str) -> Self {
        self.register(name, PluginFactory::of::<P>());
        self
    }

    /// Make a factory available under `name`, replacing any previous one
    pub fn register(&mut self, name: &str, factory: PluginFactory<S>) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Look up a factory
    pub fn get(&self, name: &str) -> Option<&PluginFactory<S>> {
        self.factories.get(name)
    }

    /// Known names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Load host options from a TOML file
    pub fn load_options(&self, path: &Path) -> Result<HostOptions<S>, HostError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_options(&content)
    }

    /// Parse host options from a TOML document
    ///
    /// `plugins` must be an array of catalog names; they become factory
    /// specifications in the same order. Every other top-level key becomes
    /// an option value.
    pub fn parse_options(&self, content: &str) -> Result<HostOptions<S>, HostError> {
        let mut values = Options::parse(content)?;
        let names = match values.remove(PLUGINS_KEY) {
            None => Vec::new(),
            Some(raw) => plugin_names(raw)?,
        };
        values.mark_clean();

        let mut options = HostOptions::new().with_values(values);
        for name in names {
            let factory = self
                .get(&name)
                .ok_or_else(|| HostError::UnknownPlugin { name: name.clone() })?;
            options = options.with_plugin(factory.clone());
        }

        tracing::debug!(
            plugins = options.plugins.len(),
            values = options.values.len(),
            "Parsed host options"
        );

        Ok(options)
    }
}

fn plugin_names(raw: toml::Value) -> Result<Vec<String>, HostError> {
    let toml::Value::Array(items) = raw else {
        return Err(HostError::Config(format!(
            "'{PLUGINS_KEY}' must be an array of plugin names"
        )));
    };

    items
        .into_iter()
        .map(|item| match item {
            toml::Value::String(name) => Ok(name),
            other => Err(HostError::Config(format!(
                "plugin names must be strings, found {}",
                other.type_str()
            ))),
        })
        .collect()
}

impl<S: ?Sized + 'static> Default for FactoryCatalog<S> {
    fn default() -> Self {
        Self::new()
    }
}
