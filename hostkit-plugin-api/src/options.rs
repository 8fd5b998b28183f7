//! Options - key-value configuration shared by hosts and plugins

use crate::error::PluginError;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::path::Path;

/// Options owned by a single plugin.
///
/// Effective plugin options are the plugin's declared defaults overlaid
/// with whatever the caller supplied at construction time.
pub type PluginOptions = Options;

/// Key-value option store backed by TOML values.
///
/// Keys are arbitrary strings. Nothing is validated: unrecognized keys are
/// carried along untouched for whoever reads them later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    values: HashMap<String, toml::Value>,
    dirty: bool,
}

impl Options {
    /// Create an empty option set
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            dirty: false,
        }
    }

    /// Builder: set a plain value
    ///
    /// Infallible counterpart of [`Options::set`] for anything that already
    /// converts into a TOML value (strings, integers, floats, booleans, arrays).
    pub fn with_value(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self.dirty = true;
        self
    }

    /// Load options from a TOML file
    ///
    /// A missing file yields an empty option set.
    pub fn load(path: &Path) -> Result<Self, PluginError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse options from a TOML document
    pub fn parse(content: &str) -> Result<Self, PluginError> {
        let values: HashMap<String, toml::Value> =
            toml::from_str(content).map_err(|e| PluginError::Config(e.to_string()))?;
        Ok(Self {
            values,
            dirty: false,
        })
    }

    /// Render as a pretty TOML document with sorted keys
    pub fn to_toml_string(&self) -> Result<String, PluginError> {
        let table: toml::Table = self
            .values
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        toml::to_string_pretty(&table).map_err(|e| PluginError::Serialization(e.to_string()))
    }

    /// Write to a TOML file, creating missing parent directories
    pub fn save(&mut self, path: &Path) -> Result<(), PluginError> {
        let content = self.to_toml_string()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        self.mark_clean();
        Ok(())
    }

    /// Get a value, converted to `T`
    ///
    /// Returns `None` when the key is absent or holds a value of another shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values.get(key).and_then(|v| v.clone().try_into().ok())
    }

    /// Get the raw TOML value for a key
    pub fn get_raw(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    /// Set a value
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), PluginError> {
        let toml_value =
            toml::Value::try_from(value).map_err(|e| PluginError::Serialization(e.to_string()))?;
        self.values.insert(key.to_string(), toml_value);
        self.dirty = true;
        Ok(())
    }

    /// Remove a value, returning it if it was present
    pub fn remove(&mut self, key: &str) -> Option<toml::Value> {
        let removed = self.values.remove(key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `partial` onto these options.
    ///
    /// Shallow: every key in `partial` replaces the whole value stored under
    /// the same key here. Nested tables are not merged.
    ///
    /// The dirty flag of `self` is carried over unchanged.
    pub fn overlay(mut self, partial: Options) -> Options {
        self.values.extend(partial.values);
        self
    }

    /// Check if the options have been modified since loading/saving
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the options as clean
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl From<toml::Table> for Options {
    fn from(table: toml::Table) -> Self {
        Self {
            values: table.into_iter().collect(),
            dirty: false,
        }
    }
}
