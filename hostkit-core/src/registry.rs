//! Plugin registry - ordered mapping from plugin name to plugin instance

use hostkit_plugin_api::{Hook, Plugin};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a registered plugin, as observed by its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginState {
    /// Stored in the registry with its host attached
    Registered,
    /// Init hook ran, or was skipped because the plugin does not declare it
    Initialized,
}

/// A registered plugin with its lifecycle state
pub struct PluginEntry<S: ?Sized> {
    name: String,
    plugin: Box<dyn Plugin<S>>,
    state: PluginState,
}

impl<S: ?Sized + 'static> PluginEntry<S> {
    /// Registration name (the key this entry is stored under)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plugin(&self) -> &dyn Plugin<S> {
        self.plugin.as_ref()
    }

    pub fn plugin_mut(&mut self) -> &mut dyn Plugin<S> {
        self.plugin.as_mut()
    }

    pub fn state(&self) -> PluginState {
        self.state
    }

    /// Hooks the plugin declares
    pub fn hooks(&self) -> Vec<Hook> {
        self.plugin.hooks()
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.state = PluginState::Initialized;
    }
}

/// Registry of the plugins attached to one host.
///
/// Iteration follows insertion order. Registering a second plugin under a
/// name that is already taken replaces the first one in place: the entry
/// keeps its original position and the displaced plugin is handed back.
pub struct PluginRegistry<S: ?Sized> {
    entries: Vec<PluginEntry<S>>,
}

impl<S: ?Sized + 'static> PluginRegistry<S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a plugin under its own name
    ///
    /// Returns the plugin previously registered under the same name, if any.
    pub fn insert(&mut self, plugin: Box<dyn Plugin<S>>) -> Option<Box<dyn Plugin<S>>> {
        let entry = PluginEntry {
            name: plugin.name().to_string(),
            plugin,
            state: PluginState::Registered,
        };

        match self.position(&entry.name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index], entry).plugin),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Get a plugin by name
    pub fn get(&self, name: &str) -> Option<&dyn Plugin<S>> {
        self.entry(name).map(PluginEntry::plugin)
    }

    /// Get a plugin by name, mutably
    pub fn get_mut(&mut self, name: &str) -> Option<&mut dyn Plugin<S>> {
        self.entries
            .iter_mut()
            .find(|e| e.name == name)
            .map(PluginEntry::plugin_mut)
    }

    /// Get the full entry for a plugin
    pub fn entry(&self, name: &str) -> Option<&PluginEntry<S>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Get a plugin's lifecycle state
    pub fn state(&self, name: &str) -> Option<PluginState> {
        self.entry(name).map(PluginEntry::state)
    }

    /// Check if a plugin is registered
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Registered names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    /// Iterate entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry<S>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PluginEntry<S>> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: ?Sized + 'static> Default for PluginRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostkit_plugin_api::{PluginBase, PluginOptions};

    struct Host;

    struct Named {
        name: &'static str,
        base: PluginBase,
    }

    impl Named {
        fn boxed(name: &'static str, tag: i64) -> Box<dyn Plugin<Host>> {
            Box::new(Self {
                name,
                base: PluginBase::new(PluginOptions::new().with_value("tag", tag)),
            })
        }
    }

    impl Plugin<Host> for Named {
        fn name(&self) -> &str {
            self.name
        }

        fn base(&self) -> &PluginBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut PluginBase {
            &mut self.base
        }
    }

    fn tag(registry: &PluginRegistry<Host>, name: &str) -> Option<i64> {
        registry.get(name).and_then(|p| p.options().get::<i64>("tag"))
    }

    #[test]
    fn test_registry_default_is_empty() {
        let registry = PluginRegistry::<Host>::default();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_insert_keeps_registration_order() {
        let mut registry = PluginRegistry::new();
        registry.insert(Named::boxed("b", 1));
        registry.insert(Named::boxed("a", 2));
        registry.insert(Named::boxed("c", 3));

        assert_eq!(registry.names(), vec!["b", "a", "c"]);
        assert_eq!(registry.state("a"), Some(PluginState::Registered));
    }

    #[test]
    fn test_duplicate_name_replaces_in_place() {
        let mut registry = PluginRegistry::new();
        registry.insert(Named::boxed("a", 1));
        registry.insert(Named::boxed("b", 2));

        let displaced = registry.insert(Named::boxed("a", 3));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(tag(&registry, "a"), Some(3));
        assert_eq!(
            displaced.and_then(|p| p.options().get::<i64>("tag")),
            Some(1)
        );
    }

    #[test]
    fn test_get_missing() {
        let mut registry = PluginRegistry::<Host>::new();
        assert!(registry.get("ghost").is_none());
        assert!(registry.get_mut("ghost").is_none());
        assert!(registry.state("ghost").is_none());
        assert!(!registry.contains("ghost"));
    }

    #[test]
    fn test_mark_initialized() {
        let mut registry = PluginRegistry::new();
        registry.insert(Named::boxed("a", 1));

        for entry in registry.iter_mut() {
            entry.mark_initialized();
        }

        assert_eq!(registry.state("a"), Some(PluginState::Initialized));
    }

    #[test]
    fn test_plugin_state_serializes_snake_case() {
        let json = serde_json::to_string(&PluginState::Initialized).unwrap();
        assert_eq!(json, "\"initialized\"");
    }
}
