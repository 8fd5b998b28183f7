//! Plugin types: hooks, capabilities, host handles and the plugin base

use crate::error::PluginError;
use crate::options::PluginOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Name of the hook every host runs after registration
pub const INIT_HOOK: &str = "init";

/// A hook a host can invoke on its plugins
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Hook {
    /// Post-attachment setup, run once after all plugins are registered
    Init,
    /// Any other named hook
    Custom(String),
}

impl Hook {
    /// Resolve a hook by name. `"init"` always maps to [`Hook::Init`].
    pub fn from_name(name: &str) -> Self {
        if name == INIT_HOOK {
            Self::Init
        } else {
            Self::Custom(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Init => INIT_HOOK,
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Hook {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Hook> for String {
    fn from(hook: Hook) -> Self {
        hook.name().to_string()
    }
}

/// A named capability a host may offer to its plugins
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(String);

impl Capability {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capabilities a host declares to the plugins attached to it.
///
/// A plugin lists the capabilities it relies on in
/// [`Plugin::required_capabilities`](crate::Plugin::required_capabilities);
/// the host refuses to register it unless every one of them is declared here.
pub trait HostCapabilities {
    /// Get the list of declared capabilities
    fn capabilities(&self) -> Vec<Capability> {
        Vec::new()
    }

    /// Check if a specific capability is declared
    fn has_capability(&self, cap: &Capability) -> bool {
        self.capabilities().contains(cap)
    }
}

/// Identity of the host a plugin is attached to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostHandle {
    id: Uuid,
    name: String,
}

impl HostHandle {
    /// Create a handle for a freshly constructed host
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// State every plugin carries: its effective options and the back-reference
/// to its host.
///
/// The back-reference is only ever set by the host during registration.
#[derive(Debug, Clone, Default)]
pub struct PluginBase {
    options: PluginOptions,
    of: Option<HostHandle>,
}

impl PluginBase {
    /// Create a base from already-effective options
    pub fn new(options: PluginOptions) -> Self {
        Self { options, of: None }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut PluginOptions {
        &mut self.options
    }

    /// The host this plugin is attached to, `None` before registration
    pub fn of(&self) -> Option<&HostHandle> {
        self.of.as_ref()
    }

    /// Like [`PluginBase::of`], but an error for plugins that were never registered
    pub fn require_host(&self, plugin: &str) -> Result<&HostHandle, PluginError> {
        self.of
            .as_ref()
            .ok_or_else(|| PluginError::MissingHost(plugin.to_string()))
    }

    /// Attach to a host (used by the host during registration)
    pub fn attach(&mut self, host: HostHandle) {
        self.of = Some(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_from_name() {
        assert_eq!(Hook::from_name("init"), Hook::Init);
        assert_eq!(
            Hook::from_name("ready"),
            Hook::Custom("ready".to_string())
        );
        assert_eq!(Hook::Init.to_string(), "init");
        assert_eq!(Hook::Custom("ready".into()).name(), "ready");
    }

    #[test]
    fn test_custom_init_name_is_init() {
        let hook: Hook = String::from("init").into();
        assert_eq!(hook, Hook::Init);
    }

    #[test]
    fn test_hook_toml_value() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            hooks: Vec<Hook>,
        }

        let parsed: Wrapper = toml::from_str("hooks = [\"init\", \"ready\"]").unwrap();
        assert_eq!(
            parsed.hooks,
            vec![Hook::Init, Hook::Custom("ready".to_string())]
        );
    }

    #[test]
    fn test_capability_equality() {
        assert_eq!(Capability::new("extend-do"), Capability::new("extend-do"));
        assert_ne!(Capability::new("extend-do"), Capability::new("storage"));
    }

    #[test]
    fn test_host_capabilities_default_empty() {
        struct Bare;
        impl HostCapabilities for Bare {}

        assert!(Bare.capabilities().is_empty());
        assert!(!Bare.has_capability(&Capability::new("anything")));
    }

    #[test]
    fn test_host_has_capability() {
        struct Declaring;
        impl HostCapabilities for Declaring {
            fn capabilities(&self) -> Vec<Capability> {
                vec![Capability::new("extend-do")]
            }
        }

        assert!(Declaring.has_capability(&Capability::new("extend-do")));
        assert!(!Declaring.has_capability(&Capability::new("storage")));
    }

    #[test]
    fn test_host_handles_are_distinct() {
        let a = HostHandle::new("feature");
        let b = HostHandle::new("feature");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_eq!(a.name(), "feature");
    }

    #[test]
    fn test_plugin_base_unattached() {
        let base = PluginBase::default();
        assert!(base.of().is_none());
        assert!(matches!(
            base.require_host("audit"),
            Err(PluginError::MissingHost(name)) if name == "audit"
        ));
    }

    #[test]
    fn test_plugin_base_attach() {
        let mut base = PluginBase::new(PluginOptions::new().with_value("level", 2));
        let host = HostHandle::new("feature");
        base.attach(host.clone());

        assert_eq!(base.of(), Some(&host));
        assert_eq!(base.options().get::<i64>("level"), Some(2));
    }
}
