//! HookContext - what a plugin sees of its host while a hook runs

use crate::types::{Hook, HostHandle};

/// Context lent to a plugin for the duration of one hook call.
///
/// The host's own state is borrowed mutably, so a hook can register
/// callbacks on the host's extension points or adjust its fields. The list
/// of registered plugin names is complete: hooks only run after every
/// plugin of the host has been registered.
pub struct HookContext<'a, S: ?Sized> {
    host: &'a mut S,
    handle: &'a HostHandle,
    hook: &'a Hook,
    plugin_name: &'a str,
    registered: &'a [String],
}

impl<'a, S: ?Sized> HookContext<'a, S> {
    /// Create a context (used by the host before invoking a hook)
    pub fn new(
        host: &'a mut S,
        handle: &'a HostHandle,
        hook: &'a Hook,
        plugin_name: &'a str,
        registered: &'a [String],
    ) -> Self {
        Self {
            host,
            handle,
            hook,
            plugin_name,
            registered,
        }
    }

    /// Shared access to the host state
    pub fn host(&self) -> &S {
        self.host
    }

    /// Mutable access to the host state
    pub fn host_mut(&mut self) -> &mut S {
        self.host
    }

    /// Identity of the host running the hook
    pub fn handle(&self) -> &HostHandle {
        self.handle
    }

    /// The hook being run
    pub fn hook(&self) -> &Hook {
        self.hook
    }

    /// Registration name of the plugin receiving the hook
    pub fn plugin_name(&self) -> &str {
        self.plugin_name
    }

    /// Names of all plugins registered on the host, in registration order
    pub fn registered(&self) -> &[String] {
        self.registered
    }

    /// Check whether a sibling plugin is registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.iter().any(|n| n == name)
    }

    // ─── Logging ─────────────────────────────────────────────────────

    /// Log an info message (automatically prefixed with plugin name)
    pub fn log_info(&self, message: &str) {
        tracing::info!(plugin = %self.plugin_name, hook = %self.hook, "{}", message);
    }

    /// Log a warning message
    pub fn log_warn(&self, message: &str) {
        tracing::warn!(plugin = %self.plugin_name, hook = %self.hook, "{}", message);
    }

    /// Log a debug message
    pub fn log_debug(&self, message: &str) {
        tracing::debug!(plugin = %self.plugin_name, hook = %self.hook, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        value: u32,
    }

    #[test]
    fn test_context_accessors() {
        let mut host = Counter { value: 1 };
        let handle = HostHandle::new("counter");
        let hook = Hook::Init;
        let registered = vec!["a".to_string(), "b".to_string()];

        let ctx = HookContext::new(&mut host, &handle, &hook, "a", &registered);

        assert_eq!(ctx.host().value, 1);
        assert_eq!(ctx.handle(), &handle);
        assert_eq!(ctx.hook(), &Hook::Init);
        assert_eq!(ctx.plugin_name(), "a");
        assert_eq!(ctx.registered(), &registered[..]);
    }

    #[test]
    fn test_context_mutates_host() {
        let mut host = Counter { value: 1 };
        let handle = HostHandle::new("counter");
        let hook = Hook::Init;

        {
            let mut ctx = HookContext::new(&mut host, &handle, &hook, "a", &[]);
            ctx.host_mut().value += 41;
        }

        assert_eq!(host.value, 42);
    }

    #[test]
    fn test_is_registered() {
        let mut host = Counter { value: 0 };
        let handle = HostHandle::new("counter");
        let hook = Hook::Custom("ready".into());
        let registered = vec!["audit".to_string()];

        let ctx = HookContext::new(&mut host, &handle, &hook, "audit", &registered);

        assert!(ctx.is_registered("audit"));
        assert!(!ctx.is_registered("metrics"));
    }
}
