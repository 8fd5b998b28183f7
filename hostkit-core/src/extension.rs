//! Extension points - explicit interception hooks on a host

use std::fmt;

type Callback<T> = Box<dyn Fn(&mut T)>;

/// A named, ordered list of callbacks a host method runs before (or after)
/// doing its own work.
///
/// Plugins push callbacks from their hooks; the host method consults the
/// extension point instead of being replaced.
pub struct ExtensionPoint<T: ?Sized> {
    name: String,
    callbacks: Vec<(String, Callback<T>)>,
}

impl<T: ?Sized> ExtensionPoint<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            callbacks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a labelled callback; callbacks run in push order
    pub fn push(&mut self, label: impl Into<String>, callback: impl Fn(&mut T) + 'static) {
        let label = label.into();
        tracing::debug!(extension = %self.name, label = %label, "Callback added");
        self.callbacks.push((label, Box::new(callback)));
    }

    /// Run every callback against `target`
    pub fn run(&self, target: &mut T) {
        for (_, callback) in &self.callbacks {
            callback(target);
        }
    }

    /// Labels of the registered callbacks, in run order
    pub fn labels(&self) -> Vec<&str> {
        self.callbacks.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for ExtensionPoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionPoint")
            .field("name", &self.name)
            .field("callbacks", &self.labels())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_is_noop() {
        let point = ExtensionPoint::<Vec<String>>::new("before-do");
        let mut log = Vec::new();
        point.run(&mut log);

        assert!(log.is_empty());
        assert!(point.is_empty());
        assert_eq!(point.name(), "before-do");
    }

    #[test]
    fn test_callbacks_run_in_push_order() {
        let mut point = ExtensionPoint::<Vec<String>>::new("before-do");
        point.push("first", |log: &mut Vec<String>| log.push("one".into()));
        point.push("second", |log: &mut Vec<String>| log.push("two".into()));

        let mut log = Vec::new();
        point.run(&mut log);
        point.run(&mut log);

        assert_eq!(log, vec!["one", "two", "one", "two"]);
        assert_eq!(point.labels(), vec!["first", "second"]);
        assert_eq!(point.len(), 2);
    }

    #[test]
    fn test_debug_lists_labels() {
        let mut point = ExtensionPoint::<u32>::new("count");
        point.push("bump", |n: &mut u32| *n += 1);

        let debug = format!("{:?}", point);
        assert!(debug.contains("count"));
        assert!(debug.contains("bump"));
    }
}
