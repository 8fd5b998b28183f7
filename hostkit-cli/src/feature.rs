//! The demo host: a feature whose `do_it` plugins can extend

use hostkit_core::{ExtensionPoint, Host, HostState};
use hostkit_plugin_api::{
    Capability, Hook, HookContext, HostCapabilities, Options, Plugin, PluginBase, PluginError,
    PluginOptions,
};

/// Capability of a host that runs `before-do` callbacks
pub const BEFORE_DO: &str = "before-do";

/// Option holding the line the feature prints
pub const GREETING_KEY: &str = "greeting";

/// Option holding the line the extension prints
pub const MESSAGE_KEY: &str = "message";

pub const DEFAULT_GREETING: &str = "your feature does something";

/// A feature that does something, with an extension point in front of it
pub struct Feature {
    transcript: Vec<String>,
    before_do: ExtensionPoint<Vec<String>>,
}

impl Feature {
    pub fn new() -> Self {
        Self {
            transcript: Vec::new(),
            before_do: ExtensionPoint::new(BEFORE_DO),
        }
    }

    /// Run the `before-do` callbacks, then do the feature's own work
    pub fn do_it(&mut self, greeting: &str) {
        self.before_do.run(&mut self.transcript);
        self.transcript.push(greeting.to_string());
    }

    /// Lines produced so far
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn before_do(&self) -> &ExtensionPoint<Vec<String>> {
        &self.before_do
    }

    pub fn before_do_mut(&mut self) -> &mut ExtensionPoint<Vec<String>> {
        &mut self.before_do
    }
}

impl Default for Feature {
    fn default() -> Self {
        Self::new()
    }
}

impl HostCapabilities for Feature {
    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::new(BEFORE_DO)]
    }
}

impl HostState for Feature {
    fn host_name(&self) -> &str {
        "feature"
    }

    fn default_options() -> Options {
        Options::new().with_value(GREETING_KEY, DEFAULT_GREETING)
    }
}

/// Call the feature once, using the greeting from the host options
pub fn run_feature(host: &mut Host<Feature>) -> &[String] {
    let greeting = host
        .options()
        .get::<String>(GREETING_KEY)
        .unwrap_or_else(|| DEFAULT_GREETING.to_string());
    host.state_mut().do_it(&greeting);
    host.state().transcript()
}

/// Extension that makes the feature announce itself before doing anything
pub struct FeatureExtension {
    base: PluginBase,
}

impl FeatureExtension {
    pub const NAME: &'static str = "feature-extension";

    pub fn new(partial: PluginOptions) -> Self {
        Self {
            base: PluginBase::new(Self::configure(partial)),
        }
    }
}

impl Default for FeatureExtension {
    fn default() -> Self {
        Self::new(PluginOptions::new())
    }
}

impl Plugin<Feature> for FeatureExtension {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn base(&self) -> &PluginBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut PluginBase {
        &mut self.base
    }

    fn default_options() -> PluginOptions {
        PluginOptions::new().with_value(
            MESSAGE_KEY,
            "Your plugin does something before your feature does",
        )
    }

    fn hooks(&self) -> Vec<Hook> {
        vec![Hook::Init]
    }

    fn required_capabilities(&self) -> Vec<Capability> {
        vec![Capability::new(BEFORE_DO)]
    }

    fn init(&mut self, ctx: &mut HookContext<'_, Feature>) -> Result<(), PluginError> {
        let message: String = self
            .options()
            .get(MESSAGE_KEY)
            .ok_or_else(|| PluginError::config(format!("'{MESSAGE_KEY}' must be a string")))?;

        ctx.host_mut()
            .before_do_mut()
            .push(Self::NAME, move |transcript: &mut Vec<String>| {
                transcript.push(message.clone())
            });

        ctx.log_info("Your feature has been extended");
        ctx.log_info("FeatureExtension.init()");
        Ok(())
    }
}
