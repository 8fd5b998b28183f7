pub mod config;
pub mod plugins;
pub mod run;

use anyhow::Result;
use hostkit_core::Host;
use std::path::Path;

use crate::config::ConfigLoader;
use crate::feature::Feature;

/// Build the feature host from configuration
pub(crate) fn build_host(config: Option<&Path>, no_extension: bool) -> Result<Host<Feature>> {
    let mut options = ConfigLoader::load(config)?;
    if no_extension {
        options.plugins.clear();
    }

    let host = Host::build(Feature::new(), options)?;
    tracing::debug!(host = %host.handle(), plugins = host.plugin_count(), "Host ready");
    Ok(host)
}
