//! Host configuration loading for the CLI

use anyhow::{Context, Result};
use hostkit_core::{FactoryCatalog, HostOptions, HostState, PLUGINS_KEY};
use hostkit_plugin_api::Options;
use std::path::{Path, PathBuf};

use crate::feature::{Feature, FeatureExtension};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Plugins a configuration file may name
    pub fn catalog() -> FactoryCatalog<Feature> {
        FactoryCatalog::new().with::<FeatureExtension>(FeatureExtension::NAME)
    }

    /// The configuration used when no file is present, as a document
    pub fn default_document() -> Options {
        <Feature as HostState>::default_options()
            .with_value(PLUGINS_KEY, vec![FeatureExtension::NAME])
    }

    /// Get project config path
    /// Can be overridden with HOSTKIT_PROJECT_CONFIG_DIR env var
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("HOSTKIT_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("host.toml")
        } else {
            PathBuf::from(".hostkit/host.toml")
        }
    }

    /// Load host options.
    ///
    /// An explicit path must exist. Without one, the project config is used
    /// when present; otherwise the feature gets its extension and nothing else.
    pub fn load(explicit: Option<&Path>) -> Result<HostOptions<Feature>> {
        Self::load_from(explicit, &Self::project_config_path())
    }

    fn load_from(explicit: Option<&Path>, project: &Path) -> Result<HostOptions<Feature>> {
        let catalog = Self::catalog();

        if let Some(path) = explicit {
            return catalog
                .load_options(path)
                .with_context(|| format!("Failed to load config from {}", path.display()));
        }

        if project.exists() {
            tracing::debug!(path = %project.display(), "Using project config");
            return catalog
                .load_options(project)
                .with_context(|| format!("Failed to load config from {}", project.display()));
        }

        Ok(HostOptions::new().with_factory::<FeatureExtension>())
    }
}
