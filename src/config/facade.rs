//! Loader entry points over the layered sources.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, project_file};
use crate::config::TracegenConfig;
use crate::error::TracegenError;
use config::{Environment, File};
use std::path::Path;
use tracing::debug;

/// Loads `TracegenConfig` from defaults, files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Built-in defaults only.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> TracegenConfig {
        TracegenConfig::default()
    }

    /// Layer defaults, the user-level file, project files under
    /// `project_root` and `TRACEGEN__*` environment variables.
    pub fn load(project_root: &Path) -> Result<TracegenConfig, TracegenError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, project_root)?;
        let builder = builder.add_source(environment());
        Self::finish(builder.build()?)
    }

    /// Defaults overlaid with a single explicit file.
    pub fn load_from_file(path: &Path) -> Result<TracegenConfig, TracegenError> {
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(environment());
        Self::finish(builder.build()?)
    }

    /// Write the default configuration as TOML.
    pub fn write_default(path: &Path) -> Result<(), TracegenError> {
        let text = toml::to_string_pretty(&TracegenConfig::default())
            .map_err(|e| TracegenError::Config(format!("Failed to render config: {}", e)))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    fn finish(config: config::Config) -> Result<TracegenConfig, TracegenError> {
        let config: TracegenConfig = config.try_deserialize()?;
        config.validate()?;
        debug!(seed = ?config.generation.seed, "Configuration loaded");
        Ok(config)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TRACEGEN").separator("__")
}
