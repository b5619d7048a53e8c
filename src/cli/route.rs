//! CLI route: single route table and run context.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{format_forest_json, format_forest_text, format_paths_text};
use crate::config::{ConfigLoader, TracegenConfig};
use crate::demo::demo_program;
use crate::error::TracegenError;
use crate::generation::Runner;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: resolved configuration and runner.
pub struct RunContext {
    project_root: PathBuf,
    config: TracegenConfig,
}

impl RunContext {
    /// Load configuration from `config_path` when given, otherwise from the
    /// layered sources under `project_root`.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, TracegenError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&project_root)?,
        };
        Ok(Self {
            project_root,
            config,
        })
    }

    /// Build directly from an already-resolved configuration.
    pub fn from_config(project_root: PathBuf, config: TracegenConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Apply command-line overrides for seed and clock delta.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        clock_delta_ms: Option<u64>,
    ) -> Result<Self, TracegenError> {
        if let Some(seed) = seed {
            self.config.generation.seed = Some(seed);
        }
        if let Some(delta) = clock_delta_ms {
            self.config.generation.clock_delta_ms = delta;
        }
        self.config.validate()?;
        Ok(self)
    }

    pub fn config(&self) -> &TracegenConfig {
        &self.config
    }

    fn runner(&self) -> Runner {
        Runner::from_config(&self.config.generation)
    }

    /// Execute a command, returning the text to print.
    pub fn execute(&self, command: &Commands) -> Result<String, TracegenError> {
        match command {
            Commands::Demo {
                steps,
                alternatives,
                format,
            } => {
                let forest = self
                    .runner()
                    .run_forest(demo_program(*steps, *alternatives));
                info!(roots = forest.len(), "Demo forest generated");
                match format {
                    OutputFormat::Text => Ok(format_forest_text(&forest)),
                    OutputFormat::Json => format_forest_json(&forest),
                }
            }
            Commands::Paths {
                steps,
                alternatives,
            } => {
                let forest = self
                    .runner()
                    .run_forest(demo_program(*steps, *alternatives));
                Ok(format_paths_text(&forest))
            }
            Commands::InitConfig { path, force } => {
                let path = path
                    .clone()
                    .unwrap_or_else(|| self.project_root.join("config").join("config.toml"));
                if path.exists() && !force {
                    return Err(TracegenError::Config(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                ConfigLoader::write_default(&path)?;
                Ok(format!("Wrote default configuration to {}", path.display()))
            }
        }
    }
}
