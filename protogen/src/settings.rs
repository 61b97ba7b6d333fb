//! Effective settings: `protogen.toml` with command-line overrides applied.

use std::path::{Path, PathBuf};

use clap::Args;
use protogen_codegen::GeneratorOptions;
use protogen_core::Version;
use protogen_schema::ProjectConfig;

use crate::commands::UnwrapOrExit;

/// Arguments shared by every command that reads `protogen.toml`.
#[derive(Args)]
pub struct ConfigArgs {
    /// Path to protogen.toml (defaults to ./protogen.toml)
    #[arg(short, long, default_value = "protogen.toml")]
    pub config: PathBuf,

    /// Registry file (defaults to <output>/protogen-registry.toml)
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

/// Everything a run needs, resolved.
#[derive(Debug, Clone)]
pub struct Settings {
    pub schema: PathBuf,
    pub output: PathBuf,
    pub registry: PathBuf,
    pub producer_version: Version,
    pub options: GeneratorOptions,
}

impl ConfigArgs {
    /// Load the config file; a missing file means defaults.
    ///
    /// Relative paths in the file are taken relative to the file itself.
    pub fn load(&self) -> Settings {
        let config = ProjectConfig::from_file_or_default(&self.config).unwrap_or_exit();
        let base = self
            .config
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let generator = &config.generator;

        let output = base.join(&generator.output);
        let registry = match &self.registry {
            Some(path) => path.clone(),
            None => base.join(generator.registry_path()),
        };

        Settings {
            schema: base.join(&generator.schema),
            output,
            registry,
            producer_version: generator.producer_version.clone(),
            options: GeneratorOptions::from_config(&config),
        }
    }
}

impl Settings {
    /// Point output somewhere else, moving the default registry along with it.
    pub fn with_output(mut self, output: PathBuf, registry_overridden: bool) -> Self {
        if !registry_overridden && self.registry == self.output.join("protogen-registry.toml") {
            self.registry = output.join("protogen-registry.toml");
        }
        self.output = output;
        self
    }
}
