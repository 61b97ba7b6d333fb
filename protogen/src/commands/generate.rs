use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use protogen_core::Version;
use protogen_schema::SchemaTree;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::ConfigArgs,
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Schema tree JSON (overrides [generator].schema)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Output directory (overrides [generator].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Producer version X.Y.Z (overrides [generator].producer_version)
    #[arg(long)]
    pub producer_version: Option<Version>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let mut settings = self.config.load();
        if let Some(output) = &self.output {
            settings = settings.with_output(output.clone(), self.config.registry.is_some());
        }
        if let Some(schema) = &self.schema {
            settings.schema = schema.clone();
        }
        if let Some(version) = &self.producer_version {
            settings.producer_version = version.clone();
        }

        let tree = SchemaTree::from_file(&settings.schema).unwrap_or_exit();
        let report = if self.dry_run {
            ops::preview(&tree, &settings).unwrap_or_exit()
        } else {
            ops::generate(&tree, &settings).unwrap_or_exit()
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
