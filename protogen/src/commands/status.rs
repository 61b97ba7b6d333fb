use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::ConfigArgs,
};

#[derive(Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl StatusCommand {
    pub fn run(&self) -> Result<()> {
        let settings = self.config.load();
        let report = ops::status(&settings);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
