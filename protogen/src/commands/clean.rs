use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::ConfigArgs,
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let settings = self.config.load();
        let report = ops::clean(&settings).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
