use clap::Args;
use eyre::Result;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct KindsCommand {}

impl KindsCommand {
    pub fn run(&self) -> Result<()> {
        ops::kinds().render(&mut TerminalOutput::new());
        Ok(())
    }
}
