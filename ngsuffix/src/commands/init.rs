use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use ngsuffix_manifest::{MANIFEST_FILE, WorkspaceFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Workspace directory containing angular.json
    #[arg(short = 'C', long = "dir", default_value = ".")]
    pub dir: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut file = WorkspaceFile::open(self.dir.join(MANIFEST_FILE)).unwrap_or_exit();

        let report = ops::init(&mut file).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
