//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod generate;
mod init;
mod kinds;
mod output;

pub use generate::GenerateReport;
pub use init::InitReport;
pub use kinds::{KindRow, KindsReport};
pub use output::{Report, TerminalOutput};

#[cfg(test)]
pub use output::BufferOutput;
