//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.
//! Long-running operations also stream progress to the Output as they go.

mod check;
mod convert;
mod output;

pub use check::{CheckReport, FileStatus};
pub use convert::{ConvertReport, FileOutcome};
#[cfg(test)]
pub use output::StringOutput;
pub use output::{Output, Report, TerminalOutput};
