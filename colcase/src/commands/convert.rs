use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_config;
use crate::{ops, reports::TerminalOutput};

#[derive(Args, Default)]
pub struct ConvertCommand {
    /// Path to colcase.toml (defaults to the built-in configuration)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the SQL files (overrides base_dir)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Preview replacements without creating backups or writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.config.as_deref(), self.dir.as_deref());

        let mut out = TerminalOutput::new();
        let report = ops::convert(
            &config,
            ops::convert::ConvertOptions {
                dry_run: self.dry_run,
            },
            &mut out,
        )?;

        report.render_summary(&mut out);
        Ok(())
    }
}
