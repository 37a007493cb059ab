use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_config;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to colcase.toml (defaults to the built-in configuration)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing the SQL files (overrides base_dir)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.config.as_deref(), self.dir.as_deref());

        let report = ops::check(&config, self.config.as_deref());
        report.render(&mut TerminalOutput::new());

        if !report.is_ready() {
            std::process::exit(1);
        }
        Ok(())
    }
}
