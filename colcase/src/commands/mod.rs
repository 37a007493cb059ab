mod check;
mod completions;
mod convert;
mod snake;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use colcase_manifest::ConversionConfig;
use completions::CompletionsCommand;
use convert::ConvertCommand;
use eyre::Result;
use snake::SnakeCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for colcase_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load colcase.toml if given, otherwise the built-in configuration,
/// then apply a base directory override.
pub(crate) fn load_config(config: Option<&Path>, dir: Option<&Path>) -> ConversionConfig {
    let loaded = match config {
        Some(path) => ConversionConfig::from_file(path).unwrap_or_exit(),
        None => ConversionConfig::default(),
    };
    match dir {
        Some(dir) => loaded.with_base_dir(dir),
        None => loaded,
    }
}

#[derive(Parser)]
#[command(name = "colcase")]
#[command(version)]
#[command(about = "Rewrite camelCase column names to snake_case in SQL dump files")]
#[command(
    long_about = "Rewrite camelCase column names to snake_case in SQL dump files.\n\n\
    Without a subcommand, converts the built-in file list with the built-in column table."
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            None => ConvertCommand::default().run(),
            Some(Commands::Convert(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Snake(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Back up and rewrite the configured SQL files
    Convert(ConvertCommand),

    /// Show the configuration and which files would be converted
    Check(CheckCommand),

    /// Convert identifiers to snake_case
    Snake(SnakeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["colcase"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_convert_flags() {
        let cli = Cli::try_parse_from([
            "colcase",
            "convert",
            "--config",
            "colcase.toml",
            "--dir",
            "/dumps",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Convert(cmd)) => {
                assert_eq!(cmd.config.as_deref(), Some(Path::new("colcase.toml")));
                assert_eq!(cmd.dir.as_deref(), Some(Path::new("/dumps")));
                assert!(cmd.dry_run);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_load_config_dir_override() {
        let config = load_config(None, Some(Path::new("/dumps")));

        assert_eq!(config.base_dir, Path::new("/dumps"));
        assert_eq!(config.files, ConversionConfig::default().files);
    }
}
