//! Convert operation - rewrite the configured files.

use colcase_core::Renamer;
use colcase_manifest::ConversionConfig;
use eyre::{Context, Result};

use crate::reports::{ConvertReport, FileOutcome, Output};

/// Options for the convert operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertOptions {
    /// Whether to preview without creating backups or writing files.
    pub dry_run: bool,
}

/// Execute the convert operation.
///
/// Files are processed one at a time in configured order, and each file's
/// progress is rendered to `out` as soon as it is done. A missing file is
/// recorded and skipped. Any other failure stops the run immediately; files
/// converted before it stay converted and their progress is already on `out`.
/// The summary is left to the caller.
pub fn convert(
    config: &ConversionConfig,
    opts: ConvertOptions,
    out: &mut dyn Output,
) -> Result<ConvertReport> {
    if !config.base_dir.is_dir() {
        eyre::bail!("Backup directory not found: {}", config.base_dir.display());
    }

    ConvertReport::render_header(opts.dry_run, out);

    let renamer = Renamer::new(&config.columns)
        .backup_suffix(&config.backup_suffix)
        .dry_run(opts.dry_run);

    let mut files = Vec::with_capacity(config.files.len());
    for path in config.file_paths() {
        let outcome = if path.exists() {
            let conversion = renamer
                .convert(&path)
                .wrap_err_with(|| format!("Failed to convert {}", path.display()))?;
            FileOutcome::Converted(conversion)
        } else {
            FileOutcome::Missing(path)
        };

        outcome.render(opts.dry_run, out);
        files.push(outcome);
    }

    Ok(ConvertReport {
        dry_run: opts.dry_run,
        backup_suffix: config.backup_suffix.clone(),
        files,
    })
}
