//! Per-file conversion pipeline.

use std::path::{Path, PathBuf};

use eyre::Result;

use crate::{ColumnNameMap, DEFAULT_BACKUP_SUFFIX, ReplacementRecord, SourceFile, substitute};

/// Rewrites files using a [`ColumnNameMap`].
///
/// Each conversion backs the file up, rewrites its content in memory and
/// overwrites the original. There is no rollback: a failure after the
/// backup leaves the backup in place next to an unmodified or partially
/// written original.
#[derive(Debug, Clone)]
pub struct Renamer<'a> {
    columns: &'a ColumnNameMap,
    backup_suffix: &'a str,
    dry_run: bool,
}

/// Outcome of converting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConversion {
    /// The converted file.
    pub path: PathBuf,
    /// Backup written before the file was modified (`None` in dry-run mode).
    pub backup: Option<PathBuf>,
    /// Pairs that matched, in application order.
    pub replacements: Vec<ReplacementRecord>,
}

impl FileConversion {
    /// Number of distinct pairs that produced a replacement.
    pub fn count(&self) -> usize {
        self.replacements.len()
    }
}

impl<'a> Renamer<'a> {
    pub fn new(columns: &'a ColumnNameMap) -> Self {
        Self {
            columns,
            backup_suffix: DEFAULT_BACKUP_SUFFIX,
            dry_run: false,
        }
    }

    /// Use a different suffix for backup files.
    pub fn backup_suffix(mut self, suffix: &'a str) -> Self {
        self.backup_suffix = suffix;
        self
    }

    /// Report what would change without creating backups or writing files.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Convert a single file.
    ///
    /// The backup is created (and confirmed) before the file is read, so no
    /// mutation happens unless the copy succeeded. The original is always
    /// rewritten, even when nothing matched.
    pub fn convert(&self, path: impl AsRef<Path>) -> Result<FileConversion> {
        let file = SourceFile::new(path.as_ref());

        let backup = if self.dry_run {
            None
        } else {
            Some(file.create_backup(self.backup_suffix)?)
        };

        let content = file.read()?;
        let result = substitute(&content, self.columns)?;

        if !self.dry_run {
            file.write(&result.content)?;
        }

        Ok(FileConversion {
            path: file.path().to_path_buf(),
            backup,
            replacements: result.replacements,
        })
    }
}
