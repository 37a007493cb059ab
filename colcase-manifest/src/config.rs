use std::path::PathBuf;

use colcase_core::{ColumnNameMap, DEFAULT_BACKUP_SUFFIX};

/// Directory holding the data-only backup dumps.
pub const DEFAULT_BASE_DIR: &str = r"C:\Dev\Fenomena Project\backup-data-only";

/// Dump files converted by default, in processing order.
pub const DEFAULT_FILES: &[&str] = &[
    "04-data-users-01.sql",
    "05-data-regions-01.sql",
    "06-data-categories-01.sql",
    "09-data-keywords-01.sql",
    "11-data-schedules-01.sql",
];

/// Everything a conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Directory the file names are resolved against.
    pub base_dir: PathBuf,
    /// File names, processed in order.
    pub files: Vec<String>,
    /// Column renames, applied in order.
    pub columns: ColumnNameMap,
    /// Appended to each file path to name its backup.
    pub backup_suffix: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            files: DEFAULT_FILES.iter().map(|f| f.to_string()).collect(),
            columns: ColumnNameMap::builtin(),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

impl ConversionConfig {
    /// Replace the base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Absolute paths of the configured files, in order.
    pub fn file_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|name| self.base_dir.join(name))
    }
}
