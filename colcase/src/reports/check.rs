//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from inspecting a configuration.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file, if one was loaded.
    pub config_path: Option<PathBuf>,
    /// Directory the files are resolved against.
    pub base_dir: PathBuf,
    /// Whether the base directory exists.
    pub base_dir_exists: bool,
    /// Configured files, in processing order.
    pub files: Vec<FileStatus>,
    /// Column mappings as `(source, target)`, in application order.
    pub columns: Vec<(String, String)>,
    /// Suffix used for backup files.
    pub backup_suffix: String,
}

/// A configured file and whether it exists.
#[derive(Debug)]
pub struct FileStatus {
    pub path: PathBuf,
    pub exists: bool,
    /// Whether a backup from an earlier run is already present.
    pub has_backup: bool,
}

impl CheckReport {
    /// Whether a conversion run would find its base directory.
    pub fn is_ready(&self) -> bool {
        self.base_dir_exists
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.config_path {
            Some(path) => out.title(&format!("Configuration from {}", path.display())),
            None => out.title("Built-in configuration"),
        }

        out.key_value("Base directory", &self.base_dir.display().to_string());
        out.key_value("Backup suffix", &self.backup_suffix);
        if !self.base_dir_exists {
            out.warning(&format!(
                "Backup directory not found: {}",
                self.base_dir.display()
            ));
        }
        out.newline();

        out.section(&format!("Files ({})", self.files.len()));
        for file in &self.files {
            let status = match (file.exists, file.has_backup) {
                (false, _) => " (missing)",
                (true, true) => " (backup exists, will be overwritten)",
                (true, false) => "",
            };
            out.list_item(&format!("{}{}", file.path.display(), status));
        }
        out.newline();

        out.section(&format!("Column mappings ({})", self.columns.len()));
        for (source, target) in &self.columns {
            out.list_item(&format!("{} -> {}", source, target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::StringOutput;

    #[test]
    fn test_render_check() {
        let report = CheckReport {
            config_path: Some(PathBuf::from("colcase.toml")),
            base_dir: PathBuf::from("/dumps"),
            base_dir_exists: true,
            files: vec![
                FileStatus {
                    path: PathBuf::from("/dumps/users.sql"),
                    exists: true,
                    has_backup: false,
                },
                FileStatus {
                    path: PathBuf::from("/dumps/regions.sql"),
                    exists: true,
                    has_backup: true,
                },
                FileStatus {
                    path: PathBuf::from("/dumps/keywords.sql"),
                    exists: false,
                    has_backup: false,
                },
            ],
            columns: vec![("userId".into(), "user_id".into())],
            backup_suffix: ".backup".into(),
        };

        insta::assert_snapshot!(StringOutput::render(&report), @r"
Configuration from colcase.toml
============================================================
Base directory: /dumps
Backup suffix: .backup

Files (3):
  - /dumps/users.sql
  - /dumps/regions.sql (backup exists, will be overwritten)
  - /dumps/keywords.sql (missing)

Column mappings (1):
  - userId -> user_id
");
    }

    #[test]
    fn test_missing_base_dir_warns() {
        let report = CheckReport {
            config_path: None,
            base_dir: PathBuf::from("/nowhere"),
            base_dir_exists: false,
            files: vec![],
            columns: vec![],
            backup_suffix: ".backup".into(),
        };

        let rendered = StringOutput::render(&report);

        assert!(!report.is_ready());
        assert!(rendered.starts_with("Built-in configuration\n"));
        assert!(rendered.contains("warning: Backup directory not found: /nowhere"));
    }
}
