//! Check operation - inspect a configuration without touching files.

use std::path::Path;

use colcase_core::SourceFile;
use colcase_manifest::ConversionConfig;

use crate::reports::{CheckReport, FileStatus};

/// Execute the check operation.
///
/// Resolves every configured file and reports which ones exist.
pub fn check(config: &ConversionConfig, config_path: Option<&Path>) -> CheckReport {
    let files = config
        .file_paths()
        .map(|path| {
            let file = SourceFile::new(path);
            FileStatus {
                exists: file.exists(),
                has_backup: file.backup_path(&config.backup_suffix).exists(),
                path: file.path().to_path_buf(),
            }
        })
        .collect();

    CheckReport {
        config_path: config_path.map(Path::to_path_buf),
        base_dir: config.base_dir.clone(),
        base_dir_exists: config.base_dir.is_dir(),
        files,
        columns: config
            .columns
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect(),
        backup_suffix: config.backup_suffix.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_reports_file_status() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.sql"), "").unwrap();
        fs::write(temp.path().join("b.sql"), "").unwrap();
        fs::write(temp.path().join("b.sql.backup"), "").unwrap();

        let config = ConversionConfig {
            files: vec!["a.sql".into(), "b.sql".into(), "c.sql".into()],
            ..Default::default()
        }
        .with_base_dir(temp.path());

        let report = check(&config, None);

        assert!(report.is_ready());
        let status: Vec<(bool, bool)> = report
            .files
            .iter()
            .map(|f| (f.exists, f.has_backup))
            .collect();
        assert_eq!(status, vec![(true, false), (true, true), (false, false)]);
        assert_eq!(report.columns.len(), 31);
    }

    #[test]
    fn test_check_missing_base_dir() {
        let temp = TempDir::new().unwrap();
        let config = ConversionConfig::default().with_base_dir(temp.path().join("missing"));

        let report = check(&config, None);

        assert!(!report.is_ready());
        assert!(report.files.iter().all(|f| !f.exists));
    }
}
