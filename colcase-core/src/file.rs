use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Suffix appended to a source file's path to name its backup.
pub const DEFAULT_BACKUP_SUFFIX: &str = ".backup";

/// A text file that is rewritten in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Path of the sibling backup: the source path with `suffix` appended.
    pub fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Copy the file byte-for-byte to its backup path.
    ///
    /// Permissions and access/modification times are carried over. An
    /// existing backup is overwritten. Returns the backup path once it is
    /// confirmed to exist.
    pub fn create_backup(&self, suffix: &str) -> Result<PathBuf> {
        let backup = self.backup_path(suffix);

        fs::copy(&self.path, &backup).wrap_err_with(|| {
            format!(
                "Failed to back up {} to {}",
                self.path.display(),
                backup.display()
            )
        })?;
        copy_times(&self.path, &backup)?;

        if !backup.exists() {
            eyre::bail!("Backup {} was not created", backup.display());
        }

        Ok(backup)
    }

    /// Read the whole file as UTF-8 text.
    pub fn read(&self) -> Result<String> {
        let bytes = fs::read(&self.path)
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))?;
        String::from_utf8(bytes)
            .wrap_err_with(|| format!("{} is not valid UTF-8", self.path.display()))
    }

    /// Overwrite the file with `content`.
    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))
    }
}

fn copy_times(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .wrap_err_with(|| format!("Failed to read metadata of {}", from.display()))?;
    let times = fs::FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);

    // A read-only copy has to be opened for writing to take new timestamps.
    let permissions = metadata.permissions();
    if permissions.readonly() {
        let mut writable = permissions.clone();
        #[allow(clippy::permissions_set_readonly_false)]
        writable.set_readonly(false);
        fs::set_permissions(to, writable)
            .wrap_err_with(|| format!("Failed to make {} writable", to.display()))?;
    }

    fs::File::options()
        .write(true)
        .open(to)
        .and_then(|file| file.set_times(times))
        .wrap_err_with(|| format!("Failed to copy timestamps to {}", to.display()))?;

    if permissions.readonly() {
        fs::set_permissions(to, permissions)
            .wrap_err_with(|| format!("Failed to restore permissions of {}", to.display()))?;
    }
    Ok(())
}
