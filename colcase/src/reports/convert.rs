//! Convert command report data structures.

use std::path::PathBuf;

use colcase_core::FileConversion;

use super::output::{Output, Report};

/// Report data from a conversion run.
#[derive(Debug)]
pub struct ConvertReport {
    /// Whether files were left untouched.
    pub dry_run: bool,
    /// Suffix used for backup files.
    pub backup_suffix: String,
    /// One outcome per configured file, in configured order.
    pub files: Vec<FileOutcome>,
}

/// What happened to a single configured file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was converted (or previewed in dry-run mode).
    Converted(FileConversion),
    /// The file does not exist and was skipped.
    Missing(PathBuf),
}

impl ConvertReport {
    /// Sum of per-file replacement pair counts.
    pub fn total(&self) -> usize {
        self.conversions().map(FileConversion::count).sum()
    }

    /// Number of files that were processed.
    pub fn converted_count(&self) -> usize {
        self.conversions().count()
    }

    fn conversions(&self) -> impl Iterator<Item = &FileConversion> {
        self.files.iter().filter_map(|outcome| match outcome {
            FileOutcome::Converted(conversion) => Some(conversion),
            FileOutcome::Missing(_) => None,
        })
    }
}

impl ConvertReport {
    /// Render the banner printed before any file is processed.
    pub fn render_header(dry_run: bool, out: &mut dyn Output) {
        if dry_run {
            out.title("Previewing column name conversion from camelCase to snake_case (dry run)");
        } else {
            out.title("Starting column name conversion from camelCase to snake_case...");
        }
    }

    /// Render the closing summary once every file has been processed.
    pub fn render_summary(&self, out: &mut dyn Output) {
        out.rule();

        if self.dry_run {
            out.preformatted(&format!(
                "Dry run completed! Replacements that would be made: {}",
                self.total()
            ));
            return;
        }

        out.preformatted(&format!(
            "Conversion completed! Total replacements made: {}",
            self.total()
        ));

        if self.converted_count() > 0 {
            out.newline();
            out.preformatted(&format!(
                "Note: Original files have been backed up with {} extension",
                self.backup_suffix
            ));
            out.preformatted(&format!(
                "You can restore the original files by renaming the {} files if needed",
                self.backup_suffix
            ));
        }
    }
}

impl FileOutcome {
    /// Render the progress lines for one file.
    pub fn render(&self, dry_run: bool, out: &mut dyn Output) {
        match self {
            FileOutcome::Converted(conversion) => render_conversion(conversion, dry_run, out),
            FileOutcome::Missing(path) => {
                out.warning(&format!("File not found: {}", path.display()))
            }
        }
    }
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        Self::render_header(self.dry_run, out);
        for outcome in &self.files {
            outcome.render(self.dry_run, out);
        }
        self.render_summary(out);
    }
}

fn render_conversion(conversion: &FileConversion, dry_run: bool, out: &mut dyn Output) {
    let path = conversion.path.display();

    out.key_value("Processing file", &path.to_string());
    if let Some(backup) = &conversion.backup {
        out.key_value("Created backup", &backup.display().to_string());
    }

    if conversion.replacements.is_empty() {
        out.preformatted(&format!("No replacements needed in {}", path));
    } else {
        let heading = if dry_run {
            "Would replace in"
        } else {
            "Replacements made in"
        };
        out.section(&format!("{} {}", heading, path));
        for replacement in &conversion.replacements {
            out.list_item(&replacement.to_string());
        }
    }

    out.newline();
}
