//! Config parsing from files and strings.

use std::{path::Path, str::FromStr};

use colcase_core::{ColumnNameMap, is_identifier};
use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Deserialize;
use toml::Spanned;

use crate::{ConversionConfig, Error, Result, error::SourceContext};

/// On-disk shape of colcase.toml. Missing keys fall back to the defaults.
///
/// Validated values keep their spans so diagnostics point at the parsed
/// key or value rather than at a text match elsewhere in the file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    base_dir: Option<String>,
    files: Option<Spanned<Vec<Spanned<String>>>>,
    backup_suffix: Option<Spanned<String>>,
    columns: Option<IndexMap<Spanned<String>, Spanned<String>>>,
}

impl FromStr for ConversionConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "colcase.toml")
    }
}

impl ConversionConfig {
    /// Load a colcase.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse colcase.toml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<ConversionConfig> {
    let ctx = SourceContext::new(content, filename);
    let raw: RawConfig = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate(&raw, &ctx)?;

    let mut config = ConversionConfig::default();
    if let Some(base_dir) = raw.base_dir {
        config.base_dir = base_dir.into();
    }
    if let Some(files) = raw.files {
        config.files = files.into_inner().into_iter().map(Spanned::into_inner).collect();
    }
    if let Some(suffix) = raw.backup_suffix {
        config.backup_suffix = suffix.into_inner();
    }
    if let Some(columns) = raw.columns {
        config.columns = columns
            .into_iter()
            .map(|(source, target)| (source.into_inner(), target.into_inner()))
            .collect::<ColumnNameMap>();
    }
    Ok(config)
}

fn validate(raw: &RawConfig, ctx: &SourceContext) -> Result<()> {
    if let Some(files) = &raw.files {
        if files.get_ref().is_empty() {
            return Err(ctx.validation_error_at("at least one file is required", span_of(files)));
        }
        for file in files.get_ref() {
            let name = file.get_ref();
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(ctx.validation_error_at(
                    format!("'{}' must be a file name inside base_dir", name),
                    span_of(file),
                ));
            }
        }
    }

    let empty_suffix = raw.backup_suffix.as_ref().filter(|s| s.get_ref().is_empty());
    if let Some(suffix) = empty_suffix {
        return Err(ctx.validation_error_at("backup_suffix cannot be empty", span_of(suffix)));
    }

    if let Some(columns) = &raw.columns {
        for (source, target) in columns {
            if !is_identifier(source.get_ref()) {
                return Err(ctx.invalid_identifier_error(
                    source.get_ref(),
                    "source column",
                    Some(span_of(source)),
                ));
            }
            if !is_identifier(target.get_ref()) {
                return Err(ctx.invalid_identifier_error(
                    target.get_ref(),
                    "target column",
                    Some(span_of(target)),
                ));
            }
        }
    }

    Ok(())
}

fn span_of<T>(value: &Spanned<T>) -> SourceSpan {
    SourceSpan::from(value.span())
}
