//! Core conversion engine for colcase.
//!
//! This crate provides the pieces used to rewrite camelCase column names
//! in SQL dump files: a general identifier case converter, the ordered
//! column name table, the whole-identifier substitution fold and the
//! per-file backup/rewrite pipeline.

mod column_map;
mod file;
mod renamer;
mod substitute;
mod utils;

pub use column_map::{BUILTIN_COLUMNS, ColumnNameMap, is_identifier};
pub use file::{DEFAULT_BACKUP_SUFFIX, SourceFile};
pub use renamer::{FileConversion, Renamer};
pub use substitute::{ReplacementRecord, Substitution, substitute};
pub use utils::camel_to_snake;
