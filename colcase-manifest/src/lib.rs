// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for colcase runs.
//!
//! A [`ConversionConfig`] names the directory to work in, the files to
//! convert and the column table to apply. The built-in defaults can be
//! replaced field by field from a `colcase.toml` file.

mod config;
mod error;
mod parse;

pub use config::{ConversionConfig, DEFAULT_BASE_DIR, DEFAULT_FILES};
pub use error::{Error, Result, SourceContext};
pub use parse::parse_config;
