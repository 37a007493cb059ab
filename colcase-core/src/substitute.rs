//! Whole-identifier token substitution.

use std::fmt;

use eyre::{Context, Result};
use regex::{NoExpand, Regex};

use crate::ColumnNameMap;

/// A mapping pair that matched at least once in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRecord {
    pub source: String,
    pub target: String,
    /// Number of occurrences replaced.
    pub occurrences: usize,
}

impl fmt::Display for ReplacementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Result of applying a [`ColumnNameMap`] to a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The rewritten document.
    pub content: String,
    /// Pairs that matched, in application order.
    pub replacements: Vec<ReplacementRecord>,
}

impl Substitution {
    /// Number of distinct pairs that produced a replacement.
    pub fn count(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Apply every pair of `columns` to `content`, one after another.
///
/// Each source only matches as a whole identifier: it must not touch a
/// letter, digit or underscore on either side. Matching is case-sensitive.
/// Pairs are folded sequentially over the evolving text, so a target
/// emitted by one pair is visible to every later pair.
pub fn substitute(content: &str, columns: &ColumnNameMap) -> Result<Substitution> {
    let mut content = content.to_string();
    let mut replacements = Vec::new();

    for (source, target) in columns.iter() {
        let pattern = token_pattern(source)?;
        let occurrences = pattern.find_iter(&content).count();
        if occurrences == 0 {
            continue;
        }

        content = pattern.replace_all(&content, NoExpand(target)).into_owned();
        replacements.push(ReplacementRecord {
            source: source.to_string(),
            target: target.to_string(),
            occurrences,
        });
    }

    Ok(Substitution {
        content,
        replacements,
    })
}

fn token_pattern(token: &str) -> Result<Regex> {
    Regex::new(&format!(r"\b{}\b", regex::escape(token)))
        .wrap_err_with(|| format!("Failed to build pattern for '{}'", token))
}
