//! Identifier case conversion.

use std::sync::LazyLock;

use regex::Regex;

/// Any character followed by a capitalized word, e.g. `PS` + `erver` in `HTTPServer`.
static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid capitalized word pattern"));

/// A lowercase letter or digit directly followed by an uppercase letter.
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid lower/upper pattern"));

/// Convert a camelCase identifier to snake_case (e.g., "createdAt" -> "created_at").
///
/// Acronym runs are kept together: "HTTPServer" becomes "http_server" and
/// "userID" becomes "user_id". Input without uppercase letters is returned
/// unchanged.
///
/// This is a general-purpose helper. File conversion relies on an explicit
/// [`ColumnNameMap`](crate::ColumnNameMap) instead, which may encode names
/// this algorithm would split differently.
pub fn camel_to_snake(name: &str) -> String {
    let split_words = CAPITALIZED_WORD.replace_all(name, "${1}_${2}");
    LOWER_UPPER
        .replace_all(&split_words, "${1}_${2}")
        .to_lowercase()
}
