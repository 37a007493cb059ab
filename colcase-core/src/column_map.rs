//! Ordered camelCase to snake_case column name table.

use indexmap::IndexMap;

/// Built-in column renames, in application order.
pub const BUILTIN_COLUMNS: &[(&str, &str)] = &[
    // Timestamps
    ("createdAt", "created_at"),
    ("updatedAt", "updated_at"),
    ("verifiedAt", "verified_at"),
    // Foreign keys
    ("regionId", "region_id"),
    ("categoryId", "category_id"),
    ("userId", "user_id"),
    ("phenomenonId", "phenomenon_id"),
    ("catatanSurveiId", "catatan_survei_id"),
    ("scrappingBeritaId", "scrapping_berita_id"),
    ("respondenId", "responden_id"),
    // Everything else
    ("isVerified", "is_verified"),
    ("isActive", "is_active"),
    ("regionCode", "region_code"),
    ("analysisType", "analysis_type"),
    ("nomorResponden", "nomor_responden"),
    ("matchCount", "match_count"),
    ("periodeSurvei", "periode_survei"),
    ("startDate", "start_date"),
    ("endDate", "end_date"),
    ("idBerita", "id_berita"),
    ("portalBerita", "portal_berita"),
    ("linkBerita", "link_berita"),
    ("tanggalBerita", "tanggal_berita"),
    ("tanggalScrap", "tanggal_scrap"),
    ("matchedKeywords", "matched_keywords"),
    ("portalUrl", "portal_url"),
    ("maxPages", "max_pages"),
    ("delayMs", "delay_ms"),
    ("cronSchedule", "cron_schedule"),
    ("lastRun", "last_run"),
    ("nextRun", "next_run"),
];

/// An ordered mapping from source column names to their replacements.
///
/// Insertion order is significant: substitution applies pairs one after
/// another, so a later pair sees the output of every earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnNameMap {
    entries: IndexMap<String, String>,
}

impl ColumnNameMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table used when no other mapping is configured.
    pub fn builtin() -> Self {
        BUILTIN_COLUMNS.iter().copied().collect()
    }

    /// Insert a pair, returning the previous target for `source`.
    ///
    /// Re-inserting an existing source keeps its original position.
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(source.into(), target.into())
    }

    /// Look up the replacement for a source column.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// Iterate over `(source, target)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for ColumnNameMap {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (source, target) in iter {
            map.insert(source, target);
        }
        map
    }
}

/// Whether `name` only uses the identifier alphabet `[A-Za-z0-9_]` and is non-empty.
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preserves_order() {
        let map = ColumnNameMap::builtin();
        assert_eq!(map.len(), 31);

        let sources: Vec<&str> = map.iter().map(|(s, _)| s).collect();
        assert_eq!(sources.first(), Some(&"createdAt"));
        assert_eq!(sources.last(), Some(&"nextRun"));
        assert_eq!(map.get("userId"), Some("user_id"));
    }

    #[test]
    fn test_builtin_keys_are_identifiers() {
        for (source, target) in ColumnNameMap::builtin().iter() {
            assert!(is_identifier(source), "{source}");
            assert!(is_identifier(target), "{target}");
            assert_ne!(source, target);
        }
    }

    #[test]
    fn test_insert_existing_keeps_position() {
        let mut map: ColumnNameMap = [("a", "x"), ("b", "y")].into_iter().collect();
        let previous = map.insert("a", "z");

        assert_eq!(previous.as_deref(), Some("x"));
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("a", "z"), ("b", "y")]);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("createdAt"));
        assert!(is_identifier("created_at"));
        assert!(is_identifier("col2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("created-at"));
        assert!(!is_identifier("created at"));
        assert!(!is_identifier("\"createdAt\""));
    }
}
