use std::collections::BTreeSet;
use std::path::Path;

/// Extensions that never hold DICOM data and are skipped before sniffing.
pub const DEFAULT_SKIP_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "gif", "txt", "json", "xml", "csv", "zip"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Lower-case extensions without the leading dot.
    pub skip_extensions: BTreeSet<String>,
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            skip_extensions: DEFAULT_SKIP_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    /// Replaces the skip-list. Entries may be given with or without a dot,
    /// in any case.
    pub fn with_skip_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skip_extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn is_skipped(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.skip_extensions.contains(&ext.to_lowercase()))
            .unwrap_or(false)
    }
}
