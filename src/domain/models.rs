use crate::domain::tables::{
    DEFAULT_CLOSING, DEFAULT_OUTPUT_FILE, DEFAULT_OVERVIEW, IGNORED_DIRS, IGNORED_PATTERNS,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key used in a [`DirectoryListing`] for the traversal root itself.
pub const ROOT_KEY: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// On-disk path as walked; used for every stat and read.
    pub path: PathBuf,
    pub name: String,
    /// Path relative to the traversal root, `/` separated. Display only.
    pub relative_path: String,
    pub file_type: &'static str,
    pub size: u64,
}

impl FileRecord {
    pub fn size_kib(&self) -> String {
        format_kib(self.size)
    }
}

pub fn format_kib(bytes: u64) -> String {
    format!("{:.1}", bytes as f64 / 1024.0)
}

pub type DirectoryListing = BTreeMap<String, Vec<FileRecord>>;

pub type TypeCounts = BTreeMap<&'static str, usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Configuration,
    DatabaseModels,
    Controllers,
    Routes,
    Middleware,
    Documentation,
    DatabaseScripts,
    Other,
}

impl Category {
    /// Emission order of the source sections.
    pub const ALL: [Category; 8] = [
        Category::Configuration,
        Category::DatabaseModels,
        Category::Controllers,
        Category::Routes,
        Category::Middleware,
        Category::Documentation,
        Category::DatabaseScripts,
        Category::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Configuration => "Configuration & Setup",
            Category::DatabaseModels => "Database Models",
            Category::Controllers => "Controllers",
            Category::Routes => "Routes",
            Category::Middleware => "Middleware",
            Category::Documentation => "Documentation",
            Category::DatabaseScripts => "Database Scripts",
            Category::Other => "Other Files",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub root_path: PathBuf,
    pub output_path: PathBuf,
    pub overview: String,
    pub closing: String,
    pub ignored_dirs: Vec<String>,
    pub ignored_patterns: Vec<String>,
}

impl ConvertConfig {
    pub fn new(root_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            overview: DEFAULT_OVERVIEW.to_string(),
            closing: DEFAULT_CLOSING.to_string(),
            ignored_dirs: IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignored_patterns: IGNORED_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub files_processed: usize,
    pub type_counts: TypeCounts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kib() {
        assert_eq!(format_kib(0), "0.0");
        assert_eq!(format_kib(1024), "1.0");
        assert_eq!(format_kib(10), "0.0");
        assert_eq!(format_kib(1536), "1.5");
    }

    #[test]
    fn test_category_order() {
        let titles: Vec<&str> = Category::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(titles.first(), Some(&"Configuration & Setup"));
        assert_eq!(titles.last(), Some(&"Other Files"));
        assert_eq!(titles.len(), 8);
    }

    #[test]
    fn test_default_config_uses_fixed_tables() {
        let config = ConvertConfig::new("/project", "out.txt");
        assert_eq!(config.root_path, PathBuf::from("/project"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
        assert!(config.ignored_dirs.iter().any(|d| d == "node_modules"));
        assert!(config.ignored_patterns.iter().any(|p| p == "*.min.js"));
    }
}
