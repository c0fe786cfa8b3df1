use crate::core::classifier::PathClassifier;
use crate::domain::models::{DirectoryListing, FileRecord, TypeCounts};
use crate::error::Result;
use crate::infra::file_system::{Walk, walk};
use log::debug;
use std::path::Path;

#[derive(Debug, Default)]
pub struct Structure {
    pub listing: DirectoryListing,
    pub counts: TypeCounts,
}

impl Structure {
    /// Every visited directory gets a key, even when it holds no eligible files.
    pub fn from_walk(walk: &Walk) -> Self {
        let mut structure = Structure::default();

        for dir in &walk.directories {
            structure.listing.entry(dir.clone()).or_default();
        }
        for (dir, record) in &walk.files {
            structure
                .listing
                .entry(dir.clone())
                .or_default()
                .push(record.clone());
            *structure.counts.entry(record.file_type).or_insert(0) += 1;
        }

        debug!(
            "Structure has {} directories and {} type labels",
            structure.listing.len(),
            structure.counts.len()
        );
        structure
    }

    pub fn total_files(&self) -> usize {
        self.counts.values().sum()
    }

    /// Directories holding at least one eligible file, files sorted by name.
    pub fn non_empty_directories(&self) -> impl Iterator<Item = (&str, Vec<&FileRecord>)> {
        self.listing
            .iter()
            .filter(|(_, files)| !files.is_empty())
            .map(|(dir, files)| {
                let mut sorted: Vec<_> = files.iter().collect();
                sorted.sort_by(|a, b| a.name.cmp(&b.name));
                (dir.as_str(), sorted)
            })
    }
}

pub fn analyze_structure(root: &Path, classifier: &PathClassifier) -> Result<Structure> {
    let walk = walk(root, classifier)?;
    Ok(Structure::from_walk(&walk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tables::{IGNORED_DIRS, IGNORED_PATTERNS};
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn classifier() -> PathClassifier {
        PathClassifier::new(IGNORED_DIRS, IGNORED_PATTERNS).unwrap()
    }

    #[test]
    fn test_analyze_structure() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "app.js", "console;\n");
        touch(temp_dir.path(), "models/user.js", "x");
        touch(temp_dir.path(), "README.md", "# readme");
        touch(temp_dir.path(), "node_modules/x/y.js", "x");

        let structure = analyze_structure(temp_dir.path(), &classifier()).unwrap();

        assert_eq!(structure.counts.get("JavaScript"), Some(&2));
        assert_eq!(structure.counts.get("Markdown"), Some(&1));
        assert_eq!(structure.counts.len(), 2);
        assert_eq!(structure.total_files(), 3);

        let root_files: Vec<&str> = structure.listing["root"]
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(root_files.len(), 2);
        assert!(root_files.contains(&"app.js"));
        assert!(root_files.contains(&"README.md"));
        assert!(!structure.listing.keys().any(|k| k.contains("node_modules")));
    }

    #[test]
    fn test_empty_directories_keep_their_key() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "src/main.rs", "fn main() {}");
        fs::create_dir_all(temp_dir.path().join("docs")).unwrap();
        touch(temp_dir.path(), "assets/logo.png", "png");

        let structure = analyze_structure(temp_dir.path(), &classifier()).unwrap();

        assert_eq!(structure.listing.get("docs").map(Vec::len), Some(0));
        assert_eq!(structure.listing.get("assets").map(Vec::len), Some(0));

        let shown: Vec<&str> = structure.non_empty_directories().map(|(d, _)| d).collect();
        assert_eq!(shown, vec!["src"]);
    }

    #[test]
    fn test_non_empty_directories_sorted() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "zeta.txt", "z");
        touch(temp_dir.path(), "alpha.txt", "a");
        touch(temp_dir.path(), "routes/b.js", "b");

        let structure = analyze_structure(temp_dir.path(), &classifier()).unwrap();
        let dirs: Vec<(&str, Vec<&str>)> = structure
            .non_empty_directories()
            .map(|(d, files)| (d, files.iter().map(|f| f.name.as_str()).collect()))
            .collect();

        assert_eq!(
            dirs,
            vec![
                ("root", vec!["alpha.txt", "zeta.txt"]),
                ("routes", vec!["b.js"]),
            ]
        );
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let structure = analyze_structure(temp_dir.path(), &classifier()).unwrap();
        assert!(structure.counts.is_empty());
        assert_eq!(structure.total_files(), 0);
        assert_eq!(structure.non_empty_directories().count(), 0);
    }
}
