use crate::domain::tables::{TYPE_LABELS, UNKNOWN_TYPE};
use crate::error::{ConvertError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, trace};
use std::collections::HashSet;
use std::path::Path;

/// Decides which directories and files are skipped and labels the rest.
#[derive(Debug)]
pub struct PathClassifier {
    ignored_dirs: HashSet<String>,
    ignored_files: GlobSet,
}

impl PathClassifier {
    pub fn new<D, P>(ignored_dirs: &[D], ignored_patterns: &[P]) -> Result<Self>
    where
        D: AsRef<str>,
        P: AsRef<str>,
    {
        Ok(Self {
            ignored_dirs: ignored_dirs.iter().map(|d| d.as_ref().to_string()).collect(),
            ignored_files: build_glob_set(ignored_patterns)?,
        })
    }

    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }

    /// A pattern hit on either the bare file name or the full path is enough.
    pub fn is_ignored_file(&self, path: &Path) -> bool {
        let name_match = path
            .file_name()
            .map(|name| self.ignored_files.is_match(Path::new(name)))
            .unwrap_or(false);

        let ignored = name_match || self.ignored_files.is_match(path);
        if ignored {
            debug!("Ignoring file by pattern: {}", path.display());
        }
        ignored
    }

    pub fn file_type(&self, path: &Path) -> &'static str {
        file_type(path)
    }
}

pub fn file_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return UNKNOWN_TYPE;
    };
    let ext = ext.to_lowercase();

    TYPE_LABELS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_TYPE)
}

fn build_glob_set<P: AsRef<str>>(patterns: &[P]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref().trim();
        let glob = Glob::new(pattern).map_err(|source| ConvertError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        trace!("Adding ignore pattern: {}", pattern);
        builder.add(glob);
    }
    builder.build().map_err(|source| ConvertError::InvalidPattern {
        pattern: patterns
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })
}
