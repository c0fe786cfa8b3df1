use crate::core::classifier::PathClassifier;
use crate::domain::models::{Category, FileRecord};
use crate::domain::tables::{CONFIG_FILE_NAMES, DATABASE_SCRIPT_SUFFIX, DOCUMENTATION_SUFFIX};
use crate::error::Result;
use crate::infra::file_system::{Walk, walk};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Rules are checked top to bottom; the first hit decides the bucket.
pub fn categorize_path(name: &str, relative_path: &str) -> Category {
    if CONFIG_FILE_NAMES.contains(&name) {
        Category::Configuration
    } else if relative_path.contains("models") {
        Category::DatabaseModels
    } else if relative_path.contains("controllers") {
        Category::Controllers
    } else if relative_path.contains("routes") {
        Category::Routes
    } else if relative_path.contains("middleware") {
        Category::Middleware
    } else if name.ends_with(DOCUMENTATION_SUFFIX) {
        Category::Documentation
    } else if name.ends_with(DATABASE_SCRIPT_SUFFIX) {
        Category::DatabaseScripts
    } else {
        Category::Other
    }
}

/// Display path paired with the on-disk path it was walked from.
pub type BucketEntry = (String, PathBuf);

/// Files per bucket, deduplicated and sorted by relative path.
#[derive(Debug, Default)]
pub struct Categories {
    buckets: BTreeMap<Category, BTreeSet<BucketEntry>>,
}

impl Categories {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a FileRecord>) -> Self {
        let mut categories = Categories::default();
        for record in records {
            categories.insert(record);
        }
        categories
    }

    pub fn from_walk(walk: &Walk) -> Self {
        Self::from_records(walk.records())
    }

    pub fn insert(&mut self, record: &FileRecord) -> Category {
        let category = categorize_path(&record.name, &record.relative_path);
        debug!("{} -> {}", record.relative_path, category.title());
        self.buckets
            .entry(category)
            .or_default()
            .insert((record.relative_path.clone(), record.path.clone()));
        category
    }

    pub fn files(&self, category: Category) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&category)
            .into_iter()
            .flat_map(|entries| entries.iter().map(|(rel_path, _)| rel_path.as_str()))
    }

    /// Non-empty buckets in emission order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &BTreeSet<BucketEntry>)> {
        Category::ALL.into_iter().filter_map(|category| {
            self.buckets
                .get(&category)
                .filter(|paths| !paths.is_empty())
                .map(|paths| (category, paths))
        })
    }

    pub fn file_count(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }
}

pub fn categorize(root: &Path, classifier: &PathClassifier) -> Result<Categories> {
    let walk = walk(root, classifier)?;
    Ok(Categories::from_walk(&walk))
}
