use crate::core::classifier::PathClassifier;
use crate::domain::models::{FileRecord, ROOT_KEY};
use crate::error::Result;
use crossterm::{
    QueueableCommand, cursor,
    terminal::{Clear, ClearType},
};
use log::{debug, info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// Everything one traversal of a project root produced, in walk order.
#[derive(Debug, Default)]
pub struct Walk {
    /// Keys of every visited (non-pruned) directory.
    pub directories: Vec<String>,
    /// Eligible files paired with the key of their parent directory.
    pub files: Vec<(String, FileRecord)>,
}

impl Walk {
    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().map(|(_, record)| record)
    }
}

// Progress indicator for file scanning, drawn on `out` only when asked to
struct ScanProgress<'w, W: Write> {
    out: &'w mut W,
    enabled: bool,
    start_time: Instant,
    update_interval: Duration,
    last_update: Instant,
    scanned_count: usize,
    matched_count: usize,
}

impl<'w, W: Write> ScanProgress<'w, W> {
    fn new(out: &'w mut W, enabled: bool) -> Self {
        Self {
            out,
            enabled,
            start_time: Instant::now(),
            update_interval: Duration::from_millis(250),
            last_update: Instant::now(),
            scanned_count: 0,
            matched_count: 0,
        }
    }

    fn update(&mut self, matched: bool) {
        self.scanned_count += 1;
        if matched {
            self.matched_count += 1;
        }
        if !self.enabled {
            return;
        }

        let now = Instant::now();
        if now.duration_since(self.last_update) >= self.update_interval {
            self.last_update = now;
            if let Err(err) = self.draw(now) {
                debug!("Progress display disabled: {}", err);
                self.enabled = false;
            }
        }
    }

    fn draw(&mut self, now: Instant) -> io::Result<()> {
        let spinner_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
        let spinner_idx = ((now.duration_since(self.start_time).as_millis() / 100)
            % spinner_chars.len() as u128) as usize;

        self.out.queue(cursor::SavePosition)?;
        self.out.queue(Clear(ClearType::CurrentLine))?;
        write!(
            self.out,
            "{} Scanning files: {} scanned, {} eligible",
            spinner_chars[spinner_idx], self.scanned_count, self.matched_count
        )?;
        self.out.queue(cursor::RestorePosition)?;
        self.out.flush()
    }

    fn finish(&mut self) {
        if self.enabled {
            let cleared = self
                .out
                .queue(Clear(ClearType::CurrentLine))
                .and_then(|out| out.flush());
            if let Err(err) = cleared {
                debug!("Could not clear progress line: {}", err);
            }
        }
        info!(
            "Scan complete: {} files scanned, {} eligible in {:.1}s",
            self.scanned_count,
            self.matched_count,
            self.start_time.elapsed().as_secs_f32()
        );
    }
}

/// Depth-first traversal of `root`. Ignored directories are pruned before
/// descending and ignored files are dropped before their metadata is touched.
pub fn walk(root: &Path, classifier: &PathClassifier) -> Result<Walk> {
    walk_reporting(root, classifier, &mut io::sink(), false)
}

/// [`walk`] that draws a scan spinner on `out` when `draw_progress` is set.
/// Display failures never abort the scan.
pub fn walk_reporting<W: Write>(
    root: &Path,
    classifier: &PathClassifier,
    out: &mut W,
    draw_progress: bool,
) -> Result<Walk> {
    info!("Walking project tree: {}", root.display());
    let mut result = Walk::default();
    let mut progress = ScanProgress::new(out, draw_progress);

    let entries = WalkDir::new(root).into_iter().filter_entry(|e| {
        if e.depth() > 0 && e.file_type().is_dir() {
            let name = e.file_name().to_string_lossy();
            if classifier.is_ignored_dir(&name) {
                debug!("Pruning ignored directory: {}", e.path().display());
                return false;
            }
        }
        true
    });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_dir() {
            result.directories.push(relative_key(root, path));
            continue;
        }
        // A plain file given as root has no directory to list.
        if entry.depth() == 0 || !path.is_file() {
            continue;
        }

        let eligible = !classifier.is_ignored_file(path);
        progress.update(eligible);
        if !eligible {
            continue;
        }

        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(err) => {
                warn!("Could not stat {}: {}", path.display(), err);
                continue;
            }
        };

        let record = FileRecord {
            path: path.to_path_buf(),
            name: entry.file_name().to_string_lossy().to_string(),
            relative_path: relative_path(root, path),
            file_type: classifier.file_type(path),
            size,
        };
        debug!("Found eligible file: {}", record.relative_path);

        let parent = path.parent().unwrap_or(root);
        result.files.push((relative_key(root, parent), record));
    }

    progress.finish();
    info!(
        "Found {} eligible files in {} directories",
        result.files.len(),
        result.directories.len()
    );
    Ok(result)
}

/// `/`-joined path of `path` below `root`.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn relative_key(root: &Path, dir: &Path) -> String {
    let rel = relative_path(root, dir);
    if rel.is_empty() {
        ROOT_KEY.to_string()
    } else {
        rel
    }
}
