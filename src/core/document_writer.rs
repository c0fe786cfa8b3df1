use crate::core::categorizer::Categories;
use crate::core::classifier::{PathClassifier, file_type};
use crate::core::structure::Structure;
use crate::domain::models::{ConversionReport, ConvertConfig, format_kib};
use crate::error::ConvertError;
use crate::infra::console;
use crate::infra::file_system::{Walk, walk_reporting};
use crate::infra::output::OutputFile;
use crate::infra::text_reader::TextReader;
use anyhow::Context;
use chrono::Local;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Component, Path, PathBuf};

pub const EMPTY_CONTENT_MARKER: &str = "[Empty file or could not read content]";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the single annotated document for one project root.
pub struct DocumentWriter<'a> {
    config: &'a ConvertConfig,
    reader: TextReader,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self {
            config,
            reader: TextReader::default(),
        }
    }

    pub fn with_reader(mut self, reader: TextReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn render<W: Write>(&self, out: &mut W, walk: &Walk) -> io::Result<ConversionReport> {
        let structure = Structure::from_walk(walk);
        let categories = Categories::from_walk(walk);
        debug!(
            "Rendering {} files from {} directories",
            categories.file_count(),
            structure.listing.len()
        );

        self.write_header(out)?;
        self.write_overview(out)?;
        write_statistics(out, &structure)?;
        write_directory_tree(out, &structure)?;
        let files_processed = self.write_sources(out, &categories)?;
        self.write_summary(out, files_processed)?;

        Ok(ConversionReport {
            files_processed,
            type_counts: structure.counts,
        })
    }

    fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let root = display_root(&self.config.root_path);

        writeln!(out, "{}", "=".repeat(80))?;
        writeln!(out, "CODEBASE DOCUMENTATION FOR NOTEBOOKLM")?;
        writeln!(out, "{}", "=".repeat(80))?;
        writeln!(out, "Generated on: {}", timestamp())?;
        writeln!(out, "Project root: {}", root.display())?;
        writeln!(out, "{}\n", "=".repeat(80))
    }

    fn write_overview<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "PROJECT OVERVIEW")?;
        writeln!(out, "{}", "-".repeat(40))?;
        writeln!(out, "{}\n", self.config.overview.trim_end())
    }

    fn write_sources<W: Write>(&self, out: &mut W, categories: &Categories) -> io::Result<usize> {
        writeln!(out, "\n{}", "=".repeat(80))?;
        writeln!(out, "COMPLETE SOURCE CODE")?;
        writeln!(out, "{}\n", "=".repeat(80))?;

        let mut processed = 0;
        for (category, paths) in categories.non_empty() {
            debug!("Writing {} files for {}", paths.len(), category.title());
            write!(
                out,
                "\n{bar} {} {bar}\n\n",
                category.title().to_uppercase(),
                bar = "=".repeat(20)
            )?;

            for (rel_path, path) in paths {
                if self.write_source_file(out, rel_path, path)? {
                    processed += 1;
                }
            }
        }
        Ok(processed)
    }

    /// Returns `false` when the file disappeared after the scan.
    fn write_source_file<W: Write>(
        &self,
        out: &mut W,
        rel_path: &str,
        full_path: &Path,
    ) -> io::Result<bool> {
        let size = match fs::metadata(full_path) {
            Ok(meta) if meta.is_file() => meta.len(),
            _ => {
                warn!("Skipping {}: no longer present", full_path.display());
                return Ok(false);
            }
        };

        let separator = "─".repeat(60);
        writeln!(out, "\n{}", separator)?;
        writeln!(out, "FILE: {}", rel_path)?;
        writeln!(out, "TYPE: {}", file_type(full_path))?;
        writeln!(out, "SIZE: {} bytes ({} KB)", size, format_kib(size))?;
        writeln!(out, "{}\n", separator)?;

        let content = self.reader.read(full_path);
        if content.trim().is_empty() {
            writeln!(out, "{}\n", EMPTY_CONTENT_MARKER)?;
        } else {
            write!(out, "{}\n\n", content)?;
        }
        Ok(true)
    }

    fn write_summary<W: Write>(&self, out: &mut W, files_processed: usize) -> io::Result<()> {
        writeln!(out, "\n{}", "=".repeat(80))?;
        writeln!(out, "SUMMARY")?;
        writeln!(out, "{}", "=".repeat(80))?;
        writeln!(out, "Total files processed: {}", files_processed)?;
        writeln!(out, "Generated on: {}", timestamp())?;
        writeln!(out, "\n{}", self.config.closing.trim_end())
    }
}

fn write_statistics<W: Write>(out: &mut W, structure: &Structure) -> io::Result<()> {
    writeln!(out, "FILE STATISTICS")?;
    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(out, "Total files processed: {}\n", structure.total_files())?;

    for (file_type, count) in &structure.counts {
        writeln!(out, "{:<20}: {:>3} files", file_type, count)?;
    }
    writeln!(out)
}

fn write_directory_tree<W: Write>(out: &mut W, structure: &Structure) -> io::Result<()> {
    writeln!(out, "DIRECTORY STRUCTURE")?;
    writeln!(out, "{}", "-".repeat(40))?;

    for (dir, files) in structure.non_empty_directories() {
        writeln!(out, "📁 {}/", dir)?;
        for file in files {
            writeln!(
                out,
                "   📄 {} ({}, {} KB)",
                file.name,
                file.file_type,
                file.size_kib()
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Absolute form of `root` with `.` and `..` folded away, for the banner.
fn display_root(root: &Path) -> PathBuf {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// A previous run's output sitting inside the root must not document itself.
fn skip_output_file(walk: &mut Walk, output_path: &Path) {
    let Ok(output) = std::path::absolute(output_path) else {
        return;
    };
    walk.files.retain(|(_, record)| {
        let keep = std::path::absolute(&record.path)
            .map(|path| path != output)
            .unwrap_or(true);
        if !keep {
            debug!("Leaving output file out of the document: {}", record.relative_path);
        }
        keep
    });
}

/// Scans `config.root_path` once and writes the document to `config.output_path`.
///
/// A missing root fails before the output file is created. Once writing has
/// started, a failure leaves the partial document on disk.
pub fn convert<W: Write>(config: &ConvertConfig, out: &mut W) -> anyhow::Result<ConversionReport> {
    let root: &Path = &config.root_path;
    if !root.exists() {
        return Err(ConvertError::MissingRoot(root.to_path_buf()).into());
    }

    let classifier = PathClassifier::new(
        config.ignored_dirs.as_slice(),
        config.ignored_patterns.as_slice(),
    )?;

    console::print_scanning(out)?;
    info!("Analyzing codebase structure in {}", root.display());
    let draw_progress = io::stdout().is_terminal();
    let mut walk = walk_reporting(root, &classifier, out, draw_progress)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    skip_output_file(&mut walk, &config.output_path);

    console::print_converting(out, &config.output_path)?;
    info!("Converting codebase to text file: {}", config.output_path.display());
    let mut output = OutputFile::create(&config.output_path)?;
    let report = DocumentWriter::new(config)
        .render(output.writer(), &walk)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;
    output.finish()?;

    info!("Conversion complete: {} files processed", report.files_processed);
    Ok(report)
}
