//! Extraction driver
//!
//! Processes cycle directories strictly in the order given, one at a time. For each
//! selected directory the steps run in a fixed order: convert, rename, relabel headers,
//! move into the destination. The first failure aborts the run; outputs already moved
//! are left in place.

use crate::config::LayoutConfig;
use crate::error::ExtractError;
use crate::extract::converter::SequenceConverter;
use crate::extract::fasta::{move_file, rewrite_headers};
use crate::selection::SelectionSet;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Which cycle directories to process.
#[derive(Debug, Clone)]
pub enum CycleFilter {
    /// Every directory, regardless of the tree.
    All,
    /// Only directories whose raw name is in the set.
    Selected(SelectionSet),
}

impl CycleFilter {
    /// Membership uses the raw directory name, before bracket and quote stripping.
    pub fn accepts(&self, base_name: &str) -> bool {
        match self {
            CycleFilter::All => true,
            CycleFilter::Selected(set) => set.contains(base_name),
        }
    }
}

/// Strip `[`, `]` and `'` from a directory name.
pub fn clean_name(base_name: &str) -> String {
    base_name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect()
}

/// Create `dest_dir`, failing if it already exists.
pub fn prepare_destination(dest_dir: &Path) -> Result<(), ExtractError> {
    if dest_dir.exists() {
        return Err(ExtractError::ConfigError(format!(
            "destination directory {} already exists",
            dest_dir.display()
        )));
    }
    fs::create_dir_all(dest_dir).map_err(|e| ExtractError::io(dest_dir, e))
}

/// One processed (or, in a dry run, planned) directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedEntry {
    pub directory: String,
    pub clean_name: String,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<usize>,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionReport {
    pub dest_dir: PathBuf,
    pub dry_run: bool,
    pub extracted: Vec<ExtractedEntry>,
    pub skipped: Vec<String>,
}

pub struct ExtractionDriver<'a> {
    converter: &'a dyn SequenceConverter,
    layout: LayoutConfig,
}

impl<'a> ExtractionDriver<'a> {
    pub fn new(converter: &'a dyn SequenceConverter, layout: LayoutConfig) -> Self {
        Self { converter, layout }
    }

    fn output_path(&self, dest_dir: &Path, clean: &str) -> PathBuf {
        dest_dir.join(format!("{}{}", clean, self.layout.output_suffix))
    }

    /// Report what [`extract`](Self::extract) would do without touching the filesystem.
    pub fn plan(
        &self,
        cycle_dirs: &[PathBuf],
        filter: &CycleFilter,
        dest_dir: &Path,
    ) -> ExtractionReport {
        let mut report = ExtractionReport {
            dest_dir: dest_dir.to_path_buf(),
            dry_run: true,
            extracted: Vec::new(),
            skipped: Vec::new(),
        };
        for dir in cycle_dirs {
            let base = base_name(dir);
            if !filter.accepts(&base) {
                report.skipped.push(base);
                continue;
            }
            let clean = clean_name(&base);
            report.extracted.push(ExtractedEntry {
                output: self.output_path(dest_dir, &clean),
                directory: base,
                clean_name: clean,
                headers: None,
            });
        }
        report
    }

    /// Create `dest_dir` and extract every accepted directory into it.
    pub fn extract(
        &self,
        cycle_dirs: &[PathBuf],
        filter: &CycleFilter,
        dest_dir: &Path,
    ) -> Result<ExtractionReport, ExtractError> {
        prepare_destination(dest_dir)?;

        let mut report = ExtractionReport {
            dest_dir: dest_dir.to_path_buf(),
            dry_run: false,
            extracted: Vec::new(),
            skipped: Vec::new(),
        };
        for dir in cycle_dirs {
            let base = base_name(dir);
            if !filter.accepts(&base) {
                debug!(directory = %base, "Skipping cycle directory");
                report.skipped.push(base);
                continue;
            }
            let entry = self.extract_one(dir, base, dest_dir)?;
            report.extracted.push(entry);
        }

        info!(
            extracted = report.extracted.len(),
            skipped = report.skipped.len(),
            dest_dir = %dest_dir.display(),
            "Extraction finished"
        );
        Ok(report)
    }

    fn extract_one(
        &self,
        dir: &Path,
        base: String,
        dest_dir: &Path,
    ) -> Result<ExtractedEntry, ExtractError> {
        let clean = clean_name(&base);
        let source = dir.join(&self.layout.sequence_file);
        let temp = dir.join(&self.layout.temp_fasta);
        let fasta = dir.join(&self.layout.fasta);
        let output = self.output_path(dest_dir, &clean);

        info!(directory = %base, converter = self.converter.name(), "Extracting cycle");
        self.converter.convert(&source, &temp)?;
        fs::rename(&temp, &fasta).map_err(|e| ExtractError::io(&temp, e))?;
        let headers = rewrite_headers(&fasta, &clean)?;
        move_file(&fasta, &output)?;

        Ok(ExtractedEntry {
            directory: base,
            clean_name: clean,
            output,
            headers: Some(headers),
        })
    }
}

fn base_name(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
