//! Batch analysis of files and directories.

use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::analyzer::{self, AnalysisResult};
use crate::config::Config;
use crate::error::AnalyzeError;
use crate::language::Language;
use crate::score::QualityScore;
use crate::structure::{self, CodeStructure};

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "vendor", "build", "target"];

/// Outcome of analyzing one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub file_name: String,
    pub structure: Option<CodeStructure>,
    pub analysis: Option<AnalysisResult>,
    pub quality: Option<QualityScore>,
    /// Set when the file could not be read or analyzed
    pub error: Option<String>,
}

impl FileReport {
    fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.to_path_buf(),
            file_name: file_name(path),
            structure: None,
            analysis: None,
            quality: None,
            error: Some(error),
        }
    }

    /// Whether the file analyzed cleanly and met the threshold.
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.quality.as_ref().is_some_and(|q| q.passed)
    }
}

/// Reports for every scanned file, sorted by path.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub files: Vec<FileReport>,
    pub threshold: i32,
}

impl ScanResult {
    pub fn files_scanned(&self) -> usize {
        self.files.len()
    }

    /// True when every file passed. An empty scan passes.
    pub fn passed(&self) -> bool {
        self.files.iter().all(FileReport::passed)
    }

    /// Mean quality score over files that produced one.
    pub fn average_score(&self) -> Option<f64> {
        let scores: Vec<i32> = self
            .files
            .iter()
            .filter_map(|f| f.quality.as_ref().map(|q| q.score))
            .collect();
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().map(|&s| f64::from(s)).sum::<f64>() / scores.len() as f64)
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| !f.passed())
    }
}

/// Analyzes every matching file below a root path.
pub struct Scanner {
    root: PathBuf,
    config: Config,
    language: Option<Language>,
    strict: bool,
}

impl Scanner {
    /// Create a scanner for a file or directory.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config: Config::default(),
            language: None,
            strict: false,
        }
    }

    /// Use `config` for threshold, extensions and exclusions.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Force a language instead of detecting it per file.
    pub fn language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    /// With a forced language, fail files whose detected language differs.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Collect the files this scanner will analyze, sorted by path.
    ///
    /// A file root is returned as is, whatever its extension.
    pub fn collect_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let extensions = self.config.extensions();
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e, &self.root))
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase())
                .unwrap_or_default();
            if !extensions.contains(&ext) {
                continue;
            }

            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            if self.config.is_path_excluded(relative) {
                trace!(path = %relative.display(), "excluded by config");
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        debug!(root = %self.root.display(), count = files.len(), "collected files");
        Ok(files)
    }

    /// Analyze the given files in parallel.
    pub fn scan_files(&self, files: &[PathBuf]) -> ScanResult {
        let mut reports: Vec<FileReport> = files
            .par_iter()
            .map(|path| self.analyze_file(path))
            .collect();

        // Sort by path for deterministic ordering
        reports.sort_by(|a, b| a.path.cmp(&b.path));

        ScanResult {
            files: reports,
            threshold: self.config.threshold,
        }
    }

    /// Collect and analyze all files below the root.
    pub fn scan(&self) -> anyhow::Result<ScanResult> {
        let files = self.collect_files()?;
        Ok(self.scan_files(&files))
    }

    /// Read and analyze a single file. Failures are recorded on the report.
    pub fn analyze_file(&self, path: &Path) -> FileReport {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read file");
                return FileReport::failed(path, format!("failed to read file: {}", e));
            }
        };
        let text = String::from_utf8_lossy(&bytes);

        match self.analyze_source(&text) {
            Ok((structure, analysis)) => {
                let quality = QualityScore::evaluate(&analysis, self.config.threshold);
                debug!(
                    path = %path.display(),
                    language = %structure.language,
                    score = quality.score,
                    "scored file"
                );
                FileReport {
                    path: path.to_path_buf(),
                    file_name: file_name(path),
                    structure: Some(structure),
                    analysis: Some(analysis),
                    quality: Some(quality),
                    error: None,
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "analysis failed");
                FileReport::failed(path, e.to_string())
            }
        }
    }

    fn analyze_source(&self, text: &str) -> Result<(CodeStructure, AnalysisResult), AnalyzeError> {
        let structure = match self.language {
            None => structure::extract(text),
            Some(expected) if self.strict => analyzer::extract_checked(text, expected)?,
            Some(language) => structure::extract_as(text, language),
        };
        let analysis = analyzer::analyze_with_structure(text, &structure);
        Ok((structure, analysis))
    }
}

fn is_skipped_dir(entry: &walkdir::DirEntry, root: &Path) -> bool {
    if !entry.file_type().is_dir() || entry.path() == root {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
