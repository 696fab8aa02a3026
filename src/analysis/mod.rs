// Analysis module: scan a project and build its dependency graph

pub mod graph;
pub mod sources;

pub use graph::*;
pub use sources::{is_repository, list_tracked_files, ExcludeFilter};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::parser::{ElmScanner, ScannedModule};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of analyzing a project
#[derive(Debug)]
pub struct AnalysisResult {
    /// Every scanned source file
    pub modules: Vec<ScannedModule>,
    /// Filtered dependency graph
    pub graph: DependencyGraph,
}

/// Main analyzer that orchestrates file discovery and scanning
pub struct Analyzer {
    scanner: ElmScanner,
    exclude: ExcludeFilter,
    verbose: bool,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            scanner: ElmScanner::with_extension(&config.project.source_extension)?,
            exclude: ExcludeFilter::new(&config.project.exclude)?,
            verbose: false,
        })
    }

    /// Create analyzer with verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check the project directory before anything runs
    pub fn check_project(root: &Path) -> Result<()> {
        if !root.exists() {
            return Err(Error::PathNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }
        if !is_repository(root) {
            return Err(Error::NotARepository(root.to_path_buf()));
        }
        Ok(())
    }

    /// Analyze the git project at `root`
    pub fn analyze(&self, root: &Path) -> Result<AnalysisResult> {
        Self::check_project(root)?;
        let tracked = list_tracked_files(root)?;
        self.analyze_files(root, &tracked)
    }

    /// Analyze an explicit list of files, given relative to `root`
    pub fn analyze_files(&self, root: &Path, files: &[PathBuf]) -> Result<AnalysisResult> {
        let sources = self.select_sources(files);
        if sources.is_empty() {
            warn!(root = %root.display(), "no source files found");
        }
        info!(files = sources.len(), "scanning sources");

        let progress = if self.verbose {
            let style = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .map(|s| s.progress_chars("#>-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            let pb = ProgressBar::new(sources.len() as u64);
            pb.set_style(style);
            Some(pb)
        } else {
            None
        };

        let mut modules = Vec::with_capacity(sources.len());
        for path in &sources {
            if let Some(ref pb) = progress {
                pb.set_message(path.display().to_string());
                pb.inc(1);
            }
            modules.push(self.scanner.scan_file(root, path)?);
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Scanning complete");
        }

        let graph = DependencyGraph::build(&modules);
        Ok(AnalysisResult { modules, graph })
    }

    /// Keep source files that no exclude pattern matches
    pub fn select_sources(&self, files: &[PathBuf]) -> Vec<PathBuf> {
        files
            .iter()
            .filter(|f| self.scanner.accepts(f) && !self.exclude.is_excluded(f))
            .cloned()
            .collect()
    }
}
