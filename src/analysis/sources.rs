// Project file discovery through git

use crate::error::{Error, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// List the files git tracks under `root`, relative to it
pub fn list_tracked_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!(root = %root.display(), "running git ls-files");
    // NUL-separated output is never quoted, whatever `core.quotepath` says
    let output = Command::new("git")
        .args(["ls-files", "-z"])
        .current_dir(root)
        .output()
        .map_err(|e| Error::tool_launch("git", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("git ls-files", stderr.trim()));
    }

    Ok(parse_listing(&String::from_utf8_lossy(&output.stdout)))
}

/// Split `git ls-files -z` output into paths
pub fn parse_listing(stdout: &str) -> Vec<PathBuf> {
    stdout
        .split('\0')
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Whether `root` is the top of a git work tree
pub fn is_repository(root: &Path) -> bool {
    // `.git` is a file in linked work trees and submodules
    root.join(".git").exists()
}

/// Glob-based exclusion of project paths
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Pattern>,
}

impl ExcludeFilter {
    /// Compile the configured exclude patterns
    pub fn new(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Check if a relative path matches any exclude pattern
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches_path(path))
    }
}
