// Types produced by scanning Elm source files
//
// Only the module header matters here: the module's name and what it imports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A scanned Elm source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannedModule {
    /// File path relative to project root
    pub path: PathBuf,
    /// Declared or synthesized module name
    pub name: String,
    /// Where the name came from
    pub origin: NameOrigin,
    /// Imports in first-seen order, duplicates kept
    pub imports: Vec<Import>,
    /// Total lines in file
    pub total_lines: usize,
}

impl ScannedModule {
    /// Create a module with no imports
    pub fn new(path: PathBuf, name: String, origin: NameOrigin) -> Self {
        Self {
            path,
            name,
            origin,
            imports: Vec::new(),
            total_lines: 0,
        }
    }

    /// Imported module names in declaration order
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(|i| i.module.as_str())
    }
}

/// How a module got its name
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NameOrigin {
    /// `module X exposing (..)` was found
    Declared,
    /// No declaration; derived from the file path
    FromPath,
}

/// An import statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Import {
    /// The module being imported
    pub module: String,
    /// Line number
    pub line: usize,
}

impl Import {
    pub fn new(module: &str, line: usize) -> Self {
        Self {
            module: module.to_string(),
            line,
        }
    }
}
