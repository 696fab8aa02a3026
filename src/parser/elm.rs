// Elm module header scanner
//
// Reads the module declaration and the import list from comment-stripped
// source, one line at a time.

use crate::error::{Error, Result};
use crate::parser::ast::*;
use crate::parser::comments::strip_comments;
use regex::Regex;
use std::path::Path;
use tracing::warn;

const MODULE_PATTERN: &str = r"^(?:(?:port|effect)[ \t]+)?module[ \t]+(?P<name>[^ \t\r\n]+)";
const IMPORT_PATTERN: &str = r"^import[ \t]+(?P<name>[^ \t\r\n]+)";

/// Where the scanner is in a file's header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No module name known yet
    SeekingDeclaration,
    /// Name known; every import line is a dependency
    CollectingImports,
}

/// What a single line told the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A module declaration
    Declared(String),
    /// An import seen before any declaration
    ImportWithoutDeclaration(String),
    /// An import after the name was settled
    Import(String),
}

/// Scanner for Elm source files
pub struct ElmScanner {
    module_rx: Regex,
    import_rx: Regex,
    extension: String,
}

impl ElmScanner {
    /// Create a scanner for `.elm` files
    pub fn new() -> Result<Self> {
        Self::with_extension("elm")
    }

    /// Create a scanner whose synthesized names drop `.{extension}`
    pub fn with_extension(extension: &str) -> Result<Self> {
        Ok(Self {
            module_rx: Regex::new(MODULE_PATTERN)?,
            import_rx: Regex::new(IMPORT_PATTERN)?,
            extension: extension.to_string(),
        })
    }

    /// Scan a file given relative to the project root
    pub fn scan_file(&self, root: &Path, relative: &Path) -> Result<ScannedModule> {
        let full = root.join(relative);
        let bytes = std::fs::read(&full).map_err(|e| {
            Error::Io(std::io::Error::new(e.kind(), format!("{}: {}", full.display(), e)))
        })?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(self.scan_source(&source, relative))
    }

    /// Scan Elm source text
    pub fn scan_source(&self, source: &str, path: &Path) -> ScannedModule {
        let stripped = strip_comments(source);
        if let Some(line) = stripped.unterminated_at {
            warn!(
                path = %path.display(),
                line,
                "unterminated block comment, rest of file ignored"
            );
        }

        let mut module = ScannedModule::new(path.to_path_buf(), String::new(), NameOrigin::FromPath);
        module.total_lines = source.lines().count();

        let mut state = ScanState::SeekingDeclaration;
        for (idx, line) in stripped.text.lines().enumerate() {
            let (next, event) = self.step(state, line);
            state = next;

            match event {
                Some(LineEvent::Declared(name)) => {
                    module.name = name;
                    module.origin = NameOrigin::Declared;
                }
                // The triggering import only settles the name
                Some(LineEvent::ImportWithoutDeclaration(_)) => {
                    module.name = self.module_name_from_path(path);
                    module.origin = NameOrigin::FromPath;
                }
                Some(LineEvent::Import(import)) => {
                    module.imports.push(Import::new(&import, idx + 1));
                }
                None => {}
            }
        }

        if state == ScanState::SeekingDeclaration {
            module.name = self.module_name_from_path(path);
        }

        module
    }

    /// Advance the header state machine by one line
    pub fn step(&self, state: ScanState, line: &str) -> (ScanState, Option<LineEvent>) {
        match state {
            ScanState::SeekingDeclaration => {
                if let Some(name) = capture(&self.module_rx, line) {
                    (ScanState::CollectingImports, Some(LineEvent::Declared(name)))
                } else if let Some(name) = capture(&self.import_rx, line) {
                    (
                        ScanState::CollectingImports,
                        Some(LineEvent::ImportWithoutDeclaration(name)),
                    )
                } else {
                    (ScanState::SeekingDeclaration, None)
                }
            }
            ScanState::CollectingImports => {
                let event = capture(&self.import_rx, line).map(LineEvent::Import);
                (ScanState::CollectingImports, event)
            }
        }
    }

    /// Name for a file without a declaration: its path minus the extension
    pub fn module_name_from_path(&self, path: &Path) -> String {
        let joined = path
            .iter()
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let suffix = format!(".{}", self.extension);
        match joined.strip_suffix(&suffix) {
            Some(stem) => stem.to_string(),
            None => joined,
        }
    }

    /// Whether a project path has this scanner's extension
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension.as_str())
    }
}

fn capture(rx: &Regex, line: &str) -> Option<String> {
    rx.captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str().to_string())
}
