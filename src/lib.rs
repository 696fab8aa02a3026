//! elm-build-graph - Generate an Elm view of a project's module dependency graph
//!
//! Scans the git-tracked Elm sources of a project, builds the graph of
//! in-project module imports, lets Graphviz reduce and lay it out, and
//! translates the resulting SVG into Elm code whose node colors are chosen
//! at runtime.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;

// Re-export main types
pub use analysis::{AnalysisResult, Analyzer, DependencyGraph};
pub use config::Config;
pub use error::{Error, Result};
pub use output::{GenerationReport, Graphviz, LayoutEngine, SvgTranslator, ViewGenerator};
pub use parser::{ElmScanner, ScannedModule};
