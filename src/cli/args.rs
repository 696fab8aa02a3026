//! CLI argument parsing

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Generate an Elm view of a project's module dependency graph
#[derive(Parser, Debug)]
#[command(name = "elm-build-graph")]
#[command(about = "Generate an Elm view of a project's module dependency graph")]
#[command(
    long_about = "Point this at the top level of a git-tracked Elm project. \
The dependency graph is reduced with `tred`, laid out with `dot`, and written \
as Elm code (.ReducedDigraph.elm by default) meant to be appended to a \
preamble defining Model, Msg and getColorCode."
)]
#[command(version)]
pub struct Args {
    /// Top-level directory of the Elm project
    pub path: PathBuf,

    /// Directory for the generated files (defaults to the working directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob patterns to exclude (can be repeated)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Also write the dependency graph as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// List imports dropped because they are not project modules
    #[arg(long)]
    pub show_excluded: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Rendered help text, printed after usage errors
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
