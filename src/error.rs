use std::path::PathBuf;
use thiserror::Error;

/// elm-build-graph error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    ConfigValidation(String),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("The first argument is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("The first argument is not a git repository: {0}")]
    NotARepository(PathBuf),

    #[error("Failed to run {tool}: {source}")]
    ToolLaunch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} reported:\n{diagnostic}")]
    ToolFailed { tool: String, diagnostic: String },

    #[error("Unrecognized SVG element: {0}")]
    UnrecognizedElement(String),

    #[error("Unrecognized SVG attribute {attribute} on {element}")]
    UnrecognizedAttribute { element: String, attribute: String },

    #[error("Invalid SVG document: {0}")]
    Svg(#[from] roxmltree::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for elm-build-graph operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a config validation error
    pub fn config_validation(msg: impl Into<String>) -> Self {
        Error::ConfigValidation(msg.into())
    }

    /// Create an error for a collaborator tool that wrote diagnostics
    pub fn tool_failed(tool: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Error::ToolFailed {
            tool: tool.into(),
            diagnostic: diagnostic.into(),
        }
    }

    /// Create an error for a tool that could not be started
    pub fn tool_launch(tool: impl Into<String>, source: std::io::Error) -> Self {
        Error::ToolLaunch {
            tool: tool.into(),
            source,
        }
    }

    /// Whether the error comes from bad invocation rather than a failed run.
    /// The CLI prints the help text after these.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::PathNotFound(_) | Error::NotADirectory(_) | Error::NotARepository(_)
        )
    }
}
