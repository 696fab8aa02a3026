use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "elm-build-graph.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub graph: GraphConfig,
    pub layout: LayoutConfig,
    pub output: OutputConfig,
    pub view: ViewConfig,
}

/// Which tracked files are scanned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub source_extension: String,
    pub exclude: Vec<String>,
}

/// Graph description settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub name: String,
    pub rankdir: String,
    pub splines: String,
}

/// External layout tools
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub tred: String,
    pub dot: String,
}

/// Artifact locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub digraph_file: String,
    pub reduced_file: String,
    pub image_file: String,
    pub view_file: String,
}

/// Names used in the generated Elm code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub table_name: String,
    pub color_function: String,
    pub model: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            source_extension: "elm".to_string(),
            exclude: vec!["elm-stuff/**".to_string()],
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            name: "MyProject".to_string(),
            rankdir: "LR".to_string(),
            splines: "true".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tred: "tred".to_string(),
            dot: "dot".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            digraph_file: ".digraph.dot".to_string(),
            reduced_file: ".reduced-digraph.dot".to_string(),
            image_file: ".reduced-digraph.svg".to_string(),
            view_file: ".ReducedDigraph.elm".to_string(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            table_name: "fileDependencies".to_string(),
            color_function: "getColorCode".to_string(),
            model: "model".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file, or return defaults when there is no file.
    /// A file that exists but fails to parse or validate is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, output: Option<PathBuf>, exclude: Vec<String>) {
        if let Some(out) = output {
            self.output.directory = out;
        }

        if !exclude.is_empty() {
            self.project.exclude.extend(exclude);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let ext = &self.project.source_extension;
        if ext.is_empty() || ext.starts_with('.') {
            return Err(Error::config_validation(
                "source_extension must be non-empty and given without a leading dot",
            ));
        }

        if !["TB", "LR", "BT", "RL"].contains(&self.graph.rankdir.as_str()) {
            return Err(Error::config_validation(
                "rankdir must be one of TB, LR, BT, RL",
            ));
        }

        if self.graph.name.is_empty() {
            return Err(Error::config_validation("graph name cannot be empty"));
        }

        if self.layout.tred.is_empty() || self.layout.dot.is_empty() {
            return Err(Error::config_validation("layout tool names cannot be empty"));
        }

        let files = [
            &self.output.digraph_file,
            &self.output.reduced_file,
            &self.output.image_file,
            &self.output.view_file,
        ];
        if files.iter().any(|f| f.is_empty()) {
            return Err(Error::config_validation("output file names cannot be empty"));
        }

        for name in [
            &self.view.table_name,
            &self.view.color_function,
            &self.view.model,
        ] {
            if !is_elm_identifier(name) {
                return Err(Error::config_validation(format!(
                    "'{}' is not a valid Elm identifier",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Lower-case Elm identifier: a lowercase letter followed by letters, digits or underscores
fn is_elm_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
