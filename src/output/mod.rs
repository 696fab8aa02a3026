// Output generation module

pub mod dot;
pub mod elm;
pub mod layout;
pub mod svg;
pub mod templates;

pub use dot::DotWriter;
pub use elm::{dehyphenate, dependency_table, elm_string, SvgTranslator, TraversalContext};
pub use layout::{Graphviz, LayoutEngine};
pub use svg::{Attribute, ImageNode};
pub use templates::TemplateEngine;

use crate::analysis::DependencyGraph;
use crate::config::{Config, OutputConfig, ViewConfig};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Files written by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Graph description of the filtered dependencies
    pub digraph: PathBuf,
    /// Transitively reduced description
    pub reduced: PathBuf,
    /// Laid-out SVG image
    pub image: PathBuf,
    /// Generated Elm source
    pub view: PathBuf,
}

impl Artifacts {
    /// Artifact paths inside the configured output directory
    pub fn new(config: &OutputConfig) -> Self {
        let dir = &config.directory;
        Self {
            digraph: dir.join(&config.digraph_file),
            reduced: dir.join(&config.reduced_file),
            image: dir.join(&config.image_file),
            view: dir.join(&config.view_file),
        }
    }
}

/// Drives emission, layout and translation for one dependency graph
pub struct ViewGenerator<L: LayoutEngine> {
    layout: L,
    dot: DotWriter,
    translator: SvgTranslator,
    templates: TemplateEngine,
    view_config: ViewConfig,
    output_dir: PathBuf,
    artifacts: Artifacts,
}

impl<L: LayoutEngine> ViewGenerator<L> {
    /// Create a generator from configuration and a layout engine
    pub fn new(config: &Config, layout: L) -> Result<Self> {
        Ok(Self {
            layout,
            dot: DotWriter::new(&config.graph),
            translator: SvgTranslator::new(&config.view),
            templates: TemplateEngine::new()?,
            view_config: config.view.clone(),
            output_dir: config.output.directory.clone(),
            artifacts: Artifacts::new(&config.output),
        })
    }

    /// Run the whole output pipeline.
    ///
    /// Intermediate files are overwritten as each stage completes; the Elm
    /// file is only written once translation has succeeded.
    pub fn generate(&self, graph: &DependencyGraph) -> Result<GenerationReport> {
        fs::create_dir_all(&self.output_dir)?;

        let description = self.dot.render(graph);
        fs::write(&self.artifacts.digraph, &description)?;
        info!(path = %self.artifacts.digraph.display(), "graph description written");

        let reduced = self.layout.reduce(&self.artifacts.digraph)?;
        fs::write(&self.artifacts.reduced, &reduced)?;
        info!(path = %self.artifacts.reduced.display(), "reduced description written");

        self.layout.render(&self.artifacts.reduced, &self.artifacts.image)?;
        info!(path = %self.artifacts.image.display(), "layout rendered");

        let root = ImageNode::load(&self.artifacts.image)?;
        let view = self.translator.translate(&root)?;
        let table = dependency_table(graph);
        let source = self.templates.render_view(&self.view_config, &table, &view)?;

        fs::write(&self.artifacts.view, &source)?;
        info!(path = %self.artifacts.view.display(), "view written");

        let stats = graph.stats();
        Ok(GenerationReport {
            modules: stats.modules,
            edges: stats.edges,
            artifacts: self.artifacts.clone(),
        })
    }
}

/// Report of a finished generation
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub modules: usize,
    pub edges: usize,
    pub artifacts: Artifacts,
}

impl GenerationReport {
    /// Get a summary string
    pub fn summary(&self) -> String {
        format!(
            "Generated view of {} modules with {} dependencies",
            self.modules, self.edges
        )
    }
}
