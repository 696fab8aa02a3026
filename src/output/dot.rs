// Graphviz description of the dependency graph
//
// Edges point from a dependency to its dependent, so that with `rankdir = LR`
// the modules that build first sit on the left.

use crate::analysis::DependencyGraph;
use crate::config::GraphConfig;

/// Writer for the DOT digraph handed to the layout tools
#[derive(Debug, Clone)]
pub struct DotWriter {
    name: String,
    rankdir: String,
    splines: String,
}

impl DotWriter {
    /// Create a writer from graph settings
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            name: config.name.clone(),
            rankdir: config.rankdir.clone(),
            splines: config.splines.clone(),
        }
    }

    /// Render the whole digraph
    pub fn render(&self, graph: &DependencyGraph) -> String {
        let mut lines = Vec::new();
        lines.push(format!("digraph {} {{", quote(&self.name)));
        lines.push(format!("    rankdir = {};", self.rankdir));
        lines.push(format!("    splines = {};", self.splines));

        for (dependent, dependency) in graph.edges() {
            lines.push(format!("    {} -> {}", quote(dependency), quote(dependent)));
        }

        lines.push("}".to_string());
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl Default for DotWriter {
    fn default() -> Self {
        Self::new(&GraphConfig::default())
    }
}

/// Quote a DOT identifier
pub fn quote(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for c in name.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Import, NameOrigin, ScannedModule};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn module(name: &str, imports: &[&str]) -> ScannedModule {
        let mut m = ScannedModule::new(PathBuf::from(format!("{}.elm", name)), name.to_string(), NameOrigin::Declared);
        m.imports = imports.iter().map(|i| Import::new(i, 1)).collect();
        m
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("Page.Home"), "\"Page.Home\"");
        assert_eq!(quote("src/Main"), "\"src/Main\"");
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_two_module_project_has_one_edge() {
        let graph = DependencyGraph::build(&[module("A", &["B"]), module("B", &["Json.Decode"])]);
        let dot = DotWriter::default().render(&graph);

        let edges: Vec<&str> = dot.lines().filter(|l| l.contains("->")).collect();
        assert_eq!(edges, vec!["    \"B\" -> \"A\""]);
    }

    #[test]
    fn test_render_layout() {
        let graph = DependencyGraph::build(&[
            module("Main", &["Api", "View"]),
            module("View", &["Api"]),
            module("Api", &[]),
        ]);
        let dot = DotWriter::default().render(&graph);

        assert_eq!(
            dot,
            "digraph \"MyProject\" {\n    rankdir = LR;\n    splines = true;\n    \"Api\" -> \"Main\"\n    \"View\" -> \"Main\"\n    \"Api\" -> \"View\"\n}\n"
        );
    }

    #[test]
    fn test_render_uses_graph_settings() {
        let config = GraphConfig {
            name: "Frontend".to_string(),
            rankdir: "TB".to_string(),
            splines: "ortho".to_string(),
        };
        let dot = DotWriter::new(&config).render(&DependencyGraph::default());
        assert_eq!(
            dot,
            "digraph \"Frontend\" {\n    rankdir = TB;\n    splines = ortho;\n}\n"
        );
    }
}
