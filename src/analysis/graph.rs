// Dependency graph between the modules of one project

use crate::parser::ScannedModule;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, warn};

/// In-project dependencies of every scanned module.
///
/// Modules are keyed by name in sorted order so that every artifact built
/// from the graph is deterministic. Each dependency list keeps the order in
/// which the imports appeared in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Module name -> in-project dependencies
    modules: BTreeMap<String, Vec<String>>,
    /// Module name -> imports that did not resolve to a project module
    excluded: BTreeMap<String, Vec<String>>,
}

/// Summary counts for a dependency graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub modules: usize,
    pub edges: usize,
    pub excluded: usize,
}

impl DependencyGraph {
    /// Build the filtered graph from scanned modules.
    ///
    /// Only names of scanned modules are valid targets; every other import
    /// (external packages, core libraries) is moved to the excluded list.
    pub fn build(scanned: &[ScannedModule]) -> Self {
        let mut raw: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut seen_in: BTreeMap<&str, &ScannedModule> = BTreeMap::new();

        for module in scanned {
            if let Some(previous) = seen_in.insert(module.name.as_str(), module) {
                warn!(
                    module = %module.name,
                    first = %previous.path.display(),
                    second = %module.path.display(),
                    "module declared by more than one file, merging imports"
                );
            }
            raw.entry(module.name.clone())
                .or_default()
                .extend(module.dependencies().map(str::to_string));
        }

        let known: HashSet<&str> = raw.keys().map(String::as_str).collect();
        let mut modules = BTreeMap::new();
        let mut excluded = BTreeMap::new();

        for (name, dependencies) in &raw {
            let (kept, dropped): (Vec<String>, Vec<String>) = dependencies
                .iter()
                .cloned()
                .partition(|dep| known.contains(dep.as_str()));

            for dep in &dropped {
                debug!(module = %name, import = %dep, "excluded external import");
            }

            modules.insert(name.clone(), kept);
            if !dropped.is_empty() {
                excluded.insert(name.clone(), dropped);
            }
        }

        Self { modules, excluded }
    }

    /// Number of modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module was found
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Whether a module with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// In-project dependencies of a module
    pub fn dependencies_of(&self, name: &str) -> Option<&[String]> {
        self.modules.get(name).map(Vec::as_slice)
    }

    /// All modules with their dependencies, sorted by name
    pub fn modules(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.modules
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    /// Every retained edge as `(dependent, dependency)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().flat_map(|(name, deps)| {
            deps.iter().map(move |dep| (name.as_str(), dep.as_str()))
        })
    }

    /// Imports dropped because they name no project module
    pub fn excluded(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.excluded
            .iter()
            .map(|(name, deps)| (name.as_str(), deps.as_slice()))
    }

    /// Summary counts
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            modules: self.modules.len(),
            edges: self.modules.values().map(Vec::len).sum(),
            excluded: self.excluded.values().map(Vec::len).sum(),
        }
    }
}
