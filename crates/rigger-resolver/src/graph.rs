//! Declared dependency graph construction and traversal.

use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use rigger_core::recipe::Recipe;

use crate::error::ConfigError;

/// An acyclic graph of package names backed by petgraph.
///
/// Edge weights record the position of a dependency in its parent's
/// declaration so that traversal keeps the declared order.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<String, usize>,
    index: HashMap<String, NodeIndex>,
    root: Option<NodeIndex>,
}

impl DependencyGraph {
    /// Build a graph from `package -> ordered dependency names`.
    ///
    /// Names that only appear as dependencies become leaf nodes.
    pub fn from_map(map: &BTreeMap<String, Vec<String>>) -> Result<Self, ConfigError> {
        let mut g = Self {
            graph: DiGraph::new(),
            index: HashMap::new(),
            root: None,
        };
        for (package, deps) in map {
            let from = g.add_node(package);
            for dep in deps {
                let to = g.add_node(dep);
                g.add_edge(from, to);
            }
        }
        g.check_acyclic()?;
        Ok(g)
    }

    /// Build the graph declared by a recipe, rooted at the recipe's own package.
    pub fn from_recipe(recipe: &Recipe) -> Result<Self, ConfigError> {
        let mut g = Self::from_map(&recipe.dependency_map())?;
        g.root = g.index.get(&recipe.package.name).copied();
        Ok(g)
    }

    fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        if !self.graph.edges(from).any(|e| e.target() == to) {
            let position = self.graph.edges(from).count();
            self.graph.add_edge(from, to, position);
        }
    }

    fn check_acyclic(&self) -> Result<(), ConfigError> {
        toposort(&self.graph, None)
            .map(|_| ())
            .map_err(|cycle| ConfigError::DependencyCycle {
                package: self.graph[cycle.node_id()].clone(),
            })
    }

    /// Returns `true` if `name` is declared anywhere in the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The root package, if the graph was built from a recipe.
    pub fn root(&self) -> Option<&str> {
        self.root.map(|idx| self.graph[idx].as_str())
    }

    /// All declared package names, sorted.
    pub fn packages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.graph.node_weights().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Direct dependencies of `name` in declared order. Empty for unknown names.
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        match self.index.get(name) {
            Some(&idx) => self.children(idx).into_iter().map(|c| self.graph[c].as_str()).collect(),
            None => Vec::new(),
        }
    }

    /// Packages that list `name` as a direct dependency, sorted.
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        let mut names: Vec<&str> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|e| self.graph[e.source()].as_str())
            .collect();
        names.sort_unstable();
        names
    }

    fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(usize, NodeIndex)> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (*e.weight(), e.target()))
            .collect();
        edges.sort_unstable();
        edges.into_iter().map(|(_, target)| target).collect()
    }

    /// Entry points for display: the root if set, otherwise every package
    /// nothing depends on.
    fn tops(&self) -> Vec<NodeIndex> {
        if let Some(root) = self.root {
            return vec![root];
        }
        let mut tops: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect();
        tops.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        tops
    }

    /// Print the dependency tree to a string.
    ///
    /// `annotate` returns a suffix for each package name (empty for none).
    pub fn print_tree(&self, max_depth: Option<usize>, annotate: &dyn Fn(&str) -> String) -> String {
        let mut output = String::new();
        for top in self.tops() {
            let name = self.graph[top].as_str();
            output.push_str(&format!("{name}{}\n", annotate(name)));

            let mut visited = HashSet::new();
            visited.insert(top);
            let children = self.children(top);
            let count = children.len();
            for (i, child) in children.into_iter().enumerate() {
                self.print_subtree(
                    &mut output,
                    child,
                    "",
                    i == count - 1,
                    1,
                    max_depth,
                    annotate,
                    &mut visited,
                );
            }
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_subtree(
        &self,
        output: &mut String,
        idx: NodeIndex,
        prefix: &str,
        is_last: bool,
        depth: usize,
        max_depth: Option<usize>,
        annotate: &dyn Fn(&str) -> String,
        visited: &mut HashSet<NodeIndex>,
    ) {
        let connector = if is_last { "└── " } else { "├── " };
        let name = self.graph[idx].as_str();
        output.push_str(&format!("{prefix}{connector}{name}{}\n", annotate(name)));

        if let Some(max) = max_depth {
            if depth >= max {
                return;
            }
        }

        if !visited.insert(idx) {
            return;
        }

        let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
        let children = self.children(idx);
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.print_subtree(
                output,
                child,
                &child_prefix,
                i == count - 1,
                depth + 1,
                max_depth,
                annotate,
                visited,
            );
        }

        visited.remove(&idx);
    }

    /// Number of declared packages.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(k, deps)| (k.to_string(), deps.iter().map(|d| d.to_string()).collect()))
            .collect()
    }

    fn plain(_: &str) -> String {
        String::new()
    }

    #[test]
    fn leaves_are_declared() {
        let g = DependencyGraph::from_map(&map(&[("Boost", &["zlib", "bzip2"])])).unwrap();
        assert_eq!(g.len(), 3);
        assert!(g.contains("zlib"));
        assert!(!g.contains("OpenSSL"));
        assert_eq!(g.packages(), vec!["Boost", "bzip2", "zlib"]);
    }

    #[test]
    fn dependencies_keep_declared_order() {
        let g = DependencyGraph::from_map(&map(&[("Boost", &["zlib", "bzip2", "icu"])])).unwrap();
        assert_eq!(g.dependencies_of("Boost"), vec!["zlib", "bzip2", "icu"]);
        assert!(g.dependencies_of("zlib").is_empty());
        assert!(g.dependencies_of("missing").is_empty());
    }

    #[test]
    fn duplicate_edges_collapse() {
        let g = DependencyGraph::from_map(&map(&[("a", &["b", "b"])])).unwrap();
        assert_eq!(g.dependencies_of("a"), vec!["b"]);
    }

    #[test]
    fn dependents_are_sorted() {
        let g = DependencyGraph::from_map(&map(&[
            ("Libtorrent", &["OpenSSL", "Boost"]),
            ("Boost", &["zlib"]),
            ("OpenSSL", &["zlib"]),
        ]))
        .unwrap();
        assert_eq!(g.dependents_of("zlib"), vec!["Boost", "OpenSSL"]);
        assert!(g.dependents_of("Libtorrent").is_empty());
    }

    #[test]
    fn cycle_is_rejected() {
        let err = DependencyGraph::from_map(&map(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::DependencyCycle { .. }));
    }

    #[test]
    fn self_loop_is_rejected() {
        let err = DependencyGraph::from_map(&map(&[("a", &["a"])])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DependencyCycle {
                package: "a".to_string()
            }
        );
    }

    #[test]
    fn tree_without_root_starts_at_tops() {
        let g = DependencyGraph::from_map(&map(&[
            ("Libtorrent", &["Boost", "OpenSSL"]),
            ("Boost", &["zlib"]),
        ]))
        .unwrap();
        let tree = g.print_tree(None, &plain);
        assert_eq!(
            tree,
            "Libtorrent\n├── Boost\n│   └── zlib\n└── OpenSSL\n"
        );
    }

    #[test]
    fn tree_respects_depth() {
        let g = DependencyGraph::from_map(&map(&[("a", &["b"]), ("b", &["c"])])).unwrap();
        let tree = g.print_tree(Some(1), &plain);
        assert!(tree.contains("b"));
        assert!(!tree.contains("c"));
    }

    #[test]
    fn tree_annotations() {
        let g = DependencyGraph::from_map(&map(&[("a", &["b"])])).unwrap();
        let tree = g.print_tree(None, &|name: &str| {
            if name == "b" {
                " [static]".to_string()
            } else {
                String::new()
            }
        });
        assert_eq!(tree, "a\n└── b [static]\n");
    }

    #[test]
    fn empty_graph() {
        let g = DependencyGraph::from_map(&BTreeMap::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.print_tree(None, &plain), "");
    }
}
