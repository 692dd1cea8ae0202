//! Read-only snapshots of a graph and Graphviz DOT output.
//!
//! Layout and rasterizing are left to Graphviz (`dot -Tjpeg graph.dot`).
//! Nothing here feeds back into the graph.

use crate::error::Result;
use crate::graph::Dag;
use serde::Serialize;
use std::fmt::{Display, Write as _};
use std::fs;
use std::hash::Hash;
use std::path::Path;
use tracing::info;

pub const DEFAULT_TITLE: &str = "Directed Acyclic Graph (DAG)";

/// Vertex set and edge list copied out of a [`Dag`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot<V> {
    pub vertices: Vec<V>,
    pub edges: Vec<(V, V)>,
}

impl<V: Eq + Hash + Clone> Dag<V> {
    pub fn snapshot(&self) -> Snapshot<V> {
        Snapshot {
            vertices: self.vertices().cloned().collect(),
            edges: self
                .edges()
                .map(|(from, to)| (from.clone(), to.clone()))
                .collect(),
        }
    }
}

impl<V: Display> Snapshot<V> {
    /// Render as a DOT digraph. Parallel edges are drawn once per occurrence.
    pub fn to_dot(&self, title: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "digraph dag {{");
        let _ = writeln!(out, "    label={};", quote(title));
        let _ = writeln!(out, "    labelloc=t;");
        let _ = writeln!(
            out,
            "    node [shape=circle, style=filled, fillcolor=lightblue, fontsize=10];"
        );
        for vertex in &self.vertices {
            let _ = writeln!(out, "    {};", quote(&vertex.to_string()));
        }
        for (from, to) in &self.edges {
            let _ = writeln!(
                out,
                "    {} -> {};",
                quote(&from.to_string()),
                quote(&to.to_string())
            );
        }
        out.push_str("}\n");
        out
    }
}

/// Write `snapshot` as DOT to `path`, replacing any existing file
pub fn write_dot<V: Display>(snapshot: &Snapshot<V>, title: &str, path: &Path) -> Result<()> {
    fs::write(path, snapshot.to_dot(title))?;
    info!(
        path = %path.display(),
        vertices = snapshot.vertices.len(),
        edges = snapshot.edges.len(),
        "wrote DOT file"
    );
    Ok(())
}

fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}
