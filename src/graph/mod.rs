//! Graph store: an insertion-ordered adjacency list.
//!
//! The type is called `Dag` but nothing here keeps it acyclic. Edges are
//! accepted as given, so a cycle can be present at any time. Call
//! [`Dag::has_cycle`] (or sort with [`Dag::topological_sort`]) when the
//! guarantee is needed.

pub mod cycle;
pub mod sort;

pub use cycle::CycleStrategy;
pub use sort::SortStrategy;

use indexmap::IndexMap;
use std::hash::Hash;

/// Directed graph over opaque vertex labels.
///
/// Vertices iterate in the order they were first referenced. Each vertex keeps
/// its out-neighbors in edge-insertion order, and adding the same edge twice
/// stores it twice.
///
/// Not synchronized: wrap it in a lock if several threads need to mutate it.
#[derive(Debug, Clone)]
pub struct Dag<V> {
    // Neighbor lists hold positions into this map. Vertices are never removed,
    // so positions stay valid for the life of the graph.
    adjacency: IndexMap<V, Vec<usize>>,
}

impl<V> Default for Dag<V> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> Dag<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by adding each edge in turn
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut dag = Self::new();
        for (from, to) in edges {
            dag.add_edge(from, to);
        }
        dag
    }

    /// Insert `vertex` with no neighbors. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.index_of_or_insert(vertex).1
    }

    /// Append `to` to the neighbors of `from`, creating either vertex if needed.
    ///
    /// Repeating a call adds a parallel edge; every algorithm walks each copy.
    pub fn add_edge(&mut self, from: V, to: V) {
        let (from_idx, _) = self.index_of_or_insert(from);
        let (to_idx, _) = self.index_of_or_insert(to);
        self.adjacency[from_idx].push(to_idx);
    }

    fn index_of_or_insert(&mut self, vertex: V) -> (usize, bool) {
        let entry = self.adjacency.entry(vertex);
        let inserted = matches!(entry, indexmap::map::Entry::Vacant(_));
        let idx = entry.index();
        entry.or_default();
        (idx, inserted)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Out-neighbors of `vertex` in edge-insertion order, or None for an unknown vertex
    pub fn neighbors<'a>(&'a self, vertex: &V) -> Option<impl Iterator<Item = &'a V> + 'a> {
        let targets = self.adjacency.get(vertex)?;
        Some(targets.iter().map(move |&idx| self.vertex_at(idx)))
    }

    /// Number of edges ending at `vertex`, parallel edges included
    pub fn in_degree(&self, vertex: &V) -> Option<usize> {
        let target = self.adjacency.get_index_of(vertex)?;
        Some(
            self.adjacency
                .values()
                .flatten()
                .filter(|&&idx| idx == target)
                .count(),
        )
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, parallel edges included
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Edges grouped by source vertex, each group in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.adjacency.iter().flat_map(move |(from, targets)| {
            targets.iter().map(move |&idx| (from, self.vertex_at(idx)))
        })
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> &V {
        // Positions come from the map itself and vertices are never removed.
        let (vertex, _) = self
            .adjacency
            .get_index(idx)
            .unwrap_or_else(|| unreachable!("vertex position {idx} out of range"));
        vertex
    }

    pub(crate) fn targets_at(&self, idx: usize) -> &[usize] {
        self.adjacency
            .get_index(idx)
            .map(|(_, targets)| targets.as_slice())
            .unwrap_or_default()
    }
}
