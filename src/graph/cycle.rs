//! Cycle detection.

use super::Dag;
use std::hash::Hash;
use tracing::{debug, trace};

/// Which algorithm answers [`Dag::has_cycle_with`]. Both always agree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CycleStrategy {
    /// Depth-first walk looking for an edge back to a vertex on the current path
    #[default]
    DepthFirst,
    /// Attempt Kahn's sort and report a cycle if it cannot order every vertex
    Kahn,
}

/// Per-vertex state of the depth-first walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// Started and still an ancestor on the active path
    OnStack,
    Finished,
}

impl<V: Eq + Hash + Clone> Dag<V> {
    /// True if the graph contains at least one cycle (self-loops included)
    pub fn has_cycle(&self) -> bool {
        self.has_cycle_with(CycleStrategy::DepthFirst)
    }

    pub fn has_cycle_with(&self, strategy: CycleStrategy) -> bool {
        match strategy {
            CycleStrategy::DepthFirst => self.back_edge_path().is_some(),
            CycleStrategy::Kahn => self.topological_sort().is_err(),
        }
    }

    /// One cycle as a closed path `[v0, v1, ..., v0]`, or None if the graph is acyclic.
    ///
    /// A self-loop on `a` is reported as `[a, a]`.
    pub fn find_cycle(&self) -> Option<Vec<V>> {
        self.back_edge_path().map(|path| {
            path.into_iter()
                .map(|idx| self.vertex_at(idx).clone())
                .collect()
        })
    }

    /// Depth-first search from every unvisited vertex in insertion order.
    ///
    /// The explicit stack holds `(vertex, next neighbor slot)`, so it is also
    /// the active path. The first edge into an `OnStack` vertex closes a cycle
    /// and ends the search.
    fn back_edge_path(&self) -> Option<Vec<usize>> {
        let mut marks = vec![Mark::Unvisited; self.vertex_count()];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..self.vertex_count() {
            if marks[root] != Mark::Unvisited {
                continue;
            }
            trace!(root, "starting depth-first walk");
            marks[root] = Mark::OnStack;
            stack.push((root, 0));

            while let Some(&mut (vertex, ref mut slot)) = stack.last_mut() {
                let targets = self.targets_at(vertex);
                if let Some(&next) = targets.get(*slot) {
                    *slot += 1;
                    match marks[next] {
                        Mark::Unvisited => {
                            marks[next] = Mark::OnStack;
                            stack.push((next, 0));
                        }
                        Mark::OnStack => {
                            let start = stack
                                .iter()
                                .position(|&(v, _)| v == next)
                                .unwrap_or_default();
                            let mut path: Vec<usize> =
                                stack[start..].iter().map(|&(v, _)| v).collect();
                            path.push(next);
                            debug!(length = path.len() - 1, "cycle found");
                            return Some(path);
                        }
                        Mark::Finished => {}
                    }
                } else {
                    marks[vertex] = Mark::Finished;
                    stack.pop();
                }
            }
        }

        debug!(vertices = self.vertex_count(), "no cycle found");
        None
    }
}
