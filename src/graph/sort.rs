//! Topological sorting, depth-first postorder and Kahn's algorithm.

use super::Dag;
use crate::error::{GraphError, Result};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use tracing::{debug, trace};

/// Which algorithm answers [`Dag::topological_sort_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortStrategy {
    /// Kahn's algorithm; fails with [`GraphError::CycleDetected`] on cyclic input
    #[default]
    Kahn,
    /// Reverse depth-first postorder; never fails, but only meaningful on acyclic input
    DepthFirst,
}

impl<V: Eq + Hash + Clone> Dag<V> {
    /// Order every vertex so each edge points forward, using Kahn's algorithm.
    ///
    /// Vertices whose in-degree reaches zero at the same time leave the queue in
    /// first-in first-out order, seeded in insertion order. Callers should not
    /// rely on that tie-break: check the result with [`Dag::is_topological_order`]
    /// instead of comparing against one fixed sequence.
    ///
    /// # Errors
    ///
    /// [`GraphError::CycleDetected`] if some vertices never reach in-degree zero.
    pub fn topological_sort(&self) -> Result<Vec<V>> {
        let total = self.vertex_count();

        // Parallel edges each count once here and are each decremented below.
        let mut in_degree = vec![0usize; total];
        for idx in 0..total {
            for &target in self.targets_at(idx) {
                in_degree[target] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..total).filter(|&idx| in_degree[idx] == 0).collect();
        let mut order: Vec<usize> = Vec::with_capacity(total);

        while let Some(idx) = queue.pop_front() {
            trace!(position = order.len(), "vertex ready");
            order.push(idx);

            for &target in self.targets_at(idx) {
                in_degree[target] -= 1;
                if in_degree[target] == 0 {
                    queue.push_back(target);
                }
            }
        }

        if order.len() < total {
            debug!(ordered = order.len(), total, "topological sort hit a cycle");
            return Err(GraphError::CycleDetected {
                ordered: order.len(),
                total,
            });
        }

        debug!(total, "topological sort complete");
        Ok(self.labels(order))
    }

    /// Order vertices by reverse depth-first postorder.
    ///
    /// Roots are tried in insertion order and neighbors in edge order. Each
    /// vertex lands in front of everything already placed once all of its
    /// descendants are placed.
    ///
    /// This never fails. On a cyclic graph the result is still a permutation of
    /// the vertices, but it is NOT a topological order and nothing reports the
    /// cycle. Check [`Dag::has_cycle`] first or use [`Dag::topological_sort`].
    pub fn topological_sort_dfs(&self) -> Vec<V> {
        let total = self.vertex_count();
        let mut visited = vec![false; total];
        let mut postorder: Vec<usize> = Vec::with_capacity(total);
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..total {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, 0));

            while let Some(&mut (vertex, ref mut slot)) = stack.last_mut() {
                let targets = self.targets_at(vertex);
                if let Some(&next) = targets.get(*slot) {
                    *slot += 1;
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                } else {
                    postorder.push(vertex);
                    stack.pop();
                }
            }
        }

        postorder.reverse();
        self.labels(postorder)
    }

    pub fn topological_sort_with(&self, strategy: SortStrategy) -> Result<Vec<V>> {
        match strategy {
            SortStrategy::Kahn => self.topological_sort(),
            SortStrategy::DepthFirst => Ok(self.topological_sort_dfs()),
        }
    }

    /// True if `order` lists every vertex exactly once and every edge points forward
    pub fn is_topological_order(&self, order: &[V]) -> bool {
        if order.len() != self.vertex_count() {
            return false;
        }

        let mut position: HashMap<&V, usize> = HashMap::with_capacity(order.len());
        for (pos, vertex) in order.iter().enumerate() {
            if !self.contains(vertex) || position.insert(vertex, pos).is_some() {
                return false;
            }
        }

        self.edges()
            .all(|(from, to)| position.get(from) < position.get(to))
    }

    fn labels(&self, indices: Vec<usize>) -> Vec<V> {
        indices
            .into_iter()
            .map(|idx| self.vertex_at(idx).clone())
            .collect()
    }
}
