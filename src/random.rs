//! Random layered graphs for demos.

use crate::error::{GraphError, Result};
use crate::graph::Dag;
use rand::Rng;
use tracing::debug;

/// Chance of keeping each candidate edge when none is given
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;

/// Build a graph over `V0..V{n-1}` where every pair `i < j` independently
/// gets the edge `Vi -> Vj` with the given probability.
///
/// Edges only run from lower to higher index, so the result is always acyclic.
/// Vertices that end up with no edge at all are not part of the graph.
pub fn layered_dag<R: Rng + ?Sized>(
    vertex_count: usize,
    probability: f64,
    rng: &mut R,
) -> Result<Dag<String>> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GraphError::InvalidProbability(probability));
    }

    let labels: Vec<String> = (0..vertex_count).map(|i| format!("V{i}")).collect();
    let mut dag = Dag::new();

    for (i, from) in labels.iter().enumerate() {
        for to in &labels[i + 1..] {
            if rng.gen_bool(probability) {
                dag.add_edge(from.clone(), to.clone());
            }
        }
    }

    debug!(
        vertices = dag.vertex_count(),
        edges = dag.edge_count(),
        probability,
        "generated layered graph"
    );
    Ok(dag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_layered_dag_is_acyclic() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let dag = layered_dag(12, DEFAULT_EDGE_PROBABILITY, &mut rng).unwrap();
            assert!(!dag.has_cycle());
            let order = dag.topological_sort().unwrap();
            assert!(dag.is_topological_order(&order));
        }
    }

    #[test]
    fn test_probability_one_is_complete() {
        let mut rng = StdRng::seed_from_u64(1);
        let dag = layered_dag(5, 1.0, &mut rng).unwrap();
        assert_eq!(dag.vertex_count(), 5);
        assert_eq!(dag.edge_count(), 10);
        assert_eq!(
            dag.topological_sort().unwrap(),
            vec!["V0", "V1", "V2", "V3", "V4"]
        );
    }

    #[test]
    fn test_probability_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let dag = layered_dag(5, 0.0, &mut rng).unwrap();
        assert!(dag.is_empty());
    }

    #[test]
    fn test_edges_point_to_higher_index() {
        let mut rng = StdRng::seed_from_u64(99);
        let dag = layered_dag(10, 0.5, &mut rng).unwrap();
        for (from, to) in dag.edges() {
            let from: usize = from[1..].parse().unwrap();
            let to: usize = to[1..].parse().unwrap();
            assert!(from < to);
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = layered_dag(8, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = layered_dag(8, 0.5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = layered_dag(3, 1.5, &mut rng).unwrap_err();
        assert!(matches!(err, GraphError::InvalidProbability(p) if p == 1.5));
        assert!(layered_dag(3, f64::NAN, &mut rng).is_err());
    }
}
