use crate::cli::{CycleAlgorithm, GraphArgs, SortAlgorithm};
use crate::error::{GraphError, Result};
use crate::graph::Dag;
use crate::random::layered_dag;
use crate::render::{self, DEFAULT_TITLE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::debug;

/// Split a `FROM:TO` edge spec
pub fn parse_edge(spec: &str) -> Result<(String, String)> {
    match spec.split_once(':') {
        Some((from, to)) if !from.is_empty() && !to.is_empty() => {
            Ok((from.to_string(), to.to_string()))
        }
        _ => Err(GraphError::InvalidEdge(spec.to_string())),
    }
}

/// Build a graph from command line arguments; edges first, then lone vertices
pub fn build_graph(args: &GraphArgs) -> Result<Dag<String>> {
    let mut dag = Dag::new();
    for spec in &args.edges {
        let (from, to) = parse_edge(spec)?;
        dag.add_edge(from, to);
    }
    for vertex in &args.vertices {
        dag.add_vertex(vertex.clone());
    }
    debug!(
        vertices = dag.vertex_count(),
        edges = dag.edge_count(),
        "built graph from arguments"
    );
    Ok(dag)
}

/// Handle the demo command
pub fn handle_demo(
    vertices: usize,
    probability: f64,
    seed: Option<u64>,
    dot: Option<&Path>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let dag = layered_dag(vertices, probability, &mut rng)?;

    // Kahn's sort doubles as the acyclicity check
    let order = dag.topological_sort()?;
    println!("Topological sort: [{}]", order.join(", "));

    if let Some(path) = dot {
        render::write_dot(&dag.snapshot(), DEFAULT_TITLE, path)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// Handle the sort command
pub fn handle_sort(args: &GraphArgs, algorithm: SortAlgorithm, json: bool) -> Result<()> {
    let dag = build_graph(args)?;
    let order = dag.topological_sort_with(algorithm.into())?;

    if json {
        println!("{}", serde_json::to_string(&order)?);
    } else {
        for vertex in &order {
            println!("{vertex}");
        }
    }

    Ok(())
}

/// Handle the check command
pub fn handle_check(args: &GraphArgs, algorithm: CycleAlgorithm) -> Result<()> {
    let dag = build_graph(args)?;

    if !dag.has_cycle_with(algorithm.into()) {
        println!("acyclic");
        return Ok(());
    }

    match dag.find_cycle() {
        Some(path) => println!("cycle: {}", path.join(" -> ")),
        None => println!("cycle"),
    }

    Ok(())
}

/// Handle the dot command
pub fn handle_dot(args: &GraphArgs, output: Option<&Path>, title: &str) -> Result<()> {
    let snapshot = build_graph(args)?.snapshot();

    match output {
        Some(path) => render::write_dot(&snapshot, title, path)?,
        None => print!("{}", snapshot.to_dot(title)),
    }

    Ok(())
}
