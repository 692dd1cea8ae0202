use crate::graph::{CycleStrategy, SortStrategy};
use crate::random::DEFAULT_EDGE_PROBABILITY;
use crate::render::DEFAULT_TITLE;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dagraph")]
#[command(about = "Build directed graphs, detect cycles and sort them topologically")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random layered graph and print its topological order
    Demo {
        /// Number of candidate vertices (V0, V1, ...)
        #[arg(long, default_value_t = 8)]
        vertices: usize,
        /// Chance of adding each forward edge
        #[arg(long, default_value_t = DEFAULT_EDGE_PROBABILITY)]
        probability: f64,
        /// Seed for a reproducible graph
        #[arg(long)]
        seed: Option<u64>,
        /// Write the graph as Graphviz DOT to this path
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Print a topological order of the given graph
    Sort {
        #[command(flatten)]
        graph: GraphArgs,
        /// Sorting algorithm
        #[arg(long, value_enum, default_value_t = SortAlgorithm::Kahn)]
        algorithm: SortAlgorithm,
        /// Print the order as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Report whether the given graph contains a cycle
    Check {
        #[command(flatten)]
        graph: GraphArgs,
        /// Cycle detection algorithm
        #[arg(long, value_enum, default_value_t = CycleAlgorithm::Dfs)]
        algorithm: CycleAlgorithm,
    },

    /// Render the given graph as Graphviz DOT
    Dot {
        #[command(flatten)]
        graph: GraphArgs,
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Graph title
        #[arg(long, default_value = DEFAULT_TITLE)]
        title: String,
    },
}

/// Graph given on the command line
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edges written as FROM:TO
    pub edges: Vec<String>,
    /// Extra vertex with no edges (repeatable)
    #[arg(long = "vertex")]
    pub vertices: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Kahn,
    Dfs,
}

impl From<SortAlgorithm> for SortStrategy {
    fn from(algorithm: SortAlgorithm) -> Self {
        match algorithm {
            SortAlgorithm::Kahn => SortStrategy::Kahn,
            SortAlgorithm::Dfs => SortStrategy::DepthFirst,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleAlgorithm {
    Dfs,
    Kahn,
}

impl From<CycleAlgorithm> for CycleStrategy {
    fn from(algorithm: CycleAlgorithm) -> Self {
        match algorithm {
            CycleAlgorithm::Dfs => CycleStrategy::DepthFirst,
            CycleAlgorithm::Kahn => CycleStrategy::Kahn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sort_defaults() {
        let cli = Cli::try_parse_from(["dagraph", "sort", "A:B", "--vertex", "C"]).unwrap();
        match cli.command {
            Commands::Sort {
                graph,
                algorithm,
                json,
            } => {
                assert_eq!(graph.edges, vec!["A:B"]);
                assert_eq!(graph.vertices, vec!["C"]);
                assert_eq!(algorithm, SortAlgorithm::Kahn);
                assert!(!json);
            }
            _ => panic!("expected sort"),
        }
    }

    #[test]
    fn test_algorithm_mapping() {
        assert_eq!(SortStrategy::from(SortAlgorithm::Dfs), SortStrategy::DepthFirst);
        assert_eq!(CycleStrategy::from(CycleAlgorithm::Kahn), CycleStrategy::Kahn);
    }
}
