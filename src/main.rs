use clap::Parser;
use dagraph::cli::{Cli, Commands};
use dagraph::cli_handlers;
use std::process;

fn main() {
    // Diagnostics go to stderr so stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo {
            vertices,
            probability,
            seed,
            dot,
        } => cli_handlers::handle_demo(vertices, probability, seed, dot.as_deref()),
        Commands::Sort {
            graph,
            algorithm,
            json,
        } => cli_handlers::handle_sort(&graph, algorithm, json),
        Commands::Check { graph, algorithm } => cli_handlers::handle_check(&graph, algorithm),
        Commands::Dot {
            graph,
            output,
            title,
        } => cli_handlers::handle_dot(&graph, output.as_deref(), &title),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
