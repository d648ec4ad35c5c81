//! Times reachability and shortest-path queries on a random room network.
//!
//! Run: cargo run --bin roomnav-bench -- --rooms 10000 --targets room100,room900

use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use roomnav_demos::generate_network;
use roomnav_paths::{Navigator, SearchConfig};

#[derive(Parser, Debug)]
#[command(name = "roomnav-bench", about = "Time path queries on a random room network")]
struct Args {
    /// Number of rooms to generate.
    #[arg(long, default_value_t = 10_000)]
    rooms: usize,

    /// RNG seed for the network shape.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Rooms to search for.
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["room100", "room200", "room300", "room500", "room700", "room900"]
    )]
    targets: Vec<String>,

    /// Give up a search after this many expansions.
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Cost of a single passage. Must be finite and positive.
    #[arg(long, default_value_t = 1.0, value_parser = parse_edge_weight)]
    edge_weight: f32,
}

fn parse_edge_weight(s: &str) -> Result<f32, String> {
    let weight: f32 = s.parse().map_err(|e| format!("{e}"))?;
    let config = SearchConfig {
        edge_weight: weight,
        ..Default::default()
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(weight)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = SearchConfig {
        edge_weight: args.edge_weight,
        max_expansions: args.max_expansions,
    };

    let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
    let started = Instant::now();
    let (mut graph, _) = match generate_network(args.rooms, &mut rng) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    graph.set_config(config);
    println!("Graph creation: {:?} ({} rooms)", started.elapsed(), graph.node_count());

    let mut nav = Navigator::with_config(config);
    // Target lookup is not part of the timed work, so it runs without a budget.
    let mut lookup = Navigator::new();
    for target in &args.targets {
        let started = Instant::now();
        let path = nav.path_from(&graph, graph.root(), target);
        let elapsed = started.elapsed();
        match path {
            Some(p) => println!("Path finding {target}: {elapsed:?}, {} hops", p.len()),
            None => println!("Path finding {target}: {elapsed:?}, unreachable"),
        }

        let Some(id) = lookup.find_from(&graph, graph.root(), target) else {
            log::info!("no room named {target:?}, skipping shortest path");
            continue;
        };
        let started = Instant::now();
        let shortest = nav.shortest_path_from(&graph, graph.root(), id);
        let elapsed = started.elapsed();
        match shortest {
            Some(sp) => println!("Shortest path {target}: {elapsed:?}, cost {}", sp.cost),
            None => println!("Shortest path {target}: {elapsed:?}, gave up"),
        }
    }
}
