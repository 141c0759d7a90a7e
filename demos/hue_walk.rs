//! Command-line walk through a color-teleport map.
//!
//! Prints the distance table from `--from`, the shortest path to `--to`,
//! and, with `--seek`, an AI agent stepping toward the nearest goal one tick
//! at a time.
//!
//! Run: cargo run --bin hue-walk -- --to 7,4 --seek 7,0
//! Set RUST_LOG=debug to see graph build summaries.

use clap::Parser;
use hue_demos::{Args, DEMO_GATES, DemoError, load_tiles, render_distances, render_path};
use hue_paths::{CellGraph, WeightGraph, WeightOptions, seek};
use tracing_subscriber::EnvFilter;

fn run(args: Args) -> Result<(), DemoError> {
    let tiles = load_tiles(&args)?;
    let gates = if args.map_file.is_none() && args.gates.is_empty() {
        DEMO_GATES.to_vec()
    } else {
        args.gates.clone()
    };
    let graph = CellGraph::build(&tiles, gates.iter().copied())?;
    println!(
        "{}x{} cells, {} gate(s)",
        graph.size_x(),
        graph.size_y(),
        gates.len()
    );

    let weights = WeightGraph::build(&graph, args.from, args.options())?;
    println!("\ndistances from {}:\n{}", args.from, render_distances(&weights));

    if let Some(to) = args.to {
        match weights.lookup_shortest_path(to) {
            Some(path) => {
                let route: Vec<String> = path.iter().map(ToString::to_string).collect();
                println!("path to {to} ({} hops): {}", path.hops(), route.join(" "));
                println!("{}", render_path(&graph, &path));
            }
            None => println!("{to} is not accessible"),
        }
    }

    if !args.seek.is_empty() {
        let mut at = args.from;
        println!("seeking {} goal(s) from {at}", args.seek.len());
        for tick in 1..=args.ticks {
            let goals = args.seek.iter().copied();
            let Some(next) = seek::plan_step(&graph, at, goals, WeightOptions::SEEKER)? else {
                println!("tick {tick}: no move");
                break;
            };
            log::info!("tick {tick}: {at} -> {next}");
            println!("tick {tick}: {at} -> {next}");
            at = next;
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
