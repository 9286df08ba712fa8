use std::env;
use std::process;

use fast_dijkstra::io::{load_graph, BatchReport, DenseReport, DistanceReport};
use fast_dijkstra::{BatchDispatcher, DispatchConfig, Graph};

const USAGE: &str = "usage: sssp <graph-file> <source>... [--threads N] [--cutoff X] [--mode sequential|intra] [--dense]";

struct Options {
    graph_path: String,
    sources: Vec<usize>,
    config: DispatchConfig,
    dense: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut config = DispatchConfig::from_env().map_err(|e| e.to_string())?;
    let mut positional = Vec::new();
    let mut dense = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{} requires a value", flag))
        };
        match arg.as_str() {
            "--threads" => {
                let raw = value("--threads")?;
                config.worker_count = raw.parse().map_err(|_| format!("invalid thread count: {}", raw))?;
            }
            "--cutoff" => {
                let raw = value("--cutoff")?;
                config.cutoff = Some(raw.parse().map_err(|_| format!("invalid cutoff: {}", raw))?);
            }
            "--mode" => {
                config.mode = value("--mode")?.parse().map_err(|e: fast_dijkstra::Error| e.to_string())?;
            }
            "--dense" => dense = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => positional.push(arg.clone()),
        }
    }

    let mut positional = positional.into_iter();
    let graph_path = positional.next().ok_or_else(|| USAGE.to_string())?;
    let sources = positional
        .map(|raw| raw.parse().map_err(|_| format!("invalid source vertex: {}", raw)))
        .collect::<Result<Vec<usize>, String>>()?;
    if sources.is_empty() {
        return Err(USAGE.to_string());
    }

    Ok(Options {
        graph_path,
        sources,
        config,
        dense,
    })
}

fn run(options: Options) -> Result<(), Box<dyn std::error::Error>> {
    let graph = load_graph(&options.graph_path)?;
    log::info!(
        "Graph {}: {} vertices, {} edges",
        options.graph_path,
        graph.vertex_count(),
        graph.edge_count()
    );

    let dispatcher = BatchDispatcher::new(options.config)?;

    let json = if options.dense {
        let matrix = dispatcher.run_dense(&graph, &options.sources)?;
        serde_json::to_string_pretty(&DenseReport::from(&matrix))?
    } else if options.sources.len() == 1 {
        let result = dispatcher.run_single(&graph, options.sources[0])?;
        serde_json::to_string_pretty(&DistanceReport::from(&result))?
    } else {
        let batch = dispatcher.run(&graph, &options.sources);
        serde_json::to_string_pretty(&BatchReport::from(&batch))?
    };

    println!("{}", json);
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    if let Err(e) = run(options) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
