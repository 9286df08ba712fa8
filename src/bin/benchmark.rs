use std::time::{Duration, Instant};

use fast_dijkstra::graph::generators::{random_graph, star_graph};
use fast_dijkstra::{
    BatchDispatcher, CsrGraph, Dijkstra, DispatchConfig, Graph, RelaxationMode,
    ShortestPathAlgorithm,
};

// Solves every source one after another on the calling thread
fn benchmark_sequential(graph: &CsrGraph, sources: &[usize]) -> Duration {
    let dijkstra = Dijkstra::new();
    let start = Instant::now();
    let mut reached = 0;
    for &source in sources {
        if let Ok(result) = dijkstra.compute_shortest_paths(graph, source) {
            reached += result.reached_count();
        }
    }
    let duration = start.elapsed();
    println!("  - Sequential: {} vertex settlements in {:?}", reached, duration);
    duration
}

fn benchmark_batch(graph: &CsrGraph, sources: &[usize], config: DispatchConfig) -> Option<Duration> {
    let dispatcher = match BatchDispatcher::new(config) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("  - Could not build dispatcher: {}", e);
            return None;
        }
    };

    let start = Instant::now();
    let results = dispatcher.run(graph, sources);
    let duration = start.elapsed();
    println!(
        "  - Batch ({} workers, {:?}): {} sources in {:?}",
        dispatcher.worker_count(),
        dispatcher.config().mode,
        results.successes().count(),
        duration
    );
    Some(duration)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![10_000, 50_000, 100_000];
    let edge_factor = 4.0;
    let source_count = 64;
    let worker_counts = vec![1, 2, 4, 0];

    println!("=====================================================");
    println!("Benchmark: sequential vs batch Dijkstra");
    println!("Edge factor: {} edges per vertex, {} sources", edge_factor, source_count);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = match random_graph(size, edge_factor, 42) {
            Ok(graph) => graph,
            Err(e) => {
                eprintln!("Skipping size {}: {}", size, e);
                continue;
            }
        };
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let sources: Vec<usize> = (0..source_count).map(|i| i * size / source_count).collect();
        let sequential = benchmark_sequential(&graph, &sources);

        for &workers in &worker_counts {
            let config = DispatchConfig::default().with_worker_count(workers);
            if let Some(batch) = benchmark_batch(&graph, &sources, config) {
                results.push((size, workers, sequential, batch));
            }
        }
    }

    println!("\nHub-heavy graph (star with 200000 leaves), intra-query relaxation:");
    match star_graph(200_001, 7) {
        Ok(star) => {
            let sources = [0usize];
            benchmark_sequential(&star, &sources);
            let config = DispatchConfig::default()
                .with_mode(RelaxationMode::IntraQuery)
                .with_parallel_degree_threshold(4096);
            benchmark_batch(&star, &sources, config);
        }
        Err(e) => eprintln!("Skipping star graph: {}", e),
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<8} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Workers", "Sequential (ms)", "Batch (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, workers, sequential, batch) in &results {
        let speedup = sequential.as_secs_f64() / batch.as_secs_f64();
        let workers = if *workers == 0 {
            "all".to_string()
        } else {
            workers.to_string()
        };
        println!(
            "{:<10} | {:<8} | {:<15} | {:<15} | {:<10.2}",
            size,
            workers,
            sequential.as_millis(),
            batch.as_millis(),
            speedup
        );
    }
}
