use fast_dijkstra::graph::generators::{grid_graph, random_integer_graph};
use fast_dijkstra::{
    build_graph, shortest_paths, CsrGraph, Dijkstra, Error, Graph, ShortestPathAlgorithm,
    UNREACHED,
};

// Shortest distance over every simple path, by exhaustive DFS
fn brute_force(graph: &CsrGraph, source: usize) -> Vec<f64> {
    fn visit(graph: &CsrGraph, u: usize, dist: f64, on_path: &mut Vec<bool>, best: &mut Vec<f64>) {
        if dist < best[u] {
            best[u] = dist;
        }
        for (v, w) in graph.neighbors(u) {
            if !on_path[v] {
                on_path[v] = true;
                visit(graph, v, dist + w, on_path, best);
                on_path[v] = false;
            }
        }
    }

    let n = graph.vertex_count();
    let mut best = vec![UNREACHED; n];
    let mut on_path = vec![false; n];
    on_path[source] = true;
    visit(graph, source, 0.0, &mut on_path, &mut best);
    best
}

fn scenario_graph() -> CsrGraph {
    CsrGraph::build(
        4,
        vec![(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0), (2, 3, 5.0)],
    )
    .unwrap()
}

#[test]
fn test_reference_scenario() {
    let graph = build_graph(
        4,
        vec![(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0), (2, 3, 5.0)],
    )
    .unwrap();
    let result = shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.source(), 0);
    assert_eq!(result.distances(), &[0.0, 2.0, 1.0, 3.0]);
    assert_eq!(result.predecessor(0), None);
    assert_eq!(result.predecessor(1), Some(2));
    assert_eq!(result.predecessor(2), Some(0));
    assert_eq!(result.predecessor(3), Some(1));
    assert_eq!(result.path_to(3), Some(vec![0, 2, 1, 3]));
    assert_eq!(result.path_to(0), Some(vec![0]));
}

#[test]
fn test_invalid_source_is_rejected() {
    let graph = scenario_graph();
    let dijkstra = Dijkstra::new();
    assert!(matches!(
        dijkstra.compute_shortest_paths(&graph, 4),
        Err(Error::InvalidVertex(4))
    ));
}

#[test]
fn test_unreachable_vertices_use_sentinel() {
    let graph = CsrGraph::build(5, vec![(0, 1, 2.0), (3, 4, 1.0)]).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distance(1), Some(2.0));
    for v in [2, 3, 4] {
        assert_eq!(result.raw_distance(v), UNREACHED);
        assert_eq!(result.distance(v), None);
        assert_eq!(result.predecessor(v), None);
        assert!(!result.is_reached(v));
        assert_eq!(result.path_to(v), None);
    }
    assert_eq!(result.reached_count(), 2);
}

#[test]
fn test_zero_weight_self_loops_and_cycles_terminate() {
    let graph = CsrGraph::build(
        3,
        vec![(0, 0, 0.0), (0, 1, 0.0), (1, 0, 0.0), (1, 1, 0.0), (1, 2, 3.0), (2, 2, 1.0)],
    )
    .unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances(), &[0.0, 0.0, 3.0]);
    assert_eq!(result.predecessor(0), None);
    assert_eq!(result.predecessor(1), Some(0));
    assert_eq!(result.predecessor(2), Some(1));
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    for seed in 0..40 {
        let n = 2 + (seed as usize % 9);
        let graph = random_integer_graph(n, 3 * n, 10, seed).unwrap();
        let dijkstra = Dijkstra::new();

        for source in 0..n {
            let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();
            let expected = brute_force(&graph, source);
            assert_eq!(
                result.distances(),
                expected.as_slice(),
                "seed {} source {}",
                seed,
                source
            );
        }
    }
}

#[test]
fn test_triangle_inequality_and_tight_tree_edges() {
    let graph = random_integer_graph(300, 1500, 20, 99).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    for (u, v, w) in graph.edges() {
        if let Some(du) = result.distance(u) {
            let dv = result.distance(v).expect("neighbor of a reached vertex is reached");
            assert!(dv <= du + w, "edge {} -> {} violates triangle inequality", u, v);
        }
    }

    for v in 0..graph.vertex_count() {
        if v == result.source() || !result.is_reached(v) {
            continue;
        }
        let pred = result.predecessor(v).expect("reached vertex has a predecessor");
        let weight = graph.edge_weight(pred, v).expect("tree edge exists");
        assert_eq!(result.raw_distance(v), result.raw_distance(pred) + weight);
    }
}

#[test]
fn test_repeated_queries_are_bit_identical() {
    let graph = random_integer_graph(500, 3000, 1000, 5).unwrap();
    let dijkstra = Dijkstra::new();

    let first = dijkstra.compute_shortest_paths(&graph, 17).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, 17).unwrap();
    assert_eq!(first, second);

    let first_bits: Vec<u64> = first.distances().iter().map(|d| d.to_bits()).collect();
    let second_bits: Vec<u64> = second.distances().iter().map(|d| d.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
}

#[test]
fn test_result_does_not_depend_on_edge_input_order() {
    let edges = vec![(0, 1, 4.0), (0, 2, 1.0), (2, 1, 1.0), (1, 3, 1.0), (2, 3, 5.0), (0, 3, 3.0)];
    let mut reversed = edges.clone();
    reversed.reverse();

    let a = CsrGraph::build(4, edges).unwrap();
    let b = CsrGraph::build(4, reversed).unwrap();
    let ra = Dijkstra::new().compute_shortest_paths(&a, 0).unwrap();
    let rb = Dijkstra::new().compute_shortest_paths(&b, 0).unwrap();
    assert_eq!(ra.distances(), rb.distances());
}

#[test]
fn test_cutoff_leaves_far_vertices_unreached() {
    let graph = scenario_graph();
    let result = Dijkstra::new()
        .with_cutoff(2.0)
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.distance(0), Some(0.0));
    assert_eq!(result.distance(2), Some(1.0));
    assert_eq!(result.distance(1), Some(2.0));
    assert_eq!(result.distance(3), None);
    assert_eq!(result.predecessor(3), None);
}

#[test]
fn test_grid_distances_are_manhattan() {
    let (width, height) = (12, 9);
    let graph = grid_graph(width, height).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    for y in 0..height {
        for x in 0..width {
            assert_eq!(result.distance(y * width + x), Some((x + y) as f64));
        }
    }

    let path = result.path_to(width * height - 1).unwrap();
    assert_eq!(path.len(), width + height - 1);
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "path uses a missing edge");
    }
}

#[test]
fn test_transpose_gives_distances_to_target() {
    let graph = random_integer_graph(60, 300, 15, 8).unwrap();
    let reverse = graph.transpose();
    let dijkstra = Dijkstra::new();
    let target = 4;

    let to_target = dijkstra.compute_shortest_paths(&reverse, target).unwrap();
    for source in 0..graph.vertex_count() {
        let forward = dijkstra.compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(forward.raw_distance(target), to_target.raw_distance(source));
    }
}
