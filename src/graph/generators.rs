//! Seeded graph generators used by the benchmarks and tests.

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::csr::CsrGraph;
use crate::graph::Weight;
use crate::Result;

/// Generates a random directed graph with about `edge_factor * n` edges
/// and weights drawn uniformly from `[1, 100)`.
///
/// Self-loops are skipped, so the actual edge count can be slightly lower.
pub fn random_graph(n: usize, edge_factor: f64, seed: u64) -> Result<CsrGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = if n == 0 { 0 } else { (edge_factor * n as f64) as usize };

    let mut edges = Vec::with_capacity(num_edges);
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            edges.push((u, v, rng.gen_range(1.0..100.0)));
        }
    }

    CsrGraph::build(n, edges)
}

/// Generates a random directed graph whose weights are integers in `[0, max_weight]`.
///
/// Integer-valued weights make distance sums exact, which is what the
/// brute-force comparisons in the test suite rely on. Self-loops and parallel
/// edges are allowed.
pub fn random_integer_graph(n: usize, edge_count: usize, max_weight: u32, seed: u64) -> Result<CsrGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(edge_count);
    if n > 0 {
        for _ in 0..edge_count {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            let w = rng.gen_range(0..=max_weight) as Weight;
            edges.push((u, v, w));
        }
    }

    CsrGraph::build(n, edges)
}

/// Generates a `width x height` grid with unit-weight edges in both directions
/// between 4-connected cells. Vertex `y * width + x` is cell `(x, y)`.
pub fn grid_graph(width: usize, height: usize) -> Result<CsrGraph> {
    let index = |x: usize, y: usize| y * width + x;
    let mut edges = Vec::with_capacity(4 * width * height);

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                edges.push((current, index(x + 1, y), 1.0));
                edges.push((index(x + 1, y), current, 1.0));
            }
            if y + 1 < height {
                edges.push((current, index(x, y + 1), 1.0));
                edges.push((index(x, y + 1), current, 1.0));
            }
        }
    }

    CsrGraph::build(width * height, edges)
}

/// Generates a star: vertex 0 points at every other vertex with a random
/// weight, and every leaf points back at the hub.
///
/// The hub's out-degree is `n - 1`, which makes this the reference input for
/// intra-query parallel relaxation.
pub fn star_graph(n: usize, seed: u64) -> Result<CsrGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(2 * n);
    for leaf in 1..n {
        edges.push((0, leaf, rng.gen_range(1.0..100.0)));
        edges.push((leaf, 0, rng.gen_range(1.0..100.0)));
    }

    CsrGraph::build(n, edges)
}

/// Generates a Barabási-Albert scale-free graph with `n` vertices, each new
/// vertex attaching `m` edges (both directions) by preferential attachment.
pub fn barabasi_albert(n: usize, m: usize, seed: u64) -> Result<CsrGraph> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = m.max(1);
    let mut edges = Vec::new();
    if n <= m {
        return CsrGraph::build(n, edges);
    }

    // Every endpoint occurrence, so picking uniformly from it is degree-weighted
    let mut endpoints: Vec<usize> = Vec::new();
    for i in 0..m {
        for j in 0..m {
            if i != j {
                edges.push((i, j, rng.gen_range(1.0..100.0)));
                endpoints.push(i);
            }
        }
    }
    if endpoints.is_empty() {
        endpoints.push(0);
    }

    for i in m..n {
        let mut chosen: Vec<usize> = Vec::with_capacity(m);
        while chosen.len() < m.min(i) {
            let target = endpoints[rng.gen_range(0..endpoints.len())];
            if !chosen.contains(&target) {
                chosen.push(target);
            }
        }
        for target in chosen {
            let weight = rng.gen_range(1.0..100.0);
            edges.push((i, target, weight));
            edges.push((target, i, weight));
            endpoints.push(target);
            endpoints.push(i);
        }
    }

    CsrGraph::build(n, edges)
}
