use log::debug;

use crate::graph::traits::Graph;
use crate::graph::Weight;
use crate::{EdgeDefect, Error, Result};

/// A directed graph in compressed sparse row layout
///
/// All outgoing edges of vertex `v` live contiguously in
/// `targets[offsets[v]..offsets[v + 1]]` (with matching `weights`), so
/// enumerating a neighborhood is a linear scan. The structure has no mutating
/// methods: once built it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// Row pointers, `vertex_count + 1` entries
    offsets: Vec<usize>,

    /// Edge targets grouped by source vertex
    targets: Vec<usize>,

    /// Edge weights, parallel to `targets`
    weights: Vec<Weight>,
}

/// Lazy iterator over the outgoing `(target, weight)` pairs of one vertex
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    targets: std::slice::Iter<'a, usize>,
    weights: std::slice::Iter<'a, Weight>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = (usize, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.targets.next()?, *self.weights.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

fn check_edge(index: usize, from: usize, to: usize, weight: Weight, n: usize) -> Result<()> {
    let defect = if from >= n {
        Some(EdgeDefect::SourceOutOfRange)
    } else if to >= n {
        Some(EdgeDefect::TargetOutOfRange)
    } else if !weight.is_finite() {
        Some(EdgeDefect::NonFiniteWeight(weight))
    } else if weight < 0.0 {
        Some(EdgeDefect::NegativeWeight(weight))
    } else {
        None
    };

    match defect {
        Some(defect) => Err(Error::InvalidEdge {
            index,
            from,
            to,
            defect,
        }),
        None => Ok(()),
    }
}

impl CsrGraph {
    /// Builds a graph with `vertex_count` vertices from `(u, v, weight)` triples.
    ///
    /// Every edge is validated before any CSR storage is allocated. Edges keep
    /// their input order within each source vertex.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Weight)>,
    {
        let edges: Vec<(usize, usize, Weight)> = edges.into_iter().collect();

        for (index, &(from, to, weight)) in edges.iter().enumerate() {
            check_edge(index, from, to, weight, vertex_count)?;
        }

        // Counting sort by source vertex
        let mut offsets = vec![0usize; vertex_count + 1];
        for &(from, _, _) in &edges {
            offsets[from + 1] += 1;
        }
        for v in 0..vertex_count {
            offsets[v + 1] += offsets[v];
        }

        let mut cursor = offsets.clone();
        let mut targets = vec![0usize; edges.len()];
        let mut weights = vec![0.0; edges.len()];
        for &(from, to, weight) in &edges {
            let slot = cursor[from];
            targets[slot] = to;
            weights[slot] = weight;
            cursor[from] += 1;
        }

        debug!(
            "Built CSR graph with {} vertices and {} edges",
            vertex_count,
            targets.len()
        );

        Ok(CsrGraph {
            offsets,
            targets,
            weights,
        })
    }

    /// Builds a graph directly from CSR arrays (`indptr`, `indices`, `weights`).
    ///
    /// The vertex count is `indptr.len() - 1`.
    pub fn from_csr(indptr: &[usize], indices: &[usize], weights: &[Weight]) -> Result<Self> {
        if indptr.is_empty() {
            return Err(Error::InvalidCsr("indptr must have at least one entry".to_string()));
        }
        if indptr[0] != 0 {
            return Err(Error::InvalidCsr(format!(
                "indptr must start at 0, found {}",
                indptr[0]
            )));
        }
        if indices.len() != weights.len() {
            return Err(Error::InvalidCsr(format!(
                "indices and weights must have same length ({} != {})",
                indices.len(),
                weights.len()
            )));
        }
        if let Some(row) = indptr.windows(2).position(|w| w[0] > w[1]) {
            return Err(Error::InvalidCsr(format!(
                "indptr decreases at row {}",
                row
            )));
        }
        let last = indptr[indptr.len() - 1];
        if last != indices.len() {
            return Err(Error::InvalidCsr(format!(
                "indptr ends at {} but there are {} edges",
                last,
                indices.len()
            )));
        }

        let n = indptr.len() - 1;
        for from in 0..n {
            for index in indptr[from]..indptr[from + 1] {
                check_edge(index, from, indices[index], weights[index], n)?;
            }
        }

        debug!("Adopted CSR arrays with {} vertices and {} edges", n, indices.len());

        Ok(CsrGraph {
            offsets: indptr.to_vec(),
            targets: indices.to_vec(),
            weights: weights.to_vec(),
        })
    }

    /// Returns the row pointer array
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Returns the largest out-degree of any vertex
    pub fn max_out_degree(&self) -> usize {
        self.offsets
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }

    /// Returns every edge as `(u, v, weight)` in CSR order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        (0..self.vertex_count())
            .flat_map(move |u| self.neighbors(u).map(move |(v, w)| (u, v, w)))
    }

    /// Returns the reverse graph, where every edge `u -> v` becomes `v -> u`.
    ///
    /// Running a query on the transpose yields distances *to* the source vertex.
    pub fn transpose(&self) -> CsrGraph {
        let n = self.vertex_count();
        let mut offsets = vec![0usize; n + 1];
        for &to in &self.targets {
            offsets[to + 1] += 1;
        }
        for v in 0..n {
            offsets[v + 1] += offsets[v];
        }

        let mut cursor = offsets.clone();
        let mut targets = vec![0usize; self.targets.len()];
        let mut weights = vec![0.0; self.weights.len()];
        for (from, to, weight) in self.edges() {
            let slot = cursor[to];
            targets[slot] = from;
            weights[slot] = weight;
            cursor[to] += 1;
        }

        CsrGraph {
            offsets,
            targets,
            weights,
        }
    }

    fn range(&self, vertex: usize) -> std::ops::Range<usize> {
        if vertex < self.vertex_count() {
            self.offsets[vertex]..self.offsets[vertex + 1]
        } else {
            0..0
        }
    }
}

impl Graph for CsrGraph {
    fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    fn edge_count(&self) -> usize {
        self.targets.len()
    }

    fn neighbors(&self, vertex: usize) -> Neighbors<'_> {
        let (targets, weights) = self.neighbor_slices(vertex);
        Neighbors {
            targets: targets.iter(),
            weights: weights.iter(),
        }
    }

    fn neighbor_slices(&self, vertex: usize) -> (&[usize], &[Weight]) {
        let range = self.range(vertex);
        (&self.targets[range.clone()], &self.weights[range])
    }
}
