//! Minimal input/output contract: graph files in, JSON reports out.
//!
//! Two graph formats are accepted:
//!
//! * a plain edge list, with a header line `n` or `n m` followed by one
//!   `u v w` line per edge (`#` starts a comment, blank lines are ignored);
//! * a JSON document `{ "vertex_count": n, "edges": [[u, v, w], ...] }`.
//!
//! Reports use `null` for unreached distances and missing predecessors, since
//! JSON has no infinity.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::DistanceVector;
use crate::dispatch::{BatchResults, DistanceMatrix};
use crate::graph::{CsrGraph, Graph, Weight};
use crate::{Error, Result, UNREACHED};

/// Serialized form of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, Weight)>,
}

impl GraphDocument {
    pub fn from_graph(graph: &CsrGraph) -> Self {
        GraphDocument {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }

    pub fn into_graph(self) -> Result<CsrGraph> {
        CsrGraph::build(self.vertex_count, self.edges)
    }
}

/// Report for one successful query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceReport {
    pub source: usize,
    pub reached: usize,
    pub distances: Vec<Option<Weight>>,
    pub predecessors: Vec<Option<usize>>,
}

impl From<&DistanceVector> for DistanceReport {
    fn from(result: &DistanceVector) -> Self {
        DistanceReport {
            source: result.source(),
            reached: result.reached_count(),
            distances: result.distances().iter().map(|&d| finite(d)).collect(),
            predecessors: result.predecessors().to_vec(),
        }
    }
}

/// One entry of a batch report; exactly one of `result` and `error` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceReport {
    pub source: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<DistanceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Batch report with entries sorted by source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<SourceReport>,
}

impl From<&BatchResults> for BatchReport {
    fn from(batch: &BatchResults) -> Self {
        let mut sources: Vec<usize> = batch.sources().collect();
        sources.sort_unstable();

        let results = sources
            .into_iter()
            .filter_map(|source| {
                batch.get(source).map(|outcome| match outcome {
                    Ok(result) => SourceReport {
                        source,
                        result: Some(result.into()),
                        error: None,
                    },
                    Err(e) => SourceReport {
                        source,
                        result: None,
                        error: Some(e.to_string()),
                    },
                })
            })
            .collect();

        BatchReport { results }
    }
}

/// Dense matrix report, rows in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseReport {
    pub sources: Vec<usize>,
    pub vertex_count: usize,
    pub distances: Vec<Vec<Option<Weight>>>,
    pub predecessors: Vec<Vec<i64>>,
}

impl From<&DistanceMatrix> for DenseReport {
    fn from(matrix: &DistanceMatrix) -> Self {
        let codes = matrix.predecessor_codes();
        let n = matrix.vertex_count();
        DenseReport {
            sources: matrix.sources().to_vec(),
            vertex_count: n,
            distances: (0..matrix.rows())
                .map(|row| matrix.distance_row(row).iter().map(|&d| finite(d)).collect())
                .collect(),
            predecessors: (0..matrix.rows())
                .map(|row| codes[row * n..(row + 1) * n].to_vec())
                .collect(),
        }
    }
}

fn finite(distance: Weight) -> Option<Weight> {
    if distance == UNREACHED {
        None
    } else {
        Some(distance)
    }
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, line: usize, what: &str) -> Result<T> {
    let raw = field.ok_or_else(|| Error::Parse {
        line,
        message: format!("missing {}", what),
    })?;
    raw.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {} {:?}", what, raw),
    })
}

/// Reads a plain-text edge list
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<CsrGraph> {
    let mut header: Option<(usize, Option<usize>)> = None;
    let mut edges = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut fields = content.split_whitespace();
        match header {
            None => {
                let n = parse_field(fields.next(), line_no, "vertex count")?;
                let m = match fields.next() {
                    Some(raw) => Some(parse_field(Some(raw), line_no, "edge count")?),
                    None => None,
                };
                header = Some((n, m));
            }
            Some(_) => {
                let u = parse_field(fields.next(), line_no, "source vertex")?;
                let v = parse_field(fields.next(), line_no, "target vertex")?;
                let w = parse_field(fields.next(), line_no, "weight")?;
                if fields.next().is_some() {
                    return Err(Error::Parse {
                        line: line_no,
                        message: "expected exactly three fields".to_string(),
                    });
                }
                edges.push((u, v, w));
            }
        }
    }

    let (n, m) = header.ok_or_else(|| Error::Parse {
        line: 0,
        message: "missing header line".to_string(),
    })?;
    if let Some(m) = m {
        if m != edges.len() {
            return Err(Error::Parse {
                line: 0,
                message: format!("header declares {} edges but {} were read", m, edges.len()),
            });
        }
    }

    CsrGraph::build(n, edges)
}

/// Reads a JSON graph document
pub fn read_json_graph<R: Read>(reader: R) -> Result<CsrGraph> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    document.into_graph()
}

/// Loads a graph file, choosing the format from the extension (`.json` or edge list)
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<CsrGraph> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    let graph = if is_json {
        read_json_graph(reader)?
    } else {
        read_edge_list(reader)?
    };
    debug!(
        "Loaded {} ({} vertices, {} edges)",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
