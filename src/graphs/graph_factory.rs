use tracing::debug;

use super::{UndirectedGraph, WeightedEdge};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Builds a graph from `[from, to, weight]` rows as found in question
    /// files. Rows with fewer than three fields are skipped.
    pub fn from_rows<R>(rows: &[R]) -> UndirectedGraph
    where
        R: AsRef<[i64]>,
    {
        let edges: Vec<WeightedEdge> = rows
            .iter()
            .filter_map(|row| {
                let edge = WeightedEdge::from_row(row.as_ref());
                if edge.is_none() {
                    debug!(row = ?row.as_ref(), "skipping edge row with fewer than three fields");
                }
                edge
            })
            .collect();

        debug!(
            rows = rows.len(),
            edges = edges.len(),
            "building undirected graph"
        );
        UndirectedGraph::from_edges(&edges)
    }
}
