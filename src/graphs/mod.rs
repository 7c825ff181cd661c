use tracing::trace;

pub mod edge;
pub mod graph_factory;
pub mod undirected_graph;

pub use edge::{TaillessEdge, WeightedEdge};
pub use undirected_graph::UndirectedGraph;

pub type Vertex = i64;
pub type Distance = i64;

/// Errors that make a sequence of vertices an illegal walk in a graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Path must have at least 2 nodes")]
    TooShort,
    #[error("Node {0} does not exist in graph")]
    UnknownVertex(Vertex),
    #[error("No edge exists between nodes {tail} and {head}")]
    MissingEdge { tail: Vertex, head: Vertex },
}

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    /// Number of adjacency entries. Every undirected edge counts twice.
    fn number_of_edges(&self) -> u32;

    fn has_vertex(&self, vertex: Vertex) -> bool;

    /// All known vertices in ascending order.
    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + Send + '_>;

    /// Edges leaving `tail` in insertion order, empty if `tail` is unknown.
    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    /// Replays `vertices` as a walk and returns its total distance.
    ///
    /// For every consecutive pair the first edge in adjacency order that
    /// reaches the next vertex is used, even if a cheaper parallel edge
    /// exists. Only the tail of each pair is checked for existence; the last
    /// vertex is covered by the edge that reaches it.
    fn get_path_distance(&self, vertices: &[Vertex]) -> Result<Distance, PathError> {
        if vertices.len() < 2 {
            return Err(PathError::TooShort);
        }

        let mut distance: Distance = 0;
        for pair in vertices.windows(2) {
            let (tail, head) = (pair[0], pair[1]);

            if !self.has_vertex(tail) {
                return Err(PathError::UnknownVertex(tail));
            }

            let edge = self
                .edges(tail)
                .find(|edge| edge.head == head)
                .ok_or(PathError::MissingEdge { tail, head })?;

            trace!(tail, head, weight = edge.weight, "replayed edge");
            distance = distance.saturating_add(edge.weight);
        }

        Ok(distance)
    }
}
