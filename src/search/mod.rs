use collections::dijkstra_data::Path;

use crate::graphs::{Distance, Vertex};

pub mod collections;
pub mod dijkstra;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path>;

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance>;
}
