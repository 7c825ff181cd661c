use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

impl Path {
    pub fn source(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }
}

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Retrieves the tentative distance to a given vertex. `None` means the
    /// vertex has not been reached yet.
    fn get_distance(&self, vertex: Vertex) -> Option<Distance>;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// Constructs the path from `source` to `target`, if reachable.
    ///
    /// This traces back from the target vertex using predecessor data. If the
    /// chain ends anywhere but at `source` no path is returned, never a
    /// partial one.
    fn get_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while current != source {
            current = self.get_predecessor(current)?;
            vertices.push(current);
        }

        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

pub struct DijkstraDataHashMap {
    predecessors: HashMap<Vertex, Vertex>,
    distances: HashMap<Vertex, Distance>,
}

impl Default for DijkstraDataHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(&vertex).copied()
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors.insert(vertex, predecessor);
    }

    fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        self.distances.get(&vertex).copied()
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances.insert(vertex, distance);
    }
}

#[cfg(test)]
mod tests {
    use super::{DijkstraData, DijkstraDataHashMap, Path};

    #[test]
    fn path_follows_predecessors() {
        let mut data = DijkstraDataHashMap::new();
        data.set_distance(1, 0);
        data.set_distance(2, 4);
        data.set_distance(3, 5);
        data.set_predecessor(2, 1);
        data.set_predecessor(3, 2);

        assert_eq!(
            data.get_path(1, 3),
            Some(Path {
                vertices: vec![1, 2, 3],
                distance: 5
            })
        );
    }

    #[test]
    fn broken_predecessor_chain_yields_no_path() {
        let mut data = DijkstraDataHashMap::new();
        data.set_distance(1, 0);
        data.set_distance(3, 5);
        data.set_predecessor(3, 2);

        assert_eq!(data.get_path(1, 3), None);
    }

    #[test]
    fn unreached_target_yields_no_path() {
        let mut data = DijkstraDataHashMap::new();
        data.set_distance(1, 0);

        assert_eq!(data.get_path(1, 9), None);
    }
}
