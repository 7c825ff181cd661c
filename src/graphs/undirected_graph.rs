use std::collections::BTreeSet;

use ahash::{HashMap, HashMapExt};

use super::{Graph, TaillessEdge, Vertex, WeightedEdge};

/// Undirected weighted graph stored as adjacency lists.
///
/// Every inserted edge is stored twice, once per endpoint, and adjacency
/// lists keep insertion order. Parallel edges and self-loops are kept as they
/// are; nothing is deduplicated.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    edges: HashMap<Vertex, Vec<TaillessEdge>>,
    vertices: BTreeSet<Vertex>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        UndirectedGraph {
            edges: HashMap::new(),
            vertices: BTreeSet::new(),
        }
    }

    pub fn from_edges(edges: &[WeightedEdge]) -> UndirectedGraph {
        let mut graph = UndirectedGraph::new();
        edges.iter().for_each(|edge| graph.add_edge(edge));
        graph
    }

    pub fn add_edge(&mut self, edge: &WeightedEdge) {
        self.edges
            .entry(edge.tail)
            .or_default()
            .push(edge.remove_tail());
        self.edges
            .entry(edge.head)
            .or_default()
            .push(edge.reversed().remove_tail());

        self.vertices.insert(edge.tail);
        self.vertices.insert(edge.head);
    }
}

impl Graph for UndirectedGraph {
    fn number_of_vertices(&self) -> u32 {
        self.vertices.len() as u32
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.values().map(Vec::len).sum::<usize>() as u32
    }

    fn has_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + Send + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // The iterator has to own `tail` so the returned edges can carry it.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edge_iter = self
            .edges
            .get(&tail)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
            .iter();

        Box::new(EdgeIterator { edge_iter, tail })
    }
}
