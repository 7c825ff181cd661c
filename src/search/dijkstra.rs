use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, trace};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap, Path},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
    PathFinding,
};
use crate::graphs::{Distance, Graph, Vertex};

/// Shortest path search on a borrowed graph.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        Dijkstra { graph }
    }
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        dijkstra_one_to_one(self.graph, source, target)
    }

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance> {
        self.shortest_path(source, target).map(|path| path.distance)
    }
}

/// Runs Dijkstra from `source` until `target` is settled or the frontier is
/// exhausted.
///
/// Vertices are settled in order of tentative distance, ties going to the
/// smaller vertex id. Edges into settled vertices are never relaxed. Stale
/// heap entries are skipped when popped.
pub fn dijkstra_single_pair(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    source: Vertex,
    target: Vertex,
) {
    let mut queue = BinaryHeap::new();
    data.set_distance(source, 0);
    queue.push(Reverse((0, source)));

    while let Some(Reverse((_, tail))) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }
        if tail == target {
            break;
        }

        let Some(distance_tail) = data.get_distance(tail) else {
            continue;
        };
        trace!(vertex = tail, distance = distance_tail, "settled");

        for edge in graph.edges(tail) {
            if expanded.is_expanded(edge.head) {
                continue;
            }

            let alternative_distance_head = distance_tail.saturating_add(edge.weight);
            let improves = data
                .get_distance(edge.head)
                .map_or(true, |current_distance_head| {
                    alternative_distance_head < current_distance_head
                });
            if improves {
                data.set_distance(edge.head, alternative_distance_head);
                data.set_predecessor(edge.head, tail);
                queue.push(Reverse((alternative_distance_head, edge.head)));
            }
        }
    }
}

/// Computes a shortest path between `source` and `target`.
///
/// `source == target` always yields the single vertex path of distance 0,
/// whether or not the vertex is part of the graph. Otherwise `None` is
/// returned if either vertex is unknown or `target` is unreachable.
pub fn dijkstra_one_to_one(graph: &dyn Graph, source: Vertex, target: Vertex) -> Option<Path> {
    if source == target {
        return Some(Path {
            vertices: vec![source],
            distance: 0,
        });
    }

    if !graph.has_vertex(source) || !graph.has_vertex(target) {
        debug!(source, target, "endpoint not in graph, no path");
        return None;
    }

    let mut data = DijkstraDataHashMap::new();
    let mut expanded = VertexExpandedDataHashSet::new();
    dijkstra_single_pair(graph, &mut data, &mut expanded, source, target);

    let path = data.get_path(source, target);
    match &path {
        Some(path) => debug!(
            source,
            target,
            distance = path.distance,
            hops = path.vertices.len() - 1,
            "shortest path found"
        ),
        None => debug!(source, target, "target unreachable"),
    }
    path
}
