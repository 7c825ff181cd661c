//! Random shortest path questions with known reference answers.

use ahash::{HashSet, HashSetExt};
use indicatif::ParallelProgressIterator;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::info;

use crate::{
    graphs::{Distance, UndirectedGraph, Vertex, WeightedEdge},
    question::Question,
    search::{collections::dijkstra_data::Path, dijkstra::dijkstra_one_to_one},
    utility::get_progressbar,
};

pub const DEFAULT_NODE_COUNTS: [u32; 5] = [20, 50, 80, 100, 120];
pub const MAX_WEIGHT: Distance = 20;
pub const DEFAULT_SEED: u64 = 42;

pub const INSTRUCTIONS: &str = "Find the shortest path from start_node to end_node in the \
undirected weighted graph. Each entry of `graph` is an edge [node1, node2, distance].

Explore the graph step by step: start at the source with distance 0, keep track of visited \
nodes and of the best known distance to every node, always continue with the unvisited node \
of smallest known distance and update the distances of its neighbors.

RESPONSE FORMAT: Respond with EXACTLY this format (no extra text):
Distance: [number], Path: [start]->[node]->[node]->[end]

Example: Distance: 15, Path: 0->2->5->3";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("a question needs at least 2 nodes, got {0}")]
    TooFewVertices(u32),
    #[error("maximum edge weight must be at least 1, got {0}")]
    InvalidMaxWeight(Distance),
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub node_counts: Vec<u32>,
    pub max_weight: Distance,
    /// Question `i` is generated from seed `seed + i`.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            node_counts: DEFAULT_NODE_COUNTS.to_vec(),
            max_weight: MAX_WEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedQuestion {
    pub question: Question,
    pub reference: Option<Path>,
    pub file_name: String,
}

#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub edges: Vec<WeightedEdge>,
    pub start: Vertex,
    pub end: Vertex,
}

/// Generates a connected graph on the vertices `0..number_of_vertices`.
///
/// A random spanning tree grown from vertex 0 guarantees connectivity. On top
/// of it up to `number_of_vertices` further edges are tried; self-loops and
/// edges that already exist in either direction are dropped. Start and end
/// are distinct random vertices.
pub fn generate_graph<R: Rng>(
    number_of_vertices: u32,
    max_weight: Distance,
    rng: &mut R,
) -> Result<RandomGraph, GeneratorError> {
    if number_of_vertices < 2 {
        return Err(GeneratorError::TooFewVertices(number_of_vertices));
    }
    if max_weight < 1 {
        return Err(GeneratorError::InvalidMaxWeight(max_weight));
    }

    let n = number_of_vertices as Vertex;
    let mut edges = Vec::new();
    let mut seen = HashSet::new();

    let mut connected: Vec<Vertex> = vec![0];
    let mut unconnected: Vec<Vertex> = (1..n).collect();
    while !unconnected.is_empty() {
        let tail = connected[rng.gen_range(0..connected.len())];
        let head = unconnected.swap_remove(rng.gen_range(0..unconnected.len()));
        let weight = rng.gen_range(1..=max_weight);

        edges.push(WeightedEdge::new(tail, head, weight));
        seen.insert((tail.min(head), tail.max(head)));
        connected.push(head);
    }

    for _ in 0..rng.gen_range(0..=n) {
        let tail = rng.gen_range(0..n);
        let head = rng.gen_range(0..n);
        if tail != head && seen.insert((tail.min(head), tail.max(head))) {
            let weight = rng.gen_range(1..=max_weight);
            edges.push(WeightedEdge::new(tail, head, weight));
        }
    }

    let start = rng.gen_range(0..n);
    let mut end = rng.gen_range(0..n);
    while end == start {
        end = rng.gen_range(0..n);
    }

    Ok(RandomGraph { edges, start, end })
}

pub fn question_file_name(graph_id: i64, number_of_vertices: u32) -> String {
    format!("undirected_graph_{}_{}_nodes.json", graph_id, number_of_vertices)
}

pub fn generate_question(
    graph_id: i64,
    number_of_vertices: u32,
    config: &GeneratorConfig,
) -> Result<GeneratedQuestion, GeneratorError> {
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(graph_id as u64));
    let RandomGraph { edges, start, end } =
        generate_graph(number_of_vertices, config.max_weight, &mut rng)?;

    let graph = UndirectedGraph::from_edges(&edges);
    let reference = dijkstra_one_to_one(&graph, start, end);

    info!(
        graph_id,
        vertices = number_of_vertices,
        edges = edges.len(),
        start,
        end,
        distance = ?reference.as_ref().map(|path| path.distance),
        "generated question"
    );

    Ok(GeneratedQuestion {
        question: Question::new(graph_id, &edges, start, end, INSTRUCTIONS.to_string()),
        reference,
        file_name: question_file_name(graph_id, number_of_vertices),
    })
}

/// Generates one question per configured node count, numbered from 1.
pub fn generate_questions(
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedQuestion>, GeneratorError> {
    let bar = get_progressbar("Generating questions", config.node_counts.len() as u64);

    config
        .node_counts
        .par_iter()
        .enumerate()
        .progress_with(bar)
        .map(|(index, &number_of_vertices)| {
            generate_question(index as i64 + 1, number_of_vertices, config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use ahash::{HashSet, HashSetExt};
    use rand::{rngs::StdRng, SeedableRng};

    use super::{
        generate_graph, generate_question, generate_questions, GeneratorConfig, GeneratorError,
    };
    use crate::{
        graphs::{Graph, UndirectedGraph},
        search::dijkstra::dijkstra_one_to_one,
    };

    #[test]
    fn graphs_are_connected_and_simple() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let random_graph = generate_graph(30, 20, &mut rng).unwrap();

            let mut pairs = HashSet::new();
            for edge in &random_graph.edges {
                assert_ne!(edge.tail, edge.head);
                assert!((1..=20).contains(&edge.weight));
                assert!(pairs.insert((edge.tail.min(edge.head), edge.tail.max(edge.head))));
            }
            assert!(random_graph.edges.len() >= 29);
            assert_ne!(random_graph.start, random_graph.end);

            let graph = UndirectedGraph::from_edges(&random_graph.edges);
            assert_eq!(graph.number_of_vertices(), 30);
            for vertex in 1..30 {
                assert!(dijkstra_one_to_one(&graph, 0, vertex).is_some());
            }
        }
    }

    #[test]
    fn same_seed_same_question() {
        let config = GeneratorConfig::default();

        let first = generate_question(2, 50, &config).unwrap();
        let second = generate_question(2, 50, &config).unwrap();
        assert_eq!(first.question, second.question);
        assert_eq!(first.reference, second.reference);
        assert_eq!(first.file_name, "undirected_graph_2_50_nodes.json");
    }

    #[test]
    fn reference_answers_match_question() {
        let config = GeneratorConfig {
            node_counts: vec![10],
            ..GeneratorConfig::default()
        };
        let generated = generate_question(1, 10, &config).unwrap();
        let reference = generated.reference.unwrap();

        assert_eq!(reference.source(), Some(generated.question.start_node));
        assert_eq!(reference.target(), Some(generated.question.end_node));

        let graph = generated.question.graph();
        assert_eq!(graph.get_path_distance(&reference.vertices), Ok(reference.distance));
    }

    #[test]
    fn rejects_degenerate_parameters() {
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            generate_graph(1, 20, &mut rng).unwrap_err(),
            GeneratorError::TooFewVertices(1)
        );
        assert_eq!(
            generate_graph(5, 0, &mut rng).unwrap_err(),
            GeneratorError::InvalidMaxWeight(0)
        );
    }

    #[test]
    fn questions_are_numbered_in_config_order() {
        let config = GeneratorConfig {
            node_counts: vec![6, 4, 9],
            ..GeneratorConfig::default()
        };
        let generated = generate_questions(&config).unwrap();

        let ids: Vec<_> = generated.iter().map(|g| g.question.graph_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(generated[1].file_name, "undirected_graph_2_4_nodes.json");
        assert_eq!(generated[1].question.graph().number_of_vertices(), 4);

        let config = GeneratorConfig {
            node_counts: vec![5, 1],
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate_questions(&config).unwrap_err(),
            GeneratorError::TooFewVertices(1)
        );
    }
}
