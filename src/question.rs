//! Shortest path questions as stored in JSON question files.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graphs::{graph_factory::GraphFactory, UndirectedGraph, Vertex, WeightedEdge};

#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    #[error("Error reading file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A question asking for the shortest path between `start_node` and
/// `end_node`.
///
/// `graph` holds the raw `[from, to, weight]` rows. Rows are kept as read so
/// that rows with fewer than three fields can be skipped when the graph is
/// built instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub graph_id: i64,
    pub graph: Vec<Vec<i64>>,
    pub start_node: Vertex,
    pub end_node: Vertex,
    #[serde(default)]
    pub instructions: String,
}

impl Question {
    pub fn new(
        graph_id: i64,
        edges: &[WeightedEdge],
        start_node: Vertex,
        end_node: Vertex,
        instructions: String,
    ) -> Question {
        Question {
            graph_id,
            graph: edges.iter().map(|edge| edge.to_row().to_vec()).collect(),
            start_node,
            end_node,
            instructions,
        }
    }

    pub fn from_file(path: &Path) -> Result<Question, QuestionError> {
        let file = File::open(path).map_err(|source| QuestionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let question: Question =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| QuestionError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            graph_id = question.graph_id,
            rows = question.graph.len(),
            start = question.start_node,
            end = question.end_node,
            "read question"
        );
        Ok(question)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), QuestionError> {
        let file = File::create(path).map_err(|source| QuestionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|source| {
            QuestionError::Json {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    pub fn graph(&self) -> UndirectedGraph {
        GraphFactory::from_rows(&self.graph)
    }
}
