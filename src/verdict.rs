//! Judging a claimed shortest path against the reference answer.

use std::fmt;

use tracing::debug;

use crate::{
    answer::{Answer, AnswerError},
    graphs::{Distance, Graph, PathError, Vertex},
    search::{collections::dijkstra_data::Path, dijkstra::dijkstra_one_to_one},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// The first check a claimed answer failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Parse Error: {0}")]
    MalformedAnswer(#[from] AnswerError),
    #[error("Empty path provided")]
    EmptyPath,
    #[error("Path {endpoint} mismatch: expected {expected}, got {actual}")]
    EndpointMismatch {
        endpoint: Endpoint,
        expected: Vertex,
        actual: Vertex,
    },
    #[error("Invalid path: Node {0} does not exist in graph")]
    UnknownNode(Vertex),
    #[error("Invalid path: No edge exists between nodes {tail} and {head}")]
    MissingEdge { tail: Vertex, head: Vertex },
    #[error("Distance calculation error: claimed {claimed}, actual {actual}")]
    DistanceMismatch { claimed: Distance, actual: Distance },
    #[error("Suboptimal path: distance {distance}, optimal is {optimal}")]
    SuboptimalPath { distance: Distance, optimal: Distance },
    #[error("No path exists between nodes {start} and {end}")]
    Unreachable { start: Vertex, end: Vertex },
}

impl From<PathError> for Rejection {
    fn from(error: PathError) -> Self {
        match error {
            PathError::TooShort => Rejection::EmptyPath,
            PathError::UnknownVertex(vertex) => Rejection::UnknownNode(vertex),
            PathError::MissingEdge { tail, head } => Rejection::MissingEdge { tail, head },
        }
    }
}

/// Outcome of checking one answer.
///
/// The reference path is always computed, even if the answer is rejected
/// before it would be needed, so it can be shown next to the claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub start: Vertex,
    pub end: Vertex,
    pub reference: Option<Path>,
    pub answer: Option<Answer>,
    pub outcome: Result<Distance, Rejection>,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        self.outcome.as_ref().err()
    }
}

/// Checks a claimed answer given as free text.
pub fn judge_text(graph: &dyn Graph, start: Vertex, end: Vertex, text: &str) -> Verdict {
    let reference = dijkstra_one_to_one(graph, start, end);

    let (answer, outcome) = match Answer::parse(text) {
        Ok(answer) => {
            let outcome = check_claim(graph, start, end, reference.as_ref(), &answer);
            (Some(answer), outcome)
        }
        Err(error) => (None, Err(Rejection::from(error))),
    };

    finish(start, end, reference, answer, outcome)
}

/// Checks an already parsed answer.
pub fn judge(graph: &dyn Graph, start: Vertex, end: Vertex, answer: Answer) -> Verdict {
    let reference = dijkstra_one_to_one(graph, start, end);
    let outcome = check_claim(graph, start, end, reference.as_ref(), &answer);

    finish(start, end, reference, Some(answer), outcome)
}

fn finish(
    start: Vertex,
    end: Vertex,
    reference: Option<Path>,
    answer: Option<Answer>,
    outcome: Result<Distance, Rejection>,
) -> Verdict {
    match &outcome {
        Ok(distance) => debug!(start, end, distance, "answer accepted"),
        Err(rejection) => debug!(start, end, %rejection, "answer rejected"),
    }

    Verdict {
        start,
        end,
        reference,
        answer,
        outcome,
    }
}

/// Runs the checks in order and stops at the first one that fails. On
/// success the verified distance is returned.
pub fn check_claim(
    graph: &dyn Graph,
    start: Vertex,
    end: Vertex,
    reference: Option<&Path>,
    answer: &Answer,
) -> Result<Distance, Rejection> {
    let (Some(&first), Some(&last)) = (answer.path.first(), answer.path.last()) else {
        return Err(Rejection::EmptyPath);
    };

    if first != start {
        return Err(Rejection::EndpointMismatch {
            endpoint: Endpoint::Start,
            expected: start,
            actual: first,
        });
    }
    if last != end {
        return Err(Rejection::EndpointMismatch {
            endpoint: Endpoint::End,
            expected: end,
            actual: last,
        });
    }

    let actual = graph.get_path_distance(&answer.path)?;

    if actual != answer.distance {
        return Err(Rejection::DistanceMismatch {
            claimed: answer.distance,
            actual,
        });
    }

    let reference = reference.ok_or(Rejection::Unreachable { start, end })?;
    if actual != reference.distance {
        return Err(Rejection::SuboptimalPath {
            distance: actual,
            optimal: reference.distance,
        });
    }

    Ok(actual)
}
