//! Parsing of free text answers of the form `Distance: X, Path: A->B->C`.

use std::{fmt, num::ParseIntError, str::FromStr, sync::OnceLock};

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

pub const ANSWER_FORMAT: &str = "Distance: X, Path: A->B->C";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("invalid answer format. Expected: 'Distance: X, Path: A->B->C'")]
    Format,
    #[error("invalid distance: {0}")]
    Distance(#[source] ParseIntError),
    #[error("invalid node in path: {0}")]
    Vertex(String),
}

/// A claimed shortest path as submitted for checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub distance: Distance,
    pub path: Vec<Vertex>,
}

fn answer_regex() -> &'static Regex {
    static ANSWER_REGEX: OnceLock<Regex> = OnceLock::new();
    ANSWER_REGEX.get_or_init(|| {
        Regex::new(r"Distance:[\t\n\f\r ]*([0-9]+),[\t\n\f\r ]*Path:[\t\n\f\r ]*(.+)")
            .expect("answer pattern is valid")
    })
}

impl Answer {
    /// Finds the first `Distance: X, Path: ...` occurrence in `text`.
    ///
    /// Digits and the whitespace around the labels are matched as ASCII only.
    /// The path runs to the end of that line and is split on `->`; every
    /// segment must be an integer after trimming whitespace.
    pub fn parse(text: &str) -> Result<Answer, AnswerError> {
        let captures = answer_regex().captures(text).ok_or(AnswerError::Format)?;

        let distance = captures[1].parse().map_err(AnswerError::Distance)?;

        let path = captures[2]
            .trim()
            .split("->")
            .map(|segment| {
                segment
                    .trim()
                    .parse::<Vertex>()
                    .map_err(|_| AnswerError::Vertex(segment.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Answer { distance, path })
    }
}

impl FromStr for Answer {
    type Err = AnswerError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Answer::parse(text)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Distance: {}, Path: {}",
            self.distance,
            self.path.iter().join("->")
        )
    }
}
