//! Checks claimed answers to "shortest path in a weighted graph" questions.
//!
//! A question is an undirected weighted graph plus a start and end vertex.
//! The reference answer is computed with Dijkstra's algorithm, the claimed
//! path is replayed edge by edge and the claimed distance is compared with
//! both.

pub mod answer;
pub mod generator;
pub mod graphs;
pub mod question;
pub mod report;
pub mod search;
pub mod utility;
pub mod verdict;
