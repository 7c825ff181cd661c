use checked_paths::{
    answer::Answer,
    graphs::{Graph, UndirectedGraph, WeightedEdge},
    question::Question,
    verdict::{judge, judge_text, Rejection},
};

fn triangle() -> UndirectedGraph {
    UndirectedGraph::from_edges(&[
        WeightedEdge::new(1, 2, 4),
        WeightedEdge::new(2, 3, 1),
        WeightedEdge::new(1, 3, 10),
    ])
}

#[test]
fn optimal_answer_is_accepted() {
    let verdict = judge_text(&triangle(), 1, 3, "Distance: 5, Path: 1->2->3");

    assert!(verdict.is_correct());
    assert_eq!(verdict.reference.unwrap().vertices, vec![1, 2, 3]);
    assert_eq!(
        verdict.answer,
        Some(Answer {
            distance: 5,
            path: vec![1, 2, 3]
        })
    );
}

#[test]
fn correctly_summed_detour_is_suboptimal() {
    let verdict = judge_text(&triangle(), 1, 3, "Distance: 10, Path: 1->3");

    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::SuboptimalPath {
            distance: 10,
            optimal: 5
        })
    );
}

#[test]
fn wrong_sum_is_reported_before_optimality() {
    let verdict = judge_text(&triangle(), 1, 3, "Distance: 7, Path: 1->2->3");

    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::DistanceMismatch {
            claimed: 7,
            actual: 5
        })
    );

    let verdict = judge_text(&triangle(), 1, 3, "Distance: 5, Path: 1->3");
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::DistanceMismatch {
            claimed: 5,
            actual: 10
        })
    );
}

#[test]
fn missing_edge_through_isolated_node() {
    let mut graph = triangle();
    graph.add_edge(&WeightedEdge::new(4, 5, 1));

    let verdict = judge_text(&graph, 1, 3, "Distance: 5, Path: 1->4->3");
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::MissingEdge { tail: 1, head: 4 })
    );

    let verdict = judge_text(&triangle(), 1, 3, "Distance: 5, Path: 1->4->3");
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::MissingEdge { tail: 1, head: 4 })
    );
}

#[test]
fn unreachable_target() {
    let mut graph = triangle();
    graph.add_edge(&WeightedEdge::new(9, 10, 2));

    let verdict = judge_text(&graph, 1, 9, "Distance: 3, Path: 1->9");
    assert_eq!(verdict.reference, None);
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::MissingEdge { tail: 1, head: 9 })
    );
}

#[test]
fn parallel_edges_replay_first_match() {
    // The replay uses the first inserted edge between 1 and 2, the search the
    // cheapest one, so the claimed walk is correctly summed but suboptimal.
    let graph = UndirectedGraph::from_edges(&[
        WeightedEdge::new(1, 2, 8),
        WeightedEdge::new(1, 2, 2),
    ]);

    let verdict = judge_text(&graph, 1, 2, "Distance: 8, Path: 1->2");
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::SuboptimalPath {
            distance: 8,
            optimal: 2
        })
    );

    let verdict = judge_text(&graph, 1, 2, "Distance: 2, Path: 1->2");
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::DistanceMismatch {
            claimed: 2,
            actual: 8
        })
    );
}

#[test]
fn judging_is_repeatable() {
    let graph = triangle();
    let answer = Answer {
        distance: 10,
        path: vec![1, 3],
    };

    let first = judge(&graph, 1, 3, answer.clone());
    let second = judge(&graph, 1, 3, answer);
    assert_eq!(first, second);
    assert_eq!(graph.get_path_distance(&[1, 3]), Ok(10));
}

#[test]
fn question_rows_feed_the_verdict() {
    let question: Question = serde_json::from_str(
        r#"{
            "graph_id": 1,
            "graph": [[0, 1, 2], [1, 2, 2], [0, 2], [0, 2, 5]],
            "start_node": 0,
            "end_node": 2,
            "instructions": ""
        }"#,
    )
    .unwrap();

    let graph = question.graph();
    let verdict = judge_text(
        &graph,
        question.start_node,
        question.end_node,
        "Distance: 4, Path: 0->1->2",
    );
    assert!(verdict.is_correct());
}
