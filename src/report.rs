//! Console rendering of verdicts.

use colored::Colorize;
use itertools::Itertools;

use crate::{graphs::Vertex, verdict::Verdict};

fn format_vertices(vertices: &[Vertex]) -> String {
    format!("[{}]", vertices.iter().join(" "))
}

/// Lines describing the reference answer and the claim, without the final
/// verdict line.
pub fn summary_lines(graph_id: i64, verdict: &Verdict) -> Vec<String> {
    let mut lines = vec![
        format!("=== Validating Graph {} ===", graph_id),
        format!("Start: {}, End: {}", verdict.start, verdict.end),
    ];

    lines.push(match &verdict.reference {
        Some(path) => format!(
            "Correct answer: Distance {}, Path: {}",
            path.distance,
            format_vertices(&path.vertices)
        ),
        None => "Correct answer: no path exists".to_string(),
    });

    if let Some(answer) = &verdict.answer {
        lines.push(format!(
            "User answer: Distance {}, Path: {}",
            answer.distance,
            format_vertices(&answer.path)
        ));
    }

    lines
}

pub fn verdict_line(verdict: &Verdict) -> String {
    match (&verdict.outcome, &verdict.answer) {
        (Ok(distance), Some(answer)) => format!(
            "✅ Correct! Distance: {}, Path: {}",
            distance,
            format_vertices(&answer.path)
        ),
        (Ok(distance), None) => format!("✅ Correct! Distance: {}", distance),
        (Err(rejection), _) => format!("❌ {}", rejection),
    }
}

pub fn print_report(graph_id: i64, verdict: &Verdict) {
    for line in summary_lines(graph_id, verdict) {
        println!("{}", line);
    }

    let line = verdict_line(verdict);
    if verdict.is_correct() {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}
