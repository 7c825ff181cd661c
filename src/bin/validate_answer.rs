use std::path::PathBuf;

use anyhow::Context;
use checked_paths::{
    answer::ANSWER_FORMAT, question::Question, report::print_report, utility::init_tracing,
    verdict::judge_text,
};
use clap::Parser;

/// Checks an answer to the shortest path question stored at `question`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = format!("Answer format: \"{}\"", ANSWER_FORMAT))]
struct Args {
    /// Question file in JSON format
    question: PathBuf,

    /// Claimed answer
    answer: String,

    /// Log search and validation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let question = Question::from_file(&args.question)
        .with_context(|| format!("could not load question {}", args.question.display()))?;
    let graph = question.graph();

    let verdict = judge_text(&graph, question.start_node, question.end_node, &args.answer);
    print_report(question.graph_id, &verdict);

    Ok(())
}
