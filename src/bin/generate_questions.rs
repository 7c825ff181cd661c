use std::{fs, path::PathBuf};

use anyhow::Context;
use checked_paths::{
    generator::{generate_questions, GeneratorConfig, DEFAULT_NODE_COUNTS, DEFAULT_SEED, MAX_WEIGHT},
    graphs::Distance,
    utility::init_tracing,
};
use clap::Parser;
use itertools::Itertools;

/// Generates random connected shortest path questions, one per node count,
/// and writes them as JSON files to `output_dir`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the question files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of nodes of each generated graph
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_NODE_COUNTS)]
    node_counts: Vec<u32>,

    /// Maximum edge weight
    #[arg(short, long, default_value_t = MAX_WEIGHT)]
    max_weight: Distance,

    /// Question `i` is generated with seed `seed + i`
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = GeneratorConfig {
        node_counts: args.node_counts,
        max_weight: args.max_weight,
        seed: args.seed,
    };

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("could not create {}", args.output_dir.display()))?;

    let generated = generate_questions(&config)?;

    for generated_question in generated {
        let question = &generated_question.question;
        let path = args.output_dir.join(&generated_question.file_name);
        question.to_file(&path)?;

        println!(
            "Question {}: {} edges, Start: {}, End: {}",
            question.graph_id,
            question.graph.len(),
            question.start_node,
            question.end_node
        );
        match &generated_question.reference {
            Some(reference) => println!(
                "Correct answer: Distance {}, Path: {}",
                reference.distance,
                reference.vertices.iter().join(" -> ")
            ),
            None => println!("Correct answer: no path exists"),
        }
        println!("Saved to: {}", path.display());
        println!("{}", "-".repeat(60));
    }

    Ok(())
}
