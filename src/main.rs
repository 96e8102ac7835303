use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quiz_engine::logging::{DEFAULT_LOG_LEVEL, LogConfig, init_logging};
use quiz_engine::{Quiz, load_questions_from_json};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: PathBuf,

    /// Seed for shuffling questions, sorting items and matching columns
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,

    /// Append logs to this file (logging is off without it)
    #[arg(long, env = "QUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Load and lint the question file, then exit without starting the quiz
    #[arg(long)]
    validate: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&LogConfig {
        file: args.log_file.clone(),
        level: args.log_level.clone(),
    })?;

    if args.validate {
        return validate(&args);
    }

    let quiz = Quiz::from_json(&args.questions, args.seed)?;
    quiz.run().context("Error running quiz")
}

fn validate(args: &Args) -> anyhow::Result<()> {
    let questions = load_questions_from_json(&args.questions)?;

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    let mut findings = 0;
    for (index, question) in questions.iter().enumerate() {
        *by_kind.entry(question.kind()).or_default() += 1;
        for finding in question.lint() {
            println!("warning: question {} ({}): {}", index + 1, question.kind(), finding);
            findings += 1;
        }
    }

    println!("{} questions", questions.len());
    for (kind, count) in &by_kind {
        println!("  {kind}: {count}");
    }
    if findings == 0 {
        println!("No problems found");
    } else {
        println!("{findings} warnings");
    }
    Ok(())
}
