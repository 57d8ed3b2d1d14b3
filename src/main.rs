//! Retirement Readiness CLI
//!
//! Evaluate a single JSON submission, run a CSV batch, or convert an amount
//! between currencies with the static rate table.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use retirement_readiness::currency::{convert, currency_for_country, format_amount, format_money};
use retirement_readiness::profile::{load_submission_json, load_submissions};
use retirement_readiness::store::DEFAULT_STORE_PATH;
use retirement_readiness::{AssessmentService, CsvEvaluationStore, EvaluationStore, ReportBuilder};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "retirement_check",
    about = "Assess retirement readiness and get planning suggestions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one submission from a JSON file
    Evaluate(EvaluateArgs),
    /// Evaluate every row of a CSV file in parallel
    Batch(BatchArgs),
    /// Convert an amount between currency codes
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// JSON submission ("Y"/"N" for yes/no fields)
    #[arg(long)]
    input: PathBuf,
    /// Write a text report to this path
    #[arg(long)]
    report: Option<PathBuf>,
    /// Append the evaluation to a CSV store; bare --store uses user_data/user_data.csv
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_STORE_PATH)]
    store: Option<PathBuf>,
    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV file of submissions with snake_case headers
    #[arg(long)]
    input: PathBuf,
    /// Where to write one result row per submission
    #[arg(long, default_value = "readiness_results.csv")]
    output: PathBuf,
    /// Append every valid evaluation to a CSV store; bare --store uses the default path
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_STORE_PATH)]
    store: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    #[arg(long)]
    amount: f64,
    #[arg(long)]
    from: String,
    #[arg(long)]
    to: String,
}

/// One row of batch output
#[derive(Debug, Serialize)]
struct BatchRow {
    row: usize,
    verdict: String,
    corpus_needed: f64,
    corpus_available: f64,
    ready: bool,
    suggestions: String,
}

/// A store that cannot be opened is logged and skipped; evaluation goes on
fn open_store(path: Option<&PathBuf>) -> Option<CsvEvaluationStore> {
    let path = path?;
    match CsvEvaluationStore::open(path) {
        Ok(store) => Some(store),
        Err(err) => {
            log::warn!("Store unavailable at {}: {}", path.display(), err);
            None
        }
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let submission = load_submission_json(&args.input)
        .with_context(|| format!("reading submission {}", args.input.display()))?;
    let mut store = open_store(args.store.as_ref());

    let service = AssessmentService::new();
    let assessment = service.assess(
        &submission,
        store.as_mut().map(|s| s as &mut dyn EvaluationStore),
    );
    let result = &assessment.result;

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        let symbol = currency_for_country(&submission.country)
            .map(|c| c.symbol)
            .unwrap_or("");
        println!("{}", result.verdict);
        println!();
        println!("  Corpus Needed:    {}", format_money(symbol, result.corpus_needed));
        println!("  Corpus Available: {}", format_money(symbol, result.corpus_available));
        println!();
        println!("Suggestions:");
        for suggestion in &result.suggestions {
            println!("  - {}", suggestion);
        }
    }

    if let Some(path) = &args.report {
        let builder = ReportBuilder::new(chrono::Local::now().date_naive());
        match assessment.report(&builder) {
            Some(doc) => {
                // Report failures do not affect the evaluation already printed
                match doc.save(path) {
                    Ok(()) => println!("\nReport written to: {}", path.display()),
                    Err(err) => log::warn!("Report not written to {}: {}", path.display(), err),
                }
            }
            None => log::warn!("No report for a submission that failed validation"),
        }
    }

    if assessment.saved {
        if let Some(path) = &args.store {
            println!("Saved to: {}", path.display());
        }
    }

    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    let start = Instant::now();
    let submissions = load_submissions(&args.input)
        .with_context(|| format!("loading submissions from {}", args.input.display()))?;
    println!("Loaded {} submissions in {:?}", submissions.len(), start.elapsed());

    let mut store = open_store(args.store.as_ref());
    let service = AssessmentService::new();
    let assessments = service.assess_batch(
        &submissions,
        store.as_mut().map(|s| s as &mut dyn EvaluationStore),
    );

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for (i, assessment) in assessments.iter().enumerate() {
        let result = &assessment.result;
        writer.serialize(BatchRow {
            row: i + 1,
            verdict: result.verdict.clone(),
            corpus_needed: result.corpus_needed,
            corpus_available: result.corpus_available,
            ready: result.ready,
            suggestions: result.suggestions.join(" | "),
        })?;
    }
    writer.flush()?;

    let ready = assessments.iter().filter(|a| a.result.ready).count();
    let rejected = assessments.iter().filter(|a| a.result.is_rejected()).count();
    let saved = assessments.iter().filter(|a| a.saved).count();

    println!("\nBatch Summary:");
    println!("  Submissions: {}", assessments.len());
    println!("  Ready:       {}", ready);
    println!("  Not ready:   {}", assessments.len() - ready - rejected);
    println!("  Rejected:    {}", rejected);
    if args.store.is_some() {
        println!("  Saved:       {}", saved);
    }
    println!("\nResults written to: {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}

fn run_convert(args: ConvertArgs) {
    match convert(args.amount, &args.from, &args.to) {
        Some(converted) => println!(
            "{} {} is equal to {} {}",
            format_amount(args.amount),
            args.from,
            format_amount(converted),
            args.to
        ),
        None => println!("conversion unavailable: {} -> {}", args.from, args.to),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Batch(args) => run_batch(args),
        Command::Convert(args) => {
            run_convert(args);
            Ok(())
        }
    }
}
