//! `casebase score` command - similarity breakdown between two items

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command_always, CommandContext};
use casebase_core::config::WeightConfig;
use casebase_core::engine::SimilarityBreakdown;
use casebase_core::error::Result;
use casebase_core::format::escape_quotes;
use casebase_core::item::Item;

/// Execute the score command
pub fn execute(ctx: &CommandContext, first: &str, second: &str) -> Result<()> {
    let config = ctx.load_config()?;
    let engine = ctx.build_engine(&config)?;
    let corpus = ctx.load_corpus(&config)?;

    let a = corpus.find_by_name(first)?;
    let b = corpus.find_by_name(second)?;
    let breakdown = engine.score_breakdown(a, b);

    trace_command_always!(ctx.start, "score");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "first": { "id": a.id, "original_title": a.name },
                "second": { "id": b.id, "original_title": b.name },
                "weights": engine.weights(),
                "normalization": engine.normalization(),
                "similarity": breakdown,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => output_human(a, b, engine.weights(), &breakdown),
        OutputFormat::Records => output_records(a, b, engine.weights(), &breakdown),
    }

    Ok(())
}

fn parts(breakdown: &SimilarityBreakdown) -> [(&'static str, f64); 5] {
    [
        ("genres", breakdown.genres),
        ("popularity", breakdown.popularity),
        ("quality", breakdown.quality),
        ("name", breakdown.name),
        ("keywords", breakdown.keywords),
    ]
}

fn output_human(a: &Item, b: &Item, weights: &WeightConfig, breakdown: &SimilarityBreakdown) {
    println!("'{}' ({}) vs '{}' ({})", a.name, a.id, b.name, b.id);
    for ((attribute, similarity), (_, weight)) in parts(breakdown).into_iter().zip(weights.entries())
    {
        println!("  {:<11} {:.4} x {}", attribute, similarity, weight);
    }
    println!("  {:<11} {:.4}", "total", breakdown.total);
}

fn output_records(a: &Item, b: &Item, weights: &WeightConfig, breakdown: &SimilarityBreakdown) {
    println!(
        "H casebase=1 records=1 mode=score first=\"{}\" first_id={} second=\"{}\" second_id={} total={:.6}",
        escape_quotes(&a.name),
        a.id,
        escape_quotes(&b.name),
        b.id,
        breakdown.total
    );
    for ((attribute, similarity), (_, weight)) in parts(breakdown).into_iter().zip(weights.entries())
    {
        println!("S {} {:.6} weight={}", attribute, similarity, weight);
    }
}
