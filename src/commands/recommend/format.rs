//! Output formatting for the recommend command

use crate::cli::Cli;
use casebase_core::error::Result;
use casebase_core::format::escape_quotes;
use casebase_core::item::Item;
use casebase_core::view::ScoredItem;

/// Output in human-readable format
pub fn output_human(cli: &Cli, query: &Item, results: &[ScoredItem]) {
    if results.is_empty() {
        if !cli.quiet {
            println!("No recommendations for '{}'", query.name);
        }
        return;
    }

    if !cli.quiet {
        println!("Recommendations for '{}' ({}):", query.name, query.id);
    }

    for result in results {
        let date = if result.release_date.is_empty() {
            String::new()
        } else {
            format!(" ({})", result.release_date)
        };
        println!(
            "{:.4}  {}  {}{}",
            result.global_similarity, result.id, result.original_title, date
        );
    }
}

/// Output in JSON format
pub fn output_json(results: &[ScoredItem]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

/// Output in records format
pub fn output_records(query: &Item, results: &[ScoredItem]) {
    println!(
        "H casebase=1 records=1 mode=recommend query=\"{}\" query_id={} results={}",
        escape_quotes(&query.name),
        query.id,
        results.len()
    );

    for (rank, result) in results.iter().enumerate() {
        let genres = if result.genres.is_empty() {
            "-".to_string()
        } else {
            result.genres.names(",")
        };
        println!(
            "R {} {} {:.6} \"{}\" genres=\"{}\" release={}",
            rank + 1,
            result.id,
            result.global_similarity,
            escape_quotes(&result.original_title),
            escape_quotes(&genres),
            if result.release_date.is_empty() {
                "-"
            } else {
                result.release_date.as_str()
            }
        );
    }
}
