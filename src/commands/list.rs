//! `casebase list` command - print the corpus

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use casebase_core::error::Result;
use casebase_core::format::escape_quotes;
use casebase_core::view::ItemView;

/// Execute the list command
pub fn execute(ctx: &CommandContext, limit: Option<usize>) -> Result<()> {
    let config = ctx.load_config()?;
    let corpus = ctx.load_corpus(&config)?;

    let views: Vec<ItemView> = corpus
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(ItemView::from)
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        OutputFormat::Human => {
            if corpus.is_empty() && !ctx.cli.quiet {
                println!("Corpus is empty");
            }
            for view in &views {
                if view.release_date.is_empty() {
                    println!("{}  {}", view.id, view.original_title);
                } else {
                    println!("{}  {} ({})", view.id, view.original_title, view.release_date);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H casebase=1 records=1 mode=list items={} total={}",
                views.len(),
                corpus.len()
            );
            for view in &views {
                println!(
                    "I {} \"{}\" popularity={} vote_average={} genres=\"{}\"",
                    view.id,
                    escape_quotes(&view.original_title),
                    view.popularity,
                    view.vote_average,
                    escape_quotes(&view.genres.names(","))
                );
            }
        }
    }

    Ok(())
}
