//! `casebase recommend` command - rank the corpus against a named item
//!
//! - `casebase recommend <name>` - top recommendations for the item
//! - `--limit/-k` - number of results (default from `recommend.default_limit`)

mod format;

use tracing::debug;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command_always, CommandContext};
use casebase_core::error::Result;

use self::format::{output_human, output_json, output_records};

/// Execute the recommend command
pub fn execute(ctx: &CommandContext, name: &str, limit: Option<usize>) -> Result<()> {
    let config = ctx.load_config()?;
    let engine = ctx.build_engine(&config)?;
    let corpus = ctx.load_corpus(&config)?;

    let query = corpus.find_by_name(name)?;
    let limit = limit.unwrap_or(config.recommend.default_limit);

    debug!(query_id = query.id, limit, corpus_size = corpus.len(), "recommend_params");

    let results = engine.recommend(query, corpus.items(), limit);

    trace_command_always!(ctx.start, "rank");

    match ctx.cli.format {
        OutputFormat::Json => output_json(&results)?,
        OutputFormat::Human => output_human(ctx.cli, query, &results),
        OutputFormat::Records => output_records(query, &results),
    }

    Ok(())
}
