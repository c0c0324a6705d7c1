//! Command implementations for all casebase commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{list, recommend, score};
use casebase_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Recommend { name, limit } => {
                let limit = limit.map(|k| usize::try_from(k).unwrap_or(usize::MAX));
                recommend::execute(ctx, name, limit)
            }
            Commands::Score { first, second } => score::execute(ctx, first, second),
            Commands::List { limit } => list::execute(ctx, *limit),
        }
    }
}
