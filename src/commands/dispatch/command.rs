//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::{resolve_against, resolve_corpus_path};
use crate::cli::Cli;
use casebase_core::config::EngineConfig;
use casebase_core::corpus::Corpus;
use casebase_core::engine::RecommendationEngine;
use casebase_core::error::Result;

use super::trace_command_always;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Resolve, load and validate the engine configuration
    pub fn load_config(&self) -> Result<EngineConfig> {
        let explicit = self
            .cli
            .config
            .as_deref()
            .map(|p| resolve_against(self.root, p));
        let config = EngineConfig::discover(explicit.as_deref(), self.root)?;
        config.validate()?;
        trace_command_always!(self.start, "load_config");
        Ok(config)
    }

    /// Materialise the corpus named by the CLI or the configuration
    pub fn load_corpus(&self, config: &EngineConfig) -> Result<Corpus> {
        let path = resolve_corpus_path(self.cli.corpus.as_deref(), config, self.root)?;
        let corpus = Corpus::load(&path)?;
        trace_command_always!(self.start, "load_corpus");
        Ok(corpus)
    }

    pub fn build_engine(&self, config: &EngineConfig) -> Result<RecommendationEngine> {
        RecommendationEngine::from_config(config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("casebase {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Case-based recommendations over an item corpus.");
        println!();
        println!("Run `casebase --help` for usage information.");
        Ok(())
    }
}
