//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

use casebase_core::bail_usage;
use casebase_core::config::EngineConfig;
use casebase_core::error::Result;

/// Resolve the base directory for relative paths.
///
/// If a root path is provided, returns it. Otherwise, falls back to the
/// current working directory, or "." if that cannot be determined.
pub fn resolve_root_path(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Join `path` onto `root` unless it is already absolute
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Pick the corpus file: the `--corpus` flag (or `CASEBASE_CORPUS`) wins
/// over `[corpus] path` in the config file.
pub fn resolve_corpus_path(
    flag: Option<&Path>,
    config: &EngineConfig,
    root: &Path,
) -> Result<PathBuf> {
    match flag.or(config.corpus.path.as_deref()) {
        Some(path) => Ok(resolve_against(root, path)),
        None => bail_usage!(
            "no corpus specified (use --corpus, CASEBASE_CORPUS, or [corpus] path in casebase.toml)"
        ),
    }
}
