use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable consulted when `RUST_LOG` is not set
pub const LOG_ENV_VAR: &str = "CASEBASE_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "rank_corpus");
/// // Or with additional fields:
/// trace_time!(start, "rank_corpus", candidates = scored.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Resolve the filter directive implied by the CLI flags.
fn level_directive(verbose: bool, log_level: Option<&str>) -> String {
    match (verbose, log_level) {
        (_, Some(level)) if level.contains('=') => level.to_string(),
        (_, Some(level)) => format!("casebase={level},casebase_core={level}"),
        (true, None) => "casebase=debug,casebase_core=debug".to_string(),
        (false, None) => "casebase=warn,casebase_core=warn".to_string(),
    }
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = level_directive(verbose, log_level);

    // RUST_LOG wins, then CASEBASE_LOG, then the CLI flags
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV_VAR))
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
