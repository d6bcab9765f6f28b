use std::{
    str::FromStr,
    sync::atomic::{AtomicBool, Ordering},
};

use tracing::Level;
use tracing_subscriber::{
    filter::{ParseError, Targets},
    fmt::format::FmtSpan,
    EnvFilter, Layer, Registry,
};

static IS_TRACING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Targets shown when `TRACE` holds a bare level.
const GLOBLINK_TARGETS: &[&str] = &["globlink", "globlink_fs", "globlink_glob"];

type BoxedFilter = Box<dyn Layer<Registry> + Send + Sync>;

/// Install a global subscriber if the `TRACE` environment variable is set.
///
/// * `TRACE=debug` shows every globlink event at that level or above.
/// * Anything else is parsed as an [`EnvFilter`] directive, e.g. `TRACE=globlink::link=trace`.
/// * An invalid directive falls back to `info` for globlink targets and logs a warning.
///
/// Returns whether this call installed the subscriber.
pub fn enable_tracing_by_env() -> bool {
    let Ok(trace_var) = std::env::var("TRACE") else {
        return false;
    };

    if IS_TRACING_ENABLED.swap(true, Ordering::SeqCst) {
        return false;
    }

    use tracing_subscriber::{fmt, prelude::*};
    let (filter, parse_error) = match tracing_filter(&trace_var) {
        Ok(filter) => (filter, None),
        Err(error) => (level_filter(Level::INFO), Some(error)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().pretty().with_file(true).with_span_events(FmtSpan::CLOSE))
        .init();

    if let Some(error) = parse_error {
        tracing::warn!(?trace_var, %error, "Invalid TRACE directive, falling back to info");
    }
    tracing::trace!("enable_tracing_by_env");
    true
}

fn level_filter(level: Level) -> BoxedFilter {
    Targets::new().with_targets(GLOBLINK_TARGETS.iter().map(|target| (*target, level))).boxed()
}

fn tracing_filter(trace_var: &str) -> Result<BoxedFilter, ParseError> {
    if let Ok(level) = Level::from_str(trace_var) {
        return Ok(level_filter(level));
    }
    EnvFilter::builder().with_regex(true).parse(trace_var).map(|filter| filter.boxed())
}
