//! Opt-in JSON tracing, compiled in with the `trace` feature.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::OnceLock;

#[cfg(feature = "trace")]
use tracing_appender::non_blocking::WorkerGuard;

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "conj_engine=debug,conj_core=debug";

#[cfg(feature = "trace")]
static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Write trace events as JSON lines to `<log_dir>/conj-trace.jsonl`.
/// `RUST_LOG` overrides the default filter. Only the first call has an
/// effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    GUARD.get_or_init(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "conj-trace.jsonl");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
        guard
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
