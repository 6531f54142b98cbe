use std::path::Path;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "sangat_core=info,sangat_cli=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber once. With a log directory, JSON lines go to
/// `badgetool-trace.jsonl` there; otherwise human-readable output goes to stderr.
pub fn init_tracing(log_dir: Option<&Path>) {
    INIT.call_once(|| match log_dir {
        Some(dir) => {
            // Blocking writer: commands can exit through `process::exit`,
            // which would drop a non-blocking worker's buffer.
            let file_appender = tracing_appender::rolling::never(dir, "badgetool-trace.jsonl");

            tracing_subscriber::fmt()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
                .with_env_filter(env_filter())
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_env_filter(env_filter())
                .init();
        }
    });
}
