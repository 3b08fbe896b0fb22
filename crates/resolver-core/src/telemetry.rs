//! Log subscriber setup for the resolver binary.
//!
//! The report goes to a file or stdout, so log lines are always written to
//! stderr. Without `RUST_LOG`, the resolver's own crates log at the
//! requested level and everything else (HTTP client, runtime) at `warn`.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events follow the requested verbosity.
const RESOLVER_TARGETS: &[&str] = &["resolver_core", "profile_source", "employer_resolver"];

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(level: Level) -> String {
    let mut directives = vec![Level::WARN.as_str().to_ascii_lowercase()];
    directives.extend(
        RESOLVER_TARGETS
            .iter()
            .map(|target| format!("{target}={}", level.as_str().to_ascii_lowercase())),
    );
    directives.join(",")
}

/// Install the global subscriber; later calls are ignored.
///
/// `json` switches to newline-delimited JSON, one object per event, with the
/// per-record span fields flattened in.
pub fn init_tracing(json: bool, level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let pretty = (!json).then(|| fmt::layer().with_writer(std::io::stderr));
    let structured = json.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(std::io::stderr)
    });

    if tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(structured)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}
