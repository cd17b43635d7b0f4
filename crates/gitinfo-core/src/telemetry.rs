//! Tracing setup for the git-info binaries.
//!
//! The build system captures stdout of `git-info` verbatim as compiler
//! flags; a log line there would end up as a bogus `-D` argument. Logs are
//! therefore written to stderr, next to the token dump.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the stderr subscriber.
///
/// `level` is the fallback when `RUST_LOG` is unset. `json` switches to one
/// JSON object per line for CI log collectors. A second call is a no-op.
pub fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .ok();
    }
}
