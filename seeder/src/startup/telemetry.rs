//! Tracing subscriber setup.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Installing twice
/// is not an error; the failure is logged and the first subscriber stays.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
