//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Per-target filter, e.g. `LOTTO_ODDS_LOG=lotto_odds::simulation=info,lotto_odds=warn`.
pub const LOG_ENV: &str = "LOTTO_ODDS_LOG";
const DEFAULT_FILTER: &str = "lotto_odds=warn";

static INIT: Once = Once::new();

/// Install the stderr subscriber. Idempotent; stdout stays reserved for command output.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
