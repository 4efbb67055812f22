//! Tracing subscriber setup for binaries and tests embedding the crate.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_DIRECTIVES: &str = "info,shift_roster=info";

static INIT: OnceLock<bool> = OnceLock::new();

/// Installs a global fmt subscriber filtered by `RUST_LOG`, falling back
/// to `directives` (or [`DEFAULT_LOG_DIRECTIVES`]).
///
/// Safe to call more than once. Returns `false` if another global
/// subscriber was already installed or the directives did not parse.
pub fn init_tracing(directives: Option<&str>) -> bool {
    *INIT.get_or_init(|| {
        let filter = match EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directives.unwrap_or(DEFAULT_LOG_DIRECTIVES)))
        {
            Ok(filter) => filter,
            Err(_) => return false,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()
            .is_ok()
    })
}
