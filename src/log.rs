// src/log.rs
//
// Thin logging layer. The macros keep call sites short; everything ends up
// as a `tracing` event on stdout.

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::consts::LOG_FILTER;

#[doc(hidden)]
pub use tracing as __tracing;

/// Install the stdout subscriber. Later calls are no-ops.
///
/// The filter is fixed (`LOG_FILTER`); the process reads no environment.
pub fn init() {
    let _ = tracing::subscriber::set_global_default(subscriber(std::io::stdout));
}

/// Plain-text formatter: no colours, no timestamps, no targets, so output
/// stays clean when redirected to a file.
fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::__tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
