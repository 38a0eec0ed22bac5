//! Tracing subscriber setup for the command-line tool

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a verbosity level
///
/// `0` keeps warnings and errors, `1` adds engine debug output, `2` and above
/// traces everything. Negative values (quiet) keep errors only.
pub const fn filter_directive(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-1 => "error",
        0 => "slotgrid=warn",
        1 => "slotgrid=debug,warn",
        _ => "trace",
    }
}

/// Install a compact stderr subscriber
///
/// `RUST_LOG` takes precedence over `verbosity` when set. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
pub fn init_logger(verbosity: i8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
