use std::io;

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber for the binary.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or this crate's
/// debug events with `-v`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "warn,yaml_locales=debug" } else { "warn" })
    });

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
