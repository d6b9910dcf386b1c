//! Log setup for the binary.
//!
//! Log lines go to stderr so the report on stdout stays parseable.

use crate::cli::LogFormat;
use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity count.
#[must_use]
pub const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "bookbind=warn",
        1 => "bookbind=debug",
        _ => "bookbind=trace",
    }
}

/// Installs the global `tracing` subscriber.
///
/// The filter comes from the verbosity count alone; `RUST_LOG` is not
/// read. Calling this more than once leaves the first subscriber in place.
pub fn init_tracing(verbose: u8, format: LogFormat) {
    let env_filter = EnvFilter::new(default_directive(verbose));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Text => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "bookbind=warn");
        assert_eq!(default_directive(1), "bookbind=debug");
        assert_eq!(default_directive(5), "bookbind=trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(0, LogFormat::Text);
        init_tracing(2, LogFormat::Json);
    }
}
