//! Logging setup for the kiosk.
//!
//! Filter directives come from the `KIOSK_LOG` environment variable and fall
//! back to `info`. Output goes to stderr so it never mixes with the
//! `settings show` JSON printed on stdout.

use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "KIOSK_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    #[test]
    fn env_filter_parses_module_directive() {
        assert!(EnvFilter::try_new("signage_kiosk=debug,warn").is_ok());
    }
}
