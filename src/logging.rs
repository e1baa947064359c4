//! Diagnostic logging
//!
//! Logs go to stderr through `tracing-subscriber`; stdout carries results only.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
fn directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,bindx=debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive(verbosity)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_levels() {
        assert_eq!(directive(0), "warn");
        assert_eq!(directive(1), "warn,bindx=debug");
        assert_eq!(directive(2), "trace");
        assert_eq!(directive(9), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
