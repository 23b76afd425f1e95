use std::sync::atomic::{AtomicBool, Ordering};
use std::env;

static ENABLE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Initializes logging based on the TXWATCH_LOGGING environment variable.
/// - If TXWATCH_LOGGING=true, logging is enabled.
/// - If TXWATCH_LOGGING=false or not set, logging is disabled.
/// - To enable logging in tests, run: TXWATCH_LOGGING=true cargo test -- --nocapture
pub fn init_logging() {
    match env::var("TXWATCH_LOGGING") {
        Ok(value) => {
            match value.as_str() {
                "true" => ENABLE_LOGGING.store(true, Ordering::SeqCst),
                "false" => ENABLE_LOGGING.store(false, Ordering::SeqCst),
                _ => panic!("\nError: TXWATCH_LOGGING environment variable must be 'true' or 'false'\n\nTo run, use one of:\n  TXWATCH_LOGGING=true cargo test -- --nocapture\n  TXWATCH_LOGGING=false cargo test\n"),
            }
        }
        Err(_) => ENABLE_LOGGING.store(false, Ordering::SeqCst),
    }
}

pub fn log(prefix: &str, message: &str) {
    if ENABLE_LOGGING.load(Ordering::SeqCst) {
        println!("  [{}]   {}", prefix, message);
    }
}

/// Install a `tracing` fmt subscriber for binaries and hosts that want the
/// library's structured diagnostics on stdout. Safe to call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();
}
