//! The "Bank CLI" app's entry point.

use bank_cli::{interrupt, Shell};
use std::env;
use std::io;

/// The "Bank CLI" app's entry point.
fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    if let Err(err) = interrupt::spawn_listener() {
        log::warn!("Ctrl+C handling is unavailable: {}", err);
    }

    let mut shell = Shell::new(io::stdin().lock(), io::stdout());
    let end = shell.run();

    log::info!("Session ended: {:?}", end);
}
