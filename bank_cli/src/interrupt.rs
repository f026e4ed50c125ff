//! Ctrl+C handling
//!
//! The shell blocks on standard input, so the signal is awaited on a separate thread
//! that owns a small current-thread runtime.

use bank_common::cli::constants::INTERRUPTED_MSG;
use std::io;
use std::process;
use std::thread;

/// **Starts listening for Ctrl+C in the background.**
///
/// On Ctrl+C the farewell for an interrupted session is printed
/// and the process exits normally, with status 0.
///
/// # Errors
/// Fails if the runtime or the listener thread can't be created.
pub fn spawn_listener() -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("ctrl-c".to_string())
        .spawn(move || {
            runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        log::info!("Ctrl+C received");
                        println!("{INTERRUPTED_MSG}");
                        process::exit(0);
                    }
                    Err(err) => log::error!("Failed to listen for Ctrl+C: {}", err),
                }
            })
        })?;

    Ok(())
}
