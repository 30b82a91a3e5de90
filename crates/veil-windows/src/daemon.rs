use veil_core::WindowResult;
use veil_core::pid;

use crate::{dpi, ipc};

#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the Veil daemon.
///
/// The engine lives on the Win32 event loop thread, together with the
/// mouse hook and the global hotkeys. The IPC listener runs on its own
/// thread; the main thread routes CLI commands and waits for shutdown.
pub fn run() -> WindowResult<()> {
    dpi::enable_dpi_awareness();

    if ipc::is_daemon_running() {
        return Err("Veil daemon is already running".into());
    }

    pid::write_pid_file()?;
    eprintln!("Veil daemon started.");

    let result = daemon_loop::daemon_loop();

    let _ = pid::remove_pid_file();

    result
}
