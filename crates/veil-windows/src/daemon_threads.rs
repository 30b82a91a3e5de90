use std::sync::mpsc;
use std::thread;

use veil_core::WindowResult;

use crate::ctrl_c;

use super::daemon_ipc;
use super::daemon_types::DaemonMsg;

/// Spawns the IPC listener thread.
pub(super) fn spawn_ipc_listener(tx: mpsc::Sender<DaemonMsg>) -> thread::JoinHandle<()> {
    thread::spawn(move || daemon_ipc::ipc_loop(tx))
}

/// Installs the Ctrl+C handler and bridges the first signal into the
/// daemon channel.
pub(super) fn spawn_interrupt_bridge(tx: mpsc::Sender<DaemonMsg>) -> WindowResult<()> {
    let (signal_tx, signal_rx) = mpsc::channel::<()>();
    ctrl_c::set_handler(signal_tx)?;
    thread::spawn(move || {
        if signal_rx.recv().is_ok() {
            let _ = tx.send(DaemonMsg::Interrupt);
        }
    });
    Ok(())
}
