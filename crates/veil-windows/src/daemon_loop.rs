use std::sync::mpsc;

use veil_core::WindowResult;
use veil_core::config;
use veil_core::ipc::{Command, Response};

use crate::event_loop::{self, EventLoopHandle, LoopRequest};

use super::daemon_threads;
use super::daemon_types::{DaemonMsg, ResponseSender};

/// The inner daemon loop, separated so PID cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> WindowResult<()> {
    let config = config::load();
    veil_core::log::init(&config.logging);

    let keybindings = config::load_keybindings();

    veil_core::log_info!("Daemon started (PID: {})", std::process::id());
    veil_core::log_info!(
        "Config: opacity(step={}), ghost(interval={}ms, near={}, far={}), drag(strategy={:?}, modifier={}), log_level={}",
        config.opacity.step,
        config.ghost.interval_ms,
        config.ghost.near,
        config.ghost.far,
        config.drag.strategy,
        config.drag.modifier,
        config.logging.level
    );

    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    // The engine, hook, hotkeys and timers all live on this thread.
    let event_loop = event_loop::start(config, keybindings)?;

    let ipc_thread = daemon_threads::spawn_ipc_listener(tx.clone());

    if let Err(e) = daemon_threads::spawn_interrupt_bridge(tx.clone()) {
        veil_core::log_warn!("Ctrl+C handler not installed: {e}");
    }

    // Set when shutdown came from `veil stop`; answered after windows
    // are restored.
    let mut stop_reply: Option<ResponseSender> = None;

    while let Ok(msg) = rx.recv() {
        match msg {
            DaemonMsg::Command(Command::Stop, reply_tx) => {
                veil_core::log_info!("Stop command received, shutting down");
                stop_reply = Some(reply_tx);
                break;
            }
            DaemonMsg::Command(command, reply_tx) => {
                let _ = reply_tx.send(forward(&command, &event_loop));
            }
            DaemonMsg::Interrupt => {
                veil_core::log_info!("Ctrl+C received, shutting down");
                break;
            }
        }
    }

    // Restores every modified window before the thread exits.
    event_loop.stop();
    drop(tx);

    if let Some(reply_tx) = stop_reply {
        let _ = reply_tx.send(Response::ok_with_message("Daemon stopped"));
        let _ = ipc_thread.join();
    }

    veil_core::log_info!("Daemon stopped");
    Ok(())
}

/// Runs a command on the event thread and waits for its reply.
fn forward(command: &Command, event_loop: &EventLoopHandle) -> Response {
    let (reply_tx, reply_rx) = mpsc::channel();
    let request = match command {
        Command::Status => LoopRequest::Status(reply_tx),
        Command::Action { action } => LoopRequest::Action(*action, reply_tx),
        Command::Stop => return Response::error("stop is handled by the daemon loop"),
    };

    if let Err(e) = event_loop.send(request) {
        return Response::error(e.to_string());
    }
    reply_rx
        .recv()
        .unwrap_or_else(|_| Response::error("event loop stopped before replying"))
}
