use veil_core::{Action, Command};

/// Sends an action to the running daemon via IPC.
pub fn execute(action: Action) {
    if !veil_windows::ipc::is_daemon_running() {
        super::fail("Veil is not running. Start it with 'veil start'.");
    }

    match veil_windows::ipc::send_command(&Command::Action { action }) {
        Ok(response) if response.is_ok() => {
            if let Some(msg) = response.message {
                println!("{msg}");
            }
        }
        Ok(response) => super::fail(response.message.unwrap_or("unknown error".into())),
        Err(e) => super::fail(format!("failed to send {action}: {e}")),
    }
}
