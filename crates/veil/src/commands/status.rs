use veil_core::{Command, pid};

pub fn execute() {
    if veil_windows::ipc::is_daemon_running() {
        match veil_windows::ipc::send_command(&Command::Status) {
            Ok(response) if response.is_ok() => {
                let count = response.modified_windows.unwrap_or(0);
                println!("Veil is running, {count} window(s) modified.");
            }
            Ok(response) => super::fail(response.message.unwrap_or("unknown error".into())),
            Err(e) => super::fail(format!("status query failed: {e}")),
        }
        return;
    }

    // Pipe isn't responding; check for a PID file left behind by a
    // daemon that was killed without a clean shutdown.
    match pid::read_pid_file() {
        Ok(Some(pid)) if veil_windows::process::is_process_alive(pid) => {
            println!("Veil process exists (PID: {pid}) but is not responding.");
        }
        Ok(Some(_)) => {
            let _ = pid::remove_pid_file();
            println!("Veil is not running (cleaned up stale PID file).");
        }
        _ => println!("Veil is not running."),
    }
}
