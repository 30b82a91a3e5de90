use veil_core::{Command, pid};

pub fn execute() {
    // Graceful shutdown restores every modified window.
    if veil_windows::ipc::is_daemon_running() {
        match veil_windows::ipc::send_command(&Command::Stop) {
            Ok(response) if response.is_ok() => {
                println!("Veil stopped. {}", response.message.unwrap_or_default());
                let _ = pid::remove_pid_file();
                return;
            }
            Ok(response) => super::fail(response.message.unwrap_or("unknown error".into())),
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // Fallback: the pipe is gone but the process may still be alive.
    match pid::read_pid_file() {
        Ok(Some(pid)) if veil_windows::process::is_process_alive(pid) => {
            match veil_windows::process::kill_process(pid) {
                Ok(()) => {
                    let _ = pid::remove_pid_file();
                    println!("Veil stopped (killed PID {pid}). Windows were not restored.");
                }
                Err(e) => super::fail(format!("could not kill process {pid}: {e}")),
            }
        }
        _ => println!("Veil is not running."),
    }
}
