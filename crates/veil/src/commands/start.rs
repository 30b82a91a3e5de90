use std::os::windows::process::CommandExt;
use std::process::{Command, Stdio};

use veil_core::{WindowResult, pid};

/// Windows process creation flags for launching a fully detached daemon.
///
/// `CREATE_NEW_PROCESS_GROUP` (0x200): Ctrl+C in the CLI terminal does
/// not reach the daemon.
///
/// `CREATE_NO_WINDOW` (0x08000000): no console window, and no inherited
/// console handles that would keep `cmd.output()` waiting in tests.
const DETACH_FLAGS: u32 = 0x08000000 | 0x00000200;

pub fn execute() {
    if veil_windows::ipc::is_daemon_running() {
        println!("Veil is already running.");
        return;
    }

    // Clean up a PID file left by an unclean shutdown.
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if veil_windows::process::is_process_alive(pid) {
            println!("Veil process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = pid::remove_pid_file();
    }

    match spawn_daemon() {
        Ok(pid) => print_banner(pid),
        Err(e) => super::fail(format!("failed to start daemon: {e}")),
    }
}

/// Re-runs this executable with the hidden `daemon` subcommand as a
/// detached background process and returns its PID.
fn spawn_daemon() -> WindowResult<u32> {
    let exe = std::env::current_exe()?;
    let mut child = Command::new(exe)
        .arg("daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .creation_flags(DETACH_FLAGS)
        .spawn()?;

    let pid = child.id();
    // Acknowledge the child without blocking; the daemon outlives us.
    let _ = child.try_wait();
    Ok(pid)
}

/// Tips shown on startup, rotated by clock so users see a different
/// one each time they start the daemon.
const TIPS: &[&str] = &[
    "Hold Ctrl and drag a ghost window to move or resize it",
    "Ctrl+Alt+Up and Ctrl+Alt+Down change the foreground window's opacity",
    "Ctrl+Alt+B strips the frame; press it again to restore",
    "Edit keybindings in ~/.config/veil/keybindings.toml",
    "Run 'veil status' to see how many windows are modified",
    "Run 'veil action reset-all' to restore every window",
];

fn print_banner(pid: u32) {
    let d = "\x1b[90m"; // Dim gray: labels
    let w = "\x1b[1;97m"; // Bold bright white: values
    let r = "\x1b[0m"; // Reset
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let tip = TIPS[secs as usize % TIPS.len()];

    super::banner::print_logo();
    println!();
    println!("  {d}Config{r}   ~/.config/veil/");
    println!("  {d}Daemon{r}   Started (PID: {w}{pid}{r})");
    println!("  {d}Tip{r}      {tip}");
    println!();
}
