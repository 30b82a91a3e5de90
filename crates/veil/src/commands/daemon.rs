pub fn execute() {
    if let Err(e) = veil_windows::daemon::run() {
        super::fail(format!("daemon: {e}"));
    }
}
