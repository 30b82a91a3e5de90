use veil_core::WindowResult;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_ACCESS_RIGHTS, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE,
    TerminateProcess,
};

/// A process handle closed on drop.
struct ProcessHandle(HANDLE);

impl ProcessHandle {
    fn open(access: PROCESS_ACCESS_RIGHTS, pid: u32) -> windows::core::Result<Self> {
        // SAFETY: OpenProcess either fails or returns a handle we own.
        unsafe { OpenProcess(access, false, pid) }.map(Self)
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: the handle was opened by ProcessHandle::open.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Whether a process with the given PID is still alive.
///
/// Used to spot stale PID files left by a daemon that was killed
/// without a clean shutdown.
pub fn is_process_alive(pid: u32) -> bool {
    ProcessHandle::open(PROCESS_QUERY_LIMITED_INFORMATION, pid).is_ok()
}

/// Terminates the process with the given PID.
///
/// Last resort for a daemon that no longer answers on the pipe; its
/// windows are not restored.
pub fn kill_process(pid: u32) -> WindowResult<()> {
    let process = ProcessHandle::open(PROCESS_TERMINATE, pid)?;
    // SAFETY: the handle carries PROCESS_TERMINATE.
    unsafe { TerminateProcess(process.0, 1)? };
    Ok(())
}
