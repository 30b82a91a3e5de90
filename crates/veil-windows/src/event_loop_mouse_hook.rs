use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, HC_ACTION, HHOOK, MSLLHOOKSTRUCT, SetWindowsHookExW, UnhookWindowsHookEx,
    WH_MOUSE_LL,
};

use super::host;
use crate::input;

/// Installs the low-level mouse hook on the current thread.
///
/// The thread must pump messages; Windows calls the hook through its
/// message queue.
pub(super) fn install() -> Result<HHOOK, String> {
    // SAFETY: a low-level hook needs no module handle and is global.
    unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) }
        .map_err(|e| format!("Failed to install mouse hook: {e}"))
}

pub(super) fn uninstall(hook: HHOOK) {
    // SAFETY: removing our own hook.
    unsafe {
        let _ = UnhookWindowsHookEx(hook);
    }
}

/// The low-level mouse callback.
///
/// Returning a non-zero value without calling `CallNextHookEx` swallows
/// the event.
unsafe extern "system" fn mouse_hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        // SAFETY: for WH_MOUSE_LL with HC_ACTION, lparam points to a
        // MSLLHOOKSTRUCT that is valid for the duration of the call.
        let info = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
        if let Some(event) = input::translate(wparam.0 as u32, info.pt)
            && host::handle_pointer(event)
        {
            return LRESULT(1);
        }
    }
    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}
