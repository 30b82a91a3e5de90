use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, MSG, TranslateMessage, WM_HOTKEY,
};

use super::host;
use crate::hotkey::HotkeyManager;
use crate::window;

/// The Win32 message pump. Runs hotkey actions against the foreground
/// window and blocks until WM_QUIT is received.
pub(super) fn run_message_pump(hotkeys: &HotkeyManager) {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY {
            if let Some(action) = hotkeys.action_for(msg.wParam.0 as i32) {
                let target = window::foreground_target();
                host::with_engine(|engine| engine.handle_action(action, target));
            }
            continue;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
