//! Delegates a drag gesture to the OS interactive move/size loop.

use veil_core::{DragMode, WindowHandle};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
use windows::Win32::UI::WindowsAndMessaging::{SendMessageW, SetForegroundWindow, WM_SYSCOMMAND};

use crate::window::hwnd;

const SC_SIZE: usize = 0xF000;
/// `SC_MOVE | HTCAPTION`: move as if the caption were being dragged.
const SC_DRAGMOVE: usize = 0xF012;

// WMSZ_* edge codes, added to SC_SIZE.
const WMSZ_LEFT: usize = 1;
const WMSZ_RIGHT: usize = 2;
const WMSZ_TOP: usize = 3;
const WMSZ_TOPLEFT: usize = 4;
const WMSZ_TOPRIGHT: usize = 5;
const WMSZ_BOTTOM: usize = 6;
const WMSZ_BOTTOMLEFT: usize = 7;
const WMSZ_BOTTOMRIGHT: usize = 8;

/// The `WM_SYSCOMMAND` wParam that starts `mode`.
pub fn syscommand_for(mode: DragMode) -> Option<usize> {
    let edge = match mode {
        DragMode::None => return None,
        DragMode::Move => return Some(SC_DRAGMOVE),
        DragMode::ResizeW => WMSZ_LEFT,
        DragMode::ResizeE => WMSZ_RIGHT,
        DragMode::ResizeN => WMSZ_TOP,
        DragMode::ResizeNW => WMSZ_TOPLEFT,
        DragMode::ResizeNE => WMSZ_TOPRIGHT,
        DragMode::ResizeS => WMSZ_BOTTOM,
        DragMode::ResizeSW => WMSZ_BOTTOMLEFT,
        DragMode::ResizeSE => WMSZ_BOTTOMRIGHT,
    };
    Some(SC_SIZE + edge)
}

/// Runs the OS move/size loop on `target`.
///
/// Blocks until the user releases the button. Must not be called from
/// inside a hook callback.
pub fn run_native(target: WindowHandle, mode: DragMode) {
    let Some(command) = syscommand_for(mode) else {
        return;
    };
    let hwnd = hwnd(target);
    // SAFETY: the target may belong to another process; SendMessageW
    // marshals the call and returns once its move/size loop ends.
    unsafe {
        let _ = ReleaseCapture();
        let _ = SetForegroundWindow(hwnd);
        SendMessageW(hwnd, WM_SYSCOMMAND, Some(WPARAM(command)), Some(LPARAM(0)));
    }
}
