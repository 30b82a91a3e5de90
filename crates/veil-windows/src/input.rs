//! Low-level pointer input: translation, modifier state and cursor shape.

use veil_core::config::Modifier;
use veil_core::{CursorShape, Point, PointerEvent};
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::GetAsyncKeyState;
use windows::Win32::UI::WindowsAndMessaging::{
    IDC_ARROW, IDC_SIZEALL, IDC_SIZENESW, IDC_SIZENS, IDC_SIZENWSE, IDC_SIZEWE, LoadCursorW,
    SetCursor, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE,
};

use crate::keys;

/// Translates a low-level mouse hook message into a `PointerEvent`.
///
/// Returns `None` for buttons and wheel messages Veil does not track.
pub fn translate(msg: u32, pt: POINT) -> Option<PointerEvent> {
    let p = Point::new(pt.x, pt.y);
    match msg {
        WM_LBUTTONDOWN => Some(PointerEvent::Down(p)),
        WM_MOUSEMOVE => Some(PointerEvent::Move(p)),
        WM_LBUTTONUP => Some(PointerEvent::Up(p)),
        _ => None,
    }
}

/// Whether `modifier` is physically held right now.
pub fn modifier_held(modifier: Modifier) -> bool {
    keys::modifier_vks(modifier).iter().any(|&vk| {
        // SAFETY: GetAsyncKeyState is a pure query. The high bit is set
        // while the key is down, which makes the i16 negative.
        unsafe { GetAsyncKeyState(vk) < 0 }
    })
}

/// Shows `shape` as the current cursor.
pub fn set_cursor(shape: CursorShape) {
    let id = match shape {
        CursorShape::Arrow => IDC_ARROW,
        CursorShape::SizeAll => IDC_SIZEALL,
        CursorShape::SizeNS => IDC_SIZENS,
        CursorShape::SizeWE => IDC_SIZEWE,
        CursorShape::SizeNWSE => IDC_SIZENWSE,
        CursorShape::SizeNESW => IDC_SIZENESW,
    };
    // SAFETY: system cursors are shared resources that never need freeing.
    unsafe {
        if let Ok(cursor) = LoadCursorW(None, id) {
            SetCursor(Some(cursor));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_primary_button_and_motion() {
        let pt = POINT { x: 10, y: 20 };
        assert_eq!(
            translate(WM_LBUTTONDOWN, pt),
            Some(PointerEvent::Down(Point::new(10, 20)))
        );
        assert_eq!(
            translate(WM_MOUSEMOVE, pt),
            Some(PointerEvent::Move(Point::new(10, 20)))
        );
        assert_eq!(
            translate(WM_LBUTTONUP, pt),
            Some(PointerEvent::Up(Point::new(10, 20)))
        );
    }

    #[test]
    fn ignores_other_buttons() {
        // WM_RBUTTONDOWN
        assert_eq!(translate(0x0204, POINT::default()), None);
    }
}
