use veil_core::{Point, Rect, WindowApi, WindowHandle, WindowResult, WindowStyle};

use windows::Win32::Foundation::{
    COLORREF, GetLastError, HWND, POINT, RECT, SetLastError, WIN32_ERROR,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GA_ROOTOWNER, GWL_EXSTYLE, GWL_STYLE, GetAncestor, GetCursorPos, GetForegroundWindow,
    GetShellWindow, GetWindowLongPtrW, GetWindowRect, HWND_TOP, IsWindow, IsZoomed, LWA_ALPHA,
    RealGetWindowClassW, SET_WINDOW_POS_FLAGS, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE,
    SWP_NOSIZE, SWP_NOZORDER, SetLayeredWindowAttributes, SetWindowLongPtrW, SetWindowPos,
    WINDOW_LONG_PTR_INDEX, WindowFromPoint,
};

use crate::monitor;

/// Converts a platform-agnostic handle into a Win32 `HWND`.
pub fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut _)
}

/// Converts a Win32 `HWND` into a platform-agnostic handle.
pub fn handle(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as usize)
}

/// The [`WindowApi`] backed by user32.
///
/// Holds no state; every call goes straight to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Api;

impl Win32Api {
    fn set_long(
        &self,
        handle: WindowHandle,
        index: WINDOW_LONG_PTR_INDEX,
        value: u32,
    ) -> WindowResult<()> {
        // SAFETY: SetWindowLongPtrW returns the previous value, which may
        // legitimately be 0. Clearing the last error first lets us tell a
        // zero previous value apart from a failure.
        unsafe {
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongPtrW(hwnd(handle), index, value as isize);
            if previous == 0 {
                let err = GetLastError();
                if err.0 != 0 {
                    return Err(format!("SetWindowLongPtrW failed: {}", err.0).into());
                }
            }
        }
        Ok(())
    }

    fn set_pos(
        &self,
        handle: WindowHandle,
        insert_after: Option<HWND>,
        rect: &Rect,
        flags: SET_WINDOW_POS_FLAGS,
    ) -> WindowResult<()> {
        // SAFETY: SetWindowPos on a foreign top-level window; stale handles
        // make it fail cleanly.
        unsafe {
            SetWindowPos(
                hwnd(handle),
                insert_after,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                flags,
            )?;
        }
        Ok(())
    }
}

impl WindowApi for Win32Api {
    fn is_window(&self, handle: WindowHandle) -> bool {
        // SAFETY: IsWindow accepts any value and only reports validity.
        !handle.is_null() && unsafe { IsWindow(Some(hwnd(handle))).as_bool() }
    }

    fn class_name(&self, handle: WindowHandle) -> WindowResult<String> {
        // SAFETY: 256 is the maximum class name length in Win32.
        let mut buffer = [0u16; 256];
        let length = unsafe { RealGetWindowClassW(hwnd(handle), &mut buffer) };
        if length == 0 {
            return Err(format!("could not read class of {handle}").into());
        }
        Ok(String::from_utf16_lossy(&buffer[..length as usize]))
    }

    fn rect(&self, handle: WindowHandle) -> WindowResult<Rect> {
        let mut rc = RECT::default();
        // SAFETY: GetWindowRect writes into our stack RECT.
        unsafe { GetWindowRect(hwnd(handle), &mut rc)? };
        Ok(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom))
    }

    fn style(&self, handle: WindowHandle) -> WindowResult<WindowStyle> {
        if !self.is_window(handle) {
            return Err(format!("invalid window handle {handle}").into());
        }
        // SAFETY: reading window longs has no side effects.
        unsafe {
            Ok(WindowStyle {
                style: GetWindowLongPtrW(hwnd(handle), GWL_STYLE) as u32,
                ex_style: GetWindowLongPtrW(hwnd(handle), GWL_EXSTYLE) as u32,
            })
        }
    }

    fn set_style(&self, handle: WindowHandle, style: u32) -> WindowResult<()> {
        self.set_long(handle, GWL_STYLE, style)
    }

    fn set_ex_style(&self, handle: WindowHandle, ex_style: u32) -> WindowResult<()> {
        self.set_long(handle, GWL_EXSTYLE, ex_style)
    }

    fn set_alpha(&self, handle: WindowHandle, alpha: u8) -> WindowResult<()> {
        // SAFETY: the window carries WS_EX_LAYERED (set by the applier).
        unsafe { SetLayeredWindowAttributes(hwnd(handle), COLORREF(0), alpha, LWA_ALPHA)? };
        Ok(())
    }

    fn is_maximized(&self, handle: WindowHandle) -> bool {
        // SAFETY: IsZoomed is a simple query.
        unsafe { IsZoomed(hwnd(handle)).as_bool() }
    }

    fn monitor_rect(&self, handle: WindowHandle) -> WindowResult<Rect> {
        monitor::monitor_rect_for_window(hwnd(handle))
    }

    fn set_rect(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        self.set_pos(handle, None, rect, SWP_NOZORDER | SWP_NOACTIVATE)
    }

    fn restore_rect(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        self.set_pos(
            handle,
            None,
            rect,
            SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
        )
    }

    fn cover_monitor(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        self.set_pos(handle, Some(HWND_TOP), rect, SWP_FRAMECHANGED)
    }

    fn refresh_frame(&self, handle: WindowHandle) -> WindowResult<()> {
        self.set_pos(
            handle,
            None,
            &Rect::default(),
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE | SWP_FRAMECHANGED,
        )
    }
}

/// Resolves `hwnd` to its top-level root owner.
fn root_owner(hwnd: HWND) -> WindowHandle {
    if hwnd.is_invalid() {
        return WindowHandle::NULL;
    }
    // SAFETY: GetAncestor only walks the window tree.
    handle(unsafe { GetAncestor(hwnd, GA_ROOTOWNER) })
}

/// The window hotkey and CLI actions apply to: the foreground window's
/// root owner.
pub fn foreground_target() -> WindowHandle {
    // SAFETY: GetForegroundWindow has no preconditions.
    root_owner(unsafe { GetForegroundWindow() })
}

/// The top-level window under a screen point.
pub fn window_at(p: Point) -> WindowHandle {
    // SAFETY: WindowFromPoint has no preconditions.
    root_owner(unsafe { WindowFromPoint(POINT { x: p.x, y: p.y }) })
}

/// The desktop shell window.
pub fn shell_window() -> WindowHandle {
    // SAFETY: GetShellWindow has no preconditions.
    handle(unsafe { GetShellWindow() })
}

/// Current pointer position, if it can be read.
pub fn cursor_pos() -> Option<Point> {
    let mut pt = POINT::default();
    // SAFETY: GetCursorPos writes into our stack POINT.
    unsafe { GetCursorPos(&mut pt) }.ok()?;
    Some(Point::new(pt.x, pt.y))
}
