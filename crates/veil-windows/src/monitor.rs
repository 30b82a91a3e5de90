use std::mem;

use veil_core::{Rect, WindowResult};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};

/// Returns the full bounds of the monitor a window is on.
///
/// Unlike the work area, this includes the space reserved for the
/// taskbar, which is what a borderless maximized window should cover.
pub fn monitor_rect_for_window(hwnd: HWND) -> WindowResult<Rect> {
    // SAFETY: MonitorFromWindow always returns a monitor with
    // MONITOR_DEFAULTTONEAREST.
    let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTONEAREST) };

    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the struct; cbSize is set as required.
    if !unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    let rc = info.rcMonitor;
    Ok(Rect::from_edges(rc.left, rc.top, rc.right, rc.bottom))
}
