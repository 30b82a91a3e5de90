use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares the process per-monitor DPI aware (V2).
///
/// Window rectangles, monitor bounds and hook coordinates are then all
/// raw physical pixels, so drag arithmetic and borderless monitor cover
/// line up on mixed-DPI setups. Call once, before creating any window.
pub fn enable_dpi_awareness() {
    // SAFETY: failure (for example, awareness already set by a manifest)
    // leaves the process in a usable state.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
