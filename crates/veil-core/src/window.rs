use crate::Rect;

/// A boxed error type for window operations.
///
/// Any error type that implements the `Error` trait can be boxed into this.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// `WS_CAPTION`: title bar plus thin border.
pub const STYLE_CAPTION: u32 = 0x00C0_0000;
/// `WS_THICKFRAME`: sizing border.
pub const STYLE_THICKFRAME: u32 = 0x0004_0000;
/// `WS_EX_LAYERED`: required before a window alpha can be set.
pub const EX_STYLE_LAYERED: u32 = 0x0008_0000;

/// An opaque, OS-assigned identifier for a top-level window.
///
/// Veil does not own the window behind a handle. The OS may destroy it
/// at any time, so every operation re-validates the handle before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub usize);

impl WindowHandle {
    /// The null handle. Never a valid target.
    pub const NULL: Self = Self(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

/// The pair of style bitmasks a window carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowStyle {
    pub style: u32,
    pub ex_style: u32,
}

/// Native window operations the engine drives.
///
/// Each platform crate (e.g. `veil-windows`) provides its own
/// implementation. Every call is best-effort: the engine logs failures
/// and carries on with its in-memory state.
pub trait WindowApi {
    /// Returns whether the handle still resolves to a live window.
    fn is_window(&self, handle: WindowHandle) -> bool;

    /// Returns the window class name.
    fn class_name(&self, handle: WindowHandle) -> WindowResult<String>;

    /// Returns the window bounding rectangle, invisible borders included.
    fn rect(&self, handle: WindowHandle) -> WindowResult<Rect>;

    /// Returns the current style and extended style.
    fn style(&self, handle: WindowHandle) -> WindowResult<WindowStyle>;

    /// Replaces the window style bits.
    fn set_style(&self, handle: WindowHandle, style: u32) -> WindowResult<()>;

    /// Replaces the extended window style bits.
    fn set_ex_style(&self, handle: WindowHandle, ex_style: u32) -> WindowResult<()>;

    /// Writes a whole-window alpha. The window must already be layered.
    fn set_alpha(&self, handle: WindowHandle, alpha: u8) -> WindowResult<()>;

    /// Returns whether the window is currently maximized by the OS.
    fn is_maximized(&self, handle: WindowHandle) -> bool;

    /// Returns the full bounds of the monitor nearest the window,
    /// including the area reserved for the taskbar.
    fn monitor_rect(&self, handle: WindowHandle) -> WindowResult<Rect>;

    /// Moves and resizes the window without touching its z-order.
    fn set_rect(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()>;

    /// Moves and resizes the window and recomputes its frame.
    fn restore_rect(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()>;

    /// Places the window on top, covering `rect`, and recomputes its frame.
    fn cover_monitor(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()>;

    /// Recomputes the frame after a style change without moving the window.
    fn refresh_frame(&self, handle: WindowHandle) -> WindowResult<()>;
}
