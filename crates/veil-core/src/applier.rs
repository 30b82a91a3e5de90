//! Pushes opacity and chrome changes onto native windows.
//!
//! Every function here is best-effort. A rejected native call is logged
//! and swallowed; callers still update their in-memory state so a later
//! toggle or `reset_all` starts from the user's intent.

use crate::state::{WindowState, percent_to_alpha};
use crate::window::{EX_STYLE_LAYERED, STYLE_CAPTION, STYLE_THICKFRAME};
use crate::{Registry, WindowApi, WindowHandle, WindowResult};

/// Marks the window as layered if it is not already.
pub fn ensure_layered(api: &impl WindowApi, handle: WindowHandle) -> WindowResult<()> {
    let current = api.style(handle)?;
    if current.ex_style & EX_STYLE_LAYERED == 0 {
        api.set_ex_style(handle, current.ex_style | EX_STYLE_LAYERED)?;
    }
    Ok(())
}

/// Applies a user-facing opacity percentage.
pub fn apply_opacity(api: &impl WindowApi, handle: WindowHandle, percent: u8) {
    let alpha = percent_to_alpha(percent);
    if let Err(e) = write_alpha(api, handle, alpha) {
        crate::log_debug!("apply_opacity {handle} ({percent}%) failed: {e}");
    }
}

/// Writes a raw alpha and records it as the window's current ghost alpha.
pub fn set_direct_alpha(
    api: &impl WindowApi,
    registry: &mut Registry,
    handle: WindowHandle,
    alpha: u8,
) {
    if !api.is_window(handle) {
        return;
    }
    if let Err(e) = write_alpha(api, handle, alpha) {
        crate::log_debug!("set_direct_alpha {handle} ({alpha}) failed: {e}");
    }
    if let Some(state) = registry.get_mut(handle) {
        state.current_ghost_alpha = alpha;
    }
}

fn write_alpha(api: &impl WindowApi, handle: WindowHandle, alpha: u8) -> WindowResult<()> {
    ensure_layered(api, handle)?;
    api.set_alpha(handle, alpha)
}

/// Puts the layered bit back to what it was at first touch.
///
/// Other extended-style bits may have been changed by the application
/// since, so only `WS_EX_LAYERED` is restored.
pub fn restore_layered(api: &impl WindowApi, handle: WindowHandle, state: &WindowState) {
    let current = match api.style(handle) {
        Ok(current) => current.ex_style,
        Err(e) => {
            crate::log_debug!("restore {handle}: could not read ex style: {e}");
            return;
        }
    };
    let restored = (current & !EX_STYLE_LAYERED) | (state.original_ex_style & EX_STYLE_LAYERED);
    if restored != current
        && let Err(e) = api.set_ex_style(handle, restored)
    {
        crate::log_warn!("restore {handle}: set_ex_style failed: {e}");
    }
}

/// Strips the caption and sizing frame from a window.
///
/// The current geometry and style are saved into `state` first so
/// [`restore_style`] can undo the change. A maximized window is
/// additionally stretched over its whole monitor, taskbar area included.
pub fn apply_borderless(api: &impl WindowApi, handle: WindowHandle, state: &mut WindowState) {
    match api.rect(handle) {
        Ok(rect) => state.original_rect = rect,
        Err(e) => crate::log_warn!("borderless {handle}: could not read rect: {e}"),
    }

    let style = match api.style(handle) {
        Ok(current) => {
            state.original_style = current.style;
            current.style
        }
        Err(e) => {
            crate::log_warn!("borderless {handle}: could not read style: {e}");
            state.original_style
        }
    };

    let stripped = style & !(STYLE_CAPTION | STYLE_THICKFRAME);
    if let Err(e) = api.set_style(handle, stripped) {
        crate::log_warn!("borderless {handle}: set_style failed: {e}");
    }

    let result = if api.is_maximized(handle) {
        api.monitor_rect(handle)
            .and_then(|monitor| api.cover_monitor(handle, &monitor))
    } else {
        api.refresh_frame(handle)
    };
    if let Err(e) = result {
        crate::log_warn!("borderless {handle}: frame update failed: {e}");
    }
}

/// Reapplies the saved style and geometry verbatim.
pub fn restore_style(api: &impl WindowApi, handle: WindowHandle, state: &WindowState) {
    if let Err(e) = api.set_style(handle, state.original_style) {
        crate::log_warn!("restore {handle}: set_style failed: {e}");
    }
    if let Err(e) = api.restore_rect(handle, &state.original_rect) {
        crate::log_warn!("restore {handle}: restore_rect failed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use crate::testing::{FakeApi, OVERLAPPED_STYLE};

    #[test]
    fn ensure_layered_sets_flag_once() {
        // Arrange
        let api = FakeApi::new();
        let h = api.add_app(1, Rect::new(0, 0, 640, 480));

        // Act
        ensure_layered(&api, h).unwrap();
        ensure_layered(&api, h).unwrap();

        // Assert
        assert_eq!(api.window(h).style.ex_style, EX_STYLE_LAYERED);
    }

    #[test]
    fn apply_opacity_writes_rounded_alpha() {
        // Arrange
        let api = FakeApi::new();
        let h = api.add_app(1, Rect::new(0, 0, 640, 480));

        // Act
        apply_opacity(&api, h, 50);

        // Assert
        assert_eq!(api.window(h).alpha, Some(128));
    }

    #[test]
    fn borderless_strips_caption_and_thick_frame() {
        // Arrange
        let api = FakeApi::new();
        let h = api.add_app(1, Rect::new(10, 10, 640, 480));
        let mut state = WindowState::new(OVERLAPPED_STYLE, 0, Rect::default());

        // Act
        apply_borderless(&api, h, &mut state);

        // Assert
        let style = api.window(h).style.style;
        assert_eq!(style & (STYLE_CAPTION | STYLE_THICKFRAME), 0);
        assert_eq!(state.original_rect, Rect::new(10, 10, 640, 480));
        assert_eq!(api.window(h).rect, Rect::new(10, 10, 640, 480));
    }

    #[test]
    fn maximized_borderless_covers_whole_monitor() {
        // Arrange
        let api = FakeApi::new();
        let h = api.add_app(1, Rect::new(-8, -8, 1936, 1056));
        api.update(h, |w| w.maximized = true);
        let mut state = WindowState::new(OVERLAPPED_STYLE, 0, Rect::default());

        // Act
        apply_borderless(&api, h, &mut state);

        // Assert
        let window = api.window(h);
        assert_eq!(window.rect, Rect::new(0, 0, 1920, 1080));
        assert!(window.on_top);
        assert_eq!(state.original_rect, Rect::new(-8, -8, 1936, 1056));
    }

    #[test]
    fn restore_reapplies_saved_style_and_rect() {
        // Arrange
        let api = FakeApi::new();
        let h = api.add_app(1, Rect::new(0, 0, 100, 100));
        let state = WindowState::new(OVERLAPPED_STYLE, 0, Rect::new(50, 60, 700, 500));
        api.update(h, |w| w.style.style = 0);

        // Act
        restore_style(&api, h, &state);

        // Assert
        assert_eq!(api.window(h).style.style, OVERLAPPED_STYLE);
        assert_eq!(api.window(h).rect, Rect::new(50, 60, 700, 500));
    }

    #[test]
    fn restore_layered_only_touches_the_layered_bit() {
        // Arrange
        let api = FakeApi::new();
        let h = api.add_app(1, Rect::new(0, 0, 100, 100));
        let state = WindowState::new(OVERLAPPED_STYLE, 0, Rect::new(0, 0, 100, 100));
        let other_bit = 0x0000_0008;
        api.update(h, |w| w.style.ex_style = EX_STYLE_LAYERED | other_bit);

        // Act
        restore_layered(&api, h, &state);

        // Assert
        assert_eq!(api.window(h).style.ex_style, other_bit);
    }
}
