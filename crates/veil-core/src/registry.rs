use std::collections::HashMap;

use crate::applier;
use crate::state::{MAX_OPACITY, WindowState};
use crate::{WindowApi, WindowHandle, WindowStyle};

/// Owns the shadow state of every window Veil has touched.
///
/// Entries are created lazily by the first mutating action on a handle.
/// A handle that stops being valid is skipped by the sweeps below but
/// stays in the table until [`Registry::cleanup`] or
/// [`Registry::reset_all`] runs.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<WindowHandle, WindowState>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state for `handle`, creating it on first use.
    ///
    /// Creation snapshots the window's style and geometry. A query that
    /// fails falls back to zeroed values so the entry still exists.
    pub fn get_or_create(&mut self, api: &impl WindowApi, handle: WindowHandle) -> &mut WindowState {
        self.entries.entry(handle).or_insert_with(|| {
            let style = api.style(handle).unwrap_or_else(|e| {
                crate::log_warn!("snapshot {handle}: could not read style: {e}");
                WindowStyle::default()
            });
            let rect = api.rect(handle).unwrap_or_else(|e| {
                crate::log_warn!("snapshot {handle}: could not read rect: {e}");
                Default::default()
            });
            crate::log_debug!(
                "tracking {handle}: style=0x{:08X} ex=0x{:08X} rect=({},{} {}x{})",
                style.style,
                style.ex_style,
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
            WindowState::new(style.style, style.ex_style, rect)
        })
    }

    pub fn get(&self, handle: WindowHandle) -> Option<&WindowState> {
        self.entries.get(&handle)
    }

    pub fn get_mut(&mut self, handle: WindowHandle) -> Option<&mut WindowState> {
        self.entries.get_mut(&handle)
    }

    /// Handles of entries that carry a modification and are still alive.
    pub fn active_handles(&self, api: &impl WindowApi) -> Vec<WindowHandle> {
        let mut handles: Vec<_> = self
            .entries
            .iter()
            .filter(|(handle, state)| state.is_active() && api.is_window(**handle))
            .map(|(handle, _)| *handle)
            .collect();
        handles.sort();
        handles
    }

    /// Number of modified windows that are still alive.
    pub fn active_count(&self, api: &impl WindowApi) -> usize {
        self.active_handles(api).len()
    }

    /// Restores every modified live window to its original look, then
    /// forgets all entries.
    ///
    /// Entries without an active modification are never written to.
    pub fn reset_all(&mut self, api: &impl WindowApi) {
        let mut restored = 0;
        for (&handle, state) in &self.entries {
            if !state.is_active() || !api.is_window(handle) {
                continue;
            }
            applier::apply_opacity(api, handle, MAX_OPACITY);
            if state.is_borderless {
                applier::restore_style(api, handle, state);
            }
            applier::restore_layered(api, handle, state);
            restored += 1;
        }
        let count = self.entries.len();
        self.entries.clear();
        crate::log_info!("Reset {restored} of {count} tracked windows");
    }

    /// Drops entries whose handle no longer resolves to a live window.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup(&mut self, api: &impl WindowApi) -> usize {
        let before = self.entries.len();
        self.entries.retain(|handle, _| api.is_window(*handle));
        let removed = before - self.entries.len();
        if removed > 0 {
            crate::log_debug!("cleanup removed {removed} stale entries");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
