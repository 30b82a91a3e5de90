//! Proximity-driven opacity for windows in ghost mode.
//!
//! A ghost window is nearly invisible while the pointer is close to it
//! and fades back to its configured opacity as the pointer moves away.

use serde::{Deserialize, Serialize};

use crate::applier;
use crate::state::percent_to_alpha;
use crate::{Point, Registry, WindowApi};

/// Ghost mode tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    /// Scheduler period in milliseconds.
    pub interval_ms: u32,
    /// Below this distance (px) the window sits at `floor_alpha`.
    pub near: f64,
    /// At or beyond this distance (px) the window is at full opacity.
    pub far: f64,
    /// Alpha used when the pointer is near. Kept above zero so the
    /// window never becomes completely invisible.
    pub floor_alpha: u8,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            interval_ms: 100,
            near: 50.0,
            far: 150.0,
            floor_alpha: 13,
        }
    }
}

impl GhostConfig {
    /// Maps a pointer distance to an alpha for a window whose configured
    /// opacity is `opacity_percent`.
    pub fn alpha_for_distance(&self, distance: f64, opacity_percent: u8) -> u8 {
        let max_alpha = percent_to_alpha(opacity_percent);
        if distance < self.near {
            return self.floor_alpha;
        }
        if distance >= self.far {
            return max_alpha;
        }
        let ratio = (distance - self.near) / (self.far - self.near);
        let floor = f64::from(self.floor_alpha);
        (floor + (f64::from(max_alpha) - floor) * ratio) as u8
    }
}

/// Runs one scheduler pass over every active ghost window.
///
/// `pointer` and `modifier_held` are sampled once by the caller for the
/// whole pass. Holding the modifier pins each window to its configured
/// opacity. Alpha is only written when it differs from the last value
/// written, and windows that vanish mid-pass are skipped.
///
/// Returns the number of windows whose alpha changed.
pub fn tick(
    config: &GhostConfig,
    api: &impl WindowApi,
    registry: &mut Registry,
    pointer: Point,
    modifier_held: bool,
) -> usize {
    let mut written = 0;

    for handle in registry.active_handles(api) {
        let Some(state) = registry.get(handle) else {
            continue;
        };
        if !state.is_ghost_mode {
            continue;
        }
        if !api.is_window(handle) {
            continue;
        }

        let alpha = if modifier_held {
            percent_to_alpha(state.opacity_percent)
        } else {
            let Ok(rect) = api.rect(handle) else {
                continue;
            };
            config.alpha_for_distance(rect.distance_to(pointer), state.opacity_percent)
        };

        if state.current_ghost_alpha != alpha {
            applier::set_direct_alpha(api, registry, handle, alpha);
            written += 1;
        }
    }

    written
}
