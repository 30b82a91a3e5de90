pub mod keybinding;
mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::drag::{DEFAULT_EDGE_SIZE, DEFAULT_MIN_SIZE, DragStrategy};

pub use crate::ghost::GhostConfig;
pub use crate::log::LogConfig;
pub use keybinding::{Keybinding, Modifier};
pub use loader::{
    config_dir, config_path, keybindings_path, load, load_keybindings, try_load,
    try_load_keybindings,
};

/// Top-level configuration for Veil.
///
/// Loaded from `~/.config/veil/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra window classes Veil must never touch, on top of the shell
    /// surfaces that are always excluded.
    pub exclude_classes: Vec<String>,
    pub opacity: OpacityConfig,
    pub ghost: GhostConfig,
    pub drag: DragConfig,
    pub registry: RegistryConfig,
    pub logging: LogConfig,
}

/// Opacity hotkey settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpacityConfig {
    /// Percentage points added or removed per opacity action.
    pub step: u8,
}

impl Default for OpacityConfig {
    fn default() -> Self {
        Self { step: 5 }
    }
}

/// Modifier-drag settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Who tracks the gesture: the OS move/size loop or Veil itself.
    pub strategy: DragStrategy,
    /// Key that must be held at pointer-down to start a drag.
    pub modifier: Modifier,
    /// Width of the resize band along each window edge, in pixels.
    pub edge_size: i32,
    /// Smallest width or height a manual resize may produce.
    pub min_size: i32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            strategy: DragStrategy::Native,
            modifier: Modifier::Ctrl,
            edge_size: DEFAULT_EDGE_SIZE,
            min_size: DEFAULT_MIN_SIZE,
        }
    }
}

/// Registry housekeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Seconds between sweeps that drop state for destroyed windows.
    pub cleanup_secs: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { cleanup_secs: 30 }
    }
}

impl Config {
    /// Clamps values to ranges the engine can work with.
    pub fn validate(&mut self) {
        self.opacity.step = self.opacity.step.clamp(1, 50);

        let ghost = &mut self.ghost;
        ghost.interval_ms = ghost.interval_ms.clamp(16, 1000);
        if !ghost.near.is_finite() || ghost.near < 0.0 {
            ghost.near = 0.0;
        }
        if !ghost.far.is_finite() || ghost.far <= ghost.near {
            ghost.far = ghost.near + 1.0;
        }

        self.drag.edge_size = self.drag.edge_size.clamp(1, 64);
        self.drag.min_size = self.drag.min_size.clamp(1, 1000);
        self.registry.cleanup_secs = self.registry.cleanup_secs.clamp(1, 3600);

        self.exclude_classes.retain(|c| !c.trim().is_empty());
    }
}

/// Wrapper for deserializing the keybindings file.
///
/// The file contains a top-level `[[keybinding]]` array of tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct KeybindingsFile {
    #[serde(default = "keybinding::defaults")]
    keybinding: Vec<Keybinding>,
}
