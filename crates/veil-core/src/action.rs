use serde::{Deserialize, Serialize};

/// An action that can be triggered by a hotkey or CLI command.
///
/// Actions other than `ResetAll` apply to the foreground window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Make the window more opaque by one step.
    OpacityUp,
    /// Make the window more transparent by one step.
    OpacityDown,
    /// Strip or restore the caption and sizing frame.
    ToggleBorderless,
    /// Enable or disable proximity fading.
    ToggleGhostMode,
    /// Restore every modified window and forget all state.
    ResetAll,
}

impl Action {
    /// Whether this action needs a target window.
    pub fn needs_target(self) -> bool {
        !matches!(self, Self::ResetAll)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::OpacityUp => "opacity-up",
            Self::OpacityDown => "opacity-down",
            Self::ToggleBorderless => "toggle-borderless",
            Self::ToggleGhostMode => "toggle-ghost-mode",
            Self::ResetAll => "reset-all",
        };
        f.write_str(name)
    }
}
