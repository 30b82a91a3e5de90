use serde::{Deserialize, Serialize};

use crate::Action;

/// A user-configured keybinding that maps a key combination to an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keybinding {
    /// The action to trigger.
    pub action: Action,
    /// Key name (e.g. "B", "Up", "F1").
    pub key: String,
    /// Modifier keys (e.g. ["ctrl", "alt"]).
    pub modifiers: Vec<Modifier>,
}

impl std::fmt::Display for Keybinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for m in &self.modifiers {
            write!(f, "{m}+")?;
        }
        f.write_str(&self.key)
    }
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Win,
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Alt => "Alt",
            Self::Shift => "Shift",
            Self::Ctrl => "Ctrl",
            Self::Win => "Win",
        })
    }
}

/// Returns the default keybindings.
///
/// Opacity: Ctrl + Alt + Up/Down
/// Borderless: Ctrl + Alt + B
/// Ghost mode: Ctrl + Alt + G
pub fn defaults() -> Vec<Keybinding> {
    use Modifier::{Alt, Ctrl};

    vec![
        bind(Action::OpacityUp, "Up", &[Ctrl, Alt]),
        bind(Action::OpacityDown, "Down", &[Ctrl, Alt]),
        bind(Action::ToggleBorderless, "B", &[Ctrl, Alt]),
        bind(Action::ToggleGhostMode, "G", &[Ctrl, Alt]),
    ]
}

fn bind(action: Action, key: &str, modifiers: &[Modifier]) -> Keybinding {
    Keybinding {
        action,
        key: key.into(),
        modifiers: modifiers.to_vec(),
    }
}
