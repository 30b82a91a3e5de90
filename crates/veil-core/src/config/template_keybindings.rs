use std::fmt::Write;

use crate::config::keybinding;

const HEADER: &str = r##"# Veil keybindings
# Location: ~/.config/veil/keybindings.toml
#
# Each [[keybinding]] entry maps a key combination to an action.
# Actions apply to the foreground window, except reset-all.
#
# Available actions:
#   opacity-up, opacity-down, toggle-borderless, toggle-ghost-mode,
#   reset-all
#
# Available modifiers: alt, shift, ctrl, win
#
# Key names: A-Z, 0-9, F1-F24, Enter, Space, Tab, Escape,
#            Left, Right, Up, Down, Minus, Plus, Comma, Period
"##;

/// Generates the default `keybindings.toml` contents with explanatory comments.
///
/// The entries mirror [`keybinding::defaults`].
pub fn generate_keybindings() -> String {
    let mut content = String::from(HEADER);
    for binding in keybinding::defaults() {
        let modifiers = binding
            .modifiers
            .iter()
            .map(|m| format!("\"{}\"", m.to_string().to_ascii_lowercase()))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = write!(
            content,
            "\n[[keybinding]]\naction = \"{}\"\nkey = \"{}\"\nmodifiers = [{modifiers}]\n",
            binding.action, binding.key
        );
    }
    content
}
