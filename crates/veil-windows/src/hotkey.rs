use veil_core::Action;
use veil_core::config::{Keybinding, Modifier};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT, MOD_WIN, RegisterHotKey,
    UnregisterHotKey,
};

use crate::keys;

/// A registered global hotkey.
struct Hotkey {
    id: i32,
    action: Action,
}

/// Manages global hotkey registrations.
///
/// Hotkeys are registered on the current thread's message queue, so
/// `WM_HOTKEY` arrives through the message pump on the same thread.
#[derive(Default)]
pub struct HotkeyManager {
    hotkeys: Vec<Hotkey>,
}

impl HotkeyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers keybindings from configuration.
    ///
    /// A binding that fails (unknown key name, or the combination is
    /// already taken by another program) is skipped; the rest still
    /// register. Returns one description per failed binding.
    pub fn register_from_config(&mut self, bindings: &[Keybinding]) -> Vec<String> {
        let mut failures = Vec::new();

        for (i, binding) in bindings.iter().enumerate() {
            let id = (i + 1) as i32;

            let Some(vk) = keys::vk_from_name(&binding.key) else {
                failures.push(format!("{binding} (unknown key {:?})", binding.key));
                continue;
            };

            let mut modifiers = MOD_NOREPEAT;
            for m in &binding.modifiers {
                modifiers |= modifier_to_flag(*m);
            }

            if let Err(e) = self.register(id, modifiers, vk, binding.action) {
                failures.push(format!("{binding} ({e})"));
            }
        }

        failures
    }

    /// Looks up the action for a `WM_HOTKEY` id.
    pub fn action_for(&self, hotkey_id: i32) -> Option<Action> {
        self.hotkeys
            .iter()
            .find(|h| h.id == hotkey_id)
            .map(|h| h.action)
    }

    pub fn len(&self) -> usize {
        self.hotkeys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotkeys.is_empty()
    }

    fn register(
        &mut self,
        id: i32,
        modifiers: HOT_KEY_MODIFIERS,
        vk: u32,
        action: Action,
    ) -> windows::core::Result<()> {
        // SAFETY: RegisterHotKey registers a system-wide hotkey on the
        // current thread's message queue. IDs are unique per binding.
        unsafe { RegisterHotKey(None, id, modifiers, vk)? };
        self.hotkeys.push(Hotkey { id, action });
        Ok(())
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for hotkey in &self.hotkeys {
            // SAFETY: UnregisterHotKey removes our own registration.
            unsafe {
                let _ = UnregisterHotKey(None, hotkey.id);
            }
        }
    }
}

/// Converts a platform-agnostic modifier to a Win32 hotkey flag.
fn modifier_to_flag(modifier: Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Win => MOD_WIN,
    }
}

/// Formats hotkey registration failures as a single report.
pub fn failure_report(failures: &[String]) -> Option<String> {
    if failures.is_empty() {
        return None;
    }
    Some(format!(
        "{} hotkey(s) could not be registered: {}",
        failures.len(),
        failures.join(", ")
    ))
}
