use crate::{WindowApi, WindowHandle};

/// Window classes of shell surfaces that are never touched.
pub const EXCLUDED_CLASSES: &[&str] = &[
    "Shell_TrayWnd",              // taskbar
    "Shell_SecondaryTrayWnd",     // taskbar on secondary monitors
    "Windows.UI.Core.CoreWindow", // start menu, search, action center
    "Progman",                    // desktop
    "WorkerW",                    // desktop background
];

/// Decides which windows are never eligible targets.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    classes: Vec<String>,
    handles: Vec<WindowHandle>,
}

impl ExclusionPolicy {
    /// Builds the policy from the built-in shell classes plus any
    /// user-configured extras.
    pub fn new(extra_classes: &[String]) -> Self {
        let classes = EXCLUDED_CLASSES
            .iter()
            .map(|c| (*c).to_string())
            .chain(extra_classes.iter().cloned())
            .collect();
        Self {
            classes,
            handles: Vec::new(),
        }
    }

    /// Excludes one specific window, such as the shell desktop window or
    /// Veil's own host window.
    pub fn exclude_handle(&mut self, handle: WindowHandle) {
        if !handle.is_null() && !self.handles.contains(&handle) {
            self.handles.push(handle);
        }
    }

    /// Returns whether `handle` must be left alone.
    pub fn is_excluded(&self, api: &impl WindowApi, handle: WindowHandle) -> bool {
        if handle.is_null() || self.handles.contains(&handle) {
            return true;
        }
        match api.class_name(handle) {
            Ok(class) => self.classes.iter().any(|c| c.eq_ignore_ascii_case(&class)),
            Err(_) => false,
        }
    }
}
