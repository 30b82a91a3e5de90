//! Start Veil on logon through the HKCU Run registry key.
//!
//! The `Veil` value under
//! `HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Run`
//! runs `veil start`. HKCU is per-user, so no elevation is needed.

use windows::Win32::Foundation::ERROR_FILE_NOT_FOUND;
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_SAM_FLAGS, REG_SZ, RegCloseKey,
    RegDeleteValueW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW,
};
use windows::core::PCWSTR;

const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";
const VALUE_NAME: &str = "Veil";

/// The opened Run key, closed on drop.
struct RunKey(HKEY);

impl RunKey {
    fn open(access: REG_SAM_FLAGS) -> Result<Self, String> {
        let path = wide(RUN_KEY);
        let mut key = HKEY::default();
        // SAFETY: the path is NUL-terminated and outlives the call.
        let status = unsafe {
            RegOpenKeyExW(
                HKEY_CURRENT_USER,
                PCWSTR(path.as_ptr()),
                None,
                access,
                &mut key,
            )
        };
        if status.is_err() {
            return Err(format!("could not open registry key: {status:?}"));
        }
        Ok(Self(key))
    }
}

impl Drop for RunKey {
    fn drop(&mut self) {
        // SAFETY: the key was opened by RunKey::open.
        let _ = unsafe { RegCloseKey(self.0) };
    }
}

/// Registers `"<exe>" start` to run on logon.
pub fn enable() -> Result<(), String> {
    let command = wide(&start_command()?);
    let name = wide(VALUE_NAME);
    let key = RunKey::open(KEY_SET_VALUE)?;
    // SAFETY: the value is a contiguous u16 buffer viewed as bytes,
    // including its terminating NUL as REG_SZ requires.
    let bytes: &[u8] =
        unsafe { std::slice::from_raw_parts(command.as_ptr().cast(), command.len() * 2) };
    // SAFETY: both buffers outlive the call.
    let status =
        unsafe { RegSetValueExW(key.0, PCWSTR(name.as_ptr()), None, REG_SZ, Some(bytes)) };
    if status.is_err() {
        return Err(format!("could not write registry value: {status:?}"));
    }
    Ok(())
}

/// Removes the autostart entry. A missing entry is not an error.
pub fn disable() -> Result<(), String> {
    let name = wide(VALUE_NAME);
    let key = RunKey::open(KEY_SET_VALUE)?;
    // SAFETY: the name is NUL-terminated and outlives the call.
    let status = unsafe { RegDeleteValueW(key.0, PCWSTR(name.as_ptr())) };
    if status.is_err() && status != ERROR_FILE_NOT_FOUND {
        return Err(format!("could not delete registry value: {status:?}"));
    }
    Ok(())
}

/// Whether the autostart entry exists.
pub fn is_enabled() -> bool {
    let Ok(key) = RunKey::open(KEY_QUERY_VALUE) else {
        return false;
    };
    let name = wide(VALUE_NAME);
    // SAFETY: a query without a data buffer only checks for existence.
    unsafe { RegQueryValueExW(key.0, PCWSTR(name.as_ptr()), None, None, None, None) }.is_ok()
}

fn start_command() -> Result<String, String> {
    let exe = std::env::current_exe().map_err(|e| format!("could not resolve exe path: {e}"))?;
    Ok(format!("\"{}\" start", exe.display()))
}

/// NUL-terminated UTF-16.
fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}
