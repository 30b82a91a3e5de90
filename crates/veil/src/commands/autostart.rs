/// Manages starting Veil on logon.
///
/// Delegates to [`veil_windows::autostart`] for registry operations.
pub fn enable() {
    match veil_windows::autostart::enable() {
        Ok(()) => println!("Autostart enabled."),
        Err(e) => super::fail(e),
    }
}

pub fn disable() {
    match veil_windows::autostart::disable() {
        Ok(()) => println!("Autostart disabled."),
        Err(e) => super::fail(e),
    }
}

pub fn status() {
    if veil_windows::autostart::is_enabled() {
        println!("Autostart is currently enabled.");
    } else {
        println!("Autostart is currently disabled.");
    }
}
