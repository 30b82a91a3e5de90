use std::path::Path;

use veil_core::config;

/// Creates the default configuration files at `~/.config/veil/`.
///
/// Generates `config.toml` and `keybindings.toml` with comments
/// explaining every option. Existing files are not overwritten.
pub fn execute() {
    let Some(dir) = config::config_dir() else {
        super::fail("could not determine home directory.");
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        super::fail(format!("could not create {}: {e}", dir.display()));
    }

    write_if_missing(
        &dir.join("config.toml"),
        &config::template::generate_config(),
    );
    write_if_missing(
        &dir.join("keybindings.toml"),
        &config::template::generate_keybindings(),
    );

    println!("\nEdit these files to tune opacity, ghost mode, dragging and hotkeys.");
    println!("Restart the daemon ('veil stop', then 'veil start') to apply changes.");
}

/// Writes content to a file only if it doesn't already exist.
fn write_if_missing(path: &Path, content: &str) {
    if path.exists() {
        println!("Already exists: {}", path.display());
        return;
    }

    match std::fs::write(path, content) {
        Ok(()) => println!("Created {}", path.display()),
        Err(e) => eprintln!("Error: could not write {}: {e}", path.display()),
    }
}
