/// Generates the default `config.toml` contents with explanatory comments.
///
/// Written by `veil init` so users start from a file that documents
/// every setting.
pub fn generate_config() -> String {
    r##"# Veil configuration
# Location: ~/.config/veil/config.toml

# Window classes Veil should never touch, in addition to the taskbar,
# desktop and shell popups which are always excluded.
# Matching is case-insensitive.
exclude_classes = []

[opacity]
# Percentage points per opacity-up / opacity-down (1 to 50).
step = 5

[ghost]
# How often ghost windows re-evaluate pointer distance, in milliseconds.
interval_ms = 100
# Closer than this many pixels, a ghost window is nearly invisible.
near = 50.0
# At this distance or farther, it is back at its configured opacity.
far = 150.0
# Alpha (0-255) used while the pointer is near. Keep it above zero so
# the window can still be found.
floor_alpha = 13

[drag]
# "native": hand the gesture to Windows' own move/size loop.
# "manual": Veil moves and resizes the window itself.
strategy = "native"
# Key held while pressing the left button to drag a ghost window:
# "ctrl", "alt", "shift", or "win".
modifier = "ctrl"
# Width in pixels of the resize band along each window edge.
edge_size = 16
# Smallest width or height a manual resize may produce.
min_size = 50

[registry]
# Seconds between sweeps that forget windows which were closed.
cleanup_secs = 30

[logging]
# Enable file logging to ~/.config/veil/logs/veil.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
