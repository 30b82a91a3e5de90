/// HKCU Run key autostart.
pub mod autostart;

/// Ctrl+C handling for a console daemon.
pub mod ctrl_c;

/// Daemon main loop.
pub mod daemon;

/// Per-monitor DPI awareness.
pub mod dpi;

/// OS-driven interactive move and resize.
pub mod drag;

/// The event thread: engine, mouse hook, hotkeys and timers.
pub mod event_loop;

/// Global hotkey registration.
pub mod hotkey;

/// Pointer translation, modifier state and cursor shapes.
pub mod input;

/// IPC via Named Pipes.
pub mod ipc;

/// Key name to virtual-key code mapping.
pub mod keys;

/// Monitor bounds.
pub mod monitor;

/// Process utilities (alive check, kill).
pub mod process;

/// The user32-backed `WindowApi`.
pub mod window;

pub use window::Win32Api;
