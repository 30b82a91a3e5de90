pub mod action;
pub mod applier;
pub mod config;
pub mod drag;
pub mod engine;
pub mod event;
pub mod exclusion;
pub mod ghost;
pub mod ipc;
pub mod log;
pub mod pid;
pub mod rect;
pub mod registry;
pub mod state;
pub mod window;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use config::Config;
pub use drag::{CursorShape, DragMode, DragSession, DragStrategy};
pub use engine::{Engine, PointerOutcome};
pub use event::PointerEvent;
pub use exclusion::ExclusionPolicy;
pub use ipc::{Command, PIPE_NAME, Response};
pub use rect::{Point, Rect};
pub use registry::Registry;
pub use state::WindowState;
pub use window::{WindowApi, WindowHandle, WindowResult, WindowStyle};
