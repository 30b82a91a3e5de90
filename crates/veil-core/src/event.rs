use crate::Point;

/// A platform-agnostic pointer sample.
///
/// Platform crates translate raw input (e.g. a low-level mouse hook)
/// into these variants. Only the primary button is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The primary button was pressed.
    Down(Point),
    /// The pointer moved.
    Move(Point),
    /// The primary button was released.
    Up(Point),
}

