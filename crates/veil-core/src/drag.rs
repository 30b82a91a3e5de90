//! Classifies modifier-drag gestures and computes manual drag geometry.

use serde::{Deserialize, Serialize};

use crate::{Point, Rect, WindowHandle};

/// Default width in pixels of the band along each edge that starts a resize.
pub const DEFAULT_EDGE_SIZE: i32 = 16;

/// Default smallest width or height a manual resize may produce.
pub const DEFAULT_MIN_SIZE: i32 = 50;

/// What a drag gesture does to its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    None,
    Move,
    ResizeN,
    ResizeS,
    ResizeE,
    ResizeW,
    ResizeNW,
    ResizeNE,
    ResizeSW,
    ResizeSE,
}

/// Cursor shown while a manual drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Arrow,
    SizeAll,
    SizeNS,
    SizeWE,
    SizeNWSE,
    SizeNESW,
}

impl DragMode {
    /// Whether the left edge moves while the right edge stays put.
    fn anchors_right(self) -> bool {
        matches!(self, Self::ResizeW | Self::ResizeNW | Self::ResizeSW)
    }

    /// Whether the top edge moves while the bottom edge stays put.
    fn anchors_bottom(self) -> bool {
        matches!(self, Self::ResizeN | Self::ResizeNW | Self::ResizeNE)
    }

    /// The cursor matching this mode.
    pub fn cursor(self) -> CursorShape {
        match self {
            Self::Move => CursorShape::SizeAll,
            Self::ResizeN | Self::ResizeS => CursorShape::SizeNS,
            Self::ResizeE | Self::ResizeW => CursorShape::SizeWE,
            Self::ResizeNW | Self::ResizeSE => CursorShape::SizeNWSE,
            Self::ResizeNE | Self::ResizeSW => CursorShape::SizeNESW,
            Self::None => CursorShape::Arrow,
        }
    }
}

/// How drag gestures are carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragStrategy {
    /// Hand the gesture to the OS interactive move/size loop.
    #[default]
    Native,
    /// Track pointer samples and position the window ourselves.
    Manual,
}

/// Decides the drag mode from where the pointer sits inside `rect`.
///
/// Corners win over edges; anything away from the edges is a move.
pub fn classify(p: Point, rect: &Rect, edge_size: i32) -> DragMode {
    let near_left = p.x < rect.x + edge_size;
    let near_right = p.x > rect.right() - edge_size;
    let near_top = p.y < rect.y + edge_size;
    let near_bottom = p.y > rect.bottom() - edge_size;

    match (near_left, near_right, near_top, near_bottom) {
        (true, _, true, _) => DragMode::ResizeNW,
        (_, true, true, _) => DragMode::ResizeNE,
        (true, _, _, true) => DragMode::ResizeSW,
        (_, true, _, true) => DragMode::ResizeSE,
        (true, _, _, _) => DragMode::ResizeW,
        (_, true, _, _) => DragMode::ResizeE,
        (_, _, true, _) => DragMode::ResizeN,
        (_, _, _, true) => DragMode::ResizeS,
        _ => DragMode::Move,
    }
}

/// The single live drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub target: WindowHandle,
    pub mode: DragMode,
    /// Pointer position at pointer-down.
    pub anchor: Point,
    /// Window rectangle at pointer-down.
    pub original_rect: Rect,
    /// `width / height` of `original_rect`.
    pub aspect_ratio: f64,
}

impl DragSession {
    pub fn new(target: WindowHandle, mode: DragMode, anchor: Point, original_rect: Rect) -> Self {
        Self {
            target,
            mode,
            anchor,
            original_rect,
            aspect_ratio: original_rect.aspect_ratio(),
        }
    }

    /// Computes where the window should be for the pointer at `p`.
    pub fn target_rect(&self, p: Point, min_size: i32) -> Rect {
        let dx = p.x - self.anchor.x;
        let dy = p.y - self.anchor.y;
        let orig = self.original_rect;

        let mut rect = orig;
        match self.mode {
            DragMode::None => {}
            DragMode::Move => {
                rect.x += dx;
                rect.y += dy;
            }
            DragMode::ResizeE => rect.width += dx,
            DragMode::ResizeW => rect.width -= dx,
            DragMode::ResizeS => rect.height += dy,
            DragMode::ResizeN => rect.height -= dy,
            DragMode::ResizeSE => self.scale(&mut rect, dx, dy),
            DragMode::ResizeSW => self.scale(&mut rect, -dx, dy),
            DragMode::ResizeNE => self.scale(&mut rect, dx, -dy),
            DragMode::ResizeNW => self.scale(&mut rect, -dx, -dy),
        }

        if self.mode != DragMode::Move {
            rect.width = rect.width.max(min_size);
            rect.height = rect.height.max(min_size);
            if self.mode.anchors_right() {
                rect.x = orig.right() - rect.width;
            }
            if self.mode.anchors_bottom() {
                rect.y = orig.bottom() - rect.height;
            }
        }
        rect
    }

    /// Grows `rect` by the dominant delta and derives the other side
    /// from the aspect ratio. `grow_x`/`grow_y` are signed so that a
    /// positive value always means "larger".
    /// The derived side is rounded, so a still pointer leaves the size
    /// unchanged.
    fn scale(&self, rect: &mut Rect, grow_x: i32, grow_y: i32) {
        if grow_x == 0 && grow_y == 0 {
            return;
        }
        if grow_x.abs() > grow_y.abs() {
            rect.width += grow_x;
            rect.height = (f64::from(rect.width) / self.aspect_ratio).round() as i32;
        } else {
            rect.height += grow_y;
            rect.width = (f64::from(rect.height) * self.aspect_ratio).round() as i32;
        }
    }
}
