use crate::Rect;

/// Lowest opacity a window can be set to, in percent.
pub const MIN_OPACITY: u8 = 5;
/// Fully opaque, in percent.
pub const MAX_OPACITY: u8 = 100;

/// Shadow state for one window Veil has touched.
///
/// The `original_*` fields are captured once, when the state is created,
/// and are only refreshed right before the window goes borderless.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    /// User-facing opacity, `MIN_OPACITY..=MAX_OPACITY`.
    pub opacity_percent: u8,
    pub is_borderless: bool,
    pub is_ghost_mode: bool,
    /// Style bits to restore when leaving borderless mode.
    pub original_style: u32,
    /// Extended style bits at first touch.
    pub original_ex_style: u32,
    /// Geometry to restore when leaving borderless mode.
    pub original_rect: Rect,
    /// Last alpha written while in ghost mode.
    pub current_ghost_alpha: u8,
}

impl WindowState {
    /// Creates the state for a window seen for the first time.
    pub fn new(original_style: u32, original_ex_style: u32, original_rect: Rect) -> Self {
        Self {
            opacity_percent: MAX_OPACITY,
            is_borderless: false,
            is_ghost_mode: false,
            original_style,
            original_ex_style,
            original_rect,
            current_ghost_alpha: 255,
        }
    }

    /// Whether any modification is currently applied.
    ///
    /// Only active windows are visited by the ghost scheduler and by
    /// `reset_all`.
    pub fn is_active(&self) -> bool {
        self.opacity_percent < MAX_OPACITY || self.is_borderless || self.is_ghost_mode
    }

    /// Adds `delta` to the opacity, clamped to `MIN_OPACITY..=MAX_OPACITY`.
    ///
    /// Returns the new opacity.
    pub fn adjust_opacity(&mut self, delta: i32) -> u8 {
        let next = (i32::from(self.opacity_percent) + delta)
            .clamp(i32::from(MIN_OPACITY), i32::from(MAX_OPACITY));
        self.opacity_percent = next as u8;
        self.opacity_percent
    }
}

/// Converts an opacity percentage to an 8-bit alpha, rounding to nearest.
pub fn percent_to_alpha(percent: u8) -> u8 {
    let percent = u32::from(percent.min(MAX_OPACITY));
    ((percent * 255 + 50) / 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> WindowState {
        WindowState::new(0, 0, Rect::new(0, 0, 800, 600))
    }

    #[test]
    fn new_state_is_inactive() {
        // Act
        let state = fresh();

        // Assert
        assert_eq!(state.opacity_percent, 100);
        assert_eq!(state.current_ghost_alpha, 255);
        assert!(!state.is_active());
    }

    #[test]
    fn any_modification_makes_state_active() {
        // Arrange
        let mut translucent = fresh();
        translucent.opacity_percent = 95;
        let mut borderless = fresh();
        borderless.is_borderless = true;
        let mut ghost = fresh();
        ghost.is_ghost_mode = true;

        // Assert
        assert!(translucent.is_active());
        assert!(borderless.is_active());
        assert!(ghost.is_active());
    }

    #[test]
    fn opacity_never_exceeds_maximum() {
        // Arrange
        let mut state = fresh();

        // Act
        for _ in 0..10 {
            state.adjust_opacity(5);
        }

        // Assert
        assert_eq!(state.opacity_percent, 100);
    }

    #[test]
    fn opacity_never_drops_below_minimum() {
        // Arrange
        let mut state = fresh();

        // Act
        for _ in 0..40 {
            state.adjust_opacity(-5);
        }

        // Assert
        assert_eq!(state.opacity_percent, 5);
    }

    #[test]
    fn percent_to_alpha_rounds() {
        assert_eq!(percent_to_alpha(100), 255);
        assert_eq!(percent_to_alpha(50), 128);
        assert_eq!(percent_to_alpha(5), 13);
        assert_eq!(percent_to_alpha(0), 0);
    }
}
