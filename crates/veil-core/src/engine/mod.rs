//! The window transformation engine.
//!
//! Owns the registry and the single drag session, and turns actions and
//! pointer samples into calls on a [`WindowApi`]. The engine is not
//! thread-safe; the platform layer keeps it on its event thread.

use crate::config::{Config, DragConfig};
use crate::drag::{self, CursorShape, DragSession, DragStrategy};
use crate::exclusion::ExclusionPolicy;
use crate::ghost::{self, GhostConfig};
use crate::state::percent_to_alpha;
use crate::{Action, Point, PointerEvent, Registry, WindowApi, WindowHandle, applier};

/// What the input layer should do with a pointer sample.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerOutcome {
    /// Let the sample reach other applications.
    Pass,
    /// Swallow the sample.
    Consume,
    /// Swallow the sample and show `CursorShape`.
    Cursor(CursorShape),
    /// Swallow the sample and hand the session to the OS move/size loop.
    /// The caller must call [`Engine::end_drag`] once that loop returns.
    Delegate(DragSession),
}

pub struct Engine<A: WindowApi> {
    api: A,
    registry: Registry,
    exclusion: ExclusionPolicy,
    opacity_step: u8,
    ghost: GhostConfig,
    drag_config: DragConfig,
    drag: Option<DragSession>,
}

impl<A: WindowApi> Engine<A> {
    pub fn new(api: A, config: &Config, exclusion: ExclusionPolicy) -> Self {
        Self {
            api,
            registry: Registry::new(),
            exclusion,
            opacity_step: config.opacity.step,
            ghost: config.ghost.clone(),
            drag_config: config.drag.clone(),
            drag: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn drag_config(&self) -> &DragConfig {
        &self.drag_config
    }

    /// Whether `handle` is a live window Veil is allowed to modify.
    pub fn is_eligible(&self, handle: WindowHandle) -> bool {
        self.api.is_window(handle) && !self.exclusion.is_excluded(&self.api, handle)
    }

    /// Number of live windows that currently carry a modification.
    pub fn active_count(&self) -> usize {
        self.registry.active_count(&self.api)
    }

    /// Runs `action` against `target`. `ResetAll` ignores the target.
    pub fn handle_action(&mut self, action: Action, target: WindowHandle) {
        crate::log_info!("action {action} target={target}");
        let step = i32::from(self.opacity_step);
        match action {
            Action::OpacityUp => self.adjust_opacity(target, step),
            Action::OpacityDown => self.adjust_opacity(target, -step),
            Action::ToggleBorderless => self.toggle_borderless(target),
            Action::ToggleGhostMode => self.toggle_ghost_mode(target),
            Action::ResetAll => self.reset_all(),
        }
    }

    /// Changes the window's opacity by `delta` percentage points.
    ///
    /// The result is clamped to the supported range and applied at once.
    /// For a ghost window this becomes the new fade ceiling.
    pub fn adjust_opacity(&mut self, target: WindowHandle, delta: i32) {
        if !self.is_eligible(target) {
            return;
        }
        let state = self.registry.get_or_create(&self.api, target);
        let percent = state.adjust_opacity(delta);
        applier::apply_opacity(&self.api, target, percent);
        // The ghost scheduler compares against the last written alpha.
        state.current_ghost_alpha = percent_to_alpha(percent);
        crate::log_debug!("opacity {target} -> {percent}%");
    }

    /// Strips the frame from `target`, or restores it if already stripped.
    pub fn toggle_borderless(&mut self, target: WindowHandle) {
        if !self.is_eligible(target) {
            return;
        }
        let state = self.registry.get_or_create(&self.api, target);
        if state.is_borderless {
            applier::restore_style(&self.api, target, state);
        } else {
            applier::apply_borderless(&self.api, target, state);
        }
        state.is_borderless = !state.is_borderless;
        crate::log_debug!("borderless {target} -> {}", state.is_borderless);
    }

    /// Turns proximity fading on or off for `target`.
    ///
    /// Turning it off puts the window back at its configured opacity.
    pub fn toggle_ghost_mode(&mut self, target: WindowHandle) {
        if !self.is_eligible(target) {
            return;
        }
        let state = self.registry.get_or_create(&self.api, target);
        state.is_ghost_mode = !state.is_ghost_mode;
        if !state.is_ghost_mode {
            applier::apply_opacity(&self.api, target, state.opacity_percent);
        }
        state.current_ghost_alpha = percent_to_alpha(state.opacity_percent);
        crate::log_debug!("ghost {target} -> {}", state.is_ghost_mode);
    }

    /// Restores every modified window and forgets all state.
    pub fn reset_all(&mut self) {
        self.registry.reset_all(&self.api);
    }

    /// Drops state for windows that no longer exist.
    pub fn cleanup(&mut self) -> usize {
        if self
            .drag
            .as_ref()
            .is_some_and(|s| !self.api.is_window(s.target))
        {
            self.drag = None;
        }
        self.registry.cleanup(&self.api)
    }

    /// One ghost scheduler pass. Skipped entirely while a drag is live.
    pub fn ghost_tick(&mut self, pointer: Point, modifier_held: bool) -> usize {
        if self.drag.is_some() {
            return 0;
        }
        ghost::tick(
            &self.ghost,
            &self.api,
            &mut self.registry,
            pointer,
            modifier_held,
        )
    }

    /// Feeds one pointer sample through the drag state machine.
    ///
    /// `hit_test` resolves the top-level window under a point; it is only
    /// called for a pointer-down with the modifier held.
    pub fn on_pointer(
        &mut self,
        event: PointerEvent,
        modifier_held: bool,
        hit_test: impl FnOnce(Point) -> WindowHandle,
    ) -> PointerOutcome {
        let manual = self.drag_config.strategy == DragStrategy::Manual;
        match event {
            PointerEvent::Down(p) => {
                if !modifier_held || self.drag.is_some() {
                    return PointerOutcome::Pass;
                }
                let Some(session) = self.begin_drag(p, hit_test(p)) else {
                    return PointerOutcome::Pass;
                };
                if manual {
                    PointerOutcome::Cursor(session.mode.cursor())
                } else {
                    PointerOutcome::Delegate(session.clone())
                }
            }
            PointerEvent::Move(p) if manual => {
                let Some(session) = &self.drag else {
                    return PointerOutcome::Pass;
                };
                let target = session.target;
                if !self.api.is_window(target) {
                    self.end_drag();
                    return PointerOutcome::Cursor(CursorShape::Arrow);
                }
                let rect = session.target_rect(p, self.drag_config.min_size);
                if let Err(e) = self.api.set_rect(target, &rect) {
                    crate::log_debug!("drag {target}: set_rect failed: {e}");
                }
                PointerOutcome::Consume
            }
            PointerEvent::Up(_) if manual && self.drag.is_some() => {
                self.end_drag();
                PointerOutcome::Cursor(CursorShape::Arrow)
            }
            _ => PointerOutcome::Pass,
        }
    }

    /// Starts a drag session on `target` if the gesture qualifies.
    ///
    /// The caller has already checked the modifier. The window must be
    /// eligible, not maximized, in ghost mode, and contain `p`.
    pub fn begin_drag(&mut self, p: Point, target: WindowHandle) -> Option<&DragSession> {
        if self.drag.is_some() || !self.is_eligible(target) || self.api.is_maximized(target) {
            return None;
        }
        if !self.registry.get(target).is_some_and(|s| s.is_ghost_mode) {
            return None;
        }
        let rect = self.api.rect(target).ok()?;
        if !rect.contains(p) {
            return None;
        }
        let mode = drag::classify(p, &rect, self.drag_config.edge_size);
        crate::log_debug!("drag start {target}: {mode:?} at ({}, {})", p.x, p.y);
        self.drag = Some(DragSession::new(target, mode, p, rect));
        self.drag.as_ref()
    }

    /// Ends the live drag session, if any, and returns it.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        let session = self.drag.take();
        if let Some(s) = &session {
            crate::log_debug!("drag end {}", s.target);
        }
        session
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }
}

#[cfg(test)]
mod tests;
