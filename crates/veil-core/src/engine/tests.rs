use super::*;
use crate::drag::DragMode;
use crate::state::{MAX_OPACITY, MIN_OPACITY};
use crate::testing::{FakeApi, FakeWindow, OVERLAPPED_STYLE};
use crate::window::{EX_STYLE_LAYERED, STYLE_CAPTION, STYLE_THICKFRAME};
use crate::{Rect, WindowHandle};

fn engine_with(api: FakeApi, config: &Config) -> Engine<FakeApi> {
    Engine::new(api, config, ExclusionPolicy::new(&config.exclude_classes))
}

fn engine() -> Engine<FakeApi> {
    engine_with(FakeApi::new(), &Config::default())
}

fn manual_engine() -> Engine<FakeApi> {
    let mut config = Config::default();
    config.drag.strategy = DragStrategy::Manual;
    engine_with(FakeApi::new(), &config)
}

fn no_hit(_: Point) -> WindowHandle {
    WindowHandle::NULL
}

// -- Action router --

#[test]
fn opacity_down_applies_one_step() {
    // Arrange
    let mut engine = engine();
    let h = engine.api().add_app(1, Rect::new(0, 0, 800, 600));

    // Act
    engine.handle_action(Action::OpacityDown, h);

    // Assert
    assert_eq!(engine.registry().get(h).unwrap().opacity_percent, 95);
    assert_eq!(engine.api().window(h).alpha, Some(242));
    assert_ne!(engine.api().window(h).style.ex_style & EX_STYLE_LAYERED, 0);
}

#[test]
fn opacity_is_clamped_at_both_ends() {
    // Arrange
    let mut engine = engine();
    let h = engine.api().add_app(1, Rect::new(0, 0, 800, 600));

    // Act
    for _ in 0..50 {
        engine.handle_action(Action::OpacityDown, h);
    }
    let low = engine.registry().get(h).unwrap().opacity_percent;
    for _ in 0..50 {
        engine.handle_action(Action::OpacityUp, h);
    }
    let high = engine.registry().get(h).unwrap().opacity_percent;

    // Assert
    assert_eq!(low, MIN_OPACITY);
    assert_eq!(high, MAX_OPACITY);
}

#[test]
fn configured_step_is_used() {
    // Arrange
    let mut config = Config::default();
    config.opacity.step = 20;
    let mut engine = engine_with(FakeApi::new(), &config);
    let h = engine.api().add_app(1, Rect::new(0, 0, 800, 600));

    // Act
    engine.handle_action(Action::OpacityDown, h);

    // Assert
    assert_eq!(engine.registry().get(h).unwrap().opacity_percent, 80);
}

#[test]
fn double_toggle_borderless_restores_style_and_rect() {
    // Arrange
    let mut engine = engine();
    let rect = Rect::new(40, 30, 800, 600);
    let h = engine.api().add_app(1, rect);

    // Act
    engine.toggle_borderless(h);
    let stripped = engine.api().window(h).style.style;
    engine.toggle_borderless(h);

    // Assert
    assert_eq!(stripped & (STYLE_CAPTION | STYLE_THICKFRAME), 0);
    let window = engine.api().window(h);
    assert_eq!(window.style.style, OVERLAPPED_STYLE);
    assert_eq!(window.rect, rect);
    assert!(!engine.registry().get(h).unwrap().is_borderless);
}

#[test]
fn borderless_on_maximized_window_covers_monitor() {
    // Arrange
    let mut engine = engine();
    let mut window = FakeWindow::app(Rect::new(0, 0, 1920, 1040));
    window.maximized = true;
    let h = engine.api().add(1, window);

    // Act
    engine.toggle_borderless(h);

    // Assert
    let window = engine.api().window(h);
    assert_eq!(window.rect, Rect::new(0, 0, 1920, 1080));
    assert!(window.on_top);
}

#[test]
fn turning_ghost_off_reapplies_configured_opacity() {
    // Arrange
    let mut engine = engine();
    let h = engine.api().add_app(1, Rect::new(100, 100, 400, 300));
    engine.adjust_opacity(h, -40);
    engine.toggle_ghost_mode(h);
    engine.ghost_tick(Point::new(200, 200), false);
    assert_eq!(engine.api().window(h).alpha, Some(13));

    // Act
    engine.toggle_ghost_mode(h);

    // Assert
    assert_eq!(engine.api().window(h).alpha, Some(153));
    assert!(!engine.registry().get(h).unwrap().is_ghost_mode);
}

#[test]
fn opacity_change_on_ghost_window_is_picked_up_by_next_tick() {
    // Arrange
    let mut engine = engine();
    let h = engine.api().add_app(1, Rect::new(100, 100, 400, 300));
    engine.toggle_ghost_mode(h);
    engine.ghost_tick(Point::new(200, 200), false);

    // Act
    engine.adjust_opacity(h, -10);
    let written = engine.ghost_tick(Point::new(200, 200), false);

    // Assert
    assert_eq!(written, 1);
    assert_eq!(engine.api().window(h).alpha, Some(13));
}

#[test]
fn excluded_and_dead_windows_are_ignored() {
    // Arrange
    let mut engine = engine();
    let mut taskbar = FakeWindow::app(Rect::new(0, 1040, 1920, 40));
    taskbar.class = "Shell_TrayWnd".into();
    let taskbar = engine.api().add(1, taskbar);
    let dead = engine.api().add_app(2, Rect::new(0, 0, 100, 100));
    engine.api().destroy(dead);

    // Act
    engine.handle_action(Action::OpacityDown, taskbar);
    engine.handle_action(Action::ToggleBorderless, dead);
    engine.handle_action(Action::ToggleGhostMode, WindowHandle::NULL);

    // Assert
    assert!(engine.registry().is_empty());
    assert_eq!(engine.api().window(taskbar).alpha, None);
}

#[test]
fn configured_exclusions_are_honoured() {
    // Arrange
    let mut config = Config::default();
    config.exclude_classes = vec!["obs".into()];
    let mut engine = engine_with(FakeApi::new(), &config);
    let mut window = FakeWindow::app(Rect::new(0, 0, 100, 100));
    window.class = "OBS".into();
    let h = engine.api().add(1, window);

    // Act
    engine.handle_action(Action::OpacityDown, h);

    // Assert
    assert!(engine.registry().is_empty());
}

#[test]
fn reset_all_restores_every_window_and_empties_registry() {
    // Arrange
    let mut engine = engine();
    let handles: Vec<_> = (1..=3)
        .map(|i| engine.api().add_app(i, Rect::new(i as i32 * 10, 0, 300, 200)))
        .collect();
    engine.adjust_opacity(handles[0], -50);
    engine.toggle_borderless(handles[1]);
    engine.toggle_ghost_mode(handles[2]);
    engine.ghost_tick(Point::new(40, 50), false);
    assert_eq!(engine.active_count(), 3);

    // Act
    engine.handle_action(Action::ResetAll, WindowHandle::NULL);

    // Assert
    assert!(engine.registry().is_empty());
    assert_eq!(engine.active_count(), 0);
    for (i, h) in handles.iter().enumerate() {
        let window = engine.api().window(*h);
        assert_eq!(window.alpha, Some(255));
        assert_eq!(window.style.style, OVERLAPPED_STYLE);
        assert_eq!(window.style.ex_style, 0);
        assert_eq!(window.rect, Rect::new((i as i32 + 1) * 10, 0, 300, 200));
    }
}

#[test]
fn failed_native_writes_still_update_state() {
    // Arrange
    let mut engine = engine_with(FakeApi::failing_writes(), &Config::default());
    let h = engine.api().add_app(1, Rect::new(0, 0, 800, 600));

    // Act
    engine.adjust_opacity(h, -30);
    engine.toggle_borderless(h);

    // Assert
    let state = engine.registry().get(h).unwrap();
    assert_eq!(state.opacity_percent, 70);
    assert!(state.is_borderless);
    assert_eq!(engine.api().window(h).alpha, None);
}

#[test]
fn cleanup_forgets_destroyed_windows() {
    // Arrange
    let mut engine = engine();
    let h = engine.api().add_app(1, Rect::new(0, 0, 100, 100));
    engine.toggle_ghost_mode(h);
    engine.api().destroy(h);

    // Act
    let removed = engine.cleanup();

    // Assert
    assert_eq!(removed, 1);
    assert!(engine.registry().is_empty());
}

// -- Drag qualification --

fn ghost_target(engine: &mut Engine<FakeApi>) -> WindowHandle {
    let h = engine.api().add_app(1, Rect::new(100, 100, 300, 200));
    engine.toggle_ghost_mode(h);
    h
}

#[test]
fn native_drag_delegates_session() {
    // Arrange
    let mut engine = engine();
    let h = ghost_target(&mut engine);

    // Act
    let outcome = engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);

    // Assert
    let PointerOutcome::Delegate(session) = outcome.clone() else {
        panic!("expected delegation, got {outcome:?}");
    };
    assert_eq!(session.target, h);
    assert_eq!(session.mode, DragMode::Move);
    assert!(engine.drag_session().is_some());
    assert_eq!(engine.end_drag(), Some(session));
    assert!(engine.drag_session().is_none());
}

#[test]
fn drag_requires_modifier() {
    // Arrange
    let mut engine = engine();
    let h = ghost_target(&mut engine);

    // Act
    let outcome = engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), false, |_| h);

    // Assert
    assert_eq!(outcome, PointerOutcome::Pass);
    assert!(engine.drag_session().is_none());
}

#[test]
fn drag_requires_ghost_mode() {
    // Arrange
    let mut engine = engine();
    let h = engine.api().add_app(1, Rect::new(100, 100, 300, 200));

    // Act
    let outcome = engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);

    // Assert
    assert_eq!(outcome, PointerOutcome::Pass);
}

#[test]
fn drag_rejects_maximized_window() {
    // Arrange
    let mut engine = engine();
    let h = ghost_target(&mut engine);
    engine.api().update(h, |w| w.maximized = true);

    // Act
    let outcome = engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);

    // Assert
    assert_eq!(outcome, PointerOutcome::Pass);
}

#[test]
fn drag_rejects_empty_hit() {
    let mut engine = engine();
    ghost_target(&mut engine);

    let outcome = engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, no_hit);

    assert_eq!(outcome, PointerOutcome::Pass);
}

#[test]
fn second_pointer_down_is_ignored_while_dragging() {
    // Arrange
    let mut engine = engine();
    let h = ghost_target(&mut engine);
    engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);

    // Act
    let outcome = engine.on_pointer(PointerEvent::Down(Point::new(105, 105)), true, |_| h);

    // Assert
    assert_eq!(outcome, PointerOutcome::Pass);
    assert_eq!(engine.drag_session().unwrap().mode, DragMode::Move);
}

#[test]
fn native_strategy_passes_move_and_up_through() {
    // Arrange
    let mut engine = engine();
    let h = ghost_target(&mut engine);
    engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);

    // Act / Assert
    let moved = engine.on_pointer(PointerEvent::Move(Point::new(260, 210)), true, no_hit);
    assert_eq!(moved, PointerOutcome::Pass);
    let up = engine.on_pointer(PointerEvent::Up(Point::new(260, 210)), true, no_hit);
    assert_eq!(up, PointerOutcome::Pass);
}

#[test]
fn ghost_tick_pauses_during_drag() {
    // Arrange
    let mut engine = engine();
    let h = ghost_target(&mut engine);
    engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);

    // Act
    let written = engine.ghost_tick(Point::new(250, 200), false);

    // Assert
    assert_eq!(written, 0);
    assert_eq!(engine.api().alpha_writes(), 0);
}

// -- Manual drag --

#[test]
fn manual_move_follows_pointer() {
    // Arrange
    let mut engine = manual_engine();
    let h = ghost_target(&mut engine);

    // Act
    let down = engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);
    let moved = engine.on_pointer(PointerEvent::Move(Point::new(300, 260)), true, no_hit);
    let up = engine.on_pointer(PointerEvent::Up(Point::new(300, 260)), true, no_hit);

    // Assert
    assert_eq!(down, PointerOutcome::Cursor(CursorShape::SizeAll));
    assert_eq!(moved, PointerOutcome::Consume);
    assert_eq!(up, PointerOutcome::Cursor(CursorShape::Arrow));
    assert_eq!(engine.api().window(h).rect, Rect::new(150, 160, 300, 200));
    assert!(engine.drag_session().is_none());
}

#[test]
fn manual_corner_resize_keeps_aspect_ratio() {
    // Arrange
    let mut engine = manual_engine();
    let h = engine.api().add_app(1, Rect::new(0, 0, 200, 100));
    engine.toggle_ghost_mode(h);

    // Act
    let down = engine.on_pointer(PointerEvent::Down(Point::new(195, 95)), true, |_| h);
    engine.on_pointer(PointerEvent::Move(Point::new(235, 100)), true, no_hit);

    // Assert
    assert_eq!(down, PointerOutcome::Cursor(CursorShape::SizeNWSE));
    assert_eq!(engine.api().window(h).rect, Rect::new(0, 0, 240, 120));
}

#[test]
fn manual_drag_ends_when_target_disappears() {
    // Arrange
    let mut engine = manual_engine();
    let h = ghost_target(&mut engine);
    engine.on_pointer(PointerEvent::Down(Point::new(250, 200)), true, |_| h);
    engine.api().destroy(h);

    // Act
    let outcome = engine.on_pointer(PointerEvent::Move(Point::new(300, 260)), true, no_hit);

    // Assert
    assert_eq!(outcome, PointerOutcome::Cursor(CursorShape::Arrow));
    assert!(engine.drag_session().is_none());
}

#[test]
fn pointer_up_without_session_passes() {
    let mut engine = manual_engine();
    let outcome = engine.on_pointer(PointerEvent::Up(Point::new(0, 0)), false, no_hit);
    assert_eq!(outcome, PointerOutcome::Pass);
}
