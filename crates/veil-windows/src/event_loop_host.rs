use std::cell::{Cell, RefCell};
use std::sync::mpsc::Receiver;

use veil_core::{Config, Engine, PointerEvent, PointerOutcome, Response, WindowHandle};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, KillTimer, PostMessageW, RegisterClassW,
    SetTimer, WM_APP, WM_TIMER, WNDCLASSW, WS_EX_TOOLWINDOW,
};
use windows::core::w;

use super::LoopRequest;
use crate::drag;
use crate::input;
use crate::window::{self, Win32Api};

/// Posted to the host window when IPC requests are queued.
pub(super) const WM_VEIL_REQUEST: u32 = WM_APP + 1;
/// Posted by the mouse hook to start a delegated native drag.
const WM_VEIL_DRAG: u32 = WM_APP + 2;

const GHOST_TIMER_ID: usize = 0x5647;
const CLEANUP_TIMER_ID: usize = 0x5643;

thread_local! {
    static ENGINE: RefCell<Option<Engine<Win32Api>>> = const { RefCell::new(None) };
    static REQUESTS: RefCell<Option<Receiver<LoopRequest>>> = const { RefCell::new(None) };
    static HOST: Cell<usize> = const { Cell::new(0) };
}

/// Runs `f` against the engine.
///
/// Returns `None` when the engine is not installed or is already
/// borrowed further up this thread's stack.
pub(super) fn with_engine<R>(f: impl FnOnce(&mut Engine<Win32Api>) -> R) -> Option<R> {
    ENGINE.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

pub(super) fn install_engine(engine: Engine<Win32Api>) {
    ENGINE.with(|cell| *cell.borrow_mut() = Some(engine));
}

/// Creates the hidden host window and starts the ghost and cleanup timers.
///
/// `WS_EX_TOOLWINDOW` keeps it out of the taskbar; without `WS_VISIBLE`
/// it never shows.
pub(super) fn create_host(
    config: &Config,
    requests: Receiver<LoopRequest>,
) -> Result<HWND, String> {
    // SAFETY: standard class registration and window creation on the
    // current thread. The class proc is a plain function.
    let hwnd = unsafe {
        let class_name = w!("VeilHost");
        let wc = WNDCLASSW {
            lpfnWndProc: Some(host_proc),
            lpszClassName: class_name,
            ..Default::default()
        };

        if RegisterClassW(&wc) == 0 {
            return Err("Failed to register VeilHost class".to_string());
        }

        CreateWindowExW(
            WS_EX_TOOLWINDOW,
            class_name,
            w!("VeilHost"),
            Default::default(),
            0,
            0,
            0,
            0,
            None,
            None,
            None,
            None,
        )
        .map_err(|e| format!("Failed to create VeilHost window: {e}"))?
    };

    REQUESTS.with(|cell| *cell.borrow_mut() = Some(requests));
    HOST.with(|cell| cell.set(hwnd.0 as usize));

    let cleanup_ms = config.registry.cleanup_secs.saturating_mul(1000);
    // SAFETY: timers belong to our own window and are killed in teardown.
    unsafe {
        SetTimer(Some(hwnd), GHOST_TIMER_ID, config.ghost.interval_ms, None);
        SetTimer(Some(hwnd), CLEANUP_TIMER_ID, cleanup_ms, None);
    }
    Ok(hwnd)
}

/// Restores every modified window, then releases the engine and the host.
pub(super) fn teardown(hwnd: HWND) {
    // SAFETY: the timers and the window are ours.
    unsafe {
        let _ = KillTimer(Some(hwnd), GHOST_TIMER_ID);
        let _ = KillTimer(Some(hwnd), CLEANUP_TIMER_ID);
    }

    if let Some(mut engine) = ENGINE.with(|cell| cell.borrow_mut().take()) {
        let count = engine.active_count();
        engine.reset_all();
        veil_core::log_info!("Restored {count} windows");
    }

    REQUESTS.with(|cell| *cell.borrow_mut() = None);
    HOST.with(|cell| cell.set(0));

    // SAFETY: destroying our own window on the thread that created it.
    unsafe {
        let _ = DestroyWindow(hwnd);
    }
}

/// Feeds a pointer sample to the engine. Returns `true` to swallow it.
pub(super) fn handle_pointer(event: PointerEvent) -> bool {
    let outcome = with_engine(|engine| {
        let held = matches!(event, PointerEvent::Down(_))
            && input::modifier_held(engine.drag_config().modifier);
        engine.on_pointer(event, held, window::window_at)
    })
    .unwrap_or(PointerOutcome::Pass);

    match outcome {
        PointerOutcome::Pass => false,
        PointerOutcome::Consume => true,
        PointerOutcome::Cursor(shape) => {
            input::set_cursor(shape);
            true
        }
        PointerOutcome::Delegate(session) => {
            input::set_cursor(session.mode.cursor());
            let host = HOST.with(Cell::get);
            // SAFETY: the native loop must not run inside the hook
            // callback, so it is started from a posted message instead.
            let posted = unsafe {
                PostMessageW(
                    Some(HWND(host as *mut _)),
                    WM_VEIL_DRAG,
                    WPARAM(0),
                    LPARAM(0),
                )
            };
            if let Err(e) = posted {
                veil_core::log_warn!("could not start native drag: {e}");
                with_engine(|engine| engine.end_drag());
                return false;
            }
            true
        }
    }
}

/// Runs the OS move/size loop for the live session, with the engine
/// borrow released so hook callbacks keep flowing.
fn run_native_drag() {
    let Some(session) = with_engine(|engine| engine.drag_session().cloned()).flatten() else {
        return;
    };
    drag::run_native(session.target, session.mode);
    with_engine(|engine| engine.end_drag());
}

fn ghost_tick() {
    let Some(pointer) = window::cursor_pos() else {
        return;
    };
    with_engine(|engine| {
        let held = input::modifier_held(engine.drag_config().modifier);
        engine.ghost_tick(pointer, held)
    });
}

fn cleanup() {
    if let Some(removed) = with_engine(|engine| engine.cleanup())
        && removed > 0
    {
        veil_core::log_debug!("Dropped state for {removed} destroyed windows");
    }
}

fn drain_requests() {
    let pending: Vec<LoopRequest> = REQUESTS.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|rx| rx.try_iter().collect())
            .unwrap_or_default()
    });
    for request in pending {
        handle_request(request);
    }
}

fn handle_request(request: LoopRequest) {
    match request {
        LoopRequest::Action(action, reply) => {
            let target = if action.needs_target() {
                window::foreground_target()
            } else {
                WindowHandle::NULL
            };
            let response = match with_engine(|engine| engine.handle_action(action, target)) {
                Some(()) => Response::ok(),
                None => Response::error("engine is busy"),
            };
            let _ = reply.send(response);
        }
        LoopRequest::Status(reply) => {
            let response = match with_engine(|engine| engine.active_count()) {
                Some(count) => Response::status(count),
                None => Response::error("engine is busy"),
            };
            let _ = reply.send(response);
        }
    }
}

/// WNDPROC for the host window.
unsafe extern "system" fn host_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_TIMER if wparam.0 == GHOST_TIMER_ID => ghost_tick(),
        WM_TIMER if wparam.0 == CLEANUP_TIMER_ID => cleanup(),
        WM_VEIL_REQUEST => drain_requests(),
        WM_VEIL_DRAG => run_native_drag(),
        _ => return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
    LRESULT(0)
}
