use std::sync::mpsc::{self, Sender};
use std::thread;

use veil_core::config::Keybinding;
use veil_core::{Action, Config, Engine, ExclusionPolicy, Response, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{PostMessageW, PostThreadMessageW, WM_QUIT};

use crate::hotkey::{self, HotkeyManager};
use crate::window::{self, Win32Api};

#[path = "event_loop_host.rs"]
mod host;
#[path = "event_loop_message_pump.rs"]
mod message_pump;
#[path = "event_loop_mouse_hook.rs"]
mod mouse_hook;

/// Work handed to the event thread from other threads.
pub enum LoopRequest {
    /// Run an action against the foreground window.
    Action(Action, Sender<Response>),
    /// Report how many windows are modified.
    Status(Sender<Response>),
}

/// Starts the engine and its Win32 event loop on a new thread.
///
/// The thread owns the engine, the host window with its timers, the
/// low-level mouse hook and the global hotkeys. Returns once all of them
/// are in place, or with the first setup error.
pub fn start(config: Config, keybindings: Vec<Keybinding>) -> WindowResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = mpsc::channel::<Result<(u32, usize), String>>();
    let (request_tx, request_rx) = mpsc::channel::<LoopRequest>();

    let handle = thread::spawn(move || {
        // SAFETY: GetCurrentThreadId has no preconditions.
        let thread_id = unsafe { GetCurrentThreadId() };

        let host = match host::create_host(&config, request_rx) {
            Ok(h) => h,
            Err(e) => {
                let _ = ready_tx.send(Err(e));
                return;
            }
        };

        let mut exclusion = ExclusionPolicy::new(&config.exclude_classes);
        exclusion.exclude_handle(window::shell_window());
        exclusion.exclude_handle(window::handle(host));
        host::install_engine(Engine::new(Win32Api, &config, exclusion));

        let hook = match mouse_hook::install() {
            Ok(h) => h,
            Err(e) => {
                host::teardown(host);
                let _ = ready_tx.send(Err(e));
                return;
            }
        };

        // Register hotkeys on this thread's message queue.
        let mut hotkeys = HotkeyManager::new();
        let failures = hotkeys.register_from_config(&keybindings);
        if let Some(report) = hotkey::failure_report(&failures) {
            eprintln!("Warning: {report}");
            veil_core::log_warn!("{report}");
        }
        veil_core::log_info!("Registered {} hotkeys", hotkeys.len());

        let _ = ready_tx.send(Ok((thread_id, host.0 as usize)));

        message_pump::run_message_pump(&hotkeys);

        // Stop input first so nothing touches windows while they are restored.
        mouse_hook::uninstall(hook);
        drop(hotkeys);
        host::teardown(host);
    });

    let (thread_id, host) = ready_rx
        .recv()
        .map_err(|_| -> Box<dyn std::error::Error> {
            "event loop thread exited unexpectedly".into()
        })?
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    Ok(EventLoopHandle {
        thread_id,
        host,
        requests: request_tx,
        handle,
    })
}

/// Handle for controlling the event loop from the daemon.
pub struct EventLoopHandle {
    thread_id: u32,
    /// Host window, stored as an address because `HWND` is not `Send`.
    host: usize,
    requests: Sender<LoopRequest>,
    handle: thread::JoinHandle<()>,
}

impl EventLoopHandle {
    /// Queues `request` and wakes the event thread to run it.
    pub fn send(&self, request: LoopRequest) -> WindowResult<()> {
        self.requests
            .send(request)
            .map_err(|_| "event loop is not running")?;
        // SAFETY: posting to our own host window; it outlives this handle.
        unsafe {
            PostMessageW(
                Some(HWND(self.host as *mut _)),
                host::WM_VEIL_REQUEST,
                WPARAM(0),
                LPARAM(0),
            )?;
        }
        Ok(())
    }

    /// Signals the event loop to stop and waits for the thread to finish.
    ///
    /// Every modified window is restored before the thread exits.
    pub fn stop(self) {
        // SAFETY: posting WM_QUIT ends the thread's GetMessageW loop.
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}
