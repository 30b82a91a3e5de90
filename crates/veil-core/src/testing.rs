//! In-memory `WindowApi` used by the engine tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Rect, WindowApi, WindowHandle, WindowResult, WindowStyle};

/// `WS_OVERLAPPEDWINDOW`, a typical decorated application window.
pub const OVERLAPPED_STYLE: u32 = 0x00CF_0000;

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub class: String,
    pub rect: Rect,
    pub style: WindowStyle,
    pub alpha: Option<u8>,
    pub maximized: bool,
    pub alive: bool,
    pub on_top: bool,
}

impl FakeWindow {
    pub fn app(rect: Rect) -> Self {
        Self {
            class: "Notepad".into(),
            rect,
            style: WindowStyle {
                style: OVERLAPPED_STYLE,
                ex_style: 0,
            },
            alpha: None,
            maximized: false,
            alive: true,
            on_top: false,
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    windows: RefCell<HashMap<WindowHandle, FakeWindow>>,
    monitor: Rect,
    alpha_writes: RefCell<usize>,
    fail_writes: bool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            monitor: Rect::new(0, 0, 1920, 1080),
            ..Default::default()
        }
    }

    /// An API whose write calls all fail, while queries still succeed.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    pub fn add(&self, id: usize, window: FakeWindow) -> WindowHandle {
        let handle = WindowHandle(id);
        self.windows.borrow_mut().insert(handle, window);
        handle
    }

    pub fn add_app(&self, id: usize, rect: Rect) -> WindowHandle {
        self.add(id, FakeWindow::app(rect))
    }

    pub fn window(&self, handle: WindowHandle) -> FakeWindow {
        self.windows.borrow()[&handle].clone()
    }

    pub fn update(&self, handle: WindowHandle, f: impl FnOnce(&mut FakeWindow)) {
        if let Some(w) = self.windows.borrow_mut().get_mut(&handle) {
            f(w);
        }
    }

    pub fn destroy(&self, handle: WindowHandle) {
        self.update(handle, |w| w.alive = false);
    }

    pub fn alpha_writes(&self) -> usize {
        *self.alpha_writes.borrow()
    }

    fn write(&self, handle: WindowHandle, f: impl FnOnce(&mut FakeWindow)) -> WindowResult<()> {
        if self.fail_writes {
            return Err("write rejected".into());
        }
        let mut windows = self.windows.borrow_mut();
        let window = windows
            .get_mut(&handle)
            .filter(|w| w.alive)
            .ok_or("invalid window handle")?;
        f(window);
        Ok(())
    }

    fn read<T>(&self, handle: WindowHandle, f: impl FnOnce(&FakeWindow) -> T) -> WindowResult<T> {
        let windows = self.windows.borrow();
        let window = windows
            .get(&handle)
            .filter(|w| w.alive)
            .ok_or("invalid window handle")?;
        Ok(f(window))
    }
}

impl WindowApi for FakeApi {
    fn is_window(&self, handle: WindowHandle) -> bool {
        self.windows
            .borrow()
            .get(&handle)
            .is_some_and(|w| w.alive)
    }

    fn class_name(&self, handle: WindowHandle) -> WindowResult<String> {
        self.read(handle, |w| w.class.clone())
    }

    fn rect(&self, handle: WindowHandle) -> WindowResult<Rect> {
        self.read(handle, |w| w.rect)
    }

    fn style(&self, handle: WindowHandle) -> WindowResult<WindowStyle> {
        self.read(handle, |w| w.style)
    }

    fn set_style(&self, handle: WindowHandle, style: u32) -> WindowResult<()> {
        self.write(handle, |w| w.style.style = style)
    }

    fn set_ex_style(&self, handle: WindowHandle, ex_style: u32) -> WindowResult<()> {
        self.write(handle, |w| w.style.ex_style = ex_style)
    }

    fn set_alpha(&self, handle: WindowHandle, alpha: u8) -> WindowResult<()> {
        *self.alpha_writes.borrow_mut() += 1;
        self.write(handle, |w| w.alpha = Some(alpha))
    }

    fn is_maximized(&self, handle: WindowHandle) -> bool {
        self.read(handle, |w| w.maximized).unwrap_or(false)
    }

    fn monitor_rect(&self, _handle: WindowHandle) -> WindowResult<Rect> {
        Ok(self.monitor)
    }

    fn set_rect(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        self.write(handle, |w| w.rect = *rect)
    }

    fn restore_rect(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        self.write(handle, |w| {
            w.rect = *rect;
            w.maximized = false;
        })
    }

    fn cover_monitor(&self, handle: WindowHandle, rect: &Rect) -> WindowResult<()> {
        self.write(handle, |w| {
            w.rect = *rect;
            w.on_top = true;
        })
    }

    fn refresh_frame(&self, handle: WindowHandle) -> WindowResult<()> {
        self.write(handle, |_| {})
    }
}
