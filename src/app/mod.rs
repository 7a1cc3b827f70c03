//! Winit application shell.
//!
//! Drives the per-frame logic loop: window creation on resume, event
//! translation into [`Input`] via [`input_adapter`], a [`FrameClock`] tick and a
//! user update callback per redraw. There is no renderer here — the crate's
//! scope ends at the motion logic, so the shell only gives the demo a real
//! event loop to run inside.

pub mod input_adapter;

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::input::Input;
use crate::utils::FrameClock;

/// Per-frame callback: the frame's input snapshot and elapsed seconds.
pub type UpdateFn = Box<dyn FnMut(&Input, f32)>;

pub struct App {
    window: Option<Arc<Window>>,
    pub title: String,

    input: Input,
    clock: FrameClock,
    update_fn: Option<UpdateFn>,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window: None,
            title: "Strider".into(),
            input: Input::new(),
            clock: FrameClock::new(),
            update_fn: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn set_update_fn<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&Input, f32) + 'static,
    {
        self.update_fn = Some(Box::new(f));
        self
    }

    /// Runs the event loop until the window closes.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn update(&mut self) {
        let dt = self.clock.tick();

        if let Some(update_fn) = self.update_fn.as_mut() {
            update_fn(&self.input, dt);
        }

        self.input.start_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = event_loop
            .create_window(window_attributes)
            .expect("Failed to create window");
        let window = Arc::new(window);

        let size = window.inner_size();
        self.input.inject_resize(size.width, size.height);

        log::info!("window created: {}", self.title);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.update();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            other => {
                input_adapter::process_window_event(&mut self.input, &other);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
