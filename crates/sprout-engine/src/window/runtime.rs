use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{AppControl, Core, Event, HookHost, Script};
use crate::input::platform::translate_window_event;
use crate::input::InputState;
use crate::surface::{Color, Surface, blit_scaled};
use crate::time::{DEFAULT_MAX_RATE, FrameClock};

pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 800;
pub const WINDOW_TITLE: &str = "Hello World!";

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Window size in physical pixels; also the display surface size.
    pub size: PhysicalSize<u32>,
    /// Tick-rate ceiling; `0` disables it.
    pub max_fps: u32,
    /// Background the surface is cleared to before draw hooks.
    pub clear_color: Color,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            size: PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            max_fps: DEFAULT_MAX_RATE,
            clear_color: Color::BLACK,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs the loop until a quit event.
    ///
    /// Returns an error if the event loop, window or presentation surface
    /// cannot be created. Hook panics are not caught.
    pub fn run<C, S>(config: RuntimeConfig, core: C, script: S) -> Result<()>
    where
        C: Core + 'static,
        S: Script + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let host = HookHost::new(core, script);
        let mut state = RuntimeState::new(config, host);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Window plus the pixel buffer presented into it.
struct Display {
    window: Arc<Window>,
    presenter: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    presented: PhysicalSize<u32>,
    surface: Surface,
}

impl Display {
    fn create(event_loop: &ActiveEventLoop, config: &RuntimeConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.size)
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer context: {e}"))?;
        let mut presenter = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer surface: {e}"))?;

        let presented = window.inner_size();
        resize_presenter(&mut presenter, presented)?;

        Ok(Self {
            window,
            presenter,
            presented,
            surface: Surface::new(config.size.width, config.size.height),
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        match resize_presenter(&mut self.presenter, size) {
            Ok(()) => self.presented = size,
            Err(e) => log::warn!("{e:#}"),
        }
    }

    fn present(&mut self) -> Result<()> {
        let (w, h) = (self.presented.width as usize, self.presented.height as usize);
        if w == 0 || h == 0 {
            // Minimized.
            return Ok(());
        }

        let mut buffer = self
            .presenter
            .buffer_mut()
            .map_err(|e| anyhow!("failed to acquire presentation buffer: {e}"))?;

        blit_scaled(&self.surface, &mut buffer, w, h);

        self.window.pre_present_notify();
        buffer
            .present()
            .map_err(|e| anyhow!("failed to present frame: {e}"))
    }
}

fn resize_presenter(
    presenter: &mut softbuffer::Surface<Arc<Window>, Arc<Window>>,
    size: PhysicalSize<u32>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    presenter
        .resize(w, h)
        .map_err(|e| anyhow!("failed to resize presentation surface to {}x{}: {e}", size.width, size.height))
}

struct RuntimeState<C, S> {
    config: RuntimeConfig,
    host: HookHost<C, S>,
    display: Option<Display>,
    clock: FrameClock,

    input: InputState,

    /// Events received since the last frame, in arrival order.
    pending: Vec<Event>,

    fatal: Option<anyhow::Error>,
}

impl<C, S> RuntimeState<C, S>
where
    C: Core,
    S: Script,
{
    fn new(config: RuntimeConfig, host: HookHost<C, S>) -> Self {
        let clock = FrameClock::with_max_rate(config.max_fps);
        Self {
            config,
            host,
            display: None,
            clock,
            input: InputState::default(),
            pending: Vec::new(),
            fatal: None,
        }
    }

    fn queue(&mut self, event: &WindowEvent) {
        let Some(display) = self.display.as_ref() else {
            return;
        };

        let Some(ev) = translate_window_event(
            display.window.inner_size(),
            display.surface.size(),
            &self.input,
            event,
        ) else {
            return;
        };

        self.input.track(&ev);
        if let Some(routed) = Event::from_input(&ev) {
            self.pending.push(routed);
        }
    }
}

impl<C, S> ApplicationHandler for RuntimeState<C, S>
where
    C: Core,
    S: Script,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        let display = match Display::create(event_loop, &self.config) {
            Ok(d) => d,
            Err(e) => {
                log::error!("failed to initialize display: {e:#}");
                self.fatal = Some(e);
                event_loop.exit();
                return;
            }
        };

        log::info!(
            "window created: {}x{} \"{}\"",
            self.config.size.width,
            self.config.size.height,
            self.config.title
        );
        self.display = Some(display);

        self.host.load();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.host.is_running() || self.fatal.is_some() {
            event_loop.exit();
            return;
        }

        let Some(display) = self.display.as_mut() else {
            return;
        };

        let events = std::mem::take(&mut self.pending);
        let control = self.host.frame(
            events,
            &mut self.clock,
            &mut display.surface,
            self.config.clear_color,
        );

        if control == AppControl::Exit {
            event_loop.exit();
            return;
        }

        if let Err(e) = display.present() {
            log::warn!("skipping frame: {e:#}");
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => self.pending.push(Event::Quit),

            WindowEvent::Resized(size) => {
                if let Some(display) = self.display.as_mut() {
                    display.resize(*size);
                }
            }

            _ => self.queue(&event),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.display.take().is_some() {
            log::info!("window closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_window() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.title, "Hello World!");
        assert_eq!(cfg.size, PhysicalSize::new(1024, 800));
        assert_eq!(cfg.max_fps, 1000);
        assert_eq!(cfg.clear_color, Color::BLACK);
    }
}
