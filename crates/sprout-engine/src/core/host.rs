use crate::surface::{Color, Surface};
use crate::time::{FrameClock, FrameTime};

use super::app::{AppControl, Capabilities, Core, Script};
use super::event::Event;

/// Drives a script and a core through load, input, update and draw.
///
/// The script's capabilities are probed once in `new` and cached. For every
/// hook the script's version (if declared) runs first, then the core's.
pub struct HookHost<C, S> {
    core: C,
    script: S,
    caps: Capabilities,
    running: bool,
}

impl<C, S> HookHost<C, S>
where
    C: Core,
    S: Script,
{
    /// Probes `script` and builds the host. No hook runs yet.
    pub fn new(core: C, script: S) -> Self {
        let caps = script.capabilities();
        log::info!("script hooks: {caps}");

        Self {
            core,
            script,
            caps,
            running: true,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn script(&self) -> &S {
        &self.script
    }

    pub fn script_mut(&mut self) -> &mut S {
        &mut self.script
    }

    /// Runs `core.load()`, then `script.load()` if declared.
    pub fn load(&mut self) {
        self.core.load();
        if self.caps.load {
            self.script.load();
        }
    }

    /// Dispatches a drained batch in order.
    ///
    /// A `Quit` stops the host: events after it in the batch are discarded and
    /// no hook runs for them.
    pub fn dispatch<I>(&mut self, events: I) -> AppControl
    where
        I: IntoIterator<Item = Event>,
    {
        if !self.running {
            return AppControl::Exit;
        }

        for event in events {
            if self.dispatch_one(event) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        AppControl::Continue
    }

    fn dispatch_one(&mut self, event: Event) -> AppControl {
        log::trace!("dispatch {event:?}");

        match event {
            Event::Quit => {
                log::info!("quit received");
                self.running = false;
                return AppControl::Exit;
            }

            Event::KeyDown(k) => {
                if self.caps.keydown {
                    self.script.keydown(k.key, k.modifiers, k.unicode, k.scancode);
                }
                self.core.keydown(k.key, k.modifiers, k.unicode, k.scancode);
            }

            Event::KeyUp(k) => {
                if self.caps.keyup {
                    self.script.keyup(k.key, k.modifiers, k.unicode, k.scancode);
                }
                self.core.keyup(k.key, k.modifiers, k.unicode, k.scancode);
            }

            Event::MouseDown(m) => {
                if self.caps.mousedown {
                    self.script.mousedown(m.button, m.x, m.y);
                }
                self.core.mousedown(m.button, m.x, m.y);
            }

            Event::MouseUp(m) => {
                if self.caps.mouseup {
                    self.script.mouseup(m.button, m.x, m.y);
                }
                self.core.mouseup(m.button, m.x, m.y);
            }
        }

        AppControl::Continue
    }

    /// Runs update hooks with `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.caps.update {
            self.script.update(dt);
        }
        self.core.update(dt);
    }

    /// Clears `surface` to `clear`, then runs draw hooks into it.
    pub fn draw(&mut self, surface: &mut Surface, clear: Color) {
        surface.fill(clear);
        if self.caps.draw {
            self.script.draw(surface);
        }
        self.core.draw(surface);
    }

    /// One loop iteration short of presenting: dispatch, tick, update, clear, draw.
    ///
    /// Returns `Exit` without ticking or drawing when the batch contained a quit.
    pub fn frame<I>(
        &mut self,
        events: I,
        clock: &mut FrameClock,
        surface: &mut Surface,
        clear: Color,
    ) -> AppControl
    where
        I: IntoIterator<Item = Event>,
    {
        if self.dispatch(events) == AppControl::Exit {
            return AppControl::Exit;
        }

        let ft: FrameTime = clock.tick();
        self.update(ft.dt);
        self.draw(surface, clear);

        AppControl::Continue
    }
}
