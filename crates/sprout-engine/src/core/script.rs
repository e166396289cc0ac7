use crate::input::{Key, Modifiers, MouseButton};
use crate::surface::Surface;

use super::app::{Capabilities, Script};

type LoadHook<T> = Box<dyn FnMut(&mut T)>;
type KeyHook<T> = Box<dyn FnMut(&mut T, Key, Modifiers, Option<char>, u32)>;
type MouseHook<T> = Box<dyn FnMut(&mut T, MouseButton, i32, i32)>;
type UpdateHook<T> = Box<dyn FnMut(&mut T, f32)>;
type DrawHook<T> = Box<dyn FnMut(&mut T, &mut Surface)>;

/// A script assembled from closures over shared state `T`.
///
/// Its capabilities are exactly the hooks that were registered.
///
/// ```rust,ignore
/// let script = HookScript::new(0u32)
///     .on_keydown(|presses, _, _, _, _| *presses += 1)
///     .on_draw(|presses, surface| surface.fill_rect(0, 0, *presses as i32, 4, Color::WHITE));
/// ```
pub struct HookScript<T> {
    state: T,
    load: Option<LoadHook<T>>,
    keydown: Option<KeyHook<T>>,
    keyup: Option<KeyHook<T>>,
    mousedown: Option<MouseHook<T>>,
    mouseup: Option<MouseHook<T>>,
    update: Option<UpdateHook<T>>,
    draw: Option<DrawHook<T>>,
}

impl<T> HookScript<T> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            load: None,
            keydown: None,
            keyup: None,
            mousedown: None,
            mouseup: None,
            update: None,
            draw: None,
        }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }

    pub fn into_state(self) -> T {
        self.state
    }

    pub fn on_load(mut self, f: impl FnMut(&mut T) + 'static) -> Self {
        self.load = Some(Box::new(f));
        self
    }

    pub fn on_keydown(
        mut self,
        f: impl FnMut(&mut T, Key, Modifiers, Option<char>, u32) + 'static,
    ) -> Self {
        self.keydown = Some(Box::new(f));
        self
    }

    pub fn on_keyup(
        mut self,
        f: impl FnMut(&mut T, Key, Modifiers, Option<char>, u32) + 'static,
    ) -> Self {
        self.keyup = Some(Box::new(f));
        self
    }

    pub fn on_mousedown(mut self, f: impl FnMut(&mut T, MouseButton, i32, i32) + 'static) -> Self {
        self.mousedown = Some(Box::new(f));
        self
    }

    pub fn on_mouseup(mut self, f: impl FnMut(&mut T, MouseButton, i32, i32) + 'static) -> Self {
        self.mouseup = Some(Box::new(f));
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&mut T, f32) + 'static) -> Self {
        self.update = Some(Box::new(f));
        self
    }

    pub fn on_draw(mut self, f: impl FnMut(&mut T, &mut Surface) + 'static) -> Self {
        self.draw = Some(Box::new(f));
        self
    }
}

impl<T> Script for HookScript<T> {
    fn capabilities(&self) -> Capabilities {
        Capabilities {
            load: self.load.is_some(),
            keydown: self.keydown.is_some(),
            keyup: self.keyup.is_some(),
            mousedown: self.mousedown.is_some(),
            mouseup: self.mouseup.is_some(),
            update: self.update.is_some(),
            draw: self.draw.is_some(),
        }
    }

    fn load(&mut self) {
        if let Some(f) = self.load.as_mut() {
            f(&mut self.state);
        }
    }

    fn keydown(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32) {
        if let Some(f) = self.keydown.as_mut() {
            f(&mut self.state, key, modifiers, unicode, scancode);
        }
    }

    fn keyup(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32) {
        if let Some(f) = self.keyup.as_mut() {
            f(&mut self.state, key, modifiers, unicode, scancode);
        }
    }

    fn mousedown(&mut self, button: MouseButton, x: i32, y: i32) {
        if let Some(f) = self.mousedown.as_mut() {
            f(&mut self.state, button, x, y);
        }
    }

    fn mouseup(&mut self, button: MouseButton, x: i32, y: i32) {
        if let Some(f) = self.mouseup.as_mut() {
            f(&mut self.state, button, x, y);
        }
    }

    fn update(&mut self, dt: f32) {
        if let Some(f) = self.update.as_mut() {
            f(&mut self.state, dt);
        }
    }

    fn draw(&mut self, surface: &mut Surface) {
        if let Some(f) = self.draw.as_mut() {
            f(&mut self.state, surface);
        }
    }
}
