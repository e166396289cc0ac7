use std::fmt;

use crate::input::{Key, Modifiers, MouseButton};
use crate::surface::Surface;

/// Control directive returned by the hook host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Which optional hooks a script defines.
///
/// Read once by the capability probe when the host is built and never
/// re-queried, so a script cannot gain or lose hooks while running.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Capabilities {
    pub load: bool,
    pub keydown: bool,
    pub keyup: bool,
    pub mousedown: bool,
    pub mouseup: bool,
    pub update: bool,
    pub draw: bool,
}

impl Capabilities {
    pub const NONE: Self = Self {
        load: false,
        keydown: false,
        keyup: false,
        mousedown: false,
        mouseup: false,
        update: false,
        draw: false,
    };

    pub const ALL: Self = Self {
        load: true,
        keydown: true,
        keyup: true,
        mousedown: true,
        mouseup: true,
        update: true,
        draw: true,
    };

    /// Hook names paired with their flags, in dispatch-table order.
    pub fn entries(&self) -> [(&'static str, bool); 7] {
        [
            ("load", self.load),
            ("keydown", self.keydown),
            ("keyup", self.keyup),
            ("mousedown", self.mousedown),
            ("mouseup", self.mouseup),
            ("update", self.update),
            ("draw", self.draw),
        ]
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (name, on) in self.entries() {
            if !on {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// User-supplied game behaviour.
///
/// Every hook is optional. A hook only runs if `capabilities()` declared it
/// when the host probed the script; the default bodies are never reached for
/// undeclared hooks.
pub trait Script {
    /// Declares the hooks this script implements.
    fn capabilities(&self) -> Capabilities;

    /// Called once before the first frame.
    fn load(&mut self) {}

    fn keydown(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32) {
        let _ = (key, modifiers, unicode, scancode);
    }

    fn keyup(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32) {
        let _ = (key, modifiers, unicode, scancode);
    }

    /// `x`/`y` are surface pixels.
    fn mousedown(&mut self, button: MouseButton, x: i32, y: i32) {
        let _ = (button, x, y);
    }

    fn mouseup(&mut self, button: MouseButton, x: i32, y: i32) {
        let _ = (button, x, y);
    }

    /// `dt` is in seconds.
    fn update(&mut self, dt: f32) {
        let _ = dt;
    }

    /// Called after the surface has been cleared.
    fn draw(&mut self, surface: &mut Surface) {
        let _ = surface;
    }
}

/// Engine-level behaviour. Every hook is invoked unconditionally, after the
/// script's matching hook.
pub trait Core {
    fn load(&mut self);

    fn keydown(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32);

    fn keyup(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32);

    fn mousedown(&mut self, button: MouseButton, x: i32, y: i32);

    fn mouseup(&mut self, button: MouseButton, x: i32, y: i32);

    fn update(&mut self, dt: f32);

    fn draw(&mut self, surface: &mut Surface);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_enabled_hooks() {
        let caps = Capabilities { draw: true, keydown: true, ..Capabilities::NONE };
        assert_eq!(caps.to_string(), "keydown, draw");
        assert_eq!(Capabilities::NONE.to_string(), "none");
        assert_eq!(
            Capabilities::ALL.to_string(),
            "load, keydown, keyup, mousedown, mouseup, update, draw"
        );
    }

    #[test]
    fn default_is_none() {
        assert!(Capabilities::default().is_empty());
        assert!(!Capabilities::ALL.is_empty());
    }
}
