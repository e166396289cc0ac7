use crate::input::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};

/// Payload of a key press or release.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
    /// Printable character, if the key produces one.
    pub unicode: Option<char>,
    /// Platform-independent key position code.
    pub scancode: u32,
}

/// Payload of a mouse button press or release, in surface pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MouseClick {
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
}

/// One input occurrence routed to the hooks.
///
/// Lives only for the iteration that drains it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Event {
    Quit,
    KeyDown(KeyPress),
    KeyUp(KeyPress),
    MouseDown(MouseClick),
    MouseUp(MouseClick),
}

impl Event {
    /// Routes a translated input event, if it maps onto a hook.
    ///
    /// Key auto-repeat is dropped so a held key yields one `KeyDown`.
    pub fn from_input(ev: &InputEvent) -> Option<Event> {
        match ev {
            InputEvent::Key { repeat: true, .. } => None,

            InputEvent::Key { key, state, modifiers, code, text, .. } => {
                let press = KeyPress {
                    key: *key,
                    modifiers: *modifiers,
                    unicode: *text,
                    scancode: *code,
                };
                Some(match state {
                    KeyState::Pressed => Event::KeyDown(press),
                    KeyState::Released => Event::KeyUp(press),
                })
            }

            InputEvent::PointerButton(b) => {
                let click = MouseClick {
                    button: b.button,
                    x: b.x.floor() as i32,
                    y: b.y.floor() as i32,
                };
                Some(match b.state {
                    MouseButtonState::Pressed => Event::MouseDown(click),
                    MouseButtonState::Released => Event::MouseUp(click),
                })
            }

            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Event::Quit => "quit",
            Event::KeyDown(_) => "keydown",
            Event::KeyUp(_) => "keyup",
            Event::MouseDown(_) => "mousedown",
            Event::MouseUp(_) => "mouseup",
        }
    }
}
