use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{Key as LogicalKey, KeyCode, ModifiersState, PhysicalKey};

use crate::input::{
    InputEvent, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent, PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Pointer positions are mapped from window pixels (`window`) to surface
/// pixels (`surface`). Returns `None` for events the input subsystem ignores.
pub(crate) fn translate_window_event(
    window: PhysicalSize<u32>,
    surface: (u32, u32),
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::ModifiersChanged(m) => {
            let ms: ModifiersState = m.state();
            Some(InputEvent::ModifiersChanged(map_modifiers(ms)))
        }

        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_surface_coords(*position, window, surface);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => {
            let st = match st {
                ElementState::Pressed => MouseButtonState::Pressed,
                ElementState::Released => MouseButtonState::Released,
            };

            // winit 0.30 has no cursor query; use the tracked pointer position.
            let (x, y) = state.pointer_pos.unwrap_or((0.0, 0.0));

            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: st,
                x,
                y,
                modifiers: state.modifiers,
            }))
        }

        WindowEvent::KeyboardInput { event, .. } => Some(translate_key_event(state, event)),

        _ => None,
    }
}

fn translate_key_event(state: &InputState, event: &KeyEvent) -> InputEvent {
    let st = match event.state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };

    let (key, code) = map_key(event.physical_key);

    // Releases carry no `text`; fall back to the logical key so both halves
    // of a press report the same character.
    let text = event
        .text
        .as_deref()
        .or(match &event.logical_key {
            LogicalKey::Character(s) => Some(s.as_str()),
            _ => None,
        })
        .and_then(printable_char);

    InputEvent::Key {
        key,
        state: st,
        modifiers: state.modifiers,
        code,
        text,
        repeat: event.repeat,
    }
}

/// Maps a window-space position to surface pixels.
///
/// When the window matches the surface this is the identity; otherwise the
/// position is scaled by `surface / window` on each axis.
fn to_surface_coords(
    pos: PhysicalPosition<f64>,
    window: PhysicalSize<u32>,
    surface: (u32, u32),
) -> (f32, f32) {
    let sx = if window.width == 0 { 1.0 } else { surface.0 as f64 / window.width as f64 };
    let sy = if window.height == 0 { 1.0 } else { surface.1 as f64 / window.height as f64 };
    ((pos.x * sx) as f32, (pos.y * sy) as f32)
}

/// Single printable character of `s`, if it is exactly one.
fn printable_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Some(c),
        _ => None,
    }
}

fn map_modifiers(m: ModifiersState) -> Modifiers {
    Modifiers {
        shift: m.shift_key(),
        ctrl: m.control_key(),
        alt: m.alt_key(),
        meta: m.super_key(),
    }
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

/// Maps a physical key to a `Key` and its code.
///
/// The code is the `KeyCode` discriminant, not the OS scan code: it identifies
/// the key position and is the same on every platform.
fn map_key(pk: PhysicalKey) -> (Key, u32) {
    match pk {
        PhysicalKey::Code(code) => {
            let key = match code {
                KeyCode::Escape => Key::Escape,
                KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
                KeyCode::Tab => Key::Tab,
                KeyCode::Backspace => Key::Backspace,
                KeyCode::Space => Key::Space,

                KeyCode::Insert => Key::Insert,
                KeyCode::Delete => Key::Delete,
                KeyCode::Home => Key::Home,
                KeyCode::End => Key::End,
                KeyCode::PageUp => Key::PageUp,
                KeyCode::PageDown => Key::PageDown,

                KeyCode::ArrowUp => Key::ArrowUp,
                KeyCode::ArrowDown => Key::ArrowDown,
                KeyCode::ArrowLeft => Key::ArrowLeft,
                KeyCode::ArrowRight => Key::ArrowRight,

                KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
                KeyCode::ControlLeft | KeyCode::ControlRight => Key::Control,
                KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
                KeyCode::SuperLeft | KeyCode::SuperRight => Key::Meta,

                KeyCode::KeyA => Key::A,
                KeyCode::KeyB => Key::B,
                KeyCode::KeyC => Key::C,
                KeyCode::KeyD => Key::D,
                KeyCode::KeyE => Key::E,
                KeyCode::KeyF => Key::F,
                KeyCode::KeyG => Key::G,
                KeyCode::KeyH => Key::H,
                KeyCode::KeyI => Key::I,
                KeyCode::KeyJ => Key::J,
                KeyCode::KeyK => Key::K,
                KeyCode::KeyL => Key::L,
                KeyCode::KeyM => Key::M,
                KeyCode::KeyN => Key::N,
                KeyCode::KeyO => Key::O,
                KeyCode::KeyP => Key::P,
                KeyCode::KeyQ => Key::Q,
                KeyCode::KeyR => Key::R,
                KeyCode::KeyS => Key::S,
                KeyCode::KeyT => Key::T,
                KeyCode::KeyU => Key::U,
                KeyCode::KeyV => Key::V,
                KeyCode::KeyW => Key::W,
                KeyCode::KeyX => Key::X,
                KeyCode::KeyY => Key::Y,
                KeyCode::KeyZ => Key::Z,

                KeyCode::Digit0 => Key::Digit0,
                KeyCode::Digit1 => Key::Digit1,
                KeyCode::Digit2 => Key::Digit2,
                KeyCode::Digit3 => Key::Digit3,
                KeyCode::Digit4 => Key::Digit4,
                KeyCode::Digit5 => Key::Digit5,
                KeyCode::Digit6 => Key::Digit6,
                KeyCode::Digit7 => Key::Digit7,
                KeyCode::Digit8 => Key::Digit8,
                KeyCode::Digit9 => Key::Digit9,

                KeyCode::F1 => Key::F1,
                KeyCode::F2 => Key::F2,
                KeyCode::F3 => Key::F3,
                KeyCode::F4 => Key::F4,
                KeyCode::F5 => Key::F5,
                KeyCode::F6 => Key::F6,
                KeyCode::F7 => Key::F7,
                KeyCode::F8 => Key::F8,
                KeyCode::F9 => Key::F9,
                KeyCode::F10 => Key::F10,
                KeyCode::F11 => Key::F11,
                KeyCode::F12 => Key::F12,

                other => Key::Unknown(other as u32),
            };

            (key, code as u32)
        }

        // NativeKeyCode has no portable numeric form.
        PhysicalKey::Unidentified(_) => (Key::Unknown(0), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── coordinates ───────────────────────────────────────────────────────

    #[test]
    fn surface_coords_identity_when_sizes_match() {
        let (x, y) = to_surface_coords(
            PhysicalPosition::new(100.0, 200.0),
            PhysicalSize::new(1024, 800),
            (1024, 800),
        );
        assert_eq!((x, y), (100.0, 200.0));
    }

    #[test]
    fn surface_coords_scale_down_from_larger_window() {
        let (x, y) = to_surface_coords(
            PhysicalPosition::new(1024.0, 800.0),
            PhysicalSize::new(2048, 1600),
            (1024, 800),
        );
        assert_eq!((x, y), (512.0, 400.0));
    }

    #[test]
    fn surface_coords_survive_zero_sized_window() {
        let (x, y) = to_surface_coords(
            PhysicalPosition::new(5.0, 6.0),
            PhysicalSize::new(0, 0),
            (1024, 800),
        );
        assert_eq!((x, y), (5.0, 6.0));
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn printable_char_accepts_single_visible_char() {
        assert_eq!(printable_char("a"), Some('a'));
        assert_eq!(printable_char("A"), Some('A'));
        assert_eq!(printable_char(" "), Some(' '));
    }

    #[test]
    fn printable_char_rejects_control_and_multi_char() {
        assert_eq!(printable_char("\r"), None);
        assert_eq!(printable_char("ab"), None);
        assert_eq!(printable_char(""), None);
    }

    #[test]
    fn letter_keys_map_with_scancode() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::KeyA));
        assert_eq!(key, Key::A);
        assert_eq!(code, KeyCode::KeyA as u32);
    }

    #[test]
    fn both_shift_keys_map_to_shift() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftLeft)).0, Key::Shift);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftRight)).0, Key::Shift);
    }

    #[test]
    fn unmapped_key_keeps_code() {
        let (key, code) = map_key(PhysicalKey::Code(KeyCode::NumLock));
        assert_eq!(key, Key::Unknown(code));
    }

    #[test]
    fn mouse_buttons_map_one_to_one() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(8)), MouseButton::Other(8));
    }

    #[test]
    fn mouse_input_uses_tracked_pointer() {
        let state = InputState {
            pointer_pos: Some((40.0, 50.0)),
            ..InputState::default()
        };

        let event = WindowEvent::MouseInput {
            device_id: winit::event::DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };

        let ev = translate_window_event(PhysicalSize::new(1024, 800), (1024, 800), &state, &event);
        assert_eq!(
            ev,
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 40.0,
                y: 50.0,
                modifiers: Modifiers::NONE,
            }))
        );
    }
}
