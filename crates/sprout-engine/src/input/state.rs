use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" sets, modifiers and the pointer position in surface pixels.
/// Transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Last known pointer position; `None` once the pointer leaves the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

/// Held-set change caused by one event.
enum Transition {
    KeyPressed(Key),
    KeyReleased(Key),
    ButtonPressed(MouseButton),
    ButtonReleased(MouseButton),
}

impl InputState {
    /// Applies an input event to the current state and records transitions in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match self.update(&ev) {
            Some(Transition::KeyPressed(k)) => {
                frame.keys_pressed.insert(k);
            }
            Some(Transition::KeyReleased(k)) => {
                frame.keys_released.insert(k);
            }
            Some(Transition::ButtonPressed(b)) => {
                frame.buttons_pressed.insert(b);
            }
            Some(Transition::ButtonReleased(b)) => {
                frame.buttons_released.insert(b);
            }
            None => {}
        }

        frame.push_event(ev);
    }

    /// Applies an input event to the current state only.
    pub fn track(&mut self, ev: &InputEvent) {
        self.update(ev);
    }

    fn update(&mut self, ev: &InputEvent) -> Option<Transition> {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
                None
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Releases are not delivered to an unfocused window.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
                None
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                None
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                None
            }

            InputEvent::Key { key, state, modifiers, .. } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => self.keys_down.insert(*key).then_some(Transition::KeyPressed(*key)),
                    KeyState::Released => self.keys_down.remove(key).then_some(Transition::KeyReleased(*key)),
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, modifiers }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button).then_some(Transition::ButtonPressed(*button))
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button).then_some(Transition::ButtonReleased(*button))
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::NONE,
            code: 0,
            text: None,
            repeat: false,
        }
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state,
            x,
            y,
            modifiers: Modifiers::NONE,
        })
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn press_then_release_records_both_transitions() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::A, KeyState::Pressed));
        assert!(state.key_down(Key::A));
        assert!(frame.keys_pressed.contains(&Key::A));

        state.apply_event(&mut frame, key(Key::A, KeyState::Released));
        assert!(!state.key_down(Key::A));
        assert!(frame.keys_released.contains(&Key::A));
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn second_press_is_not_a_new_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Space, KeyState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, key(Key::Space, KeyState::Pressed));
        assert!(frame.keys_pressed.is_empty());
        assert!(!frame.is_empty());
    }

    #[test]
    fn release_without_press_is_ignored_by_state() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Q, KeyState::Released));
        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_input() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Pressed, 1.0, 1.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(state.keys_down.is_empty());
        assert!(state.buttons_down.is_empty());
        assert!(!state.focused);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn button_press_updates_pointer() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButton::Right, MouseButtonState::Pressed, 12.0, 34.0));
        assert_eq!(state.pointer_pos, Some((12.0, 34.0)));
        assert!(state.button_down(MouseButton::Right));
        assert!(frame.buttons_pressed.contains(&MouseButton::Right));
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(state.pointer_pos, Some((3.0, 4.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    // ── state only ────────────────────────────────────────────────────────

    #[test]
    fn track_updates_state_without_a_frame() {
        let mut state = InputState::default();

        state.track(&InputEvent::ModifiersChanged(Modifiers { ctrl: true, ..Modifiers::NONE }));
        assert!(state.modifiers.ctrl);

        state.track(&button(MouseButton::Left, MouseButtonState::Pressed, 7.0, 9.0));
        state.track(&key(Key::D, KeyState::Pressed));

        assert_eq!(state.pointer_pos, Some((7.0, 9.0)));
        assert!(state.button_down(MouseButton::Left));
        assert!(state.key_down(Key::D));

        state.track(&key(Key::D, KeyState::Released));
        assert!(!state.key_down(Key::D));
    }
}
