use crate::input::{
    InputEvent, InputFrame, InputState, Key, KeyState, Modifiers, MouseButton, MouseButtonState,
    PointerButtonEvent,
};
use crate::surface::Surface;

use super::app::Core;

/// Key that toggles the debug overlay.
pub const OVERLAY_KEY: Key = Key::F3;

/// Default core collaborator.
///
/// Keeps input and timing bookkeeping that scripts would otherwise repeat,
/// and draws an optional debug overlay on top of the script's frame.
#[derive(Debug, Default)]
pub struct EngineCore {
    input: InputState,
    frame: InputFrame,
    elapsed: f64,
    frames: u64,
    overlay: bool,
    loaded: bool,
}

impl EngineCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current held-key / held-button / pointer state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Transitions since the last draw.
    pub fn input_frame(&self) -> &InputFrame {
        &self.frame
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.input.key_down(key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.input.button_down(button)
    }

    /// Seconds accumulated from update deltas.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of updates seen.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn overlay_enabled(&self) -> bool {
        self.overlay
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn key(&mut self, key: Key, state: KeyState, modifiers: Modifiers, unicode: Option<char>, scancode: u32) {
        self.input.apply_event(
            &mut self.frame,
            InputEvent::Key {
                key,
                state,
                modifiers,
                code: scancode,
                text: unicode,
                repeat: false,
            },
        );
    }

    fn button(&mut self, button: MouseButton, state: MouseButtonState, x: i32, y: i32) {
        let modifiers = self.input.modifiers;
        self.input.apply_event(
            &mut self.frame,
            InputEvent::PointerButton(PointerButtonEvent {
                button,
                state,
                x: x as f32,
                y: y as f32,
                modifiers,
            }),
        );
    }
}

impl Core for EngineCore {
    fn load(&mut self) {
        self.loaded = true;
        log::debug!("engine core loaded");
    }

    fn keydown(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32) {
        self.key(key, KeyState::Pressed, modifiers, unicode, scancode);

        if key == OVERLAY_KEY {
            self.overlay = !self.overlay;
            log::debug!("debug overlay {}", if self.overlay { "on" } else { "off" });
        }
    }

    fn keyup(&mut self, key: Key, modifiers: Modifiers, unicode: Option<char>, scancode: u32) {
        self.key(key, KeyState::Released, modifiers, unicode, scancode);
    }

    fn mousedown(&mut self, button: MouseButton, x: i32, y: i32) {
        self.button(button, MouseButtonState::Pressed, x, y);
    }

    fn mouseup(&mut self, button: MouseButton, x: i32, y: i32) {
        self.button(button, MouseButtonState::Released, x, y);
    }

    fn update(&mut self, dt: f32) {
        self.elapsed += dt as f64;
        self.frames += 1;
    }

    /// With the overlay on, outlines the surface and marks the last click.
    ///
    /// The core only sees button events, so the marker sits where the pointer
    /// was at the most recent press or release, not where it is now.
    fn draw(&mut self, surface: &mut Surface) {
        if self.overlay {
            let (w, h) = surface.size();
            surface.debug_rect(0, 0, w as i32 - 1, h as i32 - 1);
            if let Some((x, y)) = self.input.pointer_pos {
                surface.debug_dot(x as i32, y as i32);
            }
        }

        // Draw is the last hook of a frame.
        self.frame.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Color;

    fn press(core: &mut EngineCore, key: Key) {
        core.keydown(key, Modifiers::NONE, None, 0);
    }

    // ── input bookkeeping ─────────────────────────────────────────────────

    #[test]
    fn tracks_held_keys() {
        let mut core = EngineCore::new();
        press(&mut core, Key::W);
        assert!(core.key_down(Key::W));
        assert!(core.input_frame().keys_pressed.contains(&Key::W));

        core.keyup(Key::W, Modifiers::NONE, None, 0);
        assert!(!core.key_down(Key::W));
    }

    #[test]
    fn tracks_buttons_and_pointer() {
        let mut core = EngineCore::new();
        core.mousedown(MouseButton::Left, 30, 40);
        assert!(core.button_down(MouseButton::Left));
        assert_eq!(core.input().pointer_pos, Some((30.0, 40.0)));

        core.mouseup(MouseButton::Left, 31, 41);
        assert!(!core.button_down(MouseButton::Left));
        assert_eq!(core.input().pointer_pos, Some((31.0, 41.0)));
    }

    #[test]
    fn frame_transitions_clear_after_draw() {
        let mut core = EngineCore::new();
        press(&mut core, Key::A);
        core.draw(&mut Surface::new(4, 4));
        assert!(core.input_frame().keys_pressed.is_empty());
        assert!(core.key_down(Key::A));
    }

    // ── timing ────────────────────────────────────────────────────────────

    #[test]
    fn accumulates_time_and_frames() {
        let mut core = EngineCore::new();
        core.update(0.5);
        core.update(0.25);
        assert_eq!(core.elapsed(), 0.75);
        assert_eq!(core.frame_count(), 2);
    }

    #[test]
    fn load_marks_core_loaded() {
        let mut core = EngineCore::new();
        assert!(!core.is_loaded());
        core.load();
        assert!(core.is_loaded());
    }

    // ── overlay ───────────────────────────────────────────────────────────

    #[test]
    fn overlay_toggles_on_f3() {
        let mut core = EngineCore::new();
        press(&mut core, OVERLAY_KEY);
        assert!(core.overlay_enabled());
        core.keyup(OVERLAY_KEY, Modifiers::NONE, None, 0);
        press(&mut core, OVERLAY_KEY);
        assert!(!core.overlay_enabled());
    }

    #[test]
    fn overlay_off_draws_nothing() {
        let mut core = EngineCore::new();
        let mut surface = Surface::new(16, 16);
        core.mousedown(MouseButton::Left, 8, 8);
        core.draw(&mut surface);
        assert!(surface.pixels().iter().all(|&p| p == Color::BLACK.to_pixel()));
    }

    #[test]
    fn overlay_marks_pointer_and_border() {
        let mut core = EngineCore::new();
        let mut surface = Surface::new(32, 32);
        press(&mut core, OVERLAY_KEY);
        core.mousedown(MouseButton::Left, 16, 16);
        core.draw(&mut surface);

        assert_eq!(surface.pixel(16, 16), Some(Color::RED));
        assert_eq!(surface.pixel(0, 0), Some(Color::RED));
        assert_eq!(surface.pixel(31, 31), Some(Color::RED));
        assert_eq!(surface.pixel(8, 24), Some(Color::BLACK));
    }

    #[test]
    fn overlay_marker_follows_last_click() {
        let mut core = EngineCore::new();
        press(&mut core, OVERLAY_KEY);
        core.mousedown(MouseButton::Left, 8, 8);
        core.mouseup(MouseButton::Left, 20, 20);

        let mut surface = Surface::new(32, 32);
        core.draw(&mut surface);
        assert_eq!(surface.pixel(20, 20), Some(Color::RED));
        assert_eq!(surface.pixel(8, 8), Some(Color::BLACK));
    }
}
