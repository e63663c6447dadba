use crate::core::animation::Intent;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// What the host loop should do with one tick's worth of input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    pub intent: Intent,
    pub reset: bool,
}

/// Tracks held keys between ticks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyInputState {
    w_held: bool,
    a_held: bool,
    s_held: bool,
    d_held: bool,
    up_held: bool,
    down_held: bool,
    reset_edge_pending: bool,
    quit_requested: bool,
}

impl KeyInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyW => self.w_held = pressed,
            KeyCode::KeyA => self.a_held = pressed,
            KeyCode::KeyS => self.s_held = pressed,
            KeyCode::KeyD => self.d_held = pressed,
            KeyCode::ArrowUp => self.up_held = pressed,
            KeyCode::ArrowDown => self.down_held = pressed,
            KeyCode::KeyR if pressed => self.reset_edge_pending = true,
            KeyCode::Escape if pressed => self.quit_requested = true,
            _ => {}
        }
    }

    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            intent: Intent {
                zoom_in: self.up_held,
                zoom_out: self.down_held,
                pan_x: axis(self.a_held, self.d_held),
                // screen y grows downwards
                pan_y: axis(self.w_held, self.s_held),
            },
            reset: self.reset_edge_pending,
        };

        self.reset_edge_pending = false;
        snapshot
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Drops held keys, e.g. when the window loses focus and releases may be missed.
    pub fn release_all(&mut self) {
        *self = Self {
            quit_requested: self.quit_requested,
            ..Self::default()
        };
    }
}

fn axis(negative: bool, positive: bool) -> i8 {
    i8::from(positive) - i8::from(negative)
}

#[cfg(test)]
mod tests {
    use super::KeyInputState;
    use winit::{event::ElementState, keyboard::KeyCode};

    #[test]
    fn wasd_maps_to_pan_directions() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyD, ElementState::Pressed);

        let intent = input.snapshot().intent;
        assert_eq!(intent.pan_x, 1);
        assert_eq!(intent.pan_y, -1);

        input.handle_key_event(KeyCode::KeyW, ElementState::Released);
        input.handle_key_event(KeyCode::KeyD, ElementState::Released);
        input.handle_key_event(KeyCode::KeyA, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyS, ElementState::Pressed);

        let intent = input.snapshot().intent;
        assert_eq!(intent.pan_x, -1);
        assert_eq!(intent.pan_y, 1);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::KeyA, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyD, ElementState::Pressed);

        let intent = input.snapshot().intent;
        assert_eq!(intent.pan_x, 0);
        assert!(!intent.wants_pan());
    }

    #[test]
    fn arrows_map_to_zoom() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::ArrowUp, ElementState::Pressed);
        input.handle_key_event(KeyCode::ArrowDown, ElementState::Pressed);

        let intent = input.snapshot().intent;
        assert!(intent.zoom_in);
        assert!(intent.zoom_out);
        assert_eq!(intent.zoom_direction(), 1);

        input.handle_key_event(KeyCode::ArrowUp, ElementState::Released);

        assert_eq!(input.snapshot().intent.zoom_direction(), -1);
    }

    #[test]
    fn reset_is_a_single_edge_even_with_repeats() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);

        assert!(input.snapshot().reset);
        assert!(!input.snapshot().reset);
    }

    #[test]
    fn escape_requests_quit_and_survives_release_all() {
        let mut input = KeyInputState::default();

        input.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.handle_key_event(KeyCode::Escape, ElementState::Pressed);
        input.release_all();

        assert!(input.quit_requested());
        assert_eq!(input.snapshot().intent.pan_y, 0);
    }
}
