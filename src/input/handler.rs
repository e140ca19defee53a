use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::miniquad::{EventHandler, KeyCode, KeyMods};
use macroquad::prelude::{is_quit_requested, prevent_quit};

use crate::game::Direction;

/// Input the game loop reacts to, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Steer(Direction),
    CloseRequested,
}

/// Map a key to the direction it steers towards
pub fn direction_for_key(keycode: KeyCode) -> Option<Direction> {
    match keycode {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        _ => None,
    }
}

/// Collects window input between frames.
///
/// Must be created after the window exists. Taking over the close request means the
/// window stays open until the game loop has seen it and returned.
pub struct InputHandler {
    subscriber: usize,
    pending: Vec<InputEvent>,
}

impl InputHandler {
    pub fn new() -> Self {
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
            pending: Vec::new(),
        }
    }

    /// Drain every event received since the previous call
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let subscriber = self.subscriber;
        repeat_all_miniquad_input(self, subscriber);

        if is_quit_requested() {
            self.pending.push(InputEvent::CloseRequested);
        }

        std::mem::take(&mut self.pending)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for InputHandler {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        if let Some(direction) = direction_for_key(keycode) {
            self.pending.push(InputEvent::Steer(direction));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(direction_for_key(KeyCode::W), None);
        assert_eq!(direction_for_key(KeyCode::Space), None);
        assert_eq!(direction_for_key(KeyCode::Escape), None);
    }
}
