use glfw::{Action, WindowEvent};
use std::collections::HashSet;
use crate::input::Input;

pub use glfw::Key;

#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    pressed_keys: HashSet<Key>,
    held_keys: HashSet<Key>,
    released_keys: HashSet<Key>
}

impl Keyboard {
    /// Keys that went down during the current frame.
    pub fn get_pressed_keys(&self) -> &HashSet<Key> {
        &self.pressed_keys
    }

    pub fn get_held_keys(&self) -> &HashSet<Key> {
        &self.held_keys
    }

    pub fn get_released_keys(&self) -> &HashSet<Key> {
        &self.released_keys
    }

    /// Held right now, or tapped and let go within this frame.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.held_keys.contains(&key) || self.pressed_keys.contains(&key)
    }

    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }
}

impl Input for Keyboard {
    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, event: WindowEvent) {
        if let WindowEvent::Key(key, _scancode, action, _modifiers) = event {
            match action {
                Action::Press => {
                    if !self.held_keys.contains(&key) {
                        self.pressed_keys.insert(key);
                    }
                    self.held_keys.insert(key);
                },
                Action::Release => {
                    self.held_keys.remove(&key);
                    self.released_keys.insert(key);
                },
                Action::Repeat => {/* Held state already covers repeats */}
            }
        }
    }

    fn clear(&mut self) {
        self.pressed_keys.clear();
        self.released_keys.clear();
    }
}
