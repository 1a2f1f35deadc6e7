use crate::input::mouse::{Mouse, CursorOffset, WheelMovement};
use crate::input::keyboard::{Keyboard, Key};
use crate::input::Input;
use glfw::{MouseButton, WindowEvent};

#[cfg(feature = "trace")]
use tracing::{debug, instrument};

/// Keyboard and mouse behind one `Input`.
#[derive(Debug, Clone)]
pub struct MultiInput {
    mouse: Mouse,
    keyboard: Keyboard
}

impl MultiInput {
    pub fn get_mouse(&self) -> &Mouse {
        &self.mouse
    }

    pub fn get_keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn get_cursor_offset(&self) -> CursorOffset {
        self.mouse.get_cursor_offset()
    }

    pub fn get_wheel_movement(&self) -> WheelMovement {
        self.mouse.get_wheel_movement()
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.keyboard.was_key_pressed(key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse.is_button_down(button)
    }
}

impl Input for MultiInput {
    #[cfg_attr(feature = "trace", instrument)]
    fn new() -> Self {
        Self {
            mouse: Mouse::new(),
            keyboard: Keyboard::new()
        }
    }

    fn update(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Key(..)
            | WindowEvent::Char(_)
            | WindowEvent::CharModifiers(..) => {
                self.keyboard.update(event);
            },
            WindowEvent::Scroll(..)
            | WindowEvent::CursorPos(..)
            | WindowEvent::MouseButton(..)
            | WindowEvent::CursorEnter(_)
            | WindowEvent::Focus(_) => {
                self.mouse.update(event);
            },
            _ => {
                /* Ignore any non-mouse, non-key events */
                #[cfg(feature = "trace")]
                debug!("Ignoring non-input event: {:?}", event);
            }
        }
    }

    fn clear(&mut self) {
        self.mouse.clear();
        self.keyboard.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::{Action, Modifiers};

    #[test]
    fn routes_events_to_the_right_device() {
        let mut input = MultiInput::new();
        input.update(WindowEvent::Key(Key::W, 0, Action::Press, Modifiers::empty()));
        input.update(WindowEvent::CursorPos(10.0, 10.0));
        input.update(WindowEvent::CursorPos(12.0, 7.0));
        input.update(WindowEvent::Scroll(0.0, -1.0));
        input.update(WindowEvent::Size(640, 480));

        assert!(input.is_key_down(Key::W));
        assert_eq!(input.get_cursor_offset(), CursorOffset { x: 2.0, y: 3.0 });
        assert_eq!(input.get_wheel_movement().vertical, -1.0);

        input.clear();
        assert!(input.is_key_down(Key::W));
        assert!(!input.was_key_pressed(Key::W));
        assert_eq!(input.get_cursor_offset(), CursorOffset::default());
    }
}
