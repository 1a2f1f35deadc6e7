use glfw::{MouseButton, WindowEvent, Action};
use std::collections::HashSet;
use crate::input::Input;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct WheelMovement {
    /// The number of horizontal lines scrolled
    pub horizontal: f64,

    /// The number of vertical lines scrolled
    pub vertical: f64,
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64
}

/// Cursor movement since the previous frame. `y` grows upwards, the
/// opposite of window coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CursorOffset {
    pub x: f64,
    pub y: f64
}

/// The first cursor event only establishes where the cursor is. Treating it
/// as movement would make the camera jump by the distance from (0, 0).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CursorState {
    Uninitialized,
    Tracking { last: CursorPosition }
}

impl CursorState {
    /// Moves the state machine to `position` and returns the offset that the
    /// move represents, `None` for the very first event.
    pub fn track(&mut self, position: CursorPosition) -> Option<CursorOffset> {
        let offset = match *self {
            CursorState::Uninitialized => None,
            CursorState::Tracking { last } => Some(CursorOffset {
                x: position.x - last.x,
                y: last.y - position.y
            })
        };

        *self = CursorState::Tracking { last: position };
        offset
    }
}

#[derive(Debug, Clone)]
pub struct Mouse {
    cursor_state: CursorState,
    cursor_offset: CursorOffset,
    wheel_movement: WheelMovement,
    is_cursor_owned: bool,
    is_cursor_within_window: bool,
    clicked_buttons: HashSet<MouseButton>,
    held_buttons: HashSet<MouseButton>,
    released_buttons: HashSet<MouseButton>
}

impl Mouse {
    pub fn get_cursor_position(&self) -> Option<CursorPosition> {
        match self.cursor_state {
            CursorState::Uninitialized => None,
            CursorState::Tracking { last } => Some(last)
        }
    }

    pub fn get_cursor_state(&self) -> CursorState {
        self.cursor_state
    }

    /// Sum of every cursor move in the current frame.
    pub fn get_cursor_offset(&self) -> CursorOffset {
        self.cursor_offset
    }

    /// Sum of every scroll in the current frame.
    pub fn get_wheel_movement(&self) -> WheelMovement {
        self.wheel_movement
    }

    pub fn is_cursor_owned(&self) -> bool {
        self.is_cursor_owned
    }

    pub fn is_cursor_within_window(&self) -> bool {
        self.is_cursor_within_window
    }

    pub fn get_clicked_buttons(&self) -> &HashSet<MouseButton> {
        &self.clicked_buttons
    }

    pub fn get_held_buttons(&self) -> &HashSet<MouseButton> {
        &self.held_buttons
    }

    pub fn get_released_buttons(&self) -> &HashSet<MouseButton> {
        &self.released_buttons
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.held_buttons.contains(&button) || self.clicked_buttons.contains(&button)
    }

    /// Forgets the last cursor position, e.g. after the window lost focus and
    /// the cursor may have been warped.
    pub fn reset_tracking(&mut self) {
        self.cursor_state = CursorState::Uninitialized;
    }
}

impl Input for Mouse {
    fn new() -> Self {
        Mouse {
            cursor_state: CursorState::Uninitialized,
            cursor_offset: CursorOffset::default(),
            wheel_movement: WheelMovement::default(),
            is_cursor_owned: false,
            is_cursor_within_window: false,
            clicked_buttons: HashSet::new(),
            held_buttons: HashSet::new(),
            released_buttons: HashSet::new()
        }
    }

    fn update(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Focus(is_focused) => {
                self.is_cursor_owned = is_focused;
                if !is_focused {
                    self.reset_tracking();
                }
            },
            WindowEvent::CursorEnter(entered) => self.is_cursor_within_window = entered,
            WindowEvent::MouseButton(button, action, _modifiers) => {
                match action {
                    Action::Release => {
                        self.held_buttons.remove(&button);
                        self.released_buttons.insert(button);
                    }
                    Action::Press => {
                        if !self.held_buttons.contains(&button) {
                            self.clicked_buttons.insert(button);
                        }
                        self.held_buttons.insert(button);
                    }
                    Action::Repeat => {/*
                        Currently uninterested in this action.
                        NOT to be mistaken with isKeyHeldDown
                     */}
                }
            },
            WindowEvent::CursorPos(x, y) => {
                if let Some(offset) = self.cursor_state.track(CursorPosition { x, y }) {
                    self.cursor_offset.x += offset.x;
                    self.cursor_offset.y += offset.y;
                }
            },
            WindowEvent::Scroll(delta_x, delta_y) => {
                self.wheel_movement.horizontal += delta_x;
                self.wheel_movement.vertical += delta_y;
            },
            _ => {/* Ignore anything unrelated to the mouse */ }
        }
    }

    fn clear(&mut self) {
        self.cursor_offset = CursorOffset::default();
        self.wheel_movement = WheelMovement::default();
        self.clicked_buttons.clear();
        self.released_buttons.clear();
    }
}
