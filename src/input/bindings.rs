use glfw::{Key, MouseButton};

use crate::camera::fly_camera::CameraMovement;

/// Which physical control drives which action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub forward: Key,
    pub backward: Key,
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
    pub sprint: Key,
    pub focus: Key,
    pub reset: Key,
    pub quit: Key,
    pub flashlight: MouseButton,
    /// One key per lesson, in `Lesson::ALL` order.
    pub lessons: [Key; 4]
}

impl KeyBindings {
    /// Movement keys paired with the direction they move the camera in.
    pub fn movement(&self) -> [(Key, CameraMovement); 6] {
        [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
            (self.up, CameraMovement::Up),
            (self.down, CameraMovement::Down),
        ]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: Key::W,
            backward: Key::S,
            left: Key::A,
            right: Key::D,
            up: Key::X,
            down: Key::Z,
            sprint: Key::LeftShift,
            focus: Key::F,
            reset: Key::R,
            quit: Key::Escape,
            flashlight: MouseButton::Button1,
            lessons: [Key::Num1, Key::Num2, Key::Num3, Key::Num4]
        }
    }
}
