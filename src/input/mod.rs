pub mod mouse;
pub mod keyboard;
pub mod multi_input;
pub mod latch;
pub mod bindings;

use glfw::WindowEvent;

/// Per-frame input state fed from the window's event queue.
///
/// `update` is called for every event of a frame, `clear` once the frame
/// has consumed the state.
pub trait Input {
    fn new() -> Self;

    fn update(&mut self, event: WindowEvent);

    fn clear(&mut self);
}
