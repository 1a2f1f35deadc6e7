pub mod fly_camera;

use glam::{Mat4, Vec3};

/// Read side of a camera as the renderer and the lighting code see it.
pub trait Camera {
    fn view(&self) -> Mat4;

    fn projection(&self, aspect_ratio: f32) -> Mat4;

    fn position(&self) -> Vec3;

    fn set_position(&mut self, new_pos: Vec3);

    fn front(&self) -> Vec3;

    fn up_vector(&self) -> Vec3;

    /// Vertical field of view in degrees.
    fn fov(&self) -> f32;
}
