use glam::{Mat4, Vec3};
use serde::Deserialize;

use crate::camera::Camera;

#[cfg(feature = "trace")]
use tracing::{debug, instrument};

pub const DEFAULT_POSITION: [f32; 3] = [0.0, 0.0, 3.0];
pub const DEFAULT_FRONT: [f32; 3] = [0.0, 0.0, -1.0];
pub const DEFAULT_UP: [f32; 3] = [0.0, 1.0, 0.0];

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_SPRINT_MULTIPLIER: f32 = 2.0;
pub const DEFAULT_FOV: f32 = 45.0;
pub const DEFAULT_MAX_FOV: f32 = 100.0;
pub const MIN_FOV: f32 = 1.0;

/// Pitch is kept inside +/- this many degrees so `front` never lines up
/// with `world_up`.
pub const PITCH_LIMIT: f32 = 89.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

const DIRECTION_EPSILON: f32 = 1.0e-6;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down
}

/// Free-fly camera driven by yaw/pitch angles.
///
/// `front`, `right` and `up` are always rebuilt from the angles, never
/// edited on their own, so they stay an orthonormal basis.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    max_fov: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    sprint_multiplier: f32,
    sprinting: bool
}

impl FlyCamera {
    /// Camera looking along `front`. `up` doubles as the world up vector.
    pub fn new(position: Vec3, front: Vec3, up: Vec3) -> Self {
        Self::with_world_up(position, front, up, up)
    }

    pub fn with_world_up(position: Vec3, front: Vec3, up: Vec3, world_up: Vec3) -> Self {
        let (yaw, pitch) = angles_towards(front)
            .unwrap_or((DEFAULT_YAW, DEFAULT_PITCH));

        Self::build(position, up, world_up, yaw, pitch, DEFAULT_SPEED, DEFAULT_SENSITIVITY)
    }

    pub fn with_orientation(position: Vec3, up: Vec3, yaw: f32, pitch: f32, movement_speed: f32, mouse_sensitivity: f32) -> Self {
        Self::build(position, up, up, yaw, pitch, movement_speed, mouse_sensitivity)
    }

    #[cfg_attr(feature = "trace", instrument)]
    pub fn from_json(json: &FlyCameraJSON) -> Self {
        let position = json.position.map(Vec3::from).unwrap_or_else(|| Vec3::from(DEFAULT_POSITION));
        let up = json.up.map(Vec3::from).unwrap_or_else(|| Vec3::from(DEFAULT_UP));
        let world_up = json.world_up.map(Vec3::from).unwrap_or(up);

        let (yaw, pitch) = match (json.yaw, json.pitch) {
            (None, None) => {
                let front = json.front.map(Vec3::from).unwrap_or_else(|| Vec3::from(DEFAULT_FRONT));
                angles_towards(front).unwrap_or((DEFAULT_YAW, DEFAULT_PITCH))
            },
            (yaw, pitch) => (yaw.unwrap_or(DEFAULT_YAW), pitch.unwrap_or(DEFAULT_PITCH))
        };

        let mut camera = Self::build(
            position,
            up,
            world_up,
            yaw,
            pitch,
            json.movement_speed.unwrap_or(DEFAULT_SPEED),
            json.mouse_sensitivity.unwrap_or(DEFAULT_SENSITIVITY)
        );

        camera.sprint_multiplier = json.sprint_multiplier.unwrap_or(DEFAULT_SPRINT_MULTIPLIER);
        camera.max_fov = json.max_fov.unwrap_or(DEFAULT_MAX_FOV).max(MIN_FOV);
        camera.fov = json.fov.unwrap_or(DEFAULT_FOV).max(MIN_FOV).min(camera.max_fov);

        #[cfg(feature = "trace")]
        debug!("Built fly camera from json: {:?}", camera);

        camera
    }

    fn build(position: Vec3, up: Vec3, world_up: Vec3, yaw: f32, pitch: f32, movement_speed: f32, mouse_sensitivity: f32) -> Self {
        let world_up = if world_up.length_squared() > DIRECTION_EPSILON {
            world_up.normalize()
        } else {
            Vec3::Y
        };

        let mut camera = Self {
            position,
            front: Vec3::from(DEFAULT_FRONT),
            up,
            right: Vec3::X,
            world_up,
            yaw: wrap_degrees(yaw),
            pitch: pitch.max(-PITCH_LIMIT).min(PITCH_LIMIT),
            fov: DEFAULT_FOV,
            max_fov: DEFAULT_MAX_FOV,
            movement_speed,
            mouse_sensitivity,
            sprint_multiplier: DEFAULT_SPRINT_MULTIPLIER,
            sprinting: false
        };
        camera.update_camera_vectors();

        camera
    }

    pub fn process_movement(&mut self, direction: CameraMovement, delta_time: f32) {
        let multiplier = if self.sprinting { self.sprint_multiplier } else { 1.0 };
        let velocity = self.movement_speed * delta_time * multiplier;

        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity
        }
    }

    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        if !x_offset.is_finite() || !y_offset.is_finite() {
            return
        }

        self.yaw = wrap_degrees(self.yaw + x_offset * self.mouse_sensitivity);
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.max(-PITCH_LIMIT).min(PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Scrolling up zooms in.
    pub fn process_scroll(&mut self, y_offset: f32) {
        if !y_offset.is_finite() {
            return
        }

        self.fov = (self.fov - y_offset).max(MIN_FOV).min(self.max_fov);
    }

    /// Turns the camera so that `front` points at `target`. Does nothing when
    /// `target` is the camera position.
    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn look_at_position(&mut self, target: Vec3) {
        if let Some((yaw, pitch)) = angles_towards(target - self.position) {
            self.yaw = wrap_degrees(yaw);
            self.pitch = pitch.max(-PITCH_LIMIT).min(PITCH_LIMIT);
            self.update_camera_vectors();

            #[cfg(feature = "trace")]
            debug!("Camera now looking at {:?} (yaw: {}, pitch: {})", target, self.yaw, self.pitch);
        }
    }

    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn reset(&mut self, position: Vec3, target: Vec3) {
        self.position = position;
        self.look_at_position(target);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }

    pub fn set_sprinting(&mut self, sprinting: bool) {
        self.sprinting = sprinting;
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn max_fov(&self) -> f32 {
        self.max_fov
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    fn update_camera_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(
            cos_yaw * cos_pitch,
            sin_pitch,
            sin_yaw * cos_pitch
        ).normalize();

        // Only reachable with an unconstrained pitch of exactly +/-90 degrees.
        let right = self.front.cross(self.world_up);
        if right.length_squared() > DIRECTION_EPSILON {
            self.right = right.normalize();
        }

        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::from(DEFAULT_POSITION), Vec3::from(DEFAULT_FRONT), Vec3::from(DEFAULT_UP))
    }
}

impl Camera for FlyCamera {
    fn view(&self) -> Mat4 {
        self.view_matrix()
    }

    fn projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection_matrix(aspect_ratio)
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, new_pos: Vec3) {
        self.position = new_pos;
    }

    fn front(&self) -> Vec3 {
        self.front
    }

    fn up_vector(&self) -> Vec3 {
        self.up
    }

    fn fov(&self) -> f32 {
        self.fov
    }
}

/// Yaw and pitch, in degrees, of a camera looking along `direction`.
fn angles_towards(direction: Vec3) -> Option<(f32, f32)> {
    if direction.length_squared() <= DIRECTION_EPSILON {
        return None
    }

    let direction = direction.normalize();
    let pitch = direction.y.max(-1.0).min(1.0).asin().to_degrees();
    let yaw = direction.z.atan2(direction.x).to_degrees();

    Some((yaw, pitch))
}

/// Maps any angle onto [-180, 180).
fn wrap_degrees(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FlyCameraJSON {
    #[serde(default)]
    pub position: Option<[f32; 3]>,
    #[serde(default)]
    pub front: Option<[f32; 3]>,
    #[serde(default)]
    pub up: Option<[f32; 3]>,
    #[serde(default)]
    pub world_up: Option<[f32; 3]>,
    #[serde(default)]
    pub yaw: Option<f32>,
    #[serde(default)]
    pub pitch: Option<f32>,
    #[serde(default)]
    pub movement_speed: Option<f32>,
    #[serde(default)]
    pub mouse_sensitivity: Option<f32>,
    #[serde(default)]
    pub sprint_multiplier: Option<f32>,
    #[serde(default)]
    pub fov: Option<f32>,
    #[serde(default)]
    pub max_fov: Option<f32>
}

impl FlyCameraJSON {
    /// Where the reset key puts the camera back to.
    pub fn initial_position(&self) -> Vec3 {
        self.position.map(Vec3::from).unwrap_or_else(|| Vec3::from(DEFAULT_POSITION))
    }
}
