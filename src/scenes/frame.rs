use glam::{Mat3, Mat4, Vec3};

use crate::camera::Camera;
use crate::camera::fly_camera::FlyCamera;
use crate::graphics::transform::{Transform, normal_matrix};
use crate::lighting::uniforms::UniformTable;
use crate::scenes::lesson::{Lesson, Viewer};
use crate::scenes::scene_config::SceneConfig;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelInstance {
    pub model: Mat4,
    pub normal: Mat3
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LampInstance {
    pub model: Mat4,
    pub color: Vec3
}

/// Everything the renderer uploads for one frame, computed without touching
/// the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub lesson: Lesson,
    pub clear_color: [f32; 4],
    pub view: Mat4,
    pub projection: Mat4,
    pub cubes: Vec<ModelInstance>,
    pub lamps: Vec<LampInstance>,
    pub lighting: UniformTable
}

impl FrameState {
    pub fn build(config: &SceneConfig, camera: &FlyCamera, lesson: Lesson, flashlight_on: bool, elapsed: f32, aspect_ratio: f32) -> Self {
        let viewer = Viewer {
            position: camera.position(),
            front: camera.front(),
            flashlight_on
        };

        let cubes = config.cube_positions.iter()
            .enumerate()
            .map(|(i, position)| {
                let model = Transform::cube(i, *position).to_model();
                ModelInstance {
                    model,
                    normal: normal_matrix(&model)
                }
            })
            .collect();

        let lamp_count = lesson.lamp_count(config.lighting.point_lights.len());
        let lamps = config.lighting.point_lights.iter()
            .take(lamp_count)
            .map(|light| LampInstance {
                model: Transform::lamp(light.position).to_model(),
                color: light.color
            })
            .collect();

        Self {
            lesson,
            clear_color: config.clear_color,
            view: camera.view(),
            projection: camera.projection(aspect_ratio),
            cubes,
            lamps,
            lighting: lesson.lighting_uniforms(&config.lighting, &viewer, elapsed)
        }
    }
}
