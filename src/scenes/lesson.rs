use glam::Vec3;
use serde::Deserialize;

use crate::graphics::shader::{BASIC_LIGHTING_FS, MATERIALS_FS, LIGHTING_MAPS_FS, MULTIPLE_LIGHTS_FS};
use crate::lighting::LightingConfig;
use crate::lighting::uniforms::UniformTable;

/// One step of the lighting curriculum. Every lesson renders the same cube
/// field; they differ in fragment shader and in the uniforms it reads.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Lesson {
    /// Phong shading of a flat colour under one white light.
    BasicLighting,
    /// Phong with per-channel material colours and a colour-cycling light.
    Materials,
    /// Diffuse and specular colours sampled from textures.
    LightingMaps,
    /// Directional, point and spot lights combined.
    MultipleLights
}

impl Default for Lesson {
    fn default() -> Self {
        Lesson::MultipleLights
    }
}

/// What the lighting uniforms need to know about the viewer this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewer {
    pub position: Vec3,
    pub front: Vec3,
    pub flashlight_on: bool
}

impl Lesson {
    pub const ALL: [Lesson; 4] = [
        Lesson::BasicLighting,
        Lesson::Materials,
        Lesson::LightingMaps,
        Lesson::MultipleLights
    ];

    pub fn index(self) -> usize {
        match self {
            Lesson::BasicLighting => 0,
            Lesson::Materials => 1,
            Lesson::LightingMaps => 2,
            Lesson::MultipleLights => 3
        }
    }

    pub fn from_index(index: usize) -> Option<Lesson> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Lesson::BasicLighting => "basic_lighting",
            Lesson::Materials => "materials",
            Lesson::LightingMaps => "lighting_maps",
            Lesson::MultipleLights => "multiple_lights"
        }
    }

    pub fn fragment_shader(self) -> &'static str {
        match self {
            Lesson::BasicLighting => BASIC_LIGHTING_FS,
            Lesson::Materials => MATERIALS_FS,
            Lesson::LightingMaps => LIGHTING_MAPS_FS,
            Lesson::MultipleLights => MULTIPLE_LIGHTS_FS
        }
    }

    pub fn uses_textures(self) -> bool {
        matches!(self, Lesson::LightingMaps | Lesson::MultipleLights)
    }

    /// Lessons with a single light only draw the lamp of that light.
    pub fn lamp_count(self, configured: usize) -> usize {
        match self {
            Lesson::MultipleLights => configured,
            _ => configured.min(1)
        }
    }

    /// Every lighting uniform of this lesson's fragment shader, keyed by its
    /// GLSL name. `elapsed` is the run time in seconds.
    pub fn lighting_uniforms(self, lighting: &LightingConfig, viewer: &Viewer, elapsed: f32) -> UniformTable {
        let mut table = UniformTable::new();
        table.set_vec3("view_pos", viewer.position);

        match self {
            Lesson::BasicLighting => {
                let light = lighting.primary_light();

                table.set_vec3("object_color", lighting.object_color);
                table.set_vec3("light_color", light.color);
                table.set_vec3("light_pos", light.position);
            },
            Lesson::Materials => {
                let light = lighting.primary_light();
                let color = cycling_color(elapsed);
                let diffuse = color * 0.5;

                lighting.material.write_uniforms("material.", &mut table);
                table.set_vec3("light.position", light.position);
                table.set_vec3("light.ambient", diffuse * 0.2);
                table.set_vec3("light.diffuse", diffuse);
                table.set_vec3("light.specular", Vec3::ONE);
            },
            Lesson::LightingMaps => {
                let light = lighting.primary_light();

                lighting.map_material.write_uniforms("material.", &mut table);
                table.set_vec3("light.position", light.position);
                table.set_vec3("light.ambient", light.color * 0.2);
                table.set_vec3("light.diffuse", light.color * 0.5);
                table.set_vec3("light.specular", light.color);
            },
            Lesson::MultipleLights => {
                lighting.map_material.write_uniforms("material.", &mut table);
                lighting.directional.write_uniforms("dir_light.", &mut table);

                table.set_int("point_light_count", lighting.point_lights.len() as i32);
                for (i, light) in lighting.point_lights.iter().enumerate() {
                    light.write_uniforms(&format!("point_lights[{}].", i), &mut table);
                }

                lighting.spot_light.write_uniforms(
                    "spot_light.",
                    viewer.position,
                    viewer.front,
                    viewer.flashlight_on,
                    &mut table
                );
            }
        }

        table
    }
}

/// Slowly drifting light colour, every channel in [0, 1].
fn cycling_color(elapsed: f32) -> Vec3 {
    let wave = Vec3::new(
        (elapsed * 2.0).sin(),
        (elapsed * 0.7).sin(),
        (elapsed * 1.3).sin()
    );

    (wave + Vec3::ONE) * 0.5
}
