use glam::Vec3;
use serde::Deserialize;

use crate::lighting::uniforms::{UniformTable, MapSlot};

/// Flat-coloured surface for the materials lesson.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct Material {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec3::new(1.0, 0.5, 0.31),
            diffuse: Vec3::new(1.0, 0.5, 0.31),
            specular: Vec3::splat(0.5),
            shininess: 32.0
        }
    }
}

impl Material {
    pub fn write_uniforms(&self, prefix: &str, table: &mut UniformTable) {
        table.set_vec3(format!("{}ambient", prefix), self.ambient);
        table.set_vec3(format!("{}diffuse", prefix), self.diffuse);
        table.set_vec3(format!("{}specular", prefix), self.specular);
        table.set_float(format!("{}shininess", prefix), self.shininess);
    }
}

/// Surface whose colours come from the diffuse and specular maps.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct MapMaterial {
    pub shininess: f32
}

impl Default for MapMaterial {
    fn default() -> Self {
        Self {
            shininess: 64.0
        }
    }
}

impl MapMaterial {
    pub fn write_uniforms(&self, prefix: &str, table: &mut UniformTable) {
        table.set_sampler(format!("{}diffuse", prefix), MapSlot::Diffuse);
        table.set_sampler(format!("{}specular", prefix), MapSlot::Specular);
        table.set_float(format!("{}shininess", prefix), self.shininess);
    }
}
