use glam::Vec3;
use serde::Deserialize;

use crate::lighting::uniforms::UniformTable;

/// Size of the `point_lights` array in the multiple-lights shader.
pub const MAX_POINT_LIGHTS: usize = 4;

/// Share of a point light's colour used as its ambient term.
pub const POINT_LIGHT_AMBIENT_STRENGTH: f32 = 0.1;

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32
}

impl Default for Attenuation {
    /// Roughly a 50 unit reach.
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032
        }
    }
}

impl Attenuation {
    pub fn write_uniforms(&self, prefix: &str, table: &mut UniformTable) {
        table.set_float(format!("{}constant", prefix), self.constant);
        table.set_float(format!("{}linear", prefix), self.linear);
        table.set_float(format!("{}quadratic", prefix), self.quadratic);
    }

    /// Light intensity factor at `distance`.
    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            ambient: Vec3::ZERO,
            diffuse: Vec3::splat(0.4),
            specular: Vec3::splat(0.5)
        }
    }
}

impl DirectionalLight {
    pub fn write_uniforms(&self, prefix: &str, table: &mut UniformTable) {
        table.set_vec3(format!("{}direction", prefix), self.direction);
        table.set_vec3(format!("{}ambient", prefix), self.ambient);
        table.set_vec3(format!("{}diffuse", prefix), self.diffuse);
        table.set_vec3(format!("{}specular", prefix), self.specular);
    }
}

/// Coloured light at a fixed position. Also drawn as a small lamp cube.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub attenuation: Attenuation
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(1.2, 1.0, 2.0),
            color: Vec3::ONE,
            attenuation: Attenuation::default()
        }
    }
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position,
            color,
            attenuation: Attenuation::default()
        }
    }

    pub fn ambient(&self) -> Vec3 {
        self.color * POINT_LIGHT_AMBIENT_STRENGTH
    }

    pub fn write_uniforms(&self, prefix: &str, table: &mut UniformTable) {
        table.set_vec3(format!("{}position", prefix), self.position);
        table.set_vec3(format!("{}ambient", prefix), self.ambient());
        table.set_vec3(format!("{}diffuse", prefix), self.color);
        table.set_vec3(format!("{}specular", prefix), self.color);
        self.attenuation.write_uniforms(prefix, table);
    }
}

/// The four lights of the multiple-lights scene: yellow, orange, white and
/// blue.
pub fn default_point_lights() -> Vec<PointLight> {
    vec![
        PointLight::new(Vec3::new(0.7, 0.2, 2.0), Vec3::new(1.0, 1.0, 0.2)),
        PointLight::new(Vec3::new(2.3, -3.3, -4.0), Vec3::new(1.0, 0.15, 0.0)),
        PointLight::new(Vec3::new(-4.0, 2.0, -12.0), Vec3::new(1.0, 1.0, 1.0)),
        PointLight::new(Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.0, 0.2, 1.0)),
    ]
}

/// Cone light carried by the camera. Position and direction come from the
/// camera every frame; cone angles are in degrees.
#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct SpotLight {
    pub cut_off: f32,
    pub outer_cut_off: f32,
    pub attenuation: Attenuation,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            cut_off: 8.5,
            outer_cut_off: 11.5,
            attenuation: Attenuation::default(),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(2.0),
            specular: Vec3::ONE
        }
    }
}

impl SpotLight {
    /// A switched off light still uploads its cone, only the colour terms
    /// drop to zero.
    pub fn write_uniforms(&self, prefix: &str, position: Vec3, direction: Vec3, enabled: bool, table: &mut UniformTable) {
        let intensity = if enabled { 1.0 } else { 0.0 };

        table.set_vec3(format!("{}position", prefix), position);
        table.set_vec3(format!("{}direction", prefix), direction);
        table.set_float(format!("{}cut_off", prefix), self.cut_off.to_radians().cos());
        table.set_float(format!("{}outer_cut_off", prefix), self.outer_cut_off.to_radians().cos());
        self.attenuation.write_uniforms(prefix, table);
        table.set_vec3(format!("{}ambient", prefix), self.ambient * intensity);
        table.set_vec3(format!("{}diffuse", prefix), self.diffuse * intensity);
        table.set_vec3(format!("{}specular", prefix), self.specular * intensity);
    }
}
