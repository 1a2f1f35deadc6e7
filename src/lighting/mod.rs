pub mod lights;
pub mod material;
pub mod uniforms;

use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::lighting::lights::{DirectionalLight, PointLight, SpotLight, default_point_lights, MAX_POINT_LIGHTS};
use crate::lighting::material::{Material, MapMaterial};
use crate::lighting::LightingError::{TooManyPointLights, InvertedSpotCone, NoPointLights};

/// Every light and surface parameter the lessons draw from.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Flat cube colour of the basic lighting lesson.
    pub object_color: Vec3,
    pub material: Material,
    pub map_material: MapMaterial,
    pub directional: DirectionalLight,
    pub point_lights: Vec<PointLight>,
    pub spot_light: SpotLight,
    pub flashlight_on_start: bool
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            object_color: Vec3::new(1.0, 0.5, 0.31),
            material: Material::default(),
            map_material: MapMaterial::default(),
            directional: DirectionalLight::default(),
            point_lights: default_point_lights(),
            spot_light: SpotLight::default(),
            flashlight_on_start: false
        }
    }
}

impl LightingConfig {
    pub fn validate(&self) -> Result<(), LightingError> {
        if self.point_lights.is_empty() {
            return Err(NoPointLights)
        }

        if self.point_lights.len() > MAX_POINT_LIGHTS {
            return Err(TooManyPointLights {
                count: self.point_lights.len(),
                max: MAX_POINT_LIGHTS
            })
        }

        if self.spot_light.cut_off > self.spot_light.outer_cut_off {
            return Err(InvertedSpotCone {
                cut_off: self.spot_light.cut_off,
                outer_cut_off: self.spot_light.outer_cut_off
            })
        }

        Ok(())
    }

    /// The light the single-light lessons use.
    pub fn primary_light(&self) -> PointLight {
        self.point_lights.first().copied().unwrap_or_default()
    }
}

#[derive(Error, Debug)]
pub enum LightingError {
    #[error("At least one point light is required")]
    NoPointLights,

    #[error("{count} point lights configured but the shader holds at most {max}")]
    TooManyPointLights {
        count: usize,
        max: usize
    },

    #[error("Spot light inner cut off ({cut_off} degrees) is wider than its outer cut off ({outer_cut_off} degrees)")]
    InvertedSpotCone {
        cut_off: f32,
        outer_cut_off: f32
    }
}
