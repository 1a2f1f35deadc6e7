use glam::Vec3;
use serde::Deserialize;
use thiserror::Error;

#[cfg(feature = "trace")]
use tracing::{debug, error, instrument, warn};

use crate::camera::fly_camera::FlyCameraJSON;
use crate::lighting::{LightingConfig, LightingError};
use crate::load::{load_deserializable_from_file, LoadError};
use crate::scenes::lesson::Lesson;
use crate::scenes::scene_config::SceneConfigError::{DeserializeError, InvalidLighting, InvalidWindowSize};

pub const SCENE_LOAD_ID: &str = "scene";
pub const DEFAULT_SCENE_PATH: &str = "assets/JSON/scene.json";

pub const DEFAULT_WINDOW_TITLE: &str = "LearnOpenGL";
pub const DEFAULT_WINDOW_WIDTH: u32 = 1080;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 1080;
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.8, 0.55, 0.3, 1.0];

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_WINDOW_TITLE.to_string(),
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT
        }
    }
}

impl WindowConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Image files for the lighting maps. A missing entry gets a generated
/// placeholder.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    pub diffuse: Option<String>,
    pub specular: Option<String>
}

/// GLSL files replacing the built-in shaders.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ShaderConfig {
    pub vertex: Option<String>,
    pub lamp: Option<String>,
    pub basic_lighting: Option<String>,
    pub materials: Option<String>,
    pub lighting_maps: Option<String>,
    pub multiple_lights: Option<String>
}

impl ShaderConfig {
    pub fn fragment_override(&self, lesson: Lesson) -> Option<&str> {
        match lesson {
            Lesson::BasicLighting => self.basic_lighting.as_deref(),
            Lesson::Materials => self.materials.as_deref(),
            Lesson::LightingMaps => self.lighting_maps.as_deref(),
            Lesson::MultipleLights => self.multiple_lights.as_deref()
        }
    }
}

/// Everything the program reads at start-up.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub lesson: Lesson,
    pub clear_color: [f32; 4],
    pub camera: FlyCameraJSON,
    /// Where the focus and reset keys point the camera.
    pub focus_target: Vec3,
    pub cube_positions: Vec<Vec3>,
    pub lighting: LightingConfig,
    pub textures: TextureConfig,
    pub shaders: ShaderConfig
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            lesson: Lesson::default(),
            clear_color: DEFAULT_CLEAR_COLOR,
            camera: FlyCameraJSON::default(),
            focus_target: Vec3::ZERO,
            cube_positions: default_cube_positions(),
            lighting: LightingConfig::default(),
            textures: TextureConfig::default(),
            shaders: ShaderConfig::default()
        }
    }
}

impl SceneConfig {
    #[cfg_attr(feature = "trace", instrument)]
    pub fn load(path: &str) -> Result<Self, SceneConfigError> {
        let config: SceneConfig = load_deserializable_from_file(path, SCENE_LOAD_ID)
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to load scene config from file: {:?}", path);

                DeserializeError {
                    path: path.to_string(),
                    source: e
                }
            })?;

        config.validate()?;
        #[cfg(feature = "trace")]
        debug!("Loaded scene config from file: {:?}", path);

        Ok(config)
    }

    /// Like `load`, but a file that does not exist yields the defaults.
    #[cfg_attr(feature = "trace", instrument)]
    pub fn load_or_default(path: &str) -> Result<Self, SceneConfigError> {
        match Self::load(path) {
            Err(DeserializeError { ref source, .. }) if source.is_not_found() => {
                #[cfg(feature = "trace")]
                warn!("No scene config at {:?}. Using built-in defaults.", path);

                Ok(Self::default())
            },
            result => result
        }
    }

    pub fn validate(&self) -> Result<(), SceneConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(InvalidWindowSize {
                width: self.window.width,
                height: self.window.height
            })
        }

        self.lighting.validate()
            .map_err(|e| InvalidLighting { source: e })
    }
}

/// The ten cubes of the lighting scenes.
pub fn default_cube_positions() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 5.0, -15.0),
        Vec3::new(-1.5, -2.2, -2.5),
        Vec3::new(-3.8, -2.0, -12.3),
        Vec3::new(2.4, -0.4, -3.5),
        Vec3::new(-1.7, 3.0, -7.5),
        Vec3::new(1.3, -2.0, -2.5),
        Vec3::new(1.5, 2.0, -2.5),
        Vec3::new(1.5, 0.2, -1.5),
        Vec3::new(-1.3, 1.0, -1.5),
    ]
}

#[derive(Error, Debug)]
pub enum SceneConfigError {
    #[error("Failed to load scene config from file: {path}")]
    DeserializeError {
        path: String,
        source: LoadError
    },

    #[error("Window size {width}x{height} has a zero dimension")]
    InvalidWindowSize {
        width: u32,
        height: u32
    },

    #[error("Invalid lighting configuration")]
    InvalidLighting {
        source: LightingError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{parse_json_load, load_deserializable_from_json};

    fn parse(json: &str) -> Result<SceneConfig, LoadError> {
        load_deserializable_from_json(parse_json_load(json)?, SCENE_LOAD_ID)
    }

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse(r#"{"load_type_id": "scene", "actual_value": {}}"#).unwrap();
        assert_eq!(config, SceneConfig::default());
        assert_eq!(config.cube_positions.len(), 10);
    }

    #[test]
    fn partial_values_override_only_what_they_name() {
        let config = parse(r#"{
            "load_type_id": "scene",
            "actual_value": {
                "lesson": "materials",
                "window": {"width": 800},
                "lighting": {"spot_light": {"cut_off": 5.0}},
                "cube_positions": [[1.0, 2.0, 3.0]]
            }
        }"#).unwrap();

        assert_eq!(config.lesson, Lesson::Materials);
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.lighting.spot_light.cut_off, 5.0);
        assert_eq!(config.lighting.spot_light.outer_cut_off, 11.5);
        assert_eq!(config.cube_positions, vec![Vec3::new(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn zero_sized_window_fails_validation() {
        let mut config = SceneConfig::default();
        config.window.height = 0;
        assert!(matches!(config.validate(), Err(InvalidWindowSize { width: 1080, height: 0 })));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = SceneConfig::load_or_default("no/such/scene.json").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn missing_file_is_an_error_for_plain_load() {
        assert!(matches!(SceneConfig::load("no/such/scene.json"), Err(DeserializeError { .. })));
    }

    #[test]
    fn aspect_ratio_of_default_window_is_square() {
        assert_eq!(WindowConfig::default().aspect_ratio(), 1.0);
    }
}
