use std::fs;

use lighting_lessons::camera::Camera;
use lighting_lessons::camera::fly_camera::FlyCamera;
use lighting_lessons::lighting::LightingConfig;
use lighting_lessons::load::LoadError;
use lighting_lessons::scenes::frame::FrameState;
use lighting_lessons::scenes::lesson::Lesson;
use lighting_lessons::scenes::scene_config::{SceneConfig, SceneConfigError, DEFAULT_SCENE_PATH};

fn write_temp(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn shipped_scene_matches_built_in_defaults() {
    let config = SceneConfig::load(DEFAULT_SCENE_PATH).unwrap();
    let defaults = SceneConfig::default();

    assert_eq!(config.window, defaults.window);
    assert_eq!(config.lesson, defaults.lesson);
    assert_eq!(config.clear_color, defaults.clear_color);
    assert_eq!(config.cube_positions, defaults.cube_positions);
    assert_eq!(config.lighting, LightingConfig::default());
    assert_eq!(config.textures, defaults.textures);
    assert_eq!(config.shaders, defaults.shaders);

    let camera = FlyCamera::from_json(&config.camera);
    let default_camera = FlyCamera::default();
    assert!(camera.position().abs_diff_eq(default_camera.position(), 1.0e-6));
    assert!(camera.front().abs_diff_eq(default_camera.front(), 1.0e-6));
    assert_eq!(camera.fov(), default_camera.fov());
}

#[test]
fn shipped_scene_renders_every_cube_and_lamp() {
    let config = SceneConfig::load(DEFAULT_SCENE_PATH).unwrap();
    let camera = FlyCamera::from_json(&config.camera);
    let frame = FrameState::build(&config, &camera, config.lesson, true, 0.0, config.window.aspect_ratio());

    assert_eq!(frame.lesson, Lesson::MultipleLights);
    assert_eq!(frame.cubes.len(), 10);
    assert_eq!(frame.lamps.len(), 4);
}

#[test]
fn wrong_load_type_id_is_rejected() {
    let path = write_temp("lighting_lessons_wrong_id.json", r#"{"load_type_id": "shader", "actual_value": {}}"#);

    match SceneConfig::load(&path) {
        Err(SceneConfigError::DeserializeError { source: LoadError::LoadIDError { .. }, .. }) => (),
        other => panic!("expected a load id error, got {:?}", other)
    }

    fs::remove_file(path).unwrap();
}

#[test]
fn too_many_point_lights_is_a_config_error() {
    let light = r#"{"position": [0.0, 0.0, 0.0], "color": [1.0, 1.0, 1.0]}"#;
    let lights = vec![light; 5].join(",");
    let path = write_temp(
        "lighting_lessons_five_lights.json",
        &format!(r#"{{"load_type_id": "scene", "actual_value": {{"lighting": {{"point_lights": [{}]}}}}}}"#, lights)
    );

    assert!(matches!(SceneConfig::load(&path), Err(SceneConfigError::InvalidLighting { .. })));

    fs::remove_file(path).unwrap();
}

#[test]
fn malformed_file_is_an_error_even_with_fallback() {
    let path = write_temp("lighting_lessons_malformed.json", "{ not json");

    assert!(SceneConfig::load_or_default(&path).is_err());

    fs::remove_file(path).unwrap();
}
