use anyhow::{Context, Result};

#[cfg(feature="trace")]
use tracing::info;

use lighting_lessons::game_loop::GameLoop;
use lighting_lessons::scenes::scene_config::{SceneConfig, DEFAULT_SCENE_PATH};

fn main() -> Result<()> {
    #[cfg(feature="trace")]
    let _guard = lighting_lessons::log::init_logger()?;

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(&path)
            .with_context(|| format!("Could not load scene from {}", path))?,
        None => SceneConfig::load_or_default(DEFAULT_SCENE_PATH)
            .context("Could not load the default scene")?
    };

    #[cfg(feature="trace")]
    info!("Starting lesson {:?} in a {}x{} window", config.lesson.name(), config.window.width, config.window.height);

    GameLoop::new(config).run()?;

    Ok(())
}
