#[cfg(feature = "trace")]
use tracing::{debug, error, info, instrument};

use glfw::{Context as _, CursorMode, WindowEvent};
use luminance_glfw::{GlfwSurface, GlfwSurfaceError};
use luminance_windowing::{WindowDim, WindowOpt};
use thiserror::Error;

use crate::game::{Game, GameControl, GameError};
use crate::game_loop::GameLoopError::{GameDrawError, GameLoadFailure, SurfaceCreationError};
use crate::input::Input;
use crate::input::multi_input::MultiInput;
use crate::scenes::scene_config::SceneConfig;

#[derive(Debug)]
pub struct GameLoop {
    config: SceneConfig
}

impl GameLoop {
    pub fn new(config: SceneConfig) -> Self {
        Self { config }
    }

    #[cfg_attr(feature = "trace", instrument(skip(self)))]
    pub fn run(self) -> Result<(), GameLoopError> {
        #[cfg(feature = "trace")]
        debug!("ENTER: GameLoop::run");

        let window = &self.config.window;
        let options = WindowOpt::default()
            .set_dim(WindowDim::Windowed {
                width: window.width,
                height: window.height
            });

        let surface = GlfwSurface::new_gl33(window.title.clone(), options)
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("An error occurred while creating the GlfwSurface");

                SurfaceCreationError { source: e }
            })?;

        #[cfg(feature = "trace")]
        debug!("GlfwSurface created. Calling main loop");

        self.main_loop(surface)?;

        #[cfg(feature = "trace")]
        debug!("EXIT: Returned from main loop. Exiting GameLoop::run");

        Ok(())
    }

    #[cfg_attr(feature = "trace", instrument(skip(self, surface)))]
    fn main_loop(self, surface: GlfwSurface) -> Result<(), GameLoopError> {
        let mut context = surface.context;
        let events = surface.events_rx;

        context.window.set_cursor_mode(CursorMode::Disabled);

        let mut input = MultiInput::new();
        let mut game = Game::load(self.config, &mut context)
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to load game: {:?}", e);

                GameLoadFailure { source: e }
            })?;

        let (width, height) = context.window.get_framebuffer_size();
        game.set_framebuffer_size(width, height);

        #[cfg(feature = "trace")]
        info!("Setup complete. Entering game loop.");
        loop {
            context.window.glfw.poll_events();

            for (_time, event) in glfw::flush_messages(&events) {
                match event {
                    WindowEvent::Close => {
                        #[cfg(feature = "trace")]
                        debug!("Window closed. Returning without error");

                        return Ok(())
                    },
                    WindowEvent::FramebufferSize(width, height) => {
                        #[cfg(feature = "trace")]
                        debug!("Framebuffer resized to {}x{}", width, height);

                        game.set_framebuffer_size(width, height);
                    },
                    event => input.update(event)
                }
            }

            let delta_time = game.update(context.window.glfw.get_time());

            if game.interact(&input, delta_time) == GameControl::Quit {
                #[cfg(feature = "trace")]
                debug!("EXIT: GameLoop::main_loop. Game asked to quit.");

                return Ok(())
            }

            game.draw(&mut context)
                .map_err(|e| {
                    #[cfg(feature = "trace")]
                    error!("Error occurred while running Game::draw");

                    GameDrawError { source: e }
                })?;

            context.window.swap_buffers();
            input.clear();
        }
    }
}

#[derive(Error, Debug)]
pub enum GameLoopError {
    #[error("Failed to create GlfwSurface")]
    SurfaceCreationError { source: GlfwSurfaceError },
    #[error("Game failed to load")]
    GameLoadFailure { source: GameError },
    #[error("Error occurred while running Game::draw")]
    GameDrawError { source: GameError }
}
