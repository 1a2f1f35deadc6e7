use luminance_glfw::GL33Context;
use thiserror::Error;

#[cfg(feature = "trace")]
use tracing::{debug, error, info, instrument, trace};

use crate::camera::fly_camera::FlyCamera;
use crate::game::GameError::{GameDrawError, GameLoadError};
use crate::graphics::render::{PhongRenderer, RenderError, RendererLoadError};
use crate::input::bindings::KeyBindings;
use crate::input::latch::ToggleLatch;
use crate::input::multi_input::MultiInput;
use crate::scenes::frame::FrameState;
use crate::scenes::lesson::Lesson;
use crate::scenes::scene_config::SceneConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameControl {
    Continue,
    Quit
}

/// Turns absolute timestamps into per-frame deltas.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameClock {
    last: Option<f64>
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick. The first tick, and a clock that
    /// runs backwards, yield zero.
    pub fn tick(&mut self, now: f64) -> f32 {
        let delta = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0
        };
        self.last = Some(now);

        delta
    }
}

/// All state of one run of the program.
pub struct Game {
    config: SceneConfig,
    bindings: KeyBindings,
    camera: FlyCamera,
    flashlight: ToggleLatch,
    lesson: Lesson,
    clock: FrameClock,
    elapsed: f32,
    aspect_ratio: f32,
    renderer: Option<PhongRenderer>
}

impl Game {
    /// State without any GPU resources. `draw` is a no-op on it.
    pub fn new(config: SceneConfig) -> Self {
        Self {
            bindings: KeyBindings::default(),
            camera: FlyCamera::from_json(&config.camera),
            flashlight: ToggleLatch::new(config.lighting.flashlight_on_start),
            lesson: config.lesson,
            clock: FrameClock::new(),
            elapsed: 0.0,
            aspect_ratio: config.window.aspect_ratio(),
            renderer: None,
            config
        }
    }

    #[cfg_attr(feature = "trace", instrument(skip(config, context)))]
    pub fn load(config: SceneConfig, context: &mut GL33Context) -> Result<Self, GameError> {
        let renderer = PhongRenderer::load(context, &config)
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to load renderer: {:?}", e);

                GameLoadError { source: e }
            })?;
        #[cfg(feature = "trace")]
        info!("Game loaded. Starting with lesson {:?}", config.lesson.name());

        let mut game = Self::new(config);
        game.renderer = Some(renderer);

        Ok(game)
    }

    /// Applies one frame of input. `delta_time` is in seconds.
    #[cfg_attr(feature = "trace", instrument(skip(self, input)))]
    pub fn interact(&mut self, input: &MultiInput, delta_time: f32) -> GameControl {
        if input.was_key_pressed(self.bindings.quit) {
            #[cfg(feature = "trace")]
            debug!("Quit key pressed");

            return GameControl::Quit
        }

        self.camera.set_sprinting(input.is_key_down(self.bindings.sprint));
        for (key, movement) in self.bindings.movement().iter() {
            if input.is_key_down(*key) {
                self.camera.process_movement(*movement, delta_time);
            }
        }

        if input.was_key_pressed(self.bindings.focus) {
            self.camera.look_at_position(self.config.focus_target);
        }
        if input.was_key_pressed(self.bindings.reset) {
            self.camera.reset(self.config.camera.initial_position(), self.config.focus_target);
        }

        if self.flashlight.update(input.is_button_down(self.bindings.flashlight)) {
            #[cfg(feature = "trace")]
            debug!("Flashlight toggled. on={}", self.flashlight.is_on());
        }

        for (index, key) in self.bindings.lessons.iter().enumerate() {
            if input.was_key_pressed(*key) {
                if let Some(lesson) = Lesson::from_index(index) {
                    #[cfg(feature = "trace")]
                    debug!("Switching to lesson {:?}", lesson.name());

                    self.lesson = lesson;
                }
            }
        }

        let offset = input.get_cursor_offset();
        if offset.x != 0.0 || offset.y != 0.0 {
            self.camera.process_mouse_movement(offset.x as f32, offset.y as f32, true);
        }

        let wheel = input.get_wheel_movement();
        if wheel.vertical != 0.0 {
            self.camera.process_scroll(wheel.vertical as f32);
        }

        GameControl::Continue
    }

    /// Advances the clock to `now` (seconds) and returns the frame delta.
    pub fn update(&mut self, now: f64) -> f32 {
        let delta = self.clock.tick(now);
        self.elapsed += delta;
        #[cfg(feature = "trace")]
        trace!("Frame delta: {}, elapsed: {}", delta, self.elapsed);

        delta
    }

    pub fn set_framebuffer_size(&mut self, width: i32, height: i32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState::build(
            &self.config,
            &self.camera,
            self.lesson,
            self.flashlight.is_on(),
            self.elapsed,
            self.aspect_ratio
        )
    }

    #[cfg_attr(feature = "trace", instrument(skip(self, context)))]
    pub fn draw(&mut self, context: &mut GL33Context) -> Result<(), GameError> {
        let frame = self.frame_state();

        match self.renderer.as_mut() {
            Some(renderer) => renderer.render(context, &frame)
                .map_err(|e| {
                    #[cfg(feature = "trace")]
                    error!("Error during draw: {:?}", e);

                    GameDrawError { source: e }
                }),
            None => Ok(())
        }
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn lesson(&self) -> Lesson {
        self.lesson
    }

    pub fn flashlight_on(&self) -> bool {
        self.flashlight.is_on()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Game failed to load")]
    GameLoadError { source: RendererLoadError },
    #[error("Error during draw")]
    GameDrawError { source: RenderError }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::input::Input;
    use glam::Vec3;
    use glfw::{Action, Key, Modifiers, MouseButton, WindowEvent};

    fn press(input: &mut MultiInput, key: Key) {
        input.update(WindowEvent::Key(key, 0, Action::Press, Modifiers::empty()));
    }

    fn release(input: &mut MultiInput, key: Key) {
        input.update(WindowEvent::Key(key, 0, Action::Release, Modifiers::empty()));
    }

    fn click(input: &mut MultiInput, action: Action) {
        input.update(WindowEvent::MouseButton(MouseButton::Button1, action, Modifiers::empty()));
    }

    #[test]
    fn frame_clock_starts_at_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(10.0), 0.0);
        assert_eq!(clock.tick(10.5), 0.5);
        assert_eq!(clock.tick(10.25), 0.0);
    }

    #[test]
    fn holding_forward_moves_the_camera() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        press(&mut input, Key::W);

        assert_eq!(game.interact(&input, 1.0), GameControl::Continue);
        assert!(game.camera().position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1.0e-5));
    }

    #[test]
    fn sprint_doubles_the_step() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        press(&mut input, Key::LeftShift);
        press(&mut input, Key::S);

        game.interact(&input, 0.2);
        assert!(game.camera().position().abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1.0e-5));
    }

    #[test]
    fn escape_quits() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        press(&mut input, Key::Escape);

        assert_eq!(game.interact(&input, 0.0), GameControl::Quit);
    }

    #[test]
    fn flashlight_toggles_once_per_click() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        let start = game.flashlight_on();

        click(&mut input, Action::Press);
        game.interact(&input, 0.0);
        input.clear();
        game.interact(&input, 0.0);
        assert_eq!(game.flashlight_on(), !start);

        click(&mut input, Action::Release);
        game.interact(&input, 0.0);
        input.clear();
        click(&mut input, Action::Press);
        game.interact(&input, 0.0);
        assert_eq!(game.flashlight_on(), start);
    }

    #[test]
    fn number_keys_switch_lessons() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        press(&mut input, Key::Num2);

        game.interact(&input, 0.0);
        assert_eq!(game.lesson(), Lesson::Materials);
        assert_eq!(game.frame_state().lesson, Lesson::Materials);
    }

    #[test]
    fn reset_returns_to_start_facing_the_focus_target() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        press(&mut input, Key::D);
        game.interact(&input, 2.0);
        release(&mut input, Key::D);
        input.clear();

        press(&mut input, Key::R);
        game.interact(&input, 0.0);

        assert!(game.camera().position().abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), 1.0e-5));
        assert!(game.camera().front().abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1.0e-5));
    }

    #[test]
    fn first_cursor_event_does_not_turn_the_camera() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        let yaw = game.camera().yaw();

        input.update(WindowEvent::CursorPos(400.0, 300.0));
        game.interact(&input, 0.0);
        assert_eq!(game.camera().yaw(), yaw);
        input.clear();

        input.update(WindowEvent::CursorPos(410.0, 300.0));
        game.interact(&input, 0.0);
        assert!((game.camera().yaw() - (yaw + 1.0)).abs() < 1.0e-4);
    }

    #[test]
    fn scrolling_up_narrows_the_view() {
        let mut game = Game::new(SceneConfig::default());
        let mut input = MultiInput::new();
        input.update(WindowEvent::Scroll(0.0, 5.0));

        game.interact(&input, 0.0);
        assert_eq!(game.camera().fov(), 40.0);
    }

    #[test]
    fn update_accumulates_elapsed_time() {
        let mut game = Game::new(SceneConfig::default());
        game.update(1.0);
        game.update(1.5);
        assert_eq!(game.update(2.0), 0.5);
        assert_eq!(game.elapsed(), 1.0);
    }

    #[test]
    fn framebuffer_resize_updates_aspect_ratio() {
        let mut game = Game::new(SceneConfig::default());
        game.set_framebuffer_size(1600, 800);
        assert_eq!(game.aspect_ratio(), 2.0);

        game.set_framebuffer_size(0, 0);
        assert_eq!(game.aspect_ratio(), 2.0);
    }
}
