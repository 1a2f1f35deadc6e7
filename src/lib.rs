pub mod load;
pub mod camera;
pub mod input;
pub mod lighting;
pub mod scenes;
pub mod graphics;
pub mod game;
pub mod game_loop;

#[cfg(feature="trace")]
pub mod log;
