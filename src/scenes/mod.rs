pub mod lesson;
pub mod scene_config;
pub mod frame;

pub use lesson::Lesson;
pub use scene_config::SceneConfig;
pub use frame::FrameState;
