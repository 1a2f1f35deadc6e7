pub mod phong_renderer;

pub use phong_renderer::{PhongRenderer, RenderError, RendererLoadError};
