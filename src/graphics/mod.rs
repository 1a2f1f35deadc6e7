pub mod vertex;
pub mod transform;
pub mod shader;
pub mod tess;
pub mod texture;
pub mod render;
