#[cfg(feature = "trace")]
use tracing::{debug, error, instrument};

use luminance_front::context::GraphicsContext;
use luminance_front::tess::{Mode, Tess, TessError};
use luminance_glfw::GL33Context;
use thiserror::Error;

use crate::graphics::tess::TessLoadError::TessBuildError;
use crate::graphics::vertex::{cube_vertices, CubeVertex};

pub type CubeTess = Tess<CubeVertex>;

pub struct TessLoader;

impl TessLoader {
    /// The lit cubes and the lamps share this one mesh.
    #[cfg_attr(feature = "trace", instrument(skip(context)))]
    pub fn load_cube(context: &mut GL33Context) -> Result<CubeTess, TessLoadError> {
        let vertices = cube_vertices();
        #[cfg(feature = "trace")]
        debug!("Building cube Tess from {} vertices", vertices.len());

        context
            .new_tess()
            .set_vertices(vertices)
            .set_mode(Mode::Triangle)
            .build()
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to build cube Tess");

                TessBuildError { source: e }
            })
    }
}

#[derive(Error, Debug)]
pub enum TessLoadError {
    #[error("Failed to build Tesselation")]
    TessBuildError {
        source: TessError
    }
}
