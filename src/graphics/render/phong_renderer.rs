use luminance_front::{
    context::GraphicsContext,
    framebuffer::FramebufferError,
    pipeline::{BoundTexture, PipelineError, PipelineState, TextureBinding},
    pixel::{NormRGBA8UI, NormUnsigned},
    render_state::RenderState,
    shader::{ProgramError, ProgramInterface, Uniform},
    tess::TessError,
    texture::Dim2
};
use luminance_glfw::GL33Context;
use thiserror::Error;

#[cfg(feature = "trace")]
use tracing::{debug, error, instrument, trace};

use crate::graphics::render::phong_renderer::RendererLoadError::{CubeTessError, MapLoadError, ProgramLoadError};
use crate::graphics::render::phong_renderer::RenderError::{BackBufferError, MissingProgram};
use crate::graphics::shader::{LampProgram, ObjectProgram, ShaderLoadError, ShaderLoader};
use crate::graphics::tess::{CubeTess, TessLoadError, TessLoader};
use crate::graphics::texture::{LightingMap, TextureError, TextureImage};
use crate::lighting::uniforms::{MapSlot, UniformTable, UniformValue};
use crate::scenes::frame::FrameState;
use crate::scenes::lesson::Lesson;
use crate::scenes::scene_config::SceneConfig;

/// GPU side of the lighting scenes: the cube mesh, a program per lesson,
/// the lamp program and both lighting maps.
pub struct PhongRenderer {
    render_state: RenderState,
    tess: CubeTess,
    /// Indexed by `Lesson::index`.
    lesson_programs: Vec<ObjectProgram>,
    lamp_program: LampProgram,
    diffuse_map: LightingMap,
    specular_map: LightingMap
}

impl PhongRenderer {
    #[cfg_attr(feature = "trace", instrument(skip(context, config)))]
    pub fn load(context: &mut GL33Context, config: &SceneConfig) -> Result<Self, RendererLoadError> {
        let tess = TessLoader::load_cube(context)
            .map_err(|e| CubeTessError { source: e })?;
        #[cfg(feature = "trace")]
        debug!("Loaded cube Tess");

        let lesson_programs = Lesson::ALL.iter()
            .map(|lesson| ShaderLoader::load_lesson(context, &config.shaders, *lesson))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ProgramLoadError { source: e })?;

        let lamp_program = ShaderLoader::load_lamp(context, &config.shaders)
            .map_err(|e| ProgramLoadError { source: e })?;
        #[cfg(feature = "trace")]
        debug!("Built {} lesson programs and the lamp program", lesson_programs.len());

        let diffuse_map = Self::load_map(context, config.textures.diffuse.as_deref(), MapSlot::Diffuse)?;
        let specular_map = Self::load_map(context, config.textures.specular.as_deref(), MapSlot::Specular)?;

        Ok(Self {
            render_state: RenderState::default(),
            tess,
            lesson_programs,
            lamp_program,
            diffuse_map,
            specular_map
        })
    }

    fn load_map(context: &mut GL33Context, path: Option<&str>, slot: MapSlot) -> Result<LightingMap, RendererLoadError> {
        TextureImage::load_or_placeholder(path, slot)
            .and_then(|image| image.upload(context))
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to load {:?} lighting map", slot);

                MapLoadError { source: e, slot }
            })
    }

    /// Clears the back buffer, then draws the lit cubes with the frame's
    /// lesson program followed by the lamps.
    #[cfg_attr(feature = "trace", instrument(skip(self, context, frame)))]
    pub fn render(&mut self, context: &mut GL33Context, frame: &FrameState) -> Result<(), RenderError> {
        let back_buffer = context.back_buffer()
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to get back buffer");

                BackBufferError { source: e }
            })?;

        let render_state = &self.render_state;
        let tess = &self.tess;
        let lamp_program = &mut self.lamp_program;
        let diffuse_map = &mut self.diffuse_map;
        let specular_map = &mut self.specular_map;
        let program = self.lesson_programs
            .get_mut(frame.lesson.index())
            .ok_or_else(|| MissingProgram { lesson: frame.lesson.name().to_string() })?;

        let projection = frame.projection.to_cols_array_2d();
        let view = frame.view.to_cols_array_2d();
        let pipeline_state = PipelineState::default().set_clear_color(frame.clear_color);

        context
            .new_pipeline_gate()
            .pipeline(&back_buffer, &pipeline_state, |pipeline, mut shd_gate| -> Result<(), RenderError> {
                let diffuse = pipeline.bind_texture(diffuse_map)?;
                let specular = pipeline.bind_texture(specular_map)?;

                shd_gate.shade(program, |mut iface, uni, mut rdr_gate| -> Result<(), RenderError> {
                    #[cfg(feature = "trace")]
                    trace!("Shading {} cubes for lesson {:?}", frame.cubes.len(), frame.lesson.name());

                    iface.set(&uni.projection, projection);
                    iface.set(&uni.view, view);
                    upload_lighting(&mut iface, &frame.lighting, &diffuse, &specular)?;

                    for cube in &frame.cubes {
                        iface.set(&uni.model, cube.model.to_cols_array_2d());
                        iface.set(&uni.normal_model, cube.normal.to_cols_array_2d());

                        rdr_gate.render(render_state, |mut tess_gate| -> Result<(), RenderError> {
                            tess_gate.render(tess)
                        })?;
                    }

                    Ok(())
                })?;

                shd_gate.shade(lamp_program, |mut iface, uni, mut rdr_gate| -> Result<(), RenderError> {
                    iface.set(&uni.projection, projection);
                    iface.set(&uni.view, view);

                    for lamp in &frame.lamps {
                        iface.set(&uni.model, lamp.model.to_cols_array_2d());
                        iface.set(&uni.light_color, lamp.color.to_array());

                        rdr_gate.render(render_state, |mut tess_gate| -> Result<(), RenderError> {
                            tess_gate.render(tess)
                        })?;
                    }

                    Ok(())
                })
            })
            .into_result()
    }
}

/// Sets every entry of `lighting` on the bound program by name. Names the
/// program does not declare are skipped.
fn upload_lighting(
    iface: &mut ProgramInterface,
    lighting: &UniformTable,
    diffuse: &BoundTexture<Dim2, NormRGBA8UI>,
    specular: &BoundTexture<Dim2, NormRGBA8UI>
) -> Result<(), RenderError> {
    for (name, value) in lighting.iter() {
        match *value {
            UniformValue::Int(v) => {
                let uniform: Uniform<i32> = iface.query()?.ask_or_unbound(name);
                iface.set(&uniform, v);
            },
            UniformValue::Float(v) => {
                let uniform: Uniform<f32> = iface.query()?.ask_or_unbound(name);
                iface.set(&uniform, v);
            },
            UniformValue::Vec3(v) => {
                let uniform: Uniform<[f32; 3]> = iface.query()?.ask_or_unbound(name);
                iface.set(&uniform, v.to_array());
            },
            UniformValue::Sampler(slot) => {
                let bound = match slot {
                    MapSlot::Diffuse => diffuse,
                    MapSlot::Specular => specular
                };
                let uniform: Uniform<TextureBinding<Dim2, NormUnsigned>> = iface.query()?.ask_or_unbound(name);
                iface.set(&uniform, bound.binding());
            }
        }
    }

    Ok(())
}

#[derive(Error, Debug)]
pub enum RendererLoadError {
    #[error("Failed to build the cube mesh")]
    CubeTessError {
        source: TessLoadError
    },

    #[error("Failed to load a shader program")]
    ProgramLoadError {
        source: ShaderLoadError
    },

    #[error("Failed to load the {slot:?} lighting map")]
    MapLoadError {
        source: TextureError,
        slot: MapSlot
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to get the back buffer")]
    BackBufferError {
        source: FramebufferError
    },

    #[error("An error occurred in the pipeline")]
    PipelineRenderError {
        source: PipelineError
    },

    #[error("An error occurred while rendering the tess gate")]
    TessRenderError {
        source: TessError
    },

    #[error("Failed to query uniforms of the bound program")]
    UniformQueryError {
        source: ProgramError
    },

    #[error("No shader program was built for lesson {lesson}")]
    MissingProgram {
        lesson: String
    }
}

impl From<PipelineError> for RenderError {
    fn from(e: PipelineError) -> Self {
        Self::PipelineRenderError { source: e }
    }
}

impl From<TessError> for RenderError {
    fn from(e: TessError) -> Self {
        Self::TessRenderError { source: e }
    }
}

impl From<ProgramError> for RenderError {
    fn from(e: ProgramError) -> Self {
        Self::UniformQueryError { source: e }
    }
}
