use std::borrow::Cow;
use std::fs::read_to_string;

use luminance_derive::UniformInterface;
use luminance_front::context::GraphicsContext;
use luminance_front::shader::{Program, ProgramError, Uniform};
use luminance_glfw::GL33Context;
use thiserror::Error;

#[cfg(feature = "trace")]
use tracing::{debug, error, instrument};

use crate::graphics::shader::ShaderLoadError::{FileReadError, ProgramBuildError};
use crate::graphics::vertex::VertexSemantics;
use crate::scenes::lesson::Lesson;
use crate::scenes::scene_config::ShaderConfig;

pub const LIT_VS: &str = include_str!("shaders/lit-vs.glsl");
pub const LAMP_FS: &str = include_str!("shaders/lamp-fs.glsl");
pub const BASIC_LIGHTING_FS: &str = include_str!("shaders/basic-lighting-fs.glsl");
pub const MATERIALS_FS: &str = include_str!("shaders/materials-fs.glsl");
pub const LIGHTING_MAPS_FS: &str = include_str!("shaders/lighting-maps-fs.glsl");
pub const MULTIPLE_LIGHTS_FS: &str = include_str!("shaders/multiple-lights-fs.glsl");

/// Matrices shared by every lit program. Lighting uniforms are looked up by
/// name at draw time.
#[derive(Debug, UniformInterface)]
pub struct ObjectShaderUniform {
    #[uniform(unbound)]
    pub projection: Uniform<[[f32; 4]; 4]>,
    #[uniform(unbound)]
    pub view: Uniform<[[f32; 4]; 4]>,
    #[uniform(unbound)]
    pub model: Uniform<[[f32; 4]; 4]>,
    /// Inverse transpose of the model's upper 3x3.
    #[uniform(unbound)]
    pub normal_model: Uniform<[[f32; 3]; 3]>
}

#[derive(Debug, UniformInterface)]
pub struct LampShaderUniform {
    #[uniform(unbound)]
    pub projection: Uniform<[[f32; 4]; 4]>,
    #[uniform(unbound)]
    pub view: Uniform<[[f32; 4]; 4]>,
    #[uniform(unbound)]
    pub model: Uniform<[[f32; 4]; 4]>,
    #[uniform(unbound)]
    pub light_color: Uniform<[f32; 3]>
}

pub type ObjectProgram = Program<VertexSemantics, (), ObjectShaderUniform>;
pub type LampProgram = Program<VertexSemantics, (), LampShaderUniform>;

/// GLSL text of one program, either built in or read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    pub vertex: Cow<'static, str>,
    pub fragment: Cow<'static, str>
}

impl ShaderSource {
    #[cfg_attr(feature = "trace", instrument)]
    pub fn for_lesson(config: &ShaderConfig, lesson: Lesson) -> Result<Self, ShaderLoadError> {
        Ok(Self {
            vertex: read_or_builtin(config.vertex.as_deref(), LIT_VS)?,
            fragment: read_or_builtin(config.fragment_override(lesson), lesson.fragment_shader())?
        })
    }

    #[cfg_attr(feature = "trace", instrument)]
    pub fn for_lamp(config: &ShaderConfig) -> Result<Self, ShaderLoadError> {
        Ok(Self {
            vertex: read_or_builtin(config.vertex.as_deref(), LIT_VS)?,
            fragment: read_or_builtin(config.lamp.as_deref(), LAMP_FS)?
        })
    }
}

/// Contents of `path` when one is given, `builtin` otherwise.
pub fn read_or_builtin(path: Option<&str>, builtin: &'static str) -> Result<Cow<'static, str>, ShaderLoadError> {
    match path {
        None => Ok(Cow::Borrowed(builtin)),
        Some(path) => {
            let source = read_to_string(path)
                .map_err(|e| {
                    #[cfg(feature = "trace")]
                    error!("Failed to read shader file: {:?}", path);

                    FileReadError {
                        source: e,
                        path: path.to_string()
                    }
                })?;
            #[cfg(feature = "trace")]
            debug!("Read in shader from file: {:?}", path);

            Ok(Cow::Owned(source))
        }
    }
}

pub struct ShaderLoader;

impl ShaderLoader {
    #[cfg_attr(feature = "trace", instrument(skip(context, config)))]
    pub fn load_lesson(context: &mut GL33Context, config: &ShaderConfig, lesson: Lesson) -> Result<ObjectProgram, ShaderLoadError> {
        let source = ShaderSource::for_lesson(config, lesson)?;

        Ok(context
            .new_shader_program::<VertexSemantics, (), ObjectShaderUniform>()
            .from_strings(&source.vertex, None, None, &source.fragment)
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to build shader program for lesson: {:?}", lesson.name());

                ProgramBuildError {
                    source: e,
                    program: lesson.name().to_string()
                }
            })?
            .ignore_warnings())
    }

    #[cfg_attr(feature = "trace", instrument(skip(context, config)))]
    pub fn load_lamp(context: &mut GL33Context, config: &ShaderConfig) -> Result<LampProgram, ShaderLoadError> {
        let source = ShaderSource::for_lamp(config)?;

        Ok(context
            .new_shader_program::<VertexSemantics, (), LampShaderUniform>()
            .from_strings(&source.vertex, None, None, &source.fragment)
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to build lamp shader program");

                ProgramBuildError {
                    source: e,
                    program: String::from("lamp")
                }
            })?
            .ignore_warnings())
    }
}

#[derive(Error, Debug)]
pub enum ShaderLoadError {
    #[error("Failed to read shader source from file: {path}")]
    FileReadError {
        source: std::io::Error,
        path: String
    },

    #[error("Failed to build shader program: {program}")]
    ProgramBuildError {
        source: ProgramError,
        program: String
    }
}
