use std::path::Path;

use image::io::Reader;
use image::ImageError;
use luminance_front::pixel::NormRGBA8UI;
use luminance_front::texture::{Dim2, GenMipmaps, MagFilter, MinFilter, Sampler, Texture, TextureError as GpuTextureError, Wrap};
use luminance_glfw::GL33Context;
use thiserror::Error;

#[cfg(feature = "trace")]
use tracing::{debug, error, instrument, warn};

use crate::graphics::texture::TextureError::{DecodeError, EmptyImage, ReaderFailedToOpen, UploadError};
use crate::lighting::uniforms::MapSlot;

pub type LightingMap = Texture<Dim2, NormRGBA8UI>;

pub const PLACEHOLDER_SIZE: u32 = 64;
const PLACEHOLDER_BORDER: u32 = 6;
const PLACEHOLDER_TILE: u32 = 16;

/// Decoded RGBA8 pixels, bottom row first as GL expects them.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub texels: Vec<u8>
}

impl TextureImage {
    pub const SAMPLER: Sampler = Sampler {
        wrap_r: Wrap::Repeat,
        wrap_s: Wrap::Repeat,
        wrap_t: Wrap::Repeat,
        min_filter: MinFilter::LinearMipmapLinear,
        mag_filter: MagFilter::Linear,
        depth_comparison: None
    };

    #[cfg_attr(feature = "trace", instrument)]
    pub fn from_file(path: &str) -> Result<Self, TextureError> {
        let dynamic_image = Reader::open(Path::new(path))
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Could not open image file: {:?}", path);

                ReaderFailedToOpen {
                    path: path.to_string(),
                    source: e
                }
            })?
            .decode()
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Could not decode image file: {:?}", path);

                DecodeError {
                    path: path.to_string(),
                    source: e
                }
            })?;

        // Image rows start at the top, GL texture rows at the bottom.
        let rgba = dynamic_image.flipv().into_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(EmptyImage { path: path.to_string() })
        }

        #[cfg(feature = "trace")]
        debug!("Decoded {}x{} image from file: {:?}", width, height, path);

        Ok(Self {
            width,
            height,
            texels: rgba.into_raw()
        })
    }

    /// Generated stand-in for a lighting map: a wooden checkerboard for the
    /// diffuse slot, a bright metal rim around a dark centre for the
    /// specular slot.
    pub fn placeholder(slot: MapSlot) -> Self {
        let size = PLACEHOLDER_SIZE;
        let mut texels = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                let on_border = x < PLACEHOLDER_BORDER || y < PLACEHOLDER_BORDER
                    || x >= size - PLACEHOLDER_BORDER || y >= size - PLACEHOLDER_BORDER;

                let pixel = match slot {
                    MapSlot::Diffuse if on_border => [120, 120, 125, 255],
                    MapSlot::Diffuse if (x / PLACEHOLDER_TILE + y / PLACEHOLDER_TILE) % 2 == 0 => [150, 100, 55, 255],
                    MapSlot::Diffuse => [125, 80, 40, 255],
                    MapSlot::Specular if on_border => [230, 230, 230, 255],
                    MapSlot::Specular => [0, 0, 0, 255]
                };
                texels.extend_from_slice(&pixel);
            }
        }

        Self {
            width: size,
            height: size,
            texels
        }
    }

    /// The image at `path`, or the slot's placeholder when no path is set.
    #[cfg_attr(feature = "trace", instrument)]
    pub fn load_or_placeholder(path: Option<&str>, slot: MapSlot) -> Result<Self, TextureError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                #[cfg(feature = "trace")]
                warn!("No image configured for {:?} map. Generating placeholder.", slot);

                Ok(Self::placeholder(slot))
            }
        }
    }

    /// Number of mipmap levels below the base level.
    pub fn mipmap_levels(&self) -> usize {
        let largest = self.width.max(self.height).max(1);
        (32 - largest.leading_zeros() - 1) as usize
    }

    #[cfg_attr(feature = "trace", instrument(skip(self, context)))]
    pub fn upload(&self, context: &mut GL33Context) -> Result<LightingMap, TextureError> {
        Texture::new_raw(
            context,
            [self.width, self.height],
            self.mipmap_levels(),
            Self::SAMPLER,
            GenMipmaps::Yes,
            &self.texels
        )
            .map_err(|e| {
                #[cfg(feature = "trace")]
                error!("Failed to upload {}x{} texture", self.width, self.height);

                UploadError { source: e }
            })
    }
}

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Could not open image file at {path}")]
    ReaderFailedToOpen {
        path: String,
        source: std::io::Error
    },

    #[error("Could not decode image file at {path}")]
    DecodeError {
        path: String,
        source: ImageError
    },

    #[error("Image file at {path} has no pixels")]
    EmptyImage {
        path: String
    },

    #[error("Failed to upload texture to the GPU")]
    UploadError {
        source: GpuTextureError
    }
}
