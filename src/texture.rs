/*!
Images of the scene and their upload to the GPU.

Two images are used: a wooden crate covering the cubes, and a smiley face blended over it.
Both are available as built-in images so that the program runs without any asset on disk, and
both can be replaced by any file that the `image` crate can decode.

*/

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use glium::backend::Facade;
use glium::texture::{RawImage2d, Texture2d, TextureCreationError};
use image::{Rgb, RgbImage};

/// Side of the built-in images, in pixels.
pub const BUILTIN_SIZE: u32 = 128;

/// Images generated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Wooden planks in a metal frame.
    Container,
    /// Yellow smiley on a black background.
    Face,
}

/// Where the pixels of a texture come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureSource {
    Builtin(Builtin),
    File(PathBuf),
}

impl fmt::Display for TextureSource {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            TextureSource::Builtin(builtin) => write!(formatter, "built-in {:?}", builtin),
            TextureSource::File(path) => write!(formatter, "{}", path.display()),
        }
    }
}

/// Error that can happen while loading a texture.
#[derive(Debug)]
pub enum TextureError {
    /// The file couldn't be read or decoded.
    Decode {
        path: PathBuf,
        error: image::ImageError,
    },

    /// The decoded image has a zero width or height.
    Empty(PathBuf),

    /// The GPU refused the texture.
    Creation(TextureCreationError),
}

impl fmt::Display for TextureError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            TextureError::Decode { path, error } =>
                write!(formatter, "Could not load texture {}: {}", path.display(), error),
            TextureError::Empty(path) =>
                write!(formatter, "Texture {} has no pixels", path.display()),
            TextureError::Creation(error) =>
                write!(formatter, "Could not create texture: {}", error),
        }
    }
}

impl Error for TextureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TextureError::Decode { error, .. } => Some(error),
            TextureError::Empty(_) => None,
            TextureError::Creation(error) => Some(error),
        }
    }
}

impl From<TextureCreationError> for TextureError {
    fn from(error: TextureCreationError) -> TextureError {
        TextureError::Creation(error)
    }
}

impl TextureSource {
    /// Produces the pixels of this source, top row first.
    pub fn load(&self) -> Result<RgbImage, TextureError> {
        match self {
            TextureSource::Builtin(Builtin::Container) => Ok(container_image(BUILTIN_SIZE)),
            TextureSource::Builtin(Builtin::Face) => Ok(face_image(BUILTIN_SIZE)),
            TextureSource::File(path) => load_file(path),
        }
    }
}

fn load_file(path: &Path) -> Result<RgbImage, TextureError> {
    let image = image::open(path)
        .map_err(|error| TextureError::Decode { path: path.to_owned(), error })?
        .to_rgb8();

    if image.width() == 0 || image.height() == 0 {
        return Err(TextureError::Empty(path.to_owned()));
    }

    Ok(image)
}

/// Converts an image to the layout OpenGL expects, where the first row is the bottom one.
pub fn to_raw(image: RgbImage) -> RawImage2d<'static, u8> {
    let dimensions = image.dimensions();
    RawImage2d::from_raw_rgb_reversed(&image.into_raw(), dimensions)
}

/// Loads `source` and uploads it with a full mipmap chain.
pub fn upload<F: ?Sized + Facade>(facade: &F, source: &TextureSource) -> Result<Texture2d, TextureError> {
    let image = source.load()?;
    log::info!("loaded texture {} ({}x{})", source, image.width(), image.height());
    Ok(Texture2d::new(facade, to_raw(image))?)
}

/// Wooden planks surrounded by a metal frame, with a diagonal brace.
pub fn container_image(size: u32) -> RgbImage {
    let frame = (size / 16).max(1);
    let plank = (size / 6).max(1);

    RgbImage::from_fn(size, size, |x, y| {
        let on_frame = x < frame || y < frame || x >= size - frame || y >= size - frame;
        let on_brace = (x as i64 - y as i64).abs() < frame as i64;

        if on_frame {
            Rgb([120, 120, 110])
        } else if on_brace {
            Rgb([150, 100, 50])
        } else if (y - frame) % plank == 0 {
            // gap between two planks
            Rgb([70, 40, 20])
        } else {
            // a bit of grain along the planks
            let grain = ((x * 7 + y * 3) % 23) as u8;
            Rgb([170 + grain, 115 + grain / 2, 60])
        }
    })
}

/// Yellow disk with two eyes and a smile, on a black background.
pub fn face_image(size: u32) -> RgbImage {
    let s = size as f32;
    let center = s / 2.0;
    let radius = s * 0.44;
    let eye_radius = s * 0.08;
    let eyes = [(s * 0.34, s * 0.38), (s * 0.66, s * 0.38)];

    RgbImage::from_fn(size, size, |x, y| {
        let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
        let distance = ((px - center).powi(2) + (py - center).powi(2)).sqrt();

        if distance > radius {
            return Rgb([0, 0, 0]);
        }

        let on_eye = eyes.iter()
            .any(|&(ex, ey)| ((px - ex).powi(2) + (py - ey).powi(2)).sqrt() < eye_radius);
        let on_mouth = py > center + s * 0.05 && (distance - s * 0.27).abs() < s * 0.04;

        if on_eye || on_mouth {
            Rgb([60, 30, 0])
        } else {
            Rgb([250, 210, 30])
        }
    })
}
