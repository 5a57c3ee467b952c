/*!
Command line configuration.

```no_run
use clap::Parser;
use glium_cubes::Config;

let config = Config::parse();
config.validate().unwrap();
```

*/

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::camera::DEFAULT_SPEED;
use crate::texture::{Builtin, TextureSource};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "glium-cubes", about = "Rotating textured cubes rendered with glium")]
pub struct Config {
    /// Title of the window
    #[arg(long, default_value = "glium cubes")]
    pub title: String,

    /// Initial width of the window, in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial height of the window, in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Period of the redraw timer, in milliseconds
    #[arg(long, default_value_t = 16)]
    pub frame_interval_ms: u64,

    /// Distance the camera moves on every key press
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub camera_speed: f32,

    /// Image used as the cube background instead of the built-in crate
    #[arg(long)]
    pub container_texture: Option<PathBuf>,

    /// Image blended over the cubes instead of the built-in face
    #[arg(long)]
    pub face_texture: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            title: "glium cubes".to_owned(),
            width: 800,
            height: 600,
            frame_interval_ms: 16,
            camera_speed: DEFAULT_SPEED,
            container_texture: None,
            face_texture: None,
            verbose: false,
        }
    }
}

/// Error returned by `Config::validate`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The window would have a zero width or height.
    EmptyWindow { width: u32, height: u32 },

    /// The redraw timer would fire continuously.
    ZeroFrameInterval,

    /// The camera speed is zero, negative or not finite.
    InvalidCameraSpeed(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ConfigError::EmptyWindow { width, height } =>
                write!(formatter, "Window dimensions must be non-zero, got {}x{}", width, height),
            ConfigError::ZeroFrameInterval =>
                formatter.write_str("The frame interval must be at least one millisecond"),
            ConfigError::InvalidCameraSpeed(speed) =>
                write!(formatter, "The camera speed must be a positive number, got {}", speed),
        }
    }
}

impl Error for ConfigError {}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyWindow { width: self.width, height: self.height });
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }

        if !self.camera_speed.is_finite() || self.camera_speed <= 0.0 {
            return Err(ConfigError::InvalidCameraSpeed(self.camera_speed));
        }

        Ok(())
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Where the two textures of the scene come from.
    pub fn texture_sources(&self) -> TextureSources {
        TextureSources {
            container: source_or(&self.container_texture, Builtin::Container),
            face: source_or(&self.face_texture, Builtin::Face),
        }
    }
}

/// The two images loaded at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSources {
    pub container: TextureSource,
    pub face: TextureSource,
}

impl Default for TextureSources {
    fn default() -> TextureSources {
        TextureSources {
            container: TextureSource::Builtin(Builtin::Container),
            face: TextureSource::Builtin(Builtin::Face),
        }
    }
}

fn source_or(path: &Option<PathBuf>, builtin: Builtin) -> TextureSource {
    match path {
        Some(path) => TextureSource::File(path.clone()),
        None => TextureSource::Builtin(builtin),
    }
}
