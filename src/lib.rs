/*!
Rotating textured cubes, a tinted triangle and double pyramids, drawn with glium.

The scene is made of ten cubes blending a crate texture with a smiley face, a flat triangle
whose color slowly cycles, and three textured double pyramids sharing that color. Cubes and
pyramids spin around the `(1, 1, 0)` axis. The camera moves with W, A, S and D.

# Running

```no_run
use clap::Parser;

let config = glium_cubes::Config::parse();
config.validate().unwrap();
glium_cubes::window::run(config);
```

# Drawing on another surface

Everything that depends on time or on the camera is gathered in a `FrameState`, so a `Scene`
can draw on any glium `Surface`, for example a texture:

```no_run
# fn example(display: &glium::Display<glutin::surface::WindowSurface>) {
use glium_cubes::{Camera, FrameState, Scene, TextureSources};

let scene = Scene::new(display, &TextureSources::default()).unwrap();
let target = glium::Texture2d::empty(display, 1024, 768).unwrap();
let depth = glium::framebuffer::DepthRenderBuffer::new(
    display, glium::texture::DepthFormat::I24, 1024, 768).unwrap();
let mut framebuffer = glium::framebuffer::SimpleFrameBuffer::with_depth_buffer(
    display, &target, &depth).unwrap();

let frame = FrameState::new(&Camera::default(), (1024, 768), 0);
scene.draw(&mut framebuffer, &frame).unwrap();
# }
```

*/

pub mod animation;
pub mod camera;
pub mod config;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod shaders;
pub mod texture;
pub mod timer;
pub mod window;

pub use crate::camera::{Camera, Movement};
pub use crate::config::{Config, ConfigError, TextureSources};
pub use crate::scene::{FrameState, Scene, SceneCreationError};
pub use crate::texture::{Builtin, TextureError, TextureSource};
pub use crate::timer::RedrawTimer;
