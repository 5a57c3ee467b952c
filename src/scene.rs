/*!
GPU resources of the scene and the drawing of one frame.

All buffers, textures and programs are created once by `Scene::new` and released when the
`Scene` is dropped.

```no_run
# fn example(display: &glium::Display<glutin::surface::WindowSurface>) {
use glium::Surface;
use glium_cubes::{Camera, FrameState, Scene, TextureSources};

let scene = Scene::new(display, &TextureSources::default()).unwrap();

let mut target = display.draw();
let frame = FrameState::new(&Camera::default(), target.get_dimensions(), 1500);
scene.draw(&mut target, &frame).unwrap();
target.finish().unwrap();
# }
```

*/

use std::error::Error;
use std::fmt;

use cgmath::Matrix4;
use glium::backend::Facade;
use glium::index::{NoIndices, PrimitiveType};
use glium::texture::Texture2d;
use glium::{uniform, DrawError, DrawParameters, IndexBuffer, ProgramCreationError, Surface, VertexBuffer};

use crate::animation::{model_matrix, projection_matrix, rotation_degrees, tint};
use crate::camera::Camera;
use crate::config::TextureSources;
use crate::geometry::{self, CubeVertex, FlatVertex, PyramidVertex};
use crate::shaders::Programs;
use crate::texture::{self, TextureError};

/// Color the framebuffer is cleared to before every frame.
pub const CLEAR_COLOR: (f32, f32, f32, f32) = (0.2, 0.3, 0.3, 1.0);

/// Error that can happen while creating the scene.
#[derive(Debug)]
pub enum SceneCreationError {
    VertexBuffer(glium::vertex::BufferCreationError),
    IndexBuffer(glium::index::BufferCreationError),
    Program(ProgramCreationError),
    Texture(TextureError),
}

impl fmt::Display for SceneCreationError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            SceneCreationError::VertexBuffer(err) =>
                write!(formatter, "Error while creating a vertex buffer: {}", err),
            SceneCreationError::IndexBuffer(err) =>
                write!(formatter, "Error while creating an index buffer: {}", err),
            SceneCreationError::Program(err) =>
                write!(formatter, "Error while building a program: {}", err),
            SceneCreationError::Texture(err) =>
                write!(formatter, "{}", err),
        }
    }
}

impl Error for SceneCreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SceneCreationError::VertexBuffer(err) => Some(err),
            SceneCreationError::IndexBuffer(err) => Some(err),
            SceneCreationError::Program(err) => Some(err),
            SceneCreationError::Texture(err) => Some(err),
        }
    }
}

impl From<glium::vertex::BufferCreationError> for SceneCreationError {
    fn from(err: glium::vertex::BufferCreationError) -> SceneCreationError {
        SceneCreationError::VertexBuffer(err)
    }
}

impl From<glium::index::BufferCreationError> for SceneCreationError {
    fn from(err: glium::index::BufferCreationError) -> SceneCreationError {
        SceneCreationError::IndexBuffer(err)
    }
}

impl From<ProgramCreationError> for SceneCreationError {
    fn from(err: ProgramCreationError) -> SceneCreationError {
        SceneCreationError::Program(err)
    }
}

impl From<TextureError> for SceneCreationError {
    fn from(err: TextureError) -> SceneCreationError {
        SceneCreationError::Texture(err)
    }
}

/// Everything a frame depends on besides the scene itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
    /// Animation time, in milliseconds.
    pub millis: u64,
}

impl FrameState {
    pub fn new(camera: &Camera, (width, height): (u32, u32), millis: u64) -> FrameState {
        FrameState {
            view: camera.view_matrix(),
            projection: projection_matrix(width, height),
            millis,
        }
    }
}

pub struct Scene {
    cube_vertices: VertexBuffer<CubeVertex>,
    cube_indices: IndexBuffer<u16>,
    pyramid_vertices: VertexBuffer<PyramidVertex>,
    triangle_vertices: VertexBuffer<FlatVertex>,
    triangle_indices: IndexBuffer<u16>,
    container: Texture2d,
    face: Texture2d,
    programs: Programs,
}

impl Scene {
    pub fn new<F: ?Sized + Facade>(facade: &F, textures: &TextureSources) -> Result<Scene, SceneCreationError> {
        let cube_vertices = VertexBuffer::new(facade, &geometry::CUBE_VERTICES)?;
        let cube_indices = IndexBuffer::new(facade, PrimitiveType::TrianglesList, &geometry::CUBE_INDICES)?;
        let pyramid_vertices = VertexBuffer::new(facade, &geometry::PYRAMID_VERTICES)?;
        let triangle_vertices = VertexBuffer::new(facade, &geometry::TRIANGLE_VERTICES)?;
        let triangle_indices = IndexBuffer::new(facade, PrimitiveType::TrianglesList, &geometry::TRIANGLE_INDICES)?;

        let container = texture::upload(facade, &textures.container)?;
        let face = texture::upload(facade, &textures.face)?;

        let programs = Programs::new(facade)?;

        Ok(Scene {
            cube_vertices,
            cube_indices,
            pyramid_vertices,
            triangle_vertices,
            triangle_indices,
            container,
            face,
            programs,
        })
    }

    /// Clears `surface` and draws the cubes, the triangle and the pyramids on it.
    pub fn draw<S: Surface>(&self, surface: &mut S, frame: &FrameState) -> Result<(), DrawError> {
        let params = DrawParameters {
            depth: glium::Depth {
                test: glium::draw_parameters::DepthTest::IfLess,
                write: true,
                .. Default::default()
            },
            .. Default::default()
        };

        surface.clear_color_and_depth(CLEAR_COLOR, 1.0);

        let view: [[f32; 4]; 4] = frame.view.into();
        let projection: [[f32; 4]; 4] = frame.projection.into();
        let degrees = rotation_degrees(frame.millis);
        let color = tint(frame.millis);

        for position in geometry::CUBE_POSITIONS.iter() {
            let model: [[f32; 4]; 4] = model_matrix(*position, degrees).into();
            let uniforms = uniform! {
                model: model,
                view: view,
                projection: projection,
                our_bg: &self.container,
                our_face: &self.face,
            };
            surface.draw(&self.cube_vertices, &self.cube_indices, &self.programs.cube,
                         &uniforms, &params)?;
        }

        surface.draw(&self.triangle_vertices, &self.triangle_indices, &self.programs.triangle,
                     &uniform! { color: color }, &params)?;

        let pictures = [&self.container, &self.face];
        for (i, position) in geometry::PYRAMID_POSITIONS.iter().enumerate() {
            let model: [[f32; 4]; 4] = model_matrix(*position, degrees).into();
            let uniforms = uniform! {
                model: model,
                view: view,
                projection: projection,
                color: color,
                picture: pictures[i % pictures.len()],
            };
            surface.draw(&self.pyramid_vertices, NoIndices(PrimitiveType::TrianglesList),
                         &self.programs.pyramid, &uniforms, &params)?;
        }

        Ok(())
    }
}
