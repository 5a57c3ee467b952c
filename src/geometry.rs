/*!
Static meshes and placements of the scene.

Everything here is plain data; buffers are created from it once by `Scene::new`.

*/

use cgmath::Vector3;

/// Vertex of the textured cubes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub tex_coords: [f32; 2],
}

glium::implement_vertex!(CubeVertex, position, color, tex_coords);

/// Vertex of the double pyramids.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PyramidVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
}

glium::implement_vertex!(PyramidVertex, position, tex_coords);

/// Vertex of the flat triangle, already in clip space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlatVertex {
    pub position: [f32; 2],
}

glium::implement_vertex!(FlatVertex, position);

const fn cube(position: [f32; 3], color: [f32; 3], tex_coords: [f32; 2]) -> CubeVertex {
    CubeVertex { position, color, tex_coords }
}

/// Four vertices per face, in the order top right, bottom right, bottom left, top left.
pub const CUBE_VERTICES: [CubeVertex; 24] = [
    // front
    cube([ 0.5,  0.5,  0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
    cube([ 0.5, -0.5,  0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
    cube([-0.5, -0.5,  0.5], [0.0, 0.0, 1.0], [0.0, 0.0]),
    cube([-0.5,  0.5,  0.5], [1.0, 1.0, 0.0], [0.0, 1.0]),
    // bottom
    cube([ 0.5, -0.5,  0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
    cube([ 0.5, -0.5, -0.5], [0.0, 1.0, 1.0], [1.0, 0.0]),
    cube([-0.5, -0.5, -0.5], [1.0, 0.0, 1.0], [0.0, 0.0]),
    cube([-0.5, -0.5,  0.5], [0.0, 0.0, 1.0], [0.0, 1.0]),
    // back
    cube([-0.5,  0.5, -0.5], [1.0, 0.5, 0.0], [1.0, 1.0]),
    cube([-0.5, -0.5, -0.5], [1.0, 0.0, 1.0], [1.0, 0.0]),
    cube([ 0.5, -0.5, -0.5], [0.0, 1.0, 1.0], [0.0, 0.0]),
    cube([ 0.5,  0.5, -0.5], [1.0, 0.0, 0.5], [0.0, 1.0]),
    // top
    cube([-0.5,  0.5,  0.5], [1.0, 1.0, 0.0], [1.0, 1.0]),
    cube([-0.5,  0.5, -0.5], [1.0, 0.5, 0.0], [1.0, 0.0]),
    cube([ 0.5,  0.5, -0.5], [1.0, 0.0, 0.5], [0.0, 0.0]),
    cube([ 0.5,  0.5,  0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    // right
    cube([ 0.5,  0.5, -0.5], [1.0, 0.0, 0.5], [1.0, 1.0]),
    cube([ 0.5, -0.5, -0.5], [0.0, 1.0, 1.0], [1.0, 0.0]),
    cube([ 0.5, -0.5,  0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
    cube([ 0.5,  0.5,  0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
    // left
    cube([-0.5,  0.5,  0.5], [1.0, 1.0, 0.0], [1.0, 1.0]),
    cube([-0.5, -0.5,  0.5], [0.0, 0.0, 1.0], [1.0, 0.0]),
    cube([-0.5, -0.5, -0.5], [1.0, 0.0, 1.0], [0.0, 0.0]),
    cube([-0.5,  0.5, -0.5], [1.0, 0.5, 0.0], [0.0, 1.0]),
];

pub const CUBE_INDICES: [u16; 36] = [
     0,  1,  2,   0,  2,  3,
     4,  5,  6,   4,  6,  7,
     8,  9, 10,   8, 10, 11,
    12, 13, 14,  12, 14, 15,
    16, 17, 18,  16, 18, 19,
    20, 21, 22,  20, 22, 23,
];

const fn pyramid(position: [f32; 3], tex_coords: [f32; 2]) -> PyramidVertex {
    PyramidVertex { position, tex_coords }
}

/// The eight faces of an octahedron with its tips at `±1` on every axis.
///
/// Every face maps to the same texture triangle.
pub const PYRAMID_VERTICES: [PyramidVertex; 24] = [
    // x < 0
    pyramid([ 0.0, -1.0,  0.0], [0.0, 0.0]),
    pyramid([-1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0,  0.0,  1.0], [0.5, 1.0]),

    pyramid([ 0.0,  0.0,  1.0], [0.0, 0.0]),
    pyramid([-1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0,  1.0,  0.0], [0.5, 1.0]),

    pyramid([ 0.0,  1.0,  0.0], [0.0, 0.0]),
    pyramid([-1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0,  0.0, -1.0], [0.5, 1.0]),

    pyramid([ 0.0,  0.0, -1.0], [0.0, 0.0]),
    pyramid([-1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0, -1.0,  0.0], [0.5, 1.0]),

    // x > 0
    pyramid([ 0.0, -1.0,  0.0], [0.0, 0.0]),
    pyramid([ 1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0,  0.0,  1.0], [0.5, 1.0]),

    pyramid([ 0.0,  0.0,  1.0], [0.0, 0.0]),
    pyramid([ 1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0,  1.0,  0.0], [0.5, 1.0]),

    pyramid([ 0.0,  1.0,  0.0], [0.0, 0.0]),
    pyramid([ 1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0,  0.0, -1.0], [0.5, 1.0]),

    pyramid([ 0.0,  0.0, -1.0], [0.0, 0.0]),
    pyramid([ 1.0,  0.0,  0.0], [1.0, 0.0]),
    pyramid([ 0.0, -1.0,  0.0], [0.5, 1.0]),
];

/// A triangle in the lower left corner, split into four along its edge midpoints.
pub const TRIANGLE_VERTICES: [FlatVertex; 6] = [
    FlatVertex { position: [-0.90, -0.90] },
    FlatVertex { position: [-0.30, -0.90] },
    FlatVertex { position: [-0.60, -0.40] },
    FlatVertex { position: [-0.60, -0.90] },
    FlatVertex { position: [-0.45, -0.65] },
    FlatVertex { position: [-0.75, -0.65] },
];

pub const TRIANGLE_INDICES: [u16; 12] = [
    0, 3, 5,
    3, 1, 4,
    5, 4, 2,
    3, 4, 5,
];

const fn vec3(x: f32, y: f32, z: f32) -> Vector3<f32> {
    Vector3 { x, y, z }
}

pub const CUBE_POSITIONS: [Vector3<f32>; 10] = [
    vec3( 0.0,  0.0,   0.0),
    vec3( 2.0,  5.0, -15.0),
    vec3(-1.5, -2.2,  -2.5),
    vec3(-3.8, -2.0, -12.3),
    vec3( 2.4, -0.4,  -3.5),
    vec3(-1.7,  3.0,  -7.5),
    vec3( 1.3, -2.0,  -2.5),
    vec3( 1.5,  2.0,  -2.5),
    vec3( 1.5,  0.2,  -1.5),
    vec3(-1.3,  1.0,  -1.5),
];

pub const PYRAMID_POSITIONS: [Vector3<f32>; 3] = [
    vec3(-3.0, -2.0, -2.0),
    vec3( 4.0,  2.0, -2.0),
    vec3(-5.0,  3.0, -2.0),
];
