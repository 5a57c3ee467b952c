/*!
GLSL sources of the three programs of the scene.

Attribute names match the fields of the vertex types in `geometry`, which is how glium binds
them.

*/

use glium::backend::Facade;
use glium::{Program, ProgramCreationError};

pub const CUBE_VERTEX_SHADER: &str = r#"
    #version 140

    in vec3 position;
    in vec3 color;
    in vec2 tex_coords;

    out vec3 v_color;
    out vec2 v_tex_coords;

    uniform mat4 model;
    uniform mat4 view;
    uniform mat4 projection;

    void main() {
        gl_Position = projection * view * model * vec4(position, 1.0);
        v_color = color;
        v_tex_coords = tex_coords;
    }
"#;

pub const CUBE_FRAGMENT_SHADER: &str = r#"
    #version 140

    in vec3 v_color;
    in vec2 v_tex_coords;
    out vec4 frag_color;

    uniform sampler2D our_bg;
    uniform sampler2D our_face;

    void main() {
        frag_color = mix(texture(our_bg, v_tex_coords), texture(our_face, v_tex_coords), 0.5)
                   * vec4(v_color, 1.0);
    }
"#;

pub const PYRAMID_VERTEX_SHADER: &str = r#"
    #version 140

    in vec3 position;
    in vec2 tex_coords;

    out vec2 v_tex_coords;

    uniform mat4 model;
    uniform mat4 view;
    uniform mat4 projection;

    void main() {
        gl_Position = projection * view * model * vec4(position, 1.0);
        v_tex_coords = tex_coords;
    }
"#;

pub const PYRAMID_FRAGMENT_SHADER: &str = r#"
    #version 140

    in vec2 v_tex_coords;
    out vec4 frag_color;

    uniform vec4 color;
    uniform sampler2D picture;

    void main() {
        frag_color = mix(texture(picture, v_tex_coords), color, 0.5);
    }
"#;

pub const TRIANGLE_VERTEX_SHADER: &str = r#"
    #version 140

    in vec2 position;

    void main() {
        gl_Position = vec4(position, 0.0, 1.0);
    }
"#;

pub const TRIANGLE_FRAGMENT_SHADER: &str = r#"
    #version 140

    out vec4 frag_color;

    uniform vec4 color;

    void main() {
        frag_color = color;
    }
"#;

/// The compiled programs.
pub struct Programs {
    pub cube: Program,
    pub pyramid: Program,
    pub triangle: Program,
}

impl Programs {
    pub fn new<F: ?Sized + Facade>(facade: &F) -> Result<Programs, ProgramCreationError> {
        let cube = Program::from_source(facade, CUBE_VERTEX_SHADER, CUBE_FRAGMENT_SHADER, None)?;
        let pyramid = Program::from_source(facade, PYRAMID_VERTEX_SHADER, PYRAMID_FRAGMENT_SHADER, None)?;
        let triangle = Program::from_source(facade, TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER, None)?;
        log::debug!("compiled cube, pyramid and triangle programs");

        Ok(Programs { cube, pyramid, triangle })
    }
}
