use cgmath::{InnerSpace, Matrix4, Point3, Vector3};

/// Distance covered by a single key press.
pub const DEFAULT_SPEED: f32 = 0.30;

/// One discrete camera move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// A camera that looks along a fixed direction and teleports by `speed` on every move.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub front: Vector3<f32>,
    pub up: Vector3<f32>,
    pub speed: f32,
}

impl Default for Camera {
    fn default() -> Camera {
        Camera::new(DEFAULT_SPEED)
    }
}

impl Camera {
    /// Builds a camera at the origin, looking down `-z` with `+y` up.
    pub fn new(speed: f32) -> Camera {
        Camera {
            position: Vector3::new(0.0, 0.0, 0.0),
            front: Vector3::new(0.0, 0.0, -1.0),
            up: Vector3::new(0.0, 1.0, 0.0),
            speed,
        }
    }

    /// Unit vector pointing to the right of the camera.
    pub fn right(&self) -> Vector3<f32> {
        self.front.cross(self.up).normalize()
    }

    pub fn step(&mut self, movement: Movement) {
        match movement {
            Movement::Forward => self.position += self.front * self.speed,
            Movement::Backward => self.position -= self.front * self.speed,
            Movement::Left => self.position -= self.right() * self.speed,
            Movement::Right => self.position += self.right() * self.speed,
        }
        log::debug!("camera moved {:?} to {:?}", movement, self.position);
    }

    /// Right-handed look-at matrix from the camera position towards `position + front`.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::new(self.position.x, self.position.y, self.position.z);
        Matrix4::look_at_rh(eye, eye + self.front, self.up)
    }
}
