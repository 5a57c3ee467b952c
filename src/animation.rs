/*!
Time-dependent transforms and colors.

Everything is a pure function of `t`, the number of milliseconds since the clock started, so
a frame can be reproduced from its timestamp alone.

*/

use std::time::Instant;

use cgmath::{Deg, InnerSpace, Matrix4, Vector3};

/// Vertical field of view of the projection.
pub const FIELD_OF_VIEW: Deg<f32> = Deg(45.0);
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

/// Axis every cube and pyramid spins around, before normalization.
pub const ROTATION_AXIS: Vector3<f32> = Vector3 { x: 1.0, y: 1.0, z: 0.0 };

/// Measures the animation time.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    pub fn start() -> FrameClock {
        FrameClock::started_at(Instant::now())
    }

    pub fn started_at(started: Instant) -> FrameClock {
        FrameClock { started }
    }

    /// Milliseconds elapsed between the start of the clock and `now`.
    ///
    /// Returns 0 if `now` is before the start.
    pub fn millis_at(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }

    pub fn millis(&self) -> u64 {
        self.millis_at(Instant::now())
    }
}

/// Rotation applied to every shape at time `t`: one degree every ten milliseconds, wrapping
/// at a full turn.
pub fn rotation_degrees(t: u64) -> f32 {
    ((t / 10) % 360) as f32
}

/// The color shared by the triangle and the pyramids at time `t`.
///
/// Each channel is a sine wave with its own period, mapped to `[0, 1]`. Alpha is always 1.
///
/// The phases are computed in `f64`: an `f32` stops resolving single milliseconds after a few
/// hours.
pub fn tint(t: u64) -> [f32; 4] {
    let t = t as f64;
    let r = (t * 3.14 / 11000.0).sin() / 2.0 + 0.5;
    let g = (t * 3.0 * 3.14 / 17000.0).sin() / 2.0 + 0.5;
    let b = (t * 7.0 * 3.14 / 13000.0).sin() / 2.0 + 0.5;
    [r as f32, g as f32, b as f32, 1.0]
}

/// Places a shape at `position`, spun by `degrees` around `ROTATION_AXIS`.
pub fn model_matrix(position: Vector3<f32>, degrees: f32) -> Matrix4<f32> {
    Matrix4::from_translation(position) * Matrix4::from_axis_angle(ROTATION_AXIS.normalize(), Deg(degrees))
}

/// Perspective projection for a framebuffer of the given dimensions.
///
/// A zero height is treated as one pixel so that minimized windows don't produce a NaN matrix.
pub fn projection_matrix(width: u32, height: u32) -> Matrix4<f32> {
    let aspect_ratio = width.max(1) as f32 / height.max(1) as f32;
    cgmath::perspective(FIELD_OF_VIEW, aspect_ratio, Z_NEAR, Z_FAR)
}
