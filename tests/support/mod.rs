/*!
Test supports module.

*/

#![allow(dead_code)]

use std::env;
use std::path::PathBuf;

use cgmath::{Matrix4, Vector3, Vector4};
use glium::Display;
use glutin::surface::WindowSurface;
use winit::event_loop::{EventLoop, EventLoopBuilder};
use winit::window::{Window, WindowBuilder};

pub const EPSILON: f32 = 1e-5;

pub fn assert_near(actual: f32, expected: f32) {
    assert!((actual - expected).abs() < EPSILON, "{} is not close to {}", actual, expected);
}

pub fn assert_vec3_near(actual: Vector3<f32>, expected: Vector3<f32>) {
    for i in 0..3 {
        assert!((actual[i] - expected[i]).abs() < EPSILON, "{:?} is not close to {:?}", actual, expected);
    }
}

pub fn assert_vec4_near(actual: Vector4<f32>, expected: Vector4<f32>) {
    for i in 0..4 {
        assert!((actual[i] - expected[i]).abs() < EPSILON, "{:?} is not close to {:?}", actual, expected);
    }
}

pub fn assert_matrix_near(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    for column in 0..4 {
        assert_vec4_near(actual[column], expected[column]);
    }
}

/// Returns a path in the temporary directory that is unique to this process and `name`.
pub fn temp_path(name: &str) -> PathBuf {
    env::temp_dir().join(format!("glium-cubes-{}-{}", std::process::id(), name))
}

/// Builds an invisible window and an OpenGL display drawing on it.
///
/// Only one event loop can exist per process, so a test file must call this at most once.
pub fn build_display() -> (EventLoop<()>, Window, Display<WindowSurface>) {
    let mut builder = EventLoopBuilder::new();

    // the test harness doesn't run tests on the main thread
    #[cfg(target_os = "linux")]
    {
        use winit::platform::x11::EventLoopBuilderExtX11;
        builder.with_any_thread(true);
    }
    #[cfg(target_os = "windows")]
    {
        use winit::platform::windows::EventLoopBuilderExtWindows;
        builder.with_any_thread(true);
    }

    let event_loop = builder.build();
    let (window, display) = glium_cubes::window::create_display(&event_loop, WindowBuilder::new().with_visible(false))
        .unwrap();

    (event_loop, window, display)
}

/// Converts a clear color to the bytes stored in an RGBA8 texture.
pub fn color_bytes((r, g, b, a): (f32, f32, f32, f32)) -> (u8, u8, u8, u8) {
    let byte = |c: f32| (c * 255.0).round() as u8;
    (byte(r), byte(g), byte(b), byte(a))
}

/// Returns true if every channel differs by at most 2.
pub fn same_color(a: (u8, u8, u8, u8), b: (u8, u8, u8, u8)) -> bool {
    let close = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 2;
    close(a.0, b.0) && close(a.1, b.1) && close(a.2, b.2) && close(a.3, b.3)
}
