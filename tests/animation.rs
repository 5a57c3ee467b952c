use std::time::{Duration, Instant};

use cgmath::{Matrix4, SquareMatrix, Vector3, Vector4};

use glium_cubes::animation::{self, model_matrix, FrameClock, projection_matrix, rotation_degrees, tint};

mod support;

#[test]
fn rotation_wraps_every_3600_ms() {
    assert_eq!(rotation_degrees(1234), 123.0);
    assert_eq!(rotation_degrees(3600 + 1234), 123.0);
    assert_eq!(rotation_degrees(60_000), 0.0);
}

#[test]
fn tint_starts_grey() {
    assert_eq!(tint(0), [0.5, 0.5, 0.5, 1.0]);
}

#[test]
fn tint_stays_in_range() {
    for t in (0..200_000).step_by(37) {
        let color = tint(t);
        for channel in &color[..3] {
            assert!(*channel >= 0.0 && *channel <= 1.0, "{:?} at {}", color, t);
        }
        assert_eq!(color[3], 1.0);
    }
}

#[test]
fn red_peaks_after_a_quarter_period() {
    let [r, _, _, _] = tint(5500);
    assert!(r > 0.999, "{}", r);
}

fn reference_tint(t: u64) -> [f64; 3] {
    let t = t as f64;
    [
        (t * 3.14 / 11000.0).sin() / 2.0 + 0.5,
        (t * 3.0 * 3.14 / 17000.0).sin() / 2.0 + 0.5,
        (t * 7.0 * 3.14 / 13000.0).sin() / 2.0 + 0.5,
    ]
}

#[test]
fn tint_keeps_millisecond_precision_after_days() {
    for start in [86_400_000u64, 7 * 86_400_000] {
        let mut previous = tint(start);
        for dt in 1..1000 {
            let color = tint(start + dt);
            let expected = reference_tint(start + dt);
            for channel in 0..3 {
                assert!((color[channel] as f64 - expected[channel]).abs() < 1e-4,
                        "channel {} at {}: {} vs {}", channel, start + dt, color[channel], expected[channel]);
            }
            assert_ne!(color, previous, "color frozen at {}", start + dt);
            previous = color;
        }
    }
}

#[test]
fn clock_reports_long_runs_exactly() {
    let started = Instant::now();
    let clock = FrameClock::started_at(started);
    let week = Duration::from_millis(7 * 86_400_000 + 1);
    assert_eq!(clock.millis_at(started + week), 7 * 86_400_000 + 1);
}

#[test]
fn unrotated_model_is_a_translation() {
    let position = Vector3::new(2.0, 5.0, -15.0);
    support::assert_matrix_near(model_matrix(position, 0.0), Matrix4::from_translation(position));
}

#[test]
fn rotation_keeps_the_axis_fixed() {
    let model = model_matrix(Vector3::new(0.0, 0.0, 0.0), 90.0);
    support::assert_vec4_near(model * Vector4::new(1.0, 1.0, 0.0, 0.0), Vector4::new(1.0, 1.0, 0.0, 0.0));

    let moved = model * Vector4::new(0.0, 0.0, 1.0, 0.0);
    assert!(moved.z.abs() < support::EPSILON, "{:?}", moved);
}

#[test]
fn model_places_the_center() {
    let position = Vector3::new(-1.5, -2.2, -2.5);
    let model = model_matrix(position, 123.0);
    support::assert_vec4_near(model * Vector4::new(0.0, 0.0, 0.0, 1.0), position.extend(1.0));
}

#[test]
fn projection_uses_floating_point_aspect_ratio() {
    let projection = projection_matrix(800, 600);
    let f = 1.0 / (22.5f32).to_radians().tan();
    support::assert_near(projection[1][1], f);
    support::assert_near(projection[0][0], f * 600.0 / 800.0);
}

#[test]
fn projection_maps_near_and_far_planes() {
    let projection = projection_matrix(640, 480);

    let near = projection * Vector4::new(0.0, 0.0, -animation::Z_NEAR, 1.0);
    assert!((near.z / near.w + 1.0).abs() < 1e-4);

    let far = projection * Vector4::new(0.0, 0.0, -animation::Z_FAR, 1.0);
    assert!((far.z / far.w - 1.0).abs() < 1e-3);
}

#[test]
fn projection_of_empty_window_is_finite() {
    let projection = projection_matrix(800, 0);
    assert!(projection.is_invertible());
    for column in 0..4 {
        for row in 0..4 {
            assert!(projection[column][row].is_finite());
        }
    }
}
