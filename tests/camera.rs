use cgmath::{Matrix4, SquareMatrix, Vector3, Vector4};

use glium_cubes::{Camera, Movement};

mod support;

#[test]
fn default_camera() {
    let camera = Camera::default();
    assert_eq!(camera.position, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(camera.front, Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(camera.up, Vector3::new(0.0, 1.0, 0.0));
    support::assert_near(camera.speed, 0.30);
}

#[test]
fn forward_moves_along_front() {
    let mut camera = Camera::default();
    camera.step(Movement::Forward);
    support::assert_vec3_near(camera.position, Vector3::new(0.0, 0.0, -0.30));

    camera.step(Movement::Forward);
    support::assert_vec3_near(camera.position, Vector3::new(0.0, 0.0, -0.60));
}

#[test]
fn backward_undoes_forward() {
    let mut camera = Camera::default();
    camera.step(Movement::Forward);
    camera.step(Movement::Backward);
    support::assert_vec3_near(camera.position, Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn strafing() {
    let mut camera = Camera::default();
    support::assert_vec3_near(camera.right(), Vector3::new(1.0, 0.0, 0.0));

    camera.step(Movement::Right);
    support::assert_vec3_near(camera.position, Vector3::new(0.30, 0.0, 0.0));

    camera.step(Movement::Left);
    camera.step(Movement::Left);
    support::assert_vec3_near(camera.position, Vector3::new(-0.30, 0.0, 0.0));
}

#[test]
fn front_is_not_normalized_but_strafe_is() {
    let mut camera = Camera::default();
    camera.front = Vector3::new(0.0, 0.0, -2.0);

    camera.step(Movement::Forward);
    support::assert_vec3_near(camera.position, Vector3::new(0.0, 0.0, -0.60));

    camera.step(Movement::Right);
    support::assert_vec3_near(camera.position, Vector3::new(0.30, 0.0, -0.60));
}

#[test]
fn custom_speed() {
    let mut camera = Camera::new(1.5);
    camera.step(Movement::Backward);
    support::assert_vec3_near(camera.position, Vector3::new(0.0, 0.0, 1.5));
}

#[test]
fn view_matrix_at_origin_is_identity() {
    support::assert_matrix_near(Camera::default().view_matrix(), Matrix4::identity());
}

#[test]
fn view_matrix_moves_camera_to_origin() {
    let mut camera = Camera::default();
    camera.step(Movement::Forward);
    camera.step(Movement::Right);

    let eye = camera.position.extend(1.0);
    support::assert_vec4_near(camera.view_matrix() * eye, Vector4::new(0.0, 0.0, 0.0, 1.0));

    // something in front of the camera ends up on the negative z axis
    let ahead = (camera.position + camera.front * 5.0).extend(1.0);
    support::assert_vec4_near(camera.view_matrix() * ahead, Vector4::new(0.0, 0.0, -5.0, 1.0));
}
