use glam::Vec3;

use lighting_lessons::camera::Camera;
use lighting_lessons::camera::fly_camera::{CameraMovement, FlyCamera, MIN_FOV, PITCH_LIMIT};

const TOLERANCE: f32 = 1.0e-4;

fn facing_forward() -> FlyCamera {
    FlyCamera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
}

#[test]
fn basis_stays_orthonormal_across_orientations() {
    let mut yaw = -180.0;
    while yaw < 180.0 {
        let mut pitch = -PITCH_LIMIT;
        while pitch <= PITCH_LIMIT {
            let camera = FlyCamera::with_orientation(Vec3::ZERO, Vec3::Y, yaw, pitch, 2.5, 0.1);
            let (front, up, right) = (camera.front(), camera.up_vector(), camera.right());

            for v in [front, up, right].iter() {
                assert!((v.length() - 1.0).abs() < TOLERANCE, "yaw={} pitch={}", yaw, pitch);
            }
            assert!(front.dot(up).abs() < TOLERANCE);
            assert!(front.dot(right).abs() < TOLERANCE);
            assert!(up.dot(right).abs() < TOLERANCE);

            pitch += 11.0;
        }
        yaw += 17.0;
    }
}

#[test]
fn forward_then_backward_returns_home() {
    for dt in [0.0_f32, 0.016, 0.5, 3.0].iter() {
        let mut camera = facing_forward();
        camera.process_mouse_movement(123.0, -45.0, true);
        let start = camera.position();

        camera.process_movement(CameraMovement::Forward, *dt);
        camera.process_movement(CameraMovement::Backward, *dt);

        assert!(camera.position().abs_diff_eq(start, TOLERANCE));
    }
}

#[test]
fn one_second_forward_at_default_speed() {
    let mut camera = facing_forward();
    camera.process_movement(CameraMovement::Forward, 1.0);

    assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), TOLERANCE));
}

#[test]
fn scrolling_never_leaves_fov_range() {
    let mut camera = facing_forward();
    for offset in [30.0, 30.0, -500.0, 7.5, 1000.0, -3.0].iter() {
        camera.process_scroll(*offset);
        assert!(camera.fov() >= MIN_FOV && camera.fov() <= camera.max_fov());
    }
}

#[test]
fn constrained_mouse_never_flips_pitch() {
    let mut camera = facing_forward();
    for y in [500.0, 2000.0, -4000.0, 10.0, -10.0].iter() {
        camera.process_mouse_movement(3.0, *y, true);
        assert!(camera.pitch().abs() <= PITCH_LIMIT);
    }
}

#[test]
fn look_at_points_front_at_target() {
    let mut camera = facing_forward();
    let targets = [
        Vec3::new(5.0, 1.0, -2.0),
        Vec3::new(-3.0, -2.0, 10.0),
        Vec3::new(0.0, 0.5, -7.0),
    ];

    for target in targets.iter() {
        camera.look_at_position(*target);
        let expected = (*target - camera.position()).normalize();

        assert!(camera.front().abs_diff_eq(expected, TOLERANCE), "{:?} vs {:?}", camera.front(), expected);
    }
}

#[test]
fn view_matrix_moves_camera_to_origin() {
    let mut camera = facing_forward();
    camera.process_mouse_movement(250.0, 80.0, true);
    camera.process_movement(CameraMovement::Left, 0.7);

    let eye = camera.view().transform_point3(camera.position());
    assert!(eye.abs_diff_eq(Vec3::ZERO, TOLERANCE));

    let ahead = camera.view().transform_point3(camera.position() + camera.front());
    assert!(ahead.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), TOLERANCE));
}
