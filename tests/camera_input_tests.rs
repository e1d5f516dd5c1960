// Host-side tests for the orbit camera and pointer handling.

use glam::{Vec3, Vec4Swizzles};
use pillars_core::camera::spherical_offset;
use pillars_core::constants::{CAMERA_ZOOM_MAX, CAMERA_ZOOM_MIN, ORBIT_ELEVATION_LIMIT};
use pillars_core::{OrbitControl, PointerState};

#[test]
fn camera_up_is_negative_y() {
    let orbit = OrbitControl::for_grid(24, 24, 1.25, 14.0);
    let cam = orbit.camera(16.0 / 9.0);
    assert_eq!(cam.up, Vec3::NEG_Y);
    // Elevated eye sits on the tall side of the grid
    assert!(cam.eye.y < cam.target.y);
}

#[test]
fn grid_centre_projects_to_screen_centre() {
    let orbit = OrbitControl::for_grid(10, 10, 1.0, 8.0);
    let cam = orbit.camera(1.5);
    let clip = cam.view_proj() * orbit.center.extend(1.0);
    let ndc = clip.xyz() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!((0.0..=1.0).contains(&ndc.z));
}

#[test]
fn every_pillar_centre_is_in_view() {
    let (rows, cols, spacing, max_h) = (24usize, 24usize, 1.25f32, 14.0f32);
    let orbit = OrbitControl::for_grid(rows, cols, spacing, max_h);
    let cam = orbit.camera(1.0);
    let half_x = (cols as f32 - 1.0) * 0.5 * spacing;
    let half_z = (rows as f32 - 1.0) * 0.5 * spacing;
    for &x in &[-half_x, half_x] {
        for &z in &[-half_z, half_z] {
            for &y in &[0.5, -max_h * 0.5] {
                let clip = cam.view_proj() * Vec3::new(x, y, z).extend(1.0);
                let ndc = clip.xyz() / clip.w;
                assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0, "{:?} clipped", (x, y, z));
                assert!((0.0..=1.0).contains(&ndc.z));
            }
        }
    }
}

#[test]
fn spherical_offset_has_requested_radius() {
    for &(az, el) in &[(0.0, 0.0), (0.7, 0.3), (-2.0, 1.2), (3.0, -0.4)] {
        let o = spherical_offset(12.0, az, el);
        assert!((o.length() - 12.0).abs() < 1e-4);
    }
}

#[test]
fn resize_updates_aspect_and_ignores_zero() {
    let mut cam = OrbitControl::for_grid(4, 4, 1.0, 5.0).camera(1.0);
    cam.resize(1920, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    cam.resize(0, 1080);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn orbit_limits_elevation_and_zoom() {
    let mut orbit = OrbitControl::for_grid(4, 4, 1.0, 5.0);
    orbit.drag(0.0, 1.0e6);
    assert!((orbit.elevation - ORBIT_ELEVATION_LIMIT).abs() < 1e-6);
    orbit.drag(0.0, -1.0e6);
    assert!((orbit.elevation + ORBIT_ELEVATION_LIMIT).abs() < 1e-6);

    orbit.scroll(1000.0);
    assert!((orbit.zoom - CAMERA_ZOOM_MIN).abs() < 1e-6);
    orbit.scroll(-1000.0);
    assert!((orbit.zoom - CAMERA_ZOOM_MAX).abs() < 1e-6);
}

#[test]
fn pointer_reads_centred_until_first_move() {
    let p = PointerState::default();
    assert_eq!(p.effective(800, 600), (400.0, 300.0));
    let w = p.wave_input(800, 600);
    assert!((w.freq_multiplier - 1.55).abs() < 1e-5);
    assert!((w.amp_multiplier - 0.55).abs() < 1e-5);
}

#[test]
fn pointer_reports_drag_deltas_only_while_down() {
    let mut p = PointerState::default();
    assert_eq!(p.move_to(10.0, 20.0), None);
    assert_eq!(p.move_to(15.0, 25.0), None);
    p.down = true;
    assert_eq!(p.move_to(20.0, 22.0), Some((5.0, -3.0)));
    p.down = false;
    assert_eq!(p.move_to(0.0, 0.0), None);
    assert_eq!(p.effective(100, 100), (0.0, 0.0));
}
