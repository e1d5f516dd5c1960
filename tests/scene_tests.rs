// Host-side tests for grid assembly and configuration.

use glam::Vec3;
use pillars_core::scene::rotation_angle;
use pillars_core::{
    CubeMeshBuilder, FrameInput, PillarsError, Scene, SceneConfig, WaveInput,
};

fn small_config() -> SceneConfig {
    SceneConfig {
        rows: 2,
        cols: 2,
        spacing: 1.5,
        max_height: 10.0,
        duration_min: 0.2,
        duration_max: 0.8,
        seed: 1234,
    }
}

#[test]
fn two_by_two_grid_stays_in_bounds() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    assert_eq!(scene.pillars().len(), scene.config().pillar_count());
    assert_eq!(scene.vertices().len(), 4 * 36);
    assert_eq!(scene.vertices().len(), scene.config().vertex_count());

    let mut now = 0.0;
    for _ in 0..10 {
        now += 0.05;
        scene.update(&FrameInput {
            now,
            dt: 0.05,
            pointer_x: 0.0,
            wave: WaveInput::default(),
        });
        for p in scene.pillars() {
            assert!(
                (-10.0..=0.0).contains(&p.current_height_factor),
                "height {} out of bounds",
                p.current_height_factor
            );
        }
    }
}

#[test]
fn same_seed_gives_same_animation() {
    let mut a = Scene::new(small_config()).expect("valid config");
    let mut b = Scene::new(small_config()).expect("valid config");
    let frame = FrameInput {
        now: 0.4,
        dt: 0.1,
        pointer_x: 120.0,
        wave: WaveInput::default(),
    };
    for _ in 0..20 {
        a.update(&frame);
        b.update(&frame);
    }
    assert_eq!(a.pillars(), b.pillars());
    assert_eq!(a.vertices(), b.vertices());
}

#[test]
fn grid_is_centred_on_origin() {
    let config = SceneConfig {
        rows: 3,
        cols: 4,
        ..small_config()
    };
    let scene = Scene::new(config).expect("valid config");
    let sum = scene
        .pillars()
        .iter()
        .fold((0.0, 0.0), |acc, p| (acc.0 + p.x, acc.1 + p.z));
    assert!(sum.0.abs() < 1e-4 && sum.1.abs() < 1e-4);

    // Row-major: consecutive pillars step along X by the spacing
    let p = scene.pillars();
    assert!((p[1].x - p[0].x - 1.5).abs() < 1e-6);
    assert!((p[4].z - p[0].z - 1.5).abs() < 1e-6);
}

#[test]
fn vertex_chunks_match_the_mesh_builder() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    let frame = FrameInput {
        now: 1.7,
        dt: 0.016,
        pointer_x: 300.0,
        wave: WaveInput::from_pointer(300.0, 200.0, 800.0, 600.0),
    };
    scene.update(&frame);
    for (p, chunk) in scene.pillars().iter().zip(scene.vertices().chunks_exact(36)) {
        let angle = rotation_angle(p.x, p.z, frame.now, frame.pointer_x);
        let expected = CubeMeshBuilder::build(p.x, p.z, p.current_height_factor, angle);
        assert_eq!(chunk, &expected[..]);
    }
}

#[test]
fn rotation_couples_position_time_and_pointer() {
    assert_eq!(rotation_angle(0.0, 0.0, 0.0, 0.0), 0.0);
    assert!((rotation_angle(1.0, 2.0, 0.0, 0.0) - 0.3).abs() < 1e-6);
    assert!((rotation_angle(0.0, 0.0, 1.5, 0.0) - 3.0).abs() < 1e-6);
    assert!((rotation_angle(0.0, 0.0, 0.0, 100.0) - 1.0).abs() < 1e-6);
}

#[test]
fn invalid_configs_are_rejected() {
    let bad = [
        SceneConfig {
            rows: 0,
            ..small_config()
        },
        SceneConfig {
            spacing: 0.0,
            ..small_config()
        },
        SceneConfig {
            max_height: -1.0,
            ..small_config()
        },
        SceneConfig {
            duration_min: 0.9,
            duration_max: 0.5,
            ..small_config()
        },
        SceneConfig {
            spacing: f32::NAN,
            ..small_config()
        },
    ];
    for config in bad {
        match Scene::new(config) {
            Err(PillarsError::InvalidConfig(_)) => {}
            other => panic!("expected InvalidConfig, got {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn orbit_input_moves_the_camera() {
    let mut scene = Scene::new(small_config()).expect("valid config");
    scene.resize(800, 400);
    assert!((scene.camera.aspect - 2.0).abs() < 1e-6);

    let eye = scene.camera.eye;
    scene.orbit_drag(40.0, 0.0);
    assert!((scene.camera.eye - eye).length() > 1e-3);
    assert!((scene.camera.aspect - 2.0).abs() < 1e-6);

    let half = scene.camera.half_height;
    scene.orbit_scroll(2.0);
    assert!(scene.camera.half_height < half);

    // Camera keeps looking at the grid centre, raised toward the tops
    assert!(approx(scene.camera.target, Vec3::new(0.0, -2.5, 0.0)));
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}
