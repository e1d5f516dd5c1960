// Host-side tests for height scheduling: easing, retargeting and bounds.

use pillars_core::wave::{ease_in_out_quad, lerp, wave_mix};
use pillars_core::{Pillar, WaveInput, WaveScheduler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
    assert!((ease_in_out_quad(0.25) - 0.125).abs() < 1e-6);
    assert!((ease_in_out_quad(0.75) - 0.875).abs() < 1e-6);
}

#[test]
fn easing_is_monotonic() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=1000 {
        let v = ease_in_out_quad(i as f32 / 1000.0);
        assert!(v >= prev, "easing decreased at step {}", i);
        prev = v;
    }
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(-3.0, 5.0, 0.0), -3.0);
    assert_eq!(lerp(-3.0, 5.0, 1.0), 5.0);
    assert_eq!(lerp(-3.0, 5.0, 0.5), 1.0);
}

#[test]
fn wave_mix_stays_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let x = rng.gen_range(-40.0..40.0);
        let z = rng.gen_range(-40.0..40.0);
        let now = rng.gen_range(0.0..600.0);
        let input = WaveInput {
            freq_multiplier: rng.gen_range(0.1..=3.0),
            amp_multiplier: rng.gen_range(0.1..=1.0),
        };
        let m = wave_mix(x, z, now, input);
        assert!((0.0..=1.0).contains(&m), "mix {} out of range", m);
    }
}

#[test]
fn pointer_maps_onto_multiplier_ranges() {
    let corner = WaveInput::from_pointer(0.0, 0.0, 800.0, 600.0);
    assert!((corner.freq_multiplier - 0.1).abs() < 1e-6);
    assert!((corner.amp_multiplier - 0.1).abs() < 1e-6);

    let far = WaveInput::from_pointer(800.0, 600.0, 800.0, 600.0);
    assert!((far.freq_multiplier - 3.0).abs() < 1e-6);
    assert!((far.amp_multiplier - 1.0).abs() < 1e-6);

    // Outside the viewport clamps to the edges
    let outside = WaveInput::from_pointer(-50.0, 5000.0, 800.0, 600.0);
    assert!((outside.freq_multiplier - 0.1).abs() < 1e-6);
    assert!((outside.amp_multiplier - 1.0).abs() < 1e-6);
}

#[test]
fn mid_transition_follows_eased_curve() {
    let scheduler = WaveScheduler::new(10.0);
    let mut p = Pillar::new(0.0, 0.0, -2.0, -6.0, 1.0);
    scheduler.advance(&mut p, 0.25, WaveInput::default(), 0.0);
    // ease(0.25) = 0.125
    assert!((p.current_height_factor - (-2.5)).abs() < 1e-5);
    assert_eq!(p.target_height_factor, -6.0);
    assert!((p.elapsed_time - 0.25).abs() < 1e-6);
}

#[test]
fn completing_a_transition_retargets_from_the_old_target() {
    let scheduler = WaveScheduler::new(10.0);
    let input = WaveInput::default();
    let mut p = Pillar::new(1.0, 2.0, -2.0, -6.0, 0.5);
    scheduler.advance(&mut p, 0.6, input, 3.0);

    assert_eq!(p.start_height_factor, -6.0);
    assert_eq!(p.current_height_factor, -6.0);
    assert_eq!(p.elapsed_time, 0.0);
    let expected = -wave_mix(1.0, 2.0, 3.0, input) * 10.0;
    assert!((p.target_height_factor - expected).abs() < 1e-5);
}

#[test]
fn huge_dt_retargets_only_once() {
    let scheduler = WaveScheduler::new(10.0);
    let input = WaveInput::default();
    let mut p = Pillar::new(0.0, 0.0, -1.0, -3.0, 0.5);
    scheduler.advance(&mut p, 100.0, input, 1.0);
    assert_eq!(p.start_height_factor, -3.0);
    assert_eq!(p.elapsed_time, 0.0);

    // The next small step resumes a normal transition
    let target = p.target_height_factor;
    scheduler.advance(&mut p, 0.1, input, 1.1);
    assert_eq!(p.target_height_factor, target);
    assert!((p.elapsed_time - 0.1).abs() < 1e-6);
}

#[test]
fn zero_dt_leaves_pillar_unchanged() {
    let scheduler = WaveScheduler::new(10.0);
    let mut p = Pillar::new(0.0, 0.0, -2.0, -6.0, 1.0);
    scheduler.advance(&mut p, 0.3, WaveInput::default(), 0.3);
    let before = p.clone();
    scheduler.advance(&mut p, 0.0, WaveInput::default(), 0.3);
    assert_eq!(p, before);
}

#[test]
fn random_heights_stay_in_range_over_many_steps() {
    let mut rng = StdRng::seed_from_u64(42);
    let max_h = 12.0;
    let scheduler = WaveScheduler::new(max_h);
    let mut pillars: Vec<Pillar> = (0..64)
        .map(|i| {
            Pillar::random(
                (i % 8) as f32,
                (i / 8) as f32,
                max_h,
                0.2,
                1.0,
                &mut rng,
            )
        })
        .collect();

    for p in &pillars {
        assert!((-max_h..=0.0).contains(&p.start_height_factor));
        assert!((-max_h..=0.0).contains(&p.target_height_factor));
        assert!((0.2..=1.0).contains(&p.animation_duration));
    }

    let mut now = 0.0;
    for _ in 0..500 {
        let dt = rng.gen_range(0.0..0.2);
        now += dt;
        let input = WaveInput {
            freq_multiplier: rng.gen_range(0.1..=3.0),
            amp_multiplier: rng.gen_range(0.1..=1.0),
        };
        for p in pillars.iter_mut() {
            scheduler.advance(p, dt, input, now);
            assert!(
                (-max_h - 1e-4..=1e-4).contains(&p.current_height_factor),
                "height {} escaped [-{}, 0]",
                p.current_height_factor,
                max_h
            );
            assert!(p.progress() <= 1.0);
        }
    }
}
