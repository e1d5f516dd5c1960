//! Wave-driven height scheduling for the pillar grid.
//!
//! Each pillar eases from a start height toward a target height over its own
//! transition duration. When it arrives, a fresh target is sampled from three
//! layered waves evaluated at the pillar's position and the current time.

use crate::constants::*;
use rand::Rng;

/// Pointer-derived wave modulation for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveInput {
    /// Frequency multiplier for the fast wave, in [0.1, 3.0].
    pub freq_multiplier: f32,
    /// Amplitude multiplier for the cross wave, in [0.1, 1.0].
    pub amp_multiplier: f32,
}

impl Default for WaveInput {
    fn default() -> Self {
        Self {
            freq_multiplier: 1.0,
            amp_multiplier: 1.0,
        }
    }
}

impl WaveInput {
    /// Map a pointer position in viewport pixels onto the multiplier ranges.
    ///
    /// Positions outside the viewport are clamped to its edges. A degenerate
    /// viewport maps to the middle of both ranges.
    pub fn from_pointer(x: f32, y: f32, width: f32, height: f32) -> Self {
        let u = if width > 0.0 { (x / width).clamp(0.0, 1.0) } else { 0.5 };
        let v = if height > 0.0 { (y / height).clamp(0.0, 1.0) } else { 0.5 };
        Self {
            freq_multiplier: lerp(FREQ_MULTIPLIER_MIN, FREQ_MULTIPLIER_MAX, u),
            amp_multiplier: lerp(AMP_MULTIPLIER_MIN, AMP_MULTIPLIER_MAX, v),
        }
    }
}

/// One grid cell. Heights are signed: more negative is taller.
#[derive(Clone, Debug, PartialEq)]
pub struct Pillar {
    pub x: f32,
    pub z: f32,
    pub start_height_factor: f32,
    pub target_height_factor: f32,
    pub current_height_factor: f32,
    pub elapsed_time: f32,
    pub animation_duration: f32,
}

impl Pillar {
    pub fn new(x: f32, z: f32, start: f32, target: f32, animation_duration: f32) -> Self {
        Self {
            x,
            z,
            start_height_factor: start,
            target_height_factor: target,
            current_height_factor: start,
            elapsed_time: 0.0,
            animation_duration,
        }
    }

    /// Create a pillar with random start/target heights in `[-max_height, 0]`
    /// and a random transition duration in `[duration_min, duration_max]`.
    pub fn random<R: Rng + ?Sized>(
        x: f32,
        z: f32,
        max_height: f32,
        duration_min: f32,
        duration_max: f32,
        rng: &mut R,
    ) -> Self {
        let start = -rng.gen::<f32>() * max_height;
        let target = -rng.gen::<f32>() * max_height;
        let duration = duration_min + rng.gen::<f32>() * (duration_max - duration_min);
        Self::new(x, z, start, target, duration)
    }

    /// Fraction of the current transition that has elapsed, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        if self.animation_duration > 0.0 {
            (self.elapsed_time / self.animation_duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Quadratic ease-in-out on [0, 1].
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Average of the three layered waves at `(x, z)` and time `now`, in [0, 1].
pub fn wave_mix(x: f32, z: f32, now: f32, input: WaveInput) -> f32 {
    let freq = input.freq_multiplier;
    let amp = input.amp_multiplier;
    let wave1 = (x * WAVE1_SPATIAL + z * WAVE1_SPATIAL + now * WAVE1_SPEED).sin() * 0.5 + 0.5;
    let wave2 = (x * WAVE2_X * freq - z * WAVE2_Z * freq + now * WAVE2_SPEED).sin() * 0.25 + 0.5;
    let wave3 = (z * WAVE3_Z + now * WAVE3_SPEED).cos() * (WAVE3_AMPLITUDE * amp) + 0.5;
    (wave1 + wave2 + wave3) / 3.0
}

/// Advances pillars toward wave-sampled targets.
#[derive(Clone, Copy, Debug)]
pub struct WaveScheduler {
    pub max_height: f32,
}

impl Default for WaveScheduler {
    fn default() -> Self {
        Self {
            max_height: MAX_HEIGHT,
        }
    }
}

impl WaveScheduler {
    pub fn new(max_height: f32) -> Self {
        Self { max_height }
    }

    /// Height factor the waves ask for at this pillar right now.
    pub fn target_for(&self, pillar: &Pillar, now: f32, input: WaveInput) -> f32 {
        -wave_mix(pillar.x, pillar.z, now, input) * self.max_height
    }

    /// Step one pillar by `dt` seconds.
    ///
    /// At most one retarget happens per call, however large `dt` is.
    pub fn advance(&self, pillar: &mut Pillar, dt: f32, input: WaveInput, now: f32) {
        pillar.elapsed_time += dt;
        let mut t = if pillar.animation_duration > 0.0 {
            pillar.elapsed_time / pillar.animation_duration
        } else {
            1.0
        };

        if t >= 1.0 {
            pillar.start_height_factor = pillar.target_height_factor;
            pillar.target_height_factor = self.target_for(pillar, now, input);
            pillar.elapsed_time = 0.0;
            t = 0.0;
        }

        let eased = ease_in_out_quad(t);
        pillar.current_height_factor = lerp(
            pillar.start_height_factor,
            pillar.target_height_factor,
            eased,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_retargets_every_step() {
        let scheduler = WaveScheduler::new(10.0);
        let mut p = Pillar::new(0.0, 0.0, -2.0, -4.0, 0.0);
        scheduler.advance(&mut p, 0.0, WaveInput::default(), 0.0);
        assert_eq!(p.start_height_factor, -4.0);
        assert_eq!(p.current_height_factor, -4.0);
        assert_eq!(p.elapsed_time, 0.0);
    }

    #[test]
    fn progress_is_clamped() {
        let mut p = Pillar::new(0.0, 0.0, 0.0, -1.0, 0.5);
        p.elapsed_time = 2.0;
        assert_eq!(p.progress(), 1.0);
        p.elapsed_time = 0.25;
        assert!((p.progress() - 0.5).abs() < 1e-6);
    }
}
