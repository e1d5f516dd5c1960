//! Shading parameters, their GPU uniform block, and a CPU evaluation of the
//! fragment stage in `shaders/pillars.wgsl`.
//!
//! The CPU path follows the shader step for step so its numeric behaviour
//! (palette cycling, rim mask, GGX sun, reflections) can be checked on the
//! host. Keep the two in sync when tuning.

use crate::constants::*;
use crate::env_map::EnvironmentSampler;
use glam::{Vec2, Vec3, Vec4};
use std::f32::consts::PI;

/// World up. Heights grow toward negative Y.
pub const UP: Vec3 = Vec3::NEG_Y;

pub const PALETTE_LEN: usize = 5;

// Noise field sampling
pub const NOISE_SCALE: f32 = 0.35;
pub const NOISE_DRIFT: [f32; 2] = [0.25, 0.175];

// Band panning and rim shaping
pub const PAN_FRESNEL_POWER: f32 = 2.0;
pub const PAN_NOISE_WEIGHT: f32 = 0.35;
pub const RIM_POWER: f32 = 4.0;
pub const RIM_SCALE: f32 = 1.5;

pub const SPECULAR_GAIN: f32 = 30.0;
pub const ENV_GAIN: f32 = 1.1;

/// Full WGSL module: the tuning constants above, emitted as WGSL `const`s,
/// followed by `shaders/pillars.wgsl`.
pub fn wgsl_source() -> String {
    let mut src = String::with_capacity(crate::PILLARS_WGSL.len() + 512);
    src.push_str(&format!("const PALETTE_LEN: u32 = {}u;\n", PALETTE_LEN));
    for (name, value) in [
        ("NOISE_SCALE", NOISE_SCALE),
        ("PAN_FRESNEL_POWER", PAN_FRESNEL_POWER),
        ("PAN_NOISE_WEIGHT", PAN_NOISE_WEIGHT),
        ("RIM_POWER", RIM_POWER),
        ("RIM_SCALE", RIM_SCALE),
        ("SPECULAR_GAIN", SPECULAR_GAIN),
        ("TIP_TINT_HEIGHT", TIP_TINT_HEIGHT),
        ("ENV_GAIN", ENV_GAIN),
    ] {
        src.push_str(&format!("const {}: f32 = {:?};\n", name, value));
    }
    src.push_str(&format!(
        "const NOISE_DRIFT: vec2<f32> = vec2<f32>({:?}, {:?});\n",
        NOISE_DRIFT[0], NOISE_DRIFT[1]
    ));
    src.push_str(crate::PILLARS_WGSL);
    src
}

/// Uniform values for one frame, assembled by the frame driver.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadingParams {
    pub time: f32,
    pub cam_pos: Vec3,
    pub palette: [Vec3; PALETTE_LEN],
    pub fresnel_speed: f32,
    pub fresnel_tile: f32,
    pub light_dir: Vec3,
    pub sun_light_dir: Vec3,
    pub sun_light_color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub ambient_strength: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            time: 0.0,
            cam_pos: Vec3::ZERO,
            palette: DEFAULT_PALETTE.map(|c| Vec3::from(rgb255(c))),
            fresnel_speed: FRESNEL_SPEED,
            fresnel_tile: FRESNEL_TILE,
            light_dir: Vec3::from(LIGHT_DIR),
            sun_light_dir: Vec3::from(SUN_LIGHT_DIR),
            sun_light_color: Vec3::from(rgb255(SUN_LIGHT_COLOR)),
            metalness: METALNESS,
            roughness: ROUGHNESS,
            sky_color: Vec3::from(SKY_COLOR),
            ground_color: Vec3::from(GROUND_COLOR),
            ambient_strength: AMBIENT_STRENGTH,
        }
    }
}

impl ShadingParams {
    /// Refresh the per-frame fields.
    pub fn for_frame(&mut self, time: f32, cam_pos: Vec3) {
        self.time = time;
        self.cam_pos = cam_pos;
    }

    /// Palette laid out as the `u_color` uniform array: five colours, slot 5
    /// repeating slot 0 for the wrap-around blend, slots 6..9 zeroed.
    pub fn color_slots(&self) -> [[f32; 4]; PALETTE_SLOTS] {
        let mut slots = [[0.0; 4]; PALETTE_SLOTS];
        for (slot, c) in slots.iter_mut().zip(self.palette.iter()) {
            *slot = c.extend(1.0).to_array();
        }
        slots[PALETTE_LEN] = slots[0];
        slots
    }

    pub fn uniforms(&self) -> ShadingUniforms {
        ShadingUniforms {
            time: self.time,
            fresnel_speed: self.fresnel_speed,
            fresnel_tile: self.fresnel_tile,
            metalness: self.metalness,
            cam_pos: self.cam_pos.to_array(),
            roughness: self.roughness,
            light_dir: self.light_dir.to_array(),
            ambient_strength: self.ambient_strength,
            sun_light_dir: self.sun_light_dir.to_array(),
            _pad0: 0.0,
            sun_light_color: self.sun_light_color.to_array(),
            _pad1: 0.0,
            sky_color: self.sky_color.to_array(),
            _pad2: 0.0,
            ground_color: self.ground_color.to_array(),
            _pad3: 0.0,
            colors: self.color_slots(),
        }
    }
}

/// Mirrors `struct Shading` in the WGSL (uniform address space layout).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShadingUniforms {
    pub time: f32,
    pub fresnel_speed: f32,
    pub fresnel_tile: f32,
    pub metalness: f32,
    pub cam_pos: [f32; 3],
    pub roughness: f32,
    pub light_dir: [f32; 3],
    pub ambient_strength: f32,
    pub sun_light_dir: [f32; 3],
    pub _pad0: f32,
    pub sun_light_color: [f32; 3],
    pub _pad1: f32,
    pub sky_color: [f32; 3],
    pub _pad2: f32,
    pub ground_color: [f32; 3],
    pub _pad3: f32,
    pub colors: [[f32; 4]; PALETTE_SLOTS],
}

/// Interpolated vertex outputs reaching one fragment.
#[derive(Clone, Copy, Debug)]
pub struct FragmentInput {
    pub normal: Vec3,
    pub world_pos: Vec3,
}

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Normalise, leaving degenerate vectors at zero instead of NaN.
#[inline]
fn safe_normalize(v: Vec3) -> Vec3 {
    v / v.length().max(1e-6)
}

/// Sine hash of a 2D lattice point into [0, 1).
#[inline]
pub fn hash21(p: Vec2) -> f32 {
    fract(p.dot(Vec2::new(127.1, 311.7)).sin() * 43_758.547)
}

/// Bilinear value noise over `hash21`, smoothstep-weighted.
pub fn value_noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);
    let a = hash21(i);
    let b = hash21(i + Vec2::new(1.0, 0.0));
    let c = hash21(i + Vec2::new(0.0, 1.0));
    let d = hash21(i + Vec2::new(1.0, 1.0));
    let bottom = a + (b - a) * u.x;
    let top = c + (d - c) * u.x;
    bottom + (top - bottom) * u.y
}

/// Noise driving both the band panning and the rim softening.
pub fn surface_noise(world_pos: Vec3, time: f32) -> f32 {
    let p = Vec2::new(world_pos.x, world_pos.z) * NOISE_SCALE + Vec2::from(NOISE_DRIFT) * time;
    value_noise(p)
}

/// Blend the palette along `x` in [0, 1): five smoothstep bands, the last of
/// which runs from colour 4 back into colour 0 (the slot-5 copy on the GPU).
pub fn palette_blend(palette: &[Vec3; PALETTE_LEN], x: f32) -> Vec3 {
    let gap = 1.0 / PALETTE_LEN as f32;
    let mut c = palette[0];
    for i in 0..PALETTE_LEN {
        let next = palette[(i + 1) % PALETTE_LEN];
        let w = smoothstep(i as f32 * gap, (i + 1) as f32 * gap, x);
        c = c.lerp(next, w);
    }
    c
}

/// GGX / Trowbridge-Reitz normal distribution.
pub fn distribution_ggx(n_dot_h: f32, roughness: f32) -> f32 {
    let a = roughness * roughness;
    let a2 = a * a;
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom).max(1e-6)
}

pub fn geometry_schlick_ggx(n_dot_x: f32, roughness: f32) -> f32 {
    let r = roughness + 1.0;
    let k = r * r / 8.0;
    n_dot_x / (n_dot_x * (1.0 - k) + k)
}

pub fn geometry_smith(n_dot_v: f32, n_dot_l: f32, roughness: f32) -> f32 {
    geometry_schlick_ggx(n_dot_v, roughness) * geometry_schlick_ggx(n_dot_l, roughness)
}

pub fn fresnel_schlick(cos_theta: f32, f0: Vec3) -> Vec3 {
    f0 + (Vec3::ONE - f0) * (1.0 - cos_theta).clamp(0.0, 1.0).powf(5.0)
}

/// Direction to panorama UV: longitude from `atan2`, latitude measured from
/// world up so the top rows of the image are the sky.
pub fn equirect_uv(dir: Vec3) -> Vec2 {
    let d = safe_normalize(dir);
    let u = d.z.atan2(d.x) / (2.0 * PI) + 0.5;
    let v = d.dot(UP).clamp(-1.0, 1.0).acos() / PI;
    Vec2::new(u, v)
}

#[inline]
fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - 2.0 * n.dot(i) * n
}

/// Evaluate the fragment stage for one fragment.
pub fn shade<E: EnvironmentSampler + ?Sized>(
    params: &ShadingParams,
    frag: &FragmentInput,
    env: &E,
) -> Vec4 {
    let n = safe_normalize(frag.normal);
    let v = safe_normalize(params.cam_pos - frag.world_pos);
    let l = safe_normalize(params.light_dir);
    let s = safe_normalize(params.sun_light_dir);

    let noise = surface_noise(frag.world_pos, params.time);
    let n_dot_v = n.dot(v).clamp(0.0, 1.0);

    // Palette band panned by a Fresnel term
    let fres = (1.0 - n_dot_v).powf(PAN_FRESNEL_POWER);
    let pan = Vec2::new(fres + noise * PAN_NOISE_WEIGHT, fres * 0.5 + noise * 0.15)
        * params.fresnel_tile
        + Vec2::new(params.time * params.fresnel_speed, params.time * params.fresnel_speed * 0.5);
    let blended = palette_blend(&params.palette, fract(pan.x));

    // Rim mask, softened by the same noise
    let rim = ((1.0 - n_dot_v).powf(RIM_POWER) * RIM_SCALE * (0.75 + 0.25 * noise)).clamp(0.0, 1.0);
    let base = blended * (0.7 + 0.6 * rim);

    let diffuse = n.dot(l).max(0.0) * base * 0.5;

    // Cook-Torrance sun
    let h = safe_normalize(v + s);
    let n_dot_s = n.dot(s).max(0.0);
    let n_dot_h = n.dot(h).max(0.0);
    let h_dot_v = h.dot(v).max(0.0);
    let f0 = Vec3::splat(0.04).lerp(base, params.metalness);
    let d = distribution_ggx(n_dot_h, params.roughness);
    let g = geometry_smith(n_dot_v, n_dot_s, params.roughness);
    let f = fresnel_schlick(h_dot_v, f0);
    let specular = d * g * f / (4.0 * n_dot_v * n_dot_s + 0.001);
    let sun_diffuse = (1.0 - params.metalness) * base * n_dot_s * params.sun_light_color;
    let sun = sun_diffuse + specular * SPECULAR_GAIN * params.sun_light_color;

    // Tips brighten toward a noise-shifted highlight
    let tip = (-frag.world_pos.y / TIP_TINT_HEIGHT).clamp(0.0, 1.0).powf(1.5);
    let highlight = Vec3::new(1.0, 0.93, 0.8).lerp(Vec3::new(0.8, 0.92, 1.0), noise);
    let tinted = base.lerp(highlight, tip);

    let hemi = n.dot(UP) * 0.5 + 0.5;
    let ambient = params.ground_color.lerp(params.sky_color, hemi) * params.ambient_strength;

    let r = reflect(-v, n);
    let metal_reflect = 0.15 + 0.85 * params.metalness;
    let rough_reflect = 1.0 - 0.7 * params.roughness;
    let env_color = env.sample(equirect_uv(r)) * metal_reflect * rough_reflect;

    let color =
        (ambient + diffuse + sun + tinted + env_color * ENV_GAIN).clamp(Vec3::ZERO, Vec3::ONE);
    color.extend(1.0)
}
