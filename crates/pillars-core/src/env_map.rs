//! Equirectangular environment map used for reflections.

use crate::constants::{ENV_MAP_HEIGHT, ENV_MAP_WIDTH};
use crate::error::{PillarsError, Result};
use glam::{Vec2, Vec3};
use image::{imageops::FilterType, DynamicImage, GenericImageView};
use std::path::Path;

/// Anything the shading reference can look reflections up in.
pub trait EnvironmentSampler {
    /// Sample at `uv`; U wraps around the horizon, V is clamped at the poles.
    fn sample(&self, uv: Vec2) -> Vec3;
}

/// RGBA8 panorama, always `ENV_MAP_WIDTH x ENV_MAP_HEIGHT`.
#[derive(Clone, Debug)]
pub struct EnvMap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl EnvMap {
    /// Read and decode an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| PillarsError::EnvMapIo {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::decode(&bytes)?;
        log::info!("[env] loaded {}", path.display());
        Ok(map)
    }

    /// Decode an in-memory PNG/JPEG.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(img))
    }

    pub fn from_image(img: DynamicImage) -> Self {
        let (w, h) = img.dimensions();
        let img = if (w, h) == (ENV_MAP_WIDTH, ENV_MAP_HEIGHT) {
            img
        } else {
            log::debug!("[env] resampling {}x{} to {}x{}", w, h, ENV_MAP_WIDTH, ENV_MAP_HEIGHT);
            img.resize_exact(ENV_MAP_WIDTH, ENV_MAP_HEIGHT, FilterType::Triangle)
        };
        Self {
            width: ENV_MAP_WIDTH,
            height: ENV_MAP_HEIGHT,
            pixels: img.to_rgba8().into_raw(),
        }
    }

    /// Vertical sky-to-ground gradient, sky in the top row.
    pub fn gradient(sky: [f32; 3], ground: [f32; 3]) -> Self {
        let (width, height) = (ENV_MAP_WIDTH, ENV_MAP_HEIGHT);
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let t = (y as f32 + 0.5) / height as f32;
            let rgba = [
                to_u8(sky[0] + (ground[0] - sky[0]) * t),
                to_u8(sky[1] + (ground[1] - sky[1]) * t),
                to_u8(sky[2] + (ground[2] - sky[2]) * t),
                255,
            ];
            for _ in 0..width {
                pixels.extend_from_slice(&rgba);
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 rows, top row first.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Texel colour in [0, 1]; `x` wraps, `y` clamps.
    pub fn texel(&self, x: i64, y: i64) -> Vec3 {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        let i = (y * self.width as usize + x) * 4;
        Vec3::new(
            self.pixels[i] as f32,
            self.pixels[i + 1] as f32,
            self.pixels[i + 2] as f32,
        ) / 255.0
    }
}

impl EnvironmentSampler for EnvMap {
    fn sample(&self, uv: Vec2) -> Vec3 {
        let fx = uv.x * self.width as f32 - 0.5;
        let fy = uv.y.clamp(0.0, 1.0) * self.height as f32 - 0.5;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = fx - x0;
        let ty = fy - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);
        let top = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), tx);
        let bottom = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), tx);
        top.lerp(bottom, ty)
    }
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
