//! Per-frame assembly of the pillar grid into one triangle list.

use crate::camera::{Camera, OrbitControl};
use crate::constants::*;
use crate::error::{PillarsError, Result};
use crate::mesh::{CubeMeshBuilder, VertexRecord};
use crate::wave::{Pillar, WaveInput, WaveScheduler};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f32,
    pub max_height: f32,
    pub duration_min: f32,
    pub duration_max: f32,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            spacing: GRID_SPACING,
            max_height: MAX_HEIGHT,
            duration_min: DURATION_MIN_SEC,
            duration_max: DURATION_MAX_SEC,
            seed: DEFAULT_SEED,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(PillarsError::InvalidConfig(format!(
                "grid must have at least one pillar, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(self.spacing > 0.0) {
            return Err(PillarsError::InvalidConfig(format!(
                "spacing must be positive, got {}",
                self.spacing
            )));
        }
        if !(self.max_height > 0.0) {
            return Err(PillarsError::InvalidConfig(format!(
                "max height must be positive, got {}",
                self.max_height
            )));
        }
        if !(self.duration_min > 0.0) || self.duration_max < self.duration_min {
            return Err(PillarsError::InvalidConfig(format!(
                "duration range must be positive and ordered, got {}..{}",
                self.duration_min, self.duration_max
            )));
        }
        Ok(())
    }

    pub fn pillar_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn vertex_count(&self) -> usize {
        self.pillar_count() * VERTICES_PER_PILLAR
    }

    /// Centre of cell `(row, col)`; the grid straddles the origin.
    pub fn grid_position(&self, row: usize, col: usize) -> (f32, f32) {
        let x = (col as f32 - (self.cols as f32 - 1.0) * 0.5) * self.spacing;
        let z = (row as f32 - (self.rows as f32 - 1.0) * 0.5) * self.spacing;
        (x, z)
    }
}

/// Host-provided timing and pointer input for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the animation started.
    pub now: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Pointer X in viewport pixels.
    pub pointer_x: f32,
    pub wave: WaveInput,
}

/// Spin of one pillar, coupled to its position, time and the pointer.
#[inline]
pub fn rotation_angle(x: f32, z: f32, now: f32, pointer_x: f32) -> f32 {
    (x + z) * ROTATION_SPATIAL + now * ROTATION_SPEED + pointer_x * ROTATION_POINTER
}

/// The whole animated scene: pillar grid, its reusable vertex buffer and the
/// camera looking at it.
pub struct Scene {
    config: SceneConfig,
    scheduler: WaveScheduler,
    pillars: Vec<Pillar>,
    vertices: Vec<VertexRecord>,
    pub orbit: OrbitControl,
    pub camera: Camera,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut pillars = Vec::with_capacity(config.pillar_count());
        for row in 0..config.rows {
            for col in 0..config.cols {
                let (x, z) = config.grid_position(row, col);
                pillars.push(Pillar::random(
                    x,
                    z,
                    config.max_height,
                    config.duration_min,
                    config.duration_max,
                    &mut rng,
                ));
            }
        }
        let vertices = vec![VertexRecord::default(); config.vertex_count()];
        let orbit =
            OrbitControl::for_grid(config.rows, config.cols, config.spacing, config.max_height);
        let camera = orbit.camera(1.0);
        log::info!(
            "[scene] {}x{} pillars, {} vertices, seed={}",
            config.rows,
            config.cols,
            vertices.len(),
            config.seed
        );
        Ok(Self {
            scheduler: WaveScheduler::new(config.max_height),
            config,
            pillars,
            vertices,
            orbit,
            camera,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    /// Triangle list for the current frame, `rows * cols * 36` records.
    pub fn vertices(&self) -> &[VertexRecord] {
        &self.vertices
    }

    /// Advance every pillar and rewrite the vertex buffer in grid order.
    pub fn update(&mut self, frame: &FrameInput) {
        let chunks = self.vertices.chunks_exact_mut(VERTICES_PER_PILLAR);
        for (pillar, out) in self.pillars.iter_mut().zip(chunks) {
            self.scheduler.advance(pillar, frame.dt, frame.wave, frame.now);
            let angle = rotation_angle(pillar.x, pillar.z, frame.now, frame.pointer_x);
            CubeMeshBuilder::build_into(
                out,
                pillar.x,
                pillar.z,
                pillar.current_height_factor,
                angle,
            );
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        log::debug!("[scene] resize {}x{} aspect={:.3}", width, height, self.camera.aspect);
    }

    pub fn orbit_drag(&mut self, dx_px: f32, dy_px: f32) {
        self.orbit.drag(dx_px, dy_px);
        self.orbit.apply(&mut self.camera);
    }

    pub fn orbit_scroll(&mut self, steps: f32) {
        self.orbit.scroll(steps);
        self.orbit.apply(&mut self.camera);
    }
}
