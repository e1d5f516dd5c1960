//! Orthographic orbit camera around the pillar grid.
//!
//! Heights grow toward negative Y, so the camera's up vector is `-Y` and
//! tall pillars read as rising on screen.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Right-handed camera with an orthographic projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    /// Half of the visible height in world units.
    pub half_height: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        let half_w = self.half_height * self.aspect;
        Mat4::orthographic_rh(
            -half_w,
            half_w,
            -self.half_height,
            self.half_height,
            self.znear,
            self.zfar,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Re-derive the aspect ratio after a viewport resize. Zero-sized
    /// viewports (minimised windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

/// Eye offset from the target for spherical coordinates, with elevation
/// measured toward `-Y`.
pub fn spherical_offset(radius: f32, azimuth: f32, elevation: f32) -> Vec3 {
    Vec3::new(
        radius * elevation.cos() * azimuth.sin(),
        -radius * elevation.sin(),
        radius * elevation.cos() * azimuth.cos(),
    )
}

/// Spherical camera rig that also stands in for the host's orbit control:
/// drags spin it, wheel steps zoom it.
#[derive(Clone, Debug)]
pub struct OrbitControl {
    pub center: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub base_half_height: f32,
    pub zoom: f32,
}

impl OrbitControl {
    /// Frame a `rows x cols` grid with the given spacing and max height.
    pub fn for_grid(rows: usize, cols: usize, spacing: f32, max_height: f32) -> Self {
        let extent_x = cols.saturating_sub(1) as f32 * spacing + 1.0;
        let extent_z = rows.saturating_sub(1) as f32 * spacing + 1.0;
        let diagonal = (extent_x * extent_x + extent_z * extent_z).sqrt();
        // Grid cells are centred on the origin, so only the height shifts the centre.
        let center = Vec3::new(0.0, -max_height * 0.25, 0.0);
        Self {
            center,
            radius: diagonal.max(max_height) * CAMERA_DISTANCE_SCALE,
            azimuth: CAMERA_AZIMUTH,
            elevation: CAMERA_ELEVATION,
            base_half_height: (diagonal * 0.5).max(max_height * 0.75),
            zoom: 1.0,
        }
    }

    pub fn eye(&self) -> Vec3 {
        self.center + spherical_offset(self.radius, self.azimuth, self.elevation)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.center,
            up: Vec3::NEG_Y,
            aspect,
            half_height: self.base_half_height * self.zoom,
            znear: 0.1,
            zfar: self.radius * 2.0,
        }
    }

    /// Write this rig's pose into an existing camera, keeping its aspect.
    pub fn apply(&self, camera: &mut Camera) {
        let aspect = camera.aspect;
        *camera = self.camera(aspect);
    }

    /// Orbit by a pointer drag measured in pixels.
    pub fn drag(&mut self, dx_px: f32, dy_px: f32) {
        self.azimuth -= dx_px * ORBIT_RADIANS_PER_PIXEL;
        self.elevation = (self.elevation + dy_px * ORBIT_RADIANS_PER_PIXEL)
            .clamp(-ORBIT_ELEVATION_LIMIT, ORBIT_ELEVATION_LIMIT);
    }

    /// Zoom by wheel steps; positive steps zoom in.
    pub fn scroll(&mut self, steps: f32) {
        self.zoom = (self.zoom * 0.9_f32.powf(steps)).clamp(CAMERA_ZOOM_MIN, CAMERA_ZOOM_MAX);
    }
}
