//! Flat-shaded pillar geometry.
//!
//! A pillar is a unit cube whose top four corners are stretched along Y by
//! the pillar's height factor, spun about Y and moved to its grid cell. Each
//! face gets one analytic normal shared by its two triangles.

use crate::constants::VERTICES_PER_PILLAR;
use glam::{Mat3, Vec3};

/// Interleaved position + normal, as consumed by the vertex stage.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexRecord {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl VertexRecord {
    pub const STRIDE: u64 = std::mem::size_of::<VertexRecord>() as u64;

    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

/// Unit cube corners, half-extent 0.5. Indices 2, 3, 6 and 7 form the top.
pub const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

pub const TOP_CORNERS: [usize; 4] = [2, 3, 6, 7];

/// Face quads, wound so `(v2 - v1) x (v3 - v1)` points outward for an
/// upright cube. Order: -Z, +Z, -X, +X, +Y, -Y.
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 4, 7, 3],
    [1, 2, 6, 5],
    [3, 7, 6, 2],
    [0, 1, 5, 4],
];

/// Rotate points about the Y axis in place.
pub fn rotate_y(points: &mut [Vec3], angle: f32) {
    let rot = Mat3::from_rotation_y(angle);
    for p in points.iter_mut() {
        *p = rot * *p;
    }
}

/// Normalised `(b - a) x (c - a)`, or zero when the triangle is degenerate.
#[inline]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

pub struct CubeMeshBuilder;

impl CubeMeshBuilder {
    /// World-space corners of one pillar.
    pub fn corners(center_x: f32, center_z: f32, height_factor: f32, rotation: f32) -> [Vec3; 8] {
        let mut corners = CUBE_CORNERS.map(Vec3::from);
        for &i in &TOP_CORNERS {
            corners[i].y *= height_factor;
        }
        rotate_y(&mut corners, rotation);
        let offset = Vec3::new(center_x, 0.0, center_z);
        for c in corners.iter_mut() {
            *c += offset;
        }
        corners
    }

    /// Build the 36 vertex records of one pillar.
    pub fn build(
        center_x: f32,
        center_z: f32,
        height_factor: f32,
        rotation: f32,
    ) -> [VertexRecord; VERTICES_PER_PILLAR] {
        let mut out = [VertexRecord::default(); VERTICES_PER_PILLAR];
        Self::build_into(&mut out, center_x, center_z, height_factor, rotation);
        out
    }

    /// Write one pillar's vertex records into `out`, which must hold exactly
    /// 36 records.
    pub fn build_into(
        out: &mut [VertexRecord],
        center_x: f32,
        center_z: f32,
        height_factor: f32,
        rotation: f32,
    ) {
        debug_assert_eq!(out.len(), VERTICES_PER_PILLAR);
        let corners = Self::corners(center_x, center_z, height_factor, rotation);
        // Below -1 the top face drops under the base, which mirrors the box
        // and flips every quad's winding.
        let orientation = if height_factor < -1.0 { -1.0 } else { 1.0 };

        for (&face, chunk) in CUBE_FACES.iter().zip(out.chunks_exact_mut(6)) {
            let [v1, v2, v3, v4] = face.map(|i| corners[i]);
            let n = (face_normal(v1, v2, v3) * orientation).to_array();
            for (slot, p) in chunk.iter_mut().zip([v1, v2, v3, v1, v3, v4]) {
                *slot = VertexRecord {
                    position: p.to_array(),
                    normal: n,
                };
            }
        }
    }
}
