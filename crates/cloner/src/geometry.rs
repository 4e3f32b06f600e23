//! Source geometry for the `object` distribution mode.
//!
//! The engine never loads meshes itself; the asset-loading collaborator hands
//! in a flat vertex/face list, built here either from glam vectors or from
//! `mint` interop types.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::safe_normalize;

/// A triangle mesh reduced to what instancing needs: vertex positions and
/// triangle indices. Faces referencing out-of-range vertices are dropped at
/// construction.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SourceMesh {
    positions: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
}

impl SourceMesh {
    pub fn new(positions: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        let vertex_count = positions.len() as u32;
        let faces = faces
            .into_iter()
            .filter(|f| f.iter().all(|&i| i < vertex_count))
            .collect();
        Self { positions, faces }
    }

    /// Build from `mint` vectors, for callers on other math libraries.
    pub fn from_mint(positions: Vec<mint::Vector3<f32>>, faces: Vec<[u32; 3]>) -> Self {
        Self::new(positions.into_iter().map(Vec3::from).collect(), faces)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn face_centroid(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.faces[face];
        (self.positions[a as usize] + self.positions[b as usize] + self.positions[c as usize])
            / 3.0
    }

    /// Unit normal of a face; degenerate triangles fall back to +X.
    pub fn face_normal(&self, face: usize) -> Vec3 {
        let [a, b, c] = self.faces[face];
        let pa = self.positions[a as usize];
        let pb = self.positions[b as usize];
        let pc = self.positions[c as usize];
        safe_normalize((pb - pa).cross(pc - pa))
    }

    /// Area-weighted average normal of the faces sharing `vertex`.
    ///
    /// A vertex with no adjacent faces (point clouds are valid input) gets +X.
    pub fn vertex_normal(&self, vertex: usize) -> Vec3 {
        let vertex = vertex as u32;
        let mut acc = Vec3::ZERO;
        for indices in &self.faces {
            if indices.contains(&vertex) {
                let [a, b, c] = *indices;
                let pa = self.positions[a as usize];
                let pb = self.positions[b as usize];
                let pc = self.positions[c as usize];
                // Cross product length carries the area weighting.
                acc += (pb - pa).cross(pc - pa);
            }
        }
        safe_normalize(acc)
    }
}
