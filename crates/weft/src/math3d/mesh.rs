use std::sync::Arc;

use super::Vec3;
use crate::{Error, Result, style::Color};

/// Per-face surface appearance, driven by the hit's barycentric
/// coordinates and the computed light intensity.
pub trait Texture: Send + Sync {
    fn color_at(&self, u: f64, v: f64, intensity: f64) -> Color;
    fn char_at(&self, u: f64, v: f64, intensity: f64) -> char;
}

/// A triangle: three vertex indices plus optional flat color and texture.
#[derive(Clone)]
pub struct Face {
    pub indices: [usize; 3],
    pub color: Option<Color>,
    pub texture: Option<Arc<dyn Texture>>,
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self {
            indices: [a, b, c],
            color: None,
            texture: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_texture(mut self, texture: Arc<dyn Texture>) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// An indexed triangle mesh.
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
}

impl Mesh {
    /// Build a mesh, validating that every face index refers to a vertex.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<Face>) -> Result<Self> {
        for (i, f) in faces.iter().enumerate() {
            for &ix in &f.indices {
                if ix >= vertices.len() {
                    return Err(Error::Invalid(format!(
                        "face {i} refers to vertex {ix}, mesh has {}",
                        vertices.len()
                    )));
                }
            }
        }
        Ok(Self { vertices, faces })
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vec3] {
        &mut self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The three corner positions of a face.
    pub fn corners(&self, face: &Face) -> (Vec3, Vec3, Vec3) {
        (
            self.vertices[face.indices[0]],
            self.vertices[face.indices[1]],
            self.vertices[face.indices[2]],
        )
    }

    /// An axis-aligned cube of the given side length centered on the
    /// origin, twelve triangles.
    pub fn cube(side: f64) -> Self {
        let h = side / 2.0;
        let vertices = vec![
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
        ];
        let quads = [
            [0, 1, 2, 3],
            [5, 4, 7, 6],
            [4, 0, 3, 7],
            [1, 5, 6, 2],
            [3, 2, 6, 7],
            [4, 5, 1, 0],
        ];
        let mut faces = Vec::with_capacity(12);
        for q in quads {
            faces.push(Face::new(q[0], q[1], q[2]));
            faces.push(Face::new(q[0], q[2], q[3]));
        }
        Self { vertices, faces }
    }
}
