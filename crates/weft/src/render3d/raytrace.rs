use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{CharPolicy, Light, trace_ramp};
use crate::{
    Result,
    canvas::{Canvas, CanvasState},
    math3d::{Camera, Face, Mesh, Ray, RayHit, Vec3},
    style::{Color, Style},
    surface::Surface,
};

/// Traces one camera ray per cell against every face of every mesh,
/// shading the closest hit with a single directional light. The shading
/// ramp always supplies the character, even when the face has a texture
/// ([`CharPolicy::ShadingWins`]); the texture still drives the color.
///
/// With `samples > 1`, extra rays are jittered uniformly within the cell
/// and the cell resolves to the closest hit among samples, not an
/// average.
pub struct RayCanvas {
    state: CanvasState,
    pub camera: Camera,
    pub light: Light,
    samples: u32,
    rng: StdRng,
    meshes: Vec<Mesh>,
}

const CHAR_POLICY: CharPolicy = CharPolicy::ShadingWins;

impl RayCanvas {
    pub fn new(camera: Camera) -> Self {
        Self {
            state: CanvasState::default(),
            camera,
            light: Light::default(),
            samples: 1,
            rng: StdRng::seed_from_u64(0),
            meshes: Vec::new(),
        }
    }

    /// Rays per cell. The first ray goes through the cell center; the
    /// rest are jittered.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }
}

/// The closest intersection along a ray, paired with the face it struck.
fn closest_hit<'m>(meshes: &'m [Mesh], ray: &Ray, near: f64, far: f64) -> Option<(RayHit, &'m Face)> {
    let mut best: Option<(RayHit, &Face)> = None;
    for mesh in meshes {
        for face in mesh.faces() {
            let (v0, v1, v2) = mesh.corners(face);
            if let Some(hit) = ray.intersect_triangle(v0, v1, v2) {
                if hit.distance < near || hit.distance > far {
                    continue;
                }
                if best.as_ref().is_none_or(|(b, _)| hit.distance < b.distance) {
                    best = Some((hit, face));
                }
            }
        }
    }
    best
}

impl Canvas for RayCanvas {
    fn state(&self) -> &CanvasState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CanvasState {
        &mut self.state
    }

    fn paint(&mut self, surf: &mut Surface<'_>) -> Result<()> {
        let sz = self.state.rect.expanse();
        if sz.is_empty() {
            return Ok(());
        }
        let (w, h) = (f64::from(sz.w), f64::from(sz.h));
        let aspect = w / h;
        let tan_half = (self.camera.fov() / 2.0).tan();
        let rot = self.camera.rotation_matrix();
        let origin = self.camera.position;
        let (near, far) = (self.camera.near(), self.camera.far());
        let rng = &mut self.rng;

        for cy in 0..sz.h {
            for cx in 0..sz.w {
                let mut best: Option<(RayHit, &Face)> = None;
                for s in 0..self.samples {
                    let (jx, jy) = if s == 0 {
                        (0.0, 0.0)
                    } else {
                        (rng.random_range(-0.5..0.5), rng.random_range(-0.5..0.5))
                    };
                    let px = (1.0 - 2.0 * (f64::from(cx) + 0.5 + jx) / w) * tan_half * aspect;
                    let py = (1.0 - 2.0 * (f64::from(cy) + 0.5 + jy) / h) * tan_half;
                    let dir = rot.transform_dir(Vec3::new(px, py, 1.0));
                    let ray = Ray::new(origin, dir);
                    if let Some((hit, face)) = closest_hit(&self.meshes, &ray, near, far) {
                        if best.as_ref().is_none_or(|(b, _)| hit.distance < b.distance) {
                            best = Some((hit, face));
                        }
                    }
                }
                let Some((hit, face)) = best else { continue };

                let intensity = self.light.shade(hit.normal);
                let tex = face.texture.as_deref();
                let ch = CHAR_POLICY.resolve(
                    tex.map(|t| t.char_at(hit.u, hit.v, intensity)),
                    trace_ramp(intensity),
                );
                let color = tex
                    .map(|t| t.color_at(hit.u, hit.v, intensity))
                    .or(face.color)
                    .unwrap_or(Color::White);
                surf.put_styled(cx as i32, cy as i32, ch, Style::fg(color));
            }
        }
        Ok(())
    }
}
