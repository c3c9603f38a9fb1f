use geom::Expanse;

use super::{CharPolicy, Light, RenderMode, fill_ramp};
use crate::{
    Result,
    canvas::{Canvas, CanvasState},
    math3d::{Camera, Face, Mesh, Vec3},
    style::{Color, Style},
    surface::Surface,
};

/// A vertex after projection: cell-space x/y and view-space depth.
#[derive(Debug, Clone, Copy)]
struct Screen {
    x: f64,
    y: f64,
    depth: f64,
}

/// Per-frame depth storage. `None` means no depth recorded yet, avoiding
/// float-infinity comparisons.
struct DepthBuffer {
    w: u32,
    cells: Vec<Option<f64>>,
}

impl DepthBuffer {
    fn new(size: Expanse) -> Self {
        Self {
            w: size.w,
            cells: vec![None; size.area() as usize],
        }
    }

    /// True if `depth` is nearer than anything recorded at the cell, in
    /// which case it is recorded.
    fn test_and_set(&mut self, x: u32, y: u32, depth: f64) -> bool {
        let i = (y * self.w + x) as usize;
        match self.cells[i] {
            Some(d) if d <= depth => false,
            _ => {
                self.cells[i] = Some(depth);
                true
            }
        }
    }
}

/// Rasterizes triangle meshes through a perspective camera. Faces are
/// scanline-filled with a per-pixel depth test, wireframed with Bresenham
/// lines, or both. When a face carries a texture, the texture's character
/// wins over the shading ramp ([`CharPolicy::TextureWins`]).
pub struct MeshCanvas {
    state: CanvasState,
    pub camera: Camera,
    pub mode: RenderMode,
    pub light: Light,
    /// Discard faces whose projected winding is clockwise in screen space.
    pub cull_backfaces: bool,
    meshes: Vec<Mesh>,
}

const CHAR_POLICY: CharPolicy = CharPolicy::TextureWins;

impl MeshCanvas {
    pub fn new(camera: Camera) -> Self {
        Self {
            state: CanvasState::default(),
            camera,
            mode: RenderMode::default(),
            light: Light::default(),
            cull_backfaces: false,
            meshes: Vec::new(),
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    fn cell_for(&self, face: &Face, intensity: f64, u: f64, v: f64) -> (char, Style) {
        let tex = face.texture.as_deref();
        let ch = CHAR_POLICY.resolve(
            tex.map(|t| t.char_at(u, v, intensity)),
            fill_ramp(intensity),
        );
        let color = tex
            .map(|t| t.color_at(u, v, intensity))
            .or(face.color)
            .unwrap_or(Color::White);
        (ch, Style::fg(color))
    }
}

impl Canvas for MeshCanvas {
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
        // A fixed quarter-extent zoom, centered; not aspect-normalized.
        let scale = f64::from(sz.w.min(sz.h)) / 4.0;
        let view = self.camera.view_matrix();
        let vp = self.camera.perspective_matrix(w / h).mul(view);
        let mut depth = DepthBuffer::new(sz);

        for mesh in &self.meshes {
            let screens: Vec<Screen> = mesh
                .vertices()
                .iter()
                .map(|&p| {
                    let ndc = vp.transform(p);
                    Screen {
                        x: w / 2.0 + ndc.x * scale,
                        y: h / 2.0 + ndc.y * scale,
                        depth: view.transform(p).z,
                    }
                })
                .collect();

            for face in mesh.faces() {
                let [i0, i1, i2] = face.indices;
                let (a, b, c) = (screens[i0], screens[i1], screens[i2]);

                // No near-plane clipping: a face is dropped whole as soon
                // as any corner crosses the plane.
                if a.depth < self.camera.near()
                    || b.depth < self.camera.near()
                    || c.depth < self.camera.near()
                {
                    continue;
                }
                let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
                if self.cull_backfaces && cross > 0.0 {
                    continue;
                }
                let min_x = a.x.min(b.x).min(c.x);
                let max_x = a.x.max(b.x).max(c.x);
                let min_y = a.y.min(b.y).min(c.y);
                let max_y = a.y.max(b.y).max(c.y);
                if max_x < 0.0 || min_x >= w || max_y < 0.0 || min_y >= h {
                    continue;
                }

                let (v0, v1, v2) = mesh.corners(face);
                let normal = (v1 - v0).cross(v2 - v0).normalize();
                let intensity = self.light.shade(normal);

                if matches!(self.mode, RenderMode::Filled | RenderMode::Both) {
                    fill_triangle(surf, &mut depth, sz, (a, b, c), |u, v| {
                        self.cell_for(face, intensity, u, v)
                    });
                }
                if matches!(self.mode, RenderMode::Wireframe | RenderMode::Both) {
                    let (ch, style) = self.cell_for(face, intensity, 0.0, 0.0);
                    for (p, q) in [(a, b), (b, c), (c, a)] {
                        draw_line(surf, &mut depth, sz, p, q, ch, style);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Integer Bresenham with linearly interpolated depth along the run.
fn draw_line(
    surf: &mut Surface<'_>,
    depth: &mut DepthBuffer,
    sz: Expanse,
    p: Screen,
    q: Screen,
    ch: char,
    style: Style,
) {
    let (x0, y0) = (p.x.round() as i64, p.y.round() as i64);
    let (x1, y1) = (q.x.round() as i64, q.y.round() as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let steps = dx.max(-dy).max(1) as f64;
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    let mut step = 0.0;
    loop {
        let t = step / steps;
        let z = p.depth + (q.depth - p.depth) * t;
        if x >= 0
            && y >= 0
            && (x as u64) < u64::from(sz.w)
            && (y as u64) < u64::from(sz.h)
            && depth.test_and_set(x as u32, y as u32, z)
        {
            surf.put_styled(x as i32, y as i32, ch, style);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        step += 1.0;
    }
}

/// Scanline fill: for each row in the triangle's vertical span, intersect
/// the row with the three edges and walk the min..max span, depth-testing
/// each cell with barycentric-interpolated depth. The cell callback
/// receives the barycentric (u, v) of the second and third vertices.
fn fill_triangle<F>(
    surf: &mut Surface<'_>,
    depth: &mut DepthBuffer,
    sz: Expanse,
    (a, b, c): (Screen, Screen, Screen),
    cell: F,
) where
    F: Fn(f64, f64) -> (char, Style),
{
    // 2x2 solve for barycentric weights; a degenerate (collinear)
    // triangle has nothing to fill.
    let denom = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);
    if denom.abs() < f64::EPSILON {
        return;
    }

    let y_lo = a.y.min(b.y).min(c.y).ceil().max(0.0) as i64;
    let y_hi = a.y.max(b.y).max(c.y).floor().min(f64::from(sz.h) - 1.0) as i64;
    for y in y_lo..=y_hi {
        let fy = y as f64;
        let mut span: Option<(f64, f64)> = None;
        for (p, q) in [(a, b), (b, c), (c, a)] {
            if (p.y <= fy) == (q.y <= fy) || p.y == q.y {
                continue;
            }
            let x = p.x + (fy - p.y) * (q.x - p.x) / (q.y - p.y);
            span = Some(match span {
                None => (x, x),
                Some((lo, hi)) => (lo.min(x), hi.max(x)),
            });
        }
        let Some((lo, hi)) = span else { continue };
        let x_lo = lo.ceil().max(0.0) as i64;
        let x_hi = hi.floor().min(f64::from(sz.w) - 1.0) as i64;
        for x in x_lo..=x_hi {
            let fx = x as f64;
            let w0 = ((b.y - c.y) * (fx - c.x) + (c.x - b.x) * (fy - c.y)) / denom;
            let w1 = ((c.y - a.y) * (fx - c.x) + (a.x - c.x) * (fy - c.y)) / denom;
            let w2 = 1.0 - w0 - w1;
            let z = w0 * a.depth + w1 * b.depth + w2 * c.depth;
            if depth.test_and_set(x as u32, y as u32, z) {
                let (ch, style) = cell(w1, w2);
                surf.put_styled(x as i32, y as i32, ch, style);
            }
        }
    }
}
