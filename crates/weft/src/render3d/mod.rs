//! 3D-to-character rendering: a rasterized pipeline, a ray-traced
//! pipeline, and a 2D grid raycaster, each as a paintable canvas.

mod raster;
mod raycast;
mod raytrace;

pub use raster::MeshCanvas;
pub use raycast::{MapGrid, WallCanvas};
pub use raytrace::RayCanvas;

use crate::math3d::Vec3;

/// How the rasterized pipeline draws faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    Wireframe,
    #[default]
    Filled,
    Both,
}

/// Which source wins when both a texture and the brightness ramp could
/// supply the character for a cell. The rasterized pipeline lets the
/// texture decide; the ray-traced pipeline lets shading decide. The two
/// pipelines deliberately differ, so the choice is named rather than
/// implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharPolicy {
    TextureWins,
    ShadingWins,
}

impl CharPolicy {
    pub(crate) fn resolve(self, texture: Option<char>, ramp: char) -> char {
        match self {
            Self::TextureWins => texture.unwrap_or(ramp),
            Self::ShadingWins => ramp,
        }
    }
}

/// A single directional light with an ambient floor.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub direction: Vec3,
    pub intensity: f64,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, 0.0, 1.0),
            intensity: 1.0,
        }
    }
}

impl Light {
    /// Lambertian intensity for a surface normal, floored by the ambient
    /// term.
    pub(crate) fn shade(&self, normal: Vec3) -> f64 {
        let l = self.direction.normalize();
        (normal.dot(l).max(0.0) * self.intensity).max(AMBIENT)
    }
}

pub(crate) const AMBIENT: f64 = 0.2;

/// Brightness-banded block characters used by the rasterized pipeline.
pub(crate) fn fill_ramp(intensity: f64) -> char {
    if intensity >= 0.8 {
        '█'
    } else if intensity >= 0.6 {
        '▓'
    } else if intensity >= 0.4 {
        '▒'
    } else if intensity >= 0.2 {
        '░'
    } else {
        '·'
    }
}

/// ASCII shading ramp used by the ray-traced pipeline.
pub(crate) fn trace_ramp(intensity: f64) -> char {
    if intensity >= 0.8 {
        '#'
    } else if intensity >= 0.6 {
        '+'
    } else if intensity >= 0.4 {
        '-'
    } else if intensity >= 0.2 {
        '.'
    } else {
        ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_band_at_thresholds() {
        assert_eq!(fill_ramp(1.0), '█');
        assert_eq!(fill_ramp(0.7), '▓');
        assert_eq!(fill_ramp(0.5), '▒');
        assert_eq!(fill_ramp(0.3), '░');
        assert_eq!(fill_ramp(0.1), '·');
        assert_eq!(trace_ramp(0.9), '#');
        assert_eq!(trace_ramp(0.0), ' ');
    }

    #[test]
    fn policies_resolve_as_named() {
        assert_eq!(CharPolicy::TextureWins.resolve(Some('t'), 'r'), 't');
        assert_eq!(CharPolicy::TextureWins.resolve(None, 'r'), 'r');
        assert_eq!(CharPolicy::ShadingWins.resolve(Some('t'), 'r'), 'r');
    }

    #[test]
    fn shade_floors_at_ambient() {
        let l = Light::default();
        assert_eq!(l.shade(Vec3::new(0.0, 0.0, -1.0)), AMBIENT);
        assert!((l.shade(Vec3::new(0.0, 0.0, 1.0)) - 1.0).abs() < 1e-12);
    }
}
