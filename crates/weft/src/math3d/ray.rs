use super::Vec3;

const EPSILON: f64 = 1e-7;

/// A half-line from `origin` along `direction`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// A ray/triangle intersection. `u` and `v` are the barycentric
/// coordinates at the hit, for texture lookup; the normal is the
/// triangle's geometric normal, not interpolated.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f64,
    pub u: f64,
    pub v: f64,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Möller–Trumbore ray/triangle intersection. Near-parallel rays and
    /// hits at or behind the origin report no intersection.
    pub fn intersect_triangle(&self, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<RayHit> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let pvec = self.direction.cross(edge2);
        let det = edge1.dot(pvec);
        if det.abs() < EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        let tvec = self.origin - v0;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }
        let qvec = tvec.cross(edge1);
        let v = self.direction.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }
        let t = edge2.dot(qvec) * inv_det;
        if t <= EPSILON {
            return None;
        }
        Some(RayHit {
            point: self.origin + self.direction * t,
            normal: edge1.cross(edge2).normalize(),
            distance: t,
            u,
            v,
        })
    }
}
