use super::Vec3;

/// Row-major 4×4 transform. `a.mul(b)` composes so that applying the
/// result is equivalent to applying `b` first, then `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub m: [[f64; 4]; 4],
}

impl Mat4 {
    pub fn identity() -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { m }
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut r = Self::identity();
        r.m[0][3] = x;
        r.m[1][3] = y;
        r.m[2][3] = z;
        r
    }

    pub fn scaling(x: f64, y: f64, z: f64) -> Self {
        let mut r = Self::identity();
        r.m[0][0] = x;
        r.m[1][1] = y;
        r.m[2][2] = z;
        r
    }

    /// Right-handed rotation about the x axis, angle in radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut r = Self::identity();
        r.m[1][1] = c;
        r.m[1][2] = -s;
        r.m[2][1] = s;
        r.m[2][2] = c;
        r
    }

    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut r = Self::identity();
        r.m[0][0] = c;
        r.m[0][2] = s;
        r.m[2][0] = -s;
        r.m[2][2] = c;
        r
    }

    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut r = Self::identity();
        r.m[0][0] = c;
        r.m[0][1] = -s;
        r.m[1][0] = s;
        r.m[1][1] = c;
        r
    }

    /// OpenGL-style perspective projection. `fov` is the vertical field of
    /// view in radians. Points transformed by this matrix carry a
    /// homogeneous w that [`Mat4::transform`] divides out.
    pub fn perspective(fov: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fov / 2.0).tan();
        let mut r = Self { m: [[0.0; 4]; 4] };
        r.m[0][0] = f / aspect;
        r.m[1][1] = f;
        r.m[2][2] = (far + near) / (near - far);
        r.m[2][3] = 2.0 * far * near / (near - far);
        r.m[3][2] = -1.0;
        r
    }

    pub fn mul(self, other: Self) -> Self {
        let mut r = Self { m: [[0.0; 4]; 4] };
        for i in 0..4 {
            for j in 0..4 {
                for (k, row) in other.m.iter().enumerate() {
                    r.m[i][j] += self.m[i][k] * row[j];
                }
            }
        }
        r
    }

    /// Apply the full transform including the translation column, then
    /// divide by the homogeneous w. When w is zero the divide is skipped;
    /// the point is at infinity, not an error.
    pub fn transform(self, p: Vec3) -> Vec3 {
        let mut out = [0.0; 4];
        for (i, row) in self.m.iter().enumerate() {
            out[i] = row[0] * p.x + row[1] * p.y + row[2] * p.z + row[3];
        }
        let w = out[3];
        if w != 0.0 {
            Vec3::new(out[0] / w, out[1] / w, out[2] / w)
        } else {
            Vec3::new(out[0], out[1], out[2])
        }
    }

    /// Apply only the rotational/scaling part, ignoring translation and
    /// the perspective divide. Used for direction vectors.
    pub fn transform_dir(self, d: Vec3) -> Vec3 {
        Vec3::new(
            self.m[0][0] * d.x + self.m[0][1] * d.y + self.m[0][2] * d.z,
            self.m[1][0] * d.x + self.m[1][1] * d.y + self.m[1][2] * d.z,
            self.m[2][0] * d.x + self.m[2][1] * d.y + self.m[2][2] * d.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Mat4, b: Mat4) -> bool {
        a.m.iter()
            .flatten()
            .zip(b.m.iter().flatten())
            .all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::rotation_y(0.7).mul(Mat4::translation(1.0, 2.0, 3.0));
        assert!(approx(Mat4::identity().mul(m), m));
        assert!(approx(m.mul(Mat4::identity()), m));
    }

    #[test]
    fn rotation_inverts() {
        let m = Mat4::rotation_x(0.9).mul(Mat4::rotation_x(-0.9));
        assert!(approx(m, Mat4::identity()));
    }

    #[test]
    fn compose_applies_right_first() {
        // rotate-then-translate vs translate-then-rotate differ.
        let p = Vec3::new(1.0, 0.0, 0.0);
        let rot = Mat4::rotation_z(std::f64::consts::FRAC_PI_2);
        let tr = Mat4::translation(1.0, 0.0, 0.0);
        let a = rot.mul(tr).transform(p);
        assert!((a.x - 0.0).abs() < 1e-9 && (a.y - 2.0).abs() < 1e-9);
        let b = tr.mul(rot).transform(p);
        assert!((b.x - 1.0).abs() < 1e-9 && (b.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn translation_moves_points() {
        let p = Mat4::translation(1.0, -2.0, 0.5).transform(Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(p, Vec3::new(2.0, -1.0, 1.5));
    }

    #[test]
    fn perspective_divides_by_w() {
        let m = Mat4::perspective(std::f64::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        // A point on the -z axis projects onto the view axis.
        let p = m.transform(Vec3::new(0.0, 0.0, -10.0));
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
        // Off-axis points scale by 1/|z|.
        let q = m.transform(Vec3::new(5.0, 0.0, -10.0));
        assert!((q.x - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_w_skips_divide() {
        let m = Mat4::perspective(std::f64::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let p = m.transform(Vec3::new(1.0, 1.0, 0.0));
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
    }

    #[test]
    fn transform_dir_ignores_translation() {
        let m = Mat4::translation(5.0, 5.0, 5.0);
        assert_eq!(
            m.transform_dir(Vec3::new(0.0, 0.0, -1.0)),
            Vec3::new(0.0, 0.0, -1.0)
        );
    }
}
