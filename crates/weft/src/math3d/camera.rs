use super::{Mat4, Vec3};
use crate::{Error, Result};

/// A perspective camera with Euler rotation (pitch, yaw, roll in radians).
///
/// Yaw zero looks along +z; visible view-space points have positive z and
/// the projection's homogeneous w is negative, which the screen mapping in
/// the render pipelines accounts for.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    fov: f64,
    near: f64,
    far: f64,
}

impl Camera {
    /// Construct a camera. `fov` is the vertical field of view in radians
    /// and must lie in (0, π); `near` must be positive and `far` beyond it.
    pub fn new(position: Vec3, fov: f64, near: f64, far: f64) -> Result<Self> {
        if !(fov > 0.0 && fov < std::f64::consts::PI) {
            return Err(Error::Invalid(format!("field of view {fov} out of range")));
        }
        if near <= 0.0 {
            return Err(Error::Invalid(format!("near plane {near} must be positive")));
        }
        if far <= near {
            return Err(Error::Invalid(format!(
                "far plane {far} must exceed near plane {near}"
            )));
        }
        Ok(Self {
            position,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            fov,
            near,
            far,
        })
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    /// World-to-camera transform: translate the world so the camera sits
    /// at the origin, then undo the camera's own rotation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::rotation_z(-self.roll)
            .mul(Mat4::rotation_y(-self.yaw))
            .mul(Mat4::rotation_x(-self.pitch))
            .mul(Mat4::translation(
                -self.position.x,
                -self.position.y,
                -self.position.z,
            ))
    }

    /// The inverse of the view rotation, for carrying camera-space
    /// directions into world space.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::rotation_x(self.pitch)
            .mul(Mat4::rotation_y(self.yaw))
            .mul(Mat4::rotation_z(self.roll))
    }

    pub fn perspective_matrix(&self, aspect: f64) -> Mat4 {
        Mat4::perspective(self.fov, aspect, self.near, self.far)
    }

    fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * cp, -sp, cy * cp)
    }

    fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        Vec3::new(cy, 0.0, -sy)
    }

    fn up(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(sy * sp, cp, cy * sp)
    }

    pub fn move_forward(&mut self, distance: f64) {
        self.position = self.position + self.forward() * distance;
    }

    pub fn move_right(&mut self, distance: f64) {
        self.position = self.position + self.right() * distance;
    }

    pub fn move_up(&mut self, distance: f64) {
        self.position = self.position + self.up() * distance;
    }

    /// Point the camera at `target` by deriving yaw and pitch from the
    /// direction vector. Roll is reset to zero. Aiming straight up or down
    /// degenerates gracefully (yaw keeps whatever atan2 reports for a
    /// near-zero horizontal component).
    pub fn look_at(&mut self, target: Vec3) {
        let d = (target - self.position).normalize();
        if d == Vec3::ZERO {
            return;
        }
        self.yaw = d.x.atan2(d.z);
        self.pitch = (-d.y).asin();
        self.roll = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cam(pos: Vec3) -> Camera {
        Camera::new(pos, std::f64::consts::FRAC_PI_2, 0.1, 100.0).unwrap()
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn rejects_bad_construction() {
        assert!(Camera::new(Vec3::ZERO, 0.0, 0.1, 100.0).is_err());
        assert!(Camera::new(Vec3::ZERO, 4.0, 0.1, 100.0).is_err());
        assert!(Camera::new(Vec3::ZERO, 1.0, 0.0, 100.0).is_err());
        assert!(Camera::new(Vec3::ZERO, 1.0, 5.0, 1.0).is_err());
    }

    #[test]
    fn view_matrix_centers_camera() {
        let mut c = cam(Vec3::new(0.0, 0.0, 5.0));
        c.look_at(Vec3::ZERO);
        // The looked-at point lands on the view axis in front of the
        // camera at its distance.
        let p = c.view_matrix().transform(Vec3::ZERO);
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
        assert!((p.z.abs() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn look_at_derives_yaw_and_pitch() {
        let mut c = cam(Vec3::ZERO);
        c.look_at(Vec3::new(1.0, 0.0, 1.0));
        assert!((c.yaw - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
        assert!(c.pitch.abs() < 1e-9);

        c.look_at(Vec3::new(0.0, -1.0, 1.0));
        assert!((c.pitch - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
    }

    #[test]
    fn move_forward_follows_yaw() {
        let mut c = cam(Vec3::ZERO);
        c.move_forward(2.0);
        assert!(approx(c.position, Vec3::new(0.0, 0.0, 2.0)));

        c.yaw = std::f64::consts::FRAC_PI_2;
        c.move_forward(1.0);
        assert!(approx(c.position, Vec3::new(1.0, 0.0, 2.0)));
    }

    #[test]
    fn move_right_is_orthogonal_to_forward() {
        let mut c = cam(Vec3::ZERO);
        c.yaw = 0.3;
        c.pitch = -0.2;
        let f = c.forward();
        let r = c.right();
        assert!(f.dot(r).abs() < 1e-12);
    }

    #[test]
    fn look_at_own_position_is_noop() {
        let mut c = cam(Vec3::new(1.0, 2.0, 3.0));
        c.yaw = 0.5;
        c.look_at(Vec3::new(1.0, 2.0, 3.0));
        assert!((c.yaw - 0.5).abs() < 1e-12);
    }
}
