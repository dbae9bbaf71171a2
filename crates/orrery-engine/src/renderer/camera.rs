use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};
use crate::core::viewport::Viewport;

/// Perspective camera.
/// Right-handed, looks down its local -Z, depth mapped to [0, 1].
#[derive(Debug, Clone)]
pub struct Camera3D {
    /// Eye position in world space.
    pub position: Vec3,
    /// World-from-camera rotation.
    pub orientation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height of the viewport.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
/// 36 floats: view matrix, projection matrix, eye position (w = 1).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 36;
}

impl Default for CameraUniform {
    fn default() -> Self {
        Camera3D::default().uniform()
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::perspective(75.0, 800.0 / 600.0, 0.1, 1000.0)
    }
}

impl Camera3D {
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            fov_y: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set orientation from Euler angles (radians, XYZ order).
    pub fn set_euler(&mut self, x: f32, y: f32, z: f32) {
        self.orientation = Quat::from_euler(EulerRot::XYZ, x, y, z);
    }

    /// Orientation as Euler angles (radians, XYZ order).
    pub fn euler(&self) -> Vec3 {
        let (x, y, z) = self.orientation.to_euler(EulerRot::XYZ);
        Vec3::new(x, y, z)
    }

    /// Rotate so the camera faces `target`, keeping world +Y as up.
    /// When looking straight down the Y axis, ±Z stands in for up.
    pub fn look_at(&mut self, target: Vec3) {
        let dir = target - self.position;
        if dir.length_squared() < 1e-12 {
            return;
        }
        let dir = dir.normalize();
        let up = if dir.cross(Vec3::Y).length_squared() < 1e-10 {
            Vec3::Z * dir.y.signum()
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(self.position, target, up);
        self.orientation = Quat::from_mat4(&view.inverse()).normalize();
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Fit the projection to a resized viewport.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.set_aspect(viewport.aspect());
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Project a world point to normalized device coordinates.
    /// Returns `None` for points behind the camera.
    pub fn project(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.projection_matrix() * self.view_matrix() * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view_matrix().to_cols_array_2d(),
            projection: self.projection_matrix().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn uniform_is_36_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }

    #[test]
    fn pitch_down_looks_along_negative_y() {
        let mut cam = Camera3D::default();
        cam.set_euler(-FRAC_PI_2, 0.0, 0.0);
        assert!(approx(cam.forward(), Vec3::NEG_Y), "forward = {:?}", cam.forward());
        assert!(approx(cam.euler(), Vec3::new(-FRAC_PI_2, 0.0, 0.0)));
    }

    #[test]
    fn look_at_faces_target() {
        let mut cam = Camera3D::default().with_position(Vec3::new(0.0, 0.0, -120.0));
        cam.look_at(Vec3::ZERO);
        assert!(approx(cam.forward(), Vec3::Z));
        assert!(cam.up().y > 0.99);
    }

    #[test]
    fn look_at_straight_down_stays_finite() {
        let mut cam = Camera3D::default().with_position(Vec3::new(0.0, 50.0, 0.0));
        cam.look_at(Vec3::ZERO);
        assert!(cam.orientation.is_finite());
        assert!(approx(cam.forward(), Vec3::NEG_Y));
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let mut cam = Camera3D::default().with_position(Vec3::new(3.0, 4.0, 5.0));
        cam.look_at(Vec3::ZERO);
        let eye = cam.view_matrix().transform_point3(cam.position);
        assert!(approx(eye, Vec3::ZERO));
    }

    #[test]
    fn target_projects_to_screen_center() {
        let mut cam = Camera3D::default().with_position(Vec3::new(0.0, 0.0, -120.0));
        cam.look_at(Vec3::ZERO);
        let ndc = cam.project(Vec3::ZERO).unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
        assert!(cam.project(Vec3::new(0.0, 0.0, -500.0)).is_none());
    }

    #[test]
    fn resize_updates_projection() {
        let mut cam = Camera3D::default();
        let before = cam.projection_matrix();
        cam.resize(&Viewport::new(1920.0, 1080.0, 1.0));
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
        assert_ne!(before, cam.projection_matrix());
    }

    #[test]
    fn invalid_aspect_is_ignored() {
        let mut cam = Camera3D::default();
        cam.set_aspect(f32::NAN);
        cam.set_aspect(0.0);
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
    }
}
