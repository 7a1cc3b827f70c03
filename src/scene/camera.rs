use glam::{Affine3A, Mat4};

use crate::scene::Transform;

/// Perspective camera.
///
/// Projection state lives here; the camera's placement in the world is an
/// ordinary [`Transform`] owned by the caller, fed in through
/// [`update_view_matrix`](Self::update_view_matrix).
#[derive(Debug, Clone)]
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    projection_matrix: Mat4,
    view_matrix: Mat4,
}

impl Camera {
    /// Creates a perspective camera. `fov_degrees` is converted to radians.
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// Recomputes the projection matrix after `fov` / `aspect` / plane changes.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    /// view = world inverse
    pub fn update_view_matrix(&mut self, transform: &Transform) {
        let world = Affine3A::from_scale_rotation_translation(
            transform.scale,
            transform.rotation,
            transform.position,
        );
        self.view_matrix = Mat4::from(world.inverse());
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }
}
