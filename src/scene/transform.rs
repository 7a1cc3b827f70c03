use glam::{Affine3A, Mat3, Quat, Vec3};

/// TRS transform with a cached local matrix and shadow-state dirty checking.
///
/// The public `position` / `rotation` / `scale` fields are free to mutate;
/// [`update_local_matrix`](Self::update_local_matrix) recomputes the cached
/// matrix only when one of them actually changed since the last call.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,

    local_matrix: Affine3A,

    // Shadow state for the dirty check
    last_position: Vec3,
    last_rotation: Quat,
    last_scale: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,

            local_matrix: Affine3A::IDENTITY,

            last_position: Vec3::ZERO,
            last_rotation: Quat::IDENTITY,
            last_scale: Vec3::ONE,
            force_update: true,
        }
    }

    /// Recomputes the cached local matrix if any TRS component changed.
    /// Returns whether a recompute happened.
    pub fn update_local_matrix(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.scale != self.last_scale
            || self.force_update;

        if changed {
            self.local_matrix = Affine3A::from_scale_rotation_translation(
                self.scale,
                self.rotation,
                self.position,
            );

            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.last_scale = self.scale;
            self.force_update = false;
        }

        changed
    }

    #[inline]
    #[must_use]
    pub fn local_matrix(&self) -> &Affine3A {
        &self.local_matrix
    }

    /// Forces a matrix recompute on the next [`update_local_matrix`](Self::update_local_matrix).
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }

    /// The world direction this transform faces (`rotation * -Z`).
    #[inline]
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Orients the transform to face `target`.
    ///
    /// `target` and `up` are expressed in the same space as `position`.
    /// Degenerate configurations (forward parallel to `up`) leave the
    /// rotation untouched.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize();

        if forward.cross(up).length_squared() < 1e-4 {
            return;
        }

        let right = forward.cross(up).normalize();
        let new_up = right.cross(forward).normalize();

        let rot_mat = Mat3::from_cols(right, new_up, -forward);
        self.rotation = Quat::from_mat3(&rot_mat);
    }

    /// Rotates toward `target` by at most `max_angle` radians.
    ///
    /// Within `max_angle` of the target the rotation snaps exactly onto it,
    /// so repeated calls converge in finitely many steps.
    pub fn rotate_towards(&mut self, target: Quat, max_angle: f32) {
        let angle = self.rotation.angle_between(target);
        if angle <= max_angle || angle <= f32::EPSILON {
            self.rotation = target;
        } else {
            self.rotation = self.rotation.slerp(target, max_angle / angle);
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
