use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::input::{Input, MouseButton};
use crate::scene::Transform;

const POLAR_EPS: f32 = 0.0001;

/// Orbit camera controller.
///
/// Spherical coordinates (`theta` around +Y, `phi` from +Y) around a pivot
/// `center`; left-drag rotates with exponential damping, scroll zooms
/// within `[min_distance, max_distance]`. The camera transform is written
/// on every [`update`](Self::update): position from the spherical offset,
/// orientation looking at the pivot.
///
/// There is no panning: the pivot belongs to whoever calls
/// [`set_target`](Self::set_target) each frame.
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Upper polar limit; keep below `PI / 2` to stop the camera from
    /// dipping under the ground plane.
    pub max_polar: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 1.0,
            max_distance: 1000.0,
            max_polar: PI - POLAR_EPS,

            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Moves the pivot without touching the spherical angles, so the
    /// camera's offset from the pivot — and the framing — is preserved.
    pub fn set_target(&mut self, center: Vec3) {
        self.center = center;
    }

    /// Consumes this frame's mouse state and writes the camera transform.
    pub fn update(&mut self, transform: &mut Transform, input: &Input, dt: f32) {
        let screen_height = input.screen_size().y.max(1.0);

        if input.mouse_pressed(MouseButton::Left) {
            let rotate_per_pixel = 2.0 * PI / screen_height;
            self.rotate_delta -= input.cursor_delta() * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            let target_fps = 60.0;
            let retention = (1.0 - self.damping_factor).powf(dt * target_fps);

            let delta_apply = self.rotate_delta * (1.0 - retention);
            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        self.phi = self.phi.clamp(POLAR_EPS, self.max_polar.min(PI - POLAR_EPS));

        let scroll_y = input.scroll_delta().y;
        if scroll_y != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(scroll_y.abs());
            if scroll_y > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        }

        let offset = Vec3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        );

        transform.position = self.center + offset;
        transform.look_at(self.center, Vec3::Y);
    }
}
