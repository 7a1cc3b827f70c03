//! Character motion controller.
//!
//! One update per rendered frame: pick the animation state for the pressed
//! keys, crossfade into it on change, then steer and move the model
//! relative to the orbiting camera. The controller holds no scene objects
//! itself; everything it mutates is passed in per call.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use glam::{Quat, Vec3};

use crate::animation::AnimationPlayer;
use crate::controls::orbit::OrbitControls;
use crate::input::{Input, Key};
use crate::scene::Transform;

/// Immutable motion tuning for [`CharacterControls`].
///
/// The three clip names must all be registered with whatever
/// [`AnimationPlayer`] drives playback; an unregistered name is a contract
/// violation and the player will panic on first use.
#[derive(Debug, Clone)]
pub struct MotionConfig {
    pub idle_clip: String,
    pub walk_clip: String,
    pub run_clip: String,

    /// Ground speed while walking, units per second.
    pub walk_speed: f32,
    /// Ground speed while running, units per second.
    pub run_speed: f32,
    /// Crossfade length in seconds for state transitions.
    pub fade_duration: f32,
    /// Maximum facing change per frame, radians.
    pub rotate_step: f32,
    /// Vertical offset of the orbit look-at target above the model origin.
    pub eye_height: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            idle_clip: "Idle".to_owned(),
            walk_clip: "Walking".to_owned(),
            run_clip: "Run".to_owned(),
            walk_speed: 2.0,
            run_speed: 5.0,
            fade_duration: 0.2,
            rotate_step: 0.2,
            eye_height: 1.0,
        }
    }
}

/// Per-frame snapshot of the four direction keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Reads the W/S/A/D binding from an [`Input`] snapshot.
    #[must_use]
    pub fn from_input(input: &Input) -> Self {
        Self {
            forward: input.get_key(Key::W),
            backward: input.get_key(Key::S),
            left: input.get_key(Key::A),
            right: input.get_key(Key::D),
        }
    }

    /// Whether any direction key is held.
    #[must_use]
    pub fn any(self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Angular correction applied to camera-forward for 8-way movement.
///
/// Forward and backward take priority over pure strafes, so simultaneous
/// opposite keys resolve to whichever branch is checked first.
#[must_use]
pub fn direction_offset(intent: MoveIntent) -> f32 {
    if intent.forward {
        if intent.left {
            FRAC_PI_4
        } else if intent.right {
            -FRAC_PI_4
        } else {
            0.0
        }
    } else if intent.backward {
        if intent.left {
            FRAC_PI_4 + FRAC_PI_2
        } else if intent.right {
            -FRAC_PI_4 - FRAC_PI_2
        } else {
            PI
        }
    } else if intent.left {
        FRAC_PI_2
    } else if intent.right {
        -FRAC_PI_2
    } else {
        0.0
    }
}

/// State machine over the registered clips: Idle, Walking or Running each
/// frame, extensible to any clip names via [`MotionConfig`].
pub struct CharacterControls {
    config: MotionConfig,
    current_action: String,
    run_toggled: bool,
}

impl CharacterControls {
    /// Starts the idle clip on `player` and begins in the idle state.
    pub fn new(config: MotionConfig, player: &mut impl AnimationPlayer) -> Self {
        player.play(&config.idle_clip);
        let current_action = config.idle_clip.clone();
        Self {
            config,
            current_action,
            run_toggled: false,
        }
    }

    /// Flips the persistent walk/run selector. External lifecycle: called
    /// on a modifier-key press, not sampled per frame.
    pub fn switch_run_toggle(&mut self) {
        self.run_toggled = !self.run_toggled;
        log::debug!("run toggle: {}", self.run_toggled);
    }

    #[must_use]
    pub fn run_toggled(&self) -> bool {
        self.run_toggled
    }

    /// Name of the clip currently playing.
    #[must_use]
    pub fn current_action(&self) -> &str {
        &self.current_action
    }

    #[must_use]
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Per-frame update.
    ///
    /// Selects the target state, crossfades if it changed, advances the
    /// animation clock, and — while in a moving state — turns the model
    /// toward the camera-relative movement direction, displaces model and
    /// camera together, and re-targets the orbit rig at eye height.
    pub fn update(
        &mut self,
        dt: f32,
        intent: MoveIntent,
        player: &mut impl AnimationPlayer,
        model: &mut Transform,
        camera: &mut Transform,
        orbit: &mut OrbitControls,
    ) {
        if self.current_action != self.target_clip(intent) {
            let target = self.target_clip(intent).to_owned();
            log::debug!("animation transition: {} -> {}", self.current_action, target);
            player.crossfade(&self.current_action, &target, self.config.fade_duration);
            self.current_action = target;
        }

        player.advance(dt);

        if self.is_moving() {
            // Yaw from the model toward the camera, on the ground plane
            let to_camera = camera.position - model.position;
            let yaw_to_camera = to_camera.x.atan2(to_camera.z);
            let offset = direction_offset(intent);

            // Bounded turn, not a snap
            model.rotate_towards(
                Quat::from_rotation_y(yaw_to_camera + offset),
                self.config.rotate_step,
            );

            // Camera forward flattened to the ground plane, swung by the offset
            let mut dir = camera.forward();
            dir.y = 0.0;
            dir = dir.normalize_or_zero();
            dir = Quat::from_rotation_y(offset) * dir;

            let speed = if self.current_action == self.config.run_clip {
                self.config.run_speed
            } else {
                self.config.walk_speed
            };
            let displacement = dir * speed * dt;

            model.position.x += displacement.x;
            model.position.z += displacement.z;
            model.mark_dirty();

            // Drag the camera by the same displacement so framing is preserved
            camera.position.x += displacement.x;
            camera.position.z += displacement.z;
            camera.mark_dirty();
        }

        orbit.set_target(model.position + Vec3::Y * self.config.eye_height);
    }

    fn target_clip(&self, intent: MoveIntent) -> &str {
        if !intent.any() {
            &self.config.idle_clip
        } else if self.run_toggled {
            &self.config.run_clip
        } else {
            &self.config.walk_clip
        }
    }

    fn is_moving(&self) -> bool {
        self.current_action == self.config.walk_clip
            || self.current_action == self.config.run_clip
    }
}
