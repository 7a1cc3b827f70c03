use std::sync::Arc;

use glam::{Quat, Vec3};

use crate::animation::clip::{AnimationClip, TargetPath, TrackData};
use crate::animation::tracks::KeyframeCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// A scheduled linear weight ramp. At most one is in flight per action;
/// scheduling a new fade replaces any pending one.
#[derive(Debug, Clone, Copy)]
struct WeightFade {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

/// A playable, seekable handle over a shared [`AnimationClip`].
///
/// Actions start disabled; [`play`](Self::play) or
/// [`fade_in`](Self::fade_in) make them run. A fade-out that reaches zero
/// weight disables the action again.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub weight: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    fade: Option<WeightFade>,
    track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            weight: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: false,
            fade: None,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Starts (or resumes) playback at the current time and weight.
    pub fn play(&mut self) {
        self.enabled = true;
        self.paused = false;
    }

    /// Stops playback and cancels any pending fade.
    pub fn stop(&mut self) {
        self.enabled = false;
        self.fade = None;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Rewinds to the clip start, clears pause/disable state and cancels
    /// any pending fade. Weight is left untouched.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
        self.fade = None;
    }

    /// Schedules a weight ramp to full over `duration` seconds and starts
    /// playback. The ramp starts from zero, or from the in-flight weight if
    /// it interrupts another fade.
    pub fn fade_in(&mut self, duration: f32) {
        let from = if self.fade.is_some() { self.weight } else { 0.0 };
        self.weight = from;
        self.fade = Some(WeightFade {
            from,
            to: 1.0,
            duration,
            elapsed: 0.0,
        });
        self.play();
    }

    /// Schedules a weight ramp from the current weight to zero over
    /// `duration` seconds. When the ramp completes the action is disabled.
    pub fn fade_out(&mut self, duration: f32) {
        self.fade = Some(WeightFade {
            from: self.weight,
            to: 0.0,
            duration,
            elapsed: 0.0,
        });
    }

    /// Whether a weight ramp is pending.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Advances the pending fade and the clip clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.advance_fade(dt);

        if self.paused || !self.enabled {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;

        match self.loop_mode {
            LoopMode::Once => {
                // Play once, stop at either end
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    // Reverse playback wraps from the end
                    self.time = duration + (self.time % duration);
                }
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let mut t = self.time % double_duration;
                if t < 0.0 {
                    t += double_duration;
                }
                // Second half of the cycle runs backwards
                if t > duration {
                    t = double_duration - t;
                }
                self.time = t;
            }
        }
    }

    fn advance_fade(&mut self, dt: f32) {
        let Some(mut fade) = self.fade else {
            return;
        };

        fade.elapsed += dt;
        let t = if fade.duration > 0.0 {
            (fade.elapsed / fade.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.weight = fade.from + (fade.to - fade.from) * t;

        if t >= 1.0 {
            self.fade = None;
            if fade.to <= 0.0 {
                self.enabled = false;
            }
        } else {
            self.fade = Some(fade);
        }
    }

    /// Samples the clip's translation track at the current time, if any.
    pub fn sample_translation(&mut self) -> Option<Vec3> {
        let clip = self.clip.clone();
        for (i, track) in clip.tracks.iter().enumerate() {
            if track.target != TargetPath::Translation {
                continue;
            }
            if let TrackData::Vector3(t) = &track.data {
                return Some(t.sample_with_cursor(self.time, &mut self.track_cursors[i]));
            }
        }
        None
    }

    /// Samples the clip's rotation track at the current time, if any.
    pub fn sample_rotation(&mut self) -> Option<Quat> {
        let clip = self.clip.clone();
        for (i, track) in clip.tracks.iter().enumerate() {
            if track.target != TargetPath::Rotation {
                continue;
            }
            if let TrackData::Quaternion(t) = &track.data {
                return Some(t.sample_with_cursor(self.time, &mut self.track_cursors[i]));
            }
        }
        None
    }

    /// Samples the clip's scale track at the current time, if any.
    pub fn sample_scale(&mut self) -> Option<Vec3> {
        let clip = self.clip.clone();
        for (i, track) in clip.tracks.iter().enumerate() {
            if track.target != TargetPath::Scale {
                continue;
            }
            if let TrackData::Vector3(t) = &track.data {
                return Some(t.sample_with_cursor(self.time, &mut self.track_cursors[i]));
            }
        }
        None
    }
}
