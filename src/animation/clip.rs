use glam::{Quat, Vec3};

use crate::animation::tracks::KeyframeTrack;

/// Which transform channel a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
}

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

#[derive(Debug, Clone)]
pub struct Track {
    pub target: TargetPath,
    pub data: TrackData,
}

/// A named, time-parameterized animation sequence.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Builds a clip; the duration is the latest keyframe time across tracks.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| match &t.data {
                TrackData::Vector3(track) => track.end_time(),
                TrackData::Quaternion(track) => track.end_time(),
            })
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// A trackless clip with an explicit duration, for clips whose sampled
    /// data lives in an external backend.
    #[must_use]
    pub fn with_duration(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
            tracks: Vec::new(),
        }
    }
}
