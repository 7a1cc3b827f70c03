pub mod action;
pub mod clip;
pub mod mixer;
pub mod player;
pub mod tracks;

pub use action::{AnimationAction, LoopMode};
pub use clip::{AnimationClip, TargetPath, Track, TrackData};
pub use mixer::AnimationMixer;
pub use player::AnimationPlayer;
pub use tracks::{Interpolatable, InterpolationMode, KeyframeCursor, KeyframeTrack};
