//! Strider — camera-relative character motion controls.
//!
//! The crate centers on one per-frame routine: [`CharacterControls::update`]
//! picks the animation state for the current key set, crossfades into it
//! when the state changes, and moves a character relative to an orbiting
//! camera. Around that sit the pieces a demo needs to drive it:
//!
//! - [`animation`]: keyframe tracks, clips, fadeable actions and the
//!   name-keyed [`AnimationMixer`] registry
//! - [`controls`]: the character controller and an orbit camera controller
//! - [`scene`]: transform and perspective-camera primitives
//! - [`input`]: platform-agnostic input state, fed by an adapter
//! - [`app`] (feature `winit`, default on): a windowed frame loop

pub mod animation;
pub mod controls;
pub mod errors;
pub mod input;
pub mod scene;
pub mod utils;

#[cfg(feature = "winit")]
pub mod app;

pub use animation::{AnimationAction, AnimationClip, AnimationMixer, AnimationPlayer, LoopMode};
pub use controls::{CharacterControls, MotionConfig, MoveIntent, OrbitControls};
pub use errors::{Result, StriderError};
pub use input::{ButtonState, Input, Key, MouseButton};
pub use scene::{Camera, Transform};
pub use utils::FrameClock;

#[cfg(feature = "winit")]
pub use app::App;
