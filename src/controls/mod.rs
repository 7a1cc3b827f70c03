//! Frame-driven controllers: the character motion controller and the orbit
//! camera rig it cooperates with.

pub mod character;
pub mod orbit;

pub use character::{CharacterControls, MotionConfig, MoveIntent, direction_offset};
pub use orbit::OrbitControls;
